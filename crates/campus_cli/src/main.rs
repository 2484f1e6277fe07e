//! Terminal renderer for the campus boards.
//!
//! # Responsibility
//! - Render the home, notice and profile screens as plain text.
//! - Exercise login form validation without any authentication.

use anyhow::{Context, Result};
use campus_core::{
    init_logging, sample_profile, InMemoryNoticeRepository, InMemoryTaskRepository, LoginForm,
    NoticeBoard, TaskBoard, NOTICE_BOARD_HEADING, NOTICE_BOARD_TITLE, PROFILE_TITLE,
    TASK_BOARD_HEADING, TASK_BOARD_TITLE,
};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "campus")]
#[command(version)]
#[command(about = "Render the campus app boards in a terminal", long_about = None)]
struct Args {
    /// Log level (trace|debug|info|warn|error)
    #[arg(long, env = "CAMPUS_LOG_LEVEL", default_value = campus_core::default_log_level())]
    log_level: String,

    /// Absolute directory for rolling log files; logging is off when unset
    #[arg(long, env = "CAMPUS_LOG_DIR")]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the assignment board
    Tasks {
        /// Reference date (YYYY-MM-DD); defaults to the local clock
        #[arg(long)]
        today: Option<NaiveDate>,
    },

    /// Show the notice board
    Notices {
        /// Reference date (YYYY-MM-DD); defaults to the local clock
        #[arg(long)]
        today: Option<NaiveDate>,
    },

    /// Show the student profile
    Profile,

    /// Validate login form input
    Login {
        #[arg(long, default_value = "")]
        student_id: String,

        #[arg(long, env = "CAMPUS_PASSWORD", default_value = "", hide_env_values = true)]
        password: String,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(log_dir) = args.log_dir.as_deref() {
        init_logging(&args.log_level, log_dir).context("failed to initialize logging")?;
    }

    match args.command {
        Commands::Tasks { today } => render_tasks(reference_now(today)),
        Commands::Notices { today } => render_notices(reference_now(today)),
        Commands::Profile => {
            render_profile();
            Ok(())
        }
        Commands::Login {
            student_id,
            password,
        } => {
            let login = LoginForm::new(student_id, password).validate()?;
            println!("학번 {} 확인 완료", login.student_id);
            Ok(())
        }
    }
}

fn reference_now(today: Option<NaiveDate>) -> NaiveDateTime {
    match today {
        Some(date) => date.and_time(NaiveTime::MIN),
        None => Local::now().naive_local(),
    }
}

fn render_tasks(now: NaiveDateTime) -> Result<()> {
    let board =
        TaskBoard::load(InMemoryTaskRepository::sample()).context("failed to load tasks")?;

    println!("[{TASK_BOARD_TITLE}] {TASK_BOARD_HEADING}");
    println!("{}", board.subtitle());
    if let Some(empty) = board.empty_state() {
        println!("{empty}");
    }
    for card in board.cards(now) {
        println!();
        println!(
            "[{}] {}  {}  ({})",
            card.priority_label, card.course, card.title, card.priority_color
        );
        println!("  {}", card.description);
        println!("  {}", card.deadline_text);
    }
    Ok(())
}

fn render_notices(now: NaiveDateTime) -> Result<()> {
    let board = NoticeBoard::load(InMemoryNoticeRepository::sample())
        .context("failed to load notices")?;

    println!("[{NOTICE_BOARD_TITLE}] {NOTICE_BOARD_HEADING}");
    println!("{}", board.subtitle());
    if let Some(empty) = board.empty_state() {
        println!("{empty}");
    }
    for card in board.cards(now) {
        let mark = if card.is_important { " !" } else { "" };
        println!();
        println!(
            "[{}]{mark} {}  {}  ({})",
            card.category_label, card.title, card.date_text, card.category_color
        );
        println!("  {}", card.description);
        println!("  {}", card.department);
    }
    Ok(())
}

fn render_profile() {
    let profile = sample_profile();
    println!("[{PROFILE_TITLE}]");
    println!("{}", profile.name);
    println!("{}", profile.affiliation_line());
    println!("{}", profile.student_id_line());
    println!(
        "수강 과목 {} · 완료 과제 {} · 진행 중 {}",
        profile.stats.enrolled_courses,
        profile.stats.completed_tasks,
        profile.stats.in_progress_tasks
    );
    println!();
    println!("설정: {}", profile.settings.join(", "));
    println!("정보: {}", profile.about.join(", "));
}
