//! FFI use-case API for the mobile rendering layer.
//!
//! # Responsibility
//! - Expose classification, relative dates and board projections to Dart via FRB.
//! - Validate caller input (date strings, epoch values) at this boundary.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Colors are `#RRGGBB` (or `#RRGGBBAA` for badge backgrounds) strings.
//! - `now_epoch_ms = None` means "use the device local clock".

use campus_core::{
    classify_category as classify_category_inner, classify_priority as classify_priority_inner,
    core_version as core_version_inner, format_deadline as format_deadline_inner,
    format_publication_date as format_publication_date_inner, init_logging as init_logging_inner,
    ping as ping_inner, sample_profile, InMemoryNoticeRepository, InMemoryTaskRepository,
    LoginForm, NoticeBoard, NoticeCard, TaskBoard, TaskCard, HOME_ROUTE, NOTICE_BOARD_HEADING,
    NOTICE_BOARD_TITLE, PROFILE_TITLE, TASK_BOARD_HEADING, TASK_BOARD_TITLE,
};
use chrono::{Local, NaiveDate, NaiveDateTime, TimeZone};
use log::warn;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and the error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Priority badge style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityStyleDto {
    pub color: String,
    pub label: String,
}

/// Classifies a raw task priority (`high|medium|low`, anything else = default).
#[flutter_rust_bridge::frb(sync)]
pub fn classify_priority(priority: String) -> PriorityStyleDto {
    let style = classify_priority_inner(priority.as_str());
    PriorityStyleDto {
        color: style.color.to_string(),
        label: style.label.to_string(),
    }
}

/// Classifies a raw notice category label and returns its color.
#[flutter_rust_bridge::frb(sync)]
pub fn classify_category(category: String) -> String {
    classify_category_inner(category.as_str()).color.to_string()
}

/// Result envelope for relative date formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatResponse {
    pub ok: bool,
    /// Rendered text; empty when `ok == false`.
    pub text: String,
    /// Error description; empty when `ok == true`.
    pub message: String,
}

impl FormatResponse {
    fn success(text: String) -> Self {
        Self {
            ok: true,
            text,
            message: String::new(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            text: String::new(),
            message: message.into(),
        }
    }
}

/// Renders a task deadline (`YYYY-MM-DD`) relative to now.
#[flutter_rust_bridge::frb(sync)]
pub fn format_deadline(date: String, now_epoch_ms: Option<i64>) -> FormatResponse {
    format_with(date, now_epoch_ms, format_deadline_inner)
}

/// Renders a notice publication date (`YYYY-MM-DD`) relative to now.
#[flutter_rust_bridge::frb(sync)]
pub fn format_publication_date(date: String, now_epoch_ms: Option<i64>) -> FormatResponse {
    format_with(date, now_epoch_ms, format_publication_date_inner)
}

/// One task card of the home screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskCardDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub course: String,
    pub priority_label: String,
    pub priority_color: String,
    pub badge_background: String,
    pub status_color: String,
    pub deadline_text: String,
}

/// Home screen payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskBoardDto {
    pub ok: bool,
    pub title: String,
    pub heading: String,
    pub subtitle: String,
    pub empty_state: Option<String>,
    pub cards: Vec<TaskCardDto>,
    pub message: String,
}

/// One notice card of the notice board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeCardDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub department: String,
    pub category_label: String,
    pub category_color: String,
    pub badge_background: String,
    pub is_important: bool,
    pub date_text: String,
}

/// Notice board payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeBoardDto {
    pub ok: bool,
    pub title: String,
    pub heading: String,
    pub subtitle: String,
    pub empty_state: Option<String>,
    pub cards: Vec<NoticeCardDto>,
    pub message: String,
}

/// Builds the home screen from the sample task collection.
///
/// # FFI contract
/// - Sync call, in-memory data only.
/// - Never panics; `ok=false` with a message on bad `now_epoch_ms`.
#[flutter_rust_bridge::frb(sync)]
pub fn home_board(now_epoch_ms: Option<i64>) -> TaskBoardDto {
    let built = resolve_now(now_epoch_ms).and_then(|now| {
        let board =
            TaskBoard::load(InMemoryTaskRepository::sample()).map_err(|err| err.to_string())?;
        Ok((board.subtitle(), board.empty_state(), board.cards(now)))
    });
    match built {
        Ok((subtitle, empty_state, cards)) => TaskBoardDto {
            ok: true,
            title: TASK_BOARD_TITLE.to_string(),
            heading: TASK_BOARD_HEADING.to_string(),
            subtitle,
            empty_state: empty_state.map(str::to_string),
            cards: cards.into_iter().map(to_task_card_dto).collect(),
            message: String::new(),
        },
        Err(message) => TaskBoardDto {
            ok: false,
            title: TASK_BOARD_TITLE.to_string(),
            heading: TASK_BOARD_HEADING.to_string(),
            subtitle: String::new(),
            empty_state: None,
            cards: Vec::new(),
            message: format!("home_board failed: {message}"),
        },
    }
}

/// Builds the notice board from the sample notice collection.
#[flutter_rust_bridge::frb(sync)]
pub fn notice_board(now_epoch_ms: Option<i64>) -> NoticeBoardDto {
    let built = resolve_now(now_epoch_ms).and_then(|now| {
        let board = NoticeBoard::load(InMemoryNoticeRepository::sample())
            .map_err(|err| err.to_string())?;
        Ok((board.subtitle(), board.empty_state(), board.cards(now)))
    });
    match built {
        Ok((subtitle, empty_state, cards)) => NoticeBoardDto {
            ok: true,
            title: NOTICE_BOARD_TITLE.to_string(),
            heading: NOTICE_BOARD_HEADING.to_string(),
            subtitle,
            empty_state: empty_state.map(str::to_string),
            cards: cards.into_iter().map(to_notice_card_dto).collect(),
            message: String::new(),
        },
        Err(message) => NoticeBoardDto {
            ok: false,
            title: NOTICE_BOARD_TITLE.to_string(),
            heading: NOTICE_BOARD_HEADING.to_string(),
            subtitle: String::new(),
            empty_state: None,
            cards: Vec::new(),
            message: format!("notice_board failed: {message}"),
        },
    }
}

/// Profile screen payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileDto {
    pub title: String,
    pub name: String,
    pub affiliation: String,
    pub student_id: String,
    pub enrolled_courses: u32,
    pub completed_tasks: u32,
    pub in_progress_tasks: u32,
    pub settings: Vec<String>,
    pub about: Vec<String>,
}

#[flutter_rust_bridge::frb(sync)]
pub fn profile() -> ProfileDto {
    let profile = sample_profile();
    ProfileDto {
        title: PROFILE_TITLE.to_string(),
        name: profile.name.clone(),
        affiliation: profile.affiliation_line(),
        student_id: profile.student_id_line(),
        enrolled_courses: profile.stats.enrolled_courses,
        completed_tasks: profile.stats.completed_tasks,
        in_progress_tasks: profile.stats.in_progress_tasks,
        settings: profile.settings.clone(),
        about: profile.about.clone(),
    }
}

/// Login form validation result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginResponse {
    pub ok: bool,
    /// Route to replace the login screen with on success.
    pub route: Option<String>,
    /// Alert text on failure.
    pub message: String,
}

/// Validates login form input. Does not authenticate.
#[flutter_rust_bridge::frb(sync)]
pub fn validate_login(student_id: String, password: String) -> LoginResponse {
    match LoginForm::new(student_id, password).validate() {
        Ok(_) => LoginResponse {
            ok: true,
            route: Some(HOME_ROUTE.to_string()),
            message: String::new(),
        },
        Err(err) => LoginResponse {
            ok: false,
            route: None,
            message: err.to_string(),
        },
    }
}

fn format_with(
    date: String,
    now_epoch_ms: Option<i64>,
    render: fn(NaiveDate, NaiveDateTime) -> String,
) -> FormatResponse {
    let target = match parse_date(date.as_str()) {
        Ok(target) => target,
        Err(message) => return FormatResponse::failure(message),
    };
    match resolve_now(now_epoch_ms) {
        Ok(now) => FormatResponse::success(render(target, now)),
        Err(message) => FormatResponse::failure(message),
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|err| {
        warn!("event=date_parse module=ffi status=error len={}", trimmed.len());
        format!("invalid date `{trimmed}`: {err}; expected YYYY-MM-DD")
    })
}

fn resolve_now(now_epoch_ms: Option<i64>) -> Result<NaiveDateTime, String> {
    match now_epoch_ms {
        None => Ok(Local::now().naive_local()),
        Some(epoch_ms) => Local
            .timestamp_millis_opt(epoch_ms)
            .single()
            .map(|now| now.naive_local())
            .ok_or_else(|| format!("invalid now_epoch_ms `{epoch_ms}`")),
    }
}

fn to_task_card_dto(card: TaskCard) -> TaskCardDto {
    TaskCardDto {
        id: card.id,
        title: card.title,
        description: card.description,
        course: card.course,
        priority_label: card.priority_label.to_string(),
        priority_color: card.priority_color.to_string(),
        badge_background: card.badge_background,
        status_color: card.status_color.to_string(),
        deadline_text: card.deadline_text,
    }
}

fn to_notice_card_dto(card: NoticeCard) -> NoticeCardDto {
    NoticeCardDto {
        id: card.id,
        title: card.title,
        description: card.description,
        department: card.department,
        category_label: card.category_label,
        category_color: card.category_color.to_string(),
        badge_background: card.badge_background,
        is_important: card.is_important,
        date_text: card.date_text,
    }
}
