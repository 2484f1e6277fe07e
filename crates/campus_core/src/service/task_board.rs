//! Home screen task board.
//!
//! # Responsibility
//! - Hold the task collection fetched from a repository.
//! - Project tasks into cards with classification colors and deadline text.
//!
//! # Invariants
//! - `refresh` replaces the collection only on success; on failure the
//!   previous collection stays visible.
//! - Cards keep repository order.

use crate::classify::task_status_color;
use crate::model::task::Task;
use crate::relative_date::format_deadline;
use crate::repo::task_repo::TaskRepository;
use crate::repo::RepoResult;
use chrono::NaiveDateTime;
use log::{info, warn};
use serde::Serialize;

/// Navigation title of the home screen.
pub const TASK_BOARD_TITLE: &str = "학사 일정";
/// Header title above the task list.
pub const TASK_BOARD_HEADING: &str = "내 과제 및 일정";
const TASK_BOARD_EMPTY_STATE: &str = "모든 과제를 완료했습니다!";

/// Render-ready projection of one task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub course: String,
    pub priority_label: &'static str,
    /// Badge text, clock icon and deadline text color.
    pub priority_color: &'static str,
    pub badge_background: String,
    pub status_color: &'static str,
    pub deadline_text: String,
}

impl TaskCard {
    pub fn from_task(task: &Task, now: NaiveDateTime) -> Self {
        let style = task.priority.style();
        Self {
            id: task.id.clone(),
            title: task.title.clone(),
            description: task.description.clone(),
            course: task.course.clone(),
            priority_label: style.label,
            priority_color: style.color.as_str(),
            badge_background: style.color.badge_background(),
            status_color: task_status_color(task.status).as_str(),
            deadline_text: format_deadline(task.deadline, now),
        }
    }
}

/// Task collection plus the projections the home screen renders.
pub struct TaskBoard<R: TaskRepository> {
    repo: R,
    tasks: Vec<Task>,
}

impl<R: TaskRepository> TaskBoard<R> {
    /// Creates a board and performs the initial fetch.
    pub fn load(repo: R) -> RepoResult<Self> {
        let tasks = repo.list_tasks()?;
        info!(
            "event=board_load module=task_board status=ok count={}",
            tasks.len()
        );
        Ok(Self { repo, tasks })
    }

    /// Re-fetches and replaces the full collection. Returns the new count.
    pub fn refresh(&mut self) -> RepoResult<usize> {
        match self.repo.list_tasks() {
            Ok(tasks) => {
                self.tasks = tasks;
                info!(
                    "event=board_refresh module=task_board status=ok count={}",
                    self.tasks.len()
                );
                Ok(self.tasks.len())
            }
            Err(err) => {
                warn!(
                    "event=board_refresh module=task_board status=error kept={} error={}",
                    self.tasks.len(),
                    err
                );
                Err(err)
            }
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// `{n}개의 항목이 있습니다`
    pub fn subtitle(&self) -> String {
        format!("{}개의 항목이 있습니다", self.tasks.len())
    }

    /// Empty-state message, only when there is nothing to show.
    pub fn empty_state(&self) -> Option<&'static str> {
        self.tasks.is_empty().then_some(TASK_BOARD_EMPTY_STATE)
    }

    pub fn cards(&self, now: NaiveDateTime) -> Vec<TaskCard> {
        self.tasks
            .iter()
            .map(|task| TaskCard::from_task(task, now))
            .collect()
    }
}
