//! Core logic for the campus student app.
//! This crate is the single source of truth for classification and
//! relative-date rules the screens render.

pub mod catalog;
pub mod classify;
pub mod logging;
pub mod model;
pub mod relative_date;
pub mod repo;
pub mod service;

pub use catalog::{sample_notices, sample_profile, sample_tasks};
pub use classify::{
    classify_category, classify_priority, task_status_color, CategoryStyle, HexColor,
    PriorityStyle, BADGE_TINT_ALPHA, IMPORTANT_MARK_COLOR,
};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::notice::{Notice, NoticeCategory};
pub use model::profile::{ProfileStats, StudentProfile};
pub use model::task::{Priority, Task, TaskStatus};
pub use relative_date::{
    deadline_bucket, format_deadline, format_publication_date, publication_bucket,
    DeadlineBucket, PublicationBucket,
};
pub use repo::notice_repo::{InMemoryNoticeRepository, NoticeRepository};
pub use repo::task_repo::{InMemoryTaskRepository, TaskRepository};
pub use repo::{RepoError, RepoResult};
pub use service::login::{LoginForm, LoginValidationError, ValidatedLogin, HOME_ROUTE};
pub use service::notice_board::{
    NoticeBoard, NoticeCard, NOTICE_BOARD_HEADING, NOTICE_BOARD_TITLE,
};
pub use service::task_board::{TaskBoard, TaskCard, TASK_BOARD_HEADING, TASK_BOARD_TITLE};

/// Navigation title of the profile screen.
pub const PROFILE_TITLE: &str = "프로필";

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
