//! Task (assignment/deadline) record shown on the home screen.
//!
//! # Invariants
//! - `deadline` is a calendar date without time-of-day.
//! - Unknown priority values decode to `Priority::Other` and keep the raw
//!   value, so re-encoding a task never rewrites its priority.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Urgency of a task, as entered by the course.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    High,
    Medium,
    Low,
    /// Any value outside the known set. Classified with the default row.
    Other(String),
}

impl Priority {
    /// Parses a raw wire value. Matching is exact; everything else is `Other`.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "high" => Self::High,
            "medium" => Self::Medium,
            "low" => Self::Low,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Other(raw) => raw.as_str(),
        }
    }
}

impl From<String> for Priority {
    fn from(value: String) -> Self {
        Self::parse(value.as_str())
    }
}

impl From<Priority> for String {
    fn from(value: Priority) -> Self {
        match value {
            Priority::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// Progress state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Not started yet.
    Pending,
    /// Work has started.
    InProgress,
}

/// Assignment or exam with a deadline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique within one task collection.
    pub id: String,
    pub title: String,
    pub description: String,
    /// Due date, interpreted at local midnight.
    pub deadline: NaiveDate,
    /// Free-text course label.
    pub course: String,
    pub priority: Priority,
    pub status: TaskStatus,
}

impl Task {
    /// Creates a pending task with the given identity, title and deadline.
    ///
    /// Remaining fields start empty (`Priority::Medium`, no description/course)
    /// and are filled through the `with_*` helpers.
    pub fn new(id: impl Into<String>, title: impl Into<String>, deadline: NaiveDate) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            deadline,
            course: String::new(),
            priority: Priority::Medium,
            status: TaskStatus::Pending,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_course(mut self, course: impl Into<String>) -> Self {
        self.course = course.into();
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    pub fn is_in_progress(&self) -> bool {
        self.status == TaskStatus::InProgress
    }
}
