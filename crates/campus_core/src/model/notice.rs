//! Notice (announcement) record shown on the notice board.
//!
//! # Invariants
//! - `category` is open-ended; unrecognized labels are kept verbatim in
//!   `NoticeCategory::Other` so the badge can still display them.
//! - Serialized as camelCase (`isImportant`) to match the app schema.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Publishing office category of a notice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NoticeCategory {
    /// 학사
    Academic,
    /// 장학
    Scholarship,
    /// 시설
    Facility,
    /// 취업
    Career,
    /// 학생회
    StudentCouncil,
    Other(String),
}

impl NoticeCategory {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "학사" => Self::Academic,
            "장학" => Self::Scholarship,
            "시설" => Self::Facility,
            "취업" => Self::Career,
            "학생회" => Self::StudentCouncil,
            other => Self::Other(other.to_string()),
        }
    }

    /// Display label, identical to the wire value.
    pub fn label(&self) -> &str {
        match self {
            Self::Academic => "학사",
            Self::Scholarship => "장학",
            Self::Facility => "시설",
            Self::Career => "취업",
            Self::StudentCouncil => "학생회",
            Self::Other(raw) => raw.as_str(),
        }
    }
}

impl From<String> for NoticeCategory {
    fn from(value: String) -> Self {
        Self::parse(value.as_str())
    }
}

impl From<NoticeCategory> for String {
    fn from(value: NoticeCategory) -> Self {
        value.label().to_string()
    }
}

/// School announcement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    /// Unique within one notice collection.
    pub id: String,
    pub title: String,
    pub description: String,
    /// Publication date.
    pub date: NaiveDate,
    pub category: NoticeCategory,
    pub is_important: bool,
    /// Publishing department, free text.
    pub department: String,
}

impl Notice {
    /// Creates a regular (not important) notice without description/department.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        date: NaiveDate,
        category: NoticeCategory,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            date,
            category,
            is_important: false,
            department: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    pub fn important(mut self) -> Self {
        self.is_important = true;
        self
    }
}
