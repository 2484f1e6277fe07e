//! Presentation classification for task priorities and notice categories.
//!
//! # Responsibility
//! - Map categorical record attributes to display colors and labels.
//!
//! # Invariants
//! - Every function here is total: unrecognized input resolves to the
//!   documented default row, never to an error.
//! - Colors are `#RRGGBB` hex strings.

use crate::model::notice::NoticeCategory;
use crate::model::task::{Priority, TaskStatus};
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Alpha suffix appended to a badge color for its background fill.
pub const BADGE_TINT_ALPHA: &str = "20";

pub const SYSTEM_RED: HexColor = HexColor("#FF3B30");
pub const SYSTEM_ORANGE: HexColor = HexColor("#FF9500");
pub const SYSTEM_GREEN: HexColor = HexColor("#34C759");
pub const SYSTEM_BLUE: HexColor = HexColor("#007AFF");
pub const SYSTEM_PURPLE: HexColor = HexColor("#AF52DE");
pub const SYSTEM_GRAY: HexColor = HexColor("#8E8E93");

/// Marker color for notices flagged as important.
pub const IMPORTANT_MARK_COLOR: HexColor = SYSTEM_RED;

/// Opaque `#RRGGBB` display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct HexColor(&'static str);

impl HexColor {
    pub fn as_str(self) -> &'static str {
        self.0
    }

    /// Returns `#RRGGBBAA` by appending a two-digit hex alpha.
    pub fn tinted(self, alpha: &str) -> String {
        format!("{}{alpha}", self.0)
    }

    /// Badge background: this color at [`BADGE_TINT_ALPHA`].
    pub fn badge_background(self) -> String {
        self.tinted(BADGE_TINT_ALPHA)
    }
}

impl Display for HexColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// Badge color and label for a task priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriorityStyle {
    pub color: HexColor,
    pub label: &'static str,
}

/// Badge color for a notice category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryStyle {
    pub color: HexColor,
}

impl Priority {
    pub fn style(&self) -> PriorityStyle {
        let (color, label) = match self {
            Self::High => (SYSTEM_RED, "긴급"),
            Self::Medium => (SYSTEM_ORANGE, "보통"),
            Self::Low => (SYSTEM_GREEN, "여유"),
            Self::Other(_) => (SYSTEM_BLUE, "보통"),
        };
        PriorityStyle { color, label }
    }
}

impl NoticeCategory {
    pub fn style(&self) -> CategoryStyle {
        let color = match self {
            Self::Academic => SYSTEM_BLUE,
            Self::Scholarship => SYSTEM_GREEN,
            Self::Facility => SYSTEM_ORANGE,
            Self::Career => SYSTEM_PURPLE,
            Self::StudentCouncil => SYSTEM_RED,
            Self::Other(_) => SYSTEM_GRAY,
        };
        CategoryStyle { color }
    }
}

/// Classifies a raw priority value (`high|medium|low`, anything else = default).
pub fn classify_priority(priority: &str) -> PriorityStyle {
    Priority::parse(priority).style()
}

/// Classifies a raw notice category label (anything unlisted = gray).
pub fn classify_category(category: &str) -> CategoryStyle {
    NoticeCategory::parse(category).style()
}

/// Status dot color on a task card.
pub fn task_status_color(status: TaskStatus) -> HexColor {
    match status {
        TaskStatus::InProgress => SYSTEM_GREEN,
        TaskStatus::Pending => SYSTEM_ORANGE,
    }
}

#[cfg(test)]
mod tests {
    use super::{classify_category, classify_priority, task_status_color, HexColor, SYSTEM_RED};
    use crate::model::task::TaskStatus;

    #[test]
    fn priority_table_matches_known_rows() {
        let cases = [
            ("high", "#FF3B30", "긴급"),
            ("medium", "#FF9500", "보통"),
            ("low", "#34C759", "여유"),
        ];
        for (raw, color, label) in cases {
            let style = classify_priority(raw);
            assert_eq!(style.color.as_str(), color, "color for {raw}");
            assert_eq!(style.label, label, "label for {raw}");
        }
    }

    #[test]
    fn priority_falls_back_to_default_row() {
        for raw in ["", "HIGH", "urgent", " low"] {
            let style = classify_priority(raw);
            assert_eq!(style.color.as_str(), "#007AFF");
            assert_eq!(style.label, "보통");
        }
    }

    #[test]
    fn category_table_matches_known_rows() {
        let cases = [
            ("학사", "#007AFF"),
            ("장학", "#34C759"),
            ("시설", "#FF9500"),
            ("취업", "#AF52DE"),
            ("학생회", "#FF3B30"),
        ];
        for (raw, color) in cases {
            assert_eq!(classify_category(raw).color.as_str(), color, "color for {raw}");
        }
    }

    #[test]
    fn category_falls_back_to_gray() {
        assert_eq!(classify_category("동아리").color.as_str(), "#8E8E93");
        assert_eq!(classify_category("").color.as_str(), "#8E8E93");
    }

    #[test]
    fn status_color_depends_on_progress() {
        assert_eq!(task_status_color(TaskStatus::InProgress).as_str(), "#34C759");
        assert_eq!(task_status_color(TaskStatus::Pending).as_str(), "#FF9500");
    }

    #[test]
    fn badge_background_appends_alpha() {
        assert_eq!(SYSTEM_RED.badge_background(), "#FF3B3020");
        assert_eq!(HexColor("#007AFF").tinted("80"), "#007AFF80");
    }
}
