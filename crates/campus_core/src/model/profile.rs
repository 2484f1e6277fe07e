//! Student profile shown on the profile screen.

use serde::{Deserialize, Serialize};

/// Counters shown in the profile stats row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStats {
    /// 수강 과목
    pub enrolled_courses: u32,
    /// 완료 과제
    pub completed_tasks: u32,
    /// 진행 중
    pub in_progress_tasks: u32,
}

/// Signed-in student identity plus the static menu sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    pub name: String,
    pub department: String,
    /// Academic year, 1-based.
    pub grade: u8,
    pub student_id: String,
    pub stats: ProfileStats,
    /// Entries of the `설정` section, in display order.
    pub settings: Vec<String>,
    /// Entries of the `정보` section, in display order.
    pub about: Vec<String>,
}

impl StudentProfile {
    /// `컴퓨터공학과 · 2학년`
    pub fn affiliation_line(&self) -> String {
        format!("{} · {}학년", self.department, self.grade)
    }

    /// `학번: 20220001`
    pub fn student_id_line(&self) -> String {
        format!("학번: {}", self.student_id)
    }
}
