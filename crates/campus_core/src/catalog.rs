//! Built-in sample data served to the screens until a real backend exists.
//!
//! # Invariants
//! - Records are built once per process and never mutated.
//! - Ids are unique within each collection.

use crate::model::notice::{Notice, NoticeCategory};
use crate::model::profile::{ProfileStats, StudentProfile};
use crate::model::task::{Priority, Task, TaskStatus};
use chrono::NaiveDate;
use once_cell::sync::Lazy;

static SAMPLE_TASKS: Lazy<Vec<Task>> = Lazy::new(|| {
    vec![
        Task::new("1", "데이터베이스 설계 과제", date(2024, 3, 25))
            .with_description("ERD 다이어그램 작성 및 정규화 과정 문서화")
            .with_course("데이터베이스")
            .with_priority(Priority::High),
        Task::new("2", "알고리즘 중간고사", date(2024, 3, 28))
            .with_description("동적 프로그래밍, 그래프 알고리즘 범위")
            .with_course("알고리즘")
            .with_priority(Priority::High),
        Task::new("3", "웹 프로그래밍 프로젝트", date(2024, 4, 5))
            .with_description("React를 이용한 쇼핑몰 웹사이트 구현")
            .with_course("웹프로그래밍")
            .with_priority(Priority::Medium)
            .with_status(TaskStatus::InProgress),
        Task::new("4", "운영체제 레포트", date(2024, 4, 10))
            .with_description("프로세스 스케줄링 알고리즘 비교 분석")
            .with_course("운영체제")
            .with_priority(Priority::Medium),
        Task::new("5", "소프트웨어 공학 발표", date(2024, 4, 15))
            .with_description("애자일 방법론에 대한 팀 프레젠테이션")
            .with_course("소프트웨어공학")
            .with_priority(Priority::Low),
    ]
});

static SAMPLE_NOTICES: Lazy<Vec<Notice>> = Lazy::new(|| {
    vec![
        Notice::new(
            "1",
            "2024학년도 1학기 수강신청 안내",
            date(2024, 3, 15),
            NoticeCategory::Academic,
        )
        .with_description("수강신청 일정 및 유의사항을 확인하시기 바랍니다.")
        .with_department("학사지원팀")
        .important(),
        Notice::new(
            "2",
            "장학금 신청 기간 연장 공지",
            date(2024, 3, 18),
            NoticeCategory::Scholarship,
        )
        .with_description("국가장학금 및 교내장학금 신청 기간이 3월 31일까지 연장되었습니다.")
        .with_department("학생지원팀")
        .important(),
        Notice::new(
            "3",
            "도서관 열람실 이용 시간 변경",
            date(2024, 3, 20),
            NoticeCategory::Facility,
        )
        .with_description("시험기간 동안 24시간 운영됩니다.")
        .with_department("도서관"),
        Notice::new(
            "4",
            "취업 특강 개최 안내",
            date(2024, 3, 22),
            NoticeCategory::Career,
        )
        .with_description("IT 기업 현직자 초청 특강이 진행됩니다.")
        .with_department("취업지원센터"),
        Notice::new(
            "5",
            "학생회 정기총회 개최",
            date(2024, 3, 23),
            NoticeCategory::StudentCouncil,
        )
        .with_description("2024년 상반기 학생회 정기총회가 개최됩니다.")
        .with_department("학생회"),
    ]
});

static SAMPLE_PROFILE: Lazy<StudentProfile> = Lazy::new(|| StudentProfile {
    name: "홍길동".to_string(),
    department: "컴퓨터공학과".to_string(),
    grade: 2,
    student_id: "20220001".to_string(),
    stats: ProfileStats {
        enrolled_courses: 12,
        completed_tasks: 8,
        in_progress_tasks: 5,
    },
    settings: ["알림 설정", "계정 정보", "개인정보 보호"]
        .into_iter()
        .map(str::to_string)
        .collect(),
    about: ["앱 정보", "도움말"]
        .into_iter()
        .map(str::to_string)
        .collect(),
});

/// Sample assignments shown on the home screen.
pub fn sample_tasks() -> &'static [Task] {
    SAMPLE_TASKS.as_slice()
}

/// Sample announcements shown on the notice board.
pub fn sample_notices() -> &'static [Notice] {
    SAMPLE_NOTICES.as_slice()
}

/// Profile of the signed-in sample student.
pub fn sample_profile() -> &'static StudentProfile {
    &SAMPLE_PROFILE
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid sample calendar date")
}

#[cfg(test)]
mod tests {
    use super::{sample_notices, sample_profile, sample_tasks};
    use std::collections::HashSet;

    #[test]
    fn sample_ids_are_unique_per_collection() {
        let task_ids: HashSet<_> = sample_tasks().iter().map(|task| task.id.as_str()).collect();
        assert_eq!(task_ids.len(), sample_tasks().len());

        let notice_ids: HashSet<_> = sample_notices()
            .iter()
            .map(|notice| notice.id.as_str())
            .collect();
        assert_eq!(notice_ids.len(), sample_notices().len());
    }

    #[test]
    fn sample_collections_are_stable_across_calls() {
        assert!(std::ptr::eq(sample_tasks(), sample_tasks()));
        assert_eq!(sample_tasks().len(), 5);
        assert_eq!(sample_notices().len(), 5);
        assert_eq!(sample_profile().settings.len(), 3);
    }
}
