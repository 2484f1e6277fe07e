use campus_core::{Notice, NoticeCategory, Priority, Task, TaskStatus};
use chrono::NaiveDate;

#[test]
fn task_serialization_uses_app_wire_values() {
    let task = Task::new("1", "데이터베이스 설계 과제", NaiveDate::from_ymd_opt(2024, 3, 25).unwrap())
        .with_course("데이터베이스")
        .with_priority(Priority::High)
        .with_status(TaskStatus::InProgress);

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], "1");
    assert_eq!(json["deadline"], "2024-03-25");
    assert_eq!(json["priority"], "high");
    assert_eq!(json["status"], "in-progress");

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn unknown_priority_decodes_to_default_row_and_keeps_raw_value() {
    let value = serde_json::json!({
        "id": "9",
        "title": "세미나",
        "description": "",
        "deadline": "2024-04-01",
        "course": "",
        "priority": "critical",
        "status": "pending"
    });

    let task: Task = serde_json::from_value(value.clone()).unwrap();
    assert_eq!(task.priority, Priority::Other("critical".to_string()));
    assert_eq!(task.priority.as_str(), "critical");
    assert_eq!(task.priority.style().color.as_str(), "#007AFF");
    assert_eq!(task.priority.style().label, "보통");

    let encoded = serde_json::to_value(&task).unwrap();
    assert_eq!(encoded["priority"], "critical");
    assert_eq!(encoded, value);
}

#[test]
fn notice_serialization_keeps_korean_category_and_camel_case() {
    let notice = Notice::new(
        "2",
        "장학금 신청 기간 연장 공지",
        NaiveDate::from_ymd_opt(2024, 3, 18).unwrap(),
        NoticeCategory::Scholarship,
    )
    .with_department("학생지원팀")
    .important();

    let json = serde_json::to_value(&notice).unwrap();
    assert_eq!(json["category"], "장학");
    assert_eq!(json["isImportant"], true);
    assert_eq!(json["date"], "2024-03-18");

    let decoded: Notice = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, notice);
}

#[test]
fn unknown_category_is_kept_verbatim() {
    let value = serde_json::json!({
        "id": "7",
        "title": "동아리 박람회",
        "description": "",
        "date": "2024-03-10",
        "category": "동아리",
        "isImportant": false,
        "department": "학생처"
    });

    let notice: Notice = serde_json::from_value(value).unwrap();
    assert_eq!(notice.category, NoticeCategory::Other("동아리".to_string()));
    assert_eq!(notice.category.label(), "동아리");
    assert_eq!(notice.category.style().color.as_str(), "#8E8E93");
    assert_eq!(serde_json::to_value(&notice).unwrap()["category"], "동아리");
}
