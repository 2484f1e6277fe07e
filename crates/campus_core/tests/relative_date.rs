use campus_core::{
    deadline_bucket, format_deadline, format_publication_date, publication_bucket,
    DeadlineBucket, PublicationBucket,
};
use chrono::{Duration, NaiveDate, NaiveDateTime};

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn at(date: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
    date.and_hms_opt(hour, minute, 0).unwrap()
}

fn midnight(date: NaiveDate) -> NaiveDateTime {
    at(date, 0, 0)
}

#[test]
fn deadline_day_offsets_render_expected_text() {
    let today = day(2024, 3, 20);
    let now = midnight(today);

    assert_eq!(format_deadline(today, now), "오늘 마감");
    assert_eq!(format_deadline(today + Duration::days(1), now), "내일 마감");
    assert_eq!(format_deadline(today + Duration::days(5), now), "5일 남음");
    assert_eq!(format_deadline(day(2024, 3, 30), now), "3월 30일");
    assert_eq!(format_deadline(today - Duration::days(1), now), "마감됨");
}

#[test]
fn deadline_week_boundary_is_inclusive() {
    let today = day(2024, 3, 20);
    let now = midnight(today);

    assert_eq!(format_deadline(today + Duration::days(2), now), "2일 남음");
    assert_eq!(format_deadline(today + Duration::days(7), now), "7일 남음");
    assert_eq!(format_deadline(today + Duration::days(8), now), "3월 28일");
}

#[test]
fn deadline_rounds_partial_days_up() {
    let now = at(day(2024, 3, 20), 15, 30);

    // Today's midnight is already behind `now`, yet it is still due today.
    assert_eq!(
        deadline_bucket(day(2024, 3, 20), now),
        DeadlineBucket::DueToday
    );
    assert_eq!(
        deadline_bucket(day(2024, 3, 21), now),
        DeadlineBucket::DueTomorrow
    );
    assert_eq!(
        deadline_bucket(day(2024, 3, 19), now),
        DeadlineBucket::Overdue
    );
    assert_eq!(
        deadline_bucket(day(2024, 3, 27), now),
        DeadlineBucket::DaysLeft(7)
    );
    assert_eq!(
        deadline_bucket(day(2024, 3, 28), now),
        DeadlineBucket::OnDate { month: 3, day: 28 }
    );
}

#[test]
fn deadline_absolute_date_uses_one_based_month_without_year() {
    let now = midnight(day(2024, 12, 20));
    assert_eq!(format_deadline(day(2025, 1, 9), now), "1월 9일");
}

#[test]
fn publication_day_offsets_render_expected_text() {
    let today = day(2024, 3, 25);
    let now = midnight(today);

    assert_eq!(format_publication_date(today, now), "오늘");
    assert_eq!(format_publication_date(today - Duration::days(1), now), "어제");
    assert_eq!(format_publication_date(today - Duration::days(4), now), "4일 전");
    assert_eq!(format_publication_date(day(2024, 3, 15), now), "3월 15일");
}

#[test]
fn publication_week_boundary_switches_to_absolute_date() {
    let today = day(2024, 3, 25);
    let now = at(today, 9, 0);

    assert_eq!(format_publication_date(today - Duration::days(6), now), "6일 전");
    assert_eq!(format_publication_date(today - Duration::days(7), now), "3월 18일");
}

#[test]
fn publication_rounds_partial_days_down() {
    let now = at(day(2024, 3, 25), 23, 59);

    assert_eq!(
        publication_bucket(day(2024, 3, 25), now),
        PublicationBucket::Today
    );
    assert_eq!(
        publication_bucket(day(2024, 3, 24), now),
        PublicationBucket::Yesterday
    );
    assert_eq!(
        publication_bucket(day(2024, 3, 22), now),
        PublicationBucket::DaysAgo(3)
    );
}

#[test]
fn future_publication_date_counts_negative_days() {
    let now = at(day(2024, 3, 25), 9, 0);
    assert_eq!(format_publication_date(day(2024, 3, 26), now), "-1일 전");
    assert_eq!(
        publication_bucket(day(2024, 3, 27), now),
        PublicationBucket::DaysAgo(-2)
    );
    assert_eq!(format_publication_date(day(2024, 4, 10), now), "-16일 전");
}

#[test]
fn formatters_are_idempotent() {
    let now = at(day(2024, 3, 20), 10, 15);
    let target = day(2024, 3, 24);

    assert_eq!(format_deadline(target, now), format_deadline(target, now));
    assert_eq!(
        format_publication_date(target, now),
        format_publication_date(target, now)
    );
}
