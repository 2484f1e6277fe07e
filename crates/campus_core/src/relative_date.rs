//! Relative date rendering for task deadlines and notice publication dates.
//!
//! # Responsibility
//! - Turn a calendar date plus "now" into a short Korean relative string.
//! - Expose the day bucket as an enum for callers that branch on it.
//!
//! # Invariants
//! - Pure functions of `(target, now)`; no clock reads happen here.
//! - The target date is taken at midnight and differenced against `now` in
//!   milliseconds. Both must be expressed in the same timezone.
//! - Deadlines round the day difference up, publication dates round it down.
//! - Absolute dates render as `{month}월 {day}일` with a 1-based month and no year.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt::{Display, Formatter};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;
const DEADLINE_COUNTDOWN_MAX_DAYS: i64 = 7;
const PUBLICATION_RECENT_LIMIT_DAYS: i64 = 7;

/// Day bucket of a future-facing deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineBucket {
    /// `마감됨`
    Overdue,
    /// `오늘 마감`
    DueToday,
    /// `내일 마감`
    DueTomorrow,
    /// `{n}일 남음`, 2..=7 days.
    DaysLeft(i64),
    /// `{month}월 {day}일`, more than a week away.
    OnDate { month: u32, day: u32 },
}

/// Day bucket of a past-facing publication date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicationBucket {
    /// `오늘`
    Today,
    /// `어제`
    Yesterday,
    /// `{n}일 전`, any count below 7 other than 0 and 1. Future-dated
    /// targets land here with a negative count.
    DaysAgo(i64),
    /// `{month}월 {day}일`, a week or older.
    OnDate { month: u32, day: u32 },
}

impl Display for DeadlineBucket {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overdue => f.write_str("마감됨"),
            Self::DueToday => f.write_str("오늘 마감"),
            Self::DueTomorrow => f.write_str("내일 마감"),
            Self::DaysLeft(days) => write!(f, "{days}일 남음"),
            Self::OnDate { month, day } => write!(f, "{month}월 {day}일"),
        }
    }
}

impl Display for PublicationBucket {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Today => f.write_str("오늘"),
            Self::Yesterday => f.write_str("어제"),
            Self::DaysAgo(days) => write!(f, "{days}일 전"),
            Self::OnDate { month, day } => write!(f, "{month}월 {day}일"),
        }
    }
}

/// Classifies a deadline with `ceil((target - now) / 1 day)`.
pub fn deadline_bucket(target: NaiveDate, now: NaiveDateTime) -> DeadlineBucket {
    let days = ceil_days(millis_between(now, start_of_day(target)));
    match days {
        d if d < 0 => DeadlineBucket::Overdue,
        0 => DeadlineBucket::DueToday,
        1 => DeadlineBucket::DueTomorrow,
        2..=DEADLINE_COUNTDOWN_MAX_DAYS => DeadlineBucket::DaysLeft(days),
        _ => DeadlineBucket::OnDate {
            month: target.month(),
            day: target.day(),
        },
    }
}

/// Classifies a publication date with `floor((now - target) / 1 day)`.
///
/// Future-dated targets (negative difference) render as `{n}일 전` with a
/// negative `n`.
pub fn publication_bucket(target: NaiveDate, now: NaiveDateTime) -> PublicationBucket {
    let days = floor_days(millis_between(start_of_day(target), now));
    match days {
        0 => PublicationBucket::Today,
        1 => PublicationBucket::Yesterday,
        d if d < PUBLICATION_RECENT_LIMIT_DAYS => PublicationBucket::DaysAgo(d),
        _ => PublicationBucket::OnDate {
            month: target.month(),
            day: target.day(),
        },
    }
}

/// Renders a task deadline relative to `now`.
pub fn format_deadline(target: NaiveDate, now: NaiveDateTime) -> String {
    deadline_bucket(target, now).to_string()
}

/// Renders a notice publication date relative to `now`.
pub fn format_publication_date(target: NaiveDate, now: NaiveDateTime) -> String {
    publication_bucket(target, now).to_string()
}

fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

fn millis_between(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    to.signed_duration_since(from).num_milliseconds()
}

fn floor_days(millis: i64) -> i64 {
    millis.div_euclid(MILLIS_PER_DAY)
}

fn ceil_days(millis: i64) -> i64 {
    let days = millis.div_euclid(MILLIS_PER_DAY);
    if millis.rem_euclid(MILLIS_PER_DAY) == 0 {
        days
    } else {
        days + 1
    }
}

#[cfg(test)]
mod tests {
    use super::{ceil_days, floor_days, MILLIS_PER_DAY};

    #[test]
    fn ceil_days_rounds_toward_positive_infinity() {
        assert_eq!(ceil_days(0), 0);
        assert_eq!(ceil_days(1), 1);
        assert_eq!(ceil_days(MILLIS_PER_DAY), 1);
        assert_eq!(ceil_days(MILLIS_PER_DAY + 1), 2);
        assert_eq!(ceil_days(-1), 0);
        assert_eq!(ceil_days(-MILLIS_PER_DAY / 2), 0);
        assert_eq!(ceil_days(-MILLIS_PER_DAY - 1), -1);
    }

    #[test]
    fn floor_days_rounds_toward_negative_infinity() {
        assert_eq!(floor_days(0), 0);
        assert_eq!(floor_days(MILLIS_PER_DAY - 1), 0);
        assert_eq!(floor_days(MILLIS_PER_DAY), 1);
        assert_eq!(floor_days(-1), -1);
    }
}
