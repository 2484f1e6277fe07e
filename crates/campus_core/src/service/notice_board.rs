//! Notice board screen.
//!
//! # Responsibility
//! - Hold the notice collection fetched from a repository.
//! - Project notices into cards with category colors and publication text.
//!
//! # Invariants
//! - `refresh` replaces the collection only on success.
//! - Cards keep repository order.

use crate::model::notice::Notice;
use crate::relative_date::format_publication_date;
use crate::repo::notice_repo::NoticeRepository;
use crate::repo::RepoResult;
use chrono::NaiveDateTime;
use log::{info, warn};
use serde::Serialize;

pub const NOTICE_BOARD_TITLE: &str = "공지사항";
pub const NOTICE_BOARD_HEADING: &str = "학교 공지사항";
const NOTICE_BOARD_EMPTY_STATE: &str = "새로운 공지사항이 없습니다";

/// Render-ready projection of one notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoticeCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub department: String,
    pub category_label: String,
    pub category_color: &'static str,
    pub badge_background: String,
    pub is_important: bool,
    pub date_text: String,
}

impl NoticeCard {
    pub fn from_notice(notice: &Notice, now: NaiveDateTime) -> Self {
        let color = notice.category.style().color;
        Self {
            id: notice.id.clone(),
            title: notice.title.clone(),
            description: notice.description.clone(),
            department: notice.department.clone(),
            category_label: notice.category.label().to_string(),
            category_color: color.as_str(),
            badge_background: color.badge_background(),
            is_important: notice.is_important,
            date_text: format_publication_date(notice.date, now),
        }
    }
}

/// Notice collection plus the projections the notice screen renders.
pub struct NoticeBoard<R: NoticeRepository> {
    repo: R,
    notices: Vec<Notice>,
}

impl<R: NoticeRepository> NoticeBoard<R> {
    pub fn load(repo: R) -> RepoResult<Self> {
        let notices = repo.list_notices()?;
        info!(
            "event=board_load module=notice_board status=ok count={}",
            notices.len()
        );
        Ok(Self { repo, notices })
    }

    /// Re-fetches and replaces the full collection. Returns the new count.
    pub fn refresh(&mut self) -> RepoResult<usize> {
        let notices = self.repo.list_notices().map_err(|err| {
            warn!(
                "event=board_refresh module=notice_board status=error kept={} error={}",
                self.notices.len(),
                err
            );
            err
        })?;
        self.notices = notices;
        info!(
            "event=board_refresh module=notice_board status=ok count={}",
            self.notices.len()
        );
        Ok(self.notices.len())
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Number of notices flagged as important.
    pub fn important_count(&self) -> usize {
        self.notices
            .iter()
            .filter(|notice| notice.is_important)
            .count()
    }

    /// `최신 공지 {n}건`
    pub fn subtitle(&self) -> String {
        format!("최신 공지 {}건", self.notices.len())
    }

    pub fn empty_state(&self) -> Option<&'static str> {
        self.notices.is_empty().then_some(NOTICE_BOARD_EMPTY_STATE)
    }

    pub fn cards(&self, now: NaiveDateTime) -> Vec<NoticeCard> {
        self.notices
            .iter()
            .map(|notice| NoticeCard::from_notice(notice, now))
            .collect()
    }
}
