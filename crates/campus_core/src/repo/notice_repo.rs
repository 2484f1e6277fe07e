//! Notice repository contract and in-memory implementation.

use crate::catalog::sample_notices;
use crate::model::notice::Notice;
use crate::repo::{ensure_unique_ids, RepoResult};

/// Read access to the notice board collection.
pub trait NoticeRepository {
    /// Returns the full notice collection in display order.
    fn list_notices(&self) -> RepoResult<Vec<Notice>>;
}

/// Notice repository over an owned vector.
#[derive(Debug, Clone)]
pub struct InMemoryNoticeRepository {
    notices: Vec<Notice>,
}

impl InMemoryNoticeRepository {
    /// Creates a repository after checking id uniqueness.
    pub fn try_new(notices: Vec<Notice>) -> RepoResult<Self> {
        ensure_unique_ids("notice", notices.iter().map(|notice| notice.id.as_str()))?;
        Ok(Self { notices })
    }

    pub fn sample() -> Self {
        Self {
            notices: sample_notices().to_vec(),
        }
    }
}

impl NoticeRepository for InMemoryNoticeRepository {
    fn list_notices(&self) -> RepoResult<Vec<Notice>> {
        Ok(self.notices.clone())
    }
}
