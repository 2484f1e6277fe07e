//! Repository layer for the board collections.
//!
//! # Responsibility
//! - Define read contracts the board services fetch from.
//! - Provide in-memory implementations backed by the sample catalog.
//!
//! # Invariants
//! - A repository never hands out a collection with duplicate ids.
//! - A fetch returns the full collection; callers replace, never merge.

use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod notice_repo;
pub mod task_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for board data sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// Two records of one collection share an id.
    DuplicateId {
        collection: &'static str,
        id: String,
    },
    /// The backing source could not produce the collection.
    Unavailable(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId { collection, id } => {
                write!(f, "duplicate {collection} id: `{id}`")
            }
            Self::Unavailable(message) => write!(f, "data source unavailable: {message}"),
        }
    }
}

impl Error for RepoError {}

pub(crate) fn ensure_unique_ids<'a>(
    collection: &'static str,
    ids: impl IntoIterator<Item = &'a str>,
) -> RepoResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(RepoError::DuplicateId {
                collection,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}
