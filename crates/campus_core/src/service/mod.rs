//! Screen-level use-case services.
//!
//! # Responsibility
//! - Turn repository collections into per-screen view models.
//! - Validate local form input before any (future) backend call.
//!
//! # Invariants
//! - Services never mutate records; refresh replaces the whole collection.
//! - View models are computed from an explicit `now`, never a hidden clock.

pub mod login;
pub mod notice_board;
pub mod task_board;
