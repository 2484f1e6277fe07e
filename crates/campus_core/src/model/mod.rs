//! Domain model for the student board screens.
//!
//! # Responsibility
//! - Define the immutable records rendered by the home, notice and profile screens.
//! - Keep wire names stable for the mobile rendering layer.
//!
//! # Invariants
//! - `id` is unique per collection (enforced by repositories, not by records).
//! - Priority and category only drive presentation, never business rules.

pub mod notice;
pub mod profile;
pub mod task;
