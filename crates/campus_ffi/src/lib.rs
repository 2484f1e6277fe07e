//! Flutter-facing bindings over `campus_core`.

pub mod api;
