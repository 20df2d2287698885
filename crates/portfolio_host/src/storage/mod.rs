//! Host storage contracts.

pub mod prefs;
