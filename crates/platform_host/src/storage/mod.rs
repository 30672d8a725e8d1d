//! Preference storage contracts shared by runtime and host adapters.

pub mod prefs;
