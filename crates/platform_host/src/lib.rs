//! Typed host-domain contracts shared across the desktop runtime and browser adapters.
//!
//! This crate is the API-first boundary for platform services. It exposes the preference store
//! used for theme persistence and the environment probe feeding the adaptive layout policy, while
//! concrete browser adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod environment;
pub mod host;
pub mod storage;

pub use environment::{
    ColorScheme, EnvironmentProbe, EnvironmentSignals, StaticEnvironmentProbe,
    FALLBACK_VIEWPORT_HEIGHT, FALLBACK_VIEWPORT_WIDTH,
};
pub use host::{HostServices, HostStrategy};
pub use storage::prefs::{
    load_pref_with, save_pref_with, MemoryPrefsStore, NoopPrefsStore, PrefsError, PrefsStore,
};
