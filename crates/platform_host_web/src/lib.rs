//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete browser-side host wiring layer for preference storage
//! (`localStorage`) and environment detection (`window` dimensions and `matchMedia` queries).

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
pub mod environment;
pub mod storage;

pub use adapters::{
    build_host_services, environment_probe, host_strategy_name, prefs_store,
    selected_host_strategy, EnvironmentProbeAdapter, PrefsStoreAdapter,
};
pub use environment::{
    watch_media_features, MediaFeatureWatch, WebEnvironmentProbe, WATCHED_MEDIA_QUERIES,
};
pub use storage::local_prefs::WebPrefsStore;
