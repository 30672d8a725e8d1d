use std::rc::Rc;

use platform_host::{
    EnvironmentProbe, EnvironmentSignals, HostServices, HostStrategy, MemoryPrefsStore,
    PrefsError, PrefsStore, StaticEnvironmentProbe,
};

use crate::{WebEnvironmentProbe, WebPrefsStore};

/// Returns the compile-time selected host strategy for the active build.
///
/// Browser builds (`wasm32`) use the browser adapters unless the `memory-host` feature forces the
/// in-memory bundle. Native builds always use the in-memory bundle.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(all(target_arch = "wasm32", not(feature = "memory-host")))]
    {
        HostStrategy::Browser
    }

    #[cfg(not(all(target_arch = "wasm32", not(feature = "memory-host"))))]
    {
        HostStrategy::Memory
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Adapter enum that erases the concrete preference backend behind [`PrefsStore`].
#[derive(Debug, Clone)]
pub enum PrefsStoreAdapter {
    /// Browser-backed `localStorage` persistence.
    Browser(WebPrefsStore),
    /// In-memory persistence for native builds and tests.
    Memory(MemoryPrefsStore),
}

impl PrefsStore for PrefsStoreAdapter {
    fn load_raw(&self, key: &str) -> Result<Option<String>, PrefsError> {
        match self {
            Self::Browser(store) => store.load_raw(key),
            Self::Memory(store) => store.load_raw(key),
        }
    }

    fn save_raw(&self, key: &str, raw_json: &str) -> Result<(), PrefsError> {
        match self {
            Self::Browser(store) => store.save_raw(key, raw_json),
            Self::Memory(store) => store.save_raw(key, raw_json),
        }
    }

    fn delete(&self, key: &str) -> Result<(), PrefsError> {
        match self {
            Self::Browser(store) => store.delete(key),
            Self::Memory(store) => store.delete(key),
        }
    }
}

/// Adapter enum that erases the concrete environment reader behind [`EnvironmentProbe`].
#[derive(Debug, Clone)]
pub enum EnvironmentProbeAdapter {
    /// `window` / `matchMedia` readings.
    Browser(WebEnvironmentProbe),
    /// Caller-controlled readings.
    Memory(StaticEnvironmentProbe),
}

impl EnvironmentProbe for EnvironmentProbeAdapter {
    fn probe(&self) -> EnvironmentSignals {
        match self {
            Self::Browser(probe) => probe.probe(),
            Self::Memory(probe) => probe.probe(),
        }
    }
}

/// Builds the preference-store adapter for the selected host strategy.
pub fn prefs_store() -> PrefsStoreAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => PrefsStoreAdapter::Browser(WebPrefsStore),
        HostStrategy::Memory => PrefsStoreAdapter::Memory(MemoryPrefsStore::default()),
    }
}

/// Builds the environment-probe adapter for the selected host strategy.
pub fn environment_probe() -> EnvironmentProbeAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => EnvironmentProbeAdapter::Browser(WebEnvironmentProbe),
        HostStrategy::Memory => EnvironmentProbeAdapter::Memory(StaticEnvironmentProbe::default()),
    }
}

/// Builds the [`HostServices`] bundle injected into the desktop runtime.
pub fn build_host_services() -> HostServices {
    HostServices {
        prefs: Rc::new(prefs_store()),
        environment: Rc::new(environment_probe()),
        host_strategy: selected_host_strategy(),
    }
}
