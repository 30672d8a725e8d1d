//! Shared host-bundle model for browser and native runtime composition.

use std::rc::Rc;

use crate::{EnvironmentProbe, MemoryPrefsStore, PrefsStore, StaticEnvironmentProbe};

/// Stable host strategy selected for the current build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed runtime composition.
    Browser,
    /// In-memory composition used by native builds and tests.
    Memory,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Memory => "memory",
        }
    }
}

/// Runtime-selected host service bundle injected into the desktop runtime.
///
/// All environment-specific service selection happens before this bundle crosses into
/// `desktop_runtime`, which keeps the runtime free of browser adapter details.
#[derive(Clone)]
pub struct HostServices {
    /// Lightweight typed preference store (theme persistence).
    pub prefs: Rc<dyn PrefsStore>,
    /// Viewport and media-feature reader.
    pub environment: Rc<dyn EnvironmentProbe>,
    /// Stable strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// In-memory bundle with fallback environment signals.
    pub fn memory() -> Self {
        Self {
            prefs: Rc::new(MemoryPrefsStore::default()),
            environment: Rc::new(StaticEnvironmentProbe::default()),
            host_strategy: HostStrategy::Memory,
        }
    }
}
