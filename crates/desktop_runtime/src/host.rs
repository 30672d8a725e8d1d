//! Host-side runtime helpers for executing reducer effects and querying the browser environment.
//!
//! The reducer stays pure; everything that touches preferences, environment probes or document
//! listeners goes through [`DesktopHostContext`], which wraps the injected [`HostServices`].

mod boot;
mod layout_watch;
mod persistence_effects;

use std::rc::Rc;

use leptos::Callback;
use platform_host::{EnvironmentProbe, HostServices, HostStrategy, PrefsStore};

use crate::{
    layout::LayoutPolicy,
    reducer::{DesktopAction, RuntimeEffect},
    runtime_context::DesktopRuntimeContext,
};

#[derive(Clone)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    prefs: Rc<dyn PrefsStore>,
    environment: Rc<dyn EnvironmentProbe>,
    host_strategy: HostStrategy,
}

impl DesktopHostContext {
    /// Builds a host context from an explicit host service bundle.
    pub fn new(services: HostServices) -> Self {
        Self {
            prefs: services.prefs,
            environment: services.environment,
            host_strategy: services.host_strategy,
        }
    }

    /// Returns the configured lightweight preference service.
    pub fn prefs_store(&self) -> Rc<dyn PrefsStore> {
        self.prefs.clone()
    }

    /// Returns the configured environment probe.
    pub fn environment_probe(&self) -> Rc<dyn EnvironmentProbe> {
        self.environment.clone()
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.host_strategy.as_str()
    }

    /// Reads the environment once and derives the layout policy from it.
    pub fn probe_layout(&self) -> LayoutPolicy {
        LayoutPolicy::from_signals(&self.environment.probe())
    }

    /// Installs boot hydration: the persisted theme, then a fresh layout probe.
    pub fn install_boot_hydration(&self, dispatch: Callback<DesktopAction>) {
        boot::install_boot_hydration(self.clone(), dispatch);
    }

    /// Installs resize, orientation and media-feature listeners that keep the layout policy
    /// current. Listeners are removed when the calling owner is disposed.
    pub fn install_layout_listeners(&self, runtime: DesktopRuntimeContext) {
        layout_watch::install_layout_listeners(runtime);
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::PersistTheme => persistence_effects::persist_theme(self, runtime),
            RuntimeEffect::ForgetWindow(window_id) => {
                persistence_effects::forget_window(runtime, window_id)
            }
        }
    }
}

/// Wall clock in milliseconds used to drive throttles.
pub(crate) fn now_ms() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        0.0
    }
}
