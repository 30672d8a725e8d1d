//! Drains reducer-emitted [`crate::RuntimeEffect`] values in emission order.

use leptos::*;

use crate::runtime_context::DesktopRuntimeContext;

/// Installs the effect executor for `runtime`.
pub fn install(runtime: DesktopRuntimeContext) {
    create_effect(move |_| {
        let batch = runtime.effects.get();
        if batch.is_empty() {
            return;
        }

        // Clear before running so effects that dispatch again queue a fresh batch.
        runtime.effects.set(Vec::new());
        let host = runtime.host.get_value();
        for effect in batch {
            host.run_runtime_effect(runtime, effect);
        }
    });
}
