use leptos::{logging, SignalWithUntracked};

use crate::{
    host::DesktopHostContext, model::WindowId, persistence,
    runtime_context::DesktopRuntimeContext,
};

pub(super) fn persist_theme(host: &DesktopHostContext, runtime: DesktopRuntimeContext) {
    let theme = runtime.state.with_untracked(|state| state.theme.clone());
    if let Err(err) = persistence::persist_theme(host.prefs_store().as_ref(), &theme) {
        logging::warn!("persist theme failed: {err}");
    }
}

pub(super) fn forget_window(runtime: DesktopRuntimeContext, window_id: WindowId) {
    runtime
        .scroll_memory
        .update_value(|memory| memory.forget(window_id));
}
