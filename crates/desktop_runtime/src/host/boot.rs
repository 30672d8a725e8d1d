use leptos::{create_effect, Callable, Callback};

use crate::{host::DesktopHostContext, persistence, reducer::DesktopAction};

pub(super) fn install_boot_hydration(host: DesktopHostContext, dispatch: Callback<DesktopAction>) {
    create_effect(move |_| {
        if let Some(theme) = persistence::load_theme(host.prefs_store().as_ref()) {
            dispatch.call(DesktopAction::HydrateTheme { theme });
        }

        // The initial policy is probed before mount; re-probe once the document has laid out.
        dispatch.call(DesktopAction::ApplyLayoutPolicy {
            policy: host.probe_layout(),
        });
    });
}
