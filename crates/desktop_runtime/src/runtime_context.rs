//! [`DesktopProvider`] and the [`DesktopRuntimeContext`] it hands to the shell.
//!
//! The provider seeds the registry with a probed layout policy, owns the reducer signals and the
//! effect queue, and keeps scroll offsets and content renderers outside the reactive graph.

use leptos::*;
use platform_host::HostServices;

use crate::{
    content::ContentRegistry,
    effect_executor,
    host::DesktopHostContext,
    model::{DesktopState, InteractionState, ScrollMemory},
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Window registry, interaction state and dispatch handle shared with every shell component.
pub struct DesktopRuntimeContext {
    /// Prefs store and environment probe.
    pub host: StoredValue<DesktopHostContext>,
    /// Open windows, layout policy and active theme.
    pub state: RwSignal<DesktopState>,
    /// Drag and resize slots, live geometry and maximize snapshots.
    pub interaction: RwSignal<InteractionState>,
    /// Pending [`RuntimeEffect`]s, drained by the effect executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Content scroll offsets, restored when a window body remounts.
    pub scroll_memory: StoredValue<ScrollMemory>,
    /// Renderers for window content slots.
    pub content: StoredValue<ContentRegistry>,
    /// Runs an action through [`reduce_desktop`]; signals are only written on change.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Shorthand for `self.dispatch.call(action)`.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }
}

fn install_runtime_orchestration(runtime: DesktopRuntimeContext) {
    let host = runtime.host.get_value();
    host.install_boot_hydration(runtime.dispatch);
    host.install_layout_listeners(runtime);
    effect_executor::install(runtime);
}

#[component]
/// Mounts the window runtime: probes the layout, hydrates the theme and installs listeners.
pub fn DesktopProvider(
    /// Browser or in-memory host services.
    host_services: HostServices,
    /// Content renderers; defaults to the built-in views.
    #[prop(optional)]
    content: Option<ContentRegistry>,
    children: Children,
) -> impl IntoView {
    let host_context = DesktopHostContext::new(host_services);
    let initial = DesktopState {
        layout: host_context.probe_layout(),
        ..DesktopState::default()
    };
    let host = store_value(host_context);
    let state = create_rw_signal(initial);
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
    let scroll_memory = store_value(ScrollMemory::default());
    let content = store_value(content.unwrap_or_else(ContentRegistry::with_builtin_views));

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut ui = interaction.get_untracked();

        match reduce_desktop(&mut desktop, &mut ui, action) {
            Ok(new_effects) => {
                if state.with_untracked(|previous| *previous != desktop) {
                    state.set(desktop);
                }
                if interaction.with_untracked(|previous| *previous != ui) {
                    interaction.set(ui);
                }
                if !new_effects.is_empty() {
                    effects.update(|queue| queue.extend(new_effects));
                }
            }
            Err(err) => logging::warn!("desktop reducer error: {err}"),
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        state,
        interaction,
        effects,
        scroll_memory,
        content,
        dispatch,
    };

    provide_context(runtime);

    install_runtime_orchestration(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
