//! Desktop shell UI composition and interaction surfaces.

mod desktop_icons;
mod sidebar;
mod taskbar;
mod window;

use std::{cell::RefCell, rc::Rc, time::Duration};

use leptos::*;
use system_ui::{DesktopBackdrop, DesktopRoot, DesktopWindowLayer};

use self::{
    desktop_icons::DesktopIcons, sidebar::DesktopSidebarLauncher, taskbar::DesktopTaskbar,
    window::DesktopWindow,
};
use crate::{
    host::now_ms,
    layout::{LayoutPolicy, TASKBAR_HEIGHT},
    model::{DesktopState, PointerPosition, WindowId},
    reducer::DesktopAction,
    theme::{css_custom_properties, ActiveTheme},
    throttle::{Offer, Throttle, POINTER_THROTTLE_MS},
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

/// Ids of windows that are painted, in open order. Minimized windows stay in the registry but are
/// unmounted until restored.
fn visible_window_ids(state: &DesktopState) -> Vec<WindowId> {
    state
        .windows
        .iter()
        .filter(|w| !w.is_minimized)
        .map(|w| w.id)
        .collect()
}

fn shell_style(theme: &ActiveTheme, layout: &LayoutPolicy) -> String {
    format!(
        "{}--taskbar-height: {TASKBAR_HEIGHT}px; --sidebar-width: {}px;",
        css_custom_properties(&theme.palette),
        layout.sidebar_width()
    )
}

fn backdrop_style(theme: &ActiveTheme) -> String {
    match &theme.image_url {
        Some(url) => format!(
            "background-color: {}; background-image: url('{url}'); background-size: cover; \
             background-position: center;",
            theme.palette.background
        ),
        None => format!("background-color: {};", theme.palette.background),
    }
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

/// Primary button for mouse, primary contact for touch and pen.
fn is_primary_pointer(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

fn apply_pointer_sample(runtime: DesktopRuntimeContext, pointer: PointerPosition) {
    let (dragging, resizing) = runtime
        .interaction
        .with_untracked(|ui| (ui.dragging.is_some(), ui.resizing.is_some()));
    if dragging {
        runtime.dispatch_action(DesktopAction::UpdateMove { pointer });
    } else if resizing {
        runtime.dispatch_action(DesktopAction::UpdateResize { pointer });
    }
}

fn end_active_pointer_interaction(runtime: DesktopRuntimeContext) {
    let (dragging, resizing) = runtime
        .interaction
        .with_untracked(|ui| (ui.dragging.is_some(), ui.resizing.is_some()));
    if dragging {
        runtime.dispatch_action(DesktopAction::EndMove);
    }
    if resizing {
        runtime.dispatch_action(DesktopAction::EndResize);
    }
}

/// Document-level pointer listeners so a drag or resize always ends, wherever the pointer is
/// released.
fn install_pointer_listeners(runtime: DesktopRuntimeContext) {
    let throttle = Rc::new(RefCell::new(Throttle::<PointerPosition>::new(
        POINTER_THROTTLE_MS,
    )));

    let move_throttle = Rc::clone(&throttle);
    let move_listener = window_event_listener(ev::pointermove, move |ev| {
        if runtime
            .interaction
            .with_untracked(|ui| ui.active_window().is_none())
        {
            return;
        }
        let offer = move_throttle
            .borrow_mut()
            .offer(pointer_from_pointer_event(&ev), now_ms());
        match offer {
            Offer::Apply(pointer) => apply_pointer_sample(runtime, pointer),
            Offer::ScheduleFlush {
                delay_ms,
                generation,
            } => {
                let throttle = Rc::clone(&move_throttle);
                set_timeout(
                    move || {
                        let fired = throttle.borrow_mut().fire(generation, now_ms());
                        if let Some(pointer) = fired {
                            apply_pointer_sample(runtime, pointer);
                        }
                    },
                    Duration::from_millis(delay_ms.ceil() as u64),
                );
            }
            Offer::Coalesced => {}
        }
    });

    let up_throttle = Rc::clone(&throttle);
    let up_listener = window_event_listener(ev::pointerup, move |_| {
        let pending = up_throttle.borrow_mut().flush(now_ms());
        if let Some(pointer) = pending {
            apply_pointer_sample(runtime, pointer);
        }
        end_active_pointer_interaction(runtime);
    });

    let cancel_listener = window_event_listener(ev::pointercancel, move |_| {
        throttle.borrow_mut().cancel();
        end_active_pointer_interaction(runtime);
    });

    on_cleanup(move || {
        move_listener.remove();
        up_listener.remove();
        cancel_listener.remove();
    });
}

#[component]
/// Renders the full desktop shell UI.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    install_pointer_listeners(runtime);

    let layout = create_memo(move |_| state.with(|s| s.layout));
    let root_style = create_memo(move |_| state.with(|s| shell_style(&s.theme, &s.layout)));
    let backdrop = create_memo(move |_| state.with(|s| backdrop_style(&s.theme)));
    let window_ids = create_memo(move |_| state.with(visible_window_ids));

    view! {
        <DesktopRoot
            id="desktop-shell-root"
            style=root_style
            layout_mode=Signal::derive(move || {
                layout.get().window_management_mode.as_str().to_string()
            })
            device_class=Signal::derive(move || layout.get().device_class.as_str().to_string())
            reduced_motion=Signal::derive(move || layout.get().capabilities.reduced_motion)
        >
            <DesktopTaskbar />
            <DesktopBackdrop style=backdrop>
                <Show when=move || !layout.get().is_overlay() fallback=|| ()>
                    <DesktopSidebarLauncher />
                </Show>
                <DesktopIcons />
                <DesktopWindowLayer>
                    <For each=move || window_ids.get() key=|window_id| window_id.0 let:window_id>
                        <DesktopWindow window_id=window_id />
                    </For>
                </DesktopWindowLayer>
            </DesktopBackdrop>
        </DesktopRoot>
    }
}
