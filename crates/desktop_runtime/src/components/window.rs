use super::*;
use crate::{
    content::{content_icon, ContentMountContext},
    layout::AnimationSettings,
    model::{effective_geometry, ResizeEdge, WindowGeometry},
    theme::{themed_style, ThemeRole},
};
use system_ui::{
    Icon, IconName, IconSize, ResizeHandle, WindowBody, WindowControlButton, WindowControls,
    WindowFrame, WindowTitle, WindowTitleBar,
};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

/// Inline geometry, stacking and transition declarations for a window frame.
fn frame_style(
    geometry: WindowGeometry,
    z_index: u32,
    animation: AnimationSettings,
    interacting: bool,
) -> String {
    let transition = if interacting {
        "none".to_string()
    } else {
        animation.transition_css()
    };
    let mut style = format!(
        "left: {}px; top: {}px; width: {}px; height: {}px; z-index: {z_index}; transition: {transition};",
        geometry.position.x, geometry.position.y, geometry.size.width, geometry.size.height,
    );
    if interacting && animation.will_change {
        style.push_str(" will-change: left, top, width, height;");
    }
    style
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let interaction = runtime.interaction;

    let geometry = create_memo(move |_| {
        interaction.with(|ui| {
            state.with(|s| s.window(window_id).map(|w| effective_geometry(w, ui)))
        })
    });
    let z_index = create_memo(move |_| {
        state.with(|s| s.window(window_id).map(|w| w.z_index).unwrap_or_default())
    });
    let title = create_memo(move |_| {
        state.with(|s| s.window(window_id).map(|w| w.title.clone()).unwrap_or_default())
    });
    let focused = create_memo(move |_| {
        state.with(|s| s.topmost_visible().map(|w| w.id) == Some(window_id))
    });
    let maximized = create_memo(move |_| interaction.with(|ui| ui.is_maximized(window_id)));
    let interacting =
        create_memo(move |_| interaction.with(|ui| ui.active_window() == Some(window_id)));
    let layout = create_memo(move |_| state.with(|s| s.layout));
    let window_theme = create_memo(move |_| {
        state.with(|s| themed_style(&s.theme.palette, ThemeRole::Window).to_css())
    });
    let button_theme = create_memo(move |_| {
        state.with(|s| themed_style(&s.theme.palette, ThemeRole::Button).to_css())
    });

    let style = Signal::derive(move || {
        let Some(geometry) = geometry.get() else {
            return String::new();
        };
        format!(
            "{} {}",
            frame_style(
                geometry,
                z_index.get(),
                layout.get().animation,
                interacting.get()
            ),
            window_theme.get()
        )
    });
    let draggable = Signal::derive(move || layout.get().pointer_drag_enabled() && !maximized.get());
    let resizable = Signal::derive(move || layout.get().resize_enabled() && !maximized.get());

    let focus = Callback::new(move |_: web_sys::PointerEvent| {
        if !focused.get_untracked() {
            runtime.dispatch_action(DesktopAction::Focus { window_id });
        }
    });
    let begin_move = Callback::new(move |ev: web_sys::PointerEvent| {
        if !is_primary_pointer(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        runtime.dispatch_action(DesktopAction::BeginMove {
            window_id,
            pointer: pointer_from_pointer_event(&ev),
        });
    });
    let toggle_maximize = move || {
        if !layout.get_untracked().is_overlay() {
            runtime.dispatch_action(DesktopAction::ToggleMaximize { window_id });
        }
    };
    let titlebar_double_click = Callback::new(move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        toggle_maximize();
    });

    let icon = state
        .with_untracked(|s| s.window(window_id).map(|w| content_icon(w.content_type)))
        .unwrap_or(IconName::Document);

    view! {
        <WindowFrame
            window_id=window_id.to_string()
            style=style
            aria_label=title
            focused=focused
            maximized=maximized
            interacting=interacting
            on_pointerdown=focus
        >
            <WindowTitleBar
                draggable=draggable
                on_pointerdown=Callback::new(move |ev: web_sys::PointerEvent| {
                    if draggable.get_untracked() {
                        begin_move.call(ev);
                    }
                })
                on_dblclick=titlebar_double_click
            >
                <WindowTitle>
                    <Icon icon=icon size=IconSize::Sm />
                    <span>{move || title.get()}</span>
                </WindowTitle>
                <WindowControls>
                    <WindowControlButton
                        icon=IconName::Minimize
                        aria_label="Minimize window"
                        style=button_theme
                        on_click=Callback::new(move |_| {
                            runtime.dispatch_action(DesktopAction::Minimize { window_id })
                        })
                    />
                    {move || {
                        let (icon, label) = if maximized.get() {
                            (IconName::Restore, "Restore window")
                        } else {
                            (IconName::Maximize, "Maximize window")
                        };
                        view! {
                            <WindowControlButton
                                icon=icon
                                aria_label=label
                                style=button_theme
                                on_click=Callback::new(move |_| toggle_maximize())
                            />
                        }
                    }}
                    <WindowControlButton
                        icon=IconName::Close
                        aria_label="Close window"
                        style=button_theme
                        on_click=Callback::new(move |_| {
                            runtime.dispatch_action(DesktopAction::Close { window_id })
                        })
                    />
                </WindowControls>
            </WindowTitleBar>
            <DesktopWindowBody window_id=window_id />
            <Show when=move || resizable.get() fallback=|| ()>
                {ResizeEdge::ALL
                    .into_iter()
                    .map(|edge| view! { <WindowResizeHandle window_id=window_id edge=edge /> })
                    .collect_view()}
            </Show>
        </WindowFrame>
    }
}

#[component]
fn WindowResizeHandle(window_id: WindowId, edge: ResizeEdge) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let on_pointerdown = Callback::new(move |ev: web_sys::PointerEvent| {
        if !is_primary_pointer(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        runtime.dispatch_action(DesktopAction::BeginResize {
            window_id,
            edge,
            pointer: pointer_from_pointer_event(&ev),
        });
    });

    view! { <ResizeHandle edge=edge.token() on_pointerdown=on_pointerdown /> }
}

/// Scrollable content slot. The content view is mounted once per window; its scroll offset is
/// remembered across unmounts (minimize, layout switches) and reapplied on mount.
#[component]
fn DesktopWindowBody(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let body_ref = create_node_ref::<html::Div>();

    body_ref.on_load(move |body| {
        if let Some((top, left)) = runtime
            .scroll_memory
            .with_value(|memory| memory.recall(window_id))
        {
            body.set_scroll_top(top);
            body.set_scroll_left(left);
        }
    });

    let on_scroll = Callback::new(move |_: ev::Event| {
        if let Some(body) = body_ref.get_untracked() {
            let (top, left) = (body.scroll_top(), body.scroll_left());
            runtime
                .scroll_memory
                .update_value(|memory| memory.remember(window_id, top, left));
        }
    });

    let contents = runtime
        .state
        .with_untracked(|s| {
            s.window(window_id).map(|w| ContentMountContext {
                window_id,
                content_type: w.content_type,
                title: w.title.clone(),
                payload: w.payload.clone(),
            })
        })
        .map(|context| runtime.content.with_value(|registry| registry.render(context)))
        .unwrap_or_else(|| ().into_view());

    view! {
        <WindowBody node_ref=body_ref on_scroll=on_scroll>
            {contents}
        </WindowBody>
    }
}
