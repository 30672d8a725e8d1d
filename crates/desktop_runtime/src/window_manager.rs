//! Shared window-manager transition helpers used by the desktop reducer.

use crate::{
    layout::LayoutPolicy,
    model::{
        DesktopState, DragSession, InteractionState, PointerPosition, ResizeEdge, ResizeSession,
        SizeMode, WindowGeometry, WindowId, WindowPosition, WindowSize,
    },
};

/// Minimum allowed managed window width.
pub const MIN_WINDOW_WIDTH: i32 = 300;
/// Minimum allowed managed window height.
pub const MIN_WINDOW_HEIGHT: i32 = 200;
/// Horizontal strip of a window that must stay inside the viewport.
pub const MIN_VISIBLE_WIDTH: i32 = 100;
/// Vertical strip (the titlebar) that must stay inside the viewport.
pub const MIN_VISIBLE_HEIGHT: i32 = 40;

/// Raises `window_id` to the top of the stack.
///
/// Returns `false` when the window is missing or already topmost; the state is untouched then.
pub fn focus_window(state: &mut DesktopState, window_id: WindowId) -> bool {
    let max_z = state.max_z_index();
    let Some(window) = state.window_mut(window_id) else {
        return false;
    };
    if window.z_index == max_z {
        return false;
    }
    window.z_index = max_z + 1;
    true
}

/// Clamps a window origin into the policy's drag bounds.
pub fn clamp_position(policy: &LayoutPolicy, position: WindowPosition) -> WindowPosition {
    let (min_x, max_x, min_y, max_y) = policy.drag_bounds();
    WindowPosition {
        x: position.x.clamp(min_x, max_x),
        y: position.y.clamp(min_y, max_y),
    }
}

/// Live geometry for a drag sample. Size never changes while moving.
pub fn drag_geometry(
    policy: &LayoutPolicy,
    session: DragSession,
    size: WindowSize,
    pointer: PointerPosition,
) -> WindowGeometry {
    let position = clamp_position(
        policy,
        WindowPosition {
            x: pointer.x - session.offset.x,
            y: pointer.y - session.offset.y,
        },
    );
    WindowGeometry { position, size }
}

/// Live geometry for a resize sample, floored at [`MIN_WINDOW_WIDTH`] × [`MIN_WINDOW_HEIGHT`].
pub fn resize_geometry(session: ResizeSession, pointer: PointerPosition) -> WindowGeometry {
    let dx = pointer.x - session.pointer_start.x;
    let dy = pointer.y - session.pointer_start.y;
    let start = session.start_geometry.size;
    let (width, height) = match session.edge {
        ResizeEdge::East => (start.width + dx, start.height),
        ResizeEdge::South => (start.width, start.height + dy),
        ResizeEdge::SouthEast => (start.width + dx, start.height + dy),
    };
    WindowGeometry {
        position: session.start_geometry.position,
        size: WindowSize {
            width: width.max(MIN_WINDOW_WIDTH),
            height: height.max(MIN_WINDOW_HEIGHT),
        },
    }
}

/// Snapshots the committed geometry and expands the window to the maximized rectangle.
///
/// Returns `false` for missing or already maximized windows.
pub fn maximize_window(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    window_id: WindowId,
) -> bool {
    let maximized = state.layout.maximized_geometry();
    let Some(window) = state.window_mut(window_id) else {
        return false;
    };
    let entry = interaction.windows.entry(window_id).or_default();
    if entry.is_maximized {
        return false;
    }
    entry.previous_geometry = Some(window.geometry());
    entry.is_maximized = true;
    entry.live = None;
    window.set_geometry(maximized);
    true
}

/// Restores a maximized window exactly from its snapshot and clears the snapshot.
pub fn restore_maximized_window(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    window_id: WindowId,
) -> bool {
    let Some(window) = state.window_mut(window_id) else {
        return false;
    };
    let Some(entry) = interaction.windows.get_mut(&window_id) else {
        return false;
    };
    if !entry.is_maximized {
        return false;
    }
    if let Some(previous) = entry.previous_geometry.take() {
        window.set_geometry(previous);
    }
    entry.is_maximized = false;
    true
}

/// Caps `geometry` to the viewport and translates it the minimum amount into the drag bounds.
fn fit_into_viewport(policy: &LayoutPolicy, geometry: WindowGeometry) -> WindowGeometry {
    let usable_height = (policy.viewport.height - crate::layout::TASKBAR_HEIGHT).max(0);
    WindowGeometry {
        position: clamp_position(policy, geometry.position),
        size: WindowSize {
            width: geometry.size.width.min(policy.viewport.width.max(0)),
            height: geometry.size.height.min(usable_height),
        },
    }
}

/// Re-fits every window to `state.layout` after a viewport change.
///
/// Maximized and [`SizeMode::FillViewport`] windows are re-expanded. Other windows have their
/// size capped to the viewport and are translated the minimum amount to satisfy the drag bounds.
/// Uncommitted live geometry of an ongoing drag or resize is fitted the same way.
pub fn reconcile_viewport(state: &mut DesktopState, interaction: &mut InteractionState) {
    let policy = state.layout;
    let maximized = policy.maximized_geometry();
    let fill = policy.fill_viewport_geometry();

    for window in &mut state.windows {
        if interaction.is_maximized(window.id) {
            window.set_geometry(maximized);
            continue;
        }
        if window.size_mode == SizeMode::FillViewport {
            window.set_geometry(fill);
            continue;
        }
        window.set_geometry(fit_into_viewport(&policy, window.geometry()));
    }

    for entry in interaction.windows.values_mut() {
        if let Some(live) = entry.live {
            entry.live = Some(fit_into_viewport(&policy, live));
        }
    }
}

#[cfg(test)]
mod tests {
    use platform_host::EnvironmentSignals;
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    use super::*;
    use crate::{
        layout::TASKBAR_HEIGHT,
        model::{ContentType, WindowDescriptor},
    };

    fn state_with_windows(count: u64) -> DesktopState {
        let mut state = DesktopState {
            layout: LayoutPolicy::from_signals(&EnvironmentSignals::with_viewport(1280, 800)),
            ..DesktopState::default()
        };
        for id in 1..=count {
            state.windows.push(WindowDescriptor {
                id: WindowId(id),
                content_type: ContentType::ALL[id as usize - 1],
                title: format!("Window {id}"),
                position: WindowPosition { x: 100, y: 100 },
                size: WindowSize {
                    width: 800,
                    height: 600,
                },
                size_mode: SizeMode::Pixels,
                z_index: id as u32,
                is_minimized: false,
                payload: Value::Null,
            });
        }
        state
    }

    #[test]
    fn focus_assigns_a_new_maximum_unless_already_topmost() {
        let mut state = state_with_windows(3);
        assert!(!focus_window(&mut state, WindowId(3)));
        assert!(focus_window(&mut state, WindowId(1)));
        assert_eq!(state.window(WindowId(1)).map(|w| w.z_index), Some(4));
        assert!(!focus_window(&mut state, WindowId(9)));
    }

    #[test]
    fn drag_geometry_is_clamped_to_reachable_bounds() {
        let state = state_with_windows(1);
        let session = DragSession {
            window_id: WindowId(1),
            offset: PointerPosition::new(20, 10),
        };
        let size = WindowSize {
            width: 800,
            height: 600,
        };

        let up_left = drag_geometry(&state.layout, session, size, PointerPosition::new(-500, 0));
        assert_eq!(up_left.position, WindowPosition { x: 0, y: TASKBAR_HEIGHT });

        let down_right =
            drag_geometry(&state.layout, session, size, PointerPosition::new(5000, 5000));
        assert_eq!(
            down_right.position,
            WindowPosition {
                x: 1280 - MIN_VISIBLE_WIDTH,
                y: 800 - MIN_VISIBLE_HEIGHT
            }
        );
        assert_eq!(down_right.size, size);
    }

    #[test]
    fn resize_geometry_respects_edges_and_floor() {
        let session = ResizeSession {
            window_id: WindowId(1),
            edge: ResizeEdge::East,
            pointer_start: PointerPosition::new(900, 700),
            start_geometry: WindowGeometry::new(100, 100, 800, 600),
        };
        assert_eq!(
            resize_geometry(session, PointerPosition::new(950, 800)),
            WindowGeometry::new(100, 100, 850, 600)
        );
        assert_eq!(
            resize_geometry(
                ResizeSession {
                    edge: ResizeEdge::SouthEast,
                    ..session
                },
                PointerPosition::new(0, 0)
            ),
            WindowGeometry::new(100, 100, MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)
        );
        assert_eq!(
            resize_geometry(
                ResizeSession {
                    edge: ResizeEdge::South,
                    ..session
                },
                PointerPosition::new(0, 760)
            ),
            WindowGeometry::new(100, 100, 800, 660)
        );
    }

    #[test]
    fn reconcile_refits_windows_after_shrinking_the_viewport() {
        let mut state = state_with_windows(3);
        let mut interaction = InteractionState::default();
        state.windows[0].position = WindowPosition { x: 1100, y: 700 };
        state.windows[2].size_mode = SizeMode::FillViewport;
        assert!(maximize_window(&mut state, &mut interaction, WindowId(2)));

        state.layout = LayoutPolicy::from_signals(&EnvironmentSignals::with_viewport(1024, 600));
        reconcile_viewport(&mut state, &mut interaction);

        assert_eq!(
            state.windows[0].geometry(),
            WindowGeometry::new(1024 - MIN_VISIBLE_WIDTH, 600 - MIN_VISIBLE_HEIGHT, 800, 560)
        );
        assert_eq!(
            state.windows[1].geometry(),
            WindowGeometry::new(64, TASKBAR_HEIGHT, 960, 560)
        );
        assert_eq!(
            state.windows[2].geometry(),
            WindowGeometry::new(0, TASKBAR_HEIGHT, 1024, 560)
        );
        assert_eq!(
            interaction.window(WindowId(2)).previous_geometry,
            Some(WindowGeometry::new(100, 100, 800, 600))
        );
    }
}
