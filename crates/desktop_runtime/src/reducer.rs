//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use serde_json::Value;
use thiserror::Error;

use crate::{
    content::content_title,
    layout::LayoutPolicy,
    model::{
        ContentType, DesktopState, DragSession, InteractionState, PointerPosition, ResizeEdge,
        ResizeSession, WindowDescriptor, WindowId, WindowInteraction,
    },
    theme::{wallpaper_by_id, ActiveTheme, PersistedTheme},
    window_manager::{
        drag_geometry, focus_window, maximize_window, reconcile_viewport, resize_geometry,
        restore_maximized_window,
    },
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open a window for `content_type`, or re-focus the one already open.
    Open {
        /// Content hosted by the window.
        content_type: ContentType,
        /// Data handed to the content renderer.
        payload: Value,
    },
    /// Close a window by id.
    Close {
        /// Window to close.
        window_id: WindowId,
    },
    /// Minimize a window.
    Minimize {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Flip a window's minimized flag.
    ToggleMinimize {
        /// Window to toggle.
        window_id: WindowId,
    },
    /// Raise a window to the top of the stack.
    Focus {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Clear a window's minimized flag.
    Restore {
        /// Window to restore.
        window_id: WindowId,
    },
    /// Taskbar button semantics: restore a minimized window, minimize the topmost one, focus
    /// anything else.
    ActivateTaskbarWindow {
        /// Window associated with the taskbar button.
        window_id: WindowId,
    },
    /// Begin dragging a window by its titlebar.
    BeginMove {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Update an in-progress window drag.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// Commit the live drag geometry and end the drag.
    EndMove,
    /// Begin resizing a window.
    BeginResize {
        /// Window being resized.
        window_id: WindowId,
        /// Edge or corner being dragged.
        edge: ResizeEdge,
        /// Pointer position at resize start.
        pointer: PointerPosition,
    },
    /// Update an in-progress window resize.
    UpdateResize {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// Commit the live resize geometry and end the resize.
    EndResize,
    /// Expand a window to the maximized rectangle.
    Maximize {
        /// Window to maximize.
        window_id: WindowId,
    },
    /// Return a maximized window to its snapshot geometry.
    RestoreMaximized {
        /// Window to restore.
        window_id: WindowId,
    },
    /// Maximize or restore depending on the current state.
    ToggleMaximize {
        /// Window to toggle.
        window_id: WindowId,
    },
    /// Replace the layout policy and re-fit windows to the new viewport.
    ApplyLayoutPolicy {
        /// Freshly computed policy.
        policy: LayoutPolicy,
    },
    /// Switch to a built-in wallpaper and its palette.
    SelectWallpaper {
        /// Wallpaper catalog id.
        wallpaper_id: String,
    },
    /// Restore the persisted theme at boot.
    HydrateTheme {
        /// Theme loaded from preferences.
        theme: PersistedTheme,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Persist the active theme.
    PersistTheme,
    /// Discard non-reactive per-window memory (scroll offsets) for a closed window.
    ForgetWindow(WindowId),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that cannot be applied.
pub enum ReducerError {
    /// The requested wallpaper is not in the built-in catalog.
    #[error("unknown wallpaper `{wallpaper_id}`")]
    UnknownWallpaper {
        /// Requested wallpaper id.
        wallpaper_id: String,
    },
}

/// Applies a [`DesktopAction`] to the desktop runtime state and collects resulting side effects.
///
/// Actions referencing windows that are not open are ignored: they return no effects and leave
/// both states untouched.
///
/// # Errors
///
/// Returns [`ReducerError::UnknownWallpaper`] when a wallpaper id is not in the catalog. The
/// state is unchanged in that case.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::Open {
            content_type,
            payload,
        } => open_window(state, interaction, content_type, payload),
        DesktopAction::Close { window_id } => {
            let before_len = state.windows.len();
            state.windows.retain(|w| w.id != window_id);
            if state.windows.len() != before_len {
                release_pointer(interaction, window_id);
                interaction.windows.remove(&window_id);
                effects.push(RuntimeEffect::ForgetWindow(window_id));
            }
        }
        DesktopAction::Minimize { window_id } => set_minimized(state, interaction, window_id, true),
        DesktopAction::ToggleMinimize { window_id } => {
            if let Some(minimized) = state.window(window_id).map(|w| w.is_minimized) {
                set_minimized(state, interaction, window_id, !minimized);
            }
        }
        DesktopAction::Focus { window_id } => {
            focus_window(state, window_id);
        }
        DesktopAction::Restore { window_id } => {
            set_minimized(state, interaction, window_id, false)
        }
        DesktopAction::ActivateTaskbarWindow { window_id } => {
            let Some(window) = state.window(window_id) else {
                return Ok(effects);
            };
            if window.is_minimized {
                set_minimized(state, interaction, window_id, false);
                focus_window(state, window_id);
            } else if state.topmost_visible().map(|w| w.id) == Some(window_id) {
                set_minimized(state, interaction, window_id, true);
            } else {
                focus_window(state, window_id);
            }
        }
        DesktopAction::BeginMove { window_id, pointer } => {
            let Some(position) = state.window(window_id).map(|w| w.position) else {
                return Ok(effects);
            };
            focus_window(state, window_id);
            if interaction.is_maximized(window_id)
                || interaction.resizing.is_some()
                || !state.layout.pointer_drag_enabled()
            {
                return Ok(effects);
            }
            if let Some(previous) = interaction.dragging {
                release_pointer(interaction, previous.window_id);
            }
            interaction.dragging = Some(DragSession {
                window_id,
                offset: PointerPosition::new(pointer.x - position.x, pointer.y - position.y),
            });
        }
        DesktopAction::UpdateMove { pointer } => {
            let Some(session) = interaction.dragging else {
                return Ok(effects);
            };
            let Some(window) = state.window(session.window_id) else {
                interaction.dragging = None;
                return Ok(effects);
            };
            let live = drag_geometry(&state.layout, session, window.size, pointer);
            interaction.windows.entry(session.window_id).or_default().live = Some(live);
        }
        DesktopAction::EndMove => {
            if let Some(session) = interaction.dragging.take() {
                commit_live_geometry(state, interaction, session.window_id);
            }
        }
        DesktopAction::BeginResize {
            window_id,
            edge,
            pointer,
        } => {
            let Some(start_geometry) = state.window(window_id).map(WindowDescriptor::geometry)
            else {
                return Ok(effects);
            };
            focus_window(state, window_id);
            if interaction.is_maximized(window_id)
                || interaction.dragging.is_some()
                || !state.layout.resize_enabled()
            {
                return Ok(effects);
            }
            if let Some(previous) = interaction.resizing {
                release_pointer(interaction, previous.window_id);
            }
            interaction.resizing = Some(ResizeSession {
                window_id,
                edge,
                pointer_start: pointer,
                start_geometry,
            });
        }
        DesktopAction::UpdateResize { pointer } => {
            let Some(session) = interaction.resizing else {
                return Ok(effects);
            };
            if state.window(session.window_id).is_none() {
                interaction.resizing = None;
                return Ok(effects);
            }
            let live = resize_geometry(session, pointer);
            interaction.windows.entry(session.window_id).or_default().live = Some(live);
        }
        DesktopAction::EndResize => {
            if let Some(session) = interaction.resizing.take() {
                commit_live_geometry(state, interaction, session.window_id);
            }
        }
        DesktopAction::Maximize { window_id } => {
            release_pointer(interaction, window_id);
            if maximize_window(state, interaction, window_id) {
                focus_window(state, window_id);
            }
        }
        DesktopAction::RestoreMaximized { window_id } => {
            release_pointer(interaction, window_id);
            restore_maximized_window(state, interaction, window_id);
        }
        DesktopAction::ToggleMaximize { window_id } => {
            let action = if interaction.is_maximized(window_id) {
                DesktopAction::RestoreMaximized { window_id }
            } else {
                DesktopAction::Maximize { window_id }
            };
            return reduce_desktop(state, interaction, action);
        }
        DesktopAction::ApplyLayoutPolicy { policy } => {
            if policy == state.layout {
                return Ok(effects);
            }
            state.layout = policy;
            if !policy.pointer_drag_enabled() {
                if let Some(session) = interaction.dragging.take() {
                    clear_live(interaction, session.window_id);
                }
            }
            if !policy.resize_enabled() {
                if let Some(session) = interaction.resizing.take() {
                    clear_live(interaction, session.window_id);
                }
            }
            reconcile_viewport(state, interaction);
        }
        DesktopAction::SelectWallpaper { wallpaper_id } => {
            let Some(wallpaper) = wallpaper_by_id(&wallpaper_id) else {
                return Err(ReducerError::UnknownWallpaper { wallpaper_id });
            };
            let theme = ActiveTheme::from_wallpaper(wallpaper);
            if theme != state.theme {
                state.theme = theme;
                effects.push(RuntimeEffect::PersistTheme);
            }
        }
        DesktopAction::HydrateTheme { theme } => {
            state.theme = ActiveTheme::from_persisted(&theme);
        }
    }
    Ok(effects)
}

fn open_window(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    content_type: ContentType,
    payload: Value,
) {
    if let Some(existing) = state.window_for_content(content_type).map(|w| w.id) {
        set_minimized(state, interaction, existing, false);
        focus_window(state, existing);
        return;
    }

    let window_id = WindowId(state.next_window_id);
    state.next_window_id += 1;
    let (geometry, size_mode) = state
        .layout
        .initial_window_geometry(content_type, state.windows.len());
    let z_index = state.max_z_index() + 1;
    state.windows.push(WindowDescriptor {
        id: window_id,
        content_type,
        title: content_title(content_type),
        position: geometry.position,
        size: geometry.size,
        size_mode,
        z_index,
        is_minimized: false,
        payload,
    });
    interaction
        .windows
        .insert(window_id, WindowInteraction::default());
}

fn set_minimized(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    window_id: WindowId,
    minimized: bool,
) {
    let Some(window) = state.window_mut(window_id) else {
        return;
    };
    window.is_minimized = minimized;
    if minimized {
        release_pointer(interaction, window_id);
    }
}

/// Drops any drag/resize session held by `window_id` together with its uncommitted geometry.
fn release_pointer(interaction: &mut InteractionState, window_id: WindowId) {
    let held_drag = interaction
        .dragging
        .is_some_and(|session| session.window_id == window_id);
    let held_resize = interaction
        .resizing
        .is_some_and(|session| session.window_id == window_id);
    if held_drag {
        interaction.dragging = None;
    }
    if held_resize {
        interaction.resizing = None;
    }
    if held_drag || held_resize {
        clear_live(interaction, window_id);
    }
}

fn clear_live(interaction: &mut InteractionState, window_id: WindowId) {
    if let Some(entry) = interaction.windows.get_mut(&window_id) {
        entry.live = None;
    }
}

fn commit_live_geometry(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    window_id: WindowId,
) {
    let live = interaction
        .windows
        .get_mut(&window_id)
        .and_then(|entry| entry.live.take());
    if let (Some(live), Some(window)) = (live, state.window_mut(window_id)) {
        window.set_geometry(live);
    }
}

#[cfg(test)]
mod tests {
    use platform_host::EnvironmentSignals;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::{
        layout::TASKBAR_HEIGHT,
        model::{effective_geometry, SizeMode, WindowGeometry, WindowPosition},
        window_manager::{MIN_VISIBLE_HEIGHT, MIN_VISIBLE_WIDTH, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH},
    };

    fn desktop(width: i32, height: i32) -> (DesktopState, InteractionState) {
        let state = DesktopState {
            layout: LayoutPolicy::from_signals(&EnvironmentSignals::with_viewport(width, height)),
            ..DesktopState::default()
        };
        (state, InteractionState::default())
    }

    fn dispatch(
        state: &mut DesktopState,
        interaction: &mut InteractionState,
        action: DesktopAction,
    ) -> Vec<RuntimeEffect> {
        reduce_desktop(state, interaction, action).expect("reduce")
    }

    fn open(
        state: &mut DesktopState,
        interaction: &mut InteractionState,
        content_type: ContentType,
    ) -> WindowId {
        dispatch(
            state,
            interaction,
            DesktopAction::Open {
                content_type,
                payload: Value::Null,
            },
        );
        state
            .window_for_content(content_type)
            .expect("window opened")
            .id
    }

    fn z(state: &DesktopState, window_id: WindowId) -> u32 {
        state.window(window_id).expect("window").z_index
    }

    fn geometry(state: &DesktopState, window_id: WindowId) -> WindowGeometry {
        state.window(window_id).expect("window").geometry()
    }

    #[test]
    fn open_assigns_increasing_z_order_and_catalog_titles() {
        let (mut state, mut interaction) = desktop(1280, 800);

        let about = open(&mut state, &mut interaction, ContentType::AboutMe);
        let projects = open(&mut state, &mut interaction, ContentType::Projects);

        assert_eq!(z(&state, about), 1);
        assert_eq!(z(&state, projects), 2);
        assert_eq!(state.window(about).map(|w| w.title.as_str()), Some("About Me"));
        assert_eq!(geometry(&state, projects), WindowGeometry::new(130, 130, 800, 600));
        assert_eq!(interaction.window(projects), WindowInteraction::default());
    }

    #[test]
    fn opening_an_open_content_type_refocuses_instead_of_duplicating() {
        let (mut state, mut interaction) = desktop(1280, 800);
        let about = open(&mut state, &mut interaction, ContentType::AboutMe);
        open(&mut state, &mut interaction, ContentType::Skills);
        dispatch(&mut state, &mut interaction, DesktopAction::Minimize { window_id: about });

        let again = open(&mut state, &mut interaction, ContentType::AboutMe);

        assert_eq!(again, about);
        assert_eq!(state.windows.len(), 2);
        assert_eq!(z(&state, about), 3);
        assert!(!state.window(about).expect("window").is_minimized);
    }

    #[test]
    fn focus_is_idempotent_for_the_topmost_window() {
        let (mut state, mut interaction) = desktop(1280, 800);
        let about = open(&mut state, &mut interaction, ContentType::AboutMe);
        let skills = open(&mut state, &mut interaction, ContentType::Skills);

        let before = state.clone();
        dispatch(&mut state, &mut interaction, DesktopAction::Focus { window_id: skills });
        assert_eq!(state, before);

        dispatch(&mut state, &mut interaction, DesktopAction::Focus { window_id: about });
        assert!(z(&state, about) > z(&state, skills));
    }

    #[test]
    fn missing_window_ids_are_silent_no_ops() {
        let (mut state, mut interaction) = desktop(1280, 800);
        open(&mut state, &mut interaction, ContentType::AboutMe);
        let before = (state.clone(), interaction.clone());
        let ghost = WindowId(99);

        for action in [
            DesktopAction::Close { window_id: ghost },
            DesktopAction::Minimize { window_id: ghost },
            DesktopAction::ToggleMinimize { window_id: ghost },
            DesktopAction::Focus { window_id: ghost },
            DesktopAction::Restore { window_id: ghost },
            DesktopAction::ActivateTaskbarWindow { window_id: ghost },
            DesktopAction::BeginMove {
                window_id: ghost,
                pointer: PointerPosition::new(1, 1),
            },
            DesktopAction::BeginResize {
                window_id: ghost,
                edge: ResizeEdge::SouthEast,
                pointer: PointerPosition::new(1, 1),
            },
            DesktopAction::Maximize { window_id: ghost },
            DesktopAction::RestoreMaximized { window_id: ghost },
            DesktopAction::UpdateMove {
                pointer: PointerPosition::new(5, 5),
            },
            DesktopAction::EndMove,
            DesktopAction::EndResize,
        ] {
            assert_eq!(dispatch(&mut state, &mut interaction, action), Vec::new());
        }
        assert_eq!((state, interaction), before);
    }

    #[test]
    fn about_me_drag_then_maximize_then_restore() {
        let (mut state, mut interaction) = desktop(1280, 800);
        let about = open(&mut state, &mut interaction, ContentType::AboutMe);
        assert_eq!(geometry(&state, about), WindowGeometry::new(100, 100, 800, 600));

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: about,
                pointer: PointerPosition::new(300, 115),
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: PointerPosition::new(350, 145),
            },
        );
        assert_eq!(
            interaction.window(about).live,
            Some(WindowGeometry::new(150, 130, 800, 600))
        );
        assert_eq!(geometry(&state, about), WindowGeometry::new(100, 100, 800, 600));

        dispatch(&mut state, &mut interaction, DesktopAction::EndMove);
        assert_eq!(geometry(&state, about), WindowGeometry::new(150, 130, 800, 600));
        assert_eq!(interaction.dragging, None);
        assert_eq!(interaction.window(about).live, None);

        dispatch(&mut state, &mut interaction, DesktopAction::Maximize { window_id: about });
        assert_eq!(
            interaction.window(about).previous_geometry,
            Some(WindowGeometry::new(150, 130, 800, 600))
        );
        assert_eq!(
            geometry(&state, about),
            WindowGeometry::new(64, TASKBAR_HEIGHT, 1216, 760)
        );

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::RestoreMaximized { window_id: about },
        );
        assert_eq!(geometry(&state, about), WindowGeometry::new(150, 130, 800, 600));
        assert_eq!(interaction.window(about).previous_geometry, None);
        assert!(!interaction.is_maximized(about));
    }

    #[test]
    fn committed_drag_position_stays_within_bounds() {
        let (mut state, mut interaction) = desktop(1280, 800);
        let about = open(&mut state, &mut interaction, ContentType::AboutMe);

        for (pointer, expected) in [
            (PointerPosition::new(-900, -900), WindowPosition { x: 0, y: TASKBAR_HEIGHT }),
            (
                PointerPosition::new(9000, 9000),
                WindowPosition {
                    x: 1280 - MIN_VISIBLE_WIDTH,
                    y: 800 - MIN_VISIBLE_HEIGHT,
                },
            ),
        ] {
            let start = state.window(about).expect("window").position;
            dispatch(
                &mut state,
                &mut interaction,
                DesktopAction::BeginMove {
                    window_id: about,
                    pointer: PointerPosition::new(start.x + 10, start.y + 10),
                },
            );
            dispatch(&mut state, &mut interaction, DesktopAction::UpdateMove { pointer });
            dispatch(&mut state, &mut interaction, DesktopAction::EndMove);
            assert_eq!(state.window(about).expect("window").position, expected);
        }
    }

    #[test]
    fn resize_is_floored_and_committed_on_end() {
        let (mut state, mut interaction) = desktop(1280, 800);
        let about = open(&mut state, &mut interaction, ContentType::AboutMe);

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::BeginResize {
                window_id: about,
                edge: ResizeEdge::SouthEast,
                pointer: PointerPosition::new(900, 700),
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateResize {
                pointer: PointerPosition::new(0, 0),
            },
        );
        assert_eq!(geometry(&state, about).size.width, 800);

        dispatch(&mut state, &mut interaction, DesktopAction::EndResize);
        assert_eq!(
            geometry(&state, about),
            WindowGeometry::new(100, 100, MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)
        );
        assert_eq!(interaction.resizing, None);
    }

    #[test]
    fn maximized_windows_ignore_drag_and_resize() {
        let (mut state, mut interaction) = desktop(1280, 800);
        let about = open(&mut state, &mut interaction, ContentType::AboutMe);
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize { window_id: about },
        );
        assert!(interaction.is_maximized(about));

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: about,
                pointer: PointerPosition::new(400, 50),
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::BeginResize {
                window_id: about,
                edge: ResizeEdge::East,
                pointer: PointerPosition::new(1280, 400),
            },
        );
        assert_eq!(interaction.dragging, None);
        assert_eq!(interaction.resizing, None);

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize { window_id: about },
        );
        assert_eq!(geometry(&state, about), WindowGeometry::new(100, 100, 800, 600));
    }

    #[test]
    fn minimize_and_restore_round_trip_keeps_the_descriptor() {
        let (mut state, mut interaction) = desktop(1280, 800);
        let about = open(&mut state, &mut interaction, ContentType::AboutMe);
        open(&mut state, &mut interaction, ContentType::Skills);
        let before = state.window(about).expect("window").clone();

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMinimize { window_id: about },
        );
        assert!(state.window(about).expect("window").is_minimized);
        dispatch(&mut state, &mut interaction, DesktopAction::Restore { window_id: about });

        assert_eq!(state.window(about), Some(&before));
        assert_eq!(z(&state, about), 1);
    }

    #[test]
    fn drag_in_progress_is_refitted_when_the_viewport_shrinks() {
        let (mut state, mut interaction) = desktop(1920, 1200);
        let about = open(&mut state, &mut interaction, ContentType::AboutMe);

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: about,
                pointer: PointerPosition::new(110, 110),
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: PointerPosition::new(1700, 1000),
            },
        );
        assert_eq!(
            interaction.window(about).live,
            Some(WindowGeometry::new(1690, 990, 800, 600))
        );

        let smaller = LayoutPolicy::from_signals(&EnvironmentSignals::with_viewport(1280, 800));
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::ApplyLayoutPolicy { policy: smaller },
        );
        assert_eq!(
            interaction.window(about).live,
            Some(WindowGeometry::new(
                1280 - MIN_VISIBLE_WIDTH,
                800 - MIN_VISIBLE_HEIGHT,
                800,
                600
            ))
        );

        dispatch(&mut state, &mut interaction, DesktopAction::EndMove);
        let (min_x, max_x, min_y, max_y) = smaller.drag_bounds();
        let committed = geometry(&state, about).position;
        assert!((min_x..=max_x).contains(&committed.x));
        assert!((min_y..=max_y).contains(&committed.y));
        assert_eq!(interaction.window(about).live, None);
    }

    #[test]
    fn starting_a_new_session_discards_the_previous_holders_live_geometry() {
        let (mut state, mut interaction) = desktop(1280, 800);
        let about = open(&mut state, &mut interaction, ContentType::AboutMe);
        let skills = open(&mut state, &mut interaction, ContentType::Skills);

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: about,
                pointer: PointerPosition::new(110, 110),
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: PointerPosition::new(400, 300),
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: skills,
                pointer: PointerPosition::new(140, 140),
            },
        );
        dispatch(&mut state, &mut interaction, DesktopAction::EndMove);

        assert_eq!(interaction.window(about).live, None);
        assert_eq!(geometry(&state, about), WindowGeometry::new(100, 100, 800, 600));
        assert_eq!(
            effective_geometry(state.window(about).expect("window"), &interaction),
            WindowGeometry::new(100, 100, 800, 600)
        );

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::BeginResize {
                window_id: about,
                edge: ResizeEdge::East,
                pointer: PointerPosition::new(900, 400),
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateResize {
                pointer: PointerPosition::new(1000, 400),
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::BeginResize {
                window_id: skills,
                edge: ResizeEdge::South,
                pointer: PointerPosition::new(500, 730),
            },
        );

        assert_eq!(interaction.window(about).live, None);
        assert_eq!(
            interaction.resizing.map(|session| session.window_id),
            Some(skills)
        );
    }

    #[test]
    fn taskbar_activation_restores_minimizes_or_focuses() {
        let (mut state, mut interaction) = desktop(1280, 800);
        let about = open(&mut state, &mut interaction, ContentType::AboutMe);
        let skills = open(&mut state, &mut interaction, ContentType::Skills);

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::ActivateTaskbarWindow { window_id: skills },
        );
        assert!(state.window(skills).expect("window").is_minimized);

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::ActivateTaskbarWindow { window_id: skills },
        );
        assert!(!state.window(skills).expect("window").is_minimized);
        assert_eq!(state.topmost_visible().map(|w| w.id), Some(skills));

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::ActivateTaskbarWindow { window_id: about },
        );
        assert_eq!(state.topmost_visible().map(|w| w.id), Some(about));
        assert!(!state.window(skills).expect("window").is_minimized);
    }

    #[test]
    fn closing_mid_drag_releases_the_pointer_and_forgets_the_window() {
        let (mut state, mut interaction) = desktop(1280, 800);
        let about = open(&mut state, &mut interaction, ContentType::AboutMe);
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: about,
                pointer: PointerPosition::new(200, 110),
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: PointerPosition::new(260, 150),
            },
        );

        let effects = dispatch(&mut state, &mut interaction, DesktopAction::Close { window_id: about });

        assert_eq!(effects, vec![RuntimeEffect::ForgetWindow(about)]);
        assert!(state.windows.is_empty());
        assert_eq!(interaction, InteractionState::default());
        assert_eq!(
            dispatch(
                &mut state,
                &mut interaction,
                DesktopAction::UpdateMove {
                    pointer: PointerPosition::new(300, 300)
                }
            ),
            Vec::new()
        );
    }

    #[test]
    fn overlay_mode_fills_the_viewport_and_disables_dragging() {
        let (mut state, mut interaction) = desktop(390, 844);
        let contact = open(&mut state, &mut interaction, ContentType::Contact);

        let window = state.window(contact).expect("window");
        assert_eq!(window.size_mode, SizeMode::FillViewport);
        assert_eq!(window.geometry(), WindowGeometry::new(0, TASKBAR_HEIGHT, 390, 804));

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: contact,
                pointer: PointerPosition::new(100, 60),
            },
        );
        assert_eq!(interaction.dragging, None);

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::ApplyLayoutPolicy {
                policy: LayoutPolicy::from_signals(&EnvironmentSignals::with_viewport(844, 390)),
            },
        );
        assert_eq!(
            geometry(&state, contact),
            WindowGeometry::new(0, TASKBAR_HEIGHT, 844, 350)
        );
    }

    #[test]
    fn identical_layout_policy_is_a_no_op() {
        let (mut state, mut interaction) = desktop(1280, 800);
        open(&mut state, &mut interaction, ContentType::AboutMe);
        let before = state.clone();

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::ApplyLayoutPolicy {
                policy: before.layout,
            },
        );
        assert_eq!(state, before);
    }

    #[test]
    fn shrinking_the_viewport_re_expands_maximized_windows() {
        let (mut state, mut interaction) = desktop(1280, 800);
        let about = open(&mut state, &mut interaction, ContentType::AboutMe);
        dispatch(&mut state, &mut interaction, DesktopAction::Maximize { window_id: about });

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::ApplyLayoutPolicy {
                policy: LayoutPolicy::from_signals(&EnvironmentSignals::with_viewport(1100, 700)),
            },
        );
        assert_eq!(
            geometry(&state, about),
            WindowGeometry::new(64, TASKBAR_HEIGHT, 1036, 660)
        );

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::RestoreMaximized { window_id: about },
        );
        assert_eq!(geometry(&state, about), WindowGeometry::new(100, 100, 800, 600));
    }

    #[test]
    fn selecting_a_wallpaper_replaces_the_palette_and_persists() {
        let (mut state, mut interaction) = desktop(1280, 800);

        let effects = dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::SelectWallpaper {
                wallpaper_id: "deep-ocean".to_string(),
            },
        );
        assert_eq!(effects, vec![RuntimeEffect::PersistTheme]);
        assert_eq!(state.theme.wallpaper_id, "deep-ocean");
        assert_eq!(state.theme.palette.primary.as_str(), "#3b82f6");

        let again = dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::SelectWallpaper {
                wallpaper_id: "deep-ocean".to_string(),
            },
        );
        assert_eq!(again, Vec::new());
    }

    #[test]
    fn unknown_wallpaper_is_an_error_and_leaves_state_alone() {
        let (mut state, mut interaction) = desktop(1280, 800);
        let before = state.clone();

        let err = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::SelectWallpaper {
                wallpaper_id: "vaporwave".to_string(),
            },
        )
        .expect_err("unknown wallpaper");

        assert_eq!(
            err,
            ReducerError::UnknownWallpaper {
                wallpaper_id: "vaporwave".to_string()
            }
        );
        assert_eq!(state, before);
    }

    #[test]
    fn hydrate_theme_restores_the_persisted_palette() {
        let (mut state, mut interaction) = desktop(1280, 800);
        let mut persisted = ActiveTheme::default().to_persisted();
        persisted.wallpaper_name = "Forest Mist".to_string();
        persisted.palette.primary =
            crate::theme::ThemeColor::parse("#10b981").expect("valid color");

        let effects = dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::HydrateTheme { theme: persisted },
        );

        assert_eq!(effects, Vec::new());
        assert_eq!(state.theme.wallpaper_id, "forest-mist");
        assert_eq!(state.theme.palette.primary.as_str(), "#10b981");
    }

    #[test]
    fn open_payload_is_kept_on_the_descriptor() {
        let (mut state, mut interaction) = desktop(1280, 800);
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::Open {
                content_type: ContentType::Projects,
                payload: json!({ "section": "featured" }),
            },
        );
        assert_eq!(
            state
                .window_for_content(ContentType::Projects)
                .map(|w| w.payload.clone()),
            Some(json!({ "section": "featured" }))
        );
    }
}
