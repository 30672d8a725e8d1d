use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{layout::LayoutPolicy, theme::ActiveTheme};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub u64);

impl std::fmt::Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "window-{}", self.0)
    }
}

/// Content collaborators a window can host. At most one window per content type is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentType {
    AboutMe,
    Projects,
    Experience,
    Skills,
    Contact,
    Terminal,
    Settings,
    FileManager,
    MusicPlayer,
}

impl ContentType {
    pub const ALL: [ContentType; 9] = [
        Self::AboutMe,
        Self::Projects,
        Self::Experience,
        Self::Skills,
        Self::Contact,
        Self::Terminal,
        Self::Settings,
        Self::FileManager,
        Self::MusicPlayer,
    ];

    /// Stable kebab-case id used by the content catalog, deep links and DOM attributes.
    pub const fn id(self) -> &'static str {
        match self {
            Self::AboutMe => "about-me",
            Self::Projects => "projects",
            Self::Experience => "experience",
            Self::Skills => "skills",
            Self::Contact => "contact",
            Self::Terminal => "terminal",
            Self::Settings => "settings",
            Self::FileManager => "file-manager",
            Self::MusicPlayer => "music-player",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|content| content.id() == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowGeometry {
    pub position: WindowPosition,
    pub size: WindowSize,
}

impl WindowGeometry {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            position: WindowPosition { x, y },
            size: WindowSize { width, height },
        }
    }
}

/// Raw pointer coordinates in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

impl PointerPosition {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// How a descriptor's size relates to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SizeMode {
    /// Explicit pixel geometry.
    #[default]
    Pixels,
    /// Fills the area below the taskbar; re-expanded whenever the viewport changes.
    FillViewport,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowDescriptor {
    pub id: WindowId,
    pub content_type: ContentType,
    pub title: String,
    pub position: WindowPosition,
    pub size: WindowSize,
    pub size_mode: SizeMode,
    pub z_index: u32,
    pub is_minimized: bool,
    pub payload: Value,
}

impl WindowDescriptor {
    pub fn geometry(&self) -> WindowGeometry {
        WindowGeometry {
            position: self.position,
            size: self.size,
        }
    }

    pub fn set_geometry(&mut self, geometry: WindowGeometry) {
        self.position = geometry.position;
        self.size = geometry.size;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesktopState {
    pub windows: Vec<WindowDescriptor>,
    pub next_window_id: u64,
    pub layout: LayoutPolicy,
    pub theme: ActiveTheme,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self {
            windows: Vec::new(),
            next_window_id: 1,
            layout: LayoutPolicy::default(),
            theme: ActiveTheme::default(),
        }
    }
}

impl DesktopState {
    pub fn window(&self, window_id: WindowId) -> Option<&WindowDescriptor> {
        self.windows.iter().find(|w| w.id == window_id)
    }

    pub fn window_mut(&mut self, window_id: WindowId) -> Option<&mut WindowDescriptor> {
        self.windows.iter_mut().find(|w| w.id == window_id)
    }

    pub fn window_for_content(&self, content_type: ContentType) -> Option<&WindowDescriptor> {
        self.windows.iter().find(|w| w.content_type == content_type)
    }

    /// Highest assigned z-index, or 0 when nothing is open.
    pub fn max_z_index(&self) -> u32 {
        self.windows.iter().map(|w| w.z_index).max().unwrap_or(0)
    }

    /// The non-minimized window with the highest z-index.
    pub fn topmost_visible(&self) -> Option<&WindowDescriptor> {
        self.windows
            .iter()
            .filter(|w| !w.is_minimized)
            .max_by_key(|w| w.z_index)
    }

    /// Windows ordered back-to-front.
    pub fn windows_by_z(&self) -> Vec<&WindowDescriptor> {
        let mut ordered: Vec<_> = self.windows.iter().collect();
        ordered.sort_by_key(|w| w.z_index);
        ordered
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeEdge {
    East,
    South,
    SouthEast,
}

impl ResizeEdge {
    pub const ALL: [ResizeEdge; 3] = [Self::East, Self::South, Self::SouthEast];

    pub const fn token(self) -> &'static str {
        match self {
            Self::East => "e",
            Self::South => "s",
            Self::SouthEast => "se",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragSession {
    pub window_id: WindowId,
    /// Pointer position minus window position at drag start.
    pub offset: PointerPosition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResizeSession {
    pub window_id: WindowId,
    pub edge: ResizeEdge,
    pub pointer_start: PointerPosition,
    pub start_geometry: WindowGeometry,
}

/// Per-window manager state. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowInteraction {
    pub is_maximized: bool,
    pub previous_geometry: Option<WindowGeometry>,
    /// Geometry during an active drag/resize; overrides the descriptor until committed.
    pub live: Option<WindowGeometry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InteractionState {
    pub dragging: Option<DragSession>,
    pub resizing: Option<ResizeSession>,
    pub windows: BTreeMap<WindowId, WindowInteraction>,
}

impl InteractionState {
    pub fn window(&self, window_id: WindowId) -> WindowInteraction {
        self.windows.get(&window_id).copied().unwrap_or_default()
    }

    pub fn is_maximized(&self, window_id: WindowId) -> bool {
        self.window(window_id).is_maximized
    }

    /// Window currently owning the pointer, if any.
    pub fn active_window(&self) -> Option<WindowId> {
        self.dragging
            .map(|drag| drag.window_id)
            .or(self.resizing.map(|resize| resize.window_id))
    }
}

/// Geometry to render for `window`: live interaction geometry when present, else committed.
pub fn effective_geometry(window: &WindowDescriptor, interaction: &InteractionState) -> WindowGeometry {
    interaction
        .window(window.id)
        .live
        .unwrap_or_else(|| window.geometry())
}

/// Last known scroll offsets of window content slots, keyed by window.
///
/// Kept outside the reactive state so scrolling never triggers a re-render.
#[derive(Debug, Clone, Default)]
pub struct ScrollMemory {
    offsets: HashMap<WindowId, (i32, i32)>,
}

impl ScrollMemory {
    pub fn remember(&mut self, window_id: WindowId, top: i32, left: i32) {
        self.offsets.insert(window_id, (top, left));
    }

    pub fn recall(&self, window_id: WindowId) -> Option<(i32, i32)> {
        self.offsets.get(&window_id).copied()
    }

    pub fn forget(&mut self, window_id: WindowId) {
        self.offsets.remove(&window_id);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn content_ids_round_trip_through_serde_and_lookup() {
        for content in ContentType::ALL {
            assert_eq!(ContentType::from_id(content.id()), Some(content));
            let json = serde_json::to_string(&content).expect("serialize");
            assert_eq!(json, format!("\"{}\"", content.id()));
        }
        assert_eq!(ContentType::from_id("minesweeper"), None);
    }

    #[test]
    fn live_geometry_overrides_committed_geometry() {
        let window = WindowDescriptor {
            id: WindowId(1),
            content_type: ContentType::AboutMe,
            title: "About Me".to_string(),
            position: WindowPosition { x: 100, y: 100 },
            size: WindowSize {
                width: 800,
                height: 600,
            },
            size_mode: SizeMode::Pixels,
            z_index: 1,
            is_minimized: false,
            payload: Value::Null,
        };
        let mut interaction = InteractionState::default();
        assert_eq!(
            effective_geometry(&window, &interaction),
            WindowGeometry::new(100, 100, 800, 600)
        );

        interaction.windows.insert(
            WindowId(1),
            WindowInteraction {
                live: Some(WindowGeometry::new(140, 120, 800, 600)),
                ..WindowInteraction::default()
            },
        );
        assert_eq!(
            effective_geometry(&window, &interaction),
            WindowGeometry::new(140, 120, 800, 600)
        );
    }

    #[test]
    fn scroll_memory_forgets_closed_windows() {
        let mut memory = ScrollMemory::default();
        memory.remember(WindowId(3), 240, 0);
        assert_eq!(memory.recall(WindowId(3)), Some((240, 0)));

        memory.forget(WindowId(3));
        assert_eq!(memory.recall(WindowId(3)), None);
    }
}
