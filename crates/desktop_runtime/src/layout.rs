//! Adaptive layout policy derived from host environment signals.
//!
//! [`LayoutPolicy::from_signals`] is pure: the shell probes the environment (on mount, resize,
//! orientation change and media-feature change), builds a policy, and dispatches
//! [`crate::reducer::DesktopAction::ApplyLayoutPolicy`] only when it differs from the current one.

use platform_host::{ColorScheme, EnvironmentSignals};
use serde::{Deserialize, Serialize};

use crate::{
    model::{ContentType, SizeMode, WindowGeometry},
    window_manager::{MIN_VISIBLE_HEIGHT, MIN_VISIBLE_WIDTH},
};

/// Height of the top taskbar; windows may never be placed above it.
pub const TASKBAR_HEIGHT: i32 = 40;
/// Width of the left sidebar launcher in full and simplified modes.
pub const SIDEBAR_WIDTH: i32 = 64;
/// Below this width the device is a phone.
pub const MOBILE_MAX_WIDTH: i32 = 767;
/// Below this width (and at least [`MOBILE_MAX_WIDTH`] + 1) the device is a tablet.
pub const TABLET_MAX_WIDTH: i32 = 1023;
/// Touch-primary devices narrower than this are still treated as tablets.
pub const TOUCH_TABLET_MAX_WIDTH: i32 = 1279;
/// Minimum viewport for the large-desktop class.
pub const LARGE_DESKTOP_MIN: (i32, i32) = (1920, 1080);
/// Offset applied per already-open window when placing a new one.
pub const STAGGER_STEP: i32 = 30;
/// Stagger resets after this many windows.
pub const STAGGER_WRAP: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeviceClass {
    Mobile,
    Tablet,
    Desktop,
    LargeDesktop,
}

impl DeviceClass {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Tablet => "tablet",
            Self::Desktop => "desktop",
            Self::LargeDesktop => "large-desktop",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// Exactly one of desktop, tablet or mobile layout applies at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutKind {
    Desktop,
    Tablet,
    Mobile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WindowManagementMode {
    /// Free-floating windows with drag, resize and stagger.
    Full,
    /// Inset windows sized to the viewport, still draggable and resizable.
    Simplified,
    /// Every window fills the viewport below the taskbar.
    Overlay,
}

impl WindowManagementMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Simplified => "simplified",
            Self::Overlay => "overlay",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconDisplayMode {
    Positioned,
    Grid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavigationMode {
    Desktop,
    Hybrid,
    Mobile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputCapabilities {
    pub touch: bool,
    pub hover: bool,
    pub fine_pointer: bool,
    pub reduced_motion: bool,
    pub high_contrast: bool,
    pub color_scheme: ColorScheme,
}

impl InputCapabilities {
    /// Touch input without a fine pointer: the finger is the primary input.
    pub const fn touch_primary(self) -> bool {
        self.touch && !self.fine_pointer
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    EaseOut,
    Standard,
}

impl Easing {
    pub const fn css(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseOut => "ease-out",
            Self::Standard => "cubic-bezier(0.4, 0, 0.2, 1)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationSettings {
    pub duration_ms: u32,
    pub easing: Easing,
    pub use_transforms: bool,
    pub will_change: bool,
}

impl AnimationSettings {
    /// CSS `transition` value for window geometry changes.
    pub fn transition_css(self) -> String {
        if self.duration_ms == 0 {
            "none".to_string()
        } else {
            format!(
                "left {ms}ms {e}, top {ms}ms {e}, width {ms}ms {e}, height {ms}ms {e}",
                ms = self.duration_ms,
                e = self.easing.css()
            )
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutPolicy {
    pub device_class: DeviceClass,
    pub orientation: Orientation,
    pub viewport: Viewport,
    pub pixel_ratio: f64,
    pub capabilities: InputCapabilities,
    pub layout_kind: LayoutKind,
    pub window_management_mode: WindowManagementMode,
    pub icon_display_mode: IconDisplayMode,
    pub navigation_mode: NavigationMode,
    pub grid_columns: u8,
    pub animation: AnimationSettings,
}

impl Default for LayoutPolicy {
    fn default() -> Self {
        Self::from_signals(&EnvironmentSignals::default())
    }
}

fn classify_device(width: i32, height: i32, capabilities: InputCapabilities) -> DeviceClass {
    if width <= MOBILE_MAX_WIDTH {
        DeviceClass::Mobile
    } else if width <= TABLET_MAX_WIDTH
        || (width <= TOUCH_TABLET_MAX_WIDTH && capabilities.touch_primary())
    {
        DeviceClass::Tablet
    } else if width >= LARGE_DESKTOP_MIN.0 && height >= LARGE_DESKTOP_MIN.1 {
        DeviceClass::LargeDesktop
    } else {
        DeviceClass::Desktop
    }
}

impl LayoutPolicy {
    /// Derives the full policy from one environment reading.
    pub fn from_signals(signals: &EnvironmentSignals) -> Self {
        let width = signals.viewport_width.max(0);
        let height = signals.viewport_height.max(0);
        let capabilities = InputCapabilities {
            touch: signals.touch,
            hover: signals.hover,
            fine_pointer: signals.fine_pointer,
            reduced_motion: signals.reduced_motion,
            high_contrast: signals.high_contrast,
            color_scheme: signals.color_scheme,
        };
        let device_class = classify_device(width, height, capabilities);
        let orientation = if width > height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        };
        let landscape = orientation == Orientation::Landscape;

        let (layout_kind, window_management_mode, navigation_mode) = match device_class {
            DeviceClass::Mobile => (
                LayoutKind::Mobile,
                WindowManagementMode::Overlay,
                NavigationMode::Mobile,
            ),
            DeviceClass::Tablet => (
                LayoutKind::Tablet,
                WindowManagementMode::Simplified,
                NavigationMode::Hybrid,
            ),
            DeviceClass::Desktop | DeviceClass::LargeDesktop => (
                LayoutKind::Desktop,
                WindowManagementMode::Full,
                NavigationMode::Desktop,
            ),
        };

        let icon_display_mode = match device_class {
            DeviceClass::Mobile => IconDisplayMode::Grid,
            DeviceClass::Tablet if !landscape => IconDisplayMode::Grid,
            _ => IconDisplayMode::Positioned,
        };

        let grid_columns = match (device_class, landscape) {
            (DeviceClass::Mobile, true) => 4,
            (DeviceClass::Mobile, false) => 3,
            (DeviceClass::Tablet, true) => 5,
            (DeviceClass::Tablet, false) => 4,
            (DeviceClass::Desktop, _) => 6,
            (DeviceClass::LargeDesktop, _) => 8,
        };

        let animation = if capabilities.reduced_motion {
            AnimationSettings {
                duration_ms: 0,
                easing: Easing::Linear,
                use_transforms: false,
                will_change: false,
            }
        } else if device_class == DeviceClass::Mobile {
            AnimationSettings {
                duration_ms: 200,
                easing: Easing::EaseOut,
                use_transforms: true,
                will_change: true,
            }
        } else {
            AnimationSettings {
                duration_ms: 300,
                easing: Easing::Standard,
                use_transforms: true,
                will_change: false,
            }
        };

        Self {
            device_class,
            orientation,
            viewport: Viewport { width, height },
            pixel_ratio: signals.device_pixel_ratio,
            capabilities,
            layout_kind,
            window_management_mode,
            icon_display_mode,
            navigation_mode,
            grid_columns,
            animation,
        }
    }

    pub fn is_overlay(&self) -> bool {
        self.window_management_mode == WindowManagementMode::Overlay
    }

    /// Width reserved on the left for the sidebar launcher.
    pub fn sidebar_width(&self) -> i32 {
        if self.is_overlay() {
            0
        } else {
            SIDEBAR_WIDTH
        }
    }

    /// Whether title-bar dragging is offered: never in overlay mode, never on touch-only input.
    pub fn pointer_drag_enabled(&self) -> bool {
        !self.is_overlay() && (self.capabilities.hover || !self.capabilities.touch)
    }

    pub fn resize_enabled(&self) -> bool {
        !self.is_overlay()
    }

    /// Rectangle covering the viewport below the taskbar and right of the sidebar.
    pub fn maximized_geometry(&self) -> WindowGeometry {
        let sidebar = self.sidebar_width();
        WindowGeometry::new(
            sidebar,
            TASKBAR_HEIGHT,
            (self.viewport.width - sidebar).max(0),
            (self.viewport.height - TASKBAR_HEIGHT).max(0),
        )
    }

    /// Rectangle used by [`SizeMode::FillViewport`] windows.
    pub fn fill_viewport_geometry(&self) -> WindowGeometry {
        WindowGeometry::new(
            0,
            TASKBAR_HEIGHT,
            self.viewport.width,
            (self.viewport.height - TASKBAR_HEIGHT).max(0),
        )
    }

    /// Inclusive `(min_x, max_x, min_y, max_y)` bounds for a window origin.
    pub fn drag_bounds(&self) -> (i32, i32, i32, i32) {
        let max_x = (self.viewport.width - MIN_VISIBLE_WIDTH).max(0);
        let max_y = (self.viewport.height - MIN_VISIBLE_HEIGHT).max(TASKBAR_HEIGHT);
        (0, max_x, TASKBAR_HEIGHT, max_y)
    }

    /// Initial geometry for a new window of `content_type` when `open_count` windows are open.
    ///
    /// The stagger wraps every [`STAGGER_WRAP`] windows; the result is then shrunk and moved so
    /// the whole window lies inside the viewport below the taskbar.
    pub fn initial_window_geometry(
        &self,
        content_type: ContentType,
        open_count: usize,
    ) -> (WindowGeometry, SizeMode) {
        let vw = self.viewport.width;
        let vh = self.viewport.height;
        let stagger = (open_count % STAGGER_WRAP) as i32 * STAGGER_STEP;

        let requested = match self.window_management_mode {
            WindowManagementMode::Overlay => {
                return (self.fill_viewport_geometry(), SizeMode::FillViewport);
            }
            WindowManagementMode::Simplified => WindowGeometry::new(
                20 + stagger,
                60 + stagger,
                (vw - 40).min(800),
                (vh - 80).min(600),
            ),
            WindowManagementMode::Full => {
                let (width, height) = if content_type == ContentType::Settings {
                    (900, 640)
                } else {
                    (800, 600)
                };
                WindowGeometry::new(100 + stagger, 100 + stagger, width, height)
            }
        };

        (self.fit_to_viewport(requested), SizeMode::Pixels)
    }

    fn fit_to_viewport(&self, geometry: WindowGeometry) -> WindowGeometry {
        let vw = self.viewport.width;
        let usable_height = (self.viewport.height - TASKBAR_HEIGHT).max(0);
        let width = geometry.size.width.clamp(0, vw.max(0));
        let height = geometry.size.height.clamp(0, usable_height);
        let x = geometry.position.x.min(vw - width).max(0);
        let y = geometry
            .position
            .y
            .min(self.viewport.height - height)
            .max(TASKBAR_HEIGHT);
        WindowGeometry::new(x, y, width, height)
    }
}
