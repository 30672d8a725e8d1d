//! Window management runtime for the portfolio desktop: window registry, drag/resize
//! interaction engine, adaptive layout policy and wallpaper-driven color theme.

pub mod components;
pub mod content;
mod effect_executor;
pub mod host;
pub mod layout;
pub mod model;
pub mod persistence;
pub mod reducer;
mod runtime_context;
pub mod theme;
pub mod throttle;
pub mod window_manager;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use content::{ContentMountContext, ContentRegistry};
pub use layout::LayoutPolicy;
pub use model::*;
pub use persistence::{load_theme, persist_theme, THEME_PREFS_KEY};
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
pub use theme::{ActiveTheme, PersistedTheme, ThemePalette};
