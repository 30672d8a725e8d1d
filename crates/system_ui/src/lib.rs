//! Shared UI primitive library for the portfolio desktop shell and its content views.
//!
//! The crate owns reusable Leptos primitives, a centralized icon API, and the
//! stable `data-ui-*` DOM contract consumed by the desktop shell CSS layers.
//! Content views should compose these primitives instead of emitting ad hoc control
//! markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    Button, ButtonSize, ButtonVariant, Cluster, DesktopBackdrop, DesktopIconButton,
    DesktopIconGrid, DesktopRoot, DesktopSidebar, DesktopWindowLayer, Grid, Heading, LayoutAlign,
    LayoutGap, LayoutPadding, ResizeHandle, SidebarButton, Stack, SwatchButton, Taskbar,
    TaskbarButton, TaskbarSection, Text, TextRole, TextTone, WindowBody, WindowControlButton,
    WindowControls, WindowFrame, WindowTitle, WindowTitleBar,
};

/// Convenience imports for crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        Button, ButtonSize, ButtonVariant, Cluster, DesktopBackdrop, DesktopIconButton,
        DesktopIconGrid, DesktopRoot, DesktopSidebar, DesktopWindowLayer, Grid, Heading, Icon,
        IconName, IconSize, LayoutAlign, LayoutGap, LayoutPadding, ResizeHandle, SidebarButton,
        Stack, SwatchButton, Taskbar, TaskbarButton, TaskbarSection, Text, TextRole, TextTone,
        WindowBody, WindowControlButton, WindowControls, WindowFrame, WindowTitle,
        WindowTitleBar,
    };
}
