use super::*;
use crate::{
    content::{content_catalog, ContentCatalogEntry},
    layout::{IconDisplayMode, TASKBAR_HEIGHT},
    theme::{themed_style, ThemeRole},
};
use system_ui::{DesktopIconButton, DesktopIconGrid, Icon, IconSize};

const ICON_CELL_WIDTH: i32 = 96;
const ICON_CELL_HEIGHT: i32 = 104;
const ICON_MARGIN: i32 = 16;

fn desktop_entries() -> impl Iterator<Item = &'static ContentCatalogEntry> {
    content_catalog().iter().filter(|entry| entry.desktop)
}

/// Absolute icon origin in positioned mode: icons fill columns top to bottom, starting right of
/// the sidebar. Grid mode leaves placement to CSS and returns `None`.
fn icon_position(layout: &LayoutPolicy, index: usize) -> Option<(i32, i32)> {
    if layout.icon_display_mode == IconDisplayMode::Grid {
        return None;
    }
    let usable_height = layout.viewport.height - TASKBAR_HEIGHT - 2 * ICON_MARGIN;
    let rows = (usable_height / ICON_CELL_HEIGHT).max(1) as usize;
    let column = (index / rows) as i32;
    let row = (index % rows) as i32;
    Some((
        layout.sidebar_width() + ICON_MARGIN + column * ICON_CELL_WIDTH,
        TASKBAR_HEIGHT + ICON_MARGIN + row * ICON_CELL_HEIGHT,
    ))
}

/// Single tap opens on touch-primary devices and in grid mode; otherwise a double click does.
fn opens_on_single_click(layout: &LayoutPolicy) -> bool {
    layout.capabilities.touch_primary() || layout.icon_display_mode == IconDisplayMode::Grid
}

#[component]
pub(super) fn DesktopIcons() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let layout = create_memo(move |_| state.with(|s| s.layout));
    let icon_theme = create_memo(move |_| {
        state.with(|s| themed_style(&s.theme.palette, ThemeRole::Icon).to_css())
    });
    let columns = Signal::derive(move || layout.get().grid_columns);

    let open = move |content_type| {
        runtime.dispatch_action(DesktopAction::Open {
            content_type,
            payload: serde_json::Value::Null,
        });
    };

    view! {
        <DesktopIconGrid columns=columns>
            {desktop_entries()
                .enumerate()
                .map(|(index, entry)| {
                    let content_type = entry.id;
                    let style = Signal::derive(move || match icon_position(&layout.get(), index) {
                        Some((left, top)) => {
                            format!("position: absolute; left: {left}px; top: {top}px;")
                        }
                        None => String::new(),
                    });
                    view! {
                        <DesktopIconButton
                            title=entry.description.clone()
                            aria_label=format!("Open {}", entry.title)
                            style=style
                            on_click=Callback::new(move |_| {
                                if opens_on_single_click(&layout.get_untracked()) {
                                    open(content_type);
                                }
                            })
                            on_dblclick=Callback::new(move |_| {
                                if !opens_on_single_click(&layout.get_untracked()) {
                                    open(content_type);
                                }
                            })
                        >
                            <span data-ui-slot="desktop-icon-glyph" style=move || icon_theme.get()>
                                <Icon icon=entry.icon_name() size=IconSize::Lg />
                            </span>
                            <span data-ui-slot="desktop-icon-label">{entry.title.clone()}</span>
                        </DesktopIconButton>
                    }
                })
                .collect_view()}
        </DesktopIconGrid>
    }
}
