use super::*;
use crate::{
    content::{content_catalog, ContentCatalogEntry},
    theme::{themed_style, ThemeRole},
};
use system_ui::{DesktopSidebar, SidebarButton};

fn sidebar_entries() -> impl Iterator<Item = &'static ContentCatalogEntry> {
    content_catalog().iter().filter(|entry| entry.sidebar)
}

#[component]
pub(super) fn DesktopSidebarLauncher() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let button_style = create_memo(move |_| {
        state.with(|s| themed_style(&s.theme.palette, ThemeRole::Button).to_css())
    });

    view! {
        <DesktopSidebar aria_label="Applications">
            {sidebar_entries()
                .map(|entry| {
                    let content_type = entry.id;
                    let active = Signal::derive(move || {
                        state.with(|s| {
                            s.window_for_content(content_type)
                                .is_some_and(|w| !w.is_minimized)
                        })
                    });
                    view! {
                        <SidebarButton
                            icon=entry.icon_name()
                            aria_label=entry.title.clone()
                            style=button_style
                            active=active
                            on_click=Callback::new(move |_| {
                                runtime.dispatch_action(DesktopAction::Open {
                                    content_type,
                                    payload: serde_json::Value::Null,
                                })
                            })
                        />
                    }
                })
                .collect_view()}
        </DesktopSidebar>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn every_catalog_entry_is_reachable_from_the_sidebar() {
        assert_eq!(sidebar_entries().count(), content_catalog().len());
    }
}
