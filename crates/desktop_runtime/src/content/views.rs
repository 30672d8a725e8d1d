//! Built-in placeholder content views.

use leptos::*;
use system_ui::prelude::*;

use super::{catalog_entry, ContentMountContext, ContentRegistry};
use crate::{
    model::ContentType,
    reducer::DesktopAction,
    runtime_context::use_desktop_runtime,
    theme::{builtin_wallpapers, Wallpaper},
};

pub(super) fn register_builtin_views(registry: &mut ContentRegistry) {
    for content in ContentType::ALL {
        match content {
            ContentType::Settings => registry.register(content, |_| view! { <SettingsView /> }.into_view()),
            ContentType::Terminal => registry.register(content, |cx| {
                view! { <TerminalView title=cx.title /> }.into_view()
            }),
            _ => registry.register(content, |cx| {
                view! { <CatalogSummaryView context=cx /> }.into_view()
            }),
        }
    }
}

pub(super) fn fallback_view(context: ContentMountContext) -> View {
    view! {
        <Stack padding=LayoutPadding::Lg layout_class="content-fallback">
            <Heading level=2>{format!("Application: {}", context.title)}</Heading>
            <Text tone=TextTone::Secondary>"This application has no content yet."</Text>
        </Stack>
    }
    .into_view()
}

#[component]
fn CatalogSummaryView(context: ContentMountContext) -> impl IntoView {
    let entry = catalog_entry(context.content_type);
    let description = entry
        .map(|entry| entry.description.clone())
        .unwrap_or_default();
    let category = entry.map(|entry| entry.category.clone()).unwrap_or_default();
    let icon = super::content_icon(context.content_type);
    let note = context
        .payload
        .get("section")
        .and_then(|section| section.as_str())
        .map(|section| format!("Opened at section: {section}"));

    view! {
        <Stack padding=LayoutPadding::Lg layout_class="content-summary">
            <Cluster gap=LayoutGap::Sm>
                <Icon icon size=IconSize::Lg />
                <Heading level=2>{context.title}</Heading>
            </Cluster>
            <Text role=TextRole::Caption tone=TextTone::Accent>{category}</Text>
            <Text>{description}</Text>
            {note.map(|note| view! { <Text role=TextRole::Caption tone=TextTone::Secondary>{note}</Text> })}
        </Stack>
    }
}

#[component]
fn TerminalView(title: String) -> impl IntoView {
    view! {
        <Stack gap=LayoutGap::Sm padding=LayoutPadding::Md layout_class="content-terminal">
            <Text role=TextRole::Code>{format!("{title} - portfolio shell")}</Text>
            <Text role=TextRole::Code tone=TextTone::Secondary>"$ help"</Text>
            <Text role=TextRole::Code>"Use the sidebar or desktop icons to open sections."</Text>
        </Stack>
    }
}

fn swatch_preview(wallpaper: &Wallpaper) -> String {
    format!(
        "background: linear-gradient(135deg, {}, {} 60%, {});",
        wallpaper.palette.primary, wallpaper.palette.secondary, wallpaper.palette.background
    )
}

#[component]
fn SettingsView() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let active_wallpaper = create_memo(move |_| runtime.state.with(|s| s.theme.wallpaper_id.clone()));

    view! {
        <Stack padding=LayoutPadding::Lg layout_class="content-settings">
            <Heading level=2>"Wallpaper"</Heading>
            <Text tone=TextTone::Secondary>
                "The wallpaper sets the color theme for windows, icons and the taskbar."
            </Text>
            <Grid gap=LayoutGap::Md ui_slot="wallpaper-grid">
                {builtin_wallpapers()
                    .iter()
                    .map(|wallpaper| {
                        let wallpaper_id = wallpaper.id.clone();
                        let selected_id = wallpaper.id.clone();
                        view! {
                            <SwatchButton
                                label=wallpaper.name.clone()
                                preview_style=swatch_preview(wallpaper)
                                selected=Signal::derive(move || active_wallpaper.get() == selected_id)
                                on_click=Callback::new(move |_| {
                                    runtime.dispatch_action(DesktopAction::SelectWallpaper {
                                        wallpaper_id: wallpaper_id.clone(),
                                    })
                                })
                            />
                        }
                    })
                    .collect_view()}
            </Grid>
        </Stack>
    }
}
