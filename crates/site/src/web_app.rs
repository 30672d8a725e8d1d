use desktop_runtime::{
    use_desktop_runtime, ContentType, DesktopAction, DesktopProvider, DesktopShell,
};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use platform_host_web::build_host_services;
use serde_json::{json, Value};

/// Resolves a `/open/:content` deep link into the window to open and its payload.
///
/// The optional `section` query parameter is forwarded to the content view.
fn deep_link_request(content: &str, section: Option<&str>) -> Option<(ContentType, Value)> {
    let content_type = ContentType::from_id(content)?;
    let payload = match section.filter(|section| !section.is_empty()) {
        Some(section) => json!({ "section": section }),
        None => Value::Null,
    };
    Some((content_type, payload))
}

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Portfolio Desktop" />
        <Meta name="description" content="A personal portfolio styled as a desktop environment." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=|| view! { <DesktopEntry /> } />
                    <Route path="/open/:content" view=DeepLinkRoute />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn DesktopEntry(
    /// Window opened once the desktop has mounted.
    #[prop(optional_no_strip)]
    open: Option<(ContentType, Value)>,
) -> impl IntoView {
    view! {
        <DesktopProvider host_services=build_host_services()>
            <InitialWindow open=open />
            <DesktopShell />
        </DesktopProvider>
    }
}

#[component]
fn InitialWindow(open: Option<(ContentType, Value)>) -> impl IntoView {
    let runtime = use_desktop_runtime();
    if let Some((content_type, payload)) = open {
        runtime.dispatch_action(DesktopAction::Open {
            content_type,
            payload,
        });
    }
}

#[component]
fn DeepLinkRoute() -> impl IntoView {
    let params = use_params_map();
    let query = use_query_map();
    let content = params.with_untracked(|map| map.get("content").cloned().unwrap_or_default());
    let section = query.with_untracked(|map| map.get("section").cloned());

    let open = deep_link_request(&content, section.as_deref());
    if open.is_none() {
        logging::warn!("ignoring deep link to unknown content `{content}`");
    }

    view! { <DesktopEntry open=open /> }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn deep_links_resolve_known_content_ids() {
        assert_eq!(
            deep_link_request("about-me", None),
            Some((ContentType::AboutMe, Value::Null))
        );
        assert_eq!(
            deep_link_request("projects", Some("featured")),
            Some((ContentType::Projects, json!({ "section": "featured" })))
        );
        assert_eq!(
            deep_link_request("settings", Some("")),
            Some((ContentType::Settings, Value::Null))
        );
    }

    #[test]
    fn unknown_deep_links_are_rejected() {
        assert_eq!(deep_link_request("minesweeper", None), None);
        assert_eq!(deep_link_request("", Some("x")), None);
    }
}
