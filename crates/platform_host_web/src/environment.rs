//! Browser environment probe and media-feature change subscription.
//!
//! Each detection is isolated: a throwing `matchMedia` or a missing `navigator` only affects its
//! own field, which then keeps the conservative fallback from [`EnvironmentSignals::default`].

#[cfg(target_arch = "wasm32")]
use platform_host::ColorScheme;
use platform_host::{EnvironmentProbe, EnvironmentSignals};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast, JsValue};

/// Media queries whose `change` events should trigger a layout recompute.
pub const WATCHED_MEDIA_QUERIES: [&str; 7] = [
    "(orientation: portrait)",
    "(orientation: landscape)",
    "(hover: hover)",
    "(pointer: fine)",
    "(prefers-reduced-motion: reduce)",
    "(prefers-color-scheme: dark)",
    "(prefers-contrast: high)",
];

#[derive(Debug, Clone, Copy, Default)]
/// Environment probe backed by `window`, `navigator` and `matchMedia`.
pub struct WebEnvironmentProbe;

#[cfg(target_arch = "wasm32")]
fn warn_detection(what: &str, err: &JsValue) {
    web_sys::console::warn_1(&JsValue::from_str(&format!(
        "environment detection `{what}` failed: {err:?}"
    )));
}

#[cfg(target_arch = "wasm32")]
fn media_matches(window: &web_sys::Window, query: &str, fallback: bool) -> bool {
    match window.match_media(query) {
        Ok(Some(list)) => list.matches(),
        Ok(None) => fallback,
        Err(err) => {
            warn_detection(query, &err);
            fallback
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn dimension(value: Result<JsValue, JsValue>, what: &str, fallback: i32) -> i32 {
    match value {
        Ok(value) => value.as_f64().map(|v| v as i32).unwrap_or(fallback),
        Err(err) => {
            warn_detection(what, &err);
            fallback
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn touch_capable(window: &web_sys::Window) -> bool {
    let has_touch_events = match js_sys::Reflect::has(window, &JsValue::from_str("ontouchstart")) {
        Ok(found) => found,
        Err(err) => {
            warn_detection("ontouchstart", &err);
            false
        }
    };
    has_touch_events || window.navigator().max_touch_points() > 0
}

impl EnvironmentProbe for WebEnvironmentProbe {
    fn probe(&self) -> EnvironmentSignals {
        let fallback = EnvironmentSignals::default();

        #[cfg(target_arch = "wasm32")]
        {
            let Some(window) = web_sys::window() else {
                return fallback;
            };

            let ratio = window.device_pixel_ratio();
            EnvironmentSignals {
                viewport_width: dimension(
                    window.inner_width(),
                    "innerWidth",
                    fallback.viewport_width,
                ),
                viewport_height: dimension(
                    window.inner_height(),
                    "innerHeight",
                    fallback.viewport_height,
                ),
                device_pixel_ratio: if ratio.is_finite() && ratio > 0.0 {
                    ratio
                } else {
                    fallback.device_pixel_ratio
                },
                touch: touch_capable(&window),
                hover: media_matches(&window, "(hover: hover)", fallback.hover),
                fine_pointer: media_matches(&window, "(pointer: fine)", fallback.fine_pointer),
                reduced_motion: media_matches(
                    &window,
                    "(prefers-reduced-motion: reduce)",
                    fallback.reduced_motion,
                ),
                high_contrast: media_matches(
                    &window,
                    "(prefers-contrast: high)",
                    fallback.high_contrast,
                ),
                color_scheme: if media_matches(&window, "(prefers-color-scheme: light)", false) {
                    ColorScheme::Light
                } else {
                    ColorScheme::Dark
                },
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            fallback
        }
    }
}

/// Live `change` listeners on [`WATCHED_MEDIA_QUERIES`]. Dropping the value detaches them.
pub struct MediaFeatureWatch {
    #[cfg(target_arch = "wasm32")]
    lists: Vec<web_sys::MediaQueryList>,
    #[cfg(target_arch = "wasm32")]
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl Drop for MediaFeatureWatch {
    fn drop(&mut self) {
        #[cfg(target_arch = "wasm32")]
        for list in &self.lists {
            let _ = list.remove_event_listener_with_callback(
                "change",
                self.callback.as_ref().unchecked_ref(),
            );
        }
    }
}

/// Subscribes `on_change` to every watched media query.
///
/// Queries that cannot be created are skipped; the remaining ones stay attached.
pub fn watch_media_features(on_change: impl Fn() + 'static) -> MediaFeatureWatch {
    #[cfg(target_arch = "wasm32")]
    {
        let callback =
            Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| on_change());
        let mut lists = Vec::new();
        if let Some(window) = web_sys::window() {
            for query in WATCHED_MEDIA_QUERIES {
                match window.match_media(query) {
                    Ok(Some(list)) => {
                        if list
                            .add_event_listener_with_callback(
                                "change",
                                callback.as_ref().unchecked_ref(),
                            )
                            .is_ok()
                        {
                            lists.push(list);
                        }
                    }
                    Ok(None) => {}
                    Err(err) => warn_detection(query, &err),
                }
            }
        }
        MediaFeatureWatch { lists, callback }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = on_change;
        MediaFeatureWatch {}
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn native_probe_returns_fallback_signals() {
        assert_eq!(WebEnvironmentProbe.probe(), EnvironmentSignals::default());
    }
}
