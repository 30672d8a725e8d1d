//! Theme persistence through the host preference store.

use platform_host::{load_pref_with, save_pref_with, PrefsError, PrefsStore};

use crate::theme::{ActiveTheme, PersistedTheme};

/// Preference key holding the persisted theme document.
pub const THEME_PREFS_KEY: &str = "portfolio-theme";

/// Loads the persisted theme, if any.
///
/// Unreadable or malformed documents are logged and treated as absent so boot continues with the
/// default palette.
pub fn load_theme(prefs: &dyn PrefsStore) -> Option<PersistedTheme> {
    match load_pref_with::<_, PersistedTheme>(prefs, THEME_PREFS_KEY) {
        Ok(theme) => theme,
        Err(err) => {
            leptos::logging::warn!("theme load failed: {err}");
            None
        }
    }
}

/// Writes `theme` (palette, category, wallpaper name and derived harmony colors).
///
/// # Errors
///
/// Propagates the store's [`PrefsError`].
pub fn persist_theme(prefs: &dyn PrefsStore, theme: &ActiveTheme) -> Result<(), PrefsError> {
    save_pref_with(prefs, THEME_PREFS_KEY, &theme.to_persisted())
}

#[cfg(test)]
mod tests {
    use platform_host::MemoryPrefsStore;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::theme::wallpaper_by_id;

    #[test]
    fn missing_theme_loads_as_none() {
        let prefs = MemoryPrefsStore::default();
        assert_eq!(load_theme(&prefs), None);
    }

    #[test]
    fn malformed_theme_is_ignored() {
        let prefs = MemoryPrefsStore::with_entry(THEME_PREFS_KEY, "{\"primary\": 42");
        assert_eq!(load_theme(&prefs), None);

        let prefs = MemoryPrefsStore::with_entry(
            THEME_PREFS_KEY,
            "{\"primary\":\"not-a-color\",\"wallpaperName\":\"Ghoul\"}",
        );
        assert_eq!(load_theme(&prefs), None);
    }

    #[test]
    fn persisted_theme_survives_a_reload() {
        let prefs = MemoryPrefsStore::default();
        let theme = ActiveTheme::from_wallpaper(wallpaper_by_id("neon-city").expect("wallpaper"));

        persist_theme(&prefs, &theme).expect("persist");
        let loaded = load_theme(&prefs).expect("stored theme");

        assert_eq!(ActiveTheme::from_persisted(&loaded), theme);
    }

    #[test]
    fn stored_document_uses_camel_case_keys() {
        let prefs = MemoryPrefsStore::default();
        persist_theme(&prefs, &ActiveTheme::default()).expect("persist");

        let raw = prefs
            .load_raw(THEME_PREFS_KEY)
            .expect("load raw")
            .expect("stored");
        let value: serde_json::Value = serde_json::from_str(&raw).expect("json");
        assert_eq!(value["wallpaperName"], "Ghoul");
        assert!(value.get("textSecondary").is_some());
        assert!(value["complementaryColors"].get("triadic1").is_some());
    }
}
