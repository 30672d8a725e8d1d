//! Wallpaper-driven color theme: palette validation, color harmony, role styles and the CSS
//! custom properties rendered on the shell root.

use std::{fmt, sync::OnceLock};

use leptos::logging;
use serde::{Deserialize, Serialize};
use thiserror::Error;

include!(concat!(env!("OUT_DIR"), "/wallpaper_catalog_generated.rs"));

/// Wallpaper selected when nothing has been persisted.
pub const DEFAULT_WALLPAPER_ID: &str = "ghoul";
/// Id recorded for a hydrated theme whose wallpaper is no longer in the catalog.
pub const CUSTOM_WALLPAPER_ID: &str = "custom";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ThemeError {
    #[error("`{value}` is not a `#rrggbb` color")]
    InvalidColor { value: String },
}

/// A validated `#rrggbb` color, stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ThemeColor(String);

impl ThemeColor {
    pub fn parse(value: &str) -> Result<Self, ThemeError> {
        let digits = value.strip_prefix('#').unwrap_or(value);
        if digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()) {
            Ok(Self(format!("#{}", digits.to_ascii_lowercase())))
        } else {
            Err(ThemeError::InvalidColor {
                value: value.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn rgb(&self) -> Rgb {
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&self.0[range], 16).unwrap_or(u8::MAX)
        };
        Rgb {
            r: channel(1..3),
            g: channel(3..5),
            b: channel(5..7),
        }
    }

    /// Appends a two-digit hex alpha, e.g. `66` → `#dc262666`.
    pub fn with_alpha(&self, alpha_hex: &str) -> String {
        format!("{}{alpha_hex}", self.0)
    }

    /// Rotates the hue by `degrees`, keeping saturation and lightness.
    pub fn rotate_hue(&self, degrees: f64) -> Self {
        let hsl = self.rgb().to_hsl();
        Hsl {
            h: (hsl.h + degrees).rem_euclid(360.0),
            ..hsl
        }
        .to_rgb()
        .into()
    }
}

impl TryFrom<String> for ThemeColor {
    type Error = ThemeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ThemeColor> for String {
    fn from(value: ThemeColor) -> Self {
        value.0
    }
}

impl From<Rgb> for ThemeColor {
    fn from(rgb: Rgb) -> Self {
        Self(format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b))
    }
}

impl fmt::Display for ThemeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Hue in degrees, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Rgb {
    /// `r, g, b` triplet for `rgba(var(--theme-primary-rgb), 0.5)` style usage.
    pub fn css_triplet(self) -> String {
        format!("{}, {}, {}", self.r, self.g, self.b)
    }

    pub fn to_hsl(self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if (max - min).abs() < f64::EPSILON {
            return Hsl {
                h: 0.0,
                s: 0.0,
                l: l * 100.0,
            };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Hsl {
            h: h * 60.0,
            s: s * 100.0,
            l: l * 100.0,
        }
    }
}

impl Hsl {
    pub fn to_rgb(self) -> Rgb {
        let l = self.l / 100.0;
        let a = self.s * l.min(1.0 - l) / 100.0;
        let channel = |n: f64| {
            let k = (n + self.h / 30.0).rem_euclid(12.0);
            let color = l - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0);
            (255.0 * color).round().clamp(0.0, 255.0) as u8
        };
        Rgb {
            r: channel(0.0),
            g: channel(8.0),
            b: channel(4.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemePalette {
    pub primary: ThemeColor,
    pub secondary: ThemeColor,
    pub background: ThemeColor,
    pub surface: ThemeColor,
    pub text: ThemeColor,
    pub text_secondary: ThemeColor,
    pub accent: ThemeColor,
}

impl Default for ThemePalette {
    fn default() -> Self {
        let color = |hex: &str| ThemeColor(hex.to_string());
        Self {
            primary: color("#dc2626"),
            secondary: color("#991b1b"),
            background: color("#0f0f0f"),
            surface: color("#1f1f1f"),
            text: color("#ffffff"),
            text_secondary: color("#fca5a5"),
            accent: color("#dc2626"),
        }
    }
}

/// Colors derived from the primary color by hue rotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorHarmony {
    pub complementary: ThemeColor,
    pub triadic1: ThemeColor,
    pub triadic2: ThemeColor,
    pub analogous1: ThemeColor,
    pub analogous2: ThemeColor,
}

impl ColorHarmony {
    pub fn from_primary(primary: &ThemeColor) -> Self {
        Self {
            complementary: primary.rotate_hue(180.0),
            triadic1: primary.rotate_hue(120.0),
            triadic2: primary.rotate_hue(240.0),
            analogous1: primary.rotate_hue(30.0),
            analogous2: primary.rotate_hue(-30.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallpaper {
    pub id: String,
    pub name: String,
    pub category: String,
    pub image_url: String,
    pub palette: ThemePalette,
}

/// Built-in wallpapers embedded from the content catalog at build time.
pub fn builtin_wallpapers() -> &'static [Wallpaper] {
    static CATALOG: OnceLock<Vec<Wallpaper>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        serde_json::from_str(WALLPAPER_CATALOG_JSON).unwrap_or_else(|err| {
            logging::warn!("built-in wallpaper catalog is invalid: {err}");
            Vec::new()
        })
    })
}

pub fn wallpaper_by_id(wallpaper_id: &str) -> Option<&'static Wallpaper> {
    builtin_wallpapers().iter().find(|w| w.id == wallpaper_id)
}

pub fn wallpaper_by_name(name: &str) -> Option<&'static Wallpaper> {
    builtin_wallpapers().iter().find(|w| w.name == name)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveTheme {
    pub wallpaper_id: String,
    pub wallpaper_name: String,
    pub category: String,
    pub image_url: Option<String>,
    pub palette: ThemePalette,
}

impl Default for ActiveTheme {
    fn default() -> Self {
        wallpaper_by_id(DEFAULT_WALLPAPER_ID)
            .map(Self::from_wallpaper)
            .unwrap_or_else(|| Self {
                wallpaper_id: DEFAULT_WALLPAPER_ID.to_string(),
                wallpaper_name: "Ghoul".to_string(),
                category: "anime".to_string(),
                image_url: None,
                palette: ThemePalette::default(),
            })
    }
}

impl ActiveTheme {
    pub fn from_wallpaper(wallpaper: &Wallpaper) -> Self {
        Self {
            wallpaper_id: wallpaper.id.clone(),
            wallpaper_name: wallpaper.name.clone(),
            category: wallpaper.category.clone(),
            image_url: Some(wallpaper.image_url.clone()),
            palette: wallpaper.palette.clone(),
        }
    }

    /// Rebuilds the active theme from storage. The stored palette always wins; the wallpaper is
    /// matched by name so the backdrop image can be restored when it still exists.
    pub fn from_persisted(persisted: &PersistedTheme) -> Self {
        let wallpaper = wallpaper_by_name(&persisted.wallpaper_name);
        Self {
            wallpaper_id: wallpaper
                .map(|w| w.id.clone())
                .unwrap_or_else(|| CUSTOM_WALLPAPER_ID.to_string()),
            wallpaper_name: persisted.wallpaper_name.clone(),
            category: persisted.category.clone(),
            image_url: wallpaper.map(|w| w.image_url.clone()),
            palette: persisted.palette.clone(),
        }
    }

    pub fn to_persisted(&self) -> PersistedTheme {
        PersistedTheme {
            palette: self.palette.clone(),
            category: self.category.clone(),
            wallpaper_name: self.wallpaper_name.clone(),
            complementary_colors: ColorHarmony::from_primary(&self.palette.primary),
        }
    }
}

/// Stored under [`crate::persistence::THEME_PREFS_KEY`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedTheme {
    #[serde(flatten)]
    pub palette: ThemePalette,
    #[serde(default)]
    pub category: String,
    pub wallpaper_name: String,
    pub complementary_colors: ColorHarmony,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeRole {
    Default,
    Window,
    Button,
    Icon,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleStyle {
    Default,
    Window {
        title_bar_background: String,
        border_color: String,
        shadow_color: String,
    },
    Button {
        hover_background: String,
        active_background: String,
        border_color: String,
    },
    Icon {
        gradient_start: String,
        gradient_end: String,
        shadow_color: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemedStyle {
    pub palette: ThemePalette,
    pub role: RoleStyle,
}

impl ThemedStyle {
    /// Inline CSS declarations for the role.
    pub fn to_css(&self) -> String {
        let p = &self.palette;
        match &self.role {
            RoleStyle::Default => format!("color: {}; background: {};", p.text, p.surface),
            RoleStyle::Window {
                title_bar_background,
                border_color,
                shadow_color,
            } => format!(
                "--window-titlebar-bg: {title_bar_background}; border-color: {border_color}; \
                 box-shadow: 0 10px 30px {shadow_color}; background: {}; color: {};",
                p.surface, p.text
            ),
            RoleStyle::Button {
                hover_background,
                active_background,
                border_color,
            } => format!(
                "--button-hover-bg: {hover_background}; --button-active-bg: {active_background}; \
                 border-color: {border_color}; color: {};",
                p.text
            ),
            RoleStyle::Icon {
                gradient_start,
                gradient_end,
                shadow_color,
            } => format!(
                "background: linear-gradient(135deg, {gradient_start}, {gradient_end}); \
                 box-shadow: 0 4px 12px {shadow_color}; color: {};",
                p.text
            ),
        }
    }
}

/// Derives the style for a UI role from the palette. Pure.
pub fn themed_style(palette: &ThemePalette, role: ThemeRole) -> ThemedStyle {
    let role = match role {
        ThemeRole::Default => RoleStyle::Default,
        ThemeRole::Window => RoleStyle::Window {
            title_bar_background: format!(
                "linear-gradient(135deg, {}, {})",
                palette.background, palette.surface
            ),
            border_color: palette.primary.to_string(),
            shadow_color: palette.primary.with_alpha("66"),
        },
        ThemeRole::Button => RoleStyle::Button {
            hover_background: palette.primary.with_alpha("20"),
            active_background: palette.primary.with_alpha("30"),
            border_color: palette.primary.to_string(),
        },
        ThemeRole::Icon => RoleStyle::Icon {
            gradient_start: palette.primary.to_string(),
            gradient_end: palette.secondary.to_string(),
            shadow_color: palette.primary.with_alpha("50"),
        },
    };
    ThemedStyle {
        palette: palette.clone(),
        role,
    }
}

/// `--theme-*` custom properties for the shell root `style` attribute.
pub fn css_custom_properties(palette: &ThemePalette) -> String {
    let mut css = String::new();
    let mut push = |name: &str, value: &str| {
        css.push_str("--theme-");
        css.push_str(name);
        css.push_str(": ");
        css.push_str(value);
        css.push_str("; ");
    };

    push("primary", palette.primary.as_str());
    push("secondary", palette.secondary.as_str());
    push("background", palette.background.as_str());
    push("surface", palette.surface.as_str());
    push("text", palette.text.as_str());
    push("text-secondary", palette.text_secondary.as_str());
    push("accent", palette.accent.as_str());
    push("primary-rgb", &palette.primary.rgb().css_triplet());
    push("secondary-rgb", &palette.secondary.rgb().css_triplet());
    push("accent-rgb", &palette.accent.rgb().css_triplet());
    for (name, color) in [("primary", &palette.primary), ("accent", &palette.accent)] {
        push(&format!("{name}-10"), &color.with_alpha("1a"));
        push(&format!("{name}-20"), &color.with_alpha("33"));
        push(&format!("{name}-50"), &color.with_alpha("80"));
    }

    css.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn color(hex: &str) -> ThemeColor {
        ThemeColor::parse(hex).expect("valid color")
    }

    #[test]
    fn parses_and_normalizes_hex_colors() {
        assert_eq!(color("#DC2626").as_str(), "#dc2626");
        assert_eq!(color("dc2626").as_str(), "#dc2626");
        assert!(ThemeColor::parse("#dc26").is_err());
        assert_eq!(
            ThemeColor::parse("#zzzzzz"),
            Err(ThemeError::InvalidColor {
                value: "#zzzzzz".to_string()
            })
        );
        assert!(serde_json::from_str::<ThemeColor>("\"red\"").is_err());
    }

    #[test]
    fn rgb_and_hsl_conversions_agree() {
        let red = color("#ff0000");
        assert_eq!(red.rgb(), Rgb { r: 255, g: 0, b: 0 });
        assert_eq!(red.rgb().css_triplet(), "255, 0, 0");
        let hsl = red.rgb().to_hsl();
        assert_eq!((hsl.h, hsl.s, hsl.l), (0.0, 100.0, 50.0));

        for hex in ["#dc2626", "#3b82f6", "#10b981", "#0f0f0f", "#ffffff"] {
            let rgb = color(hex).rgb();
            assert_eq!(rgb.to_hsl().to_rgb(), rgb, "{hex}");
        }
    }

    #[test]
    fn harmony_rotates_primary_hue() {
        let harmony = ColorHarmony::from_primary(&color("#ff0000"));
        assert_eq!(harmony.complementary.as_str(), "#00ffff");
        assert_eq!(harmony.triadic1.as_str(), "#00ff00");
        assert_eq!(harmony.triadic2.as_str(), "#0000ff");
        assert_eq!(harmony.analogous1.as_str(), "#ff8000");
        assert_eq!(harmony.analogous2.as_str(), "#ff0080");
    }

    #[test]
    fn role_styles_use_alpha_suffixes() {
        let palette = ThemePalette::default();

        assert_eq!(
            themed_style(&palette, ThemeRole::Window).role,
            RoleStyle::Window {
                title_bar_background: "linear-gradient(135deg, #0f0f0f, #1f1f1f)".to_string(),
                border_color: "#dc2626".to_string(),
                shadow_color: "#dc262666".to_string(),
            }
        );
        assert_eq!(
            themed_style(&palette, ThemeRole::Button).role,
            RoleStyle::Button {
                hover_background: "#dc262620".to_string(),
                active_background: "#dc262630".to_string(),
                border_color: "#dc2626".to_string(),
            }
        );
        let icon = themed_style(&palette, ThemeRole::Icon);
        assert!(icon
            .to_css()
            .contains("linear-gradient(135deg, #dc2626, #991b1b)"));
        assert!(icon.to_css().contains("#dc262650"));
        assert_eq!(themed_style(&palette, ThemeRole::Default).role, RoleStyle::Default);
    }

    #[test]
    fn custom_properties_cover_palette_and_variants() {
        let css = css_custom_properties(&ThemePalette::default());
        assert!(css.starts_with("--theme-primary: #dc2626;"));
        assert!(css.contains("--theme-text-secondary: #fca5a5;"));
        assert!(css.contains("--theme-primary-rgb: 220, 38, 38;"));
        assert!(css.contains("--theme-primary-10: #dc26261a;"));
        assert!(css.contains("--theme-accent-50: #dc262680;"));
    }

    #[test]
    fn builtin_catalog_starts_with_the_default_wallpaper() {
        let wallpapers = builtin_wallpapers();
        assert!(wallpapers.len() >= 2);
        assert_eq!(wallpapers[0].id, DEFAULT_WALLPAPER_ID);
        assert_eq!(wallpapers[0].palette, ThemePalette::default());
        assert_eq!(ActiveTheme::default().palette, ThemePalette::default());
    }

    #[test]
    fn persisted_theme_uses_flat_camel_case_fields() {
        let persisted = ActiveTheme::default().to_persisted();
        let json = serde_json::to_value(&persisted).expect("serialize");
        assert_eq!(json["primary"], "#dc2626");
        assert_eq!(json["textSecondary"], "#fca5a5");
        assert_eq!(json["wallpaperName"], "Ghoul");
        assert_eq!(json["complementaryColors"]["complementary"], "#26dcdc");

        let restored: PersistedTheme = serde_json::from_value(json).expect("deserialize");
        assert_eq!(restored, persisted);
    }

    #[test]
    fn hydrating_an_unknown_wallpaper_keeps_the_stored_palette() {
        let mut persisted = ActiveTheme::default().to_persisted();
        persisted.wallpaper_name = "Deleted Wallpaper".to_string();
        persisted.palette.primary = color("#3b82f6");

        let theme = ActiveTheme::from_persisted(&persisted);
        assert_eq!(theme.wallpaper_id, CUSTOM_WALLPAPER_ID);
        assert_eq!(theme.image_url, None);
        assert_eq!(theme.palette.primary.as_str(), "#3b82f6");
    }
}
