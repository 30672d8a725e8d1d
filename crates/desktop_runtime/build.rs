use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const KNOWN_CONTENT_IDS: [&str; 9] = [
    "about-me",
    "projects",
    "experience",
    "skills",
    "contact",
    "terminal",
    "settings",
    "file-manager",
    "music-player",
];

const KNOWN_ICONS: [&str; 14] = [
    "user",
    "folder",
    "briefcase",
    "sparkles",
    "mail",
    "terminal",
    "settings",
    "files",
    "music",
    "minimize",
    "maximize",
    "restore",
    "close",
    "document",
];

#[derive(Debug, Clone, Deserialize)]
struct Catalog {
    schema_version: u32,
    content: Vec<ContentEntry>,
    wallpaper: Vec<WallpaperEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ContentEntry {
    id: String,
    title: String,
    icon: String,
    category: String,
    sidebar: bool,
    desktop: bool,
    description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
struct Palette {
    primary: String,
    secondary: String,
    background: String,
    surface: String,
    text: String,
    text_secondary: String,
    accent: String,
}

impl Palette {
    fn colors(&self) -> [(&'static str, &str); 7] {
        [
            ("primary", &self.primary),
            ("secondary", &self.secondary),
            ("background", &self.background),
            ("surface", &self.surface),
            ("text", &self.text),
            ("text_secondary", &self.text_secondary),
            ("accent", &self.accent),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WallpaperEntry {
    id: String,
    name: String,
    category: String,
    image_url: String,
    palette: Palette,
}

fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|digits| digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()))
}

fn validate(catalog: &Catalog, path: &str) {
    if catalog.schema_version != 1 {
        panic!(
            "catalog schema mismatch in {path}: expected 1 found {}",
            catalog.schema_version
        );
    }

    let mut seen = HashSet::new();
    for entry in &catalog.content {
        if !KNOWN_CONTENT_IDS.contains(&entry.id.as_str()) {
            panic!("unknown content id `{}` in {path}", entry.id);
        }
        if !seen.insert(entry.id.as_str()) {
            panic!("duplicate content id `{}` in {path}", entry.id);
        }
        if !KNOWN_ICONS.contains(&entry.icon.as_str()) {
            panic!("unknown icon `{}` for `{}` in {path}", entry.icon, entry.id);
        }
    }
    for id in KNOWN_CONTENT_IDS {
        if !seen.contains(id) {
            panic!("content id `{id}` is missing from {path}");
        }
    }

    if catalog.wallpaper.is_empty() {
        panic!("{path} must define at least one wallpaper");
    }
    let mut seen = HashSet::new();
    for wallpaper in &catalog.wallpaper {
        if !seen.insert(wallpaper.id.as_str()) {
            panic!("duplicate wallpaper id `{}` in {path}", wallpaper.id);
        }
        for (field, value) in wallpaper.palette.colors() {
            if !is_hex_color(value) {
                panic!(
                    "wallpaper `{}` has invalid {field} color `{value}` in {path}",
                    wallpaper.id
                );
            }
        }
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("content").join("catalog.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let catalog: Catalog = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    validate(&catalog, &path.display().to_string());

    let content_json =
        serde_json::to_string_pretty(&catalog.content).expect("serialize content catalog");
    let wallpaper_json =
        serde_json::to_string_pretty(&catalog.wallpaper).expect("serialize wallpaper catalog");

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let outputs = [
        (
            "content_catalog_generated.rs",
            format!(
                "/// Build-time generated content catalog JSON.\n\
pub const CONTENT_CATALOG_JSON: &str = r##\"{content_json}\"##;\n"
            ),
        ),
        (
            "wallpaper_catalog_generated.rs",
            format!(
                "/// Build-time generated built-in wallpaper catalog JSON.\n\
pub const WALLPAPER_CATALOG_JSON: &str = r##\"{wallpaper_json}\"##;\n"
            ),
        ),
    ];
    for (name, generated) in outputs {
        let out_file = out_dir.join(name);
        fs::write(&out_file, generated)
            .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
    }
}
