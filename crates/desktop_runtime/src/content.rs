//! Content catalog metadata and the registry that renders a window's content slot.

mod views;

use std::{collections::HashMap, rc::Rc, sync::OnceLock};

use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use system_ui::IconName;

use crate::model::{ContentType, WindowId};

include!(concat!(env!("OUT_DIR"), "/content_catalog_generated.rs"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentCatalogEntry {
    pub id: ContentType,
    pub title: String,
    pub icon: String,
    pub category: String,
    pub sidebar: bool,
    pub desktop: bool,
    pub description: String,
}

impl ContentCatalogEntry {
    pub fn icon_name(&self) -> IconName {
        IconName::from_token(&self.icon).unwrap_or(IconName::Document)
    }
}

/// Catalog entries in authoring order.
pub fn content_catalog() -> &'static [ContentCatalogEntry] {
    static CATALOG: OnceLock<Vec<ContentCatalogEntry>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        serde_json::from_str(CONTENT_CATALOG_JSON).unwrap_or_else(|err| {
            logging::warn!("built-in content catalog is invalid: {err}");
            Vec::new()
        })
    })
}

pub fn catalog_entry(content_type: ContentType) -> Option<&'static ContentCatalogEntry> {
    content_catalog().iter().find(|entry| entry.id == content_type)
}

/// Window title for `content_type`, falling back to its id.
pub fn content_title(content_type: ContentType) -> String {
    catalog_entry(content_type)
        .map(|entry| entry.title.clone())
        .unwrap_or_else(|| content_type.id().to_string())
}

pub fn content_icon(content_type: ContentType) -> IconName {
    catalog_entry(content_type)
        .map(ContentCatalogEntry::icon_name)
        .unwrap_or(IconName::Document)
}

/// Everything a content renderer receives when its window mounts.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentMountContext {
    pub window_id: WindowId,
    pub content_type: ContentType,
    pub title: String,
    pub payload: Value,
}

pub type ContentRenderer = Rc<dyn Fn(ContentMountContext) -> View>;

/// Maps content types to renderers. Unregistered types get a generic placeholder.
#[derive(Clone, Default)]
pub struct ContentRegistry {
    renderers: HashMap<ContentType, ContentRenderer>,
}

impl ContentRegistry {
    /// Registry with a view for every built-in content type.
    pub fn with_builtin_views() -> Self {
        let mut registry = Self::default();
        views::register_builtin_views(&mut registry);
        registry
    }

    /// Registers `renderer` for `content_type`, replacing any previous one.
    pub fn register(
        &mut self,
        content_type: ContentType,
        renderer: impl Fn(ContentMountContext) -> View + 'static,
    ) {
        self.renderers.insert(content_type, Rc::new(renderer));
    }

    pub fn is_registered(&self, content_type: ContentType) -> bool {
        self.renderers.contains_key(&content_type)
    }

    pub fn render(&self, context: ContentMountContext) -> View {
        match self.renderers.get(&context.content_type) {
            Some(renderer) => renderer(context),
            None => views::fallback_view(context),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn catalog_covers_every_content_type_once() {
        let catalog = content_catalog();
        assert_eq!(catalog.len(), ContentType::ALL.len());
        for content in ContentType::ALL {
            assert_eq!(
                catalog.iter().filter(|entry| entry.id == content).count(),
                1,
                "{content:?}"
            );
        }
    }

    #[test]
    fn titles_and_icons_come_from_the_catalog() {
        assert_eq!(content_title(ContentType::AboutMe), "About Me");
        assert_eq!(content_title(ContentType::FileManager), "File Manager");
        assert_eq!(content_icon(ContentType::Terminal), IconName::Terminal);
        assert!(content_catalog()
            .iter()
            .all(|entry| IconName::from_token(&entry.icon).is_some()));
    }

    #[test]
    fn register_replaces_existing_renderers() {
        let mut registry = ContentRegistry::default();
        assert!(!registry.is_registered(ContentType::Skills));

        registry.register(ContentType::Skills, |_| ().into_view());
        registry.register(ContentType::Skills, |_| "replaced".into_view());
        assert!(registry.is_registered(ContentType::Skills));
        assert_eq!(registry.renderers.len(), 1);
    }
}
