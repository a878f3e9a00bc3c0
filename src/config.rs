//! Runtime Configuration
//!
//! Read once at startup from `<meta>` tags of the host page.

use log::Level;

/// Meta tag holding the API origin/prefix.
pub const META_API_BASE: &str = "archive-api-base";
/// Meta tag holding the console log level.
pub const META_LOG_LEVEL: &str = "archive-log-level";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Prefix for `/api/items` and `/items/{id}`; empty means same origin.
    pub api_base: String,
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            log_level: Level::Info,
        }
    }
}

impl AppConfig {
    /// Load from the current document, falling back to defaults outside a browser.
    pub fn from_document() -> Self {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return Self::default();
        };
        Self::from_lookup(|name| {
            document
                .query_selector(&format!("meta[name=\"{name}\"]"))
                .ok()
                .flatten()
                .and_then(|meta| meta.get_attribute("content"))
        })
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_base = lookup(META_API_BASE)
            .map(|base| base.trim().trim_end_matches('/').to_string())
            .unwrap_or_default();
        let log_level = lookup(META_LOG_LEVEL)
            .and_then(|level| level.trim().parse().ok())
            .unwrap_or(Level::Info);
        Self { api_base, log_level }
    }

    pub fn items_endpoint(&self) -> String {
        format!("{}/api/items", self.api_base)
    }

    pub fn item_page(&self, id: u64) -> String {
        format!("{}/items/{id}", self.api_base)
    }
}
