//! Item Display Helpers
//!
//! Turns an [`Item`] into the strings shown in an item block.

use crate::config::AppConfig;
use crate::models::Item;

/// Shown when an item has no type yet
pub const UNKNOWN_TYPE: &str = "unknown";

/// Shown in the item container when the list is empty
pub const EMPTY_MESSAGE: &str = "No items yet.";

/// Display-ready fields of one item block
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRow {
    pub id: u64,
    pub href: String,
    pub label: String,
    pub heading: String,
    pub item_type: String,
    pub status: String,
    pub domain: String,
    pub tags: Vec<String>,
    pub error: Option<String>,
}

impl ItemRow {
    pub fn new(item: &Item, config: &AppConfig) -> Self {
        Self {
            id: item.id,
            href: config.item_page(item.id),
            label: format!("#{}", item.id),
            heading: non_empty(&item.title).unwrap_or(&item.url).to_string(),
            item_type: non_empty(&item.item_type).unwrap_or(UNKNOWN_TYPE).to_string(),
            status: item.status.clone(),
            domain: non_empty(&item.source_domain).unwrap_or_default().to_string(),
            tags: item.tags.clone(),
            error: non_empty(&item.error_message).map(String::from),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: u64) -> Item {
        Item {
            id,
            url: format!("http://example.com/{}", id),
            title: Some(format!("Item {}", id)),
            item_type: Some("article".to_string()),
            status: "done".to_string(),
            source_domain: Some("example.com".to_string()),
            tags: vec![],
            error_message: None,
            created_at: None,
        }
    }

    #[test]
    fn test_full_item() {
        let row = ItemRow::new(&make_item(4), &AppConfig::default());
        assert_eq!(row.href, "/items/4");
        assert_eq!(row.label, "#4");
        assert_eq!(row.heading, "Item 4");
        assert_eq!(row.item_type, "article");
        assert_eq!(row.status, "done");
        assert_eq!(row.domain, "example.com");
        assert_eq!(row.error, None);
    }

    #[test]
    fn test_fallbacks() {
        let mut item = make_item(2);
        item.title = None;
        item.item_type = None;
        item.source_domain = None;
        let row = ItemRow::new(&item, &AppConfig::default());

        assert_eq!(row.heading, "http://example.com/2");
        assert_eq!(row.item_type, "unknown");
        assert_eq!(row.domain, "");
    }

    #[test]
    fn test_empty_strings_fall_back_too() {
        let mut item = make_item(3);
        item.title = Some(String::new());
        item.item_type = Some(String::new());
        item.source_domain = Some(String::new());
        item.error_message = Some(String::new());
        let row = ItemRow::new(&item, &AppConfig::default());

        assert_eq!(row.heading, item.url);
        assert_eq!(row.item_type, UNKNOWN_TYPE);
        assert_eq!(row.domain, "");
        assert_eq!(row.error, None);
    }

    #[test]
    fn test_markup_is_kept_as_text() {
        let mut item = make_item(9);
        item.title = Some("<script>alert(1)</script>".to_string());
        let row = ItemRow::new(&item, &AppConfig::default());
        assert_eq!(row.heading, "<script>alert(1)</script>");
        assert_eq!(row.href, "/items/9");
    }

    #[test]
    fn test_example_payload() {
        let items: Vec<Item> =
            serde_json::from_str(r#"[{"id":1,"url":"http://x.com","status":"pending"}]"#).unwrap();
        let row = ItemRow::new(&items[0], &AppConfig::default());

        assert_eq!(row.label, "#1");
        assert_eq!(row.heading, "http://x.com");
        assert_eq!(row.item_type, "unknown");
        assert_eq!(row.status, "pending");
        assert_eq!(row.domain, "");
    }
}
