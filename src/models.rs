//! Frontend Models
//!
//! Data structures matching the archive API payloads.

use serde::{Deserialize, Serialize};

/// Item data structure (matches backend `ItemOut`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(rename = "type", default)]
    pub item_type: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub source_domain: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body of `POST /api/items`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewItem {
    pub url: String,
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_item_payload() {
        let items: Vec<Item> =
            serde_json::from_str(r#"[{"id":1,"url":"http://x.com","status":"pending"}]"#).unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, 1);
        assert_eq!(items[0].url, "http://x.com");
        assert_eq!(items[0].status, "pending");
        assert!(items[0].title.is_none());
        assert!(items[0].item_type.is_none());
        assert!(items[0].tags.is_empty());
    }

    #[test]
    fn test_full_item_payload() {
        let json = r#"{
            "id": 7,
            "url": "https://example.com/a",
            "type": "article",
            "title": "A",
            "source_domain": "example.com",
            "status": "done",
            "policy_video_download_allowed": false,
            "error_message": null,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z",
            "tags": ["rust", "web"],
            "assets": []
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();

        assert_eq!(item.item_type.as_deref(), Some("article"));
        assert_eq!(item.source_domain.as_deref(), Some("example.com"));
        assert_eq!(item.tags, vec!["rust", "web"]);
        assert_eq!(item.created_at.as_deref(), Some("2024-01-01T00:00:00Z"));
    }

    #[test]
    fn test_missing_status_defaults_to_empty() {
        let item: Item = serde_json::from_str(r#"{"id":3,"url":"u"}"#).unwrap();
        assert_eq!(item.status, "");
    }

    #[test]
    fn test_new_item_body() {
        let body = NewItem {
            url: "http://x.com".to_string(),
            tags: vec!["a".to_string(), "b".to_string()],
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"url":"http://x.com","tags":["a","b"]}"#
        );
    }
}
