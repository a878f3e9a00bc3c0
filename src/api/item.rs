//! Item Endpoints
//!
//! `GET /api/items` and `POST /api/items`.

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::filters::ItemQuery;
use crate::models::{Item, NewItem};
use super::send;

pub async fn list_items(config: &AppConfig, query: &ItemQuery) -> Result<Vec<Item>, ApiError> {
    let url = query.url(&config.items_endpoint());
    log::debug!("[items] GET {}", url);
    let reply = send("GET", &url, None).await?;
    if !reply.ok {
        return Err(ApiError::rejected(reply.status, &reply.body));
    }
    Ok(serde_json::from_str(&reply.body)?)
}

/// Queue a new item. The response body of a successful create is ignored.
pub async fn create_item(config: &AppConfig, item: &NewItem) -> Result<(), ApiError> {
    let body = serde_json::to_string(item)?;
    log::debug!("[submit] POST {} ({} tags)", config.items_endpoint(), item.tags.len());
    let reply = send("POST", &config.items_endpoint(), Some(body)).await?;
    if !reply.ok {
        return Err(ApiError::rejected(reply.status, &reply.body));
    }
    Ok(())
}
