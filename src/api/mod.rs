//! Archive API Client
//!
//! Frontend bindings to the backend HTTP API, organized by resource.

mod item;

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::error::ApiError;

// Re-export all public items
pub use item::*;

/// A settled response: status code and raw body text
struct Reply {
    status: u16,
    ok: bool,
    body: String,
}

/// Issue a `fetch` and read the whole body as text.
async fn send(method: &str, url: &str, json_body: Option<String>) -> Result<Reply, ApiError> {
    let window = web_sys::window().ok_or(ApiError::Unavailable)?;

    let init = RequestInit::new();
    init.set_method(method);
    if let Some(body) = &json_body {
        init.set_body(&JsValue::from_str(body));
    }
    let request = Request::new_with_str_and_init(url, &init)?;
    if json_body.is_some() {
        request.headers().set("Content-Type", "application/json")?;
    }

    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()?;
    let text: js_sys::Promise = response.text()?;
    let body = JsFuture::from(text).await?.as_string().unwrap_or_default();

    Ok(Reply {
        status: response.status(),
        ok: response.ok(),
        body,
    })
}
