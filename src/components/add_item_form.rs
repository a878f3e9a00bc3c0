//! Add Item Form Component
//!
//! Queues a new URL with comma-separated tags.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::filters::normalize_tags;
use crate::models::NewItem;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn AddItemForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (url, set_url) = signal(String::new());
    let (tags, set_tags) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if !store.submission().write().begin() {
            log::debug!("[submit] already in flight, ignoring");
            return;
        }
        let item = NewItem {
            url: url.get_untracked(),
            tags: normalize_tags(&tags.get_untracked()),
        };
        let config = ctx.config();

        spawn_local(async move {
            let outcome = api::create_item(&config, &item).await;
            if let Err(e) = &outcome {
                log::warn!("[submit] {} failed: {}", item.url, e);
            }
            let after = store.submission().write().finish(outcome);
            if after.reset_form {
                set_url.set(String::new());
                set_tags.set(String::new());
            }
            if after.refresh {
                ctx.reload();
            }
        });
    };

    view! {
        <form id="add-form" class="add-form" on:submit=submit>
            <input
                type="text"
                name="url"
                placeholder="https://..."
                prop:value=move || url.get()
                on:input=move |ev| set_url.set(event_target_value(&ev))
            />
            <input
                type="text"
                name="tags"
                placeholder="tags, comma, separated"
                prop:value=move || tags.get()
                on:input=move |ev| set_tags.set(event_target_value(&ev))
            />
            <button
                type="submit"
                prop:disabled=move || store.submission().with(|phase| phase.is_submitting())
            >
                "Add"
            </button>
            <span id="add-status" class="status">
                {move || store.submission().with(|phase| phase.status_text().to_string())}
            </span>
        </form>
    }
}
