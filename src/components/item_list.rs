//! Item List Component
//!
//! Renders the `items` container: loading, error, empty or item blocks.
//! Every field goes in as a text node, so item content is never parsed as markup.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::display::{ItemRow, EMPTY_MESSAGE};
use crate::listing::Listing;
use crate::store::{use_app_store, AppStateStoreFields};

/// One item block
#[component]
fn ItemBlock(row: ItemRow) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="item">
            <div>
                <a href=row.href>{row.label}</a>
                " - "
                <span>{row.heading}</span>
            </div>
            <div class="meta">
                <span>{row.item_type}</span>
                <span>{row.status}</span>
                <span>{row.domain}</span>
            </div>
            {(!row.tags.is_empty()).then(|| view! {
                <div class="tags">
                    {row.tags.into_iter().map(|tag| {
                        let label = tag.clone();
                        view! {
                            <button
                                type="button"
                                class="tag-chip"
                                on:click=move |_| ctx.filter_by_tag(tag.clone())
                            >
                                {label}
                            </button>
                        }
                    }).collect_view()}
                </div>
            })}
            {row.error.map(|error| view! { <div class="item-error">{error}</div> })}
        </div>
    }
}

#[component]
pub fn ItemList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    view! {
        <div id="items">
            {move || match store.listing().get() {
                Listing::Loading => view! { <p class="muted">"Loading..."</p> }.into_any(),
                Listing::Failed(reason) => view! {
                    <p class="error">{format!("Could not load items: {}", reason)}</p>
                }.into_any(),
                Listing::Loaded(items) if items.is_empty() => view! {
                    <p class="muted">{EMPTY_MESSAGE}</p>
                }.into_any(),
                Listing::Loaded(items) => {
                    let config = ctx.config();
                    items
                        .iter()
                        .map(|item| view! { <ItemBlock row=ItemRow::new(item, &config) /> })
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
    }
}
