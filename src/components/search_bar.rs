//! Search Bar Component
//!
//! Query and tag filter inputs with a search button.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="search-bar">
            <input
                id="query"
                type="text"
                placeholder="Search title or URL..."
                prop:value=move || ctx.query.get()
                on:input=move |ev| ctx.query.set(event_target_value(&ev))
            />
            <input
                id="tag"
                type="text"
                placeholder="Tag"
                prop:value=move || ctx.tag.get()
                on:input=move |ev| ctx.tag.set(event_target_value(&ev))
            />
            <button id="search" type="button" on:click=move |_| ctx.reload()>
                "Search"
            </button>
        </div>
    }
}
