//! Archive Frontend App
//!
//! Main application component: filters, item list and add form.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::listing::Listing;
use crate::store::{AppState, AppStateStoreFields};
use crate::components::{AddItemForm, ItemList, SearchBar};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let store = Store::new(AppState::default());

    // Provide context to all children
    let ctx = AppContext::new((reload_trigger, set_reload_trigger), config);
    provide_context(ctx);
    provide_context(store);

    // Load items on mount and whenever the trigger changes
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        let filters = ctx.filters();
        let config = ctx.config();
        let ticket = ctx.issue_fetch();
        log::info!("[items] loading {:?}, trigger={}", filters, trigger);
        spawn_local(async move {
            let outcome = api::list_items(&config, &filters).await;
            if !ctx.is_latest_fetch(ticket) {
                log::debug!("[items] dropping stale response for ticket {}", ticket);
                return;
            }
            match &outcome {
                Ok(items) => log::info!("[items] loaded {} items", items.len()),
                Err(e) => log::error!("[items] load failed: {}", e),
            }
            store.listing().set(Listing::from_outcome(outcome));
        });
    });

    view! {
        <main class="main-content">
            <h1>"Archive"</h1>

            <AddItemForm />

            <SearchBar />

            <ItemList />
        </main>
    }
}
