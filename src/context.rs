//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::filters::ItemQuery;
use crate::listing::FetchSequence;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload items from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload items from backend - write
    set_reload_trigger: WriteSignal<u32>,
    /// Free-text filter field
    pub query: RwSignal<String>,
    /// Tag filter field
    pub tag: RwSignal<String>,
    /// Tickets for in-flight list fetches
    fetch_seq: StoredValue<FetchSequence>,
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(reload_trigger: (ReadSignal<u32>, WriteSignal<u32>), config: AppConfig) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            query: RwSignal::new(String::new()),
            tag: RwSignal::new(String::new()),
            fetch_seq: StoredValue::new(FetchSequence::default()),
            config: StoredValue::new(config),
        }
    }

    /// Trigger a reload of items
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Set the tag filter and reload
    pub fn filter_by_tag(&self, tag: String) {
        self.tag.set(tag);
        self.reload();
    }

    /// Current filter values, read without subscribing
    pub fn filters(&self) -> ItemQuery {
        ItemQuery::new(self.query.get_untracked(), self.tag.get_untracked())
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    /// Take a ticket for a new list fetch
    pub fn issue_fetch(&self) -> u64 {
        let mut ticket = 0;
        self.fetch_seq.update_value(|seq| ticket = seq.issue());
        ticket
    }

    pub fn is_latest_fetch(&self, ticket: u64) -> bool {
        self.fetch_seq.with_value(|seq| seq.is_latest(ticket))
    }
}
