//! UI Components
//!
//! Leptos components for the archive page.

mod search_bar;
mod item_list;
mod add_item_form;

pub use search_bar::SearchBar;
pub use item_list::ItemList;
pub use add_item_form::AddItemForm;
