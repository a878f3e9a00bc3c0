#![allow(warnings)]
//! Archive Frontend Entry Point

mod models;
mod error;
mod config;
mod logging;
mod api;
mod filters;
mod display;
mod listing;
mod submission;
mod context;
mod store;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = AppConfig::from_document();
    logging::init(config.log_level);
    log::info!("[config] api base = {:?}", config.api_base);
    mount_to_body(move || view! { <App config=config /> });
}
