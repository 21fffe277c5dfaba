//! Storefront Frontend Entry Point

mod models;
mod config;
mod dom;
mod context;
mod store;
mod components;
mod app;


use config::StorefrontConfig;
use wasm_bindgen::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let Some(document) = dom::document() else {
        return;
    };

    // Config is read before the logger exists, so report problems afterwards
    let loaded = dom::config_text(&document)
        .map(|text| StorefrontConfig::from_json(&text))
        .unwrap_or_else(|| Ok(StorefrontConfig::default()));
    let level = loaded.as_ref().map(StorefrontConfig::level_filter).unwrap_or(log::LevelFilter::Info);
    if let Err(err) = page_logger::init(level, page_logger::DEFAULT_CAPACITY) {
        web_sys::console::warn_1(&format!("[BOOT] Logger unavailable: {}", err).into());
    }
    let config = loaded.unwrap_or_else(|err| {
        log::warn!("[CONFIG] {}, using defaults", err);
        StorefrontConfig::default()
    });

    log::info!("[BOOT] Enhancing page");
    app::boot(&document, &config);
}

/// Recent log lines, oldest first. Callable from the browser console.
#[wasm_bindgen(js_name = storefrontRecentLogs)]
pub fn storefront_recent_logs() -> Vec<String> {
    page_logger::recent_records()
}
