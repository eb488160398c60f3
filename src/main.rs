#![allow(warnings)]
//! Riego Frontend Entry Point

mod models;
mod error;
mod color;
mod calendar;
mod watering;
mod schedule;
mod seed;
mod config;
mod context;
mod store;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = AppConfig::load();
    let log_history = match rolling_logger::init(config.level_filter(), config.log_capacity) {
        Ok(logger) => Some(logger),
        Err(e) => {
            web_sys::console::warn_1(&format!("[APP] logger already installed: {}", e).into());
            None
        }
    };
    if let Some(e) = config_error {
        log::warn!("[APP] falling back to default config: {}", e);
    }

    mount_to_body(move || view! { <App config=config.clone() log_history=log_history /> });
}
