//! Todo List Frontend Entry Point

mod models;
mod ident;
mod todos;
mod storage;
mod config;
mod logging;
mod store;
mod render;
mod context;
mod components;
mod app;

#[cfg(test)]
mod tests;

use app::App;
use config::AppConfig;
use leptos::prelude::*;
use storage::BrowserStorage;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load(&BrowserStorage);
    let log_buffer = logging::init(&config);

    mount_to_body(move || view! { <App config=config log_buffer=log_buffer /> });
}
