mod api;
mod app;
mod browser;
mod components;
mod config;
mod controller;
mod error;
mod format;
mod logging;
mod pages;
mod push;
mod state;
mod types;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    let config = AppConfig::from_window();
    logging::init(&config.log_filter);
    tracing::info!("TruthGuard dashboard starting at {}", config.origin);

    leptos::mount::mount_to_body(move || {
        provide_context(config.clone());
        view! { <App /> }
    });
}
