// Meridian Landing Page — Leptos 0.8 Edition
// Developed by the Meridian Web Team (c)2025

use leptos::prelude::*;
use meridian_landing::{App, SiteConfig, SiteController, logging};
use tracing::Level;

fn main() {
    console_error_panic_hook::set_once();

    let config = match SiteConfig::embedded() {
        Ok(config) => config,
        Err(err) => {
            logging::init(Level::ERROR);
            tracing::error!(%err, "site config rejected, nothing mounted");
            return;
        }
    };
    logging::init(config.logging.level().unwrap_or(Level::INFO));
    tracing::info!(pages = config.pages.len(), home = %config.home, "mounting site");

    let controller = SiteController::new(&config);
    leptos::mount::mount_to_body(move || view! { <App config=config controller=controller /> });
}
