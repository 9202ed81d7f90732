mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use std::path::Path;

use anyhow::{Context, Result};
use app::RentalDashboardApp;
use config::{DashboardConfig, CONFIG_FILE};
use data::query::RentalCatalog;
use eframe::egui;
use state::AppState;

fn main() -> Result<()> {
    env_logger::init();

    let config = DashboardConfig::load_or_default(Path::new(CONFIG_FILE))?;

    // The dataset is read once; without it there is nothing to show.
    let dataset = data::loader::load_file(&config.data_path)
        .inspect_err(|e| log::error!("Failed to load listings: {e}"))
        .with_context(|| format!("loading listings from {}", config.data_path.display()))?;
    if dataset.is_empty() {
        log::warn!("{} has no priced listings", config.data_path.display());
    }

    let catalog = RentalCatalog::new(dataset, config.min_listings);
    let state = AppState::new(catalog, config.initial_filter());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Montreal Rentals – Borough Statistics",
        options,
        Box::new(|_cc| Ok(Box::new(RentalDashboardApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("running the dashboard: {e}"))
}
