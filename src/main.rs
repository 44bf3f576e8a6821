//! Daylog - Personal Daily Wellness Check-in
//!
//! Main entry point for the application.

use anyhow::Context;
use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use daylog::coach::client::CoachClient;
use daylog::storage::config::load_config;
use daylog::storage::database::Database;

mod app;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Daylog v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config().context("Failed to load configuration")?;
    let db = Database::open(&config.database_path()).context("Failed to open database")?;
    let coach = CoachClient::new(config.coach.clone());
    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;

    if !coach.has_credential() {
        tracing::warn!("No coach API key configured; report polishing will be unavailable");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 720.0])
            .with_min_inner_size([420.0, 560.0])
            .with_title("Daylog"),
        ..Default::default()
    };

    eframe::run_native(
        "Daylog",
        options,
        Box::new(move |cc| Ok(Box::new(app::DaylogApp::new(cc, db, coach, runtime)))),
    )
    .map_err(|e| anyhow::anyhow!("UI error: {e}"))
}
