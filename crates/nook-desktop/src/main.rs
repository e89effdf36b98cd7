//! Nook Desktop Application
//!
//! Desktop shell hosting the command palette and quick search.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod keyboard;
mod state;
mod views;

use std::sync::OnceLock;

use dioxus::desktop::{Config, WindowBuilder};
use nook_core::config::{resolve_settings_path, Settings};
use tracing_subscriber::EnvFilter;

/// Settings resolved once at startup, before the UI launches
static SETTINGS: OnceLock<Settings> = OnceLock::new();

/// Startup settings (defaults if none were loaded)
pub fn settings() -> Settings {
    SETTINGS.get().copied().unwrap_or_default()
}

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = "nook=debug".parse() {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Starting Nook...");

    let settings = match resolve_settings_path(None) {
        Some(path) => Settings::load(&path).unwrap_or_else(|e| {
            tracing::error!("Failed to load settings from {}: {}", path.display(), e);
            Settings::default()
        }),
        None => {
            tracing::warn!("No config directory available, using default settings");
            Settings::default()
        }
    };
    tracing::info!("Command palette shortcut: {}", settings.palette_shortcut);
    let _ = SETTINGS.set(settings);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Nook")
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::new()
        .with_cfg(config)
        .launch(app::App);
}
