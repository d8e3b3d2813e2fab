//! Flick Desktop Application
//!
//! A single-screen note pad with swipe-to-dismiss.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod actions;
mod app;
mod components;
mod config;
mod state;
mod theme;
mod ui;
mod views;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("flick=debug".parse().unwrap()),
        )
        .init();

    tracing::info!("Starting Flick...");

    let app_config = config::app_config();
    let window = WindowBuilder::new()
        .with_title("Flick")
        .with_inner_size(LogicalSize::new(
            app_config.window_width,
            app_config.window_height,
        ))
        .with_resizable(false);

    let cfg = Config::new().with_window(window);

    // Launch the app
    dioxus::LaunchBuilder::new().with_cfg(cfg).launch(app::App);
}
