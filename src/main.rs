// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project Hub
//!
//! A cross-platform desktop gallery where students upload course projects
//! (a photo or a video with a short description) and browse submissions
//! through a filterable feed.

mod app;
mod io;
mod models;
mod ui;
mod util;

use anyhow::Result;
use app::HubApp;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Project Hub"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Project Hub",
        options,
        Box::new(|_cc| Ok(Box::new(HubApp::new()))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
