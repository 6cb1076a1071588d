// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 iconview contributors

//! Thin binary entry point: logging first, then the UI bootstrap.

mod app;
mod models;
mod mvu;
mod ui;
mod utils;

use anyhow::Result;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("iconview starting");

    app::run().map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;
    Ok(())
}
