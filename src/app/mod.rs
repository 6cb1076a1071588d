// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 iconview contributors

//! Application entry point wiring egui/eframe to launch the iconview UI.

use eframe::egui;

use crate::ui::IconViewApp;

/// Bootstrap the desktop application and run the main egui event loop.
pub fn run() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("iconview")
            .with_inner_size([800.0, 600.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "iconview",
        options,
        Box::new(|cc| {
            // PNG/SVG decoding plus the HTTP loader that fetches the
            // CDN icon URLs produced by the resolver.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(IconViewApp::default()))
        }),
    )
}
