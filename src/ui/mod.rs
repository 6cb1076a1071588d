// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 iconview contributors

//! Top-level egui application shell.
//! Handles layout and wiring between components and the MVU kernel.

pub mod components;

use std::time::{Duration, Instant};

use eframe::egui;

use crate::mvu::{self, AppModel, Msg};
use crate::ui::components::{file_tree, toasts};

/// Stateful egui application showing the icon-decorated file tree.
#[derive(Default)]
pub struct IconViewApp {
    model: AppModel,
    inbox: Vec<Msg>,
}

impl eframe::App for IconViewApp {
    fn ui(&mut self, ui: &mut egui::Ui, frame: &mut eframe::Frame) {
        #[allow(deprecated)]
        self.update(&ui.ctx().clone(), frame);
    }

    #[allow(deprecated)]
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.model.toasts.prune(Instant::now());

        // Process messages queued by the previous frame's views.
        for msg in std::mem::take(&mut self.inbox) {
            mvu::update(&mut self.model, msg);
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading("iconview");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label("click a folder to toggle it, a file for its icon URL");
                });
            });
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);
            egui::ScrollArea::vertical().show(ui, |ui| {
                let tree_msgs = file_tree::view(ui, &self.model.tree);
                self.inbox.extend(tree_msgs.into_iter().map(|msg| match msg {
                    file_tree::FileTreeMsg::FolderToggled(path) => Msg::FolderToggled(path),
                    file_tree::FileTreeMsg::FileActivated(name) => Msg::FileActivated(name),
                }));
            });
        });

        let toast_msgs = toasts::view(ctx, &self.model.toasts);
        self.inbox.extend(toast_msgs.into_iter().map(Msg::Toasts));

        // Keep repainting while toasts are counting down.
        if !self.model.toasts.is_empty() {
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }
}
