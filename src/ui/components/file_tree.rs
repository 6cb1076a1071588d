// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 iconview contributors

//! File tree view binding each node to its resolved icon URL.
//!
//! Icons are referenced purely by URI; the egui HTTP image loader
//! installed at bootstrap fetches and caches the actual bytes.

use eframe::egui;

use crate::models::tree::{FileNode, NodeKind};
use crate::utils::{icon_url_for_file, icon_url_for_folder};

/// Rendered icon edge length in points.
const ICON_SIZE: f32 = 16.0;

/// Messages emitted by the tree view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FileTreeMsg {
    /// A folder row was clicked; the payload is its child-index path.
    FolderToggled(Vec<usize>),
    /// A file row was clicked; the payload is its display name.
    FileActivated(String),
}

/// Render the tree. Returns messages for clicked rows.
pub fn view(ui: &mut egui::Ui, nodes: &[FileNode]) -> Vec<FileTreeMsg> {
    let mut msgs = Vec::new();
    let mut path = Vec::new();
    render_nodes(ui, nodes, &mut path, &mut msgs);
    msgs
}

fn render_nodes(
    ui: &mut egui::Ui,
    nodes: &[FileNode],
    path: &mut Vec<usize>,
    msgs: &mut Vec<FileTreeMsg>,
) {
    for (index, node) in nodes.iter().enumerate() {
        path.push(index);
        match &node.kind {
            NodeKind::Folder { open, children } => {
                let clicked = row(ui, &icon_url_for_folder(*open), &node.name);
                if clicked {
                    msgs.push(FileTreeMsg::FolderToggled(path.clone()));
                }
                if *open {
                    ui.indent(("tree_node", path.clone()), |ui| {
                        render_nodes(ui, children, path, msgs);
                    });
                }
            }
            NodeKind::File => {
                if row(ui, &icon_url_for_file(&node.name), &node.name) {
                    msgs.push(FileTreeMsg::FileActivated(node.name.clone()));
                }
            }
        }
        path.pop();
    }
}

/// Draw one icon-plus-name row; returns whether the name was clicked.
fn row(ui: &mut egui::Ui, icon_url: &str, name: &str) -> bool {
    let mut clicked = false;
    ui.horizontal(|ui| {
        ui.add(
            egui::Image::from_uri(icon_url.to_owned())
                .fit_to_exact_size(egui::vec2(ICON_SIZE, ICON_SIZE)),
        );
        if ui.selectable_label(false, name).clicked() {
            clicked = true;
        }
    });
    clicked
}
