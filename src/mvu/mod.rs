// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 iconview contributors

//! Root Model-View-Update kernel wiring component state and messages.
//!
//! Everything here is synchronous; the app has no background work, so
//! there is no command channel and `update` is a plain state transition.

use crate::models::tree::{self, FileNode};
use crate::ui::components::toasts::{self, ToastsModel, ToastsMsg};
use crate::utils::icon_url_for_file;

/// Top-level application state.
pub struct AppModel {
    /// Displayed file tree.
    pub tree: Vec<FileNode>,
    /// Live toast notifications.
    pub toasts: ToastsModel,
}

impl Default for AppModel {
    fn default() -> Self {
        Self {
            tree: tree::sample_tree(),
            toasts: ToastsModel::default(),
        }
    }
}

/// Application messages routed through the update function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    FolderToggled(Vec<usize>),
    FileActivated(String),
    Toasts(ToastsMsg),
}

/// Apply a message to the model.
pub fn update(model: &mut AppModel, msg: Msg) {
    match msg {
        Msg::FolderToggled(path) => {
            if !tree::toggle_at(&mut model.tree, &path) {
                tracing::debug!(?path, "toggle missed, tree changed under the click");
            }
        }
        Msg::FileActivated(name) => {
            let url = icon_url_for_file(&name);
            tracing::debug!(file = %name, icon = %url, "file activated");
            model.toasts.push(format!("{name} → {url}"));
        }
        Msg::Toasts(msg) => toasts::update(&mut model.toasts, msg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tree::NodeKind;

    // Folder messages flip the addressed folder in the model.
    #[test]
    fn folder_toggled_updates_tree() {
        let mut model = AppModel::default();
        update(&mut model, Msg::FolderToggled(vec![0]));
        match &model.tree[0].kind {
            NodeKind::Folder { open, .. } => assert!(*open),
            NodeKind::File => panic!("expected folder"),
        }
    }

    // Activating a file queues a toast naming the resolved icon URL.
    #[test]
    fn file_activated_queues_toast_with_icon_url() {
        let mut model = AppModel::default();
        update(&mut model, Msg::FileActivated("main.py".to_string()));

        let messages: Vec<_> = model.toasts.iter().map(|t| t.message().to_owned()).collect();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("main.py"));
        assert!(messages[0].contains("file_type_python.svg"));
    }

    // Toast dismissals are routed into the toast model.
    #[test]
    fn toast_messages_are_routed() {
        let mut model = AppModel::default();
        update(&mut model, Msg::FileActivated("a.txt".to_string()));
        let id = model.toasts.iter().next().map(|t| t.id()).unwrap();

        update(&mut model, Msg::Toasts(ToastsMsg::Dismissed(id)));
        assert!(model.toasts.is_empty());
    }

    // Bad paths leave the model untouched instead of panicking.
    #[test]
    fn folder_toggled_tolerates_stale_paths() {
        let mut model = AppModel::default();
        let before: Vec<_> = model.tree.clone();
        update(&mut model, Msg::FolderToggled(vec![42]));
        assert_eq!(model.tree, before);
    }
}
