// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 iconview contributors

//! Toast notification overlay with a fixed anchor and timeout.
//!
//! Configuration is deliberately constant: toasts stack in the top-right
//! corner and disappear after five seconds unless dismissed earlier.

use std::time::{Duration, Instant};

use eframe::egui;

/// How long a toast stays visible.
pub const TOAST_TIMEOUT: Duration = Duration::from_secs(5);

/// Where the overlay is anchored on screen.
pub const TOAST_ANCHOR: egui::Align2 = egui::Align2::RIGHT_TOP;

/// A single live notification.
#[derive(Clone, Debug)]
pub struct Toast {
    id: u64,
    message: String,
    created: Instant,
}

impl Toast {
    /// Identifier used for dismissal messages.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Text shown in the overlay.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// UI model for the toast queue, kept free of side effects.
#[derive(Default)]
pub struct ToastsModel {
    toasts: Vec<Toast>,
    next_id: u64,
}

/// Messages emitted by the toast view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToastsMsg {
    Dismissed(u64),
}

impl ToastsModel {
    /// Queue a toast stamped with the current time.
    pub fn push(&mut self, message: impl Into<String>) {
        self.push_at(message, Instant::now());
    }

    /// Queue a toast with an explicit creation time.
    pub fn push_at(&mut self, message: impl Into<String>, now: Instant) {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            created: now,
        });
    }

    /// Drop toasts older than [`TOAST_TIMEOUT`] as of `now`.
    pub fn prune(&mut self, now: Instant) {
        self.toasts
            .retain(|t| now.saturating_duration_since(t.created) < TOAST_TIMEOUT);
    }

    /// Remove a toast by id; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    /// Live toasts in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Apply a message to the model.
pub fn update(model: &mut ToastsModel, msg: ToastsMsg) {
    match msg {
        ToastsMsg::Dismissed(id) => model.dismiss(id),
    }
}

/// Render the overlay. Returns dismissal messages for clicked toasts.
pub fn view(ctx: &egui::Context, model: &ToastsModel) -> Vec<ToastsMsg> {
    let mut msgs = Vec::new();
    if model.is_empty() {
        return msgs;
    }

    egui::Area::new(egui::Id::new("toast_overlay"))
        .anchor(TOAST_ANCHOR, egui::vec2(-12.0, 12.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            for toast in model.iter() {
                egui::Frame::window(&ctx.style()).show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(toast.message());
                        if ui.small_button("✕").clicked() {
                            msgs.push(ToastsMsg::Dismissed(toast.id()));
                        }
                    });
                });
                ui.add_space(6.0);
            }
        });

    msgs
}

#[cfg(test)]
mod tests {
    use super::*;

    // Toasts younger than the timeout survive pruning; older ones do not.
    #[test]
    fn prune_drops_only_expired_toasts() {
        let mut model = ToastsModel::default();
        let now = Instant::now();
        model.push_at("old", now);
        model.push_at("fresh", now + Duration::from_secs(4));

        model.prune(now + TOAST_TIMEOUT);
        let remaining: Vec<_> = model.iter().map(Toast::message).collect();
        assert_eq!(remaining, vec!["fresh"]);
    }

    // A toast exactly at the timeout boundary counts as expired.
    #[test]
    fn prune_expires_at_exact_timeout() {
        let mut model = ToastsModel::default();
        let now = Instant::now();
        model.push_at("boundary", now);
        model.prune(now + TOAST_TIMEOUT);
        assert!(model.is_empty());
    }

    // Dismissal removes by id and leaves the rest untouched.
    #[test]
    fn dismissed_message_removes_matching_toast() {
        let mut model = ToastsModel::default();
        let now = Instant::now();
        model.push_at("first", now);
        model.push_at("second", now);

        let first_id = model.iter().next().map(Toast::id).unwrap();
        update(&mut model, ToastsMsg::Dismissed(first_id));

        let remaining: Vec<_> = model.iter().map(Toast::message).collect();
        assert_eq!(remaining, vec!["second"]);

        // Unknown ids are a no-op.
        update(&mut model, ToastsMsg::Dismissed(9999));
        assert_eq!(model.iter().count(), 1);
    }
}
