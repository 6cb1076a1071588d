// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 iconview contributors

//! Reusable egui components structured for MVU-style updates.

pub mod file_tree;
pub mod toasts;
