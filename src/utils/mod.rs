// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 iconview contributors

//! Shared helper utilities reused by UI and application logic.

pub mod file_icons;
pub mod icon_map;

/// Resolve a file name to its icon URL.
pub use file_icons::icon_url_for_file;
/// Resolve a folder's open/closed state to its icon URL.
pub use file_icons::icon_url_for_folder;
