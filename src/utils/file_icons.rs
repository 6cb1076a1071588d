// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 iconview contributors

//! Resolve file and folder names to icon URLs on the public CDN.
//!
//! These functions are pure and infallible: any input maps to a
//! non-empty URL string, unrecognized names fall back to the default
//! file icon, and nothing here performs I/O or caches results. Fetching
//! and rendering the image behind the URL is the UI's job.

use crate::utils::icon_map::{self, IconMap};

/// Fixed URL prefix under which all icon assets reside. Ends in `/` so
/// identifiers concatenate directly.
pub const ICON_BASE_URL: &str = "https://dderevjanik.github.io/vscode-icons-js-example/icons/";

/// Return the icon URL for a file name, using the built-in table.
pub fn icon_url_for_file(file_name: &str) -> String {
    icon_url_for_file_in(icon_map::default_map(), file_name)
}

/// Return the icon URL for a file name, using a caller-supplied table.
///
/// "No match" is exactly {no entry, empty identifier}; both substitute
/// the table's default file identifier.
pub fn icon_url_for_file_in(map: &IconMap, file_name: &str) -> String {
    let icon = match map.identifier_for(file_name) {
        Some(id) if !id.is_empty() => id,
        _ => map.default_file,
    };
    format!("{ICON_BASE_URL}{icon}")
}

/// Return the icon URL for a folder, open or closed, using the built-in
/// table. Callers pass `false` for the closed (default) state.
pub fn icon_url_for_folder(open: bool) -> String {
    icon_url_for_folder_in(icon_map::default_map(), open)
}

/// Return the icon URL for a folder using a caller-supplied table.
pub fn icon_url_for_folder_in(map: &IconMap, open: bool) -> String {
    let icon = if open {
        map.default_folder_opened
    } else {
        map.default_folder
    };
    format!("{ICON_BASE_URL}{icon}")
}
