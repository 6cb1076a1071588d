// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 iconview contributors

//! Domain layer: pure data types shared between UI and update logic.

pub mod tree;
