// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Navdeck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Navdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Navdeck: a terminal navigator for directory bookmarks, commands and notes.
//!
//! The core is [`nav::NavigationState`], a pure state machine over paged lists. [`render`]
//! projects it into a frame model, [`tui`] draws that frame and feeds key presses back in, and
//! [`store`] keeps the JSON files in the app folder.

pub mod actions;
pub mod logging;
pub mod matcher;
pub mod model;
pub mod nav;
pub mod render;
pub mod store;
pub mod tui;
