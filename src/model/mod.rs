// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Navdeck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Navdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! Configuration sections, list rows, the selection frequency table, and user options.

pub mod config;
pub mod frequency;
pub mod item;
pub mod ordered;

pub use config::{Configuration, Options, SectionKind};
pub use frequency::FrequencyTable;
pub use item::{is_divider_key, ListItem, DIVIDER_PREFIX};
pub use ordered::OrderedSection;
