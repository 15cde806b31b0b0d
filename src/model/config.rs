// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Navdeck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Navdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ordered::OrderedSection;

/// The configured (non-synthetic) sections, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionKind {
    GoTo,
    Commands,
    Notes,
}

impl SectionKind {
    pub const ALL: [Self; 3] = [Self::GoTo, Self::Commands, Self::Notes];

    /// Stable page name used in selection results.
    pub fn name(self) -> &'static str {
        match self {
            Self::GoTo => "goto",
            Self::Commands => "commands",
            Self::Notes => "notes",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(rename = "goTo", default)]
    pub go_to: OrderedSection,
    #[serde(default)]
    pub commands: OrderedSection,
    #[serde(default)]
    pub notes: OrderedSection,
}

impl Configuration {
    pub fn section(&self, kind: SectionKind) -> &OrderedSection {
        match kind {
            SectionKind::GoTo => &self.go_to,
            SectionKind::Commands => &self.commands,
            SectionKind::Notes => &self.notes,
        }
    }

    /// True when no section has a single entry, dividers included.
    pub fn is_empty(&self) -> bool {
        SectionKind::ALL
            .iter()
            .all(|kind| self.section(*kind).is_empty())
    }

    /// Seed written on first launch.
    pub fn starter() -> Self {
        Self {
            go_to: [("home", "~")].into_iter().collect(),
            commands: [("example", "echo 'Add your commands in config.json'")]
                .into_iter()
                .collect(),
            notes: [("example", "Add your notes in config.json")]
                .into_iter()
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    #[serde(rename = "frequent_goTo", default = "default_frequent_goto")]
    pub frequent_goto_enabled: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            frequent_goto_enabled: default_frequent_goto(),
        }
    }
}

fn default_frequent_goto() -> bool {
    true
}
