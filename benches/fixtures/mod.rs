// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Navdeck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Navdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Deterministic configurations (no RNG).

use navdeck::model::{Configuration, FrequencyTable, ListItem, OrderedSection};

#[derive(Debug, Clone, Copy)]
pub enum Case {
    Small,
    Large,
}

impl Case {
    pub const ALL: [Self; 2] = [Self::Small, Self::Large];

    pub fn id(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Large => "large",
        }
    }

    fn entries(self) -> usize {
        match self {
            Self::Small => 40,
            Self::Large => 2_000,
        }
    }
}

const WORDS: [&str; 8] = [
    "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel",
];

fn section(prefix: &str, count: usize) -> OrderedSection {
    (0..count)
        .map(|idx| {
            if idx % 25 == 0 {
                (format!("div{idx}"), format!("Group {}", idx / 25))
            } else {
                let word = WORDS[idx % WORDS.len()];
                (
                    format!("{prefix}_{word}_{idx:05}"),
                    format!("~/work/{word}/{prefix}/{idx:05}"),
                )
            }
        })
        .collect()
}

pub fn config(case: Case) -> Configuration {
    let count = case.entries();
    Configuration {
        go_to: section("goto", count),
        commands: section("cmd", count / 4),
        notes: section("note", count / 4),
    }
}

pub fn items(case: Case) -> Vec<ListItem> {
    config(case).go_to.to_items()
}

/// Every goto key visited a different number of times.
pub fn frequency(case: Case) -> FrequencyTable {
    config(case)
        .go_to
        .keys()
        .iter()
        .enumerate()
        .map(|(idx, key)| (key.clone(), (idx % 17) as u64 + 1))
        .collect()
}
