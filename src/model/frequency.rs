// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Navdeck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Navdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Selection counts per navigation target.
///
/// Counts only grow; the single way back down is [`FrequencyTable::clear`]. Keys are held in a
/// `BTreeMap`, so equal counts rank in lexicographic key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyTable {
    #[serde(default)]
    frequencies: BTreeMap<String, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, key: &str) {
        match self.frequencies.get_mut(key) {
            Some(count) => *count = count.saturating_add(1),
            None => {
                self.frequencies.insert(key.to_owned(), 1);
            }
        }
    }

    pub fn count(&self, key: &str) -> u64 {
        self.frequencies.get(key).copied().unwrap_or(0)
    }

    /// Keys ordered by descending count; ties keep lexicographic key order.
    pub fn top_keys(&self) -> Vec<&str> {
        let mut ranked = self
            .frequencies
            .iter()
            .map(|(key, count)| (key.as_str(), *count))
            .collect::<Vec<_>>();
        ranked.sort_by(|(_, a), (_, b)| b.cmp(a));
        ranked.into_iter().map(|(key, _)| key).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn clear(&mut self) {
        self.frequencies.clear();
    }
}

impl<K: Into<String>> FromIterator<(K, u64)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (K, u64)>>(iter: I) -> Self {
        Self {
            frequencies: iter.into_iter().map(|(key, count)| (key.into(), count)).collect(),
        }
    }
}
