// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Navdeck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Navdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Insertion-ordered string table used for configuration sections.
//!
//! JSON objects carry no ordering guarantee once they land in a hash map, but the order in which
//! a user wrote their bookmarks is the order they expect to see them. `OrderedSection` keeps a
//! key sequence next to the value lookup and (de)serializes through serde's map visitor so the
//! source order is observed directly.

use std::collections::HashMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::item::ListItem;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedSection {
    keys: Vec<String>,
    values: HashMap<String, String>,
}

impl OrderedSection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `key`, or overwrites its value in place when it already exists.
    ///
    /// Returns the previous value, if any. The key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match self.values.insert(key.clone(), value) {
            Some(previous) => Some(previous),
            None => {
                self.keys.push(key);
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.keys.iter().filter_map(|key| {
            self.values
                .get(key)
                .map(|value| (key.as_str(), value.as_str()))
        })
    }

    /// Materializes the section as page rows, in key order.
    pub fn to_items(&self) -> Vec<ListItem> {
        self.iter()
            .map(|(key, value)| ListItem::from_config(key, value))
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for OrderedSection
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut section = Self::new();
        for (key, value) in iter {
            section.insert(key, value);
        }
        section
    }
}

impl Serialize for OrderedSection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.keys.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for OrderedSection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(OrderedSectionVisitor)
    }
}

struct OrderedSectionVisitor;

impl<'de> Visitor<'de> for OrderedSectionVisitor {
    type Value = OrderedSection;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object mapping names to strings")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut section = OrderedSection::new();
        while let Some((key, value)) = access.next_entry::<String, String>()? {
            section.insert(key, value);
        }
        Ok(section)
    }
}
