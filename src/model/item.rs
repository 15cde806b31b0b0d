// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Navdeck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Navdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

/// Reserved key prefix marking a non-selectable separator in a configuration section.
pub const DIVIDER_PREFIX: &str = "div";

/// One row of a page list.
///
/// Dividers only group rows visually; they can never be selected and never show up in search
/// results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    label: String,
    detail: String,
    is_divider: bool,
}

impl ListItem {
    pub fn entry(label: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            detail: detail.into(),
            is_divider: false,
        }
    }

    pub fn divider(label: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            detail: detail.into(),
            is_divider: true,
        }
    }

    /// Builds an item from a configuration key/value pair, detecting dividers by key prefix.
    pub fn from_config(key: &str, value: &str) -> Self {
        if is_divider_key(key) {
            Self::divider(key, value)
        } else {
            Self::entry(key, value)
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }

    pub fn is_divider(&self) -> bool {
        self.is_divider
    }

    pub fn is_selectable(&self) -> bool {
        !self.is_divider
    }
}

impl fmt::Display for ListItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_divider {
            write!(f, "─── {} ───", self.detail)
        } else {
            write!(f, "{}: {}", self.label, self.detail)
        }
    }
}

pub fn is_divider_key(key: &str) -> bool {
    key.starts_with(DIVIDER_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::{is_divider_key, ListItem};

    #[test]
    fn divider_keys_use_reserved_prefix() {
        assert!(is_divider_key("div1"));
        assert!(is_divider_key("div"));
        assert!(!is_divider_key("di"));
        assert!(!is_divider_key("home"));
    }

    #[test]
    fn from_config_marks_dividers() {
        let item = ListItem::from_config("div-work", "Work");
        assert!(item.is_divider());
        assert!(!item.is_selectable());
        assert_eq!(item.detail(), "Work");

        let item = ListItem::from_config("home", "~");
        assert!(item.is_selectable());
        assert_eq!(item.label(), "home");
        assert_eq!(item.detail(), "~");
    }

    #[test]
    fn display_renders_divider_label_from_detail() {
        assert_eq!(ListItem::divider("div1", "Projects").to_string(), "─── Projects ───");
        assert_eq!(ListItem::entry("home", "~").to_string(), "home: ~");
    }
}
