// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Navdeck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Navdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Frame projection.
//!
//! [`project`] turns a [`NavigationState`] into a [`ViewFrame`]: a plain description of what the
//! screen shows (tabs, search box, the visible window of rows, scroll markers, footer hints). It
//! never touches the terminal and never mutates state, so the terminal layer only maps the frame
//! onto widgets and colors.

use crate::matcher::{highlight, Segment};
use crate::nav::{NavigationState, Page};

pub const SEARCH_PLACEHOLDER: &str = "(type to search...)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub name: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBox {
    pub text: String,
    pub is_placeholder: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    Divider {
        title: String,
    },
    Entry {
        label: Vec<Segment>,
        detail: Vec<Segment>,
        is_cursor: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    NoMatches,
    NoItems,
}

impl EmptyState {
    pub fn message(self) -> &'static str {
        match self {
            Self::NoMatches => "No matches found",
            Self::NoItems => "No items configured",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hint {
    pub key: &'static str,
    pub action: &'static str,
}

const fn hint(key: &'static str, action: &'static str) -> Hint {
    Hint { key, action }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewFrame {
    pub tabs: Vec<Tab>,
    pub search: Option<SearchBox>,
    pub rows: Vec<Row>,
    pub scroll_up: bool,
    pub scroll_down: bool,
    pub empty: Option<EmptyState>,
    pub hints: Vec<Hint>,
    pub settings_page: bool,
}

impl ViewFrame {
    /// Footer hints joined the way the status line prints them.
    pub fn footer_text(&self) -> String {
        self.hints
            .iter()
            .map(|hint| format!("{} {}", hint.key, hint.action))
            .collect::<Vec<_>>()
            .join(" • ")
    }

    /// Index into `rows` of the entry under the cursor.
    pub fn cursor_row(&self) -> Option<usize> {
        self.rows
            .iter()
            .position(|row| matches!(row, Row::Entry { is_cursor: true, .. }))
    }
}

pub fn project(state: &NavigationState) -> ViewFrame {
    let current = state.current_page();
    let tabs = state
        .pages()
        .map(|page| Tab {
            name: page.name(),
            active: page == current,
        })
        .collect();

    let search = state.is_searching().then(|| {
        if state.query().is_empty() {
            SearchBox {
                text: SEARCH_PLACEHOLDER.to_owned(),
                is_placeholder: true,
            }
        } else {
            SearchBox {
                text: state.query().to_owned(),
                is_placeholder: false,
            }
        }
    });

    let items = state.active_items();
    let start = state.viewport_start().min(items.len());
    let end = state.visible_end();
    let query = state.query();
    let rows = items[start..end]
        .iter()
        .enumerate()
        .map(|(offset, item)| {
            if item.is_divider() {
                Row::Divider {
                    title: item.detail().to_owned(),
                }
            } else {
                Row::Entry {
                    label: highlight(item.label(), query),
                    detail: highlight(item.detail(), query),
                    is_cursor: start + offset == state.cursor(),
                }
            }
        })
        .collect();

    let empty = items.is_empty().then(|| {
        if state.is_searching() {
            EmptyState::NoMatches
        } else {
            EmptyState::NoItems
        }
    });

    ViewFrame {
        tabs,
        search,
        rows,
        scroll_up: !items.is_empty() && start > 0,
        scroll_down: end < items.len(),
        empty,
        hints: footer_hints(state.is_searching(), state.page_count()),
        settings_page: current == Page::Settings,
    }
}

fn footer_hints(searching: bool, page_count: usize) -> Vec<Hint> {
    if searching {
        return vec![
            hint("type", "to search"),
            hint("↑↓", "navigate"),
            hint("enter", "select"),
            hint("esc", "cancel"),
        ];
    }

    let mut hints = vec![hint("/", "search")];
    if page_count > 1 {
        hints.push(hint("← →", "switch"));
    }
    hints.extend([
        hint("↑↓", "navigate"),
        hint("enter", "select"),
        hint("q/esc", "quit"),
    ]);
    hints
}
