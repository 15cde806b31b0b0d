// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Navdeck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Navdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Greedy subsequence matching and match highlighting.
//!
//! `fuzzy_match` and `highlight` share one consumption rule: walk the text left to right and take
//! the first character that equals the next pending query character (case-insensitively). The
//! characters `highlight` marks are therefore exactly the ones that made `fuzzy_match` succeed.

use crate::model::ListItem;

/// A run of text that is either entirely matched or entirely unmatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub matched: bool,
}

impl Segment {
    fn new(text: impl Into<String>, matched: bool) -> Self {
        Self {
            text: text.into(),
            matched,
        }
    }
}

fn fold(ch: char) -> char {
    ch.to_lowercase().next().unwrap_or(ch)
}

/// Greedy consumption shared by matching and highlighting.
///
/// Calls `on_char` for every text character along with whether it consumed a query character, and
/// returns true when the whole query was consumed.
fn consume(text: &str, query: &str, mut on_char: impl FnMut(char, bool)) -> bool {
    let mut needle = query.chars().map(fold).peekable();
    for ch in text.chars() {
        let consumed = match needle.peek() {
            Some(&want) if fold(ch) == want => {
                needle.next();
                true
            }
            _ => false,
        };
        on_char(ch, consumed);
    }
    needle.peek().is_none()
}

/// True iff `query` is a case-insensitive subsequence of `text`. An empty query always matches.
pub fn fuzzy_match(text: &str, query: &str) -> bool {
    let mut needle = query.chars().map(fold).peekable();
    for ch in text.chars() {
        let Some(&want) = needle.peek() else {
            break;
        };
        if fold(ch) == want {
            needle.next();
        }
    }
    needle.peek().is_none()
}

/// Char positions in `text` consumed by the greedy match, or `None` when `query` does not match.
pub fn match_positions(text: &str, query: &str) -> Option<Vec<usize>> {
    let mut positions = Vec::new();
    let mut char_pos = 0usize;
    let matched = consume(text, query, |_, consumed| {
        if consumed {
            positions.push(char_pos);
        }
        char_pos += 1;
    });
    matched.then_some(positions)
}

/// Splits `text` into matched/unmatched runs for display emphasis.
///
/// Consumes greedily even when the full query does not match, so a partially matching detail
/// line still shows which characters lined up.
pub fn highlight(text: &str, query: &str) -> Vec<Segment> {
    if query.is_empty() {
        return if text.is_empty() {
            Vec::new()
        } else {
            vec![Segment::new(text, false)]
        };
    }

    let mut segments = Vec::<Segment>::new();
    consume(text, query, |ch, consumed| match segments.last_mut() {
        Some(last) if last.matched == consumed => last.text.push(ch),
        _ => segments.push(Segment::new(ch, consumed)),
    });
    segments
}

/// Whether a row should survive filtering: dividers never match, entries match on label or
/// detail.
pub fn item_matches(item: &ListItem, query: &str) -> bool {
    item.is_selectable() && (fuzzy_match(item.label(), query) || fuzzy_match(item.detail(), query))
}

/// Rows of `items` matching `query`, in their original order.
pub fn filter_items(items: &[ListItem], query: &str) -> Vec<ListItem> {
    items
        .iter()
        .filter(|item| item_matches(item, query))
        .cloned()
        .collect()
}
