// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Navdeck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Navdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Paged list navigation.
//!
//! `NavigationState` owns everything a session mutates: the page table, the cursor, the viewport
//! window and the search query. Input arrives as [`NavEvent`]s and every event is folded in by
//! [`NavigationState::step`], which consumes the state and hands back a [`Transition`]. Side
//! effects that outlive the session (frequency counts, persisted options) are described by
//! [`Effect`] values and left to the caller.

use std::fmt;

use crate::matcher::filter_items;
use crate::model::{is_divider_key, Configuration, FrequencyTable, ListItem, Options, SectionKind};

/// Rows shown at once.
pub const VIEWPORT_CAPACITY: usize = 10;
/// Rows kept between the cursor and the viewport edge before scrolling.
pub const SCROLL_AHEAD: usize = 2;
/// Wire form of a session that ended without a selection.
pub const EXIT_SIGNAL: &str = "EXIT_SIGNAL";

const FREQUENT_TOGGLE_PREFIX: &str = "frequent goto";
const CLEAR_FREQUENCY_LABEL: &str = "clear frequency history";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Frequent,
    Section(SectionKind),
    Settings,
}

impl Page {
    pub fn name(self) -> &'static str {
        match self {
            Self::Frequent => "frequent",
            Self::Section(kind) => kind.name(),
            Self::Settings => "settings",
        }
    }

    /// Pages whose selections count towards the frequent ranking.
    pub fn is_navigation(self) -> bool {
        matches!(self, Self::Frequent | Self::Section(SectionKind::GoTo))
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Symbolic input, already decoupled from terminal key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    Interrupt,
    Cancel,
    SearchTrigger,
    Backspace,
    Char(char),
    Left,
    Right,
    Up,
    Down,
    Enter,
    Resize(u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Browsing,
    Searching,
}

/// Work the caller performs on persisted data after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SetFrequentGoto(bool),
    ClearFrequency,
    RecordVisit(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsEntry {
    FrequentGoto,
    ClearFrequency,
}

impl SettingsEntry {
    pub fn from_label(label: &str) -> Option<Self> {
        if label.starts_with(FREQUENT_TOGGLE_PREFIX) {
            Some(Self::FrequentGoto)
        } else if label == CLEAR_FREQUENCY_LABEL {
            Some(Self::ClearFrequency)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    page: Page,
    label: String,
    detail: String,
}

impl Selection {
    pub fn new(page: Page, label: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            page,
            label: label.into(),
            detail: detail.into(),
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }

    /// `page|label|detail`
    pub fn wire(&self) -> String {
        format!("{}|{}|{}", self.page.name(), self.label, self.detail)
    }

    /// `page|label`, for logs. Details can hold note text.
    pub fn summary(&self) -> String {
        format!("{}|{}", self.page.name(), self.label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    Selected(Selection),
    Exit,
}

impl SessionOutcome {
    pub fn wire(&self) -> String {
        match self {
            Self::Selected(selection) => selection.wire(),
            Self::Exit => EXIT_SIGNAL.to_owned(),
        }
    }

    pub fn summary(&self) -> String {
        match self {
            Self::Selected(selection) => selection.summary(),
            Self::Exit => EXIT_SIGNAL.to_owned(),
        }
    }
}

#[derive(Debug)]
pub enum Transition {
    Continue {
        state: NavigationState,
        effect: Option<Effect>,
    },
    Finished {
        outcome: SessionOutcome,
        effect: Option<Effect>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("no entries configured: goTo, commands and notes are all empty")]
    NoEntries,
}

#[derive(Debug, Clone)]
struct PageList {
    page: Page,
    items: Vec<ListItem>,
}

#[derive(Debug, Clone)]
pub struct NavigationState {
    pages: Vec<PageList>,
    page_index: usize,
    cursor: usize,
    viewport_start: usize,
    mode: Mode,
    query: String,
    filtered: Vec<ListItem>,
    saved_position: Option<(usize, usize)>,
    options: Options,
}

struct Sources<'a> {
    config: &'a Configuration,
    options: Options,
    frequency: &'a FrequencyTable,
}

/// Single dispatch point from a page to the items it lists.
fn page_items(page: Page, sources: &Sources<'_>) -> Vec<ListItem> {
    match page {
        Page::Frequent => frequent_items(sources.config, sources.frequency),
        Page::Section(kind) => sources.config.section(kind).to_items(),
        Page::Settings => settings_items(sources.options),
    }
}

fn frequent_items(config: &Configuration, frequency: &FrequencyTable) -> Vec<ListItem> {
    frequency
        .top_keys()
        .into_iter()
        .filter(|key| !is_divider_key(key))
        .filter_map(|key| {
            config
                .go_to
                .get(key)
                .map(|detail| ListItem::entry(key, detail))
        })
        .collect()
}

pub fn settings_items(options: Options) -> Vec<ListItem> {
    let toggle = if options.frequent_goto_enabled {
        format!("{FREQUENT_TOGGLE_PREFIX} [on]")
    } else {
        format!("{FREQUENT_TOGGLE_PREFIX} [off]")
    };
    vec![
        ListItem::entry(toggle, "rank most visited goto targets on their own page"),
        ListItem::entry(CLEAR_FREQUENCY_LABEL, "reset all goto visit counts"),
    ]
}

fn first_selectable(items: &[ListItem]) -> Option<usize> {
    items.iter().position(ListItem::is_selectable)
}

fn last_selectable(items: &[ListItem]) -> Option<usize> {
    items.iter().rposition(ListItem::is_selectable)
}

impl NavigationState {
    pub fn new(
        config: &Configuration,
        options: Options,
        frequency: &FrequencyTable,
    ) -> Result<Self, SessionError> {
        if config.is_empty() {
            return Err(SessionError::NoEntries);
        }

        let sources = Sources {
            config,
            options,
            frequency,
        };
        let mut candidates = Vec::with_capacity(SectionKind::ALL.len() + 2);
        if options.frequent_goto_enabled {
            candidates.push(Page::Frequent);
        }
        candidates.extend(SectionKind::ALL.into_iter().map(Page::Section));

        let mut pages: Vec<PageList> = candidates
            .into_iter()
            .map(|page| PageList {
                page,
                items: page_items(page, &sources),
            })
            .filter(|list| !list.items.is_empty())
            .collect();
        pages.push(PageList {
            page: Page::Settings,
            items: page_items(Page::Settings, &sources),
        });

        let mut state = Self {
            pages,
            page_index: 0,
            cursor: 0,
            viewport_start: 0,
            mode: Mode::Browsing,
            query: String::new(),
            filtered: Vec::new(),
            saved_position: None,
            options,
        };
        state.reset_cursor();
        Ok(state)
    }

    pub fn pages(&self) -> impl Iterator<Item = Page> + '_ {
        self.pages.iter().map(|list| list.page)
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn current_page(&self) -> Page {
        self.pages[self.page_index].page
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn viewport_start(&self) -> usize {
        self.viewport_start
    }

    /// Exclusive end of the visible window over the active list.
    pub fn visible_end(&self) -> usize {
        (self.viewport_start + VIEWPORT_CAPACITY).min(self.active_items().len())
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_searching(&self) -> bool {
        self.mode == Mode::Searching
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn options(&self) -> Options {
        self.options
    }

    /// Full item list of the current page, regardless of any query.
    pub fn page_items(&self) -> &[ListItem] {
        &self.pages[self.page_index].items
    }

    /// The list the cursor moves over: the filtered list while a query is typed, otherwise the
    /// page's full list.
    pub fn active_items(&self) -> &[ListItem] {
        if self.is_searching() && !self.query.is_empty() {
            &self.filtered
        } else {
            self.page_items()
        }
    }

    pub fn selected_item(&self) -> Option<&ListItem> {
        self.active_items()
            .get(self.cursor)
            .filter(|item| item.is_selectable())
    }

    pub fn step(mut self, event: NavEvent) -> Transition {
        let effect = match event {
            NavEvent::Interrupt => return self.finish(SessionOutcome::Exit, None),
            NavEvent::Cancel => match self.mode {
                Mode::Searching => {
                    self.leave_search();
                    None
                }
                Mode::Browsing => return self.finish(SessionOutcome::Exit, None),
            },
            NavEvent::SearchTrigger => {
                if self.mode == Mode::Browsing {
                    self.enter_search();
                }
                None
            }
            NavEvent::Backspace => {
                if self.is_searching() && self.query.pop().is_some() {
                    self.refilter();
                    self.reset_cursor();
                }
                None
            }
            NavEvent::Char(ch) => {
                if self.is_searching() {
                    self.query.push(ch);
                    self.refilter();
                    self.reset_cursor();
                }
                None
            }
            NavEvent::Left => {
                self.switch_page(false);
                None
            }
            NavEvent::Right => {
                self.switch_page(true);
                None
            }
            NavEvent::Up => {
                self.move_up();
                None
            }
            NavEvent::Down => {
                self.move_down();
                None
            }
            NavEvent::Enter => return self.select(),
            NavEvent::Resize(_) => None,
        };
        Transition::Continue {
            state: self,
            effect,
        }
    }

    fn finish(self, outcome: SessionOutcome, effect: Option<Effect>) -> Transition {
        tracing::debug!(outcome = %outcome.summary(), "navigation finished");
        Transition::Finished { outcome, effect }
    }

    fn enter_search(&mut self) {
        self.saved_position = Some((self.cursor, self.viewport_start));
        self.mode = Mode::Searching;
        self.query.clear();
        self.filtered.clear();
        self.reset_cursor();
    }

    fn leave_search(&mut self) {
        let restore = self.query.is_empty();
        self.mode = Mode::Browsing;
        self.query.clear();
        self.filtered.clear();
        match self.saved_position.take() {
            Some((cursor, start)) if restore => {
                self.cursor = cursor;
                self.viewport_start = start;
            }
            _ => self.reset_cursor(),
        }
    }

    fn refilter(&mut self) {
        self.filtered = if self.query.is_empty() {
            Vec::new()
        } else {
            filter_items(self.page_items(), &self.query)
        };
    }

    fn switch_page(&mut self, forward: bool) {
        if self.is_searching() || self.pages.len() < 2 {
            return;
        }
        let count = self.pages.len();
        self.page_index = if forward {
            (self.page_index + 1) % count
        } else {
            (self.page_index + count - 1) % count
        };
        self.reset_cursor();
    }

    /// Cursor to the first selectable row (or the last row of an all-divider list), viewport to
    /// the top.
    fn reset_cursor(&mut self) {
        let items = self.active_items();
        self.cursor = first_selectable(items).unwrap_or(items.len().saturating_sub(1));
        self.viewport_start = 0;
        self.keep_cursor_visible();
    }

    fn move_up(&mut self) {
        let items = self.active_items();
        let len = items.len();
        let previous = items[..self.cursor.min(len)]
            .iter()
            .rposition(ListItem::is_selectable);
        match previous {
            Some(index) => {
                self.cursor = index;
                if self.cursor < self.viewport_start + SCROLL_AHEAD && self.viewport_start > 0 {
                    self.viewport_start -= 1;
                }
            }
            None => {
                let Some(last) = last_selectable(items) else {
                    return;
                };
                self.cursor = last;
                self.viewport_start = len.saturating_sub(VIEWPORT_CAPACITY);
            }
        }
        self.keep_cursor_visible();
    }

    fn move_down(&mut self) {
        let items = self.active_items();
        let len = items.len();
        let next = items
            .iter()
            .enumerate()
            .skip(self.cursor + 1)
            .find(|(_, item)| item.is_selectable())
            .map(|(index, _)| index);
        match next {
            Some(index) => {
                self.cursor = index;
                if self.cursor + SCROLL_AHEAD > self.viewport_start + VIEWPORT_CAPACITY {
                    let max_start = len.saturating_sub(VIEWPORT_CAPACITY);
                    self.viewport_start = (self.viewport_start + 1).min(max_start);
                }
            }
            None => {
                let Some(first) = first_selectable(items) else {
                    return;
                };
                self.cursor = first;
                self.viewport_start = 0;
            }
        }
        self.keep_cursor_visible();
    }

    fn keep_cursor_visible(&mut self) {
        if self.cursor < self.viewport_start {
            self.viewport_start = self.cursor;
        } else if self.cursor >= self.viewport_start + VIEWPORT_CAPACITY {
            self.viewport_start = self.cursor + 1 - VIEWPORT_CAPACITY;
        }
    }

    fn select(mut self) -> Transition {
        let Some(item) = self.selected_item().cloned() else {
            return Transition::Continue {
                state: self,
                effect: None,
            };
        };
        let page = self.current_page();
        if page == Page::Settings {
            let effect = self.apply_setting(item.label());
            return Transition::Continue {
                state: self,
                effect,
            };
        }

        let effect = (page.is_navigation() && self.options.frequent_goto_enabled)
            .then(|| Effect::RecordVisit(item.label().to_owned()));
        let selection = Selection::new(page, item.label(), item.detail());
        self.finish(SessionOutcome::Selected(selection), effect)
    }

    fn apply_setting(&mut self, label: &str) -> Option<Effect> {
        let effect = match SettingsEntry::from_label(label)? {
            SettingsEntry::FrequentGoto => {
                self.options.frequent_goto_enabled = !self.options.frequent_goto_enabled;
                Effect::SetFrequentGoto(self.options.frequent_goto_enabled)
            }
            SettingsEntry::ClearFrequency => Effect::ClearFrequency,
        };
        self.pages[self.page_index].items = settings_items(self.options);
        if self.is_searching() {
            self.refilter();
            if self.selected_item().is_none() {
                self.reset_cursor();
            }
        }
        tracing::debug!(?effect, "settings entry applied");
        Some(effect)
    }
}
