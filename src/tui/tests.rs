// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Navdeck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Navdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};

use super::{
    divider_text, draw, footer_line, list_lines, map_event, map_key, row_line,
    search_cursor_offset, tab_line, App, Toast, TuiTheme,
};
use crate::matcher::highlight;
use crate::model::{Configuration, FrequencyTable, Options, OrderedSection};
use crate::nav::{Effect, NavEvent, NavigationState, SessionOutcome};
use crate::render::{project, Row, SearchBox};

fn line_to_string(line: &ratatui::text::Line<'_>) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect::<String>()
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn state_for(go_to: &[(&str, &str)]) -> NavigationState {
    let config = Configuration {
        go_to: go_to.iter().copied().collect::<OrderedSection>(),
        ..Configuration::default()
    };
    NavigationState::new(&config, Options::default(), &FrequencyTable::new()).expect("state")
}

fn app_for(go_to: &[(&str, &str)]) -> App {
    App::new(state_for(go_to), TuiTheme::default(), 80)
}

fn buffer_lines(terminal: &Terminal<TestBackend>) -> Vec<String> {
    let buffer = terminal.backend().buffer();
    let width = usize::from(buffer.area.width);
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect()
}

#[test]
fn keys_map_to_navigation_events() {
    assert_eq!(map_key(key(KeyCode::Esc)), Some(NavEvent::Cancel));
    assert_eq!(map_key(key(KeyCode::Char('q'))), Some(NavEvent::Cancel));
    assert_eq!(map_key(key(KeyCode::Char('/'))), Some(NavEvent::SearchTrigger));
    assert_eq!(map_key(key(KeyCode::Char('x'))), Some(NavEvent::Char('x')));
    assert_eq!(map_key(key(KeyCode::Backspace)), Some(NavEvent::Backspace));
    assert_eq!(map_key(key(KeyCode::Left)), Some(NavEvent::Left));
    assert_eq!(map_key(key(KeyCode::Right)), Some(NavEvent::Right));
    assert_eq!(map_key(key(KeyCode::Up)), Some(NavEvent::Up));
    assert_eq!(map_key(key(KeyCode::Down)), Some(NavEvent::Down));
    assert_eq!(map_key(key(KeyCode::Enter)), Some(NavEvent::Enter));
    assert_eq!(map_key(key(KeyCode::Tab)), None);
}

#[test]
fn control_c_interrupts_and_other_chords_are_dropped() {
    assert_eq!(
        map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        Some(NavEvent::Interrupt)
    );
    assert_eq!(
        map_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL)),
        None
    );
    assert_eq!(
        map_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::ALT)),
        None
    );
    assert_eq!(
        map_key(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT)),
        Some(NavEvent::Char('A'))
    );
}

#[test]
fn only_presses_and_resizes_become_events() {
    let release = KeyEvent {
        code: KeyCode::Down,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    };
    assert_eq!(map_event(Event::Key(release)), None);
    assert_eq!(map_event(Event::Key(key(KeyCode::Down))), Some(NavEvent::Down));
    assert_eq!(map_event(Event::Resize(120, 40)), Some(NavEvent::Resize(120)));
    assert_eq!(map_event(Event::FocusGained), None);
}

#[test]
fn app_tracks_layout_width_and_finishes_on_selection() {
    let mut app = app_for(&[("home", "~"), ("work", "~/work")]);
    assert_eq!(app.handle_event(NavEvent::Resize(42)), None);
    assert_eq!(app.layout_width, 42);
    assert!(!app.is_finished());

    assert_eq!(app.handle_event(NavEvent::Down), None);
    let effect = app.handle_event(NavEvent::Enter);
    assert_eq!(effect, Some(Effect::RecordVisit("work".to_owned())));
    assert!(app.is_finished());
    assert!(app.view().is_none());
    assert_eq!(app.handle_event(NavEvent::Up), None);
    assert_eq!(app.into_outcome().wire(), "goto|work|~/work");
}

#[test]
fn settings_effects_raise_toasts() {
    let mut app = app_for(&[("home", "~")]);
    app.handle_event(NavEvent::Right);
    let effect = app.handle_event(NavEvent::Enter).expect("effect");
    assert_eq!(effect, Effect::SetFrequentGoto(false));

    app.report_effect(&effect, Ok(()));
    let toast = app.live_toast(Instant::now()).expect("toast");
    assert!(toast.message.contains("disabled"));
    assert!(!toast.is_error);

    app.report_effect(&Effect::ClearFrequency, Err("disk full".to_owned()));
    let toast = app.live_toast(Instant::now()).expect("toast");
    assert_eq!(toast.message, "Save failed: disk full");
    assert!(toast.is_error);

    assert!(app
        .live_toast(Instant::now() + Duration::from_secs(3))
        .is_none());
    assert!(app.toast.is_none());
}

#[test]
fn cancel_outside_search_exits() {
    let mut app = app_for(&[("home", "~")]);
    assert_eq!(app.handle_event(NavEvent::Cancel), None);
    assert_eq!(app.into_outcome(), SessionOutcome::Exit);
}

#[test]
fn tab_line_brackets_the_active_page() {
    let view = project(&state_for(&[("home", "~")]));
    let text = line_to_string(&tab_line(&view, &TuiTheme::default()));
    assert_eq!(text, "[ goto ]  settings  ");
}

#[test]
fn divider_is_centered_within_width() {
    assert_eq!(divider_text("Work", 20), "    ─── Work ───");
    assert_eq!(divider_text("A very long title", 5), "─── A very long title ───");
}

#[test]
fn entry_rows_carry_cursor_marker_and_match_styles() {
    let theme = TuiTheme::default();
    let row = Row::Entry {
        label: highlight("cabbage", "ab"),
        detail: highlight("~/veg", "ab"),
        is_cursor: true,
    };
    let line = row_line(&row, false, &theme, 60);
    assert_eq!(line_to_string(&line), "▸ cabbage  ~/veg");
    let matched = line
        .spans
        .iter()
        .find(|span| span.content.as_ref() == "ab")
        .expect("matched span");
    assert_eq!(matched.style, theme.match_style());

    let plain = Row::Entry {
        label: highlight("home", ""),
        detail: Vec::new(),
        is_cursor: false,
    };
    assert_eq!(line_to_string(&row_line(&plain, false, &theme, 60)), "  home");
}

#[test]
fn list_lines_show_scroll_markers_and_empty_state() {
    let theme = TuiTheme::default();
    let pairs: Vec<(String, String)> = (0..12)
        .map(|index| (format!("d{index}"), format!("/d{index}")))
        .collect();
    let refs: Vec<(&str, &str)> = pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
    let view = project(&state_for(&refs));
    let lines = list_lines(&view, &theme, 60);
    assert_eq!(lines.len(), 11);
    assert_eq!(line_to_string(&lines[10]), "  ⬇ More items below...");

    let mut app = app_for(&[("home", "~")]);
    app.handle_event(NavEvent::SearchTrigger);
    app.handle_event(NavEvent::Char('z'));
    let view = app.view().expect("view");
    let lines = list_lines(&view, &theme, 60);
    assert_eq!(lines.len(), 1);
    assert_eq!(line_to_string(&lines[0]), "  No matches found");
}

#[test]
fn footer_appends_live_toast() {
    let theme = TuiTheme::default();
    let view = project(&state_for(&[("home", "~")]));
    let toast = Toast {
        message: "Frequency history cleared".to_owned(),
        expires_at: Instant::now() + Duration::from_secs(2),
        is_error: false,
    };
    let text = line_to_string(&footer_line(&view, Some(&toast), &theme));
    assert_eq!(
        text,
        "/ search • ← → switch • ↑↓ navigate • enter select • q/esc quit | Frequency history cleared"
    );
}

#[test]
fn draw_renders_tabs_rows_and_footer() {
    let mut terminal = Terminal::new(TestBackend::new(80, 16)).expect("terminal");
    let mut app = app_for(&[("div0", "Places"), ("home", "~"), ("work", "~/work")]);

    terminal.draw(|frame| draw(frame, &mut app)).expect("draw");
    let lines = buffer_lines(&terminal);
    assert!(lines[0].starts_with("[ goto ]"));
    assert!(lines.iter().any(|line| line.contains("─── Places ───")));
    assert!(lines.iter().any(|line| line.starts_with("▸ home")));
    assert!(lines.iter().any(|line| line.starts_with("  work")));
    assert!(lines[15].starts_with("/ search"));
}

#[test]
fn draw_shows_search_box_while_searching() {
    let mut terminal = Terminal::new(TestBackend::new(80, 16)).expect("terminal");
    let mut app = app_for(&[("home", "~"), ("work", "~/work")]);
    app.handle_event(NavEvent::SearchTrigger);
    app.handle_event(NavEvent::Char('w'));

    terminal.draw(|frame| draw(frame, &mut app)).expect("draw");
    let lines = buffer_lines(&terminal);
    assert!(lines.iter().any(|line| line.contains("Search: w")));
    assert!(lines.iter().any(|line| line.starts_with("▸ work")));
    assert!(!lines.iter().any(|line| line.contains("home")));
    assert!(lines[15].starts_with("type to search"));
}

#[test]
fn search_cursor_counts_display_columns() {
    let search = SearchBox {
        text: "ab".to_owned(),
        is_placeholder: false,
    };
    // the magnifier glyph is two columns wide
    assert_eq!(search_cursor_offset(&search), 13);

    let wide = SearchBox {
        text: "日本".to_owned(),
        is_placeholder: false,
    };
    assert_eq!(search_cursor_offset(&wide), 15);
}

#[test]
fn draw_places_cursor_after_the_typed_query() {
    let mut terminal = Terminal::new(TestBackend::new(80, 16)).expect("terminal");
    let mut app = app_for(&[("home", "~"), ("work", "~/work")]);
    app.handle_event(NavEvent::SearchTrigger);
    app.handle_event(NavEvent::Char('w'));

    terminal.draw(|frame| draw(frame, &mut app)).expect("draw");
    let position = terminal.get_cursor_position().expect("cursor position");
    assert_eq!((position.x, position.y), (13, 3));
}
