// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Navdeck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Navdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! Runs a navigation session in the alternate screen (ratatui + crossterm): key presses become
//! [`NavEvent`]s, each transition is projected into a [`ViewFrame`] and drawn with an explicit
//! [`TuiTheme`]. Settings effects are handed to the caller as they happen and confirmed with a
//! short-lived toast.

use std::{
    error::Error,
    io,
    time::{Duration, Instant},
};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::matcher::Segment;
use crate::nav::{Effect, NavEvent, NavigationState, SessionOutcome, Transition};
use crate::render::{project, Row, SearchBox, ViewFrame};
use crate::store::StoreError;

mod theme;

pub use theme::{ThemeError, TuiTheme, PALETTE_ENV};

const POLL_INTERVAL: Duration = Duration::from_millis(250);
const TOAST_TTL: Duration = Duration::from_secs(2);

/// Runs one session until a selection or an exit.
///
/// `persist` receives every effect the session produces: settings changes while the session is
/// still on screen, the visit record of a goto selection as it finishes.
pub fn run<F>(
    state: NavigationState,
    theme: TuiTheme,
    mut persist: F,
) -> Result<SessionOutcome, Box<dyn Error>>
where
    F: FnMut(&Effect) -> Result<(), StoreError>,
{
    let mut terminal = TerminalSession::new()?;
    let (width, _) = crossterm::terminal::size()?;
    let mut app = App::new(state, theme, width);

    while !app.is_finished() {
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(POLL_INTERVAL)? {
            let Some(nav_event) = map_event(event::read()?) else {
                continue;
            };
            if let Some(effect) = app.handle_event(nav_event) {
                let result = persist(&effect);
                if let Err(err) = &result {
                    tracing::warn!(%err, ?effect, "persisting effect failed");
                }
                app.report_effect(&effect, result.map_err(|err| err.to_string()));
            }
        }
    }

    drop(terminal);
    Ok(app.into_outcome())
}

/// Terminal events to navigation events. Only key presses and resizes matter.
fn map_event(event: Event) -> Option<NavEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => map_key(key),
        Event::Resize(width, _) => Some(NavEvent::Resize(width)),
        _ => None,
    }
}

fn map_key(key: KeyEvent) -> Option<NavEvent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
            .then_some(NavEvent::Interrupt);
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        return None;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Some(NavEvent::Cancel),
        KeyCode::Char('/') => Some(NavEvent::SearchTrigger),
        KeyCode::Char(ch) => Some(NavEvent::Char(ch)),
        KeyCode::Backspace => Some(NavEvent::Backspace),
        KeyCode::Left => Some(NavEvent::Left),
        KeyCode::Right => Some(NavEvent::Right),
        KeyCode::Up => Some(NavEvent::Up),
        KeyCode::Down => Some(NavEvent::Down),
        KeyCode::Enter => Some(NavEvent::Enter),
        _ => None,
    }
}

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    expires_at: Instant,
    is_error: bool,
}

struct App {
    state: Option<NavigationState>,
    outcome: Option<SessionOutcome>,
    theme: TuiTheme,
    toast: Option<Toast>,
    layout_width: u16,
}

impl App {
    fn new(state: NavigationState, theme: TuiTheme, layout_width: u16) -> Self {
        Self {
            state: Some(state),
            outcome: None,
            theme,
            toast: None,
            layout_width,
        }
    }

    fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    fn into_outcome(self) -> SessionOutcome {
        self.outcome.unwrap_or(SessionOutcome::Exit)
    }

    fn handle_event(&mut self, event: NavEvent) -> Option<Effect> {
        if let NavEvent::Resize(width) = event {
            self.layout_width = width;
        }
        let state = self.state.take()?;
        match state.step(event) {
            Transition::Continue { state, effect } => {
                self.state = Some(state);
                effect
            }
            Transition::Finished { outcome, effect } => {
                self.outcome = Some(outcome);
                effect
            }
        }
    }

    fn report_effect(&mut self, effect: &Effect, result: Result<(), String>) {
        match (effect, result) {
            (_, Err(err)) => self.set_toast(format!("Save failed: {err}"), true),
            (Effect::SetFrequentGoto(true), Ok(())) => {
                self.set_toast("Frequent goto enabled (next launch)", false)
            }
            (Effect::SetFrequentGoto(false), Ok(())) => {
                self.set_toast("Frequent goto disabled (next launch)", false)
            }
            (Effect::ClearFrequency, Ok(())) => self.set_toast("Frequency history cleared", false),
            (Effect::RecordVisit(_), Ok(())) => {}
        }
    }

    fn set_toast(&mut self, message: impl Into<String>, is_error: bool) {
        self.toast = Some(Toast {
            message: message.into(),
            expires_at: Instant::now() + TOAST_TTL,
            is_error,
        });
    }

    fn live_toast(&mut self, now: Instant) -> Option<&Toast> {
        if self.toast.as_ref().is_some_and(|toast| toast.expires_at <= now) {
            self.toast = None;
        }
        self.toast.as_ref()
    }

    fn view(&self) -> Option<ViewFrame> {
        self.state.as_ref().map(project)
    }
}

include!("chrome.rs");

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let Some(view) = app.view() else {
        return;
    };
    let area = frame.area();
    let width = content_width(app.layout_width.min(area.width));
    let theme = app.theme.clone();

    frame.render_widget(Block::default().style(theme.base_style()), area);

    let search_height = if view.search.is_some() { 3 } else { 0 };
    let [tabs_area, search_area, list_area, footer_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(search_height),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(Paragraph::new(tab_line(&view, &theme)), tabs_area);

    if let Some(search) = &view.search {
        let box_area = Rect {
            width: width.min(search_area.width),
            ..search_area
        };
        let search_box = Paragraph::new(search_line(search, &theme)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(theme.search_box_style()),
        );
        frame.render_widget(search_box, box_area);
        if !search.is_placeholder {
            let cursor_x = box_area
                .x
                .saturating_add(1)
                .saturating_add(search_cursor_offset(search))
                .min(box_area.right().saturating_sub(2));
            frame.set_cursor_position((cursor_x, box_area.y.saturating_add(1)));
        }
    }

    let lines = list_lines(&view, &theme, usize::from(width));
    frame.render_widget(Paragraph::new(lines), list_area);

    let toast = app.live_toast(Instant::now()).cloned();
    frame.render_widget(
        Paragraph::new(footer_line(&view, toast.as_ref(), &theme)),
        footer_area,
    );
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}

#[cfg(test)]
mod tests;
