// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Navdeck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Navdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

// Line builders mapping a `ViewFrame` onto styled ratatui lines.

const CONTENT_MAX_WIDTH: u16 = 76;
const CURSOR_MARKER: &str = "▸ ";
const SEARCH_PROMPT: &str = "🔍 Search: ";
const SCROLL_UP_TEXT: &str = "  ⬆ More items above...";
const SCROLL_DOWN_TEXT: &str = "  ⬇ More items below...";
const HINT_SEPARATOR: &str = " • ";

fn content_width(layout_width: u16) -> u16 {
    layout_width.min(CONTENT_MAX_WIDTH)
}

fn tab_line(view: &ViewFrame, theme: &TuiTheme) -> Line<'static> {
    let spans = view
        .tabs
        .iter()
        .map(|tab| {
            let text = if tab.active {
                format!("[ {} ]", tab.name)
            } else {
                format!("  {}  ", tab.name)
            };
            Span::styled(text, theme.tab_style(tab.active))
        })
        .collect::<Vec<_>>();
    Line::from(spans)
}

fn search_line(search: &SearchBox, theme: &TuiTheme) -> Line<'static> {
    let text_style = if search.is_placeholder {
        theme.muted_style()
    } else {
        theme.search_box_style()
    };
    Line::from(vec![
        Span::styled(SEARCH_PROMPT.to_owned(), theme.search_box_style()),
        Span::styled(search.text.clone(), text_style),
    ])
}

/// Terminal columns between the box edge and the end of the typed query.
fn search_cursor_offset(search: &SearchBox) -> u16 {
    let columns = Span::raw(SEARCH_PROMPT).width() + Span::raw(search.text.as_str()).width();
    u16::try_from(columns).unwrap_or(u16::MAX)
}

fn segment_spans(segments: &[Segment], style: Style, theme: &TuiTheme) -> Vec<Span<'static>> {
    segments
        .iter()
        .map(|segment| {
            let style = if segment.matched {
                theme.match_style()
            } else {
                style
            };
            Span::styled(segment.text.clone(), style)
        })
        .collect()
}

fn divider_text(title: &str, width: usize) -> String {
    let core = format!("─── {title} ───");
    let len = core.chars().count();
    if len >= width {
        return core;
    }
    format!("{}{core}", " ".repeat((width - len) / 2))
}

fn row_line(row: &Row, settings: bool, theme: &TuiTheme, width: usize) -> Line<'static> {
    match row {
        Row::Divider { title } => Line::from(Span::styled(
            divider_text(title, width),
            theme.divider_style(),
        )),
        Row::Entry {
            label,
            detail,
            is_cursor,
        } => {
            let mut spans = Vec::with_capacity(label.len() + detail.len() + 2);
            if *is_cursor {
                spans.push(Span::styled(
                    CURSOR_MARKER.to_owned(),
                    theme.cursor_marker_style(settings),
                ));
            } else {
                spans.push(Span::styled("  ".to_owned(), theme.base_style()));
            }
            spans.extend(segment_spans(
                label,
                theme.label_style(settings, *is_cursor),
                theme,
            ));
            if !detail.is_empty() {
                spans.push(Span::styled("  ".to_owned(), theme.base_style()));
                spans.extend(segment_spans(detail, theme.detail_style(settings), theme));
            }
            Line::from(spans)
        }
    }
}

fn list_lines(view: &ViewFrame, theme: &TuiTheme, width: usize) -> Vec<Line<'static>> {
    if let Some(empty) = view.empty {
        return vec![Line::from(Span::styled(
            format!("  {}", empty.message()),
            theme.muted_style(),
        ))];
    }

    let mut lines = Vec::with_capacity(view.rows.len() + 2);
    if view.scroll_up {
        lines.push(Line::from(Span::styled(SCROLL_UP_TEXT, theme.muted_style())));
    }
    lines.extend(
        view.rows
            .iter()
            .map(|row| row_line(row, view.settings_page, theme, width)),
    );
    if view.scroll_down {
        lines.push(Line::from(Span::styled(SCROLL_DOWN_TEXT, theme.muted_style())));
    }
    lines
}

fn footer_line(view: &ViewFrame, toast: Option<&Toast>, theme: &TuiTheme) -> Line<'static> {
    let mut spans = Vec::<Span<'static>>::new();
    for hint in &view.hints {
        if !spans.is_empty() {
            spans.push(Span::styled(HINT_SEPARATOR, theme.muted_style()));
        }
        spans.push(Span::styled(hint.key, theme.footer_key_style()));
        spans.push(Span::styled(format!(" {}", hint.action), theme.muted_style()));
    }
    if let Some(toast) = toast {
        let style = if toast.is_error {
            theme.error_style()
        } else {
            theme.toast_style()
        };
        spans.push(Span::styled(" | ", theme.muted_style()));
        spans.push(Span::styled(toast.message.clone(), style));
    }
    Line::from(spans)
}
