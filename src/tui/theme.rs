// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Navdeck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Navdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::env;

use ratatui::style::{Color, Modifier, Style};

pub const PALETTE_ENV: &str = "NAVDECK_PALETTE";

/// Colors for every frame role. Handed to the renderer explicitly; there is no process-wide theme.
#[derive(Debug, Clone, Default)]
pub struct TuiTheme {
    palette: Option<TuiPalette>,
}

impl TuiTheme {
    pub fn from_env() -> Result<Self, ThemeError> {
        let palette = palette_override_from_env()?;
        Ok(Self { palette })
    }

    pub(crate) fn base_style(&self) -> Style {
        match &self.palette {
            Some(palette) => Style::default().fg(palette.fg).bg(palette.bg),
            None => Style::default(),
        }
    }

    fn ansi_color(&self, color: Ansi16) -> Color {
        match &self.palette {
            Some(palette) => palette.ansi_color(color),
            None => color.into(),
        }
    }

    pub(crate) fn tab_style(&self, active: bool) -> Style {
        if active {
            self.base_style()
                .fg(self.ansi_color(Ansi16::BrightMagenta))
                .add_modifier(Modifier::BOLD)
        } else {
            self.muted_style()
        }
    }

    pub(crate) fn search_box_style(&self) -> Style {
        self.base_style().fg(self.ansi_color(Ansi16::BrightCyan))
    }

    pub(crate) fn label_style(&self, settings: bool, cursor: bool) -> Style {
        let color = match (settings, cursor) {
            (false, true) => Ansi16::BrightMagenta,
            (true, true) => Ansi16::BrightYellow,
            (true, false) => Ansi16::Yellow,
            (false, false) => Ansi16::White,
        };
        self.base_style()
            .fg(self.ansi_color(color))
            .add_modifier(Modifier::BOLD)
    }

    pub(crate) fn detail_style(&self, settings: bool) -> Style {
        let color = if settings {
            Ansi16::Cyan
        } else {
            Ansi16::BrightBlack
        };
        self.base_style()
            .fg(self.ansi_color(color))
            .add_modifier(Modifier::ITALIC)
    }

    pub(crate) fn cursor_marker_style(&self, settings: bool) -> Style {
        self.label_style(settings, true)
    }

    pub(crate) fn divider_style(&self) -> Style {
        self.base_style()
            .fg(self.ansi_color(Ansi16::Blue))
            .add_modifier(Modifier::ITALIC)
    }

    pub(crate) fn match_style(&self) -> Style {
        self.base_style()
            .fg(self.ansi_color(Ansi16::Black))
            .bg(self.ansi_color(Ansi16::Yellow))
            .add_modifier(Modifier::BOLD)
    }

    pub(crate) fn muted_style(&self) -> Style {
        self.base_style().fg(self.ansi_color(Ansi16::BrightBlack))
    }

    pub(crate) fn footer_key_style(&self) -> Style {
        self.base_style().fg(self.ansi_color(Ansi16::Cyan))
    }

    pub(crate) fn toast_style(&self) -> Style {
        self.base_style().fg(self.ansi_color(Ansi16::Green))
    }

    pub(crate) fn error_style(&self) -> Style {
        self.base_style().fg(self.ansi_color(Ansi16::Red))
    }
}

#[derive(Debug, Clone, PartialEq)]
struct TuiPalette {
    fg: Color,
    bg: Color,
    ansi: [Color; 16],
}

impl TuiPalette {
    const FIELDS: [&'static str; 18] = [
        "fg",
        "bg",
        "black",
        "red",
        "green",
        "yellow",
        "blue",
        "magenta",
        "cyan",
        "white",
        "bright_black",
        "bright_red",
        "bright_green",
        "bright_yellow",
        "bright_blue",
        "bright_magenta",
        "bright_cyan",
        "bright_white",
    ];

    fn parse_csv(value: &str) -> Result<Self, String> {
        let parts: Vec<&str> = value.split(',').map(str::trim).collect();
        if parts.len() != Self::FIELDS.len() {
            return Err(format!(
                "expected {} comma-separated colors ({}), got {}",
                Self::FIELDS.len(),
                Self::FIELDS.join(","),
                parts.len()
            ));
        }

        let mut colors = [Color::Reset; 18];
        for ((slot, part), field) in colors.iter_mut().zip(&parts).zip(Self::FIELDS) {
            *slot = parse_palette_color(part).map_err(|error| format!("{field}: {error}"))?;
        }
        let mut ansi = [Color::Reset; 16];
        ansi.copy_from_slice(&colors[2..]);

        Ok(Self {
            fg: colors[0],
            bg: colors[1],
            ansi,
        })
    }

    fn ansi_color(&self, color: Ansi16) -> Color {
        self.ansi[color as usize]
    }
}

fn palette_override_from_env() -> Result<Option<TuiPalette>, ThemeError> {
    match env::var(PALETTE_ENV) {
        Ok(value) => parse_palette_override(&value),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(ThemeError::InvalidEnv {
            name: PALETTE_ENV.to_string(),
            value: "<non-unicode>".to_string(),
        }),
    }
}

fn parse_palette_override(value: &str) -> Result<Option<TuiPalette>, ThemeError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    TuiPalette::parse_csv(trimmed)
        .map(Some)
        .map_err(|error| ThemeError::InvalidEnv {
            name: PALETTE_ENV.to_string(),
            value: format!("{trimmed} ({error})"),
        })
}

/// Accepts `#RRGGBB`, `0xRRGGBB`, or the xterm form `rgb:RR/GG/BB` (2 or 4 hex digits per channel).
fn parse_palette_color(value: &str) -> Result<Color, String> {
    let value = value.trim();
    if value.is_empty() {
        return Err("empty color".to_string());
    }

    if value
        .get(..4)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("rgb:"))
    {
        let channels = value[4..]
            .split('/')
            .map(parse_hex_channel)
            .collect::<Result<Vec<_>, _>>()?;
        return match channels.as_slice() {
            [r, g, b] => Ok(Color::Rgb(*r, *g, *b)),
            _ => Err(format!("invalid rgb: value: {value}")),
        };
    }

    let hex = value
        .strip_prefix('#')
        .or_else(|| value.strip_prefix("0x"))
        .unwrap_or(value);
    if hex.len() != 6 || !hex.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        return Err(format!("invalid hex color: {value} (expected #RRGGBB)"));
    }
    let channel = |at: usize| u8::from_str_radix(&hex[at..at + 2], 16);
    match (channel(0), channel(2), channel(4)) {
        (Ok(r), Ok(g), Ok(b)) => Ok(Color::Rgb(r, g, b)),
        _ => Err(format!("invalid hex color: {value}")),
    }
}

fn parse_hex_channel(value: &str) -> Result<u8, String> {
    let value = value.trim();
    let invalid = || format!("invalid rgb: component {value} (expected 2 or 4 hex digits)");
    let parsed = u16::from_str_radix(value, 16).map_err(|_| invalid())?;
    match value.len() {
        2 => Ok(parsed as u8),
        4 => Ok((parsed >> 8) as u8),
        _ => Err(invalid()),
    }
}

/// The 16 ANSI slots, in palette order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
enum Ansi16 {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl From<Ansi16> for Color {
    fn from(value: Ansi16) -> Self {
        match value {
            Ansi16::Black => Color::Black,
            Ansi16::Red => Color::Red,
            Ansi16::Green => Color::Green,
            Ansi16::Yellow => Color::Yellow,
            Ansi16::Blue => Color::Blue,
            Ansi16::Magenta => Color::Magenta,
            Ansi16::Cyan => Color::Cyan,
            Ansi16::White => Color::Gray,
            Ansi16::BrightBlack => Color::DarkGray,
            Ansi16::BrightRed => Color::LightRed,
            Ansi16::BrightGreen => Color::LightGreen,
            Ansi16::BrightYellow => Color::LightYellow,
            Ansi16::BrightBlue => Color::LightBlue,
            Ansi16::BrightMagenta => Color::LightMagenta,
            Ansi16::BrightCyan => Color::LightCyan,
            Ansi16::BrightWhite => Color::White,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ThemeError {
    #[error("invalid env {name}={value}")]
    InvalidEnv { name: String, value: String },
}
