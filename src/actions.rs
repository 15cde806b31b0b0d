// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Navdeck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Navdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! What happens after a selection, once the terminal is restored.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::model::SectionKind;
use crate::nav::{Page, Selection};
use crate::store::{AppFolder, StoreError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ChangeDirectory(PathBuf),
    CopyNote(String),
    CopyCommand(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("clipboard unavailable: {0}")]
    Clipboard(#[source] arboard::Error),
    #[error("clipboard unavailable ({clipboard}) and terminal copy failed: {source}")]
    TerminalCopy {
        clipboard: arboard::Error,
        #[source]
        source: io::Error,
    },
}

/// Where copied text ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyRoute {
    /// The desktop clipboard.
    System,
    /// An OSC 52 request to the terminal, which may ignore it.
    Terminal,
}

/// Clipboard seam so copies can be exercised without a desktop session.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), arboard::Error>;
}

/// Desktop clipboard backed by arboard, opened on first use.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), arboard::Error> {
        if self.inner.is_none() {
            self.inner = Some(arboard::Clipboard::new()?);
        }
        match self.inner.as_mut() {
            Some(clipboard) => clipboard.set_text(text.to_owned()),
            None => Err(arboard::Error::ClipboardNotSupported),
        }
    }
}

/// Expands a leading `~` against `home`. Paths without one, or with no known home, pass through.
pub fn expand_home(path: &str, home: Option<&Path>) -> PathBuf {
    match (path, home) {
        ("~", Some(home)) => home.to_path_buf(),
        (path, Some(home)) if path.starts_with("~/") => home.join(&path[2..]),
        (path, _) => PathBuf::from(path),
    }
}

/// Single-quotes `path` for a POSIX shell unless every character is plainly safe.
fn shell_quote(path: &str) -> String {
    let safe = !path.is_empty()
        && path.chars().all(|ch| {
            ch.is_ascii_alphanumeric() || matches!(ch, '/' | '.' | '_' | '-' | '+' | ',' | ':' | '@')
        });
    if safe {
        path.to_owned()
    } else {
        format!("'{}'", path.replace('\'', r"'\''"))
    }
}

pub fn cd_command(path: &Path) -> String {
    format!("cd {}", shell_quote(&path.to_string_lossy()))
}

pub fn osc52_sequence(text: &str) -> String {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;

    let encoded = STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{encoded}\x1b\\")
}

pub fn send_osc52(out: &mut dyn Write, text: &str) -> io::Result<()> {
    out.write_all(osc52_sequence(text).as_bytes())?;
    out.flush()
}

/// Copies `text` to the desktop clipboard, falling back to OSC 52 on `terminal` when there is
/// none (SSH sessions, headless hosts).
///
/// Pass no terminal when stdout is not one: the escape sequence would land in a pipe.
pub fn copy_text(
    clipboard: &mut dyn Clipboard,
    terminal: Option<&mut dyn Write>,
    text: &str,
) -> Result<CopyRoute, ActionError> {
    let err = match clipboard.set_text(text) {
        Ok(()) => return Ok(CopyRoute::System),
        Err(err) => err,
    };
    let Some(out) = terminal else {
        return Err(ActionError::Clipboard(err));
    };
    tracing::warn!(%err, "system clipboard unavailable, falling back to OSC 52");
    match send_osc52(out, text) {
        Ok(()) => Ok(CopyRoute::Terminal),
        Err(source) => Err(ActionError::TerminalCopy {
            clipboard: err,
            source,
        }),
    }
}

/// Maps a selection to its action. Settings never leave the session, so they map to nothing.
pub fn plan(selection: &Selection, home: Option<&Path>) -> Option<Action> {
    match selection.page() {
        Page::Frequent | Page::Section(SectionKind::GoTo) => Some(Action::ChangeDirectory(
            expand_home(selection.detail(), home),
        )),
        Page::Section(SectionKind::Notes) => Some(Action::CopyNote(selection.detail().to_owned())),
        Page::Section(SectionKind::Commands) => {
            Some(Action::CopyCommand(selection.detail().to_owned()))
        }
        Page::Settings => None,
    }
}

/// Runs `action` and returns the confirmation line to print, if any.
pub fn perform(
    action: &Action,
    folder: &AppFolder,
    clipboard: &mut dyn Clipboard,
    terminal: Option<&mut dyn Write>,
) -> Result<Option<String>, ActionError> {
    match action {
        Action::ChangeDirectory(path) => {
            let command = cd_command(path);
            folder.write_cmd_exec(&command)?;
            tracing::info!(%command, "wrote cmd-exec");
            Ok(None)
        }
        Action::CopyNote(text) => {
            let route = copy_text(clipboard, terminal, text)?;
            tracing::info!(?route, "copied note");
            Ok(Some(match route {
                CopyRoute::System => format!("✓ Copied to clipboard: {text}"),
                CopyRoute::Terminal => {
                    format!("✓ Sent to the terminal clipboard (OSC 52): {text}")
                }
            }))
        }
        Action::CopyCommand(text) => {
            let route = copy_text(clipboard, terminal, text)?;
            tracing::info!(?route, "copied command");
            Ok(Some(match route {
                CopyRoute::System => {
                    format!("⚠ Commands are not executed; copied to clipboard instead: {text}")
                }
                CopyRoute::Terminal => format!(
                    "⚠ Commands are not executed; sent to the terminal clipboard (OSC 52) instead: {text}"
                ),
            }))
        }
    }
}
