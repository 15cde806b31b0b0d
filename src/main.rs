// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Navdeck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Navdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Navdeck CLI entrypoint.
//!
//! Runs one navigation session in the terminal, then acts on the selection: goto targets are
//! written to `cmd-exec` as a `cd` line for a shell wrapper to source, notes and commands are
//! copied to the clipboard.

use std::error::Error;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use navdeck::actions::{self, SystemClipboard};
use navdeck::nav::{NavigationState, SessionError, SessionOutcome};
use navdeck::store::{AppFolder, WriteDurability};
use navdeck::tui::{self, TuiTheme};

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--app-dir <dir>] [--durable-writes] [--print]\n\nThe app folder defaults to $NAVDECK_HOME, then ~/.navdeck.\n--print writes the selection as `page|label|detail` (or EXIT_SIGNAL) to stdout instead of acting on it.\n--durable-writes opts into slower, best-effort durable persistence (fsync/sync where supported).\n\nNAVDECK_LOG sets the log filter (default: warn); NAVDECK_PALETTE overrides the 18-color palette."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    app_dir: Option<String>,
    durable_writes: bool,
    print: bool,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--app-dir" => {
                if options.app_dir.is_some() {
                    return Err(());
                }
                let dir = args.next().ok_or(())?;
                options.app_dir = Some(dir);
            }
            "--durable-writes" => {
                if options.durable_writes {
                    return Err(());
                }
                options.durable_writes = true;
            }
            "--print" => {
                if options.print {
                    return Err(());
                }
                options.print = true;
            }
            _ => return Err(()),
        }
    }

    Ok(options)
}

fn print_empty_notice(folder: &AppFolder) {
    println!("\n⚠ All pages are empty!");
    println!("\nPlease edit your config file:");
    println!("  {}\n", folder.config_path().display());
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "navdeck".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let folder = AppFolder::locate(options.app_dir.map(PathBuf::from))?;
        let folder = if options.durable_writes {
            folder.with_durability(WriteDurability::Durable)
        } else {
            folder
        };
        navdeck::logging::init(&folder.log_path())?;
        tracing::info!(root = %folder.root().display(), "starting");

        let theme = TuiTheme::from_env()?;
        let mut data = folder.load_user_data()?;
        let state = match NavigationState::new(&data.config, data.options, &data.frequency) {
            Ok(state) => state,
            Err(SessionError::NoEntries) => {
                tracing::warn!("all sections empty");
                print_empty_notice(&folder);
                return Ok(());
            }
        };

        let outcome = tui::run(state, theme, |effect| data.apply(effect, &folder))?;
        tracing::info!(outcome = %outcome.summary(), "session finished");

        let mut stdout = io::stdout();
        if options.print {
            writeln!(stdout, "{}", outcome.wire())?;
            return Ok(());
        }

        let SessionOutcome::Selected(selection) = outcome else {
            return Ok(());
        };
        let home = dirs::home_dir();
        if let Some(action) = actions::plan(&selection, home.as_deref()) {
            let mut clipboard = SystemClipboard::new();
            let terminal = if stdout.is_terminal() {
                Some(&mut stdout as &mut dyn Write)
            } else {
                None
            };
            if let Some(message) = actions::perform(&action, &folder, &mut clipboard, terminal)? {
                writeln!(stdout, "\n{message}")?;
            }
        }

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("navdeck: {err}");
        std::process::exit(1);
    }
}
