// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Navdeck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Navdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Persistence for the app folder on disk.
//!
//! Everything navdeck keeps between runs lives in one folder: the JSON configuration, the
//! options file, the goto visit counts, the `cmd-exec` file a shell wrapper sources after a goto
//! selection, and the log file.

pub mod app_folder;
mod user_data;

pub use app_folder::{resolve_root, AppFolder, StoreError, WriteDurability, APP_DIR_NAME, HOME_ENV};
pub use user_data::UserData;
