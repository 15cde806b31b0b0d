// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Navdeck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Navdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::env;
use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::model::{Configuration, FrequencyTable, Options};

pub const APP_DIR_NAME: &str = ".navdeck";
pub const HOME_ENV: &str = "NAVDECK_HOME";

const CONFIG_FILENAME: &str = "config.json";
const OPTIONS_FILENAME: &str = "options.json";
const FREQUENCY_FILENAME: &str = "goto_frequency.json";
const CMD_EXEC_FILENAME: &str = "cmd-exec";
const LOG_FILENAME: &str = "navdeck.log";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("io error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("json error at {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("cannot locate a home directory; set NAVDECK_HOME or pass --app-dir")]
    NoHome,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WriteDurability {
    /// Temp file plus atomic rename, no fsync.
    #[default]
    BestEffort,

    /// Also syncs the written file and, on unix, the containing directory.
    Durable,
}

/// The per-user folder holding configuration, options, visit counts and the shell hand-off file.
#[derive(Debug, Clone)]
pub struct AppFolder {
    root: PathBuf,
    durability: WriteDurability,
}

/// Picks the app folder: an explicit path wins, then `$NAVDECK_HOME`, then `<home>/.navdeck`.
pub fn resolve_root(
    explicit: Option<PathBuf>,
    env_home: Option<OsString>,
    user_home: Option<PathBuf>,
) -> Result<PathBuf, StoreError> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    if let Some(value) = env_home.filter(|value| !value.is_empty()) {
        return Ok(PathBuf::from(value));
    }
    user_home
        .map(|home| home.join(APP_DIR_NAME))
        .ok_or(StoreError::NoHome)
}

impl AppFolder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            durability: WriteDurability::default(),
        }
    }

    /// Resolves the folder from the environment, see [`resolve_root`].
    pub fn locate(explicit: Option<PathBuf>) -> Result<Self, StoreError> {
        let root = resolve_root(explicit, env::var_os(HOME_ENV), dirs::home_dir())?;
        Ok(Self::new(root))
    }

    pub fn with_durability(mut self, durability: WriteDurability) -> Self {
        self.durability = durability;
        self
    }

    pub fn durability(&self) -> WriteDurability {
        self.durability
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILENAME)
    }

    pub fn options_path(&self) -> PathBuf {
        self.root.join(OPTIONS_FILENAME)
    }

    pub fn frequency_path(&self) -> PathBuf {
        self.root.join(FREQUENCY_FILENAME)
    }

    pub fn cmd_exec_path(&self) -> PathBuf {
        self.root.join(CMD_EXEC_FILENAME)
    }

    pub fn log_path(&self) -> PathBuf {
        self.root.join(LOG_FILENAME)
    }

    pub fn ensure_root(&self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.root).map_err(|source| StoreError::Io {
            path: self.root.clone(),
            source,
        })
    }

    /// Loads the configuration, seeding the starter file when it is missing or blank.
    pub fn load_config(&self) -> Result<Configuration, StoreError> {
        self.load_or_seed(&self.config_path(), Configuration::starter)
    }

    pub fn save_config(&self, config: &Configuration) -> Result<(), StoreError> {
        self.save_json(&self.config_path(), config)
    }

    pub fn load_options(&self) -> Result<Options, StoreError> {
        self.load_or_seed(&self.options_path(), Options::default)
    }

    pub fn save_options(&self, options: &Options) -> Result<(), StoreError> {
        self.save_json(&self.options_path(), options)
    }

    pub fn load_frequency(&self) -> Result<FrequencyTable, StoreError> {
        self.load_or_seed(&self.frequency_path(), FrequencyTable::new)
    }

    pub fn save_frequency(&self, frequency: &FrequencyTable) -> Result<(), StoreError> {
        self.save_json(&self.frequency_path(), frequency)
    }

    /// Replaces the shell hand-off file with `command`.
    pub fn write_cmd_exec(&self, command: &str) -> Result<(), StoreError> {
        self.ensure_root()?;
        write_atomic(&self.cmd_exec_path(), command.as_bytes(), self.durability)
    }

    fn load_or_seed<T, F>(&self, path: &Path, seed: F) -> Result<T, StoreError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> T,
    {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(source) if source.kind() == io::ErrorKind::NotFound => String::new(),
            Err(source) => {
                return Err(StoreError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        if contents.trim().is_empty() {
            tracing::info!(path = %path.display(), "seeding default file");
            let value = seed();
            self.save_json(path, &value)?;
            return Ok(value);
        }

        serde_json::from_str(&contents).map_err(|source| StoreError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    fn save_json<T: Serialize>(&self, path: &Path, value: &T) -> Result<(), StoreError> {
        self.ensure_root()?;
        let json = serde_json::to_string_pretty(value).map_err(|source| StoreError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        write_atomic(path, format!("{json}\n").as_bytes(), self.durability)?;
        tracing::debug!(path = %path.display(), "saved");
        Ok(())
    }
}

fn rename_overwrite(from: &Path, to: &Path) -> io::Result<()> {
    #[cfg(windows)]
    {
        match fs::rename(from, to) {
            Ok(()) => Ok(()),
            Err(err)
                if matches!(
                    err.kind(),
                    io::ErrorKind::AlreadyExists | io::ErrorKind::PermissionDenied
                ) =>
            {
                let _ = fs::remove_file(to);
                fs::rename(from, to)
            }
            Err(err) => Err(err),
        }
    }

    #[cfg(not(windows))]
    {
        fs::rename(from, to)
    }
}

fn write_atomic(path: &Path, contents: &[u8], durability: WriteDurability) -> Result<(), StoreError> {
    let io_err = |path: &Path, source: io::Error| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };

    let (Some(parent), Some(file_name)) = (path.parent(), path.file_name()) else {
        return Err(io_err(path, io::Error::other("path has no parent or file name")));
    };

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let tmp_path = parent.join(format!(
        ".navdeck.tmp.{}.{}",
        file_name.to_string_lossy(),
        nanos
    ));

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&tmp_path)
        .map_err(|source| io_err(&tmp_path, source))?;
    file.write_all(contents)
        .map_err(|source| io_err(&tmp_path, source))?;
    if durability == WriteDurability::Durable {
        file.sync_all().map_err(|source| io_err(&tmp_path, source))?;
    }
    drop(file);

    if let Err(source) = rename_overwrite(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(io_err(path, source));
    }

    if durability == WriteDurability::Durable {
        #[cfg(unix)]
        {
            let dir = fs::File::open(parent).map_err(|source| io_err(parent, source))?;
            dir.sync_all().map_err(|source| io_err(parent, source))?;
        }
    }

    Ok(())
}
