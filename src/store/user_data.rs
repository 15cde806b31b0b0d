// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Navdeck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Navdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{Configuration, FrequencyTable, Options};
use crate::nav::Effect;

use super::{AppFolder, StoreError};

/// Everything loaded from the app folder for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserData {
    pub config: Configuration,
    pub options: Options,
    pub frequency: FrequencyTable,
}

impl AppFolder {
    pub fn load_user_data(&self) -> Result<UserData, StoreError> {
        Ok(UserData {
            config: self.load_config()?,
            options: self.load_options()?,
            frequency: self.load_frequency()?,
        })
    }
}

impl UserData {
    /// Applies `effect` in memory and writes the touched file back.
    pub fn apply(&mut self, effect: &Effect, folder: &AppFolder) -> Result<(), StoreError> {
        match effect {
            Effect::SetFrequentGoto(enabled) => {
                self.options.frequent_goto_enabled = *enabled;
                folder.save_options(&self.options)
            }
            Effect::ClearFrequency => {
                self.frequency.clear();
                folder.save_frequency(&self.frequency)
            }
            Effect::RecordVisit(key) => {
                self.frequency.increment(key);
                folder.save_frequency(&self.frequency)
            }
        }
    }
}
