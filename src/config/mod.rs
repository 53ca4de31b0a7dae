// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Application configuration.
//!
//! This module manages the application configuration file: error messages,
//! audio cue clips, the colour theme and the log level. A missing or broken
//! file falls back to the defaults.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "calcui";

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    pub log_level: String,
    pub messages: ErrorMessages,
    pub sounds: SoundConfig,
    pub theme: ThemeConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            log_level: "warn".to_string(),
            messages: ErrorMessages::default(),
            sounds: SoundConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

/// Text shown on the display when the calculator enters its error state.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ErrorMessages {
    pub divide_by_zero: String,
    pub overflow: String,
    pub generic: String,
}

impl Default for ErrorMessages {
    fn default() -> Self {
        Self {
            divide_by_zero: "Cannot divide by zero".to_string(),
            overflow: "Overflow".to_string(),
            generic: "Error".to_string(),
        }
    }
}

/// Audio clips for the display cues, unset clips stay silent.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SoundConfig {
    pub sixty_seven: Option<String>,
    pub eighteen_eighty_nine: Option<String>,
}

/// Colour overrides as `#rrggbb` strings, see [`crate::theme::Theme`].
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ThemeConfig {
    pub background: Option<String>,
    pub display: Option<String>,
    pub history: Option<String>,
    pub error: Option<String>,
    pub digit: Option<String>,
    pub operator: Option<String>,
    pub function: Option<String>,
    pub pressed: Option<String>,
}

/// Loads the configuration file, writing one with defaults if none exists.
pub fn load_config() -> Result<AppConfig, confy::ConfyError> {
    confy::load(CONFIG_NAME, None)
}

/// Location of the configuration file, if the platform has a config directory.
pub fn config_path() -> Option<PathBuf> {
    confy::get_configuration_file_path(CONFIG_NAME, None).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.version, 1);
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.messages.divide_by_zero, "Cannot divide by zero");
        assert_eq!(config.sounds, SoundConfig::default());
        assert!(config.theme.background.is_none());
    }
}
