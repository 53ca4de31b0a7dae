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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the calculator's colour palette. The built-in palette
//! can be overridden entry by entry from the `[theme]` section of the
//! configuration file, which plays the part of an external stylesheet.

use ratatui::style::Color;
use tracing::warn;

use crate::config::ThemeConfig;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) display_fg: Color,
    pub(crate) history_fg: Color,
    pub(crate) error_fg: Color,
    pub(crate) digit_bg: Color,
    pub(crate) operator_bg: Color,
    pub(crate) function_bg: Color,
    pub(crate) pressed_bg: Color,
    pub(crate) button_fg: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(40, 20, 50),
            display_fg: Color::Rgb(255, 255, 255),
            history_fg: Color::Rgb(162, 161, 166),
            error_fg: Color::Rgb(255, 99, 71),
            digit_bg: Color::Rgb(70, 50, 85),
            operator_bg: Color::Rgb(250, 189, 47),
            function_bg: Color::Rgb(102, 102, 102),
            pressed_bg: Color::Rgb(179, 157, 219),
            button_fg: Color::Rgb(255, 255, 255),
        }
    }

    /// Builds a theme from the configured overrides.
    ///
    /// Entries that are missing keep their default colour, and entries that
    /// are not valid `#rrggbb` strings are logged and ignored.
    pub(crate) fn from_config(config: &ThemeConfig) -> Self {
        let mut theme = Self::default_theme();

        let overrides = [
            ("background", &config.background, &mut theme.background_colour),
            ("display", &config.display, &mut theme.display_fg),
            ("history", &config.history, &mut theme.history_fg),
            ("error", &config.error, &mut theme.error_fg),
            ("digit", &config.digit, &mut theme.digit_bg),
            ("operator", &config.operator, &mut theme.operator_bg),
            ("function", &config.function, &mut theme.function_bg),
            ("pressed", &config.pressed, &mut theme.pressed_bg),
        ];

        for (name, value, slot) in overrides {
            if let Some(hex) = value {
                match Self::from_hex(hex) {
                    Some(colour) => *slot = colour,
                    None => warn!("ignoring invalid theme colour {name} = {hex:?}"),
                }
            }
        }

        theme
    }

    /// Parses a CSS-style `#rrggbb` string into a [`Color::Rgb`].
    pub(crate) fn from_hex(hex: &str) -> Option<Color> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }

        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}
