// SPDX-License-Identifier: MPL-2.0
//! Light/dark theme selection.

use iced::Theme;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Resolves `System` against the desktop preference, defaulting to light.
    #[must_use]
    pub fn resolve(self) -> ThemeMode {
        match self {
            ThemeMode::System => match dark_light::detect() {
                Ok(dark_light::Mode::Dark) => ThemeMode::Dark,
                _ => ThemeMode::Light,
            },
            other => other,
        }
    }

    #[must_use]
    pub fn iced_theme(self) -> Theme {
        match self.resolve() {
            ThemeMode::Dark => Theme::Dark,
            _ => Theme::Light,
        }
    }
}
