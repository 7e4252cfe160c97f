// SPDX-License-Identifier: MPL-2.0
//! Form state edited by the composer.
//!
//! `FormState` owns every user-entered field. All mutations are plain
//! synchronous setters; the only derived value is the request payload built
//! by [`FormState::to_request`].

use super::request::PosterRequest;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of empty feature slots a fresh form starts with.
pub const INITIAL_FEATURE_SLOTS: usize = 2;

/// Language the poster is generated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PosterLanguage {
    #[default]
    #[serde(rename = "ar")]
    Arabic,
    #[serde(rename = "id")]
    Indonesian,
}

impl PosterLanguage {
    pub const ALL: [PosterLanguage; 2] = [PosterLanguage::Arabic, PosterLanguage::Indonesian];

    /// Wire code sent to the poster service.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            PosterLanguage::Arabic => "ar",
            PosterLanguage::Indonesian => "id",
        }
    }

    /// Layout direction used while this language is selected.
    #[must_use]
    pub fn direction(self) -> Direction {
        match self {
            PosterLanguage::Arabic => Direction::RightToLeft,
            PosterLanguage::Indonesian => Direction::LeftToRight,
        }
    }
}

impl fmt::Display for PosterLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for PosterLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ar" => Ok(PosterLanguage::Arabic),
            "id" => Ok(PosterLanguage::Indonesian),
            other => Err(format!("unknown poster language: {other}")),
        }
    }
}

/// Social platform the poster is sized and styled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Instagram,
    Facebook,
    #[serde(rename = "tiktok")]
    TikTok,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Instagram, Platform::Facebook, Platform::TikTok];

    /// Wire code sent to the poster service.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
            Platform::Facebook => "facebook",
            Platform::TikTok => "tiktok",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "instagram" => Ok(Platform::Instagram),
            "facebook" => Ok(Platform::Facebook),
            "tiktok" => Ok(Platform::TikTok),
            other => Err(format!("unknown platform: {other}")),
        }
    }
}

/// Horizontal reading direction of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    LeftToRight,
    RightToLeft,
}

impl Direction {
    #[must_use]
    pub fn is_rtl(self) -> bool {
        self == Direction::RightToLeft
    }
}

/// Every field the user can edit before generating a poster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    app_name: String,
    app_desc: String,
    features: Vec<String>,
    language: PosterLanguage,
    platform: Platform,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            app_name: String::new(),
            app_desc: String::new(),
            features: vec![String::new(); INITIAL_FEATURE_SLOTS],
            language: PosterLanguage::default(),
            platform: Platform::default(),
        }
    }
}

impl FormState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh form with the given language and platform preselected.
    #[must_use]
    pub fn with_choices(language: PosterLanguage, platform: Platform) -> Self {
        Self {
            language,
            platform,
            ..Self::default()
        }
    }

    pub fn set_app_name(&mut self, text: impl Into<String>) {
        self.app_name = text.into();
    }

    pub fn set_app_desc(&mut self, text: impl Into<String>) {
        self.app_desc = text.into();
    }

    /// Appends an empty feature slot.
    pub fn add_feature(&mut self) {
        self.features.push(String::new());
    }

    /// Replaces the feature at `index`.
    ///
    /// Returns `false` and leaves the list untouched when `index` is out of
    /// range.
    pub fn update_feature(&mut self, index: usize, text: impl Into<String>) -> bool {
        match self.features.get_mut(index) {
            Some(slot) => {
                *slot = text.into();
                true
            }
            None => false,
        }
    }

    pub fn set_language(&mut self, language: PosterLanguage) {
        self.language = language;
    }

    pub fn set_platform(&mut self, platform: Platform) {
        self.platform = platform;
    }

    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    #[must_use]
    pub fn app_desc(&self) -> &str {
        &self.app_desc
    }

    #[must_use]
    pub fn features(&self) -> &[String] {
        &self.features
    }

    #[must_use]
    pub fn language(&self) -> PosterLanguage {
        self.language
    }

    #[must_use]
    pub fn platform(&self) -> Platform {
        self.platform
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.language.direction()
    }

    /// Builds the payload for the generation call.
    ///
    /// Blank and whitespace-only features are dropped; everything else is
    /// sent verbatim.
    #[must_use]
    pub fn to_request(&self) -> PosterRequest {
        PosterRequest {
            app_name: self.app_name.clone(),
            app_desc: self.app_desc.clone(),
            features: self
                .features
                .iter()
                .filter(|feature| !feature.trim().is_empty())
                .cloned()
                .collect(),
            language: self.language,
            platform: self.platform,
        }
    }
}
