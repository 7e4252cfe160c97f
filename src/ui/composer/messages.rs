// SPDX-License-Identifier: MPL-2.0
use crate::domain::poster::{Platform, PosterLanguage, PosterRequest};
use iced::widget::text_editor;

/// Messages emitted by the composer widgets.
#[derive(Debug, Clone)]
pub enum Message {
    AppNameChanged(String),
    /// Cursor movement or edit inside the multi-line description.
    AppDescEdited(text_editor::Action),
    FeatureChanged(usize, String),
    AddFeature,
    LanguageSelected(PosterLanguage),
    PlatformSelected(Platform),
    GenerateRequested,
    DownloadRequested,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// The interface locale must follow the new poster language.
    LanguageChanged(PosterLanguage),
    /// Send this payload to the poster service.
    Generate(PosterRequest),
    /// Offer the current poster for saving.
    Download,
}
