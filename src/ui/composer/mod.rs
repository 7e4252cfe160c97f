// SPDX-License-Identifier: MPL-2.0
//! Poster composer: the form, the generation bookkeeping and the preview.
//!
//! This module follows a "state down, messages up" pattern. Widget messages
//! mutate the [`FormState`] directly; anything needing I/O (the generation
//! call, the save dialog) is handed to the application as an [`Event`].
//!
//! Generation results are applied in arrival order. There is no guard
//! against overlapping requests: whichever response resolves last is the
//! poster on screen.

mod messages;
mod poster;
mod view;

pub use messages::{Event, Message};
pub use poster::{PosterImage, POSTER_FILENAME};
pub use view::ViewContext;

use crate::domain::poster::{FormState, PosterRequest};
use crate::error::ServiceError;
use bytes::Bytes;
use iced::widget::text_editor;

/// Local UI state for the composer screen.
#[derive(Debug, Default)]
pub struct State {
    form: FormState,
    /// Editor buffer behind the description; its text mirrors `form`.
    desc_editor: text_editor::Content,
    /// Current generated poster; replacing it drops the previous one.
    poster: Option<PosterImage>,
    /// Generation calls sent but not answered yet.
    pending: usize,
    /// Serial of the last accepted poster.
    last_serial: u64,
}

impl State {
    #[must_use]
    pub fn new(form: FormState) -> Self {
        Self {
            desc_editor: text_editor::Content::with_text(form.app_desc()),
            form,
            ..Self::default()
        }
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::AppNameChanged(text) => {
                self.form.set_app_name(text);
                Event::None
            }
            Message::AppDescEdited(action) => {
                let is_edit = action.is_edit();
                self.desc_editor.perform(action);
                if is_edit {
                    self.form.set_app_desc(self.desc_editor.text());
                }
                Event::None
            }
            Message::FeatureChanged(index, text) => {
                self.form.update_feature(index, text);
                Event::None
            }
            Message::AddFeature => {
                self.form.add_feature();
                Event::None
            }
            Message::LanguageSelected(language) => {
                self.form.set_language(language);
                Event::LanguageChanged(language)
            }
            Message::PlatformSelected(platform) => {
                self.form.set_platform(platform);
                Event::None
            }
            Message::GenerateRequested => Event::Generate(self.begin_generation()),
            Message::DownloadRequested => {
                if self.poster.is_some() {
                    Event::Download
                } else {
                    Event::None
                }
            }
        }
    }

    /// Records an outgoing generation call and returns its payload.
    pub fn begin_generation(&mut self) -> PosterRequest {
        self.pending += 1;
        self.form.to_request()
    }

    /// Applies the outcome of one generation call.
    ///
    /// On success the new poster replaces the current one. On failure the
    /// current poster is kept and the error is handed back for display.
    ///
    /// # Errors
    ///
    /// Returns the service error, or [`ServiceError::MalformedResponse`]
    /// if the body is not an image.
    pub fn finish_generation(
        &mut self,
        result: Result<Bytes, ServiceError>,
    ) -> Result<(), ServiceError> {
        self.pending = self.pending.saturating_sub(1);

        let serial = self.last_serial + 1;
        let poster = PosterImage::from_bytes(serial, result?)?;
        self.last_serial = serial;
        self.replace_poster(poster);
        Ok(())
    }

    fn replace_poster(&mut self, poster: PosterImage) {
        if let Some(previous) = self.poster.replace(poster) {
            tracing::debug!(
                previous = previous.serial(),
                current = self.last_serial,
                "replacing poster"
            );
        }
    }

    #[must_use]
    pub fn form(&self) -> &FormState {
        &self.form
    }

    #[must_use]
    pub fn desc_editor(&self) -> &text_editor::Content {
        &self.desc_editor
    }

    #[must_use]
    pub fn poster(&self) -> Option<&PosterImage> {
        self.poster.as_ref()
    }

    /// Bytes to write when the user downloads the poster.
    #[must_use]
    pub fn poster_bytes(&self) -> Option<Bytes> {
        self.poster.as_ref().map(PosterImage::bytes)
    }

    #[must_use]
    pub fn is_generating(&self) -> bool {
        self.pending > 0
    }

    #[must_use]
    pub fn pending_generations(&self) -> usize {
        self.pending
    }
}
