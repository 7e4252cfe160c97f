// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Composer events become tasks here (generation call, save dialog, file
//! write) and task results are folded back into state. Every failure ends
//! as a toast; nothing propagates further.

use super::{notifications, Message};
use crate::domain::poster::PosterRequest;
use crate::error::{Error, ServiceError};
use crate::i18n::fluent::I18n;
use crate::infrastructure::PosterService;
use crate::ui::composer::{self, Event as ComposerEvent, POSTER_FILENAME};
use bytes::Bytes;
use iced::Task;
use std::path::PathBuf;

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub composer: &'a mut composer::State,
    pub service: &'a Result<PosterService, ServiceError>,
    pub notifications: &'a mut notifications::Manager,
}

pub fn handle_composer_message(
    ctx: &mut UpdateContext<'_>,
    message: composer::Message,
) -> Task<Message> {
    match ctx.composer.update(message) {
        ComposerEvent::None => Task::none(),
        ComposerEvent::LanguageChanged(language) => {
            ctx.i18n.set_language(language);
            Task::none()
        }
        ComposerEvent::Generate(request) => handle_generate(ctx, request),
        ComposerEvent::Download => handle_download(ctx),
    }
}

fn handle_generate(ctx: &mut UpdateContext<'_>, request: PosterRequest) -> Task<Message> {
    match ctx.service.clone() {
        Ok(service) => Task::perform(
            async move { service.generate(&request).await },
            Message::PosterGenerated,
        ),
        // The client could not be built at startup; fail this attempt the
        // same way a network error would.
        Err(err) => handle_poster_generated(ctx, Err(err)),
    }
}

pub fn handle_poster_generated(
    ctx: &mut UpdateContext<'_>,
    result: Result<Bytes, ServiceError>,
) -> Task<Message> {
    if let Err(err) = ctx.composer.finish_generation(result) {
        tracing::warn!(%err, "poster generation failed");
        let reason = localized_reason(ctx.i18n, &err);
        ctx.notifications.push(
            notifications::Notification::error("notification-generate-error")
                .with_arg("reason", reason),
        );
    }
    Task::none()
}

/// Renders the cause of a failed generation in the current locale.
fn localized_reason(i18n: &I18n, err: &ServiceError) -> String {
    let args = err.i18n_args();
    let args: Vec<(&str, &str)> = args
        .iter()
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .collect();
    i18n.tr_with_args(err.i18n_key(), &args)
}

/// Dialog title and payload for a download, or `None` while no poster is shown.
fn save_request(ctx: &UpdateContext<'_>) -> Option<(String, Bytes)> {
    let bytes = ctx.composer.poster_bytes()?;
    Some((ctx.i18n.tr("save-dialog-title"), bytes))
}

fn handle_download(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some((title, bytes)) = save_request(ctx) else {
        return Task::none();
    };

    Task::perform(
        async move {
            let path = rfd::AsyncFileDialog::new()
                .set_title(title)
                .set_file_name(POSTER_FILENAME)
                .save_file()
                .await
                .map(|handle| handle.path().to_path_buf());
            (path, bytes)
        },
        |(path, bytes)| Message::SaveDialogResult { path, bytes },
    )
}

pub fn handle_save_dialog_result(path: Option<PathBuf>, bytes: Bytes) -> Task<Message> {
    let Some(path) = path else {
        // User cancelled the dialog
        return Task::none();
    };

    Task::perform(write_poster(path, bytes), Message::PosterSaved)
}

async fn write_poster(path: PathBuf, bytes: Bytes) -> Result<PathBuf, Error> {
    tokio::fs::write(&path, &bytes).await?;
    Ok(path)
}

pub fn handle_poster_saved(
    ctx: &mut UpdateContext<'_>,
    result: Result<PathBuf, Error>,
) -> Task<Message> {
    match result {
        Ok(path) => {
            tracing::info!(path = %path.display(), "poster saved");
            ctx.notifications
                .push(notifications::Notification::success("notification-poster-saved"));
        }
        Err(err) => {
            tracing::warn!(%err, "failed to save poster");
            ctx.notifications.push(
                notifications::Notification::error("notification-poster-save-error")
                    .with_arg("detail", err.to_string()),
            );
        }
    }
    Task::none()
}
