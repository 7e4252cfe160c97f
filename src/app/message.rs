// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::poster::{Platform, PosterLanguage};
use crate::error::{Error, ServiceError};
use crate::ui::composer;
use crate::ui::notifications;
use bytes::Bytes;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Composer(composer::Message),
    Notification(notifications::NotificationMessage),
    /// Outcome of one generation call, in arrival order.
    PosterGenerated(Result<Bytes, ServiceError>),
    /// The save dialog closed. `bytes` are the poster shown when the
    /// download was requested.
    SaveDialogResult {
        path: Option<PathBuf>,
        bytes: Bytes,
    },
    PosterSaved(Result<PathBuf, Error>),
    Tick(Instant), // Periodic tick for toast auto-dismiss
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Poster language preselected in the form. Also picks the UI locale.
    pub lang: Option<PosterLanguage>,
    /// Target platform preselected in the form.
    pub platform: Option<Platform>,
    /// Poster service URL, overriding `[service] endpoint`.
    pub endpoint: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `POSTERLY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
