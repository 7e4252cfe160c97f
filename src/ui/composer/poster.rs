// SPDX-License-Identifier: MPL-2.0
//! The generated poster held by the composer.
//!
//! A `PosterImage` owns the bytes returned by the service and the Iced image
//! handle built from them. It is never cloned: the composer keeps at most
//! one, and replacing or dropping it releases both.

use crate::error::ServiceError;
use bytes::Bytes;
use iced::widget::image::Handle;
use image_rs::{ImageFormat, ImageReader};
use std::io::Cursor;

/// File name offered by the download action.
pub const POSTER_FILENAME: &str = "posterly-poster.jpg";

pub struct PosterImage {
    /// Increments with every successful generation; used in logs.
    serial: u64,
    bytes: Bytes,
    handle: Handle,
    format: ImageFormat,
    width: u32,
    height: u32,
}

impl PosterImage {
    /// Wraps the body of a successful generation call.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::MalformedResponse`] when the bytes are not a
    /// recognizable image.
    pub fn from_bytes(serial: u64, bytes: Bytes) -> Result<Self, ServiceError> {
        if bytes.is_empty() {
            return Err(ServiceError::MalformedResponse(
                "empty response body".to_string(),
            ));
        }

        let reader = ImageReader::new(Cursor::new(&bytes[..]))
            .with_guessed_format()
            .map_err(|e| ServiceError::MalformedResponse(e.to_string()))?;
        let format = reader.format().ok_or_else(|| {
            ServiceError::MalformedResponse("response is not an image".to_string())
        })?;
        let (width, height) = reader
            .into_dimensions()
            .map_err(|e| ServiceError::MalformedResponse(e.to_string()))?;

        // The handle shares the buffer; no second copy is made.
        let handle = Handle::from_bytes(bytes.clone());

        tracing::debug!(serial, ?format, width, height, "poster acquired");

        Ok(Self {
            serial,
            bytes,
            handle,
            format,
            width,
            height,
        })
    }

    #[must_use]
    pub fn serial(&self) -> u64 {
        self.serial
    }

    /// Exact bytes received from the service, shared for the save task.
    #[must_use]
    pub fn bytes(&self) -> Bytes {
        self.bytes.clone()
    }

    #[must_use]
    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    #[must_use]
    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// Short uppercase format name, e.g. `JPEG`.
    #[must_use]
    pub fn format_name(&self) -> String {
        format!("{:?}", self.format).to_uppercase()
    }

    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl std::fmt::Debug for PosterImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PosterImage")
            .field("serial", &self.serial)
            .field("format", &self.format)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

impl Drop for PosterImage {
    fn drop(&mut self) {
        tracing::debug!(serial = self.serial, "poster released");
    }
}
