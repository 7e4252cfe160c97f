// SPDX-License-Identifier: MPL-2.0
//! Test helpers shared by unit tests.

use bytes::Bytes;
use image_rs::{ImageFormat, Rgb, RgbImage};
use std::io::Cursor;
use std::sync::Mutex;

/// Held by every test that reads or writes process environment variables.
pub static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Encodes a solid `width`x`height` image in `format`.
pub fn encoded_image(width: u32, height: u32, format: ImageFormat) -> Bytes {
    let img = RgbImage::from_pixel(width, height, Rgb([79, 70, 229]));
    let mut buffer = Cursor::new(Vec::new());
    img.write_to(&mut buffer, format).expect("encode test image");
    Bytes::from(buffer.into_inner())
}

/// PNG bytes of a solid test image.
pub fn png_bytes(width: u32, height: u32) -> Bytes {
    encoded_image(width, height, ImageFormat::Png)
}
