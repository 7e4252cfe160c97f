// SPDX-License-Identifier: MPL-2.0
//! Poster form and request types.
//!
//! These types know nothing about Iced or HTTP; the UI edits a [`FormState`]
//! and the service client posts the [`PosterRequest`] it produces.

mod form;
mod request;

pub use form::{Direction, FormState, Platform, PosterLanguage, INITIAL_FEATURE_SLOTS};
pub use request::PosterRequest;
