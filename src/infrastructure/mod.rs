// SPDX-License-Identifier: MPL-2.0
//! Adapters to the outside world.
//!
//! - [`poster_service`]: the reqwest client for the poster-generation endpoint

pub mod poster_service;

pub use poster_service::{PosterService, DEFAULT_ENDPOINT};
