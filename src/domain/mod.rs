// SPDX-License-Identifier: MPL-2.0
//! Domain layer: the poster form and the request it produces.
//!
//! Nothing here depends on Iced or on the HTTP client.

pub mod poster;
