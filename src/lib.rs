// SPDX-License-Identifier: MPL-2.0
//! `posterly` composes marketing posters for mobile apps with the Iced GUI
//! framework.
//!
//! The user describes an app (name, description, features), picks a poster
//! language and a social platform, and a remote service renders the poster.
//! The result is previewed in place and can be saved to disk. The interface
//! is localized with Fluent and switches to right-to-left for Arabic.

#![doc(html_root_url = "https://docs.rs/posterly/0.1.0")]

pub mod app;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;

#[cfg(test)]
mod test_utils;
