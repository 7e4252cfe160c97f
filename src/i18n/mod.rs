// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! The interface follows the selected poster language: Arabic posters get an
//! Arabic, right-to-left form; Indonesian posters get an English,
//! left-to-right one. Translations are Fluent `.ftl` files embedded in the
//! binary.

pub mod fluent;
