// SPDX-License-Identifier: MPL-2.0
//! JSON payload of the generation call.

use super::form::{Platform, PosterLanguage};
use serde::{Deserialize, Serialize};

/// Body posted to the poster service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PosterRequest {
    pub app_name: String,
    pub app_desc: String,
    /// Never contains blank entries when built by `FormState::to_request`.
    pub features: Vec<String>,
    pub language: PosterLanguage,
    pub platform: Platform,
}
