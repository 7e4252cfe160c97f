// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Service(ServiceError),
}

/// Failures of the generation call.
/// All of them are shown to the user the same way; the variant only picks
/// the localized reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Network unreachable, DNS failure, aborted connection, bad URL.
    Transport(String),

    /// The service answered with a non-success HTTP status.
    Status(u16),

    /// Success status but the body is empty or not an image.
    MalformedResponse(String),
}

impl ServiceError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ServiceError::Transport(_) => "error-generate-transport",
            ServiceError::Status(_) => "error-generate-status",
            ServiceError::MalformedResponse(_) => "error-generate-malformed",
        }
    }

    /// Arguments interpolated into the localized reason.
    pub fn i18n_args(&self) -> Vec<(String, String)> {
        match self {
            ServiceError::Transport(detail) | ServiceError::MalformedResponse(detail) => {
                vec![("detail".to_string(), detail.clone())]
            }
            ServiceError::Status(code) => vec![("status".to_string(), code.to_string())],
        }
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::Transport(msg) => write!(f, "Request failed: {}", msg),
            ServiceError::Status(code) => {
                write!(f, "Poster generation failed (HTTP {})", code)
            }
            ServiceError::MalformedResponse(msg) => write!(f, "Malformed response: {}", msg),
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) if !status.is_success() => ServiceError::Status(status.as_u16()),
            _ => ServiceError::Transport(err.to_string()),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Service(e) => write!(f, "Service Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ServiceError> for Error {
    fn from(err: ServiceError) -> Self {
        Error::Service(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
