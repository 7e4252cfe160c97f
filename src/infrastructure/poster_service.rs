// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the remote poster-generation service.
//!
//! The service is a black box: it takes a [`PosterRequest`] as JSON and
//! answers with raw image bytes. One call, no retry, no timeout.

use crate::domain::poster::PosterRequest;
use crate::error::ServiceError;
use bytes::Bytes;
use reqwest::header::{HeaderValue, CONTENT_TYPE};

/// Endpoint used when neither the CLI nor the config file override it.
pub const DEFAULT_ENDPOINT: &str = "https://y.posterly-backend.workers.dev/generate-poster";

const USER_AGENT: &str = concat!("Posterly/", env!("CARGO_PKG_VERSION"));

/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct PosterService {
    client: reqwest::Client,
    endpoint: String,
}

impl PosterService {
    /// Builds a client posting to `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Transport`] if the TLS backend cannot be
    /// initialised.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ServiceError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Posts `request` and returns the image bytes of a successful answer.
    ///
    /// # Errors
    ///
    /// - [`ServiceError::Transport`] when the request cannot be sent or the
    ///   body cannot be read
    /// - [`ServiceError::Status`] for any non-2xx status (body ignored)
    /// - [`ServiceError::MalformedResponse`] for an empty body
    pub async fn generate(&self, request: &PosterRequest) -> Result<Bytes, ServiceError> {
        tracing::debug!(
            endpoint = %self.endpoint,
            language = %request.language,
            platform = %request.platform,
            features = request.features.len(),
            "sending poster generation request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "poster service rejected request");
            return Err(ServiceError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        if body.is_empty() {
            return Err(ServiceError::MalformedResponse(
                "empty response body".to_string(),
            ));
        }

        tracing::debug!(bytes = body.len(), "poster received");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_agent_carries_crate_version() {
        assert!(USER_AGENT.starts_with("Posterly/"));
        assert!(USER_AGENT.ends_with(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn new_keeps_endpoint_verbatim() {
        let service = PosterService::new("http://127.0.0.1:9/generate").expect("client");
        assert_eq!(service.endpoint(), "http://127.0.0.1:9/generate");
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_transport_error() {
        let service = PosterService::new("http://127.0.0.1:9/generate").expect("client");
        let request = crate::domain::poster::FormState::new().to_request();

        let err = service
            .generate(&request)
            .await
            .expect_err("nothing listens on the discard port");
        assert!(matches!(err, ServiceError::Transport(_)));
    }

    #[tokio::test]
    async fn invalid_url_is_a_transport_error() {
        let service = PosterService::new("not a url").expect("client");
        let request = crate::domain::poster::FormState::new().to_request();

        let err = service.generate(&request).await.expect_err("bad url");
        assert!(matches!(err, ServiceError::Transport(_)));
    }
}
