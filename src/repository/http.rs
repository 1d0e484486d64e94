//! `reqwest`-backed repository talking to the ERP backend.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::models::api::{ErrorBody, RecordEnvelope};
use crate::models::config::AppConfig;
use crate::repository::TokenSource;
use crate::repository::errors::{RepositoryError, RepositoryResult};

/// HTTP client wrapper shared by every catalog page and the notification store.
#[derive(Clone)]
pub struct HttpRepository {
    client: Client,
    base_url: String,
    tokens: Arc<dyn TokenSource>,
}

impl HttpRepository {
    pub fn new(
        base_url: impl Into<String>,
        tokens: Arc<dyn TokenSource>,
        timeout: Duration,
    ) -> RepositoryResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("pesquera-admin/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| RepositoryError::Request(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            tokens,
        })
    }

    pub fn from_config(config: &AppConfig, tokens: Arc<dyn TokenSource>) -> RepositoryResult<Self> {
        Self::new(
            config.api_base_url.clone(),
            tokens,
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Builds a request with the current bearer token, if any.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.client.request(method, self.url(path));
        match self.tokens.bearer_token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Sends the request and turns non-success statuses into errors.
    pub(crate) async fn send(&self, builder: RequestBuilder) -> RepositoryResult<Response> {
        let response = builder.send().await?;
        ensure_success(response).await
    }

    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> RepositoryResult<T> {
        let response = self.send(builder).await?;
        Ok(response.json::<T>().await?)
    }
}

/// Maps 404 to [`RepositoryError::NotFound`] and other failures to
/// [`RepositoryError::Status`] carrying the server's message when present.
async fn ensure_success(response: Response) -> RepositoryResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::NOT_FOUND {
        return Err(RepositoryError::NotFound);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(ErrorBody::into_message)
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string()
        });

    Err(RepositoryError::Status {
        status: status.as_u16(),
        message,
    })
}

/// Decodes an echoed record, tolerating empty or unrelated bodies.
pub(crate) async fn decode_echo<T: DeserializeOwned>(
    response: Response,
) -> RepositoryResult<Option<T>> {
    let bytes = response.bytes().await?;
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    match serde_json::from_slice::<RecordEnvelope<T>>(&bytes) {
        Ok(envelope) => Ok(Some(envelope.into_inner())),
        Err(err) => {
            log::debug!("Write response did not echo a record: {err}");
            Ok(None)
        }
    }
}
