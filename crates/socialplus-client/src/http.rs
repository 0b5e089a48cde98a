//! HTTP backend abstraction for the SocialPlus API.
//!
//! The client builds transport-neutral [`ApiRequest`]s and hands them to an
//! [`HttpBackend`]. The production backend uses reqwest and retries transient
//! failures with exponential backoff. Tests substitute a fake or a mock.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::config::SocialPlusClientConfig;
use crate::error::{ClientError, ClientResult};

/// Content type of JSON request bodies.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Content type used for binary uploads when the caller gives none.
pub const OCTET_STREAM: &str = "application/octet-stream";

// ============================================================================
// Requests and Responses
// ============================================================================

/// HTTP methods used by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    /// Upper-case method name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Whether repeating the request cannot change the outcome.
    pub const fn is_idempotent(self) -> bool {
        !matches!(self, Self::Post)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of an outgoing request.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// No body
    Empty,
    /// Validated wire JSON
    Json(Value),
    /// Raw bytes with their MIME type
    Binary {
        /// Value of the `Content-Type` header
        content_type: String,
        /// Payload
        data: Bytes,
    },
}

impl RequestBody {
    /// Content type and encoded payload, if there is a body.
    pub fn encode(&self) -> ClientResult<Option<(String, Bytes)>> {
        match self {
            Self::Empty => Ok(None),
            Self::Json(value) => Ok(Some((
                JSON_CONTENT_TYPE.to_string(),
                Bytes::from(serde_json::to_vec(value)?),
            ))),
            Self::Binary { content_type, data } => Ok(Some((content_type.clone(), data.clone()))),
        }
    }
}

/// A fully resolved request, ready to put on the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute URL including query
    pub url: Url,
    /// Headers in the order they were added
    pub headers: Vec<(String, String)>,
    /// Request body
    pub body: RequestBody,
}

impl ApiRequest {
    /// First value of a header, matched case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// A successful response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code (2xx)
    pub status: u16,
    /// Raw response body
    pub body: Bytes,
}

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Executes [`ApiRequest`]s.
///
/// Implementations return `Ok` only for 2xx responses and map every other
/// status to [`ClientError::ApiRequestFailed`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Send a request and collect the response body.
    async fn execute(&self, request: ApiRequest) -> ClientResult<ApiResponse>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest with retry logic.
///
/// Server errors (5xx) and network errors are retried with exponential
/// backoff. POST requests are never retried.
pub struct ReqwestBackend {
    client: reqwest::Client,
    max_retries: u8,
    retry_base_delay: Duration,
}

impl ReqwestBackend {
    /// Create a backend from the client configuration.
    pub fn new(config: &SocialPlusClientConfig) -> ClientResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            max_retries: config.max_retries,
            retry_base_delay: config.retry_base_delay,
        })
    }

    fn build_request(
        &self,
        request: &ApiRequest,
        body: Option<&(String, Bytes)>,
    ) -> reqwest::RequestBuilder {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, request.url.as_str());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some((content_type, data)) = body {
            builder = builder
                .header(reqwest::header::CONTENT_TYPE, content_type.as_str())
                .body(data.clone());
        }
        builder
    }

    const fn retries_for(&self, method: Method) -> u8 {
        if method.is_idempotent() {
            self.max_retries
        } else {
            0
        }
    }
}

/// Delay before retry number `attempt` (1-based).
fn backoff_delay(base: Duration, attempt: u8) -> Duration {
    let exponent = u32::from(attempt.saturating_sub(1));
    base.saturating_mul(2u32.saturating_pow(exponent))
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn execute(&self, request: ApiRequest) -> ClientResult<ApiResponse> {
        let body = request.body.encode()?;
        let max_retries = self.retries_for(request.method);
        let mut last_error: Option<ClientError> = None;

        for attempt in 0..=max_retries {
            if attempt > 0 {
                tokio::time::sleep(backoff_delay(self.retry_base_delay, attempt)).await;
            }

            debug!(method = %request.method, url = %request.url, attempt, "sending request");

            match self.build_request(&request, body.as_ref()).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        let body = response.bytes().await?;
                        return Ok(ApiResponse {
                            status: status.as_u16(),
                            body,
                        });
                    }

                    let error = ClientError::ApiRequestFailed {
                        status: status.as_u16(),
                        method: request.method.as_str(),
                        url: request.url.to_string(),
                    };

                    // 5xx errors are retryable (server-side issues)
                    if status.is_server_error() && attempt < max_retries {
                        warn!(status = status.as_u16(), url = %request.url, attempt, "server error, retrying");
                        last_error = Some(error);
                        continue;
                    }

                    return Err(error);
                }
                Err(e) => {
                    if attempt < max_retries {
                        warn!(error = %e, url = %request.url, attempt, "network error, retrying");
                        last_error = Some(e.into());
                        continue;
                    }
                    return Err(e.into());
                }
            }
        }

        Err(last_error.unwrap_or_else(|| ClientError::InvalidResponse {
            message: "request was never sent".to_string(),
        }))
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
