//! Public configuration for the SocialPlus client.

use std::time::Duration;

/// Configuration for the SocialPlus client.
///
/// The base URL is required and carries the API version prefix, e.g.
/// `https://api.example.com/v0.7`. Operation paths are appended to it.
///
/// # Example
///
/// ```
/// use socialplus_client::SocialPlusClientConfig;
/// use std::time::Duration;
///
/// let config = SocialPlusClientConfig::new("https://api.example.com/v0.7")
///     .with_timeout(Duration::from_secs(10))
///     .with_app_key("my-app-key");
/// ```
#[derive(Debug, Clone)]
pub struct SocialPlusClientConfig {
    /// Base URL of the API, including the version prefix
    pub(crate) base_url: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout
    pub(crate) timeout: Duration,
    /// App key sent when a call does not supply its own
    pub(crate) app_key: Option<String>,
    /// Maximum number of retry attempts for transient errors
    pub(crate) max_retries: u8,
    /// Base delay for exponential backoff
    pub(crate) retry_base_delay: Duration,
}

impl SocialPlusClientConfig {
    /// Create a configuration for the given base URL with default settings.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            user_agent: concat!("socialplus-client/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
            app_key: None,
            max_retries: 3,
            retry_base_delay: Duration::from_millis(500),
        }
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the default app key.
    #[must_use]
    pub fn with_app_key(mut self, app_key: impl Into<String>) -> Self {
        self.app_key = Some(app_key.into());
        self
    }

    /// Set an optional default app key.
    #[must_use]
    pub fn with_optional_app_key(mut self, app_key: Option<String>) -> Self {
        self.app_key = app_key;
        self
    }

    /// Set the maximum number of retry attempts for transient errors.
    ///
    /// Defaults to 3 retries.
    #[must_use]
    pub const fn with_max_retries(mut self, retries: u8) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set the base delay for exponential backoff retries.
    ///
    /// Defaults to 500ms.
    #[must_use]
    pub const fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_base_delay = delay;
        self
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
