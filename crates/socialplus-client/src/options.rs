//! Per-call options: pagination and optional headers.

use socialplus_core::FeedResponse;

/// Opaque pagination token returned by list operations.
pub type Cursor = String;

/// Cursor and page size for list operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageOptions {
    /// Where to resume; `None` starts at the beginning of the feed
    pub cursor: Option<Cursor>,
    /// Maximum number of items to return
    pub limit: Option<u32>,
}

impl PageOptions {
    /// First page with the service's default size.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for the page following `feed`.
    ///
    /// Returns `None` when the feed carries no cursor, i.e. it was the last page.
    pub fn after<T>(feed: &FeedResponse<T>) -> Option<Self> {
        feed.next_cursor().map(|cursor| Self {
            cursor: Some(cursor.to_string()),
            limit: None,
        })
    }

    /// Set the cursor.
    #[must_use]
    pub fn with_cursor(mut self, cursor: impl Into<Cursor>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    /// Set the page size.
    #[must_use]
    pub const fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(2);
        if let Some(cursor) = &self.cursor {
            pairs.push(("cursor", cursor.clone()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}

/// Optional headers accepted by every operation.
///
/// Operations that require a session token take it as an explicit argument,
/// which wins over `authorization` here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallOptions {
    /// App key, sent as the `appkey` header
    pub app_key: Option<String>,
    /// Authorization header value, e.g. `Bearer <session token>`
    pub authorization: Option<String>,
    /// Extra headers added verbatim
    pub custom_headers: Vec<(String, String)>,
}

impl CallOptions {
    /// No optional headers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the app key.
    #[must_use]
    pub fn with_app_key(mut self, app_key: impl Into<String>) -> Self {
        self.app_key = Some(app_key.into());
        self
    }

    /// Set the authorization header value.
    #[must_use]
    pub fn with_authorization(mut self, authorization: impl Into<String>) -> Self {
        self.authorization = Some(authorization.into());
        self
    }

    /// Add a custom header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_headers.push((name.into(), value.into()));
        self
    }
}
