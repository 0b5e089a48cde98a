//! Description of one API call before it is resolved against the base URL.

use bytes::Bytes;
use socialplus_core::Model;

use crate::error::ClientResult;
use crate::http::{Method, OCTET_STREAM, RequestBody};
use crate::options::{CallOptions, PageOptions};

/// An operation's method, relative path, query, body and authorization.
pub(crate) struct ApiCall<'a> {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) query: Vec<(&'static str, String)>,
    pub(crate) body: RequestBody,
    pub(crate) authorization: Option<&'a str>,
    pub(crate) options: &'a CallOptions,
}

impl<'a> ApiCall<'a> {
    pub(crate) fn new(method: Method, path: impl Into<String>, options: &'a CallOptions) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: RequestBody::Empty,
            authorization: None,
            options,
        }
    }

    pub(crate) fn get(path: impl Into<String>, options: &'a CallOptions) -> Self {
        Self::new(Method::Get, path, options)
    }

    pub(crate) fn post(path: impl Into<String>, options: &'a CallOptions) -> Self {
        Self::new(Method::Post, path, options)
    }

    pub(crate) fn put(path: impl Into<String>, options: &'a CallOptions) -> Self {
        Self::new(Method::Put, path, options)
    }

    pub(crate) fn delete(path: impl Into<String>, options: &'a CallOptions) -> Self {
        Self::new(Method::Delete, path, options)
    }

    /// Session token for operations that require one.
    #[must_use]
    pub(crate) const fn bearer(mut self, authorization: &'a str) -> Self {
        self.authorization = Some(authorization);
        self
    }

    #[must_use]
    pub(crate) fn query(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.query.push((name, value.into()));
        self
    }

    #[must_use]
    pub(crate) fn page(mut self, page: &PageOptions) -> Self {
        self.query.extend(page.query_pairs());
        self
    }

    /// Validate `body` against its mapper and attach it as JSON.
    pub(crate) fn json<T: Model>(mut self, body: &T) -> ClientResult<Self> {
        self.body = RequestBody::Json(body.to_wire()?);
        Ok(self)
    }

    #[must_use]
    pub(crate) fn binary(mut self, data: Bytes, content_type: Option<&str>) -> Self {
        self.body = RequestBody::Binary {
            content_type: content_type.unwrap_or(OCTET_STREAM).to_string(),
            data,
        };
        self
    }

    /// Authorization to send: the explicit token, else the call options.
    pub(crate) fn authorization(&self) -> Option<&str> {
        self.authorization.or(self.options.authorization.as_deref())
    }
}
