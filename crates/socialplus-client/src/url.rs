//! URL construction helpers for the SocialPlus API.
//!
//! Operation paths are relative to the configured base URL, which carries the
//! API version prefix. Caller-supplied path parameters go through
//! [`segment`] so a handle can never inject extra path components.

use std::borrow::Cow;

use url::Url;

use crate::error::{ClientError, ClientResult};

/// Parse and check the configured base URL.
pub fn parse_base_url(raw: &str) -> ClientResult<Url> {
    let url = Url::parse(raw)?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(ClientError::Configuration {
            message: format!("base URL '{raw}' is not an http(s) URL"),
        });
    }
    Ok(url)
}

/// Percent-encode one path segment.
pub fn segment(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

/// Append a relative path and query parameters to the base URL.
pub fn build_url(base: &Url, path: &str, query: &[(&str, String)]) -> Url {
    let mut url = base.clone();
    url.set_query(None);
    url.set_fragment(None);

    let base_path = url.path().trim_end_matches('/').to_string();
    url.set_path(&format!("{base_path}/{}", path.trim_start_matches('/')));

    if !query.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (name, value) in query {
            pairs.append_pair(name, value);
        }
    }

    url
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        parse_base_url("https://api.example.com/v0.7").unwrap()
    }

    #[test]
    fn test_build_url_appends_to_version_prefix() {
        let url = build_url(&base(), "topics/featured", &[]);
        assert_eq!(url.as_str(), "https://api.example.com/v0.7/topics/featured");
    }

    #[test]
    fn test_build_url_tolerates_trailing_slash() {
        let base = parse_base_url("https://api.example.com/v0.7/").unwrap();
        let url = build_url(&base, "users/me", &[]);
        assert_eq!(url.as_str(), "https://api.example.com/v0.7/users/me");
    }

    #[test]
    fn test_build_url_with_query() {
        let url = build_url(
            &base(),
            "search/topics",
            &[("query", "rust lang".to_string()), ("limit", "10".to_string())],
        );
        assert_eq!(
            url.as_str(),
            "https://api.example.com/v0.7/search/topics?query=rust+lang&limit=10"
        );
    }

    #[test]
    fn test_segment_escapes_separators() {
        let path = format!("topics/{}/likes", segment("a/b c"));
        let url = build_url(&base(), &path, &[]);
        assert_eq!(url.path(), "/v0.7/topics/a%2Fb%20c/likes");
    }

    #[test]
    fn test_parse_base_url_rejects_non_http() {
        assert!(matches!(
            parse_base_url("mailto:someone@example.com"),
            Err(ClientError::Configuration { .. })
        ));
        assert!(matches!(
            parse_base_url("not a url"),
            Err(ClientError::InvalidUrl(_))
        ));
    }
}
