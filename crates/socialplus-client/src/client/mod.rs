//! SocialPlus client and its operation groups.
//!
//! Operations are grouped the way the service documents them. Each group is a
//! borrowed view of the client obtained through an accessor, e.g.
//! `client.topics().get_topic(...)`.

mod blobs;
mod builds;
mod comments;
mod follows;
mod identity;
mod likes;
mod notifications;
mod reports;
mod search;
mod topics;
mod users;

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde_json::Value;
use socialplus_core::{Model, TypeDescriptor, decode_as};
use tracing::debug;
use url::Url;

use crate::config::SocialPlusClientConfig;
use crate::error::ClientResult;
use crate::http::{ApiRequest, ApiResponse, HttpBackend, ReqwestBackend};
use crate::request::ApiCall;
use crate::url::{build_url, parse_base_url};

// ============================================================================
// Type Aliases
// ============================================================================

/// SocialPlus client using the reqwest HTTP backend.
pub type DefaultSocialPlusClient = SocialPlusClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the SocialPlus REST API.
///
/// Generic over the HTTP backend so tests and embedders can supply their own.
/// Use [`DefaultSocialPlusClient::new`] for the reqwest backend.
pub struct SocialPlusClient<B: HttpBackend> {
    pub(crate) backend: B,
    base_url: Url,
    app_key: Option<String>,
}

impl DefaultSocialPlusClient {
    /// Create a client with the reqwest backend.
    pub fn new(config: &SocialPlusClientConfig) -> ClientResult<Self> {
        let backend = ReqwestBackend::new(config)?;
        Self::with_backend(config, backend)
    }
}

impl<B: HttpBackend> SocialPlusClient<B> {
    /// Create a client that sends requests through `backend`.
    pub fn with_backend(config: &SocialPlusClientConfig, backend: B) -> ClientResult<Self> {
        Ok(Self {
            backend,
            base_url: parse_base_url(&config.base_url)?,
            app_key: config.app_key.clone(),
        })
    }

    /// Base URL operations are resolved against.
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The HTTP backend.
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    fn resolve(&self, call: ApiCall<'_>) -> ApiRequest {
        let url = build_url(&self.base_url, &call.path, &call.query);

        let mut headers = Vec::with_capacity(2 + call.options.custom_headers.len());
        if let Some(authorization) = call.authorization() {
            headers.push(("Authorization".to_string(), authorization.to_string()));
        }
        if let Some(app_key) = call.options.app_key.as_ref().or(self.app_key.as_ref()) {
            headers.push(("appkey".to_string(), app_key.clone()));
        }
        headers.extend(call.options.custom_headers.iter().cloned());

        ApiRequest {
            method: call.method,
            url,
            headers,
            body: call.body,
        }
    }

    pub(crate) async fn execute(&self, call: ApiCall<'_>) -> ClientResult<ApiResponse> {
        let request = self.resolve(call);
        self.backend.execute(request).await
    }

    /// Execute and ignore the response body.
    pub(crate) async fn send(&self, call: ApiCall<'_>) -> ClientResult<()> {
        self.execute(call).await.map(|_| ())
    }

    /// Execute and return the raw response body.
    pub(crate) async fn fetch_bytes(&self, call: ApiCall<'_>) -> ClientResult<Bytes> {
        Ok(self.execute(call).await?.body)
    }

    /// Execute and decode a model, validating it against its mapper.
    pub(crate) async fn fetch<T: Model>(&self, call: ApiCall<'_>) -> ClientResult<T> {
        let wire = self.fetch_json(call).await?;
        T::from_wire(&wire).map_err(|err| {
            debug!(error = %err, model = T::mapper().class_name, "response failed validation");
            err.into()
        })
    }

    /// Execute and decode a value described by `descriptor`, e.g. a sequence.
    pub(crate) async fn fetch_as<T: DeserializeOwned>(
        &self,
        call: ApiCall<'_>,
        descriptor: &TypeDescriptor,
    ) -> ClientResult<T> {
        let wire = self.fetch_json(call).await?;
        decode_as(descriptor, &wire).map_err(|err| {
            debug!(error = %err, expected = %descriptor, "response failed validation");
            err.into()
        })
    }

    async fn fetch_json(&self, call: ApiCall<'_>) -> ClientResult<Value> {
        let response = self.execute(call).await?;
        Ok(serde_json::from_slice(&response.body)?)
    }
}

// ============================================================================
// Operation Groups
// ============================================================================

macro_rules! operation_groups {
    ($($(#[$meta:meta])* $accessor:ident => $group:ident),+ $(,)?) => {
        $(
            $(#[$meta])*
            pub struct $group<'a, B: HttpBackend> {
                client: &'a SocialPlusClient<B>,
            }
        )+

        impl<B: HttpBackend> SocialPlusClient<B> {
            $(
                $(#[$meta])*
                pub const fn $accessor(&self) -> $group<'_, B> {
                    $group { client: self }
                }
            )+
        }
    };
}

operation_groups! {
    /// Upload and download raw blobs.
    blobs => Blobs,
    /// Upload and download images.
    images => Images,
    /// Service build information.
    builds => Builds,
    /// Topic CRUD, rankings and featured topics.
    topics => Topics,
    /// Comments on a topic.
    topic_comments => TopicComments,
    /// Single comments.
    comments => Comments,
    /// Replies to a comment.
    comment_replies => CommentReplies,
    /// Single replies.
    replies => Replies,
    /// Likes on a comment.
    comment_likes => CommentLikes,
    /// Likes on a reply.
    reply_likes => ReplyLikes,
    /// Likes on a topic.
    topic_likes => TopicLikes,
    /// Reports against a user.
    user_reports => UserReports,
    /// Reports against a reply.
    reply_reports => ReplyReports,
    /// Reports against a comment.
    comment_reports => CommentReports,
    /// Reports against a topic.
    topic_reports => TopicReports,
    /// Trending and autocompleted hashtags.
    hashtags => Hashtags,
    /// Topic and user search.
    search => Search,
    /// Sign-in and sign-out.
    sessions => Sessions,
    /// Request tokens for identity providers that use them.
    request_tokens => RequestTokens,
    /// Third-party accounts linked to the signed-in user.
    my_linked_accounts => MyLinkedAccounts,
    /// Users and topics the signed-in user follows.
    my_following => MyFollowing,
    /// Followers of the signed-in user.
    my_followers => MyFollowers,
    /// Followers of any user.
    user_followers => UserFollowers,
    /// Users any user follows.
    user_following => UserFollowing,
    /// Follow requests awaiting the signed-in user's approval.
    my_pending_users => MyPendingUsers,
    /// Users the signed-in user has blocked.
    my_blocked_users => MyBlockedUsers,
    /// Users of another app the signed-in user does not follow yet.
    my_app_following => MyAppFollowing,
    /// The signed-in user's notification feed.
    my_notifications => MyNotifications,
    /// Push notification registrations.
    my_push_registrations => MyPushRegistrations,
    /// Topics pinned by the signed-in user.
    my_pins => MyPins,
    /// User accounts and profiles.
    users => Users,
    /// Topics of any user.
    user_topics => UserTopics,
    /// Topics of the signed-in user.
    my_topics => MyTopics,
    /// Topics liked by the signed-in user.
    my_likes => MyLikes,
    /// Apps the signed-in user has a profile in.
    my_apps => MyApps,
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::ClientError;
    use crate::http::testing::{CannedResponse, FakeBackend};
    use crate::options::CallOptions;
    use serde_json::{Value, json};

    pub const BASE_URL: &str = "https://api.example.com/v0.7";
    pub const BEARER: &str = "Bearer session-token";

    pub fn test_client(backend: FakeBackend) -> SocialPlusClient<FakeBackend> {
        SocialPlusClient::with_backend(&SocialPlusClientConfig::new(BASE_URL), backend).unwrap()
    }

    pub fn user_json(handle: &str) -> Value {
        json!({
            "userHandle": handle,
            "firstName": "Ada",
            "lastName": "Lovelace",
            "visibility": "Public",
            "followerStatus": "None",
        })
    }

    pub fn topic_json(handle: &str) -> Value {
        json!({
            "topicHandle": handle,
            "createdTime": "2016-10-19T12:00:00Z",
            "lastUpdatedTime": "2016-10-19T12:30:00Z",
            "publisherType": "User",
            "user": user_json("u1"),
            "text": "hello",
            "totalLikes": 2,
            "totalComments": 1,
            "liked": false,
            "pinned": false,
        })
    }

    pub fn user_feed_json() -> Value {
        json!({"data": [user_json("u1"), user_json("u2")], "cursor": "next"})
    }

    pub fn topic_feed_json() -> Value {
        json!({"data": [topic_json("t1")], "cursor": ""})
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let config = SocialPlusClientConfig::new("ftp://files.example.com");
        assert!(matches!(
            SocialPlusClient::with_backend(&config, FakeBackend::new()),
            Err(ClientError::Configuration { .. })
        ));
    }

    #[test]
    fn test_default_client_creation() {
        let client = DefaultSocialPlusClient::new(&SocialPlusClientConfig::new(BASE_URL)).unwrap();
        assert_eq!(client.base_url().as_str(), BASE_URL);
    }

    #[test]
    fn test_headers_from_options_and_config() {
        let config = SocialPlusClientConfig::new(BASE_URL).with_app_key("default-key");
        let client = SocialPlusClient::with_backend(&config, FakeBackend::new()).unwrap();

        let options = CallOptions::new().with_header("x-request-id", "42");
        let request = client.resolve(ApiCall::get("users/me", &options).bearer(BEARER));
        assert_eq!(request.header("Authorization"), Some(BEARER));
        assert_eq!(request.header("appkey"), Some("default-key"));
        assert_eq!(request.header("x-request-id"), Some("42"));

        let options = CallOptions::new().with_app_key("call-key");
        let request = client.resolve(ApiCall::get("topics", &options));
        assert_eq!(request.header("appkey"), Some("call-key"));
        assert_eq!(request.header("Authorization"), None);
    }

    #[tokio::test]
    async fn test_invalid_response_reports_field_path() {
        let mut bad_topic = topic_json("t1");
        bad_topic["publisherType"] = json!("Robot");
        let backend = FakeBackend::new().with_response("topics/t1", CannedResponse::json(&bad_topic));
        let client = test_client(backend);

        let err = client
            .topics()
            .get_topic("t1", &CallOptions::new())
            .await
            .unwrap_err();
        assert_eq!(err.validation().map(|e| e.path()), Some("publisherType"));
    }

    #[tokio::test]
    async fn test_non_json_response_is_a_parse_error() {
        let backend = FakeBackend::new().with_response("topics/t1", CannedResponse::bytes(b"<html>"));
        let client = test_client(backend);

        let err = client
            .topics()
            .get_topic("t1", &CallOptions::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::JsonParse(_)));
    }

    #[tokio::test]
    async fn test_api_error_is_propagated() {
        let backend = FakeBackend::new().with_response("users/me", CannedResponse::status(401));
        let client = test_client(backend);

        let err = client
            .users()
            .get_my_profile(BEARER, &CallOptions::new())
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(401));
    }
}
