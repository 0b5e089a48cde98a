//! User accounts, profiles and per-user topic feeds.

use socialplus_core::{
    AppCompactView, FeedResponse, PostUserRequest, PostUserResponse, PutUserInfoRequest,
    PutUserPhotoRequest, PutUserVisibilityRequest, TopicView, TypeDescriptor, UserProfileView,
};

use super::{MyApps, MyLikes, MyTopics, UserTopics, Users};
use crate::error::ClientResult;
use crate::http::HttpBackend;
use crate::options::{CallOptions, PageOptions};
use crate::request::ApiCall;
use crate::url::segment;

const APPS: TypeDescriptor = TypeDescriptor::Sequence(&TypeDescriptor::Composite("AppCompactView"));

// ============================================================================
// Accounts and profiles
// ============================================================================

impl<B: HttpBackend> Users<'_, B> {
    /// Create a user from a third-party credential and open a session.
    pub async fn post_user(
        &self,
        request: &PostUserRequest,
        options: &CallOptions,
    ) -> ClientResult<PostUserResponse> {
        let call = ApiCall::post("users", options).json(request)?;
        self.client.fetch(call).await
    }

    pub async fn get_my_profile(
        &self,
        authorization: &str,
        options: &CallOptions,
    ) -> ClientResult<UserProfileView> {
        self.client
            .fetch(ApiCall::get("users/me", options).bearer(authorization))
            .await
    }

    /// Delete the signed-in user and all their content.
    pub async fn delete_user(&self, authorization: &str, options: &CallOptions) -> ClientResult<()> {
        self.client
            .send(ApiCall::delete("users/me", options).bearer(authorization))
            .await
    }

    pub async fn put_user_info(
        &self,
        request: &PutUserInfoRequest,
        authorization: &str,
        options: &CallOptions,
    ) -> ClientResult<()> {
        let call = ApiCall::put("users/me/info", options)
            .bearer(authorization)
            .json(request)?;
        self.client.send(call).await
    }

    /// Set the profile photo to an uploaded image, or clear it.
    pub async fn put_user_photo(
        &self,
        request: &PutUserPhotoRequest,
        authorization: &str,
        options: &CallOptions,
    ) -> ClientResult<()> {
        let call = ApiCall::put("users/me/photo", options)
            .bearer(authorization)
            .json(request)?;
        self.client.send(call).await
    }

    pub async fn put_user_visibility(
        &self,
        request: &PutUserVisibilityRequest,
        authorization: &str,
        options: &CallOptions,
    ) -> ClientResult<()> {
        let call = ApiCall::put("users/me/visibility", options)
            .bearer(authorization)
            .json(request)?;
        self.client.send(call).await
    }

    pub async fn get_user(&self, user_handle: &str, options: &CallOptions) -> ClientResult<UserProfileView> {
        let call = ApiCall::get(format!("users/{}", segment(user_handle)), options);
        self.client.fetch(call).await
    }

    /// Users ranked by follower count.
    pub async fn get_popular_users(
        &self,
        page: &PageOptions,
        options: &CallOptions,
    ) -> ClientResult<FeedResponse<UserProfileView>> {
        self.client
            .fetch(ApiCall::get("users/popular", options).page(page))
            .await
    }
}

impl<B: HttpBackend> MyApps<'_, B> {
    /// Apps in which the signed-in user has a profile.
    pub async fn get_apps(
        &self,
        authorization: &str,
        options: &CallOptions,
    ) -> ClientResult<Vec<AppCompactView>> {
        let call = ApiCall::get("users/me/apps", options).bearer(authorization);
        self.client.fetch_as(call, &APPS).await
    }
}

// ============================================================================
// Topic feeds
// ============================================================================

impl<B: HttpBackend> UserTopics<'_, B> {
    pub async fn get_topics(
        &self,
        user_handle: &str,
        page: &PageOptions,
        options: &CallOptions,
    ) -> ClientResult<FeedResponse<TopicView>> {
        let call = ApiCall::get(format!("users/{}/topics", segment(user_handle)), options).page(page);
        self.client.fetch(call).await
    }

    /// A user's topics ranked by likes.
    pub async fn get_popular_topics(
        &self,
        user_handle: &str,
        page: &PageOptions,
        options: &CallOptions,
    ) -> ClientResult<FeedResponse<TopicView>> {
        let path = format!("users/{}/topics/popular", segment(user_handle));
        self.client.fetch(ApiCall::get(path, options).page(page)).await
    }
}

impl<B: HttpBackend> MyTopics<'_, B> {
    pub async fn get_topics(
        &self,
        page: &PageOptions,
        authorization: &str,
        options: &CallOptions,
    ) -> ClientResult<FeedResponse<TopicView>> {
        let call = ApiCall::get("users/me/topics", options)
            .bearer(authorization)
            .page(page);
        self.client.fetch(call).await
    }

    pub async fn get_popular_topics(
        &self,
        page: &PageOptions,
        authorization: &str,
        options: &CallOptions,
    ) -> ClientResult<FeedResponse<TopicView>> {
        let call = ApiCall::get("users/me/topics/popular", options)
            .bearer(authorization)
            .page(page);
        self.client.fetch(call).await
    }
}

impl<B: HttpBackend> MyLikes<'_, B> {
    /// Topics the signed-in user liked.
    pub async fn get_liked_topics(
        &self,
        page: &PageOptions,
        authorization: &str,
        options: &CallOptions,
    ) -> ClientResult<FeedResponse<TopicView>> {
        let call = ApiCall::get("users/me/likes/topics", options)
            .bearer(authorization)
            .page(page);
        self.client.fetch(call).await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::tests::{BEARER, test_client, topic_feed_json};
    use crate::http::testing::{CannedResponse, FakeBackend};
    use crate::http::{Method, RequestBody};
    use crate::options::{CallOptions, PageOptions};
    use serde_json::{Value, json};
    use socialplus_core::{
        BlobHandle, IdentityProvider, PlatformType, PostUserRequest, PutUserInfoRequest,
        PutUserPhotoRequest, PutUserVisibilityRequest, UserVisibility,
    };

    fn profile_json(handle: &str) -> Value {
        json!({
            "userHandle": handle,
            "firstName": "Grace",
            "lastName": "Hopper",
            "visibility": "Private",
            "totalTopics": 3,
            "totalFollowers": 10,
            "totalFollowing": 1,
            "followerStatus": "Pending",
        })
    }

    #[tokio::test]
    async fn test_post_user() {
        let backend = FakeBackend::new().with_response(
            "users",
            CannedResponse::json(&json!({"userHandle": "u1", "sessionToken": "tok"})),
        );
        let client = test_client(backend);
        let request = PostUserRequest {
            identity_provider: IdentityProvider::Microsoft,
            access_token: "ms-token".to_string(),
            request_token: None,
            instance_id: "device-1".to_string(),
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            bio: None,
            photo_handle: None,
        };

        let created = client.users().post_user(&request, &CallOptions::new()).await.unwrap();
        assert_eq!(created.user_handle, "u1");
        assert_eq!(client.backend().single_request().url.path(), "/v0.7/users");
    }

    #[tokio::test]
    async fn test_profiles() {
        let backend = FakeBackend::new()
            .with_response("users/popular", CannedResponse::json(&json!({"data": [profile_json("u2")], "cursor": "p2"})))
            .with_response("users/", CannedResponse::json(&profile_json("u1")));
        let client = test_client(backend);
        let options = CallOptions::new();

        let me = client.users().get_my_profile(BEARER, &options).await.unwrap();
        assert_eq!(me.visibility, UserVisibility::Private);

        let other = client.users().get_user("u1", &options).await.unwrap();
        assert_eq!(other.total_followers, 10);

        let popular = client
            .users()
            .get_popular_users(&PageOptions::new(), &options)
            .await
            .unwrap();
        assert_eq!(popular.data[0].user_handle, "u2");

        let requests = client.backend().requests();
        assert_eq!(requests[0].url.path(), "/v0.7/users/me");
        assert_eq!(requests[1].header("Authorization"), None);
    }

    #[tokio::test]
    async fn test_profile_updates() {
        let backend = FakeBackend::new().with_response("users/me", CannedResponse::no_content());
        let client = test_client(backend);
        let options = CallOptions::new();
        let users = client.users();

        users
            .put_user_info(
                &PutUserInfoRequest {
                    first_name: "Grace".into(),
                    last_name: "Hopper".into(),
                    bio: Some("COBOL".into()),
                },
                BEARER,
                &options,
            )
            .await
            .unwrap();
        users
            .put_user_photo(
                &PutUserPhotoRequest {
                    photo_handle: Some(BlobHandle::new("ph1")),
                },
                BEARER,
                &options,
            )
            .await
            .unwrap();
        users
            .put_user_visibility(
                &PutUserVisibilityRequest {
                    visibility: UserVisibility::Public,
                },
                BEARER,
                &options,
            )
            .await
            .unwrap();
        users.delete_user(BEARER, &options).await.unwrap();

        let requests = client.backend().requests();
        let summary: Vec<_> = requests
            .iter()
            .map(|request| (request.method, request.url.path().to_string()))
            .collect();
        assert_eq!(
            summary,
            [
                (Method::Put, "/v0.7/users/me/info".to_string()),
                (Method::Put, "/v0.7/users/me/photo".to_string()),
                (Method::Put, "/v0.7/users/me/visibility".to_string()),
                (Method::Delete, "/v0.7/users/me".to_string()),
            ]
        );
        assert_eq!(requests[1].body, RequestBody::Json(json!({"photoHandle": "ph1"})));
        assert_eq!(requests[2].body, RequestBody::Json(json!({"visibility": "Public"})));
    }

    #[tokio::test]
    async fn test_my_apps() {
        let backend = FakeBackend::new().with_response(
            "users/me/apps",
            CannedResponse::json(&json!([{"appHandle": "a1", "name": "Demo", "platformType": "IOS"}])),
        );
        let client = test_client(backend);

        let apps = client.my_apps().get_apps(BEARER, &CallOptions::new()).await.unwrap();
        assert_eq!(apps[0].platform_type, Some(PlatformType::Ios));
    }

    #[tokio::test]
    async fn test_topic_feeds() {
        let backend = FakeBackend::new().with_response("topics", CannedResponse::json(&topic_feed_json()));
        let client = test_client(backend);
        let options = CallOptions::new();
        let page = PageOptions::new();

        client.user_topics().get_topics("u1", &page, &options).await.unwrap();
        client.user_topics().get_popular_topics("u1", &page, &options).await.unwrap();
        client.my_topics().get_topics(&page, BEARER, &options).await.unwrap();
        client.my_topics().get_popular_topics(&page, BEARER, &options).await.unwrap();
        client.my_likes().get_liked_topics(&page, BEARER, &options).await.unwrap();

        let paths: Vec<_> = client
            .backend()
            .requests()
            .iter()
            .map(|request| request.url.path().to_string())
            .collect();
        assert_eq!(
            paths,
            [
                "/v0.7/users/u1/topics",
                "/v0.7/users/u1/topics/popular",
                "/v0.7/users/me/topics",
                "/v0.7/users/me/topics/popular",
                "/v0.7/users/me/likes/topics",
            ]
        );
    }
}
