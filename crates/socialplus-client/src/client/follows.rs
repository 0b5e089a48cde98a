//! The follow graph: following, followers, pending requests and blocks.

use socialplus_core::{
    ActivityView, CountResponse, FeedResponse, PostBlockedUserRequest, PostFollowerRequest,
    PostFollowingRequest, TopicView, UserCompactView,
};

use super::{
    MyAppFollowing, MyBlockedUsers, MyFollowers, MyFollowing, MyPendingUsers, UserFollowers,
    UserFollowing,
};
use crate::error::ClientResult;
use crate::http::HttpBackend;
use crate::options::{CallOptions, PageOptions};
use crate::request::ApiCall;
use crate::url::segment;

// ============================================================================
// Signed-in user
// ============================================================================

impl<B: HttpBackend> MyFollowing<'_, B> {
    /// Users the signed-in user follows.
    pub async fn get_following(
        &self,
        page: &PageOptions,
        authorization: &str,
        options: &CallOptions,
    ) -> ClientResult<FeedResponse<UserCompactView>> {
        let call = ApiCall::get("users/me/following", options)
            .bearer(authorization)
            .page(page);
        self.client.fetch(call).await
    }

    /// Follow a user. Following a private user creates a pending request.
    pub async fn post_following(
        &self,
        request: &PostFollowingRequest,
        authorization: &str,
        options: &CallOptions,
    ) -> ClientResult<()> {
        let call = ApiCall::post("users/me/following", options)
            .bearer(authorization)
            .json(request)?;
        self.client.send(call).await
    }

    /// Unfollow a user.
    pub async fn delete_following(
        &self,
        user_handle: &str,
        authorization: &str,
        options: &CallOptions,
    ) -> ClientResult<()> {
        let path = format!("users/me/following/{}", segment(user_handle));
        self.client
            .send(ApiCall::delete(path, options).bearer(authorization))
            .await
    }

    /// Remove a topic from the signed-in user's following-topics feed.
    pub async fn delete_topic(
        &self,
        topic_handle: &str,
        authorization: &str,
        options: &CallOptions,
    ) -> ClientResult<()> {
        let path = format!("users/me/following/topics/{}", segment(topic_handle));
        self.client
            .send(ApiCall::delete(path, options).bearer(authorization))
            .await
    }

    /// Topics by users the signed-in user follows.
    pub async fn get_topics(
        &self,
        page: &PageOptions,
        authorization: &str,
        options: &CallOptions,
    ) -> ClientResult<FeedResponse<TopicView>> {
        let call = ApiCall::get("users/me/following/topics", options)
            .bearer(authorization)
            .page(page);
        self.client.fetch(call).await
    }

    /// Activities of users the signed-in user follows.
    pub async fn get_activities(
        &self,
        page: &PageOptions,
        authorization: &str,
        options: &CallOptions,
    ) -> ClientResult<FeedResponse<ActivityView>> {
        let call = ApiCall::get("users/me/following/activities", options)
            .bearer(authorization)
            .page(page);
        self.client.fetch(call).await
    }
}

impl<B: HttpBackend> MyFollowers<'_, B> {
    pub async fn get_followers(
        &self,
        page: &PageOptions,
        authorization: &str,
        options: &CallOptions,
    ) -> ClientResult<FeedResponse<UserCompactView>> {
        let call = ApiCall::get("users/me/followers", options)
            .bearer(authorization)
            .page(page);
        self.client.fetch(call).await
    }

    /// Accept a pending follow request.
    pub async fn post_follower(
        &self,
        request: &PostFollowerRequest,
        authorization: &str,
        options: &CallOptions,
    ) -> ClientResult<()> {
        let call = ApiCall::post("users/me/followers", options)
            .bearer(authorization)
            .json(request)?;
        self.client.send(call).await
    }

    /// Remove a follower.
    pub async fn delete_follower(
        &self,
        user_handle: &str,
        authorization: &str,
        options: &CallOptions,
    ) -> ClientResult<()> {
        let path = format!("users/me/followers/{}", segment(user_handle));
        self.client
            .send(ApiCall::delete(path, options).bearer(authorization))
            .await
    }
}

impl<B: HttpBackend> MyPendingUsers<'_, B> {
    /// Reject a pending follow request.
    pub async fn delete_pending_user(
        &self,
        user_handle: &str,
        authorization: &str,
        options: &CallOptions,
    ) -> ClientResult<()> {
        let path = format!("users/me/pending_users/{}", segment(user_handle));
        self.client
            .send(ApiCall::delete(path, options).bearer(authorization))
            .await
    }

    pub async fn get_pending_users(
        &self,
        page: &PageOptions,
        authorization: &str,
        options: &CallOptions,
    ) -> ClientResult<FeedResponse<UserCompactView>> {
        let call = ApiCall::get("users/me/pending_users", options)
            .bearer(authorization)
            .page(page);
        self.client.fetch(call).await
    }

    pub async fn get_pending_users_count(
        &self,
        authorization: &str,
        options: &CallOptions,
    ) -> ClientResult<CountResponse> {
        let call = ApiCall::get("users/me/pending_users/count", options).bearer(authorization);
        self.client.fetch(call).await
    }
}

impl<B: HttpBackend> MyBlockedUsers<'_, B> {
    pub async fn get_blocked_users(
        &self,
        page: &PageOptions,
        authorization: &str,
        options: &CallOptions,
    ) -> ClientResult<FeedResponse<UserCompactView>> {
        let call = ApiCall::get("users/me/blocked_users", options)
            .bearer(authorization)
            .page(page);
        self.client.fetch(call).await
    }

    /// Block a user. A blocked user can no longer follow the signed-in user.
    pub async fn post_blocked_user(
        &self,
        request: &PostBlockedUserRequest,
        authorization: &str,
        options: &CallOptions,
    ) -> ClientResult<()> {
        let call = ApiCall::post("users/me/blocked_users", options)
            .bearer(authorization)
            .json(request)?;
        self.client.send(call).await
    }

    pub async fn delete_blocked_user(
        &self,
        user_handle: &str,
        authorization: &str,
        options: &CallOptions,
    ) -> ClientResult<()> {
        let path = format!("users/me/blocked_users/{}", segment(user_handle));
        self.client
            .send(ApiCall::delete(path, options).bearer(authorization))
            .await
    }
}

impl<B: HttpBackend> MyAppFollowing<'_, B> {
    /// Users of `app_handle` the signed-in user does not yet follow in this app.
    ///
    /// Takes a cursor only; the service picks the page size.
    pub async fn get_users(
        &self,
        app_handle: &str,
        cursor: Option<&str>,
        authorization: &str,
        options: &CallOptions,
    ) -> ClientResult<FeedResponse<UserCompactView>> {
        let path = format!("users/me/apps/{}/following/difference", segment(app_handle));
        let mut call = ApiCall::get(path, options).bearer(authorization);
        if let Some(cursor) = cursor {
            call = call.query("cursor", cursor);
        }
        self.client.fetch(call).await
    }
}

// ============================================================================
// Any user
// ============================================================================

impl<B: HttpBackend> UserFollowers<'_, B> {
    pub async fn get_followers(
        &self,
        user_handle: &str,
        page: &PageOptions,
        authorization: &str,
        options: &CallOptions,
    ) -> ClientResult<FeedResponse<UserCompactView>> {
        let call = ApiCall::get(format!("users/{}/followers", segment(user_handle)), options)
            .bearer(authorization)
            .page(page);
        self.client.fetch(call).await
    }
}

impl<B: HttpBackend> UserFollowing<'_, B> {
    pub async fn get_following(
        &self,
        user_handle: &str,
        page: &PageOptions,
        authorization: &str,
        options: &CallOptions,
    ) -> ClientResult<FeedResponse<UserCompactView>> {
        let call = ApiCall::get(format!("users/{}/following", segment(user_handle)), options)
            .bearer(authorization)
            .page(page);
        self.client.fetch(call).await
    }
}
