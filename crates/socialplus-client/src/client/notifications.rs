//! Notifications, push registrations and pins of the signed-in user.

use socialplus_core::{
    ActivityView, CountResponse, FeedResponse, PlatformType, PostPinRequest,
    PutNotificationsStatusRequest, PutPushRegistrationRequest, TopicView,
};

use super::{MyNotifications, MyPins, MyPushRegistrations};
use crate::error::ClientResult;
use crate::http::HttpBackend;
use crate::options::{CallOptions, PageOptions};
use crate::request::ApiCall;
use crate::url::segment;

impl<B: HttpBackend> MyNotifications<'_, B> {
    /// Mark every notification up to and including an activity as read.
    pub async fn put_notifications_status(
        &self,
        request: &PutNotificationsStatusRequest,
        authorization: &str,
        options: &CallOptions,
    ) -> ClientResult<()> {
        let call = ApiCall::put("users/me/notifications/status", options)
            .bearer(authorization)
            .json(request)?;
        self.client.send(call).await
    }

    pub async fn get_notifications(
        &self,
        page: &PageOptions,
        authorization: &str,
        options: &CallOptions,
    ) -> ClientResult<FeedResponse<ActivityView>> {
        let call = ApiCall::get("users/me/notifications", options)
            .bearer(authorization)
            .page(page);
        self.client.fetch(call).await
    }

    /// Number of unread notifications.
    pub async fn get_notifications_count(
        &self,
        authorization: &str,
        options: &CallOptions,
    ) -> ClientResult<CountResponse> {
        let call = ApiCall::get("users/me/notifications/count", options).bearer(authorization);
        self.client.fetch(call).await
    }
}

impl<B: HttpBackend> MyPushRegistrations<'_, B> {
    /// Register a device for push notifications, or refresh its registration.
    pub async fn put_push_registration(
        &self,
        platform: PlatformType,
        registration_id: &str,
        request: &PutPushRegistrationRequest,
        authorization: &str,
        options: &CallOptions,
    ) -> ClientResult<()> {
        let call = ApiCall::put(registration_path(platform, registration_id), options)
            .bearer(authorization)
            .json(request)?;
        self.client.send(call).await
    }

    pub async fn delete_push_registration(
        &self,
        platform: PlatformType,
        registration_id: &str,
        authorization: &str,
        options: &CallOptions,
    ) -> ClientResult<()> {
        let call = ApiCall::delete(registration_path(platform, registration_id), options)
            .bearer(authorization);
        self.client.send(call).await
    }
}

fn registration_path(platform: PlatformType, registration_id: &str) -> String {
    format!(
        "users/me/push_registrations/{}/{}",
        platform.as_str(),
        segment(registration_id)
    )
}

impl<B: HttpBackend> MyPins<'_, B> {
    pub async fn get_pins(
        &self,
        page: &PageOptions,
        authorization: &str,
        options: &CallOptions,
    ) -> ClientResult<FeedResponse<TopicView>> {
        let call = ApiCall::get("users/me/pins", options)
            .bearer(authorization)
            .page(page);
        self.client.fetch(call).await
    }

    pub async fn post_pin(
        &self,
        request: &PostPinRequest,
        authorization: &str,
        options: &CallOptions,
    ) -> ClientResult<()> {
        let call = ApiCall::post("users/me/pins", options)
            .bearer(authorization)
            .json(request)?;
        self.client.send(call).await
    }

    pub async fn delete_pin(
        &self,
        topic_handle: &str,
        authorization: &str,
        options: &CallOptions,
    ) -> ClientResult<()> {
        let path = format!("users/me/pins/{}", segment(topic_handle));
        self.client
            .send(ApiCall::delete(path, options).bearer(authorization))
            .await
    }
}
