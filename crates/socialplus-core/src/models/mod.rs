//! SocialPlus record types and their wire mappers.
//!
//! Every type here implements [`Model`](crate::Model). The mappers are
//! collected in [`REGISTRY`], which is what composite references resolve
//! against during serialization.

mod compact;
mod enums;
mod feed;
mod requests;
mod responses;
mod views;

pub use compact::{AppCompactView, ContentCompactView, UserCompactView};
pub use enums::{
    ActivityType, BlobType, ContentStatus, ContentType, FollowerStatus, IdentityProvider,
    ImageType, ParseEnumError, PlatformType, PublisherType, ReportReason, TimeRange,
    UserVisibility,
};
pub use feed::{FeedItem, FeedResponse};
pub use requests::{
    PostBlockedUserRequest, PostCommentRequest, PostFollowerRequest, PostFollowingRequest,
    PostLinkedAccountRequest, PostPinRequest, PostReplyRequest, PostReportRequest,
    PostSessionRequest, PostTopicRequest, PostUserRequest, PutNotificationsStatusRequest,
    PutPushRegistrationRequest, PutTopicRequest, PutUserInfoRequest, PutUserPhotoRequest,
    PutUserVisibilityRequest,
};
pub use responses::{
    BuildsCurrentResponse, CountResponse, GetRequestTokenResponse, PostBlobResponse,
    PostCommentResponse, PostImageResponse, PostReplyResponse, PostSessionResponse,
    PostTopicResponse, PostUserResponse,
};
pub use views::{
    ActivityView, CommentView, LinkedAccountView, ReplyView, TopicView, UserProfileView,
};

use crate::mapper::Registry;

/// Every mapper shipped with this crate.
pub static REGISTRY: Registry = Registry::new(&[
    // compact views
    &compact::USER_COMPACT_VIEW,
    &compact::CONTENT_COMPACT_VIEW,
    &compact::APP_COMPACT_VIEW,
    // entity views
    &views::ACTIVITY_VIEW,
    &views::TOPIC_VIEW,
    &views::COMMENT_VIEW,
    &views::REPLY_VIEW,
    &views::USER_PROFILE_VIEW,
    &views::LINKED_ACCOUNT_VIEW,
    // feeds
    &feed::FEED_RESPONSE_ACTIVITY_VIEW,
    &feed::FEED_RESPONSE_TOPIC_VIEW,
    &feed::FEED_RESPONSE_COMMENT_VIEW,
    &feed::FEED_RESPONSE_REPLY_VIEW,
    &feed::FEED_RESPONSE_USER_COMPACT_VIEW,
    &feed::FEED_RESPONSE_USER_PROFILE_VIEW,
    // requests
    &requests::POST_TOPIC_REQUEST,
    &requests::PUT_TOPIC_REQUEST,
    &requests::POST_COMMENT_REQUEST,
    &requests::POST_REPLY_REQUEST,
    &requests::POST_REPORT_REQUEST,
    &requests::POST_PIN_REQUEST,
    &requests::PUT_NOTIFICATIONS_STATUS_REQUEST,
    &requests::PUT_PUSH_REGISTRATION_REQUEST,
    &requests::POST_SESSION_REQUEST,
    &requests::POST_USER_REQUEST,
    &requests::POST_LINKED_ACCOUNT_REQUEST,
    &requests::POST_FOLLOWING_REQUEST,
    &requests::POST_FOLLOWER_REQUEST,
    &requests::POST_BLOCKED_USER_REQUEST,
    &requests::PUT_USER_INFO_REQUEST,
    &requests::PUT_USER_PHOTO_REQUEST,
    &requests::PUT_USER_VISIBILITY_REQUEST,
    // responses
    &responses::POST_BLOB_RESPONSE,
    &responses::POST_IMAGE_RESPONSE,
    &responses::POST_TOPIC_RESPONSE,
    &responses::POST_COMMENT_RESPONSE,
    &responses::POST_REPLY_RESPONSE,
    &responses::POST_SESSION_RESPONSE,
    &responses::POST_USER_RESPONSE,
    &responses::GET_REQUEST_TOKEN_RESPONSE,
    &responses::COUNT_RESPONSE,
    &responses::BUILDS_CURRENT_RESPONSE,
]);
