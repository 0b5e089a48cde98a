//! Request bodies sent by write operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::{BlobType, IdentityProvider, PublisherType, ReportReason, UserVisibility};
use crate::blob::BlobHandle;
use crate::mapper::{CompositeMapper, FieldMapper, TypeDescriptor};
use crate::model::Model;

// ============================================================================
// Content
// ============================================================================

/// Create a new topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostTopicRequest {
    /// Publisher type
    pub publisher_type: PublisherType,
    /// Topic title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Topic text
    pub text: String,
    /// Topic blob type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blob_type: Option<BlobType>,
    /// Topic blob handle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blob_handle: Option<BlobHandle>,
    /// Topic categories
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<String>,
    /// Topic language
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Topic deep link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deep_link: Option<String>,
    /// Topic friendly name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,
    /// Topic group
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl PostTopicRequest {
    /// A user-published text topic with no optional fields set.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            publisher_type: PublisherType::User,
            title: None,
            text: text.into(),
            blob_type: None,
            blob_handle: None,
            categories: None,
            language: None,
            deep_link: None,
            friendly_name: None,
            group: None,
        }
    }

    /// Set the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Attach an uploaded blob.
    #[must_use]
    pub fn with_blob(mut self, blob_type: BlobType, blob_handle: BlobHandle) -> Self {
        self.blob_type = Some(blob_type);
        self.blob_handle = Some(blob_handle);
        self
    }
}

pub(crate) static POST_TOPIC_REQUEST: CompositeMapper = CompositeMapper {
    class_name: "PostTopicRequest",
    serialized_name: "PostTopicRequest",
    fields: &[
        FieldMapper::required("publisherType", PublisherType::DESCRIPTOR),
        FieldMapper::optional("title", TypeDescriptor::String),
        FieldMapper::required("text", TypeDescriptor::String),
        FieldMapper::optional("blobType", BlobType::DESCRIPTOR),
        FieldMapper::optional("blobHandle", TypeDescriptor::String),
        FieldMapper::optional("categories", TypeDescriptor::String),
        FieldMapper::optional("language", TypeDescriptor::String),
        FieldMapper::optional("deepLink", TypeDescriptor::String),
        FieldMapper::optional("friendlyName", TypeDescriptor::String),
        FieldMapper::optional("group", TypeDescriptor::String),
    ],
};

impl Model for PostTopicRequest {
    fn mapper() -> &'static CompositeMapper {
        &POST_TOPIC_REQUEST
    }
}

/// Update a topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutTopicRequest {
    /// Topic title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Topic text
    pub text: String,
    /// Topic categories
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<String>,
}

pub(crate) static PUT_TOPIC_REQUEST: CompositeMapper = CompositeMapper {
    class_name: "PutTopicRequest",
    serialized_name: "PutTopicRequest",
    fields: &[
        FieldMapper::optional("title", TypeDescriptor::String),
        FieldMapper::required("text", TypeDescriptor::String),
        FieldMapper::optional("categories", TypeDescriptor::String),
    ],
};

impl Model for PutTopicRequest {
    fn mapper() -> &'static CompositeMapper {
        &PUT_TOPIC_REQUEST
    }
}

/// Create a new comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostCommentRequest {
    /// Comment text
    pub text: String,
    /// Comment blob type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blob_type: Option<BlobType>,
    /// Comment blob handle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blob_handle: Option<BlobHandle>,
    /// Comment language
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl PostCommentRequest {
    /// A text-only comment.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            blob_type: None,
            blob_handle: None,
            language: None,
        }
    }
}

pub(crate) static POST_COMMENT_REQUEST: CompositeMapper = CompositeMapper {
    class_name: "PostCommentRequest",
    serialized_name: "PostCommentRequest",
    fields: &[
        FieldMapper::required("text", TypeDescriptor::String),
        FieldMapper::optional("blobType", BlobType::DESCRIPTOR),
        FieldMapper::optional("blobHandle", TypeDescriptor::String),
        FieldMapper::optional("language", TypeDescriptor::String),
    ],
};

impl Model for PostCommentRequest {
    fn mapper() -> &'static CompositeMapper {
        &POST_COMMENT_REQUEST
    }
}

/// Create a new reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostReplyRequest {
    /// Reply text
    pub text: String,
    /// Reply language
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl PostReplyRequest {
    /// A reply with no language tag.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: None,
        }
    }
}

pub(crate) static POST_REPLY_REQUEST: CompositeMapper = CompositeMapper {
    class_name: "PostReplyRequest",
    serialized_name: "PostReplyRequest",
    fields: &[
        FieldMapper::required("text", TypeDescriptor::String),
        FieldMapper::optional("language", TypeDescriptor::String),
    ],
};

impl Model for PostReplyRequest {
    fn mapper() -> &'static CompositeMapper {
        &POST_REPLY_REQUEST
    }
}

/// Report a user or content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostReportRequest {
    /// Report reason
    pub reason: ReportReason,
}

pub(crate) static POST_REPORT_REQUEST: CompositeMapper = CompositeMapper {
    class_name: "PostReportRequest",
    serialized_name: "PostReportRequest",
    fields: &[FieldMapper::required("reason", ReportReason::DESCRIPTOR)],
};

impl Model for PostReportRequest {
    fn mapper() -> &'static CompositeMapper {
        &POST_REPORT_REQUEST
    }
}

/// Pin a topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPinRequest {
    /// Topic handle
    pub topic_handle: String,
}

pub(crate) static POST_PIN_REQUEST: CompositeMapper = CompositeMapper {
    class_name: "PostPinRequest",
    serialized_name: "PostPinRequest",
    fields: &[FieldMapper::required("topicHandle", TypeDescriptor::String)],
};

impl Model for PostPinRequest {
    fn mapper() -> &'static CompositeMapper {
        &POST_PIN_REQUEST
    }
}

// ============================================================================
// Notifications
// ============================================================================

/// Mark notifications as read up to an activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutNotificationsStatusRequest {
    /// Last read activity handle
    pub read_activity_handle: String,
}

pub(crate) static PUT_NOTIFICATIONS_STATUS_REQUEST: CompositeMapper = CompositeMapper {
    class_name: "PutNotificationsStatusRequest",
    serialized_name: "PutNotificationsStatusRequest",
    fields: &[FieldMapper::required(
        "readActivityHandle",
        TypeDescriptor::String,
    )],
};

impl Model for PutNotificationsStatusRequest {
    fn mapper() -> &'static CompositeMapper {
        &PUT_NOTIFICATIONS_STATUS_REQUEST
    }
}

/// Register or refresh a push registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutPushRegistrationRequest {
    /// Last updated time reported by the OS. Registrations not refreshed
    /// within 30 days expire.
    pub last_updated_time: DateTime<Utc>,
    /// Language of the user
    pub language: String,
}

pub(crate) static PUT_PUSH_REGISTRATION_REQUEST: CompositeMapper = CompositeMapper {
    class_name: "PutPushRegistrationRequest",
    serialized_name: "PutPushRegistrationRequest",
    fields: &[
        FieldMapper::required("lastUpdatedTime", TypeDescriptor::DateTime),
        FieldMapper::required("language", TypeDescriptor::String),
    ],
};

impl Model for PutPushRegistrationRequest {
    fn mapper() -> &'static CompositeMapper {
        &PUT_PUSH_REGISTRATION_REQUEST
    }
}

// ============================================================================
// Identity
// ============================================================================

/// Sign in with a third-party credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSessionRequest {
    /// Identity provider type
    pub identity_provider: IdentityProvider,
    /// Access token, user code or verifier obtained from the provider
    pub access_token: String,
    /// Request token, for providers that issue request tokens and verifiers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_token: Option<String>,
    /// Unique installation id of the app
    pub instance_id: String,
    /// Whether to create the user if it does not exist
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_user: Option<bool>,
}

pub(crate) static POST_SESSION_REQUEST: CompositeMapper = CompositeMapper {
    class_name: "PostSessionRequest",
    serialized_name: "PostSessionRequest",
    fields: &[
        FieldMapper::required("identityProvider", IdentityProvider::DESCRIPTOR),
        FieldMapper::required("accessToken", TypeDescriptor::String),
        FieldMapper::optional("requestToken", TypeDescriptor::String),
        FieldMapper::required("instanceId", TypeDescriptor::String),
        FieldMapper::optional("createUser", TypeDescriptor::Boolean),
    ],
};

impl Model for PostSessionRequest {
    fn mapper() -> &'static CompositeMapper {
        &POST_SESSION_REQUEST
    }
}

/// Create a new user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostUserRequest {
    /// Identity provider type
    pub identity_provider: IdentityProvider,
    /// Access token obtained from the provider
    pub access_token: String,
    /// Request token, for providers that issue request tokens and verifiers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_token: Option<String>,
    /// Unique installation id of the app
    pub instance_id: String,
    /// First name of the user
    pub first_name: String,
    /// Last name of the user
    pub last_name: String,
    /// Short bio of the user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Photo handle of the user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_handle: Option<BlobHandle>,
}

pub(crate) static POST_USER_REQUEST: CompositeMapper = CompositeMapper {
    class_name: "PostUserRequest",
    serialized_name: "PostUserRequest",
    fields: &[
        FieldMapper::required("identityProvider", IdentityProvider::DESCRIPTOR),
        FieldMapper::required("accessToken", TypeDescriptor::String),
        FieldMapper::optional("requestToken", TypeDescriptor::String),
        FieldMapper::required("instanceId", TypeDescriptor::String),
        FieldMapper::required("firstName", TypeDescriptor::String),
        FieldMapper::required("lastName", TypeDescriptor::String),
        FieldMapper::optional("bio", TypeDescriptor::String),
        FieldMapper::optional("photoHandle", TypeDescriptor::String),
    ],
};

impl Model for PostUserRequest {
    fn mapper() -> &'static CompositeMapper {
        &POST_USER_REQUEST
    }
}

/// Link another third-party account to the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostLinkedAccountRequest {
    /// Identity provider type
    pub identity_provider: IdentityProvider,
    /// Access token, user code or verifier obtained from the provider
    pub access_token: String,
    /// Request token, for providers that issue request tokens and verifiers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_token: Option<String>,
}

pub(crate) static POST_LINKED_ACCOUNT_REQUEST: CompositeMapper = CompositeMapper {
    class_name: "PostLinkedAccountRequest",
    serialized_name: "PostLinkedAccountRequest",
    fields: &[
        FieldMapper::required("identityProvider", IdentityProvider::DESCRIPTOR),
        FieldMapper::required("accessToken", TypeDescriptor::String),
        FieldMapper::optional("requestToken", TypeDescriptor::String),
    ],
};

impl Model for PostLinkedAccountRequest {
    fn mapper() -> &'static CompositeMapper {
        &POST_LINKED_ACCOUNT_REQUEST
    }
}

// ============================================================================
// Follow graph
// ============================================================================

/// Follow a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostFollowingRequest {
    /// User handle
    pub user_handle: String,
}

pub(crate) static POST_FOLLOWING_REQUEST: CompositeMapper = CompositeMapper {
    class_name: "PostFollowingRequest",
    serialized_name: "PostFollowingRequest",
    fields: &[FieldMapper::required("userHandle", TypeDescriptor::String)],
};

impl Model for PostFollowingRequest {
    fn mapper() -> &'static CompositeMapper {
        &POST_FOLLOWING_REQUEST
    }
}

/// Accept a follower request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostFollowerRequest {
    /// User handle
    pub user_handle: String,
}

pub(crate) static POST_FOLLOWER_REQUEST: CompositeMapper = CompositeMapper {
    class_name: "PostFollowerRequest",
    serialized_name: "PostFollowerRequest",
    fields: &[FieldMapper::required("userHandle", TypeDescriptor::String)],
};

impl Model for PostFollowerRequest {
    fn mapper() -> &'static CompositeMapper {
        &POST_FOLLOWER_REQUEST
    }
}

/// Block a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostBlockedUserRequest {
    /// User handle
    pub user_handle: String,
}

pub(crate) static POST_BLOCKED_USER_REQUEST: CompositeMapper = CompositeMapper {
    class_name: "PostBlockedUserRequest",
    serialized_name: "PostBlockedUserRequest",
    fields: &[FieldMapper::required("userHandle", TypeDescriptor::String)],
};

impl Model for PostBlockedUserRequest {
    fn mapper() -> &'static CompositeMapper {
        &POST_BLOCKED_USER_REQUEST
    }
}

// ============================================================================
// Profile
// ============================================================================

/// Update the signed-in user's name and bio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutUserInfoRequest {
    /// First name of the user
    pub first_name: String,
    /// Last name of the user
    pub last_name: String,
    /// Short bio of the user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

pub(crate) static PUT_USER_INFO_REQUEST: CompositeMapper = CompositeMapper {
    class_name: "PutUserInfoRequest",
    serialized_name: "PutUserInfoRequest",
    fields: &[
        FieldMapper::required("firstName", TypeDescriptor::String),
        FieldMapper::required("lastName", TypeDescriptor::String),
        FieldMapper::optional("bio", TypeDescriptor::String),
    ],
};

impl Model for PutUserInfoRequest {
    fn mapper() -> &'static CompositeMapper {
        &PUT_USER_INFO_REQUEST
    }
}

/// Update (or clear) the signed-in user's photo.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutUserPhotoRequest {
    /// Photo handle of the user; `None` removes the photo
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_handle: Option<BlobHandle>,
}

pub(crate) static PUT_USER_PHOTO_REQUEST: CompositeMapper = CompositeMapper {
    class_name: "PutUserPhotoRequest",
    serialized_name: "PutUserPhotoRequest",
    fields: &[FieldMapper::optional("photoHandle", TypeDescriptor::String)],
};

impl Model for PutUserPhotoRequest {
    fn mapper() -> &'static CompositeMapper {
        &PUT_USER_PHOTO_REQUEST
    }
}

/// Change the signed-in user's visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutUserVisibilityRequest {
    /// Visibility of the user
    pub visibility: UserVisibility,
}

pub(crate) static PUT_USER_VISIBILITY_REQUEST: CompositeMapper = CompositeMapper {
    class_name: "PutUserVisibilityRequest",
    serialized_name: "PutUserVisibilityRequest",
    fields: &[FieldMapper::required("visibility", UserVisibility::DESCRIPTOR)],
};

impl Model for PutUserVisibilityRequest {
    fn mapper() -> &'static CompositeMapper {
        &PUT_USER_VISIBILITY_REQUEST
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_post_topic_request_builder() {
        let request = PostTopicRequest::new("hello")
            .with_title("greeting")
            .with_blob(BlobType::Image, BlobHandle::new("b1"));

        assert_eq!(
            request.to_wire().unwrap(),
            json!({
                "publisherType": "User",
                "title": "greeting",
                "text": "hello",
                "blobType": "Image",
                "blobHandle": "b1",
            })
        );
    }

    #[test]
    fn test_empty_photo_request_is_an_empty_object() {
        assert_eq!(PutUserPhotoRequest::default().to_wire().unwrap(), json!({}));
    }

    #[test]
    fn test_push_registration_timestamp_is_rfc3339() {
        let request = PutPushRegistrationRequest {
            last_updated_time: "2016-10-19T12:00:00Z".parse().unwrap(),
            language: "en-US".to_string(),
        };
        assert_eq!(
            request.to_wire().unwrap()["lastUpdatedTime"],
            "2016-10-19T12:00:00Z"
        );
    }

    #[test]
    fn test_session_request_rejects_unknown_provider() {
        let err = PostSessionRequest::from_wire(&json!({
            "identityProvider": "MySpace",
            "accessToken": "tok",
            "instanceId": "i1",
        }))
        .unwrap_err();
        assert_eq!(err.validation().map(|e| e.path()), Some("identityProvider"));
    }
}
