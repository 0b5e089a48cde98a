//! Full entity views returned by read operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::compact::{AppCompactView, ContentCompactView, UserCompactView};
use super::enums::{
    ActivityType, BlobType, ContentStatus, FollowerStatus, IdentityProvider, PublisherType,
    UserVisibility,
};
use crate::blob::BlobHandle;
use crate::mapper::{CompositeMapper, FieldMapper, TypeDescriptor};
use crate::model::Model;

const USER: TypeDescriptor = TypeDescriptor::Composite("UserCompactView");
const CONTENT: TypeDescriptor = TypeDescriptor::Composite("ContentCompactView");
const APP: TypeDescriptor = TypeDescriptor::Composite("AppCompactView");

// ============================================================================
// Activity
// ============================================================================

/// An entry in a notification or following-activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityView {
    /// Activity handle
    pub activity_handle: String,
    /// Created time
    pub created_time: DateTime<Utc>,
    /// Activity type
    pub activity_type: ActivityType,
    /// Users who performed the activity
    pub actor_users: Vec<UserCompactView>,
    /// User the activity was performed on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acted_on_user: Option<UserCompactView>,
    /// Content the activity was performed on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acted_on_content: Option<ContentCompactView>,
    /// Total number of actions folded into this entry
    pub total_actions: i64,
    /// Whether the activity has not been read yet
    pub unread: bool,
    /// The containing app
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app: Option<AppCompactView>,
}

pub(crate) static ACTIVITY_VIEW: CompositeMapper = CompositeMapper {
    class_name: "ActivityView",
    serialized_name: "ActivityView",
    fields: &[
        FieldMapper::required("activityHandle", TypeDescriptor::String),
        FieldMapper::required("createdTime", TypeDescriptor::DateTime),
        FieldMapper::required("activityType", ActivityType::DESCRIPTOR),
        FieldMapper::required("actorUsers", TypeDescriptor::Sequence(&USER)),
        FieldMapper::optional("actedOnUser", USER),
        FieldMapper::optional("actedOnContent", CONTENT),
        FieldMapper::required("totalActions", TypeDescriptor::Integer),
        FieldMapper::required("unread", TypeDescriptor::Boolean),
        FieldMapper::optional("app", APP),
    ],
};

impl Model for ActivityView {
    fn mapper() -> &'static CompositeMapper {
        &ACTIVITY_VIEW
    }
}

// ============================================================================
// Topic / Comment / Reply
// ============================================================================

/// A topic with its counters and the querying user's state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicView {
    /// Topic handle
    pub topic_handle: String,
    /// Created time
    pub created_time: DateTime<Utc>,
    /// Last updated time
    pub last_updated_time: DateTime<Utc>,
    /// Publisher type
    pub publisher_type: PublisherType,
    /// Owner of the topic; absent for app-published topics
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserCompactView>,
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
    /// Topic blob url
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blob_url: Option<String>,
    /// Topic categories
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<String>,
    /// Topic language
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Topic group
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Topic deep link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deep_link: Option<String>,
    /// Topic friendly name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,
    /// Total likes for the topic
    pub total_likes: i64,
    /// Total comments for the topic
    pub total_comments: i64,
    /// Whether the querying user has liked the topic
    pub liked: bool,
    /// Whether the querying user has pinned the topic
    pub pinned: bool,
    /// Content status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_status: Option<ContentStatus>,
    /// The containing app
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app: Option<AppCompactView>,
}

pub(crate) static TOPIC_VIEW: CompositeMapper = CompositeMapper {
    class_name: "TopicView",
    serialized_name: "TopicView",
    fields: &[
        FieldMapper::required("topicHandle", TypeDescriptor::String),
        FieldMapper::required("createdTime", TypeDescriptor::DateTime),
        FieldMapper::required("lastUpdatedTime", TypeDescriptor::DateTime),
        FieldMapper::required("publisherType", PublisherType::DESCRIPTOR),
        FieldMapper::optional("user", USER),
        FieldMapper::optional("title", TypeDescriptor::String),
        FieldMapper::required("text", TypeDescriptor::String),
        FieldMapper::optional("blobType", BlobType::DESCRIPTOR),
        FieldMapper::optional("blobHandle", TypeDescriptor::String),
        FieldMapper::optional("blobUrl", TypeDescriptor::String),
        FieldMapper::optional("categories", TypeDescriptor::String),
        FieldMapper::optional("language", TypeDescriptor::String),
        FieldMapper::optional("group", TypeDescriptor::String),
        FieldMapper::optional("deepLink", TypeDescriptor::String),
        FieldMapper::optional("friendlyName", TypeDescriptor::String),
        FieldMapper::required("totalLikes", TypeDescriptor::Integer),
        FieldMapper::required("totalComments", TypeDescriptor::Integer),
        FieldMapper::required("liked", TypeDescriptor::Boolean),
        FieldMapper::required("pinned", TypeDescriptor::Boolean),
        FieldMapper::optional("contentStatus", ContentStatus::DESCRIPTOR),
        FieldMapper::optional("app", APP),
    ],
};

impl Model for TopicView {
    fn mapper() -> &'static CompositeMapper {
        &TOPIC_VIEW
    }
}

/// A comment on a topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentView {
    /// Comment handle
    pub comment_handle: String,
    /// Parent topic handle
    pub topic_handle: String,
    /// Created time
    pub created_time: DateTime<Utc>,
    /// Last updated time
    pub last_updated_time: DateTime<Utc>,
    /// Owner of the comment
    pub user: UserCompactView,
    /// Comment text
    pub text: String,
    /// Comment blob type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blob_type: Option<BlobType>,
    /// Comment blob handle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blob_handle: Option<BlobHandle>,
    /// Comment blob url
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blob_url: Option<String>,
    /// Comment language
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Total likes for the comment
    pub total_likes: i64,
    /// Total replies for the comment
    pub total_replies: i64,
    /// Whether the querying user has liked the comment
    pub liked: bool,
    /// Content status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_status: Option<ContentStatus>,
}

pub(crate) static COMMENT_VIEW: CompositeMapper = CompositeMapper {
    class_name: "CommentView",
    serialized_name: "CommentView",
    fields: &[
        FieldMapper::required("commentHandle", TypeDescriptor::String),
        FieldMapper::required("topicHandle", TypeDescriptor::String),
        FieldMapper::required("createdTime", TypeDescriptor::DateTime),
        FieldMapper::required("lastUpdatedTime", TypeDescriptor::DateTime),
        FieldMapper::required("user", USER),
        FieldMapper::required("text", TypeDescriptor::String),
        FieldMapper::optional("blobType", BlobType::DESCRIPTOR),
        FieldMapper::optional("blobHandle", TypeDescriptor::String),
        FieldMapper::optional("blobUrl", TypeDescriptor::String),
        FieldMapper::optional("language", TypeDescriptor::String),
        FieldMapper::required("totalLikes", TypeDescriptor::Integer),
        FieldMapper::required("totalReplies", TypeDescriptor::Integer),
        FieldMapper::required("liked", TypeDescriptor::Boolean),
        FieldMapper::optional("contentStatus", ContentStatus::DESCRIPTOR),
    ],
};

impl Model for CommentView {
    fn mapper() -> &'static CompositeMapper {
        &COMMENT_VIEW
    }
}

/// A reply to a comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyView {
    /// Reply handle
    pub reply_handle: String,
    /// Parent comment handle
    pub comment_handle: String,
    /// Root topic handle
    pub topic_handle: String,
    /// Created time
    pub created_time: DateTime<Utc>,
    /// Owner of the reply
    pub user: UserCompactView,
    /// Reply text
    pub text: String,
    /// Reply language
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Total likes for the reply
    pub total_likes: i64,
    /// Whether the querying user has liked the reply
    pub liked: bool,
    /// Content status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_status: Option<ContentStatus>,
}

pub(crate) static REPLY_VIEW: CompositeMapper = CompositeMapper {
    class_name: "ReplyView",
    serialized_name: "ReplyView",
    fields: &[
        FieldMapper::required("replyHandle", TypeDescriptor::String),
        FieldMapper::required("commentHandle", TypeDescriptor::String),
        FieldMapper::required("topicHandle", TypeDescriptor::String),
        FieldMapper::required("createdTime", TypeDescriptor::DateTime),
        FieldMapper::required("user", USER),
        FieldMapper::required("text", TypeDescriptor::String),
        FieldMapper::optional("language", TypeDescriptor::String),
        FieldMapper::required("totalLikes", TypeDescriptor::Integer),
        FieldMapper::required("liked", TypeDescriptor::Boolean),
        FieldMapper::optional("contentStatus", ContentStatus::DESCRIPTOR),
    ],
};

impl Model for ReplyView {
    fn mapper() -> &'static CompositeMapper {
        &REPLY_VIEW
    }
}

// ============================================================================
// Users
// ============================================================================

/// A user's full profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileView {
    /// User handle
    pub user_handle: String,
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
    /// Photo url of the user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    /// Visibility of the user
    pub visibility: UserVisibility,
    /// Total topics posted by the user
    pub total_topics: i64,
    /// Total followers of the user
    pub total_followers: i64,
    /// Total users this user follows
    pub total_following: i64,
    /// Relationship of the querying user to this user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follower_status: Option<FollowerStatus>,
    /// Relationship of this user to the querying user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub following_status: Option<FollowerStatus>,
}

pub(crate) static USER_PROFILE_VIEW: CompositeMapper = CompositeMapper {
    class_name: "UserProfileView",
    serialized_name: "UserProfileView",
    fields: &[
        FieldMapper::required("userHandle", TypeDescriptor::String),
        FieldMapper::required("firstName", TypeDescriptor::String),
        FieldMapper::required("lastName", TypeDescriptor::String),
        FieldMapper::optional("bio", TypeDescriptor::String),
        FieldMapper::optional("photoHandle", TypeDescriptor::String),
        FieldMapper::optional("photoUrl", TypeDescriptor::String),
        FieldMapper::required("visibility", UserVisibility::DESCRIPTOR),
        FieldMapper::required("totalTopics", TypeDescriptor::Integer),
        FieldMapper::required("totalFollowers", TypeDescriptor::Integer),
        FieldMapper::required("totalFollowing", TypeDescriptor::Integer),
        FieldMapper::optional("followerStatus", FollowerStatus::DESCRIPTOR),
        FieldMapper::optional("followingStatus", FollowerStatus::DESCRIPTOR),
    ],
};

impl Model for UserProfileView {
    fn mapper() -> &'static CompositeMapper {
        &USER_PROFILE_VIEW
    }
}

/// A third-party account linked to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedAccountView {
    /// Identity provider type
    pub identity_provider: IdentityProvider,
    /// Account id at the identity provider
    pub account_id: String,
}

pub(crate) static LINKED_ACCOUNT_VIEW: CompositeMapper = CompositeMapper {
    class_name: "LinkedAccountView",
    serialized_name: "LinkedAccountView",
    fields: &[
        FieldMapper::required("identityProvider", IdentityProvider::DESCRIPTOR),
        FieldMapper::required("accountId", TypeDescriptor::String),
    ],
};

impl Model for LinkedAccountView {
    fn mapper() -> &'static CompositeMapper {
        &LINKED_ACCOUNT_VIEW
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::ValidationError;
    use serde_json::json;

    fn user_json(handle: &str) -> serde_json::Value {
        json!({
            "userHandle": handle,
            "firstName": "First",
            "lastName": "Last",
            "visibility": "Public",
            "followerStatus": "None",
        })
    }

    #[test]
    fn test_reply_view_from_wire() {
        let reply = ReplyView::from_wire(&json!({
            "replyHandle": "r1",
            "commentHandle": "c1",
            "topicHandle": "t1",
            "createdTime": "2016-10-19T08:30:00Z",
            "user": user_json("u1"),
            "text": "hi",
            "totalLikes": 2,
            "liked": false,
            "contentStatus": "Active",
        }))
        .unwrap();

        assert_eq!(reply.reply_handle, "r1");
        assert_eq!(reply.user.user_handle, "u1");
        assert_eq!(reply.language, None);
        assert_eq!(reply.content_status, Some(ContentStatus::Active));
    }

    #[test]
    fn test_reply_view_requires_user() {
        let err = ReplyView::from_wire(&json!({
            "replyHandle": "r1",
            "commentHandle": "c1",
            "topicHandle": "t1",
            "createdTime": "2016-10-19T08:30:00Z",
            "text": "hi",
            "totalLikes": 2,
            "liked": false,
        }))
        .unwrap_err();

        assert_eq!(
            err.validation(),
            Some(&ValidationError::MissingRequired {
                path: "user".to_string()
            })
        );
    }

    #[test]
    fn test_topic_view_published_by_app_has_no_user() {
        let topic = TopicView::from_wire(&json!({
            "topicHandle": "t1",
            "createdTime": "2016-10-19T08:30:00Z",
            "lastUpdatedTime": "2016-10-19T09:30:00Z",
            "publisherType": "App",
            "text": "news",
            "totalLikes": 0,
            "totalComments": 0,
            "liked": false,
            "pinned": true,
            "app": {"appHandle": "a1", "name": "Demo"},
        }))
        .unwrap();

        assert!(topic.user.is_none());
        assert!(topic.pinned);
        assert_eq!(topic.app.map(|a| a.app_handle), Some("a1".to_string()));
    }

    #[test]
    fn test_activity_view_actor_error_has_index() {
        let mut bad_actor = user_json("u2");
        bad_actor["followerStatus"] = json!("Stalking");

        let err = ActivityView::from_wire(&json!({
            "activityHandle": "a1",
            "createdTime": "2016-10-19T08:30:00Z",
            "activityType": "Like",
            "actorUsers": [user_json("u1"), bad_actor],
            "totalActions": 2,
            "unread": true,
        }))
        .unwrap_err();

        assert_eq!(
            err.validation().map(ValidationError::path),
            Some("actorUsers[1].followerStatus")
        );
    }

    #[test]
    fn test_linked_account_view_round_trip() {
        let account = LinkedAccountView {
            identity_provider: IdentityProvider::Google,
            account_id: "g-42".to_string(),
        };
        let wire = account.to_wire().unwrap();
        assert_eq!(wire, json!({"identityProvider": "Google", "accountId": "g-42"}));
        assert_eq!(LinkedAccountView::from_wire(&wire).unwrap(), account);
    }
}
