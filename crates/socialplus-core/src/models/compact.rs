//! Compact views: abbreviated projections embedded in lists and feeds.

use serde::{Deserialize, Serialize};

use super::enums::{BlobType, ContentType, FollowerStatus, PlatformType, UserVisibility};
use crate::blob::BlobHandle;
use crate::mapper::{CompositeMapper, FieldMapper, TypeDescriptor};
use crate::model::Model;

/// Summary of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCompactView {
    /// User handle
    pub user_handle: String,
    /// First name of the user
    pub first_name: String,
    /// Last name of the user
    pub last_name: String,
    /// Photo handle of the user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_handle: Option<BlobHandle>,
    /// Photo url of the user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    /// Visibility of the user
    pub visibility: UserVisibility,
    /// Relationship of the querying user to this user
    pub follower_status: FollowerStatus,
}

pub(crate) static USER_COMPACT_VIEW: CompositeMapper = CompositeMapper {
    class_name: "UserCompactView",
    serialized_name: "UserCompactView",
    fields: &[
        FieldMapper::required("userHandle", TypeDescriptor::String),
        FieldMapper::required("firstName", TypeDescriptor::String),
        FieldMapper::required("lastName", TypeDescriptor::String),
        FieldMapper::optional("photoHandle", TypeDescriptor::String),
        FieldMapper::optional("photoUrl", TypeDescriptor::String),
        FieldMapper::required("visibility", UserVisibility::DESCRIPTOR),
        FieldMapper::required("followerStatus", FollowerStatus::DESCRIPTOR),
    ],
};

impl Model for UserCompactView {
    fn mapper() -> &'static CompositeMapper {
        &USER_COMPACT_VIEW
    }
}

/// Summary of a topic, comment or reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentCompactView {
    /// Content type
    pub content_type: ContentType,
    /// Content handle
    pub content_handle: String,
    /// Parent handle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_handle: Option<String>,
    /// Root handle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_handle: Option<String>,
    /// Content text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Content blob type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blob_type: Option<BlobType>,
    /// Content blob handle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blob_handle: Option<BlobHandle>,
    /// Content blob url
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blob_url: Option<String>,
}

pub(crate) static CONTENT_COMPACT_VIEW: CompositeMapper = CompositeMapper {
    class_name: "ContentCompactView",
    serialized_name: "ContentCompactView",
    fields: &[
        FieldMapper::required("contentType", ContentType::DESCRIPTOR),
        FieldMapper::required("contentHandle", TypeDescriptor::String),
        FieldMapper::optional("parentHandle", TypeDescriptor::String),
        FieldMapper::optional("rootHandle", TypeDescriptor::String),
        FieldMapper::optional("text", TypeDescriptor::String),
        FieldMapper::optional("blobType", BlobType::DESCRIPTOR),
        FieldMapper::optional("blobHandle", TypeDescriptor::String),
        FieldMapper::optional("blobUrl", TypeDescriptor::String),
    ],
};

impl Model for ContentCompactView {
    fn mapper() -> &'static CompositeMapper {
        &CONTENT_COMPACT_VIEW
    }
}

/// Summary of a SocialPlus app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppCompactView {
    /// App handle
    pub app_handle: String,
    /// App name
    pub name: String,
    /// App icon handle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_handle: Option<BlobHandle>,
    /// App icon url
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    /// Platform type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_type: Option<PlatformType>,
    /// App deep link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deep_link: Option<String>,
    /// App store link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_link: Option<String>,
}

pub(crate) static APP_COMPACT_VIEW: CompositeMapper = CompositeMapper {
    class_name: "AppCompactView",
    serialized_name: "AppCompactView",
    fields: &[
        FieldMapper::required("appHandle", TypeDescriptor::String),
        FieldMapper::required("name", TypeDescriptor::String),
        FieldMapper::optional("iconHandle", TypeDescriptor::String),
        FieldMapper::optional("iconUrl", TypeDescriptor::String),
        FieldMapper::optional("platformType", PlatformType::DESCRIPTOR),
        FieldMapper::optional("deepLink", TypeDescriptor::String),
        FieldMapper::optional("storeLink", TypeDescriptor::String),
    ],
};

impl Model for AppCompactView {
    fn mapper() -> &'static CompositeMapper {
        &APP_COMPACT_VIEW
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_compact_view_from_wire() {
        let user = UserCompactView::from_wire(&json!({
            "userHandle": "u1",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "photoHandle": "ph1",
            "visibility": "Public",
            "followerStatus": "Follow",
        }))
        .unwrap();

        assert_eq!(user.user_handle, "u1");
        assert_eq!(user.photo_handle, Some(BlobHandle::new("ph1")));
        assert_eq!(user.photo_url, None);
        assert_eq!(user.follower_status, FollowerStatus::Follow);
    }

    #[test]
    fn test_optional_fields_are_omitted_on_the_wire() {
        let app = AppCompactView {
            app_handle: "a1".to_string(),
            name: "Demo".to_string(),
            icon_handle: None,
            icon_url: None,
            platform_type: Some(PlatformType::Ios),
            deep_link: None,
            store_link: None,
        };
        assert_eq!(
            app.to_wire().unwrap(),
            json!({"appHandle": "a1", "name": "Demo", "platformType": "IOS"})
        );
    }

    #[test]
    fn test_content_compact_view_rejects_bad_blob_type() {
        let err = ContentCompactView::from_wire(&json!({
            "contentType": "Topic",
            "contentHandle": "t1",
            "blobType": "Audio",
        }))
        .unwrap_err();
        assert_eq!(err.validation().map(|e| e.path()), Some("blobType"));
    }
}
