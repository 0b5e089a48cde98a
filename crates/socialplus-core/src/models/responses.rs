//! Response bodies of write and lookup operations.

use serde::{Deserialize, Serialize};

use crate::blob::BlobHandle;
use crate::mapper::{CompositeMapper, FieldMapper, TypeDescriptor};
use crate::model::Model;

const STRINGS: TypeDescriptor = TypeDescriptor::Sequence(&TypeDescriptor::String);

/// Handle of an uploaded blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostBlobResponse {
    /// Blob handle
    pub blob_handle: BlobHandle,
}

pub(crate) static POST_BLOB_RESPONSE: CompositeMapper = CompositeMapper {
    class_name: "PostBlobResponse",
    serialized_name: "PostBlobResponse",
    fields: &[FieldMapper::required("blobHandle", TypeDescriptor::String)],
};

impl Model for PostBlobResponse {
    fn mapper() -> &'static CompositeMapper {
        &POST_BLOB_RESPONSE
    }
}

/// Handle of an uploaded image; append a resize suffix to address a tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostImageResponse {
    /// Blob handle of the image
    pub blob_handle: BlobHandle,
}

pub(crate) static POST_IMAGE_RESPONSE: CompositeMapper = CompositeMapper {
    class_name: "PostImageResponse",
    serialized_name: "PostImageResponse",
    fields: &[FieldMapper::required("blobHandle", TypeDescriptor::String)],
};

impl Model for PostImageResponse {
    fn mapper() -> &'static CompositeMapper {
        &POST_IMAGE_RESPONSE
    }
}

/// Handle of a created topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostTopicResponse {
    /// Topic handle
    pub topic_handle: String,
}

pub(crate) static POST_TOPIC_RESPONSE: CompositeMapper = CompositeMapper {
    class_name: "PostTopicResponse",
    serialized_name: "PostTopicResponse",
    fields: &[FieldMapper::required("topicHandle", TypeDescriptor::String)],
};

impl Model for PostTopicResponse {
    fn mapper() -> &'static CompositeMapper {
        &POST_TOPIC_RESPONSE
    }
}

/// Handle of a created comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostCommentResponse {
    /// Comment handle
    pub comment_handle: String,
}

pub(crate) static POST_COMMENT_RESPONSE: CompositeMapper = CompositeMapper {
    class_name: "PostCommentResponse",
    serialized_name: "PostCommentResponse",
    fields: &[FieldMapper::required("commentHandle", TypeDescriptor::String)],
};

impl Model for PostCommentResponse {
    fn mapper() -> &'static CompositeMapper {
        &POST_COMMENT_RESPONSE
    }
}

/// Handle of a created reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostReplyResponse {
    /// Reply handle
    pub reply_handle: String,
}

pub(crate) static POST_REPLY_RESPONSE: CompositeMapper = CompositeMapper {
    class_name: "PostReplyResponse",
    serialized_name: "PostReplyResponse",
    fields: &[FieldMapper::required("replyHandle", TypeDescriptor::String)],
};

impl Model for PostReplyResponse {
    fn mapper() -> &'static CompositeMapper {
        &POST_REPLY_RESPONSE
    }
}

/// Session created by signing in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSessionResponse {
    /// Session token; send as `Bearer <token>` on authenticated calls
    pub session_token: String,
    /// Handle of the signed-in user
    pub user_handle: String,
}

pub(crate) static POST_SESSION_RESPONSE: CompositeMapper = CompositeMapper {
    class_name: "PostSessionResponse",
    serialized_name: "PostSessionResponse",
    fields: &[
        FieldMapper::required("sessionToken", TypeDescriptor::String),
        FieldMapper::required("userHandle", TypeDescriptor::String),
    ],
};

impl Model for PostSessionResponse {
    fn mapper() -> &'static CompositeMapper {
        &POST_SESSION_RESPONSE
    }
}

/// User and session created by signing up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostUserResponse {
    /// Handle of the new user
    pub user_handle: String,
    /// Session token for the new user
    pub session_token: String,
}

pub(crate) static POST_USER_RESPONSE: CompositeMapper = CompositeMapper {
    class_name: "PostUserResponse",
    serialized_name: "PostUserResponse",
    fields: &[
        FieldMapper::required("userHandle", TypeDescriptor::String),
        FieldMapper::required("sessionToken", TypeDescriptor::String),
    ],
};

impl Model for PostUserResponse {
    fn mapper() -> &'static CompositeMapper {
        &POST_USER_RESPONSE
    }
}

/// Request token issued for a provider that uses request tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRequestTokenResponse {
    /// Request token
    pub request_token: String,
}

pub(crate) static GET_REQUEST_TOKEN_RESPONSE: CompositeMapper = CompositeMapper {
    class_name: "GetRequestTokenResponse",
    serialized_name: "GetRequestTokenResponse",
    fields: &[FieldMapper::required("requestToken", TypeDescriptor::String)],
};

impl Model for GetRequestTokenResponse {
    fn mapper() -> &'static CompositeMapper {
        &GET_REQUEST_TOKEN_RESPONSE
    }
}

/// A single counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountResponse {
    /// Count
    pub count: i64,
}

pub(crate) static COUNT_RESPONSE: CompositeMapper = CompositeMapper {
    class_name: "CountResponse",
    serialized_name: "CountResponse",
    fields: &[FieldMapper::required("count", TypeDescriptor::Integer)],
};

impl Model for CountResponse {
    fn mapper() -> &'static CompositeMapper {
        &COUNT_RESPONSE
    }
}

/// Build information of the running service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildsCurrentResponse {
    /// Date and time of the build
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_and_time: Option<String>,
    /// Commit hash the service was built from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit_hash: Option<String>,
    /// Host the service runs on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    /// Current API version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_api_version: Option<String>,
    /// All API versions served
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_api_all_versions: Option<Vec<String>>,
    /// Files that were modified when the build was made
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dirty_files: Option<Vec<String>>,
}

pub(crate) static BUILDS_CURRENT_RESPONSE: CompositeMapper = CompositeMapper {
    class_name: "BuildsCurrentResponse",
    serialized_name: "BuildsCurrentResponse",
    fields: &[
        FieldMapper::optional("dateAndTime", TypeDescriptor::String),
        FieldMapper::optional("commitHash", TypeDescriptor::String),
        FieldMapper::optional("hostname", TypeDescriptor::String),
        FieldMapper::optional("serviceApiVersion", TypeDescriptor::String),
        FieldMapper::optional("serviceApiAllVersions", STRINGS),
        FieldMapper::optional("dirtyFiles", STRINGS),
    ],
};

impl Model for BuildsCurrentResponse {
    fn mapper() -> &'static CompositeMapper {
        &BUILDS_CURRENT_RESPONSE
    }
}
