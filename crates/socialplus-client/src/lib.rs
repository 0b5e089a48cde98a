#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod client;
mod config;
mod error;
mod http;
mod options;
mod request;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client and operation groups
pub use client::{
    Blobs, Builds, CommentLikes, CommentReplies, CommentReports, Comments,
    DefaultSocialPlusClient, Hashtags, Images, MyApps, MyAppFollowing, MyBlockedUsers,
    MyFollowers, MyFollowing, MyLikes, MyLinkedAccounts, MyNotifications, MyPendingUsers, MyPins,
    MyPushRegistrations, MyTopics, Replies, ReplyLikes, ReplyReports, RequestTokens, Search,
    Sessions, SocialPlusClient, TopicComments, TopicLikes, TopicReports, Topics, UserFollowers,
    UserFollowing, UserReports, UserTopics, Users,
};

// Configuration
pub use config::SocialPlusClientConfig;

// Errors
pub use error::{ClientError, ClientResult};

// Transport
pub use http::{
    ApiRequest, ApiResponse, HttpBackend, JSON_CONTENT_TYPE, Method, OCTET_STREAM, ReqwestBackend,
    RequestBody,
};

// Per-call options
pub use options::{CallOptions, Cursor, PageOptions};

// Models
pub use socialplus_core as models;

// Silence unused dev-dependency warnings
#[cfg(test)]
use mockall as _;
#[cfg(test)]
use tokio_test as _;
