//! Paged list responses.

use serde::{Deserialize, Serialize};

use super::compact::UserCompactView;
use super::views::{ActivityView, CommentView, ReplyView, TopicView, UserProfileView};
use crate::mapper::{CompositeMapper, FieldMapper, TypeDescriptor};
use crate::model::Model;

/// One page of a feed plus the cursor for the next page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedResponse<T> {
    /// Items on this page, in feed order
    pub data: Vec<T>,
    /// Cursor for the next page
    pub cursor: String,
}

impl<T> FeedResponse<T> {
    /// Whether this page holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Cursor to pass back for the next page, if the service returned one.
    #[must_use]
    pub fn next_cursor(&self) -> Option<&str> {
        if self.cursor.is_empty() {
            None
        } else {
            Some(&self.cursor)
        }
    }
}

/// A model that appears as the element of a feed response.
pub trait FeedItem: Model {
    /// Mapper for `FeedResponse[Self]`.
    fn feed_mapper() -> &'static CompositeMapper;
}

impl<T: FeedItem> Model for FeedResponse<T> {
    fn mapper() -> &'static CompositeMapper {
        T::feed_mapper()
    }
}

macro_rules! feed_response {
    ($item:ty, $static_name:ident, $element:literal) => {
        pub(crate) static $static_name: CompositeMapper = CompositeMapper {
            class_name: concat!("FeedResponse", $element),
            serialized_name: concat!("FeedResponse[", $element, "]"),
            fields: &[
                FieldMapper::required(
                    "data",
                    TypeDescriptor::Sequence(&TypeDescriptor::Composite($element)),
                ),
                FieldMapper::required("cursor", TypeDescriptor::String),
            ],
        };

        impl FeedItem for $item {
            fn feed_mapper() -> &'static CompositeMapper {
                &$static_name
            }
        }
    };
}

feed_response!(ActivityView, FEED_RESPONSE_ACTIVITY_VIEW, "ActivityView");
feed_response!(TopicView, FEED_RESPONSE_TOPIC_VIEW, "TopicView");
feed_response!(CommentView, FEED_RESPONSE_COMMENT_VIEW, "CommentView");
feed_response!(ReplyView, FEED_RESPONSE_REPLY_VIEW, "ReplyView");
feed_response!(UserCompactView, FEED_RESPONSE_USER_COMPACT_VIEW, "UserCompactView");
feed_response!(UserProfileView, FEED_RESPONSE_USER_PROFILE_VIEW, "UserProfileView");
