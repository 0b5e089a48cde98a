//! Closed value sets used by model fields and operation parameters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::mapper::TypeDescriptor;

/// A string did not name any value of the target enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{value}' is not a valid {type_name}")]
pub struct ParseEnumError {
    /// Enum that was being parsed
    pub type_name: &'static str,
    /// The rejected input
    pub value: String,
}

/// Declares an enum whose variants serialize as fixed wire literals, together
/// with its literal table and mapper descriptor.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Wire literals, in declaration order.
            pub const VALUES: &'static [&'static str] = &[$($wire),+];

            /// Mapper descriptor for fields of this type.
            pub const DESCRIPTOR: TypeDescriptor = TypeDescriptor::Enum(Self::VALUES);

            /// The wire literal for this value.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case($wire) {
                        return Ok(Self::$variant);
                    }
                )+
                Err(ParseEnumError {
                    type_name: stringify!($name),
                    value: s.to_string(),
                })
            }
        }
    };
}

wire_enum! {
    /// What happened in an activity feed entry.
    pub enum ActivityType {
        Like => "Like",
        Comment => "Comment",
        Reply => "Reply",
        CommentPeer => "CommentPeer",
        ReplyPeer => "ReplyPeer",
        Following => "Following",
        FollowRequest => "FollowRequest",
        FollowAccept => "FollowAccept",
    }
}

wire_enum! {
    /// Kind of content item.
    pub enum ContentType {
        Unknown => "Unknown",
        Topic => "Topic",
        Comment => "Comment",
        Reply => "Reply",
    }
}

wire_enum! {
    /// Kind of blob attached to content.
    pub enum BlobType {
        Unknown => "Unknown",
        Image => "Image",
        Video => "Video",
        Custom => "Custom",
    }
}

wire_enum! {
    /// Whether a user's content is visible to non-followers.
    pub enum UserVisibility {
        Public => "Public",
        Private => "Private",
    }
}

wire_enum! {
    /// Relationship of the querying user to another user.
    pub enum FollowerStatus {
        None => "None",
        Follow => "Follow",
        Pending => "Pending",
        Blocked => "Blocked",
    }
}

wire_enum! {
    /// Moderation state of a content item.
    pub enum ContentStatus {
        Active => "Active",
        Banned => "Banned",
    }
}

wire_enum! {
    /// Client platform of an app or push registration.
    pub enum PlatformType {
        Windows => "Windows",
        Android => "Android",
        Ios => "IOS",
    }
}

wire_enum! {
    /// Third-party identity provider.
    pub enum IdentityProvider {
        Facebook => "Facebook",
        Microsoft => "Microsoft",
        Google => "Google",
        Twitter => "Twitter",
    }
}

wire_enum! {
    /// Who published a topic.
    pub enum PublisherType {
        User => "User",
        App => "App",
    }
}

wire_enum! {
    /// Reason given when reporting a user or content item.
    pub enum ReportReason {
        Spam => "Spam",
        Cyberbullying => "Cyberbullying",
        ChildEndangerment => "ChildEndangerment",
        Offensive => "Offensive",
        ContentInfringement => "ContentInfringement",
        Other => "Other",
    }
}

wire_enum! {
    /// Window used to rank popular topics.
    pub enum TimeRange {
        Today => "Today",
        ThisWeek => "ThisWeek",
        ThisMonth => "ThisMonth",
        AllTime => "AllTime",
    }
}

wire_enum! {
    /// Purpose of an uploaded image; decides which resize tiers exist.
    pub enum ImageType {
        UserPhoto => "UserPhoto",
        ContentBlob => "ContentBlob",
        AppIcon => "AppIcon",
    }
}
