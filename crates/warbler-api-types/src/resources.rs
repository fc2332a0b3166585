//! Resource objects shared by several endpoints.
//!
//! Apart from `id`, the API only returns the fields asked for through
//! `user.fields` and `tweet.fields`, so almost everything here is optional.

use chrono::{DateTime, Utc};
#[cfg(feature = "client")]
use serde::Deserialize;
#[cfg(feature = "server")]
use serde::Serialize;
use std::fmt;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(Deserialize))]
#[cfg_attr(feature = "server", derive(Serialize))]
pub struct User {
    /// Unique identifier of the user, a decimal number encoded as a string.
    pub id: String,
    /// Display name.
    #[cfg_attr(any(feature = "client", feature = "server"), serde(default))]
    #[cfg_attr(feature = "client", serde(deserialize_with = "crate::de::null_as_default"))]
    pub name: String,
    /// Handle, without the leading `@`.
    #[cfg_attr(any(feature = "client", feature = "server"), serde(default))]
    #[cfg_attr(feature = "client", serde(deserialize_with = "crate::de::null_as_default"))]
    pub username: String,
    #[cfg_attr(feature = "server", serde(skip_serializing_if = "Option::is_none"))]
    pub created_at: Option<DateTime<Utc>>,
    #[cfg_attr(feature = "server", serde(skip_serializing_if = "Option::is_none"))]
    pub description: Option<String>,
    #[cfg_attr(feature = "server", serde(skip_serializing_if = "Option::is_none"))]
    pub location: Option<String>,
    /// Id of the tweet pinned to the profile.
    ///
    /// Request the `pinned_tweet_id` expansion to get the tweet itself under `includes`.
    #[cfg_attr(feature = "server", serde(skip_serializing_if = "Option::is_none"))]
    pub pinned_tweet_id: Option<String>,
    #[cfg_attr(feature = "server", serde(skip_serializing_if = "Option::is_none"))]
    pub profile_image_url: Option<String>,
    /// Whether the user's tweets are only visible to approved followers.
    #[cfg_attr(feature = "server", serde(skip_serializing_if = "Option::is_none"))]
    pub protected: Option<bool>,
    #[cfg_attr(feature = "server", serde(skip_serializing_if = "Option::is_none"))]
    pub url: Option<String>,
    #[cfg_attr(feature = "server", serde(skip_serializing_if = "Option::is_none"))]
    pub verified: Option<bool>,
    #[cfg_attr(feature = "server", serde(skip_serializing_if = "Option::is_none"))]
    pub public_metrics: Option<UserPublicMetrics>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(Deserialize))]
#[cfg_attr(feature = "server", derive(Serialize))]
#[cfg_attr(any(feature = "client", feature = "server"), serde(default))]
pub struct UserPublicMetrics {
    pub followers_count: u64,
    pub following_count: u64,
    pub tweet_count: u64,
    pub listed_count: u64,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(Deserialize))]
#[cfg_attr(feature = "server", derive(Serialize))]
pub struct Tweet {
    /// Unique identifier of the tweet.
    pub id: String,
    #[cfg_attr(any(feature = "client", feature = "server"), serde(default))]
    #[cfg_attr(feature = "client", serde(deserialize_with = "crate::de::null_as_default"))]
    pub text: String,
    #[cfg_attr(feature = "server", serde(skip_serializing_if = "Option::is_none"))]
    pub author_id: Option<String>,
    #[cfg_attr(feature = "server", serde(skip_serializing_if = "Option::is_none"))]
    pub created_at: Option<DateTime<Utc>>,
    /// Id of the tweet that started the conversation this one belongs to.
    #[cfg_attr(feature = "server", serde(skip_serializing_if = "Option::is_none"))]
    pub conversation_id: Option<String>,
    /// BCP47 language tag, as detected by the platform.
    #[cfg_attr(feature = "server", serde(skip_serializing_if = "Option::is_none"))]
    pub lang: Option<String>,
    #[cfg_attr(feature = "server", serde(skip_serializing_if = "Option::is_none"))]
    pub public_metrics: Option<TweetPublicMetrics>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(Deserialize))]
#[cfg_attr(feature = "server", derive(Serialize))]
#[cfg_attr(any(feature = "client", feature = "server"), serde(default))]
pub struct TweetPublicMetrics {
    pub retweet_count: u64,
    pub reply_count: u64,
    pub like_count: u64,
    pub quote_count: u64,
}

/// One resource that failed to resolve in an otherwise successful response.
///
/// The API uses the problem-details layout here, but only a subset of the
/// members is ever filled in, and which subset depends on the failure.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(Deserialize))]
#[cfg_attr(feature = "server", derive(Serialize))]
pub struct PartialError {
    /// Short summary, e.g. "Not Found Error".
    #[cfg_attr(feature = "server", serde(skip_serializing_if = "Option::is_none"))]
    pub title: Option<String>,
    /// Human readable explanation specific to this occurrence.
    #[cfg_attr(feature = "server", serde(skip_serializing_if = "Option::is_none"))]
    pub detail: Option<String>,
    /// URI identifying the problem type.
    #[cfg_attr(any(feature = "client", feature = "server"), serde(rename = "type"))]
    #[cfg_attr(feature = "server", serde(skip_serializing_if = "Option::is_none"))]
    pub error_type: Option<String>,
    /// Kind of the resource that failed, e.g. "user" or "tweet".
    #[cfg_attr(feature = "server", serde(skip_serializing_if = "Option::is_none"))]
    pub resource_type: Option<String>,
    #[cfg_attr(feature = "server", serde(skip_serializing_if = "Option::is_none"))]
    pub resource_id: Option<String>,
    /// Request parameter that referenced the failed resource.
    #[cfg_attr(feature = "server", serde(skip_serializing_if = "Option::is_none"))]
    pub parameter: Option<String>,
    #[cfg_attr(feature = "server", serde(skip_serializing_if = "Option::is_none"))]
    pub value: Option<String>,
    /// Part of the response the error relates to, e.g. "includes".
    #[cfg_attr(feature = "server", serde(skip_serializing_if = "Option::is_none"))]
    pub section: Option<String>,
}

impl fmt::Display for PartialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.title.as_deref(), self.detail.as_deref()) {
            (Some(title), Some(detail)) => write!(f, "{title}: {detail}"),
            (Some(only), None) | (None, Some(only)) => f.write_str(only),
            (None, None) => match (self.resource_type.as_deref(), self.resource_id.as_deref()) {
                (Some(kind), Some(id)) => write!(f, "failed to resolve {kind} {id}"),
                _ => f.write_str("unspecified partial error"),
            },
        }
    }
}

/// Result metadata of a list-members page.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(Deserialize))]
#[cfg_attr(feature = "server", derive(Serialize))]
pub struct ListMembersGetMeta {
    /// Number of users in this page.
    #[cfg_attr(any(feature = "client", feature = "server"), serde(default))]
    #[cfg_attr(feature = "client", serde(deserialize_with = "crate::de::null_as_default"))]
    pub result_count: u32,
    /// Pass as `pagination_token` to get the next page. Absent on the last page.
    #[cfg_attr(feature = "server", serde(skip_serializing_if = "Option::is_none"))]
    pub next_token: Option<String>,
    #[cfg_attr(feature = "server", serde(skip_serializing_if = "Option::is_none"))]
    pub previous_token: Option<String>,
}
