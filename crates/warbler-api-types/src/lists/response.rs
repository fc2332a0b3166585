use crate::partial::PartialErrorCheck;
use crate::resources::{ListMembersGetMeta, PartialError, Tweet, User};
#[cfg(feature = "client")]
use serde::Deserialize;
#[cfg(feature = "server")]
use serde::Serialize;

/// Response of `GET /2/lists/:id/members`.
///
/// `errors` is kept apart from `data`: a page can hold valid users and still
/// report expansions that failed to resolve.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(Deserialize))]
#[cfg_attr(feature = "server", derive(Serialize))]
pub struct ListMembersGetResponse {
    /// Members of the list, in the order the server returned them.
    #[cfg_attr(any(feature = "client", feature = "server"), serde(default))]
    #[cfg_attr(feature = "client", serde(deserialize_with = "crate::de::null_as_default"))]
    pub data: Vec<User>,
    #[cfg_attr(any(feature = "client", feature = "server"), serde(default))]
    #[cfg_attr(feature = "client", serde(deserialize_with = "crate::de::null_as_default"))]
    pub includes: ListMembersIncludes,
    #[cfg_attr(any(feature = "client", feature = "server"), serde(default))]
    #[cfg_attr(feature = "client", serde(deserialize_with = "crate::de::null_as_default"))]
    pub meta: ListMembersGetMeta,
    /// A missing key and an explicit `null` both decode to `None`.
    #[cfg_attr(feature = "server", serde(skip_serializing_if = "Option::is_none"))]
    pub errors: Option<Vec<PartialError>>,
}

/// Expanded objects attached to a list-members page.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(Deserialize))]
#[cfg_attr(feature = "server", derive(Serialize))]
pub struct ListMembersIncludes {
    /// Pinned tweets of the returned users. Not ordered like `data`.
    #[cfg_attr(any(feature = "client", feature = "server"), serde(default))]
    #[cfg_attr(feature = "client", serde(deserialize_with = "crate::de::null_as_default"))]
    pub tweets: Vec<Tweet>,
}

impl ListMembersIncludes {
    /// Finds the expanded tweet with the given id, e.g. a user's `pinned_tweet_id`.
    #[must_use]
    pub fn tweet(&self, id: &str) -> Option<&Tweet> {
        self.tweets.iter().find(|tweet| tweet.id == id)
    }
}

impl PartialErrorCheck for ListMembersGetResponse {
    fn has_partial_error(&self) -> bool {
        self.errors.as_ref().is_some_and(|errors| !errors.is_empty())
    }

    fn partial_errors(&self) -> &[PartialError] {
        self.errors.as_deref().unwrap_or_default()
    }
}

/// Membership state reported by the add and remove endpoints.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(Deserialize))]
#[cfg_attr(feature = "server", derive(Serialize))]
pub struct ListMembership {
    #[cfg_attr(any(feature = "client", feature = "server"), serde(default))]
    #[cfg_attr(feature = "client", serde(deserialize_with = "crate::de::null_as_default"))]
    pub is_member: bool,
}

/// Response of `POST /2/lists/:id/members`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(Deserialize))]
#[cfg_attr(feature = "server", derive(Serialize))]
pub struct ListMembersPostResponse {
    /// `is_member` is true once the user has been added.
    #[cfg_attr(any(feature = "client", feature = "server"), serde(default))]
    #[cfg_attr(feature = "client", serde(deserialize_with = "crate::de::null_as_default"))]
    pub data: ListMembership,
}

impl PartialErrorCheck for ListMembersPostResponse {
    fn has_partial_error(&self) -> bool {
        false
    }
}

/// Response of `DELETE /2/lists/:id/members/:user_id`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(Deserialize))]
#[cfg_attr(feature = "server", derive(Serialize))]
pub struct ListMembersDeleteResponse {
    /// `is_member` stays true only if the removal did not take effect.
    #[cfg_attr(any(feature = "client", feature = "server"), serde(default))]
    #[cfg_attr(feature = "client", serde(deserialize_with = "crate::de::null_as_default"))]
    pub data: ListMembership,
}

impl PartialErrorCheck for ListMembersDeleteResponse {
    fn has_partial_error(&self) -> bool {
        false
    }
}
