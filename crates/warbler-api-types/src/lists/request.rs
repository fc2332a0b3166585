use crate::error::QueryError;
use crate::fields::{self, Expansion, TweetField, UserField};
#[cfg(feature = "server")]
use serde::Deserialize;
#[cfg(feature = "client")]
use serde::Serialize;

/// Largest page the list-members endpoint will return.
pub const MAX_RESULTS_LIMIT: u32 = 100;

/// Query parameters of `GET /2/lists/:id/members`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ListMembersQuery {
    /// Page size, 1 to 100. The API defaults to 100 when absent.
    pub max_results: Option<u32>,
    /// `next_token` or `previous_token` taken from the meta of an earlier page.
    pub pagination_token: Option<String>,
    pub expansions: Vec<Expansion>,
    pub user_fields: Vec<UserField>,
    pub tweet_fields: Vec<TweetField>,
}

impl ListMembersQuery {
    pub fn validate(&self) -> Result<(), QueryError> {
        if let Some(max) = self.max_results {
            if !(1..=MAX_RESULTS_LIMIT).contains(&max) {
                return Err(QueryError::MaxResultsOutOfRange(max));
            }
        }

        if self.pagination_token.as_deref().is_some_and(str::is_empty) {
            return Err(QueryError::EmptyPaginationToken);
        }

        Ok(())
    }

    /// Key/value pairs for the query string. Empty selections are left out.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if let Some(max) = self.max_results {
            pairs.push(("max_results", max.to_string()));
        }

        if let Some(token) = &self.pagination_token {
            pairs.push(("pagination_token", token.clone()));
        }

        if !self.expansions.is_empty() {
            pairs.push(("expansions", fields::join(&self.expansions)));
        }

        if !self.user_fields.is_empty() {
            pairs.push(("user.fields", fields::join(&self.user_fields)));
        }

        if !self.tweet_fields.is_empty() {
            pairs.push(("tweet.fields", fields::join(&self.tweet_fields)));
        }

        pairs
    }
}

/// Body of `POST /2/lists/:id/members`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(Serialize))]
#[cfg_attr(feature = "server", derive(Deserialize))]
pub struct ListMemberAdd {
    /// The user to add to the list.
    pub user_id: String,
}

/// List and user ids are decimal numbers. Anything else would change the request path.
pub fn validate_id(id: &str) -> Result<(), QueryError> {
    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(QueryError::InvalidId(id.to_owned()));
    }
    Ok(())
}
