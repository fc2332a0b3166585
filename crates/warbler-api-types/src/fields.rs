//! Selectors for the `expansions`, `user.fields` and `tweet.fields` query parameters.

use crate::error::FieldParseError;
use std::fmt;
use std::str::FromStr;

macro_rules! field_selector {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($variant:ident => $wire:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            /// The name used in the query string.
            #[must_use]
            pub fn as_str(self) -> &'static str {
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
            type Err = FieldParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($wire => Ok(Self::$variant),)+
                    other => Err(FieldParseError {
                        kind: $kind,
                        value: other.to_owned(),
                    }),
                }
            }
        }
    };
}

field_selector! {
    /// Objects the API can attach under `includes` of a list-members response.
    Expansion, "expansion" {
        PinnedTweetId => "pinned_tweet_id",
    }
}

field_selector! {
    /// Optional user fields, requested with `user.fields`.
    UserField, "user field" {
        CreatedAt => "created_at",
        Description => "description",
        Entities => "entities",
        Id => "id",
        Location => "location",
        MostRecentTweetId => "most_recent_tweet_id",
        Name => "name",
        PinnedTweetId => "pinned_tweet_id",
        ProfileImageUrl => "profile_image_url",
        Protected => "protected",
        PublicMetrics => "public_metrics",
        Url => "url",
        Username => "username",
        Verified => "verified",
        VerifiedType => "verified_type",
        Withheld => "withheld",
    }
}

field_selector! {
    /// Optional tweet fields, requested with `tweet.fields`. Only affects expanded tweets.
    TweetField, "tweet field" {
        Attachments => "attachments",
        AuthorId => "author_id",
        ContextAnnotations => "context_annotations",
        ConversationId => "conversation_id",
        CreatedAt => "created_at",
        EditControls => "edit_controls",
        Entities => "entities",
        Geo => "geo",
        Id => "id",
        InReplyToUserId => "in_reply_to_user_id",
        Lang => "lang",
        PossiblySensitive => "possibly_sensitive",
        PublicMetrics => "public_metrics",
        ReferencedTweets => "referenced_tweets",
        ReplySettings => "reply_settings",
        Source => "source",
        Text => "text",
        Withheld => "withheld",
    }
}

/// Joins selectors into the comma separated form the API expects.
pub(crate) fn join<T: Copy + fmt::Display>(fields: &[T]) -> String {
    fields
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
