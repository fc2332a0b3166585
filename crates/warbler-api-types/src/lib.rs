//! Wire types for the list-members endpoints of the Twitter v2 API.
//!
//! Serde support is opt-in: enable `client` to decode responses and encode
//! requests, or `server` for the opposite direction.

#[cfg(feature = "client")]
mod de;

pub mod error;

pub mod fields;

pub mod lists;

pub mod partial;

pub mod resources;

pub use error::{FieldParseError, QueryError};
pub use partial::PartialErrorCheck;
