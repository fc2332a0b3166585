use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("max_results must be between 1 and {max}, got {0}", max = crate::lists::request::MAX_RESULTS_LIMIT)]
    MaxResultsOutOfRange(u32),
    #[error("Pagination token must not be empty")]
    EmptyPaginationToken,
    #[error("List or user id `{0}` is not a numeric id")]
    InvalidId(String),
}

/// A field selector name that the API does not know about.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind} `{value}`")]
pub struct FieldParseError {
    pub kind: &'static str,
    pub value: String,
}
