use crate::resources::PartialError;

/// Detection of partial failures reported inside a successful response.
///
/// Some endpoints answer with a success status and an `errors` array next to
/// `data`, one entry per resource that could not be resolved. Every response
/// shape implements this trait, so the same post-decode check works whichever
/// endpoint produced the value. Shapes without an `errors` field always report
/// `false`.
pub trait PartialErrorCheck {
    /// Whether the response carries at least one partial error.
    fn has_partial_error(&self) -> bool;

    /// The partial errors carried by the response, in server order.
    fn partial_errors(&self) -> &[PartialError] {
        &[]
    }
}
