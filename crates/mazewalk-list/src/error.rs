use thiserror::Error;

/// Errors raised by the linked containers.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// The operation needs at least one element.
    #[error("collection is empty")]
    EmptyCollection,

    /// Positions are 1-indexed; zero is rejected.
    #[error("position {position} is invalid: positions start at 1")]
    InvalidArgument { position: usize },

    #[error("position {position} is beyond the end of the list (length {len})")]
    OutOfRange { position: usize, len: usize },

    /// No element compared equal to the requested value.
    #[error("element not found in list")]
    NotFound,
}
