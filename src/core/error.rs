use thiserror::Error;

/// Rejected round input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarError {
    #[error("{0} is not a board number")]
    NumberOutOfRange(u32),
    #[error("{0} is not available")]
    NotAvailable(u32),
    #[error("{0} is selected more than once")]
    DuplicateCandidate(u32),
    #[error("no numbers in play add up to {0}")]
    UnreachableTarget(u32),
}
