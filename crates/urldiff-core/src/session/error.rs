//! Error types for the comparison session.

use thiserror::Error;

/// Rejected session actions. None of these change the current URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Candidate is empty or whitespace only.
    #[error("Please enter a new URL.")]
    EmptyCandidate,
    /// Candidate equals the current URL exactly.
    #[error("The new URL is the same as the current URL. No changes to display.")]
    IdenticalToCurrent,
    /// `apply` called while no comparison is shown.
    #[error("no comparison is shown; compare a new URL first")]
    NothingToApply,
}
