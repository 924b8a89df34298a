//! Current-vs-candidate comparison session.
//!
//! Holds the state a front end needs around [`compare`]: the URL currently in
//! effect, the candidate being edited, and whether a comparison is shown.

mod error;

pub use error::SessionError;

use crate::compare::{compare, ComparisonRow};

/// Default URL a new session starts from.
pub const DEFAULT_INITIAL_URL: &str = "https://example.com/old-path";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffSession {
    current_url: String,
    candidate_url: String,
    showing_diff: bool,
}

impl Default for DiffSession {
    fn default() -> Self {
        Self::new(DEFAULT_INITIAL_URL)
    }
}

impl DiffSession {
    pub fn new(current_url: impl Into<String>) -> Self {
        Self {
            current_url: current_url.into(),
            candidate_url: String::new(),
            showing_diff: false,
        }
    }

    pub fn current_url(&self) -> &str {
        &self.current_url
    }

    pub fn candidate_url(&self) -> &str {
        &self.candidate_url
    }

    pub fn is_showing_diff(&self) -> bool {
        self.showing_diff
    }

    /// Replaces the candidate text. Does not touch the shown/hidden state.
    pub fn set_candidate(&mut self, candidate: impl Into<String>) {
        self.candidate_url = candidate.into();
    }

    /// Requests a comparison of the candidate against the current URL.
    ///
    /// An empty candidate is rejected without any state change. A candidate
    /// identical to the current URL hides any shown comparison.
    pub fn submit(&mut self) -> Result<Vec<ComparisonRow>, SessionError> {
        if self.candidate_url.trim().is_empty() {
            return Err(SessionError::EmptyCandidate);
        }
        if self.candidate_url == self.current_url {
            self.showing_diff = false;
            return Err(SessionError::IdenticalToCurrent);
        }
        self.showing_diff = true;
        tracing::debug!(
            current = %self.current_url,
            candidate = %self.candidate_url,
            "showing comparison"
        );
        Ok(self.rows())
    }

    /// Rows of the shown comparison; empty when nothing is shown.
    pub fn rows(&self) -> Vec<ComparisonRow> {
        if self.showing_diff && !self.candidate_url.trim().is_empty() {
            compare(&self.current_url, &self.candidate_url)
        } else {
            Vec::new()
        }
    }

    /// Makes the candidate the new current URL and returns it.
    pub fn apply(&mut self) -> Result<&str, SessionError> {
        if !self.showing_diff {
            return Err(SessionError::NothingToApply);
        }
        self.current_url = std::mem::take(&mut self.candidate_url);
        self.showing_diff = false;
        tracing::info!(current = %self.current_url, "applied new URL");
        Ok(&self.current_url)
    }

    /// Discards the candidate and hides the comparison.
    pub fn cancel(&mut self) {
        self.candidate_url.clear();
        self.showing_diff = false;
    }
}

#[cfg(test)]
mod tests;
