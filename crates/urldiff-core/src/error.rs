//! Error type for URL comparison.

use std::fmt;
use thiserror::Error;

/// Which of the two compared inputs an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlSide {
    /// The first ("current") URL.
    First,
    /// The second ("candidate") URL.
    Second,
}

impl fmt::Display for UrlSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrlSide::First => write!(f, "first"),
            UrlSide::Second => write!(f, "second"),
        }
    }
}

/// Failure of a whole comparison. There is no partial result.
#[derive(Debug, Error)]
pub enum CompareError {
    /// One of the inputs is not a well-formed absolute URL.
    #[error("{side} URL {input:?} is not a valid absolute URL: {source}")]
    UnparsableUrl {
        side: UrlSide,
        input: String,
        #[source]
        source: url::ParseError,
    },
}

impl CompareError {
    pub fn side(&self) -> UrlSide {
        match self {
            CompareError::UnparsableUrl { side, .. } => *side,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_side_and_input() {
        let err = CompareError::UnparsableUrl {
            side: UrlSide::Second,
            input: "bad".to_string(),
            source: url::ParseError::RelativeUrlWithoutBase,
        };
        let msg = err.to_string();
        assert!(msg.starts_with("second URL \"bad\""), "{msg}");
        assert!(msg.contains("relative URL without a base"), "{msg}");
        assert_eq!(err.side(), UrlSide::Second);
    }
}
