pub mod config;
pub mod logging;

pub mod compare;
pub mod error;
pub mod segments;
pub mod session;

pub use compare::{compare, summarize, try_compare, ComparisonRow, ComparisonSummary};
pub use error::{CompareError, UrlSide};
pub use segments::url_segments;
pub use session::{DiffSession, SessionError};
