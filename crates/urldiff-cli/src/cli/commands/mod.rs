//! CLI command handlers. Each command is in its own file.

mod compare;
mod completions;
mod interactive;
mod segments;

pub use compare::run_compare;
pub use completions::{run_completions, run_man};
pub use interactive::run_interactive;
pub use segments::run_segments;
