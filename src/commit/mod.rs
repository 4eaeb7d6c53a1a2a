//! Diff budgeting, prompt construction, and message cleanup.

pub mod diff;
pub mod message;
pub mod prompt;

pub use diff::{DiffSnapshot, truncate_diff};
pub use message::clean_message;
pub use prompt::{FAST_MODE_EXPLANATION, build_prompt};
