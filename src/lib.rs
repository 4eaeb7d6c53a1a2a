//! ai-commits - A CLI tool that writes commit messages for staged changes.
//!
//! # Overview
//!
//! ai-commits reads the staged diff from the current git working tree, asks
//! the user what they did, sends both to the Gemini API, and offers to commit
//! with the Conventional Commit message that comes back. In `--fast` mode it
//! skips every prompt and just prints the message.

pub mod app;
pub mod commit;
pub mod config;
pub mod error;
pub mod gemini;
pub mod git;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export commonly used types
pub use app::{Outcome, RunOptions, run};
pub use config::Config;
pub use error::{AppError, ConfigError, GeminiError, GitError, UiError};
pub use gemini::{GeminiClient, MessageGenerator, RetryPolicy};
pub use git::{GitRunner, SystemGit};
