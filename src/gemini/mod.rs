//! Gemini API access with retry.

pub mod client;
pub mod retry;

pub use client::{GeminiClient, MessageGenerator};
pub use retry::{RetryPolicy, retry_with_backoff};
