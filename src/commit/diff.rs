//! Character budget for the diff sent to the model.

use tracing::warn;

/// A staged diff, possibly cut down to fit the request budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffSnapshot {
    pub text: String,
    pub truncated: bool,
    /// Character count before truncation.
    pub original_chars: usize,
}

/// Limit `diff` to at most `max_chars` characters.
///
/// The cut always lands on a char boundary, so multi-byte UTF-8 content is
/// never split. A diff within budget is returned unchanged.
pub fn truncate_diff(diff: &str, max_chars: usize) -> DiffSnapshot {
    let original_chars = diff.chars().count();
    if original_chars <= max_chars {
        return DiffSnapshot {
            text: diff.to_string(),
            truncated: false,
            original_chars,
        };
    }

    let cut = diff
        .char_indices()
        .nth(max_chars)
        .map(|(idx, _)| idx)
        .unwrap_or(diff.len());

    warn!(
        "Diff has {} characters, truncating to {}",
        original_chars, max_chars
    );

    DiffSnapshot {
        text: diff[..cut].to_string(),
        truncated: true,
        original_chars,
    }
}
