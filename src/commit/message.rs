//! Normalising raw model output into a commit message.

use std::sync::LazyLock;

use regex_lite::Regex;

/// A single fenced block covering the whole response, with optional info string.
static FENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^```[A-Za-z0-9_+-]*[ \t]*\r?\n(.*?)\r?\n?```$").expect("Invalid regex")
});

/// Clean up a model response so it can be used as a commit message.
///
/// Models sometimes wrap the answer in a markdown fence or in quotes even
/// when told not to. This strips surrounding whitespace, one enclosing code
/// fence, and one pair of matching wrapping quotes/backticks when that quote
/// character does not also occur inside. The result may be empty; callers
/// reject empty messages before committing.
pub fn clean_message(raw: &str) -> String {
    let mut text = raw.trim();

    if let Some(caps) = FENCE_RE.captures(text)
        && let Some(inner) = caps.get(1)
    {
        text = inner.as_str().trim();
    }

    for quote in ['"', '\'', '`'] {
        if text.len() >= 2 && text.starts_with(quote) && text.ends_with(quote) {
            let inner = &text[1..text.len() - 1];
            // `"a" renamed to "b"` is not wrapped.
            if !inner.contains(quote) {
                text = inner.trim();
            }
            break;
        }
    }

    text.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_message_is_trimmed() {
        assert_eq!(clean_message("  feat: add login\n"), "feat: add login");
    }

    #[test]
    fn test_fenced_message_is_unwrapped() {
        assert_eq!(clean_message("```\nfix: typo in readme\n```"), "fix: typo in readme");
        assert_eq!(
            clean_message("```text\nchore: bump deps\n```\n"),
            "chore: bump deps"
        );
    }

    #[test]
    fn test_quoted_message_is_unwrapped() {
        assert_eq!(clean_message("\"feat: add api\""), "feat: add api");
        assert_eq!(clean_message("`fix: null check`"), "fix: null check");
    }

    #[test]
    fn test_multiline_body_is_preserved() {
        let raw = "feat: add cache\n\nspeeds up repeated lookups";
        assert_eq!(clean_message(raw), raw);
    }

    #[test]
    fn test_inner_quotes_are_kept() {
        assert_eq!(
            clean_message("fix: handle \"quoted\" names"),
            "fix: handle \"quoted\" names"
        );
    }

    #[test]
    fn test_quotes_at_both_ends_of_unwrapped_text_are_kept() {
        assert_eq!(
            clean_message("\"a\" renamed to \"b\""),
            "\"a\" renamed to \"b\""
        );
        assert_eq!(
            clean_message("`foo` replaced by `bar`"),
            "`foo` replaced by `bar`"
        );
    }

    #[test]
    fn test_whitespace_only_becomes_empty() {
        assert_eq!(clean_message(" \n\t "), "");
        assert_eq!(clean_message("\"\""), "");
        assert_eq!(clean_message("```\n```"), "");
    }

    #[test]
    fn test_single_quote_char_is_left_alone() {
        assert_eq!(clean_message("\""), "\"");
    }
}
