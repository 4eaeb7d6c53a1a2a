//! Staged/unstaged file listing, staged diff, and commit creation.

use tracing::debug;

use crate::error::GitError;

use super::runner::GitRunner;

/// Split `git diff --name-only` output into file paths.
///
/// Splits on newlines and drops blank entries, so trailing newlines and
/// `\r\n` endings do not produce empty paths.
pub fn split_file_list(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Files staged for the next commit.
///
/// Returns `GitError::NoStagedFiles` when the index matches HEAD.
pub fn staged_files<R: GitRunner + ?Sized>(git: &R) -> Result<Vec<String>, GitError> {
    let out = git.run(&["diff", "--cached", "--name-only"], "list staged files")?;
    let files = split_file_list(&out);
    if files.is_empty() {
        return Err(GitError::NoStagedFiles);
    }
    debug!("{} staged file(s)", files.len());
    Ok(files)
}

/// Tracked files with changes that are not staged.
///
/// Returns `GitError::NoUnstagedFiles` when the working tree matches the index.
pub fn unstaged_files<R: GitRunner + ?Sized>(git: &R) -> Result<Vec<String>, GitError> {
    let out = git.run(&["diff", "--name-only"], "list unstaged files")?;
    let files = split_file_list(&out);
    if files.is_empty() {
        return Err(GitError::NoUnstagedFiles);
    }
    Ok(files)
}

/// Unified diff of all staged changes.
///
/// Colour and external diff drivers from the user's config are disabled so
/// the output is always plain patch text.
pub fn staged_diff<R: GitRunner + ?Sized>(git: &R) -> Result<String, GitError> {
    let diff = git.run(
        &["diff", "--cached", "--no-color", "--no-ext-diff"],
        "diff",
    )?;
    debug!("Staged diff is {} bytes", diff.len());
    Ok(diff)
}

/// Create a commit from the index with the given message.
///
/// An empty (or whitespace-only) message is rejected before git is invoked.
pub fn commit<R: GitRunner + ?Sized>(git: &R, message: &str) -> Result<(), GitError> {
    if message.trim().is_empty() {
        return Err(GitError::EmptyCommitMessage);
    }
    git.run(&["commit", "-m", message], "commit")?;
    Ok(())
}
