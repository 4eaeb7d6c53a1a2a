//! Shared fakes for unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::GitError;
use crate::git::GitRunner;

/// Fake git that answers from a canned table and records every call.
///
/// Responses are keyed by the space-joined argument list, except that every
/// `commit` invocation shares the key `"commit"`. Unknown commands succeed
/// with empty stdout.
#[derive(Default)]
pub struct FakeGit {
    responses: HashMap<String, Result<String, String>>,
    calls: Mutex<Vec<Vec<String>>>,
}

impl FakeGit {
    pub fn with(mut self, args: &str, stdout: &str) -> Self {
        self.responses
            .insert(args.to_string(), Ok(stdout.to_string()));
        self
    }

    pub fn failing(mut self, args: &str, stderr: &str) -> Self {
        self.responses
            .insert(args.to_string(), Err(stderr.to_string()));
        self
    }

    /// Fake with the given staged files and staged diff.
    pub fn staged(files: &[&str], diff: &str) -> Self {
        let listing: String = files.iter().map(|f| format!("{f}\n")).collect();
        Self::default()
            .with("diff --cached --name-only", &listing)
            .with("diff --cached --no-color --no-ext-diff", diff)
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }

    /// Messages passed to `git commit -m`.
    pub fn commit_messages(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|c| c.first().map(String::as_str) == Some("commit"))
            .filter_map(|c| c.get(2).cloned())
            .collect()
    }
}

impl GitRunner for FakeGit {
    fn run(&self, args: &[&str], operation: &str) -> Result<String, GitError> {
        self.calls
            .lock()
            .unwrap()
            .push(args.iter().map(|a| a.to_string()).collect());

        let key = if args.first() == Some(&"commit") {
            "commit".to_string()
        } else {
            args.join(" ")
        };

        match self.responses.get(&key) {
            Some(Ok(out)) => Ok(out.clone()),
            Some(Err(stderr)) => Err(GitError::CommandFailed {
                operation: operation.to_string(),
                stderr: stderr.clone(),
            }),
            None => Ok(String::new()),
        }
    }
}
