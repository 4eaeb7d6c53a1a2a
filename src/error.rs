//! Error types for ai-commits modules using thiserror.

use thiserror::Error;

/// Errors from git operations.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("git executable not found. Install git and make sure it is on your PATH")]
    NotInstalled,

    #[error("Not a git repository (or any of the parent directories): {0}")]
    NotARepository(#[source] git2::Error),

    #[error("Repository has no working tree (bare repository)")]
    BareRepository,

    #[error("Failed to run git {operation}: {source}")]
    SpawnFailed {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("git {operation} failed: {stderr}")]
    CommandFailed { operation: String, stderr: String },

    #[error("no staged files")]
    NoStagedFiles,

    #[error("no unstaged files")]
    NoUnstagedFiles,

    #[error("commit message cannot be empty")]
    EmptyCommitMessage,
}

/// Errors from the Gemini API.
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Error making request: {0}")]
    Request(#[source] reqwest::Error),

    #[error("API request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Error decoding response: {0}")]
    InvalidResponse(String),

    #[error("No response from Gemini API")]
    EmptyResponse,

    #[error("All retry attempts failed: {0}")]
    RetriesExhausted(#[source] Box<GeminiError>),
}

impl GeminiError {
    /// Whether another attempt could plausibly succeed.
    ///
    /// Transport failures, rate limiting (429) and server errors (5xx) are
    /// transient. Everything else is returned to the caller immediately.
    pub fn is_transient(&self) -> bool {
        match self {
            GeminiError::Request(_) => true,
            GeminiError::Status { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

/// Errors from the terminal interaction layer.
#[derive(Error, Debug)]
pub enum UiError {
    #[error("Failed to read input: {0}")]
    Prompt(#[source] dialoguer::Error),

    #[error("Failed to render progress indicator: {0}")]
    Template(String),

    #[error("Interrupted")]
    Interrupted,
}

/// Errors from configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY environment variable is not set. Please set it and try again.")]
    MissingApiKey,
}

/// Errors from the commit-message pipeline.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("No files are staged for commit")]
    NothingStaged { unstaged: Vec<String> },

    #[error("getting unstaged files: {0}")]
    UnstagedLookup(#[source] GitError),

    #[error("getting diff: {0}")]
    Diff(#[source] GitError),

    #[error("calling AI: {0}")]
    Generate(#[from] GeminiError),

    #[error("The model returned an empty commit message")]
    EmptyMessage,

    #[error("creating commit: {0}")]
    Commit(#[source] GitError),

    #[error(transparent)]
    Git(#[from] GitError),

    #[error(transparent)]
    Ui(#[from] UiError),
}
