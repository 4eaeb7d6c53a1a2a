//! The commit-message pipeline: git state → prompt → API → confirm → commit.

use tracing::{debug, info};

use crate::commit::{FAST_MODE_EXPLANATION, build_prompt, clean_message, truncate_diff};
use crate::config::DEFAULT_MAX_DIFF_CHARS;
use crate::error::{AppError, GitError};
use crate::gemini::MessageGenerator;
use crate::git::{self, GitRunner};
use crate::ui::{self, Interaction, ProgressStyleKind, with_progress};

/// Per-run switches.
#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    /// Skip all prompts, print the message, and never commit.
    pub fast: bool,
    pub max_diff_chars: usize,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            fast: false,
            max_diff_chars: DEFAULT_MAX_DIFF_CHARS,
        }
    }
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Fast mode: the message was printed and nothing was committed.
    Printed(String),
    Committed(String),
    /// The user declined the generated message.
    Cancelled,
}

/// Run the pipeline against the given git, model, and user.
pub async fn run<G, M, I>(
    options: RunOptions,
    git: &G,
    generator: &M,
    interaction: &I,
) -> Result<Outcome, AppError>
where
    G: GitRunner + ?Sized,
    M: MessageGenerator + ?Sized,
    I: Interaction + ?Sized,
{
    let files = collect_staged_files(git)?;
    if !options.fast {
        ui::show_heading("Staged files:");
        ui::show_files(&files);
    }

    let explanation = if options.fast {
        FAST_MODE_EXPLANATION.to_string()
    } else {
        interaction.explanation()?
    };

    let raw_diff = git::staged_diff(git).map_err(AppError::Diff)?;
    let diff = truncate_diff(&raw_diff, options.max_diff_chars);
    if diff.truncated {
        ui::show_warning("Diff too large, using partial diff.");
    }

    let prompt = build_prompt(&explanation, &diff.text);
    debug!("Prompt length: {} chars", prompt.len());

    let style = if options.fast {
        ProgressStyleKind::Spinner
    } else {
        ProgressStyleKind::Bar
    };
    let raw = with_progress(style, generator.generate(&prompt)).await??;

    let message = clean_message(&raw);
    if message.is_empty() {
        return Err(AppError::EmptyMessage);
    }

    if options.fast {
        println!("{message}");
        return Ok(Outcome::Printed(message));
    }

    if !interaction.confirm_commit(&message)? {
        println!("Commit cancelled.");
        return Ok(Outcome::Cancelled);
    }

    git::commit(git, &message).map_err(AppError::Commit)?;
    info!("Committed with message: {}", message);
    ui::show_success("Commit created successfully!");

    Ok(Outcome::Committed(message))
}

/// Staged files, or `NothingStaged` carrying whatever is modified but unstaged.
fn collect_staged_files<G: GitRunner + ?Sized>(git: &G) -> Result<Vec<String>, AppError> {
    match git::staged_files(git) {
        Ok(files) => Ok(files),
        Err(GitError::NoStagedFiles) => match git::unstaged_files(git) {
            Ok(unstaged) => Err(AppError::NothingStaged { unstaged }),
            Err(GitError::NoUnstagedFiles) => Err(AppError::NothingStaged {
                unstaged: Vec::new(),
            }),
            Err(e) => Err(AppError::UnstagedLookup(e)),
        },
        Err(e) => Err(e.into()),
    }
}
