//! ai-commits - CLI entry point.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use ai_commits::git::{check_git_installed, current_branch};
use ai_commits::ui::{TerminalInteraction, show_files, show_heading};
use ai_commits::{AppError, Config, GeminiClient, Outcome, RunOptions, SystemGit};

/// Generate a Conventional Commit message for staged changes using Gemini.
#[derive(Parser, Debug)]
#[command(name = "ai-commits")]
#[command(about = "Generate a commit message for staged changes using Gemini")]
#[command(version)]
struct Cli {
    /// Skip user interaction and generate commit message directly from diff
    #[arg(long)]
    fast: bool,

    /// Gemini model to use (overrides AI_COMMITS_MODEL)
    #[arg(long)]
    model: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(outcome) => {
            debug!("Finished: {:?}", outcome);
            ExitCode::SUCCESS
        }
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

async fn run(cli: Cli) -> Result<Outcome> {
    // Step 1: Configuration (API key is required)
    let config = Config::from_env()?.with_model(cli.model);

    // Step 2: Locate git and the working tree
    check_git_installed()?;
    let git = SystemGit::discover(".")
        .context("Run ai-commits from inside a git working tree")?;

    if !cli.fast
        && let Some(branch) = current_branch(git.workdir())
    {
        println!("On branch {branch}");
    }

    // Step 3: Run the pipeline
    let client = GeminiClient::new(&config)?;
    debug!("Using model {}", client.model());

    let options = RunOptions {
        fast: cli.fast,
        max_diff_chars: config.max_diff_chars,
    };

    let outcome = ai_commits::run(options, &git, &client, &TerminalInteraction).await?;
    Ok(outcome)
}

/// Print an error for the user, with extra guidance for unstaged work.
fn report(err: &anyhow::Error) {
    if let Some(AppError::NothingStaged { unstaged }) = err.downcast_ref::<AppError>() {
        if unstaged.is_empty() {
            eprintln!("\nNo changes to commit.");
        } else {
            show_heading("Unstaged files:");
            show_files(unstaged);
            println!("\nPlease add the files to the staging area and try again.");
        }
        return;
    }

    eprintln!("\nError: {err}");

    // Sources are usually already folded into the top-level message.
    let mut shown = err.to_string();
    for cause in err.chain().skip(1) {
        let text = cause.to_string();
        if !shown.contains(&text) {
            eprintln!("  Caused by: {text}");
        }
        shown = text;
    }
}
