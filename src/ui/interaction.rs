//! Interactive prompts: explanation input and commit confirmation.

use dialoguer::{Confirm, Input};

use crate::error::UiError;

/// User-facing questions asked during an interactive run.
///
/// This abstraction allows scripting the answers in tests.
#[cfg_attr(test, mockall::automock)]
pub trait Interaction: Send + Sync {
    /// Ask what the user did in the staged files. May return an empty string.
    fn explanation(&self) -> Result<String, UiError>;

    /// Show the generated message and ask whether to commit with it.
    fn confirm_commit(&self, message: &str) -> Result<bool, UiError>;
}

/// Prompts on the controlling terminal via dialoguer.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalInteraction;

impl Interaction for TerminalInteraction {
    fn explanation(&self) -> Result<String, UiError> {
        println!();
        Input::<String>::new()
            .with_prompt("What did you do in these files?")
            .allow_empty(true)
            .interact_text()
            .map_err(UiError::Prompt)
    }

    fn confirm_commit(&self, message: &str) -> Result<bool, UiError> {
        println!("\nGenerated commit message:\n{message}\n");
        Confirm::new()
            .with_prompt("Use this commit message and commit?")
            .default(false)
            .interact()
            .map_err(UiError::Prompt)
    }
}
