//! Terminal interaction: prompts, progress animation, and output.

pub mod interaction;
pub mod output;
pub mod progress;

pub use interaction::{Interaction, TerminalInteraction};
pub use output::{show_files, show_heading, show_success, show_warning};
pub use progress::{ProgressStyleKind, with_progress};
