//! Git adapter: shells out to the system `git` binary.

pub mod runner;
pub mod staging;

pub use runner::{GitRunner, SystemGit, check_git_installed, current_branch};
pub use staging::{commit, split_file_list, staged_diff, staged_files, unstaged_files};
