#![forbid(unsafe_code)]
#![deny(warnings, clippy::all, clippy::pedantic)]

mod error;
mod types;
mod system;
mod git;
mod status;
mod prompt;
pub mod output;

pub use error::PromptError;
pub use types::{Options, OutputFormat};
pub use system::{DefaultFsOps, FsOps};
pub use git::{DefaultGitRunner, GitRunner, OperationState, Progress, RepoPaths};
pub use git::{detect_operation, locate_repository, status_report};
pub use status::{FileCounts, Head, StatusSummary, parse_status};
pub use output::Symbols;
pub use prompt::render_prompt;
