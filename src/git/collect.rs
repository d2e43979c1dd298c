use std::path::Path;

use crate::error::PromptError;

use super::GitRunner;
use super::runner::{failure, spawn};

const STATUS_ARGS: [&str; 4] = ["status", "--porcelain=2", "--branch", "--show-stash"];

/// Fetch the raw porcelain v2 status report for the work tree at `root`.
///
/// # Errors
/// Returns an error if git cannot be launched or exits unsuccessfully.
pub fn status_report(root: &Path, git: &dyn GitRunner) -> Result<String, PromptError> {
    let out = spawn(git, root, &STATUS_ARGS)?;
    if !out.status.success() {
        return Err(failure(&STATUS_ARGS, &out));
    }
    Ok(String::from_utf8_lossy(&out.stdout).into_owned())
}
