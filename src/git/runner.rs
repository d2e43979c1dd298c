use std::path::Path;
use std::process::{Command, Output, Stdio};

use crate::error::PromptError;

pub trait GitRunner {
    /// Run the `git` command within the given `repo` with `args`.
    ///
    /// # Errors
    /// Returns an error if the `git` process cannot be spawned or fails during execution.
    fn run_git(&self, repo: &Path, args: &[&str]) -> std::io::Result<Output>;
}

pub struct DefaultGitRunner;

impl GitRunner for DefaultGitRunner {
    fn run_git(&self, repo: &Path, args: &[&str]) -> std::io::Result<Output> {
        tracing::debug!(repo = %repo.display(), "$ git {}", args.join(" "));
        Command::new("git")
            .arg("-C")
            .arg(repo)
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
    }
}

/// Run git and return its output, mapping spawn failures into [`PromptError::GitSpawn`].
/// The exit status is left for the caller to judge.
pub(crate) fn spawn(git: &dyn GitRunner, repo: &Path, args: &[&str]) -> Result<Output, PromptError> {
    git.run_git(repo, args)
        .map_err(|source| PromptError::GitSpawn {
            args: args.join(" "),
            source,
        })
}

pub(crate) fn failure(args: &[&str], out: &Output) -> PromptError {
    PromptError::GitFailure {
        args: args.join(" "),
        status: out.status,
        stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
    }
}
