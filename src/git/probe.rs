use std::path::{Path, PathBuf};

use crate::error::PromptError;

use super::GitRunner;
use super::runner::{failure, spawn};

/// Exit status git uses for "not a git repository".
const NOT_A_REPOSITORY: i32 = 128;

const TOPLEVEL_ARGS: [&str; 3] = ["rev-parse", "--show-toplevel", "--absolute-git-dir"];

/// Absolute locations resolved once per run and passed to every later step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoPaths {
    pub root: PathBuf,
    pub git_dir: PathBuf,
}

/// Resolve the work tree root and metadata directory for `path`.
///
/// Returns `Ok(None)` when `path` is not inside a work tree.
///
/// # Errors
/// Returns an error when git cannot be launched, exits with any other failure,
/// or prints something other than the two expected paths.
pub fn locate_repository(
    path: &Path,
    git: &dyn GitRunner,
) -> Result<Option<RepoPaths>, PromptError> {
    let out = spawn(git, path, &TOPLEVEL_ARGS)?;
    if !out.status.success() {
        if out.status.code() == Some(NOT_A_REPOSITORY) {
            tracing::debug!(path = %path.display(), "not inside a work tree");
            return Ok(None);
        }
        return Err(failure(&TOPLEVEL_ARGS, &out));
    }

    let mut lines = out
        .stdout
        .split(|b| *b == b'\n')
        .map(|l| l.strip_suffix(b"\r").unwrap_or(l))
        .filter(|l| !l.is_empty());
    let (Some(root), Some(git_dir)) = (lines.next(), lines.next()) else {
        return Err(PromptError::UnexpectedOutput {
            args: TOPLEVEL_ARGS.join(" "),
            message: format!(
                "expected top-level and git-dir lines, got {:?}",
                String::from_utf8_lossy(&out.stdout).trim()
            ),
        });
    };

    let paths = RepoPaths {
        root: path_from_bytes(root),
        git_dir: path_from_bytes(git_dir),
    };
    tracing::debug!(root = %paths.root.display(), git_dir = %paths.git_dir.display(), "located repository");
    Ok(Some(paths))
}

// Paths are raw bytes on unix and need not be UTF-8.
#[cfg(unix)]
fn path_from_bytes(bytes: &[u8]) -> PathBuf {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    PathBuf::from(OsStr::from_bytes(bytes))
}

#[cfg(not(unix))]
fn path_from_bytes(bytes: &[u8]) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(bytes).into_owned())
}
