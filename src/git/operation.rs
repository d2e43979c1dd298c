use std::path::Path;

use crate::error::PromptError;
use crate::system::FsOps;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub step: u64,
    pub total: u64,
}

/// A multi-step operation git has left in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OperationState {
    #[default]
    None,
    ApplyRebase(Progress),
    MergeRebase(Progress),
    InteractiveRebase(Progress),
    ApplyMail(Progress),
    ApplyMailRebase(Progress),
    Merging,
    CherryPicking,
    Reverting,
    Bisecting,
}

impl OperationState {
    /// Short label shown in the prompt, `None` when nothing is in progress.
    #[must_use]
    pub fn label(&self) -> Option<&'static str> {
        let label = match self {
            Self::None => return None,
            Self::ApplyRebase(_) => "REBASE",
            Self::MergeRebase(_) => "REBASE-m",
            Self::InteractiveRebase(_) => "REBASE-i",
            Self::ApplyMail(_) => "AM",
            Self::ApplyMailRebase(_) => "AM/REBASE",
            Self::Merging => "MERGING",
            Self::CherryPicking => "CHERRY-PICKING",
            Self::Reverting => "REVERTING",
            Self::Bisecting => "BISECTING",
        };
        Some(label)
    }

    /// Step counters, only when git recorded a non-zero total.
    #[must_use]
    pub fn progress(&self) -> Option<Progress> {
        match self {
            Self::ApplyRebase(p)
            | Self::MergeRebase(p)
            | Self::InteractiveRebase(p)
            | Self::ApplyMail(p)
            | Self::ApplyMailRebase(p) => Some(*p).filter(|p| p.total > 0),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Classify the operation in progress from the marker files under `git_dir`.
///
/// # Errors
/// Returns an error when a rebase marker directory exists but its step or
/// total file is missing, unreadable, or not an integer.
pub fn detect_operation(git_dir: &Path, fs: &dyn FsOps) -> Result<OperationState, PromptError> {
    let rebase_merge = git_dir.join("rebase-merge");
    let rebase_apply = git_dir.join("rebase-apply");

    let state = if fs.exists(&rebase_merge) {
        let progress = read_progress(fs, &rebase_merge, "msgnum", "end")?;
        if fs.exists(&rebase_merge.join("interactive")) {
            OperationState::InteractiveRebase(progress)
        } else {
            OperationState::MergeRebase(progress)
        }
    } else if fs.exists(&rebase_apply) {
        let progress = read_progress(fs, &rebase_apply, "next", "last")?;
        if fs.exists(&rebase_apply.join("rebasing")) {
            OperationState::ApplyRebase(progress)
        } else if fs.exists(&rebase_apply.join("applying")) {
            OperationState::ApplyMail(progress)
        } else {
            OperationState::ApplyMailRebase(progress)
        }
    } else if fs.exists(&git_dir.join("MERGE_HEAD")) {
        OperationState::Merging
    } else if fs.exists(&git_dir.join("CHERRY_PICK_HEAD")) {
        OperationState::CherryPicking
    } else if fs.exists(&git_dir.join("REVERT_HEAD")) {
        OperationState::Reverting
    } else if fs.exists(&git_dir.join("BISECT_LOG")) {
        OperationState::Bisecting
    } else {
        OperationState::None
    };

    tracing::debug!(?state, "detected operation");
    Ok(state)
}

fn read_progress(
    fs: &dyn FsOps,
    dir: &Path,
    step_file: &str,
    total_file: &str,
) -> Result<Progress, PromptError> {
    Ok(Progress {
        step: read_number(fs, &dir.join(step_file))?,
        total: read_number(fs, &dir.join(total_file))?,
    })
}

fn read_number(fs: &dyn FsOps, path: &Path) -> Result<u64, PromptError> {
    let text = fs
        .read_to_string(path)
        .map_err(|source| PromptError::MarkerRead {
            path: path.to_path_buf(),
            source,
        })?;
    let value = text.trim();
    value.parse::<u64>().map_err(|source| PromptError::MarkerParse {
        path: path.to_path_buf(),
        value: value.to_string(),
        source,
    })
}
