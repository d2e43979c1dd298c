mod record;

use serde::Serialize;

use crate::error::PromptError;

use record::Record;

/// Value git reports in `branch.head` when HEAD is not on a branch.
const DETACHED: &str = "(detached)";

/// Unmerged `XY` codes that count as conflicts.
const CONFLICT_CODES: [&str; 7] = ["DD", "AU", "UD", "UA", "DU", "AA", "UU"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Head {
    Branch(String),
    Detached,
}

impl Default for Head {
    // A report without a `branch.head` line renders as an unnamed branch.
    fn default() -> Self {
        Self::Branch(String::new())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FileCounts {
    pub staged: u64,
    pub conflicted: u64,
    pub modified: u64,
    pub untracked: u64,
    pub stashed: u64,
}

impl FileCounts {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusSummary {
    /// Full commit id, or `(initial)` before the first commit.
    pub commit: String,
    pub head: Head,
    /// `None` for a local-only branch.
    pub upstream: Option<String>,
    pub ahead: u64,
    pub behind: u64,
    pub counts: FileCounts,
}

/// Aggregate a porcelain v2 status report into a [`StatusSummary`].
///
/// # Errors
/// Returns an error when a record has too few fields, carries a malformed
/// status code, or holds a non-numeric count.
pub fn parse_status(report: &str) -> Result<StatusSummary, PromptError> {
    let mut summary = StatusSummary::default();

    for (idx, line) in report.lines().enumerate() {
        let line_no = idx + 1;
        match Record::decode(line_no, line)? {
            Record::Header { key, values } => apply_header(&mut summary, line_no, key, &values)?,
            Record::Changed { code } => {
                let counts = &mut summary.counts;
                if CONFLICT_CODES.contains(&code) {
                    counts.conflicted += 1;
                } else if code.as_bytes()[1] == b'M' {
                    counts.modified += 1;
                } else {
                    counts.staged += 1;
                }
            }
            Record::Untracked => summary.counts.untracked += 1,
            Record::Other => {}
        }
    }

    tracing::debug!(?summary, "parsed status");
    Ok(summary)
}

fn apply_header(
    summary: &mut StatusSummary,
    line_no: usize,
    key: &str,
    values: &[&str],
) -> Result<(), PromptError> {
    match key {
        "branch.oid" => summary.commit = values[0].to_string(),
        "branch.head" => {
            summary.head = if values[0] == DETACHED {
                Head::Detached
            } else {
                Head::Branch(values[0].to_string())
            };
        }
        "branch.upstream" => {
            summary.upstream = Some(values[0].to_string()).filter(|u| !u.is_empty());
        }
        "branch.ab" => {
            summary.ahead = signed_count(line_no, "ahead", values[0], '+')?;
            summary.behind = signed_count(line_no, "behind", values[1], '-')?;
        }
        "stash" => summary.counts.stashed = number(line_no, "stash", values[0])?,
        _ => {}
    }
    Ok(())
}

fn signed_count(
    line_no: usize,
    field: &'static str,
    value: &str,
    sign: char,
) -> Result<u64, PromptError> {
    let digits = value
        .strip_prefix(sign)
        .ok_or_else(|| invalid(line_no, field, value))?;
    number(line_no, field, digits).map_err(|_| invalid(line_no, field, value))
}

fn number(line_no: usize, field: &'static str, value: &str) -> Result<u64, PromptError> {
    value.parse::<u64>().map_err(|_| invalid(line_no, field, value))
}

fn invalid(line_no: usize, field: &'static str, value: &str) -> PromptError {
    PromptError::InvalidNumber {
        line: line_no,
        field,
        value: value.to_string(),
    }
}
