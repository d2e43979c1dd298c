use serde::Serialize;

use crate::git::OperationState;
use crate::status::{FileCounts, Head, StatusSummary};

#[derive(Serialize)]
struct JsonStatus<'a> {
    branch: Option<&'a str>,
    detached: bool,
    commit: &'a str,
    upstream: Option<&'a str>,
    ahead: u64,
    behind: u64,
    operation: Option<JsonOperation>,
    #[serde(flatten)]
    counts: FileCounts,
    clean: bool,
}

#[derive(Serialize)]
struct JsonOperation {
    state: &'static str,
    step: Option<u64>,
    total: Option<u64>,
}

/// Render the same data as the prompt line as a single JSON object.
#[must_use]
pub fn to_json(status: &StatusSummary, state: &OperationState) -> String {
    let (branch, detached) = match &status.head {
        Head::Branch(name) => (Some(name.as_str()), false),
        Head::Detached => (None, true),
    };
    let operation = state.label().map(|label| {
        let progress = state.progress();
        JsonOperation {
            state: label,
            step: progress.map(|p| p.step),
            total: progress.map(|p| p.total),
        }
    });
    let view = JsonStatus {
        branch,
        detached,
        commit: &status.commit,
        upstream: status.upstream.as_deref(),
        ahead: status.ahead,
        behind: status.behind,
        operation,
        counts: status.counts,
        clean: status.counts.is_clean(),
    };
    // Plain strings, integers and options with string keys.
    serde_json::to_string(&view).unwrap_or_default()
}
