use std::fmt::Write as _;

use crate::git::OperationState;
use crate::status::{Head, StatusSummary};

use super::Symbols;

const SHORT_COMMIT_LEN: usize = 7;

/// Render the single prompt line, without a trailing newline.
#[must_use]
pub fn format_prompt(status: &StatusSummary, state: &OperationState, symbols: &Symbols) -> String {
    let mut out = String::new();
    out.push_str(&symbols.prefix);

    write_head(&mut out, status, symbols);
    out.push_str(&symbols.sep);

    if let Some(label) = state.label() {
        out.push_str(label);
        if let Some(progress) = state.progress() {
            let _ = write!(out, " {}/{}", progress.step, progress.total);
        }
        out.push_str(&symbols.sep);
    }

    let counts = &status.counts;
    if counts.is_clean() {
        out.push_str(&symbols.clean);
    } else {
        let groups = [
            (&symbols.staged, counts.staged),
            (&symbols.conflict, counts.conflicted),
            (&symbols.modified, counts.modified),
            (&symbols.untracked, counts.untracked),
            (&symbols.stashed, counts.stashed),
        ];
        for (symbol, count) in groups {
            if count > 0 {
                let _ = write!(out, "{symbol}{count}");
            }
        }
    }

    out.push_str(&symbols.suffix);
    out
}

fn write_head(out: &mut String, status: &StatusSummary, symbols: &Symbols) {
    let branch = match &status.head {
        Head::Detached => {
            out.push(':');
            out.extend(status.commit.chars().take(SHORT_COMMIT_LEN));
            return;
        }
        Head::Branch(branch) => branch,
    };

    out.push_str(branch);
    match &status.upstream {
        None => {
            let _ = write!(out, " {}", symbols.local);
        }
        Some(upstream) => {
            let _ = write!(out, " {{{upstream}}}");
        }
    }

    if status.ahead > 0 || status.behind > 0 {
        out.push(' ');
        if status.ahead > 0 {
            let _ = write!(out, "{}{}", symbols.ahead, status.ahead);
        }
        if status.behind > 0 {
            let _ = write!(out, "{}{}", symbols.behind, status.behind);
        }
    }
}
