use std::num::ParseIntError;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Fatal failures while building a prompt line.
///
/// Being outside a work tree is not an error; the probe reports it as `None`.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("failed to launch git {args}: {source}")]
    GitSpawn {
        args: String,
        source: std::io::Error,
    },

    #[error("git {args} failed with {status}{}", stderr_suffix(.stderr))]
    GitFailure {
        args: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("unexpected output from git {args}: {message}")]
    UnexpectedOutput { args: String, message: String },

    #[error("failed to read {}: {source}", .path.display())]
    MarkerRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse '{value}' in {}: {source}", .path.display())]
    MarkerParse {
        path: PathBuf,
        value: String,
        source: ParseIntError,
    },

    /// A status record had fewer fields than its kind requires.
    #[error("malformed status record on line {line}: {kind} record needs {expected} fields, found {found}")]
    MalformedRecord {
        line: usize,
        kind: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("malformed status code '{code}' on line {line}")]
    InvalidStatusCode { line: usize, code: String },

    #[error("invalid {field} value '{value}' on line {line}")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },
}

fn stderr_suffix(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {trimmed}")
    }
}
