use crate::error::PromptError;
use crate::git::{GitRunner, detect_operation, locate_repository, status_report};
use crate::output::{format_prompt, to_json};
use crate::status::parse_status;
use crate::system::FsOps;
use crate::types::{Options, OutputFormat};

/// Build the status line for the repository containing `opts.path`.
///
/// Returns `Ok(None)` when the path is not inside a git work tree.
///
/// # Errors
/// Returns an error if git cannot be run or fails, if an operation marker
/// cannot be read, or if the status report does not parse.
pub fn render_prompt(
    opts: &Options,
    git: &dyn GitRunner,
    fs: &dyn FsOps,
) -> Result<Option<String>, PromptError> {
    let Some(repo) = locate_repository(&opts.path, git)? else {
        return Ok(None);
    };
    let state = detect_operation(&repo.git_dir, fs)?;
    let report = status_report(&repo.root, git)?;
    let status = parse_status(&report)?;

    let line = match opts.output {
        OutputFormat::Prompt => format_prompt(&status, &state, &opts.symbols),
        OutputFormat::Json => to_json(&status, &state),
    };
    Ok(Some(line))
}
