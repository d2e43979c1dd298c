#![forbid(unsafe_code)]
#![deny(warnings, clippy::all, clippy::pedantic)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use gitprompt::{DefaultFsOps, DefaultGitRunner, Options, OutputFormat, Symbols, render_prompt};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Print a one-line git status summary for shell prompts.")]
struct Args {
    /// Path inside the git repository (default: current directory)
    #[arg(long)]
    path: Option<PathBuf>,

    /// Output format: prompt (default) or json
    #[arg(long, value_enum, default_value_t = OutputFormat::Prompt)]
    output: OutputFormat,

    /// Print debug logs to stderr
    #[arg(long)]
    debug: bool,

    /// Prefix symbol
    #[arg(long, default_value = Symbols::PREFIX)]
    prefix: String,

    /// Suffix symbol
    #[arg(long, default_value = Symbols::SUFFIX)]
    suffix: String,

    /// Separator symbol
    #[arg(long, default_value = Symbols::SEP)]
    sep: String,

    /// Local branch symbol
    #[arg(long, default_value = Symbols::LOCAL)]
    local: String,

    /// Modified symbol
    #[arg(long, default_value = Symbols::MODIFIED)]
    modified: String,

    /// Staged symbol
    #[arg(long, default_value = Symbols::STAGED)]
    staged: String,

    /// Conflict symbol
    #[arg(long, default_value = Symbols::CONFLICT)]
    conflict: String,

    /// Untracked symbol
    #[arg(long, default_value = Symbols::UNTRACKED)]
    untracked: String,

    /// Stashed symbol
    #[arg(long, default_value = Symbols::STASHED)]
    stashed: String,

    /// Ahead symbol
    #[arg(long, default_value = Symbols::AHEAD)]
    ahead: String,

    /// Behind symbol
    #[arg(long, default_value = Symbols::BEHIND)]
    behind: String,

    /// Clean symbol
    #[arg(long, default_value = Symbols::CLEAN)]
    clean: String,
}

impl Args {
    fn into_options(self) -> Options {
        Options {
            path: self.path.unwrap_or_default(),
            output: self.output,
            symbols: Symbols {
                prefix: self.prefix,
                suffix: self.suffix,
                sep: self.sep,
                local: self.local,
                ahead: self.ahead,
                behind: self.behind,
                staged: self.staged,
                conflict: self.conflict,
                modified: self.modified,
                untracked: self.untracked,
                stashed: self.stashed,
                clean: self.clean,
            },
        }
    }
}

fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.debug);
    let opts = args.into_options();

    match render_prompt(&opts, &DefaultGitRunner, &DefaultFsOps) {
        Ok(Some(line)) => {
            println!("{line}");
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(?err, "aborting");
            eprintln!("gitprompt: {err}");
            ExitCode::FAILURE
        }
    }
}
