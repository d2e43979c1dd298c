use std::path::PathBuf;

use clap::ValueEnum;

use crate::output::Symbols;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Prompt,
    Json,
}

#[derive(Debug, Clone, Default)]
pub struct Options {
    // Empty means the current directory, as with `git -C ""`.
    pub path: PathBuf,
    pub symbols: Symbols,
    pub output: OutputFormat,
}
