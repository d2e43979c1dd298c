pub mod json;
pub mod prompt;

pub use json::to_json;
pub use prompt::format_prompt;

/// Markers used to draw the prompt line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbols {
    pub prefix: String,
    pub suffix: String,
    pub sep: String,
    pub local: String,
    pub ahead: String,
    pub behind: String,
    pub staged: String,
    pub conflict: String,
    pub modified: String,
    pub untracked: String,
    pub stashed: String,
    pub clean: String,
}

impl Symbols {
    pub const PREFIX: &'static str = "[";
    pub const SUFFIX: &'static str = "]";
    pub const SEP: &'static str = "|";
    pub const LOCAL: &'static str = "L";
    pub const AHEAD: &'static str = "↑·";
    pub const BEHIND: &'static str = "↓·";
    pub const STAGED: &'static str = "● ";
    pub const CONFLICT: &'static str = "✖ ";
    pub const MODIFIED: &'static str = "✚ ";
    pub const UNTRACKED: &'static str = "…";
    pub const STASHED: &'static str = "⚑ ";
    pub const CLEAN: &'static str = "✔";
}

impl Default for Symbols {
    fn default() -> Self {
        Self {
            prefix: Self::PREFIX.to_string(),
            suffix: Self::SUFFIX.to_string(),
            sep: Self::SEP.to_string(),
            local: Self::LOCAL.to_string(),
            ahead: Self::AHEAD.to_string(),
            behind: Self::BEHIND.to_string(),
            staged: Self::STAGED.to_string(),
            conflict: Self::CONFLICT.to_string(),
            modified: Self::MODIFIED.to_string(),
            untracked: Self::UNTRACKED.to_string(),
            stashed: Self::STASHED.to_string(),
            clean: Self::CLEAN.to_string(),
        }
    }
}
