mod collect;
mod operation;
mod probe;
mod runner;

pub use collect::status_report;
pub use operation::{OperationState, Progress, detect_operation};
pub use probe::{RepoPaths, locate_repository};
pub use runner::{DefaultGitRunner, GitRunner};
