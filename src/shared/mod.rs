/// Shared utilities - Result alias, error types, exit codes
pub mod error;
pub mod result;

pub use error::{ExitCode, ReportError};
pub use result::Result;
