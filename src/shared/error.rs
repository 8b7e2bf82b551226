use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - results fetched and the report was produced
    Success = 0,
    /// The run earned 1 credit or fewer and --strict was requested
    CreditsBelowTarget = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (API error, network error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::CreditsBelowTarget => write!(f, "Credits Below Target (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for fetching and assembling a result bundle.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Not a valid Pollination run URL: {url}\nReason: {reason}\n\n💡 Hint: Expected https://app.pollination.cloud/projects/<owner>/<project>/jobs/<job-id>/runs/<run-id>")]
    InvalidRunUrl { url: String, reason: String },

    #[error("The app cannot access this run on Pollination.\nDetails: {details}\n\n💡 Hint: Check that the URL is correct. Runs in private projects need an API key (-k or the config file)")]
    Network { details: String },

    #[error("This report only works with the {expected} recipe. The input run was produced by {actual}")]
    WrongRecipe { actual: String, expected: String },

    #[error("Only {minimum} or newer versions of the recipe are supported. Current version of the recipe: {tag}")]
    OutdatedRecipe { tag: String, minimum: String },

    #[error("Cannot interpret recipe version tag \"{tag}\": {details}")]
    InvalidRecipeTag { tag: String, details: String },

    #[error("Failed to fetch the \"{metric}\" result archive\nDetails: {details}")]
    ArchiveFetch { metric: String, details: String },

    #[error("Failed to read the {artifact} artifact\nDetails: {details}")]
    SummaryParse { artifact: String, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWrite { path: PathBuf, details: String },

    #[error("Failed to prepare cache directory: {path}\nDetails: {details}\n\n💡 Hint: Pick a writable location with --cache-dir")]
    CacheDir { path: PathBuf, details: String },
}
