use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts and CI systems to distinguish between
/// a failed build target, bad invocations and tool failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - tree loaded (and, if requested, the target ran cleanly)
    Success = 0,
    /// A target was executed and exited with a non-zero status
    TargetFailed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unreadable build file, malformed XML, I/O error, etc.)
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
            ExitCode::TargetFailed => write!(f, "Target Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for build file loading.
///
/// Uses thiserror to derive Display and Error traits automatically.
/// `BuildFileNotFound` is informational for the caller (a workspace
/// folder without a build file yields an empty tree, not a failure);
/// the other variants abort the affected folder's load.
#[derive(Debug, Error)]
pub enum AntError {
    #[error("No build file found under {root}\nSearched directories: {directories}\nSearched filenames: {filenames}")]
    BuildFileNotFound {
        root: PathBuf,
        directories: String,
        filenames: String,
    },

    #[error("Failed to parse build file: {path}\nDetails: {details}")]
    BuildFileParseError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid workspace folder: {path}\nReason: {reason}")]
    InvalidWorkspacePath { path: PathBuf, reason: String },
}
