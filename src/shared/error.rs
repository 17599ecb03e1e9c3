use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish between argument errors
/// and failures while building the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - report generated
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (catalog load error, invalid selection, file I/O error, etc.)
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
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for build configuration.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Component catalog not found: {path}\n\n💡 Hint: {suggestion}")]
    CatalogNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to load component catalog: {origin}\nDetails: {details}\n\n💡 Hint: Please verify that the catalog is valid JSON with every category present")]
    CatalogLoadError { origin: String, details: String },

    #[error("No {category} named \"{name}\" in the catalog\n\n💡 Hint: Available options: {available}")]
    ComponentNotFound {
        category: String,
        name: String,
        available: String,
    },

    #[error("No compatible {category} found for graphics card \"{gpu}\"\n\n💡 Hint: Choose a different graphics card or extend the catalog")]
    NoCompatibleOption { category: String, gpu: String },

    #[error("Invalid selection: {category} \"{name}\"\nReason: {reason}\n\n💡 Hint: Run with --show-compatible to list the options for this graphics card")]
    InvalidSelection {
        category: String,
        name: String,
        reason: String,
    },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    /// Validation error for value objects and configuration
    #[error("Validation error: {message}")]
    Validation { message: String },
}
