//! Error types for mutant generation

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while generating mutants
#[derive(Debug, Error)]
pub enum MutationError {
    /// Failed to read source file
    #[error("Failed to read file '{}': {error}", file.display())]
    FileReadError { file: PathBuf, error: String },

    /// Failed to parse source file as Rust
    #[error("Failed to parse '{}' as Rust: {error}", file.display())]
    ParseError { file: PathBuf, error: String },

    /// An operator outside the inversion catalog reached the mutator.
    ///
    /// This means collection and application disagree about the tree and is
    /// never expected on a program that parsed the same way twice.
    #[error("Operator '{operator}' has no defined inverse")]
    UnsupportedOperator { operator: String },

    /// Failed to write a mutant file
    #[error("Failed to write mutant file '{}': {error}", file.display())]
    WriteError { file: PathBuf, error: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

/// Result type for mutant generation
pub type Result<T> = std::result::Result<T, MutationError>;
