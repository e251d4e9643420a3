//! Error types for the command-line report.

use thiserror::Error;

/// Errors surfaced by argument parsing and report rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// A flag expected a value but none was provided.
    #[error("missing value for {flag}")]
    MissingValue {
        /// Flag that was missing its value.
        flag: &'static str,
    },
    /// An unsupported argument was supplied.
    #[error("unknown argument: {value}")]
    UnknownArgument {
        /// Argument value that was not recognised.
        value: String,
    },
    /// A numeric value failed to parse.
    #[error("invalid number for {flag}: '{value}' ({message})")]
    InvalidNumber {
        /// Flag associated with the invalid number.
        flag: &'static str,
        /// Raw value supplied for the flag.
        value: String,
        /// Parser error message.
        message: String,
    },
    /// The report could not be written to the output stream.
    #[error("failed to write report: {message}")]
    Output {
        /// I/O error message.
        message: String,
    },
    /// A generated human could not be rendered as JSON.
    #[error("failed to serialise human: {message}")]
    Serialization {
        /// Serializer error message.
        message: String,
    },
}
