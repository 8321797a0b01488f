//! CLI-level errors (wraps domain and config errors)

use thiserror::Error;

use crate::domain::DomainError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("config error: {message}")]
    Config { message: String },

    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
            CliError::Config { .. } => crate::exitcode::CONFIG,
            CliError::Io { .. } => crate::exitcode::IOERR,
            CliError::Domain(e) => match e {
                DomainError::FileNotFound(_) => crate::exitcode::NOINPUT,
                DomainError::InvalidDefinition { .. } | DomainError::EmptyName(_) => {
                    crate::exitcode::DATAERR
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn given_each_error_kind_when_mapping_then_sysexits_code() {
        assert_eq!(CliError::InvalidArgs("x".into()).exit_code(), 64);
        assert_eq!(
            CliError::Config {
                message: "x".into()
            }
            .exit_code(),
            78
        );
        assert_eq!(
            CliError::from(DomainError::FileNotFound(PathBuf::from("a.toml"))).exit_code(),
            66
        );
        assert_eq!(
            CliError::from(DomainError::EmptyName("ul".into())).exit_code(),
            65
        );
    }
}
