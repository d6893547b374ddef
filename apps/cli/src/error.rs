//! # CLI Error Type
//!
//! Everything that can stop a `basket` invocation.
//!
//! ```text
//! CoreError ─────────┐
//! config file I/O ───┼──► CliError ──► "Error: ..." on stderr, exit code 1
//! stdout / JSON ─────┘
//! ```

use std::path::PathBuf;

use acme_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// Pricing failure (unknown code, invalid config values, ...).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The config file given with `--config` could not be read.
    #[error("Failed to read pricing config {}: {source}", .path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing to stdout failed.
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    /// JSON encoding of a report failed.
    #[error("Failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_is_transparent() {
        let err: CliError = CoreError::ProductNotFound("X99".to_string()).into();
        assert_eq!(err.to_string(), "Product not found: X99");
    }

    #[test]
    fn test_read_config_message_names_path() {
        let err = CliError::ReadConfig {
            path: PathBuf::from("/tmp/missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to read pricing config /tmp/missing.json: not found"
        );
    }
}
