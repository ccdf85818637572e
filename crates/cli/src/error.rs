use cake_collate_core::error::StorageError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

/// Failures that end the CLI. Command failures are reported and the session
/// carries on, so they never show up here.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Terminal IO error: {0}")]
    Terminal(#[from] std::io::Error),
}
