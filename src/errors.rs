use std::result::Result as StdResult;

use smartops_config::ConfigError;
use smartops_core::CoreError;
use thiserror::Error;

/// Unified error type for the assembled finance core.
#[derive(Error, Debug)]
pub enum FinanceError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = StdResult<T, FinanceError>;

impl From<ConfigError> for FinanceError {
    fn from(err: ConfigError) -> Self {
        FinanceError::Config(err.to_string())
    }
}
