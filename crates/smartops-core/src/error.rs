use thiserror::Error;

use smartops_domain::PeriodError;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Collection unavailable: {collection}")]
    DataUnavailable { collection: &'static str },
    #[error("Record belongs to tenant {actual}, expected {expected}")]
    TenantMismatch { expected: String, actual: String },
    #[error("Invalid period: {0}")]
    InvalidPeriod(#[from] PeriodError),
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}
