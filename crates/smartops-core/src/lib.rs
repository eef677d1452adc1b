//! smartops-core
//!
//! Business logic and services for the finance engine. Depends on
//! smartops-domain. No CLI, no terminal I/O; persistence stays behind the
//! [`store::LedgerStore`] boundary.

pub mod distribution_service;
pub mod error;
pub mod recurrence_service;
pub mod store;
pub mod summary_service;

pub use distribution_service::*;
pub use error::CoreError;
pub use recurrence_service::*;
pub use store::*;
pub use summary_service::*;
