//! smartops-domain
//!
//! Pure domain models for the finance core (ledger entries, recurring
//! templates, reporting periods, rosters). No I/O, no services. Only data
//! types and core enums.

pub mod common;
pub mod entries;
pub mod period;
pub mod recurring;
pub mod staff;
pub mod summary;

pub use common::*;
pub use entries::*;
pub use period::*;
pub use recurring::*;
pub use staff::*;
pub use summary::*;
