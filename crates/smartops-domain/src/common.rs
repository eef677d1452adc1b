//! Shared traits, tenant scoping, and calendar helpers for ledger primitives.

use std::fmt;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Exposes a stable identifier for entities stored in the ledger.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Scopes an entity to a single tenant. Records from one tenant must never
/// surface in another tenant's listings or summaries.
pub trait TenantScoped {
    fn tenant_id(&self) -> &TenantId;
}

/// Supplies a common contract for retrieving monetary amounts.
pub trait Amounted {
    fn amount(&self) -> f64;
}

/// Returns the calendar date a ledger record is filtered by when
/// aggregating a reporting period.
pub trait Dated {
    fn effective_date(&self) -> NaiveDate;
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Opaque tenant identifier. Comparison is exact; no normalization.
pub struct TenantId(String);

impl TenantId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TenantId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// Number of days in the given month, leap-aware.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).unwrap());
    let last_current = first_next - Duration::days(1);
    last_current.day()
}

/// Resolves a template's day-of-month against a concrete month, clamping
/// out-of-range days (short months, values outside 1..=31) into the month
/// so a date is always produced.
pub fn clamp_day_of_month(year: i32, month: u32, day_of_month: u32) -> NaiveDate {
    let day = day_of_month.clamp(1, days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 1).unwrap())
}
