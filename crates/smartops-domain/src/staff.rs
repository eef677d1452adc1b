//! Roster entities the finance engine reads: salaried employees and
//! investors.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// A salaried employee. The monthly salary is rolled into every period's
/// expense total as a fixed roster cost.
pub struct Employee {
    pub id: Uuid,
    pub tenant_id: TenantId,
    pub full_name: String,
    pub monthly_salary: f64,
}

impl Employee {
    pub fn new(tenant_id: TenantId, full_name: impl Into<String>, monthly_salary: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            tenant_id,
            full_name: full_name.into(),
            monthly_salary,
        }
    }
}

impl Identifiable for Employee {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl TenantScoped for Employee {
    fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }
}

impl Amounted for Employee {
    fn amount(&self) -> f64 {
        self.monthly_salary
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// An investor holding an ownership share of net profit.
///
/// Shares are fractions in (0, 1]; the shares across a tenant's investors
/// need not sum to 1.
pub struct Investor {
    pub id: Uuid,
    pub tenant_id: TenantId,
    pub name: String,
    pub percent_share: f64,
}

impl Investor {
    pub fn new(tenant_id: TenantId, name: impl Into<String>, percent_share: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            tenant_id,
            name: name.into(),
            percent_share,
        }
    }

    /// Returns a copy with the ownership share replaced; shared copies are
    /// never mutated in place.
    pub fn with_share(mut self, percent_share: f64) -> Self {
        self.percent_share = percent_share;
        self
    }
}

impl Identifiable for Investor {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl TenantScoped for Investor {
    fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }
}
