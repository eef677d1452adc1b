//! Append-only ledger entries: revenue, payroll, and ad-hoc expenses.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// Billable work recorded against a contract. Immutable once created; the
/// revenue amount is fixed at creation and never recomputed.
pub struct RevenueEntry {
    pub id: Uuid,
    pub tenant_id: TenantId,
    pub entry_date: NaiveDate,
    pub hours_worked: f64,
    pub contract_rate_per_hour: f64,
    pub revenue_amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<Uuid>,
}

impl RevenueEntry {
    /// Records billable hours; `revenue_amount` is computed here as
    /// hours × rate and carried on the entry from then on.
    pub fn new(
        tenant_id: TenantId,
        entry_date: NaiveDate,
        hours_worked: f64,
        contract_rate_per_hour: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            tenant_id,
            entry_date,
            hours_worked,
            contract_rate_per_hour,
            revenue_amount: hours_worked * contract_rate_per_hour,
            agent_id: None,
        }
    }

    pub fn with_agent(mut self, agent_id: Uuid) -> Self {
        self.agent_id = Some(agent_id);
        self
    }
}

impl Identifiable for RevenueEntry {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl TenantScoped for RevenueEntry {
    fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }
}

impl Amounted for RevenueEntry {
    fn amount(&self) -> f64 {
        self.revenue_amount
    }
}

impl Dated for RevenueEntry {
    fn effective_date(&self) -> NaiveDate {
        self.entry_date
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// A payout to an agent for hours worked. Immutable once created.
pub struct PayrollEntry {
    pub id: Uuid,
    pub tenant_id: TenantId,
    pub payroll_date: NaiveDate,
    pub agent_id: Uuid,
    pub hours_paid: f64,
    pub pay_amount: f64,
}

impl PayrollEntry {
    pub fn new(
        tenant_id: TenantId,
        payroll_date: NaiveDate,
        agent_id: Uuid,
        hours_paid: f64,
        pay_amount: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            tenant_id,
            payroll_date,
            agent_id,
            hours_paid,
            pay_amount,
        }
    }
}

impl Identifiable for PayrollEntry {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl TenantScoped for PayrollEntry {
    fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }
}

impl Amounted for PayrollEntry {
    fn amount(&self) -> f64 {
        self.pay_amount
    }
}

impl Dated for PayrollEntry {
    fn effective_date(&self) -> NaiveDate {
        self.payroll_date
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// A one-off operational expense. Immutable once created.
pub struct Expense {
    pub id: Uuid,
    pub tenant_id: TenantId,
    pub expense_date: NaiveDate,
    pub amount: f64,
    pub category: String,
    pub description: String,
}

impl Expense {
    pub fn new(
        tenant_id: TenantId,
        expense_date: NaiveDate,
        amount: f64,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            tenant_id,
            expense_date,
            amount,
            category: category.into(),
            description: description.into(),
        }
    }
}

impl Identifiable for Expense {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl TenantScoped for Expense {
    fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }
}

impl Amounted for Expense {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Dated for Expense {
    fn effective_date(&self) -> NaiveDate {
        self.expense_date
    }
}
