//! Computed reporting values: period summaries, month-by-month snapshots,
//! and investor payouts.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::period::{MonthKey, ReportingPeriod};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Controls how the fixed salary roster enters a period's expense total.
#[derive(Default)]
pub enum SalaryRollup {
    /// Every summary adds the full monthly roster cost once, regardless of
    /// the period's span. Reproduces the observed dashboard totals, at the
    /// cost that monthly summaries cannot be summed into a yearly figure
    /// without double counting.
    #[default]
    PerPeriod,
    /// A yearly summary counts twelve months of roster cost, so it equals
    /// the sum of its twelve monthly summaries.
    Prorated,
}

impl fmt::Display for SalaryRollup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SalaryRollup::PerPeriod => "Per Period",
            SalaryRollup::Prorated => "Prorated",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// Aggregated financial figures for one reporting window.
///
/// All values are decimal currency amounts in the tenant's single implied
/// currency; rounding happens at display time, never here. Every amount is
/// non-negative except `net_profit`, which may go below zero.
pub struct PeriodSummary {
    pub period: ReportingPeriod,
    pub revenue_total: f64,
    pub tax: f64,
    pub payroll_total: f64,
    pub expense_total: f64,
    pub net_profit: f64,
}

impl PeriodSummary {
    /// Assembles a summary from its component totals, deriving tax and net
    /// profit so the identity `net = revenue − tax − payroll − expenses`
    /// holds by construction.
    pub fn from_parts(
        period: ReportingPeriod,
        revenue_total: f64,
        tax_rate: f64,
        payroll_total: f64,
        expense_total: f64,
    ) -> Self {
        let tax = revenue_total * tax_rate;
        Self {
            period,
            revenue_total,
            tax,
            payroll_total,
            expense_total,
            net_profit: revenue_total - tax - payroll_total - expense_total,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// One row of the month-by-month finance report table.
pub struct FinancialSnapshot {
    pub month: MonthKey,
    pub revenue: f64,
    pub expenses: f64,
    pub profit: f64,
    pub tax: f64,
}

impl FinancialSnapshot {
    pub fn from_summary(summary: &PeriodSummary) -> Self {
        Self {
            month: summary.period.month_key(),
            revenue: summary.revenue_total,
            expenses: summary.expense_total,
            profit: summary.net_profit,
            tax: summary.tax,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// One investor's slice of a period's net profit.
pub struct InvestorPayout {
    pub investor_id: Uuid,
    pub name: String,
    pub payout: f64,
}
