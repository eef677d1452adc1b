//! Finance Core powers the period-aggregation and recurring-expense engine
//! behind the operations dashboard: revenue, payroll, tax, expense and
//! profit figures for a reporting period, plus materialization of recurring
//! expense templates into dated instances.

pub mod errors;
pub mod public_api;
pub mod utils;

pub use errors::{FinanceError, Result};
pub use public_api::*;

pub use smartops_config::{FinancePolicy, PolicyManager};
pub use smartops_core::{
    store_warnings, DistributionService, LedgerStore, MemoryLedgerStore, RecurrenceService,
    SummaryService, REVENUE_TAX_RATE,
};
pub use smartops_domain::{
    Employee, Expense, FinancialSnapshot, Investor, InvestorPayout, MonthKey, PayrollEntry,
    PeriodMode, PeriodSummary, RecurringExpenseInstance, RecurringExpenseTemplate,
    ReportingPeriod, RevenueEntry, SalaryRollup, TenantId,
};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Finance Core tracing initialized.");
    });
}
