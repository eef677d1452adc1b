//! Stable, public-facing helpers that wrap the internal service layer.
//!
//! This module exposes a simplified API that frontends (dashboard pages,
//! operator tooling) can rely on without depending on the entire service
//! surface area.

use chrono::NaiveDate;
use uuid::Uuid;

use smartops_config::FinancePolicy;
use smartops_core::{
    DistributionService, LedgerStore, RecurrenceService, SummaryService,
};
use smartops_domain::{
    Expense, FinancialSnapshot, InvestorPayout, PayrollEntry, PeriodSummary,
    RecurringExpenseInstance, ReportingPeriod, RevenueEntry, TenantId,
};

use crate::errors::Result;

/// Records billable hours; the revenue amount is computed here as
/// hours × rate and never recomputed later. Returns the entry identifier.
pub fn api_record_revenue<S: LedgerStore>(
    store: &mut S,
    tenant: &TenantId,
    entry_date: NaiveDate,
    hours_worked: f64,
    contract_rate_per_hour: f64,
    agent_id: Option<Uuid>,
) -> Result<Uuid> {
    let mut entry = RevenueEntry::new(
        tenant.clone(),
        entry_date,
        hours_worked,
        contract_rate_per_hour,
    );
    if let Some(agent) = agent_id {
        entry = entry.with_agent(agent);
    }
    let entry_id = entry.id;
    store.append_revenue(entry)?;
    Ok(entry_id)
}

/// Records a payroll payout to an agent. Returns the entry identifier.
pub fn api_record_payroll<S: LedgerStore>(
    store: &mut S,
    tenant: &TenantId,
    payroll_date: NaiveDate,
    agent_id: Uuid,
    hours_paid: f64,
    pay_amount: f64,
) -> Result<Uuid> {
    let entry = PayrollEntry::new(tenant.clone(), payroll_date, agent_id, hours_paid, pay_amount);
    let entry_id = entry.id;
    store.append_payroll(entry)?;
    Ok(entry_id)
}

/// Records a one-off expense. Returns the expense identifier.
pub fn api_record_expense<S: LedgerStore>(
    store: &mut S,
    tenant: &TenantId,
    expense_date: NaiveDate,
    amount: f64,
    category: impl Into<String>,
    description: impl Into<String>,
) -> Result<Uuid> {
    let expense = Expense::new(tenant.clone(), expense_date, amount, category, description);
    let expense_id = expense.id;
    store.append_expense(expense)?;
    Ok(expense_id)
}

/// Summarizes the tenant's reporting window under the default policy
/// (20% flat revenue tax, per-period salary roll-up).
pub fn api_period_summary<S: LedgerStore>(
    store: &S,
    tenant: &TenantId,
    period: ReportingPeriod,
) -> Result<PeriodSummary> {
    Ok(SummaryService::summarize_tenant(store, tenant, period)?)
}

/// Summarizes the tenant's reporting window under an explicit policy.
pub fn api_period_summary_with_policy<S: LedgerStore>(
    store: &S,
    tenant: &TenantId,
    period: ReportingPeriod,
    policy: &FinancePolicy,
) -> Result<PeriodSummary> {
    Ok(SummaryService::summarize_tenant_with(
        store,
        tenant,
        period,
        policy.tax_rate,
        policy.salary_rollup,
    )?)
}

/// The operator's "Recalculate Month" action: materializes every active
/// recurring template into the target month (zero-based `month` index) and
/// appends the instances to the store. Repeating the call for the same
/// month appends duplicates; access control on this action is the
/// caller's concern.
pub fn api_recalculate_month<S: LedgerStore>(
    store: &mut S,
    tenant: &TenantId,
    year: i32,
    month: u32,
) -> Result<Vec<RecurringExpenseInstance>> {
    Ok(RecurrenceService::materialize_into(store, tenant, year, month)?)
}

/// Splits the period's net profit across the tenant's investors.
pub fn api_investor_payouts<S: LedgerStore>(
    store: &S,
    tenant: &TenantId,
    period: ReportingPeriod,
) -> Result<Vec<InvestorPayout>> {
    let summary = SummaryService::summarize_tenant(store, tenant, period)?;
    let investors = store.list_investors(tenant)?;
    Ok(DistributionService::distribute(&investors, summary.net_profit))
}

/// Month-by-month snapshot rows for the finance report table.
pub fn api_monthly_snapshots<S: LedgerStore>(
    store: &S,
    tenant: &TenantId,
    year: i32,
) -> Result<Vec<FinancialSnapshot>> {
    Ok(SummaryService::monthly_snapshots(store, tenant, year)?)
}
