//! Aggregation engine: period filtering and financial totals.

use smartops_domain::{
    Amounted, Dated, Employee, Expense, FinancialSnapshot, PayrollEntry, PeriodMode,
    PeriodSummary, RecurringExpenseInstance, ReportingPeriod, RevenueEntry, SalaryRollup,
    TenantId,
};

use crate::{store::LedgerStore, CoreError};

/// Flat rate applied to revenue. Applies to revenue only, never to payroll
/// or expenses.
pub const REVENUE_TAX_RATE: f64 = 0.20;

/// Stateless aggregation utilities operating over ledger snapshots.
pub struct SummaryService;

impl SummaryService {
    /// Summarizes one reporting window from already-loaded collections.
    ///
    /// Pure function of its inputs: filters the four dated collections by
    /// the period, totals them, applies the flat revenue tax, and adds the
    /// full salary roster to expenses. Empty collections yield zero sums.
    pub fn summarize(
        period: ReportingPeriod,
        revenue: &[RevenueEntry],
        payroll: &[PayrollEntry],
        expenses: &[Expense],
        recurring: &[RecurringExpenseInstance],
        employees: &[Employee],
    ) -> PeriodSummary {
        Self::summarize_with(
            period,
            REVENUE_TAX_RATE,
            SalaryRollup::PerPeriod,
            revenue,
            payroll,
            expenses,
            recurring,
            employees,
        )
    }

    /// [`summarize`](Self::summarize) with an explicit tax rate and salary
    /// roll-up policy.
    #[allow(clippy::too_many_arguments)]
    pub fn summarize_with(
        period: ReportingPeriod,
        tax_rate: f64,
        rollup: SalaryRollup,
        revenue: &[RevenueEntry],
        payroll: &[PayrollEntry],
        expenses: &[Expense],
        recurring: &[RecurringExpenseInstance],
        employees: &[Employee],
    ) -> PeriodSummary {
        let revenue_total = sum_in_period(period, revenue);
        let payroll_total = sum_in_period(period, payroll);

        // Salaries are a fixed roster cost, not dated records; they are
        // never filtered by the period.
        let salary_months = match (rollup, period.mode) {
            (SalaryRollup::Prorated, PeriodMode::Yearly) => 12.0,
            _ => 1.0,
        };
        let salary_total: f64 = employees.iter().map(|e| e.monthly_salary).sum::<f64>() * salary_months;

        let expense_total =
            sum_in_period(period, expenses) + sum_in_period(period, recurring) + salary_total;

        PeriodSummary::from_parts(period, revenue_total, tax_rate, payroll_total, expense_total)
    }

    /// Loads a tenant's five collections from the store and summarizes the
    /// period. Store failures propagate as [`CoreError::DataUnavailable`].
    pub fn summarize_tenant<S: LedgerStore>(
        store: &S,
        tenant: &TenantId,
        period: ReportingPeriod,
    ) -> Result<PeriodSummary, CoreError> {
        Self::summarize_tenant_with(store, tenant, period, REVENUE_TAX_RATE, SalaryRollup::PerPeriod)
    }

    /// [`summarize_tenant`](Self::summarize_tenant) with an explicit tax
    /// rate and salary roll-up policy.
    pub fn summarize_tenant_with<S: LedgerStore>(
        store: &S,
        tenant: &TenantId,
        period: ReportingPeriod,
        tax_rate: f64,
        rollup: SalaryRollup,
    ) -> Result<PeriodSummary, CoreError> {
        let revenue = store.list_revenue(tenant)?;
        let payroll = store.list_payroll(tenant)?;
        let expenses = store.list_expenses(tenant)?;
        let recurring = store.list_recurring_instances(tenant)?;
        let employees = store.list_employees(tenant)?;
        Ok(Self::summarize_with(
            period, tax_rate, rollup, &revenue, &payroll, &expenses, &recurring, &employees,
        ))
    }

    /// Month-by-month snapshot rows for a calendar year, the shape the
    /// finance report table consumes.
    ///
    /// Each row carries the full salary roster (the per-period policy), so
    /// summing the twelve rows counts the roster twelve times — which a
    /// single yearly summary under the same policy does not. Use
    /// [`SalaryRollup::Prorated`] on the yearly summary when the two must
    /// agree.
    pub fn monthly_snapshots<S: LedgerStore>(
        store: &S,
        tenant: &TenantId,
        year: i32,
    ) -> Result<Vec<FinancialSnapshot>, CoreError> {
        let revenue = store.list_revenue(tenant)?;
        let payroll = store.list_payroll(tenant)?;
        let expenses = store.list_expenses(tenant)?;
        let recurring = store.list_recurring_instances(tenant)?;
        let employees = store.list_employees(tenant)?;

        let mut rows = Vec::with_capacity(12);
        for month in 0..12 {
            let period = ReportingPeriod::monthly(year, month)?;
            let summary = Self::summarize(
                period, &revenue, &payroll, &expenses, &recurring, &employees,
            );
            rows.push(FinancialSnapshot::from_summary(&summary));
        }
        Ok(rows)
    }
}

fn sum_in_period<T: Dated + Amounted>(period: ReportingPeriod, items: &[T]) -> f64 {
    items
        .iter()
        .filter(|item| period.contains(item.effective_date()))
        .map(|item| item.amount())
        .sum()
}
