use chrono::NaiveDate;

use finance_core::{
    Employee, Expense, Investor, LedgerStore, MemoryLedgerStore, PayrollEntry,
    RecurringExpenseTemplate, RevenueEntry, TenantId,
};

pub fn demo_tenant() -> TenantId {
    TenantId::new("tenant-smartops")
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// A store seeded with the demo data set: October 2024 activity, two
/// recurring templates, two salaried employees, and two investors.
pub fn seeded_store() -> MemoryLedgerStore {
    let tenant = demo_tenant();
    let mut store = MemoryLedgerStore::new();

    store
        .append_revenue(RevenueEntry::new(tenant.clone(), date(2024, 10, 2), 6.0, 80.0))
        .expect("seed revenue");
    store
        .append_revenue(RevenueEntry::new(tenant.clone(), date(2024, 10, 20), 5.0, 90.0))
        .expect("seed revenue");

    store
        .append_payroll(PayrollEntry::new(
            tenant.clone(),
            date(2024, 10, 5),
            uuid::Uuid::new_v4(),
            18.0,
            432.0,
        ))
        .expect("seed payroll");

    store
        .append_expense(Expense::new(
            tenant.clone(),
            date(2024, 10, 3),
            1200.0,
            "Software",
            "Dialer seats",
        ))
        .expect("seed expense");
    store
        .append_expense(Expense::new(
            tenant.clone(),
            date(2024, 10, 5),
            980.0,
            "Training",
            "QA workshop",
        ))
        .expect("seed expense");

    store.put_template(
        RecurringExpenseTemplate::new(tenant.clone(), "Office Lease", 5500.0, 1, "Rent")
            .with_description("Monthly rent"),
    );
    store.put_template(
        RecurringExpenseTemplate::new(tenant.clone(), "Dialer subscription", 1400.0, 5, "Software")
            .with_description("Per seat billing"),
    );

    store.put_employee(Employee::new(tenant.clone(), "Jordan Support", 4200.0));
    store.put_employee(Employee::new(tenant.clone(), "Riley Finance", 5300.0));

    store.put_investor(Investor::new(tenant.clone(), "Northstar Capital", 0.12));
    store.put_investor(Investor::new(tenant, "Summit Ventures", 0.08));

    store
}
