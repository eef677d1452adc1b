use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use smartops_domain::{
    Employee, Expense, Identifiable, Investor, PayrollEntry, RecurringExpenseInstance,
    RecurringExpenseTemplate, RevenueEntry, TenantId, TenantScoped,
};

use crate::CoreError;

/// Abstraction over the record store holding a tenant's ledger collections.
///
/// Every listing is scoped to one tenant, and appends must be visible to
/// subsequent reads within the same process. Implementations report a
/// collection they cannot produce as [`CoreError::DataUnavailable`];
/// retrying or degrading to an empty collection is the caller's call.
pub trait LedgerStore {
    fn list_revenue(&self, tenant: &TenantId) -> Result<Vec<RevenueEntry>, CoreError>;
    fn append_revenue(&mut self, entry: RevenueEntry) -> Result<(), CoreError>;
    fn list_payroll(&self, tenant: &TenantId) -> Result<Vec<PayrollEntry>, CoreError>;
    fn append_payroll(&mut self, entry: PayrollEntry) -> Result<(), CoreError>;
    fn list_expenses(&self, tenant: &TenantId) -> Result<Vec<Expense>, CoreError>;
    fn append_expense(&mut self, expense: Expense) -> Result<(), CoreError>;
    fn list_recurring_templates(
        &self,
        tenant: &TenantId,
    ) -> Result<Vec<RecurringExpenseTemplate>, CoreError>;
    fn list_recurring_instances(
        &self,
        tenant: &TenantId,
    ) -> Result<Vec<RecurringExpenseInstance>, CoreError>;
    fn append_recurring_instance(
        &mut self,
        instance: RecurringExpenseInstance,
    ) -> Result<(), CoreError>;
    fn list_employees(&self, tenant: &TenantId) -> Result<Vec<Employee>, CoreError>;
    fn list_investors(&self, tenant: &TenantId) -> Result<Vec<Investor>, CoreError>;
}

/// In-memory [`LedgerStore`] holding append-only collections for any number
/// of tenants. Reads filter by tenant; appends are visible immediately.
#[derive(Debug, Default, Clone)]
pub struct MemoryLedgerStore {
    revenue: Vec<RevenueEntry>,
    payroll: Vec<PayrollEntry>,
    expenses: Vec<Expense>,
    templates: Vec<RecurringExpenseTemplate>,
    instances: Vec<RecurringExpenseInstance>,
    employees: Vec<Employee>,
    investors: Vec<Investor>,
}

impl MemoryLedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a template by id. Templates are the only
    /// mutable collection; this is their single write path.
    pub fn put_template(&mut self, template: RecurringExpenseTemplate) {
        replace_by_id(&mut self.templates, template);
    }

    /// Inserts or replaces an employee by id.
    pub fn put_employee(&mut self, employee: Employee) {
        replace_by_id(&mut self.employees, employee);
    }

    /// Inserts or replaces an investor by id.
    pub fn put_investor(&mut self, investor: Investor) {
        replace_by_id(&mut self.investors, investor);
    }
}

fn replace_by_id<T: Identifiable>(collection: &mut Vec<T>, item: T) {
    match collection.iter_mut().find(|existing| existing.id() == item.id()) {
        Some(slot) => *slot = item,
        None => collection.push(item),
    }
}

fn scoped<T: TenantScoped + Clone>(collection: &[T], tenant: &TenantId) -> Vec<T> {
    collection
        .iter()
        .filter(|item| item.tenant_id() == tenant)
        .cloned()
        .collect()
}

impl LedgerStore for MemoryLedgerStore {
    fn list_revenue(&self, tenant: &TenantId) -> Result<Vec<RevenueEntry>, CoreError> {
        Ok(scoped(&self.revenue, tenant))
    }

    fn append_revenue(&mut self, entry: RevenueEntry) -> Result<(), CoreError> {
        self.revenue.push(entry);
        Ok(())
    }

    fn list_payroll(&self, tenant: &TenantId) -> Result<Vec<PayrollEntry>, CoreError> {
        Ok(scoped(&self.payroll, tenant))
    }

    fn append_payroll(&mut self, entry: PayrollEntry) -> Result<(), CoreError> {
        self.payroll.push(entry);
        Ok(())
    }

    fn list_expenses(&self, tenant: &TenantId) -> Result<Vec<Expense>, CoreError> {
        Ok(scoped(&self.expenses, tenant))
    }

    fn append_expense(&mut self, expense: Expense) -> Result<(), CoreError> {
        self.expenses.push(expense);
        Ok(())
    }

    fn list_recurring_templates(
        &self,
        tenant: &TenantId,
    ) -> Result<Vec<RecurringExpenseTemplate>, CoreError> {
        Ok(scoped(&self.templates, tenant))
    }

    fn list_recurring_instances(
        &self,
        tenant: &TenantId,
    ) -> Result<Vec<RecurringExpenseInstance>, CoreError> {
        Ok(scoped(&self.instances, tenant))
    }

    fn append_recurring_instance(
        &mut self,
        instance: RecurringExpenseInstance,
    ) -> Result<(), CoreError> {
        self.instances.push(instance);
        Ok(())
    }

    fn list_employees(&self, tenant: &TenantId) -> Result<Vec<Employee>, CoreError> {
        Ok(scoped(&self.employees, tenant))
    }

    fn list_investors(&self, tenant: &TenantId) -> Result<Vec<Investor>, CoreError> {
        Ok(scoped(&self.investors, tenant))
    }
}

/// Detects dangling references and other anomalies within a tenant's
/// ledger collections.
pub fn store_warnings<S: LedgerStore>(store: &S, tenant: &TenantId) -> Result<Vec<String>, CoreError> {
    let templates = store.list_recurring_templates(tenant)?;
    let instances = store.list_recurring_instances(tenant)?;
    let template_ids: HashSet<Uuid> = templates.iter().map(|t| t.id).collect();
    let mut warnings = Vec::new();

    for instance in &instances {
        if !template_ids.contains(&instance.template_id) {
            warnings.push(format!(
                "recurring instance {} references unknown template {}",
                instance.id, instance.template_id
            ));
        }
        if instance.amount < 0.0 {
            warnings.push(format!(
                "recurring instance {} carries negative amount {}",
                instance.id, instance.amount
            ));
        }
    }

    let mut per_month: HashMap<(Uuid, String), usize> = HashMap::new();
    for instance in &instances {
        *per_month
            .entry((instance.template_id, instance.month.to_string()))
            .or_default() += 1;
    }
    for ((template_id, month), count) in per_month {
        if count > 1 {
            warnings.push(format!(
                "template {} has {} instances for {}",
                template_id, count, month
            ));
        }
    }

    for expense in store.list_expenses(tenant)? {
        if expense.amount < 0.0 {
            warnings.push(format!(
                "expense {} carries negative amount {}",
                expense.id, expense.amount
            ));
        }
    }

    Ok(warnings)
}
