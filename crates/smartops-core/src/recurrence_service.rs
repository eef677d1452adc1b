//! Recurring-expense instantiation: expands templates into dated monthly
//! instances.

use std::collections::HashSet;

use tracing::warn;
use uuid::Uuid;

use smartops_domain::{
    MonthKey, RecurringExpenseInstance, RecurringExpenseTemplate, ReportingPeriod, TenantId,
    TenantScoped,
};

use crate::{store::LedgerStore, CoreError};

/// Expands recurring-expense templates into concrete instances for a
/// target month.
pub struct RecurrenceService;

impl RecurrenceService {
    /// Builds one instance per active template for the month given by
    /// `year` and zero-based `month` index.
    ///
    /// Pure: no memory of prior runs, no deduplication against anything
    /// already materialized. Inactive templates are skipped; day-of-month
    /// values past the end of the month clamp to its last day, so every
    /// active template yields exactly one instance.
    pub fn materialize(
        templates: &[RecurringExpenseTemplate],
        year: i32,
        month: u32,
    ) -> Result<Vec<RecurringExpenseInstance>, CoreError> {
        let period = ReportingPeriod::monthly(year, month)?;
        Ok(templates
            .iter()
            .filter(|template| template.active)
            .map(|template| {
                RecurringExpenseInstance::from_template(template, period.year, period.month1())
            })
            .collect())
    }

    /// Loads the tenant's templates, materializes the target month, and
    /// appends every produced instance to the store.
    ///
    /// Explicitly triggered (the operator's "Recalculate Month" action),
    /// never time-driven. Repeated invocations for the same month append
    /// duplicate instances; templates that already had instances for the
    /// month are named in a warning, but the append still happens.
    pub fn materialize_into<S: LedgerStore>(
        store: &mut S,
        tenant: &TenantId,
        year: i32,
        month: u32,
    ) -> Result<Vec<RecurringExpenseInstance>, CoreError> {
        let templates = store.list_recurring_templates(tenant)?;
        for template in &templates {
            if template.tenant_id() != tenant {
                return Err(CoreError::TenantMismatch {
                    expected: tenant.to_string(),
                    actual: template.tenant_id().to_string(),
                });
            }
        }

        let month_key = MonthKey::new(year, month + 1);
        let already_materialized: HashSet<Uuid> = store
            .list_recurring_instances(tenant)?
            .iter()
            .filter(|instance| instance.month == month_key)
            .map(|instance| instance.template_id)
            .collect();

        let instances = Self::materialize(&templates, year, month)?;
        for instance in &instances {
            if already_materialized.contains(&instance.template_id) {
                warn!(
                    template = %instance.template_id,
                    month = %month_key,
                    "appending duplicate recurring instance"
                );
            }
            store.append_recurring_instance(instance.clone())?;
        }
        Ok(instances)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::MemoryLedgerStore;

    fn tenant() -> TenantId {
        TenantId::new("tenant-test")
    }

    fn templates() -> Vec<RecurringExpenseTemplate> {
        vec![
            RecurringExpenseTemplate::new(tenant(), "Office Lease", 5500.0, 1, "Rent")
                .with_description("Monthly rent"),
            RecurringExpenseTemplate::new(tenant(), "Dialer subscription", 1400.0, 5, "Software")
                .with_description("Per seat billing"),
        ]
    }

    #[test]
    fn materialize_builds_one_instance_per_active_template() {
        let instances = RecurrenceService::materialize(&templates(), 2024, 9).unwrap();
        assert_eq!(instances.len(), 2);
        let rent = &instances[0];
        assert_eq!(rent.amount, 5500.0);
        assert_eq!(rent.category, "Rent");
        assert_eq!(rent.month.to_string(), "2024-10");
        assert_eq!(
            rent.expense_date,
            NaiveDate::from_ymd_opt(2024, 10, 1).unwrap()
        );
    }

    #[test]
    fn inactive_templates_are_skipped() {
        let mut set = templates();
        set[1] = set[1].clone().with_active(false);
        let instances = RecurrenceService::materialize(&set, 2024, 9).unwrap();
        assert_eq!(instances.len(), 1);
        assert_eq!(instances[0].category, "Rent");
    }

    #[test]
    fn month_index_out_of_range_is_rejected() {
        assert!(RecurrenceService::materialize(&templates(), 2024, 12).is_err());
    }

    #[test]
    fn day_past_month_end_lands_on_last_day() {
        let template = RecurringExpenseTemplate::new(tenant(), "Payroll close", 90.0, 31, "Ops");
        let instances = RecurrenceService::materialize(&[template], 2025, 1).unwrap();
        assert_eq!(
            instances[0].expense_date,
            NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()
        );
    }

    #[test]
    fn repeated_materialization_appends_duplicates() {
        let mut store = MemoryLedgerStore::new();
        for template in templates() {
            store.put_template(template);
        }

        let first = RecurrenceService::materialize_into(&mut store, &tenant(), 2024, 9).unwrap();
        let second = RecurrenceService::materialize_into(&mut store, &tenant(), 2024, 9).unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(second.len(), 2);

        // No deduplication: the second run doubles the stored set.
        let stored = store.list_recurring_instances(&tenant()).unwrap();
        assert_eq!(stored.len(), 4);
    }

    #[test]
    fn fresh_ids_on_every_run() {
        let mut store = MemoryLedgerStore::new();
        store.put_template(templates().remove(0));
        let first = RecurrenceService::materialize_into(&mut store, &tenant(), 2024, 9).unwrap();
        let second = RecurrenceService::materialize_into(&mut store, &tenant(), 2024, 9).unwrap();
        assert_ne!(first[0].id, second[0].id);
        assert_eq!(first[0].template_id, second[0].template_id);
    }
}
