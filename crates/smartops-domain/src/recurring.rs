//! Recurring-expense templates and their materialized monthly instances.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;
use crate::period::MonthKey;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// A standing rule for a monthly expense: how much, on which day, under
/// which category. Templates are the source of truth for future instances;
/// already-materialized instances are unaffected by later edits.
pub struct RecurringExpenseTemplate {
    pub id: Uuid,
    pub tenant_id: TenantId,
    pub name: String,
    pub amount: f64,
    pub active: bool,
    /// Scheduled day within the month, nominally 1..=31. Values past the
    /// end of a target month clamp to that month's last day.
    pub day_of_month: u32,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl RecurringExpenseTemplate {
    pub fn new(
        tenant_id: TenantId,
        name: impl Into<String>,
        amount: f64,
        day_of_month: u32,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            tenant_id,
            name: name.into(),
            amount,
            active: true,
            day_of_month,
            category: category.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns a copy with the active flag replaced. Template edits go
    /// through value-returning methods; shared copies are never mutated in
    /// place.
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// The concrete date this template resolves to in the given month,
    /// with the day clamped into the month.
    pub fn resolve_date(&self, year: i32, month: u32) -> NaiveDate {
        clamp_day_of_month(year, month, self.day_of_month)
    }
}

impl Identifiable for RecurringExpenseTemplate {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl TenantScoped for RecurringExpenseTemplate {
    fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }
}

impl Amounted for RecurringExpenseTemplate {
    fn amount(&self) -> f64 {
        self.amount
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// One dated expense produced from a template for one specific month.
///
/// Amount and category are frozen at materialization; the instance never
/// re-reads its template.
pub struct RecurringExpenseInstance {
    pub id: Uuid,
    pub tenant_id: TenantId,
    pub template_id: Uuid,
    pub month: MonthKey,
    pub expense_date: NaiveDate,
    pub amount: f64,
    pub category: String,
}

impl RecurringExpenseInstance {
    /// Snapshots `template` for the month given by `year`/`month`
    /// (one-based month number). Assigns a fresh id on every call.
    pub fn from_template(template: &RecurringExpenseTemplate, year: i32, month: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            tenant_id: template.tenant_id.clone(),
            template_id: template.id,
            month: MonthKey::new(year, month),
            expense_date: template.resolve_date(year, month),
            amount: template.amount,
            category: template.category.clone(),
        }
    }
}

impl Identifiable for RecurringExpenseInstance {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl TenantScoped for RecurringExpenseInstance {
    fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }
}

impl Amounted for RecurringExpenseInstance {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Dated for RecurringExpenseInstance {
    fn effective_date(&self) -> NaiveDate {
        self.expense_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rent_template() -> RecurringExpenseTemplate {
        RecurringExpenseTemplate::new(TenantId::new("tenant-test"), "Office Lease", 5500.0, 1, "Rent")
    }

    #[test]
    fn instance_snapshots_template_fields() {
        let template = rent_template();
        let instance = RecurringExpenseInstance::from_template(&template, 2024, 10);
        assert_eq!(instance.template_id, template.id);
        assert_eq!(instance.amount, 5500.0);
        assert_eq!(instance.category, "Rent");
        assert_eq!(instance.month.to_string(), "2024-10");
        assert_eq!(
            instance.expense_date,
            NaiveDate::from_ymd_opt(2024, 10, 1).unwrap()
        );
    }

    #[test]
    fn later_template_edits_do_not_touch_existing_instances() {
        let template = rent_template();
        let instance = RecurringExpenseInstance::from_template(&template, 2024, 10);
        let edited = template.with_active(false);
        assert!(!edited.active);
        assert_eq!(instance.amount, 5500.0);
    }

    #[test]
    fn day_thirty_one_clamps_to_end_of_february() {
        let mut template = rent_template();
        template.day_of_month = 31;
        let leap = RecurringExpenseInstance::from_template(&template, 2024, 2);
        assert_eq!(
            leap.expense_date,
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        let common = RecurringExpenseInstance::from_template(&template, 2025, 2);
        assert_eq!(
            common.expense_date,
            NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()
        );
    }
}
