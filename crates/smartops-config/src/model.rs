use serde::{Deserialize, Serialize};

use smartops_domain::SalaryRollup;

/// Finance policy knobs the aggregation engine reads: the flat revenue tax
/// rate, the reporting currency, and how fixed salaries roll into expense
/// totals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FinancePolicy {
    /// Display currency for reported amounts. Amounts themselves are
    /// plain decimals in a single implied currency; no conversion happens
    /// anywhere in the engine.
    pub currency: String,
    /// Flat rate applied to revenue only.
    #[serde(default = "FinancePolicy::default_tax_rate")]
    pub tax_rate: f64,
    #[serde(default)]
    pub salary_rollup: SalaryRollup,
}

impl Default for FinancePolicy {
    fn default() -> Self {
        Self {
            currency: "USD".into(),
            tax_rate: Self::default_tax_rate(),
            salary_rollup: SalaryRollup::default(),
        }
    }
}

impl FinancePolicy {
    pub fn default_tax_rate() -> f64 {
        0.20
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_observed_dashboard_policy() {
        let policy = FinancePolicy::default();
        assert_eq!(policy.currency, "USD");
        assert_eq!(policy.tax_rate, 0.20);
        assert_eq!(policy.salary_rollup, SalaryRollup::PerPeriod);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let policy: FinancePolicy = serde_json::from_str(r#"{"currency":"EUR"}"#).unwrap();
        assert_eq!(policy.currency, "EUR");
        assert_eq!(policy.tax_rate, 0.20);
        assert_eq!(policy.salary_rollup, SalaryRollup::PerPeriod);
    }
}
