//! Investor distribution: applies ownership shares to net profit.

use smartops_domain::{Investor, InvestorPayout};

/// Splits a period's net profit across investors by ownership share.
pub struct DistributionService;

impl DistributionService {
    /// Computes each investor's payout as `net_profit × percent_share`.
    ///
    /// Pure. Shares are not validated to sum to one or less; a negative
    /// net profit propagates to negative payouts.
    pub fn distribute(investors: &[Investor], net_profit: f64) -> Vec<InvestorPayout> {
        investors
            .iter()
            .map(|investor| InvestorPayout {
                investor_id: investor.id,
                name: investor.name.clone(),
                payout: net_profit * investor.percent_share,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartops_domain::TenantId;

    fn tenant() -> TenantId {
        TenantId::new("tenant-test")
    }

    #[test]
    fn payout_is_share_of_net_profit() {
        let investors = vec![Investor::new(tenant(), "Northstar Capital", 0.12)];
        let payouts = DistributionService::distribute(&investors, 744.0);
        assert_eq!(payouts.len(), 1);
        assert_eq!(payouts[0].name, "Northstar Capital");
        assert!((payouts[0].payout - 89.28).abs() < 1e-9);
    }

    #[test]
    fn negative_profit_yields_negative_payouts() {
        let investors = vec![
            Investor::new(tenant(), "Northstar Capital", 0.12),
            Investor::new(tenant(), "Summit Ventures", 0.08),
        ];
        let payouts = DistributionService::distribute(&investors, -100.0);
        assert!((payouts[0].payout - -12.0).abs() < 1e-9);
        assert!((payouts[1].payout - -8.0).abs() < 1e-9);
    }

    #[test]
    fn no_investors_no_payouts() {
        assert!(DistributionService::distribute(&[], 500.0).is_empty());
    }
}
