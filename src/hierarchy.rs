//! Fund Hierarchy Utilities
//!
//! Helper for rendering a year's budgets grouped under their fund.

use crate::models::{Fund, FundBudget};

/// Group budgets under their funds, in fund catalog order.
/// Funds without a budget for the year still appear, with an empty group,
/// so the panel can offer to create one.
pub fn group_budgets(funds: &[Fund], budgets: &[FundBudget]) -> Vec<(Fund, Vec<FundBudget>)> {
    funds
        .iter()
        .map(|fund| {
            let mut owned: Vec<FundBudget> = budgets
                .iter()
                .filter(|b| b.fund_id == fund.id)
                .cloned()
                .collect();
            owned.sort_by_key(|b| b.id);
            (fund.clone(), owned)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fund(id: u32, name: &str) -> Fund {
        Fund {
            id,
            name: name.to_string(),
        }
    }

    fn budget(id: u32, fund_id: u32) -> FundBudget {
        FundBudget {
            id,
            fund_id,
            year: 2025,
            amount: 10000,
        }
    }

    #[test]
    fn groups_follow_fund_catalog_order() {
        let funds = vec![fund(2, "Travel"), fund(1, "Equipment")];
        let budgets = vec![budget(5, 1), budget(6, 2)];

        let grouped = group_budgets(&funds, &budgets);

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].0.id, 2);
        assert_eq!(grouped[0].1, vec![budget(6, 2)]);
        assert_eq!(grouped[1].0.id, 1);
        assert_eq!(grouped[1].1, vec![budget(5, 1)]);
    }

    #[test]
    fn funds_without_budgets_keep_an_empty_group() {
        let funds = vec![fund(1, "Equipment")];

        let grouped = group_budgets(&funds, &[]);

        assert_eq!(grouped.len(), 1);
        assert!(grouped[0].1.is_empty());
    }
}
