//! Fiscal-Year Copy Planning
//!
//! Pure planning for the year-copy wizard: which budgets and installment
//! periods the source year has that the target year is still missing.
//! The wizard previews the plan, then issues one create call per entry.

use chrono::{Datelike, NaiveDate};

use crate::models::{FundBudget, InstallmentPeriod};

/// A budget the target year is missing.
#[derive(Clone, Debug, PartialEq)]
pub struct PlannedBudget {
    pub fund_id: u32,
    pub amount: i64,
}

/// An installment period the target year is missing, dates already shifted.
#[derive(Clone, Debug, PartialEq)]
pub struct PlannedPeriod {
    pub seq: u8,
    pub opens_on: NaiveDate,
    pub closes_on: NaiveDate,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CopyPlan {
    pub budgets: Vec<PlannedBudget>,
    pub periods: Vec<PlannedPeriod>,
}

impl CopyPlan {
    pub fn is_empty(&self) -> bool {
        self.budgets.is_empty() && self.periods.is_empty()
    }

    pub fn len(&self) -> usize {
        self.budgets.len() + self.periods.len()
    }
}

/// Shift a date into `year`; Feb 29 clamps to Feb 28 off leap years.
fn shift_into_year(date: NaiveDate, year: i32) -> NaiveDate {
    date.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, date.month(), 28))
        .unwrap_or(date)
}

/// Compute what a copy from the source year into the target year would
/// create. Budgets are keyed by fund, periods by sequence number; entries
/// the target year already has are skipped rather than overwritten.
pub fn plan_year_copy(
    source_budgets: &[FundBudget],
    target_budgets: &[FundBudget],
    source_periods: &[InstallmentPeriod],
    target_periods: &[InstallmentPeriod],
    target_year: u16,
) -> CopyPlan {
    let budgets = source_budgets
        .iter()
        .filter(|b| !target_budgets.iter().any(|t| t.fund_id == b.fund_id))
        .map(|b| PlannedBudget {
            fund_id: b.fund_id,
            amount: b.amount,
        })
        .collect();

    let periods = source_periods
        .iter()
        .filter(|p| !target_periods.iter().any(|t| t.seq == p.seq))
        .map(|p| PlannedPeriod {
            seq: p.seq,
            opens_on: shift_into_year(p.opens_on, target_year as i32),
            closes_on: shift_into_year(p.closes_on, target_year as i32),
        })
        .collect();

    CopyPlan { budgets, periods }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn budget(id: u32, fund_id: u32, year: u16, amount: i64) -> FundBudget {
        FundBudget {
            id,
            fund_id,
            year,
            amount,
        }
    }

    fn period(id: u32, year: u16, seq: u8, opens: (u32, u32), closes: (u32, u32)) -> InstallmentPeriod {
        InstallmentPeriod {
            id,
            year,
            seq,
            opens_on: NaiveDate::from_ymd_opt(year as i32, opens.0, opens.1).unwrap(),
            closes_on: NaiveDate::from_ymd_opt(year as i32, closes.0, closes.1).unwrap(),
        }
    }

    #[test]
    fn copies_only_missing_budgets() {
        let source = vec![budget(1, 10, 2024, 50000), budget(2, 11, 2024, 20000)];
        let target = vec![budget(7, 11, 2025, 25000)];

        let plan = plan_year_copy(&source, &target, &[], &[], 2025);

        assert_eq!(
            plan.budgets,
            vec![PlannedBudget {
                fund_id: 10,
                amount: 50000
            }]
        );
        assert!(plan.periods.is_empty());
        assert_eq!(plan.len(), 1);
    }

    #[test]
    fn shifts_period_dates_into_target_year() {
        let source = vec![period(1, 2024, 1, (3, 1), (4, 30))];

        let plan = plan_year_copy(&[], &[], &source, &[], 2025);

        assert_eq!(
            plan.periods,
            vec![PlannedPeriod {
                seq: 1,
                opens_on: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
                closes_on: NaiveDate::from_ymd_opt(2025, 4, 30).unwrap(),
            }]
        );
    }

    #[test]
    fn leap_day_clamps_when_target_year_is_not_leap() {
        let source = vec![period(1, 2024, 2, (2, 29), (3, 31))];

        let plan = plan_year_copy(&[], &[], &source, &[], 2025);

        assert_eq!(
            plan.periods[0].opens_on,
            NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()
        );
    }

    #[test]
    fn existing_sequences_are_not_duplicated() {
        let source = vec![
            period(1, 2024, 1, (3, 1), (4, 30)),
            period(2, 2024, 2, (9, 1), (10, 31)),
        ];
        let target = vec![period(9, 2025, 1, (3, 15), (5, 15))];

        let plan = plan_year_copy(&[], &[], &source, &target, 2025);

        assert_eq!(plan.periods.len(), 1);
        assert_eq!(plan.periods[0].seq, 2);
    }

    #[test]
    fn empty_source_plans_nothing() {
        let plan = plan_year_copy(&[], &[], &[], &[], 2025);
        assert!(plan.is_empty());
    }
}
