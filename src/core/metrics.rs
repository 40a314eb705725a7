//! Generic metric aggregation primitives shared by every view.
//!
//! All functions here are pure. Degenerate inputs (zero denominators, past
//! deadlines) surface as [`MetricError`] instead of propagating silent
//! `NaN`/`Infinity` values into rendered output.

use chrono::NaiveDate;
use thiserror::Error;

/// Average month length used for deadline arithmetic.
const DAYS_PER_MONTH: i64 = 30;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum MetricError {
    /// A ratio was requested against a zero denominator.
    #[error("cannot compute a percentage against a zero denominator")]
    DivisionByZero,

    /// A deadline-relative metric was requested for a date that is not in
    /// the future.
    #[error("deadline {0} has already passed")]
    PastDeadline(NaiveDate),
}

/// Sums a numeric field across all records. An empty collection yields 0.
pub fn total_of<T>(records: &[T], field: impl Fn(&T) -> f64) -> f64 {
    records.iter().map(field).sum()
}

/// Returns `numerator / denominator` expressed as a percentage.
pub fn percentage(numerator: f64, denominator: f64) -> Result<f64, MetricError> {
    if denominator == 0.0 {
        return Err(MetricError::DivisionByZero);
    }
    Ok(numerator / denominator * 100.0)
}

/// Returns `total - used`. The result may be negative; callers classify a
/// negative remainder as over-budget rather than clamping it.
pub fn remaining(total: f64, used: f64) -> f64 {
    total - used
}

/// Whole months until `deadline`, rounded up from a 30-day month.
pub fn months_until(deadline: NaiveDate, today: NaiveDate) -> Result<i64, MetricError> {
    let days = (deadline - today).num_days();
    if days <= 0 {
        return Err(MetricError::PastDeadline(deadline));
    }
    Ok((days + DAYS_PER_MONTH - 1) / DAYS_PER_MONTH)
}

/// Monthly amount needed to cover `remaining` within `months`, rounded up
/// to a whole unit. An already-covered target yields 0 instead of a
/// negative installment.
pub fn monthly_contribution(remaining: f64, months: i64) -> Result<f64, MetricError> {
    if months <= 0 {
        return Err(MetricError::DivisionByZero);
    }
    if remaining <= 0.0 {
        return Ok(0.0);
    }
    Ok((remaining / months as f64).ceil())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_total_of_sums_selected_field() {
        struct Row {
            amount: f64,
        }
        let rows = vec![Row { amount: 1200.0 }, Row { amount: 600.0 }, Row { amount: 400.0 }];
        assert_eq!(total_of(&rows, |r| r.amount), 2200.0);
    }

    #[test]
    fn test_total_of_empty_is_zero() {
        let rows: Vec<f64> = Vec::new();
        assert_eq!(total_of(&rows, |v| *v), 0.0);
    }

    #[test]
    fn test_percentage_basic() {
        assert_eq!(percentage(12000.0, 20000.0).unwrap(), 60.0);
        assert_eq!(percentage(1200.0, 1200.0).unwrap(), 100.0);
    }

    #[test]
    fn test_percentage_over_100_is_not_clamped() {
        let pct = percentage(350.0, 300.0).unwrap();
        assert!((pct - 350.0 / 300.0 * 100.0).abs() < f64::EPSILON);
        assert!(pct > 100.0);
    }

    #[test]
    fn test_percentage_zero_denominator_is_an_error() {
        assert_eq!(percentage(15000.0, 0.0), Err(MetricError::DivisionByZero));
        assert_eq!(percentage(0.0, 0.0), Err(MetricError::DivisionByZero));
    }

    #[test]
    fn test_percentage_monotone_in_numerator() {
        let limit = 150000.0;
        let mut last = f64::MIN;
        for used in [0.0, 10000.0, 120000.0, 150000.0, 200000.0] {
            let pct = percentage(used, limit).unwrap();
            assert!(pct > last);
            last = pct;
        }
    }

    #[test]
    fn test_remaining_identity_law() {
        for (total, used) in [(1200.0, 1200.0), (300.0, 350.0), (20000.0, 12000.0)] {
            assert_eq!(remaining(total, used) + used, total);
        }
    }

    #[test]
    fn test_remaining_may_go_negative() {
        assert_eq!(remaining(300.0, 350.0), -50.0);
    }

    #[test]
    fn test_months_until_rounds_up() {
        let today = date(2025, 1, 1);
        assert_eq!(months_until(date(2025, 1, 31), today).unwrap(), 1);
        assert_eq!(months_until(date(2025, 2, 1), today).unwrap(), 2);
        // 364 days out still rounds up to a 13th month
        assert_eq!(months_until(date(2025, 12, 31), today).unwrap(), 13);
    }

    #[test]
    fn test_months_until_past_deadline() {
        let today = date(2025, 6, 15);
        assert_eq!(
            months_until(date(2025, 6, 15), today),
            Err(MetricError::PastDeadline(date(2025, 6, 15)))
        );
        assert_eq!(
            months_until(date(2024, 12, 1), today),
            Err(MetricError::PastDeadline(date(2024, 12, 1)))
        );
    }

    #[test]
    fn test_monthly_contribution_rounds_up() {
        assert_eq!(monthly_contribution(8000.0, 12).unwrap(), 667.0);
        assert_eq!(monthly_contribution(2000.0, 4).unwrap(), 500.0);
    }

    #[test]
    fn test_monthly_contribution_funded_goal_is_zero() {
        assert_eq!(monthly_contribution(0.0, 6).unwrap(), 0.0);
        assert_eq!(monthly_contribution(-500.0, 6).unwrap(), 0.0);
    }

    #[test]
    fn test_monthly_contribution_without_months_is_an_error() {
        assert_eq!(monthly_contribution(8000.0, 0), Err(MetricError::DivisionByZero));
    }
}
