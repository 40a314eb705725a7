//! Loans, repayment schedule, and payoff progress.

use crate::core::metrics;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Annual rate at or above which a loan is classified as high interest.
pub const HIGH_INTEREST_RATE: f64 = 10.0;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Debt {
    pub name: String,
    /// Loan kind shown as a badge, e.g. "Mortgage" or "Auto".
    pub kind: String,
    pub total: f64,
    pub remaining: f64,
    pub emi: f64,
    /// Annual interest rate in percent.
    pub rate: f64,
    pub next_due: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DebtStatus {
    OnTrack,
    HighInterest,
}

impl Debt {
    /// Status is derived from the rate, not stored alongside the record.
    pub fn status(&self) -> DebtStatus {
        if self.rate >= HIGH_INTEREST_RATE {
            DebtStatus::HighInterest
        } else {
            DebtStatus::OnTrack
        }
    }

    pub fn paid(&self) -> f64 {
        metrics::remaining(self.total, self.remaining)
    }
}

/// Principal/interest split for one month of the repayment schedule.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RepaymentMonth {
    pub month: String,
    pub principal: f64,
    pub interest: f64,
}

impl RepaymentMonth {
    /// Share of the installment that goes to principal.
    pub fn principal_share(&self) -> Option<f64> {
        metrics::percentage(self.principal, self.principal + self.interest).ok()
    }
}

/// Payoff progress for a single loan.
#[derive(Debug, Clone, Serialize)]
pub struct DebtProgress {
    pub paid: f64,
    pub percent_paid: Option<f64>,
}

pub fn debt_progress(debt: &Debt) -> DebtProgress {
    DebtProgress {
        paid: debt.paid(),
        percent_paid: metrics::percentage(debt.paid(), debt.total).ok(),
    }
}

/// Aggregate across all loans.
#[derive(Debug, Clone, Serialize)]
pub struct DebtSummary {
    pub total_outstanding: f64,
    pub total_emi: f64,
    pub total_paid: f64,
    pub percent_paid: Option<f64>,
    pub active_loans: usize,
}

pub fn summarize(debts: &[Debt]) -> DebtSummary {
    let total = metrics::total_of(debts, |d| d.total);
    let total_outstanding = metrics::total_of(debts, |d| d.remaining);
    let total_paid = metrics::total_of(debts, |d| d.paid());
    DebtSummary {
        total_outstanding,
        total_emi: metrics::total_of(debts, |d| d.emi),
        total_paid,
        percent_paid: metrics::percentage(total_paid, total).ok(),
        active_loans: debts.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn debt(name: &str, total: f64, remaining: f64, emi: f64, rate: f64) -> Debt {
        Debt {
            name: name.to_string(),
            kind: "Loan".to_string(),
            total,
            remaining,
            emi,
            rate,
            next_due: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        }
    }

    #[test]
    fn test_status_threshold() {
        assert_eq!(debt("Credit Card", 5000.0, 2500.0, 250.0, 18.9).status(), DebtStatus::HighInterest);
        assert_eq!(debt("Home Loan", 250000.0, 180000.0, 1850.0, 3.5).status(), DebtStatus::OnTrack);
        assert_eq!(debt("Edge", 1000.0, 500.0, 50.0, HIGH_INTEREST_RATE).status(), DebtStatus::HighInterest);
    }

    #[test]
    fn test_debt_progress() {
        let progress = debt_progress(&debt("Car Loan", 30000.0, 12000.0, 650.0, 5.2));
        assert_eq!(progress.paid, 18000.0);
        assert_eq!(progress.percent_paid, Some(60.0));
    }

    #[test]
    fn test_summary_across_loans() {
        let debts = vec![
            debt("Home Loan", 250000.0, 180000.0, 1850.0, 3.5),
            debt("Car Loan", 30000.0, 12000.0, 650.0, 5.2),
            debt("Credit Card", 5000.0, 2500.0, 250.0, 18.9),
            debt("Student Loan", 45000.0, 28000.0, 420.0, 4.5),
        ];
        let summary = summarize(&debts);
        assert_eq!(summary.total_outstanding, 222500.0);
        assert_eq!(summary.total_emi, 3170.0);
        assert_eq!(summary.total_paid, 107500.0);
        let pct = summary.percent_paid.unwrap();
        assert!((pct - 107500.0 / 330000.0 * 100.0).abs() < f64::EPSILON);
        assert_eq!(summary.active_loans, 4);
    }

    #[test]
    fn test_summary_without_loans() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_outstanding, 0.0);
        assert_eq!(summary.percent_paid, None);
    }

    #[test]
    fn test_principal_share() {
        let month = RepaymentMonth {
            month: "Jan".to_string(),
            principal: 1800.0,
            interest: 1370.0,
        };
        let share = month.principal_share().unwrap();
        assert!((share - 1800.0 / 3170.0 * 100.0).abs() < f64::EPSILON);

        let empty = RepaymentMonth {
            month: "Feb".to_string(),
            principal: 0.0,
            interest: 0.0,
        };
        assert_eq!(empty.principal_share(), None);
    }
}
