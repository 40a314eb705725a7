//! Tax deductions, insurance policies, and saving options.

use crate::core::metrics;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TaxDeduction {
    pub name: String,
    /// Statutory cap. A limit of 0 means the deduction is uncapped.
    pub limit: f64,
    pub used: f64,
}

impl TaxDeduction {
    pub fn is_unlimited(&self) -> bool {
        self.limit == 0.0
    }
}

/// Derived utilization for one deduction. An uncapped deduction is fully
/// utilized by definition and has no remaining headroom to report.
#[derive(Debug, Clone, Serialize)]
pub struct DeductionUsage {
    pub percent: f64,
    pub remaining: Option<f64>,
}

pub fn deduction_usage(deduction: &TaxDeduction) -> DeductionUsage {
    if deduction.is_unlimited() {
        return DeductionUsage {
            percent: 100.0,
            remaining: None,
        };
    }
    DeductionUsage {
        // The zero-limit case is handled above, so the ratio is defined.
        percent: metrics::percentage(deduction.used, deduction.limit).unwrap_or(100.0),
        remaining: Some(metrics::remaining(deduction.limit, deduction.used)),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyStatus {
    Active,
    RenewalDue,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InsurancePolicy {
    pub kind: String,
    pub provider: String,
    pub coverage: f64,
    pub premium: f64,
    pub status: PolicyStatus,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TaxSavingOption {
    pub name: String,
    pub returns: String,
    pub lock_in: String,
    pub section: String,
    #[serde(default)]
    pub recommended: bool,
}

/// Aggregate insurance coverage figures shown under the policy table.
#[derive(Debug, Clone, Serialize)]
pub struct InsuranceSummary {
    pub total_coverage: f64,
    pub total_premium: f64,
    pub renewals_due: usize,
}

pub fn summarize_policies(policies: &[InsurancePolicy]) -> InsuranceSummary {
    InsuranceSummary {
        total_coverage: metrics::total_of(policies, |p| p.coverage),
        total_premium: metrics::total_of(policies, |p| p.premium),
        renewals_due: policies
            .iter()
            .filter(|p| p.status == PolicyStatus::RenewalDue)
            .count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capped_deduction_usage() {
        let usage = deduction_usage(&TaxDeduction {
            name: "80C - Tax Saving Investments".to_string(),
            limit: 150000.0,
            used: 120000.0,
        });
        assert_eq!(usage.percent, 80.0);
        assert_eq!(usage.remaining, Some(30000.0));
    }

    #[test]
    fn test_uncapped_deduction_is_fully_utilized() {
        let usage = deduction_usage(&TaxDeduction {
            name: "80E - Education Loan Interest".to_string(),
            limit: 0.0,
            used: 15000.0,
        });
        assert_eq!(usage.percent, 100.0);
        assert_eq!(usage.remaining, None);
    }

    #[test]
    fn test_exhausted_deduction_has_no_headroom() {
        let usage = deduction_usage(&TaxDeduction {
            name: "80D - Health Insurance".to_string(),
            limit: 25000.0,
            used: 26000.0,
        });
        assert!(usage.percent > 100.0);
        assert_eq!(usage.remaining, Some(-1000.0));
    }

    #[test]
    fn test_policy_summary() {
        let policies = vec![
            InsurancePolicy {
                kind: "Life Insurance".to_string(),
                provider: "MetLife".to_string(),
                coverage: 500000.0,
                premium: 12000.0,
                status: PolicyStatus::Active,
            },
            InsurancePolicy {
                kind: "Vehicle Insurance".to_string(),
                provider: "StateFarm".to_string(),
                coverage: 50000.0,
                premium: 6000.0,
                status: PolicyStatus::RenewalDue,
            },
        ];
        let summary = summarize_policies(&policies);
        assert_eq!(summary.total_coverage, 550000.0);
        assert_eq!(summary.total_premium, 18000.0);
        assert_eq!(summary.renewals_due, 1);
    }

    #[test]
    fn test_policy_status_deserializes_snake_case() {
        let policy: InsurancePolicy = serde_yaml::from_str(
            r#"
kind: "Health Insurance"
provider: "BlueCross"
coverage: 300000.0
premium: 18000.0
status: renewal_due
"#,
        )
        .expect("Failed to deserialize");
        assert_eq!(policy.status, PolicyStatus::RenewalDue);
    }
}
