//! Portfolio holdings, allocation shares, and performance series.

use crate::core::metrics;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Holding {
    pub name: String,
    pub value: f64,
    /// Signed return over the reporting period, in percent.
    pub change_percent: f64,
    pub risk: RiskLevel,
}

/// One asset class in the allocation breakdown. The share is derived from
/// the values at render time.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AllocationSlice {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AllocationShare {
    pub name: String,
    pub value: f64,
    pub percent: Option<f64>,
}

/// Weights each slice against the combined value.
pub fn allocation_shares(slices: &[AllocationSlice]) -> Vec<AllocationShare> {
    let total = metrics::total_of(slices, |s| s.value);
    slices
        .iter()
        .map(|slice| AllocationShare {
            name: slice.name.clone(),
            value: slice.value,
            percent: metrics::percentage(slice.value, total).ok(),
        })
        .collect()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PerformancePoint {
    pub month: String,
    pub value: f64,
}

/// Percentage change from the first to the last point of the series.
pub fn performance_change(series: &[PerformancePoint]) -> Option<f64> {
    let first = series.first()?;
    let last = series.last()?;
    metrics::percentage(last.value - first.value, first.value).ok()
}

#[derive(Debug, Clone, Serialize)]
pub struct PortfolioSummary {
    pub total_value: f64,
    pub holdings_count: usize,
}

pub fn summarize(slices: &[AllocationSlice], holdings: &[Holding]) -> PortfolioSummary {
    PortfolioSummary {
        total_value: metrics::total_of(slices, |s| s.value),
        holdings_count: holdings.len(),
    }
}
