//! Budget categories and the monthly spending summary.

use crate::core::metrics;
use serde::{Deserialize, Serialize};

/// One spending category with its monthly envelope.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BudgetCategory {
    pub name: String,
    pub budget: f64,
    pub spent: f64,
    /// User-configured alert flag, kept as stored data.
    #[serde(default)]
    pub alert: bool,
}

/// Budget-vs-actual data point for the trend view.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MonthTrend {
    pub month: String,
    pub budget: f64,
    pub actual: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BudgetHealth {
    UnderBudget,
    OnBudget,
    OverBudget,
}

impl BudgetHealth {
    fn from_remaining(remaining: f64) -> Self {
        if remaining < 0.0 {
            BudgetHealth::OverBudget
        } else if remaining == 0.0 {
            BudgetHealth::OnBudget
        } else {
            BudgetHealth::UnderBudget
        }
    }
}

/// Derived figures for a single category.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryUsage {
    pub name: String,
    /// `None` when the category has no budget to measure against.
    pub percent_used: Option<f64>,
    pub remaining: f64,
    pub over_budget: bool,
}

pub fn category_usage(category: &BudgetCategory) -> CategoryUsage {
    CategoryUsage {
        name: category.name.clone(),
        percent_used: metrics::percentage(category.spent, category.budget).ok(),
        remaining: metrics::remaining(category.budget, category.spent),
        over_budget: category.spent > category.budget,
    }
}

/// Month-level aggregate across all categories.
#[derive(Debug, Clone, Serialize)]
pub struct BudgetSummary {
    pub total_budget: f64,
    pub total_spent: f64,
    pub percent_used: Option<f64>,
    pub remaining: f64,
    pub health: BudgetHealth,
}

pub fn summarize(categories: &[BudgetCategory]) -> BudgetSummary {
    let total_budget = metrics::total_of(categories, |c| c.budget);
    let total_spent = metrics::total_of(categories, |c| c.spent);
    let remaining = metrics::remaining(total_budget, total_spent);
    BudgetSummary {
        total_budget,
        total_spent,
        percent_used: metrics::percentage(total_spent, total_budget).ok(),
        remaining,
        health: BudgetHealth::from_remaining(remaining),
    }
}
