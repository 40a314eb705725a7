//! JSON export of the dataset together with every derived summary.

use crate::core::config::AppConfig;
use crate::core::{budget, debt, education, investment, metrics, savings, tax};
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct GoalMetrics<'a> {
    name: &'a str,
    #[serde(flatten)]
    progress: savings::GoalProgress,
}

#[derive(Serialize)]
struct DebtMetrics<'a> {
    name: &'a str,
    status: debt::DebtStatus,
    #[serde(flatten)]
    progress: debt::DebtProgress,
}

#[derive(Serialize)]
struct DeductionMetrics<'a> {
    name: &'a str,
    #[serde(flatten)]
    usage: tax::DeductionUsage,
}

#[derive(Serialize)]
struct ModuleMetrics<'a> {
    title: &'a str,
    state: education::ModuleState,
    percent: Option<f64>,
}

#[derive(Serialize)]
struct DerivedMetrics<'a> {
    budget: budget::BudgetSummary,
    categories: Vec<budget::CategoryUsage>,
    savings: savings::SavingsSummary,
    goals: Vec<GoalMetrics<'a>>,
    portfolio: investment::PortfolioSummary,
    allocation: Vec<investment::AllocationShare>,
    performance_change: Option<f64>,
    debt: debt::DebtSummary,
    debts: Vec<DebtMetrics<'a>>,
    deductions: Vec<DeductionMetrics<'a>>,
    insurance: tax::InsuranceSummary,
    education: education::LearningSummary,
    modules: Vec<ModuleMetrics<'a>>,
    monthly_cash_surplus: f64,
}

#[derive(Serialize)]
struct ExportDocument<'a> {
    generated_on: NaiveDate,
    data: &'a AppConfig,
    metrics: DerivedMetrics<'a>,
}

fn document(config: &AppConfig, today: NaiveDate) -> ExportDocument<'_> {
    let derived = DerivedMetrics {
        budget: budget::summarize(&config.budget.categories),
        categories: config
            .budget
            .categories
            .iter()
            .map(budget::category_usage)
            .collect(),
        savings: savings::summarize(&config.savings.goals),
        goals: config
            .savings
            .goals
            .iter()
            .map(|goal| GoalMetrics {
                name: &goal.name,
                progress: savings::goal_progress(goal, today),
            })
            .collect(),
        portfolio: investment::summarize(
            &config.investments.allocation,
            &config.investments.holdings,
        ),
        allocation: investment::allocation_shares(&config.investments.allocation),
        performance_change: investment::performance_change(&config.investments.performance),
        debt: debt::summarize(&config.debt.debts),
        debts: config
            .debt
            .debts
            .iter()
            .map(|loan| DebtMetrics {
                name: &loan.name,
                status: loan.status(),
                progress: debt::debt_progress(loan),
            })
            .collect(),
        deductions: config
            .tax
            .deductions
            .iter()
            .map(|deduction| DeductionMetrics {
                name: &deduction.name,
                usage: tax::deduction_usage(deduction),
            })
            .collect(),
        insurance: tax::summarize_policies(&config.tax.policies),
        education: education::summarize(&config.education.modules),
        modules: config
            .education
            .modules
            .iter()
            .map(|module| ModuleMetrics {
                title: &module.title,
                state: module.state(),
                percent: module.percent_complete(),
            })
            .collect(),
        monthly_cash_surplus: metrics::total_of(&config.overview.cashflow, |m| m.net())
            / config.overview.cashflow.len().max(1) as f64,
    };
    ExportDocument {
        generated_on: today,
        data: config,
        metrics: derived,
    }
}

pub fn run(config: &AppConfig, output: Option<&Path>) -> Result<()> {
    let doc = document(config, Local::now().date_naive());
    let json = serde_json::to_string_pretty(&doc).context("Failed to serialize export")?;

    match output {
        Some(path) => {
            std::fs::write(path, &json)
                .with_context(|| format!("Failed to write export to {}", path.display()))?;
            tracing::info!("Exported financial data to {}", path.display());
            println!("Exported financial data to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> AppConfig {
        serde_yaml::from_str(include_str!("../../docs/example_config.yaml")).unwrap()
    }

    #[test]
    fn test_export_document_contains_derived_metrics() {
        let config = sample_config();
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let doc = document(&config, today);
        let value = serde_json::to_value(&doc).unwrap();

        assert_eq!(value["metrics"]["budget"]["total_budget"], 4000.0);
        assert_eq!(value["metrics"]["budget"]["total_spent"], 4000.0);
        assert_eq!(value["metrics"]["budget"]["health"], "OnBudget");
        assert_eq!(value["metrics"]["savings"]["total_target"], 570000.0);
        assert_eq!(value["metrics"]["debt"]["total_emi"], 3170.0);
        assert_eq!(value["metrics"]["debts"][2]["status"], "HighInterest");
        assert_eq!(value["metrics"]["deductions"][2]["percent"], 100.0);
        assert!(value["metrics"]["deductions"][2]["remaining"].is_null());
        assert_eq!(value["metrics"]["allocation"][0]["percent"], 45.0);
        assert_eq!(value["metrics"]["education"]["completed_lessons"], 14);
        assert_eq!(value["data"]["currency"], "USD");
    }

    #[test]
    fn test_export_writes_file() {
        let config = sample_config();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.json");
        run(&config, Some(&path)).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert!(value["metrics"]["portfolio"]["total_value"].is_number());
    }
}
