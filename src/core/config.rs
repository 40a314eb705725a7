use crate::core::budget::{BudgetCategory, MonthTrend};
use crate::core::debt::{Debt, RepaymentMonth};
use crate::core::education::{Achievement, FinancialTip, LearningModule};
use crate::core::investment::{AllocationSlice, Holding, PerformancePoint};
use crate::core::savings::SavingsGoal;
use crate::core::tax::{InsurancePolicy, TaxDeduction, TaxSavingOption};
use anyhow::{Context, Result, bail};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CashflowMonth {
    pub month: String,
    pub income: f64,
    pub expenses: f64,
}

impl CashflowMonth {
    pub fn net(&self) -> f64 {
        self.income - self.expenses
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ExpenseSlice {
    pub name: String,
    pub amount: f64,
}

/// Headline figures and chart series for the dashboard view.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct OverviewConfig {
    pub net_worth: f64,
    pub net_worth_change: String,
    pub total_savings: f64,
    pub savings_change: String,
    pub monthly_expenses: f64,
    pub expenses_change: String,
    pub tip: Option<String>,
    pub cashflow: Vec<CashflowMonth>,
    pub expense_breakdown: Vec<ExpenseSlice>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BudgetConfig {
    pub categories: Vec<BudgetCategory>,
    #[serde(default)]
    pub monthly_trend: Vec<MonthTrend>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SavingsConfig {
    pub goals: Vec<SavingsGoal>,
    pub tip: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct InvestmentConfig {
    pub total_return_percent: f64,
    pub risk_profile: String,
    /// Diversification score out of 100.
    pub diversification_score: f64,
    pub allocation: Vec<AllocationSlice>,
    #[serde(default)]
    pub performance: Vec<PerformancePoint>,
    pub holdings: Vec<Holding>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DebtConfig {
    pub debts: Vec<Debt>,
    #[serde(default)]
    pub repayment_schedule: Vec<RepaymentMonth>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TaxConfig {
    pub estimated_liability: f64,
    pub fiscal_year: String,
    pub tax_saved: f64,
    pub deductions: Vec<TaxDeduction>,
    #[serde(default)]
    pub saving_options: Vec<TaxSavingOption>,
    #[serde(default)]
    pub policies: Vec<InsurancePolicy>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct EducationConfig {
    pub modules: Vec<LearningModule>,
    #[serde(default)]
    pub tips: Vec<FinancialTip>,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RiskTolerance {
    Conservative,
    Moderate,
    Aggressive,
}

impl RiskTolerance {
    pub fn label(&self) -> &'static str {
        match self {
            RiskTolerance::Conservative => "Conservative",
            RiskTolerance::Moderate => "Moderate",
            RiskTolerance::Aggressive => "Aggressive",
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct NotificationSettings {
    #[serde(default)]
    pub email_notifications: bool,
    #[serde(default)]
    pub budget_alerts: bool,
    #[serde(default)]
    pub investment_updates: bool,
    #[serde(default)]
    pub ai_recommendations: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LinkedAccount {
    pub name: String,
    /// Masked account number as shown in the UI, e.g. "****4532".
    pub number: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: chrono::NaiveDate,
    pub occupation: String,
    pub location: String,
    pub membership: String,
    pub annual_income: f64,
    pub risk_tolerance: RiskTolerance,
    pub primary_goal: String,
    pub investment_timeline: String,
    pub settings: NotificationSettings,
    #[serde(default)]
    pub linked_accounts: Vec<LinkedAccount>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    pub currency: String,
    pub profile: UserProfile,
    pub overview: OverviewConfig,
    pub budget: BudgetConfig,
    pub savings: SavingsConfig,
    pub investments: InvestmentConfig,
    pub debt: DebtConfig,
    pub tax: TaxConfig,
    pub education: EducationConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("io", "finmate", "finmate")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        config.validate()?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    /// Rejects records the aggregation layer assumes are well-formed.
    pub fn validate(&self) -> Result<()> {
        for category in &self.budget.categories {
            if category.budget < 0.0 || category.spent < 0.0 {
                bail!("budget category '{}' has a negative amount", category.name);
            }
        }
        for goal in &self.savings.goals {
            if goal.target < 0.0 || goal.current < 0.0 {
                bail!("savings goal '{}' has a negative amount", goal.name);
            }
        }
        for debt in &self.debt.debts {
            if debt.total < 0.0 || debt.remaining < 0.0 || debt.emi < 0.0 {
                bail!("debt '{}' has a negative amount", debt.name);
            }
            if debt.remaining > debt.total {
                bail!(
                    "debt '{}' has remaining {} exceeding its total {}",
                    debt.name,
                    debt.remaining,
                    debt.total
                );
            }
        }
        for deduction in &self.tax.deductions {
            if deduction.limit < 0.0 || deduction.used < 0.0 {
                bail!("tax deduction '{}' has a negative amount", deduction.name);
            }
        }
        for module in &self.education.modules {
            if module.completed > module.lessons {
                bail!(
                    "learning module '{}' has {} completed lessons out of {}",
                    module.title,
                    module.completed,
                    module.lessons
                );
            }
        }
        Ok(())
    }
}
