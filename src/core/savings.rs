//! Savings goals and deadline-aware progress figures.

use crate::core::metrics::{self, MetricError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SavingsGoal {
    pub name: String,
    pub description: String,
    pub target: f64,
    pub current: f64,
    pub deadline: NaiveDate,
    pub priority: Priority,
    pub category: String,
}

/// Derived figures for one goal. `months_left` and `monthly_target` are
/// `None` once the deadline has passed; the view renders them as
/// unavailable instead of a negative installment.
#[derive(Debug, Clone, Serialize)]
pub struct GoalProgress {
    pub percent: Option<f64>,
    pub remaining: f64,
    pub months_left: Option<i64>,
    pub monthly_target: Option<f64>,
}

pub fn goal_progress(goal: &SavingsGoal, today: NaiveDate) -> GoalProgress {
    let remaining = metrics::remaining(goal.target, goal.current);
    let months_left = metrics::months_until(goal.deadline, today).ok();
    let monthly_target = match months_left {
        Some(months) => metrics::monthly_contribution(remaining, months).ok(),
        None => None,
    };
    GoalProgress {
        percent: metrics::percentage(goal.current, goal.target).ok(),
        remaining,
        months_left,
        monthly_target,
    }
}

/// Aggregate progress across all goals.
#[derive(Debug, Clone, Serialize)]
pub struct SavingsSummary {
    pub total_target: f64,
    pub total_current: f64,
    pub percent: Option<f64>,
    pub active_goals: usize,
}

pub fn summarize(goals: &[SavingsGoal]) -> SavingsSummary {
    let total_target = metrics::total_of(goals, |g| g.target);
    let total_current = metrics::total_of(goals, |g| g.current);
    SavingsSummary {
        total_target,
        total_current,
        percent: metrics::percentage(total_current, total_target).ok(),
        active_goals: goals.len(),
    }
}

/// Kept for callers that need to distinguish the deadline error from a
/// missing value.
pub fn months_left(goal: &SavingsGoal, today: NaiveDate) -> Result<i64, MetricError> {
    metrics::months_until(goal.deadline, today)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn goal(target: f64, current: f64, deadline: NaiveDate) -> SavingsGoal {
        SavingsGoal {
            name: "Emergency Fund".to_string(),
            description: "6 months of expenses".to_string(),
            target,
            current,
            deadline,
            priority: Priority::High,
            category: "Essential".to_string(),
        }
    }

    #[test]
    fn test_goal_progress_and_remaining() {
        let today = date(2025, 1, 1);
        let progress = goal_progress(&goal(20000.0, 12000.0, date(2025, 12, 31)), today);
        assert_eq!(progress.percent, Some(60.0));
        assert_eq!(progress.remaining, 8000.0);
        assert_eq!(progress.months_left, Some(13));
        // ceil(8000 / 13)
        assert_eq!(progress.monthly_target, Some(616.0));
    }

    #[test]
    fn test_goal_past_deadline_has_no_monthly_target() {
        let today = date(2026, 8, 1);
        let progress = goal_progress(&goal(5000.0, 3000.0, date(2025, 6, 30)), today);
        assert_eq!(progress.percent, Some(60.0));
        assert_eq!(progress.remaining, 2000.0);
        assert_eq!(progress.months_left, None);
        assert_eq!(progress.monthly_target, None);
    }

    #[test]
    fn test_overfunded_goal_needs_no_contribution() {
        let today = date(2025, 1, 1);
        let progress = goal_progress(&goal(5000.0, 6500.0, date(2025, 12, 31)), today);
        assert!(progress.percent.unwrap() > 100.0);
        assert_eq!(progress.remaining, -1500.0);
        assert_eq!(progress.monthly_target, Some(0.0));
    }

    #[test]
    fn test_summary_across_goals() {
        let today = date(2025, 1, 1);
        let goals = vec![
            goal(20000.0, 12000.0, date(2025, 12, 31)),
            goal(5000.0, 3000.0, date(2025, 6, 30)),
        ];
        let summary = summarize(&goals);
        assert_eq!(summary.total_target, 25000.0);
        assert_eq!(summary.total_current, 15000.0);
        assert_eq!(summary.percent, Some(60.0));
        assert_eq!(summary.active_goals, 2);
        assert!(months_left(&goals[0], today).is_ok());
    }

    #[test]
    fn test_summary_without_goals() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_target, 0.0);
        assert_eq!(summary.percent, None);
        assert_eq!(summary.active_goals, 0);
    }

    #[test]
    fn test_priority_deserializes_lowercase() {
        let goal: SavingsGoal = serde_yaml::from_str(
            r#"
name: "Dream Vacation"
description: "Europe trip"
target: 5000.0
current: 3000.0
deadline: "2025-06-30"
priority: medium
category: "Lifestyle"
"#,
        )
        .expect("Failed to deserialize");
        assert_eq!(goal.priority, Priority::Medium);
        assert_eq!(goal.deadline, date(2025, 6, 30));
    }
}
