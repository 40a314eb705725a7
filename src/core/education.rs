//! Learning modules, tips, and achievements.

use crate::core::metrics;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

/// Completion state used to pick the call-to-action for a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ModuleState {
    NotStarted,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LearningModule {
    pub title: String,
    pub description: String,
    pub lessons: u32,
    pub completed: u32,
    pub duration: String,
    pub difficulty: Difficulty,
}

impl LearningModule {
    pub fn state(&self) -> ModuleState {
        if self.lessons > 0 && self.completed >= self.lessons {
            ModuleState::Completed
        } else if self.completed > 0 {
            ModuleState::InProgress
        } else {
            ModuleState::NotStarted
        }
    }

    pub fn percent_complete(&self) -> Option<f64> {
        metrics::percentage(f64::from(self.completed), f64::from(self.lessons)).ok()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FinancialTip {
    pub title: String,
    pub description: String,
    pub category: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Achievement {
    pub name: String,
    pub unlocked: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct LearningSummary {
    pub total_lessons: u32,
    pub completed_lessons: u32,
    pub percent: Option<f64>,
}

pub fn summarize(modules: &[LearningModule]) -> LearningSummary {
    let total_lessons: u32 = modules.iter().map(|m| m.lessons).sum();
    let completed_lessons: u32 = modules.iter().map(|m| m.completed).sum();
    LearningSummary {
        total_lessons,
        completed_lessons,
        percent: metrics::percentage(f64::from(completed_lessons), f64::from(total_lessons)).ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(title: &str, lessons: u32, completed: u32) -> LearningModule {
        LearningModule {
            title: title.to_string(),
            description: String::new(),
            lessons,
            completed,
            duration: "45 min".to_string(),
            difficulty: Difficulty::Beginner,
        }
    }

    #[test]
    fn test_module_states() {
        assert_eq!(module("Financial Basics", 8, 8).state(), ModuleState::Completed);
        assert_eq!(module("Smart Saving Strategies", 6, 4).state(), ModuleState::InProgress);
        assert_eq!(module("Debt Management", 7, 0).state(), ModuleState::NotStarted);
    }

    #[test]
    fn test_module_percent() {
        let pct = module("Investment 101", 10, 2).percent_complete().unwrap();
        assert_eq!(pct, 20.0);
        assert_eq!(module("Empty", 0, 0).percent_complete(), None);
    }

    #[test]
    fn test_summary_across_modules() {
        let modules = vec![
            module("Financial Basics", 8, 8),
            module("Smart Saving Strategies", 6, 4),
            module("Investment 101", 10, 2),
        ];
        let summary = summarize(&modules);
        assert_eq!(summary.total_lessons, 24);
        assert_eq!(summary.completed_lessons, 14);
        let pct = summary.percent.unwrap();
        assert!((pct - 14.0 / 24.0 * 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_summary_without_modules() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_lessons, 0);
        assert_eq!(summary.percent, None);
    }
}
