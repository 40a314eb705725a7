use super::ui;
use crate::core::config::AppConfig;
use crate::core::education::{self, Difficulty, ModuleState};
use anyhow::Result;
use comfy_table::{Cell, CellAlignment};

pub fn run(config: &AppConfig) -> Result<()> {
    let summary = education::summarize(&config.education.modules);

    println!("\n{}", ui::style_text("Education Hub", ui::StyleType::Title));

    println!(
        "\n{} of {} lessons completed",
        ui::style_text(&summary.completed_lessons.to_string(), ui::StyleType::TotalValue),
        ui::style_text(&summary.total_lessons.to_string(), ui::StyleType::TotalLabel)
    );
    match summary.percent {
        Some(pct) => println!("{}  {pct:.1}% complete", ui::meter(pct, 40)),
        None => println!("{}", ui::style_text("No modules configured", ui::StyleType::Subtle)),
    }

    // Modules
    println!(
        "\n{}",
        ui::style_text("Learning Modules", ui::StyleType::Title)
    );
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Module"),
        ui::header_cell("Difficulty"),
        ui::header_cell("Lessons"),
        ui::header_cell("Progress"),
        ui::header_cell(""),
        ui::header_cell("Duration"),
        ui::header_cell("Next"),
    ]);
    for module in &config.education.modules {
        let difficulty = match module.difficulty {
            Difficulty::Beginner => ui::badge_cell(module.difficulty.label(), ui::BadgeTone::Success),
            Difficulty::Intermediate => {
                ui::badge_cell(module.difficulty.label(), ui::BadgeTone::Warning)
            }
            Difficulty::Advanced => ui::badge_cell(module.difficulty.label(), ui::BadgeTone::Danger),
        };
        let next = match module.state() {
            ModuleState::Completed => ui::badge_cell("Review", ui::BadgeTone::Neutral),
            ModuleState::InProgress => ui::badge_cell("Continue", ui::BadgeTone::Warning),
            ModuleState::NotStarted => ui::badge_cell("Start", ui::BadgeTone::Success),
        };
        table.add_row(vec![
            Cell::new(format!("{}\n{}", module.title, module.description)),
            difficulty,
            Cell::new(format!("{}/{}", module.completed, module.lessons))
                .set_alignment(CellAlignment::Right),
            ui::format_optional_cell(module.percent_complete(), |p| format!("{p:.1}%")),
            Cell::new(ui::meter(module.percent_complete().unwrap_or(0.0), 15)),
            Cell::new(&module.duration),
            next,
        ]);
    }
    println!("\n{table}");

    // Tips
    if !config.education.tips.is_empty() {
        println!(
            "\n{}",
            ui::style_text("Financial Tips & Insights", ui::StyleType::Title)
        );
        for tip in &config.education.tips {
            println!(
                "\n  {} [{}]\n  {}",
                ui::style_text(&tip.title, ui::StyleType::TotalLabel),
                tip.category,
                ui::style_text(&tip.description, ui::StyleType::Subtle)
            );
        }
    }

    // Achievements
    if !config.education.achievements.is_empty() {
        println!(
            "\n{}",
            ui::style_text("Your Achievements", ui::StyleType::Title)
        );
        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Achievement"),
            ui::header_cell("Status"),
        ]);
        for achievement in &config.education.achievements {
            let status = if achievement.unlocked {
                ui::badge_cell("Unlocked", ui::BadgeTone::Success)
            } else {
                ui::badge_cell("Locked", ui::BadgeTone::Neutral)
            };
            table.add_row(vec![Cell::new(&achievement.name), status]);
        }
        println!("\n{table}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_education_renders_sample_config() {
        let config: AppConfig =
            serde_yaml::from_str(include_str!("../../docs/example_config.yaml")).unwrap();
        assert!(run(&config).is_ok());
    }
}
