use super::ui;
use crate::core::config::AppConfig;
use crate::core::savings::{self, Priority};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use comfy_table::{Cell, CellAlignment};

pub fn run(config: &AppConfig) -> Result<()> {
    run_as_of(config, Local::now().date_naive())
}

/// Deadline-relative figures depend on the reference date, which tests pin.
pub fn run_as_of(config: &AppConfig, today: NaiveDate) -> Result<()> {
    let currency = &config.currency;
    let summary = savings::summarize(&config.savings.goals);

    println!(
        "\n{}",
        ui::style_text("Savings & Goals", ui::StyleType::Title)
    );

    println!(
        "\nYou've saved {} of your {} target ({currency})",
        ui::style_text(
            &ui::format_amount(summary.total_current),
            ui::StyleType::TotalValue
        ),
        ui::style_text(
            &ui::format_amount(summary.total_target),
            ui::StyleType::TotalLabel
        )
    );
    match summary.percent {
        Some(pct) => println!("{}  {pct:.1}% complete", ui::meter(pct, 40)),
        None => println!("{}", ui::style_text("No goals configured", ui::StyleType::Subtle)),
    }

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Goal"),
        ui::header_cell("Priority"),
        ui::header_cell(&format!("Saved / Target ({currency})")),
        ui::header_cell("Progress"),
        ui::header_cell(""),
        ui::header_cell("Remaining"),
        ui::header_cell("Deadline"),
        ui::header_cell("Monthly"),
    ]);
    for goal in &config.savings.goals {
        let progress = savings::goal_progress(goal, today);
        let priority = match goal.priority {
            Priority::High => ui::badge_cell(goal.priority.label(), ui::BadgeTone::Danger),
            Priority::Medium => ui::badge_cell(goal.priority.label(), ui::BadgeTone::Warning),
            Priority::Low => ui::badge_cell(goal.priority.label(), ui::BadgeTone::Neutral),
        };
        table.add_row(vec![
            Cell::new(format!("{}\n{}", goal.name, goal.description)),
            priority,
            Cell::new(format!(
                "{} / {}",
                ui::format_amount(goal.current),
                ui::format_amount(goal.target)
            ))
            .set_alignment(CellAlignment::Right),
            ui::format_optional_cell(progress.percent, |p| format!("{p:.1}%")),
            Cell::new(ui::meter(progress.percent.unwrap_or(0.0), 20)),
            Cell::new(ui::format_amount(progress.remaining)).set_alignment(CellAlignment::Right),
            Cell::new(goal.deadline.format("%b %Y").to_string()),
            ui::format_optional_cell(progress.monthly_target, ui::format_amount),
        ]);
    }
    println!("\n{table}");

    if let Some(tip) = &config.savings.tip {
        println!(
            "\n{} {}",
            ui::style_text("Smart savings tip:", ui::StyleType::TotalLabel),
            ui::style_text(tip, ui::StyleType::Subtle)
        );
    }

    Ok(())
}
