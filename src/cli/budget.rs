use super::ui;
use crate::core::budget::{self, BudgetHealth};
use crate::core::config::AppConfig;
use anyhow::Result;
use comfy_table::{Cell, CellAlignment, Color};

pub fn run(config: &AppConfig) -> Result<()> {
    let currency = &config.currency;
    let summary = budget::summarize(&config.budget.categories);

    println!(
        "\n{}",
        ui::style_text("Budget & Cash Flow", ui::StyleType::Title)
    );

    println!(
        "\nMonthly Budget ({currency}): {}",
        ui::style_text(
            &ui::format_amount(summary.total_budget),
            ui::StyleType::TotalLabel
        )
    );
    let spent = match summary.percent_used {
        Some(pct) => format!("{} ({pct:.1}% of budget)", ui::format_amount(summary.total_spent)),
        None => ui::format_amount(summary.total_spent),
    };
    println!(
        "Total Spent ({currency}): {}",
        ui::style_text(&spent, ui::StyleType::TotalLabel)
    );
    let (remaining_text, remaining_style) = match summary.health {
        BudgetHealth::OverBudget => (
            format!("{} over budget", ui::format_amount(-summary.remaining)),
            ui::StyleType::Error,
        ),
        BudgetHealth::OnBudget => ("fully allocated".to_string(), ui::StyleType::TotalLabel),
        BudgetHealth::UnderBudget => (
            format!("{} under budget", ui::format_amount(summary.remaining)),
            ui::StyleType::TotalValue,
        ),
    };
    println!(
        "Remaining: {}",
        ui::style_text(&remaining_text, remaining_style)
    );

    // Budget vs actual trend
    if !config.budget.monthly_trend.is_empty() {
        println!(
            "\n{}",
            ui::style_text("Budget vs Actual Spending", ui::StyleType::Title)
        );
        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Month"),
            ui::header_cell("Budget"),
            ui::header_cell("Actual"),
            ui::header_cell("Variance"),
        ]);
        for month in &config.budget.monthly_trend {
            let variance = month.budget - month.actual;
            let variance_color = if variance >= 0.0 { Color::Green } else { Color::Red };
            table.add_row(vec![
                Cell::new(&month.month),
                Cell::new(ui::format_amount(month.budget)).set_alignment(CellAlignment::Right),
                Cell::new(ui::format_amount(month.actual)).set_alignment(CellAlignment::Right),
                Cell::new(ui::format_amount(variance))
                    .fg(variance_color)
                    .set_alignment(CellAlignment::Right),
            ]);
        }
        println!("\n{table}");
    }

    // Per-category usage
    println!(
        "\n{}",
        ui::style_text("Spending by Category", ui::StyleType::Title)
    );
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Category"),
        ui::header_cell(&format!("Spent / Budget ({currency})")),
        ui::header_cell("Used"),
        ui::header_cell(""),
        ui::header_cell("Status"),
    ]);
    for category in &config.budget.categories {
        let usage = budget::category_usage(category);
        let meter_color = if usage.over_budget { Color::Red } else { Color::Green };
        let status = if category.alert {
            ui::badge_cell("Alert", ui::BadgeTone::Danger)
        } else if usage.over_budget {
            ui::badge_cell("Over budget", ui::BadgeTone::Warning)
        } else {
            ui::badge_cell("OK", ui::BadgeTone::Success)
        };
        table.add_row(vec![
            Cell::new(&category.name),
            Cell::new(format!(
                "{} / {}",
                ui::format_amount(category.spent),
                ui::format_amount(category.budget)
            ))
            .set_alignment(CellAlignment::Right),
            ui::format_optional_cell(usage.percent_used, |p| format!("{p:.1}%")),
            Cell::new(ui::meter(usage.percent_used.unwrap_or(0.0), 20)).fg(meter_color),
            status,
        ]);
    }
    println!("\n{table}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_renders_sample_config() {
        let config: AppConfig =
            serde_yaml::from_str(include_str!("../../docs/example_config.yaml")).unwrap();
        assert!(run(&config).is_ok());
    }
}
