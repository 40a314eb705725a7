use super::ui;
use crate::core::config::AppConfig;
use crate::core::{metrics, savings};
use anyhow::Result;
use comfy_table::{Cell, CellAlignment, Color};

pub fn run(config: &AppConfig) -> Result<()> {
    let currency = &config.currency;
    let overview = &config.overview;

    println!(
        "\n{}",
        ui::style_text("Financial Overview", ui::StyleType::Title)
    );

    if let Some(tip) = &overview.tip {
        println!(
            "\n{} {}",
            ui::style_text("Tip of the day:", ui::StyleType::TotalLabel),
            ui::style_text(tip, ui::StyleType::Subtle)
        );
    }

    let goals = savings::summarize(&config.savings.goals);

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Metric"),
        ui::header_cell(&format!("Value ({currency})")),
        ui::header_cell("Change"),
    ]);
    table.add_row(vec![
        Cell::new("Net Worth"),
        Cell::new(ui::format_amount(overview.net_worth)).set_alignment(CellAlignment::Right),
        Cell::new(&overview.net_worth_change),
    ]);
    table.add_row(vec![
        Cell::new("Total Savings"),
        Cell::new(ui::format_amount(overview.total_savings)).set_alignment(CellAlignment::Right),
        Cell::new(&overview.savings_change),
    ]);
    table.add_row(vec![
        Cell::new("Monthly Expenses"),
        Cell::new(ui::format_amount(overview.monthly_expenses)).set_alignment(CellAlignment::Right),
        Cell::new(&overview.expenses_change),
    ]);
    table.add_row(vec![
        Cell::new("Goal Progress"),
        ui::format_optional_cell(goals.percent, |p| format!("{p:.1}%")),
        Cell::new(format!("{} active goals", goals.active_goals)),
    ]);
    println!("\n{table}");

    ui::print_separator();

    // Income vs expenses
    println!(
        "\n{}",
        ui::style_text("Income vs Expenses", ui::StyleType::Title)
    );
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Month"),
        ui::header_cell("Income"),
        ui::header_cell("Expenses"),
        ui::header_cell("Net"),
    ]);
    for month in &overview.cashflow {
        let net = month.net();
        let net_color = if net >= 0.0 { Color::Green } else { Color::Red };
        table.add_row(vec![
            Cell::new(&month.month),
            Cell::new(ui::format_amount(month.income)).set_alignment(CellAlignment::Right),
            Cell::new(ui::format_amount(month.expenses)).set_alignment(CellAlignment::Right),
            Cell::new(ui::format_amount(net))
                .fg(net_color)
                .set_alignment(CellAlignment::Right),
        ]);
    }
    println!("\n{table}");

    // Expense breakdown with derived shares
    println!(
        "\n{}",
        ui::style_text("Expense Breakdown", ui::StyleType::Title)
    );
    let total_expenses = metrics::total_of(&overview.expense_breakdown, |s| s.amount);
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Category"),
        ui::header_cell(&format!("Amount ({currency})")),
        ui::header_cell("Share"),
    ]);
    for slice in &overview.expense_breakdown {
        let share = metrics::percentage(slice.amount, total_expenses).ok();
        table.add_row(vec![
            Cell::new(&slice.name),
            Cell::new(ui::format_amount(slice.amount)).set_alignment(CellAlignment::Right),
            ui::format_optional_cell(share, |s| format!("{s:.1}%")),
        ]);
    }
    println!("\n{table}");

    // Active goals
    println!(
        "\n{}",
        ui::style_text("Active Goals Progress", ui::StyleType::Title)
    );
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Goal"),
        ui::header_cell("Saved / Target"),
        ui::header_cell("Progress"),
        ui::header_cell(""),
    ]);
    for goal in &config.savings.goals {
        let percent = metrics::percentage(goal.current, goal.target).ok();
        table.add_row(vec![
            Cell::new(&goal.name),
            Cell::new(format!(
                "{} / {}",
                ui::format_amount(goal.current),
                ui::format_amount(goal.target)
            ))
            .set_alignment(CellAlignment::Right),
            ui::format_optional_cell(percent, |p| format!("{p:.1}%")),
            Cell::new(ui::meter(percent.unwrap_or(0.0), 20)),
        ]);
    }
    println!("\n{table}");

    Ok(())
}
