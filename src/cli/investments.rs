use super::ui;
use crate::core::config::AppConfig;
use crate::core::investment::{self, RiskLevel};
use anyhow::Result;
use comfy_table::{Cell, CellAlignment};

pub fn run(config: &AppConfig) -> Result<()> {
    let currency = &config.currency;
    let inv = &config.investments;
    let summary = investment::summarize(&inv.allocation, &inv.holdings);

    println!(
        "\n{}",
        ui::style_text("Investment Planner", ui::StyleType::Title)
    );

    println!(
        "\nPortfolio Value ({currency}): {} ({})",
        ui::style_text(
            &ui::format_amount(summary.total_value),
            ui::StyleType::TotalValue
        ),
        ui::style_text(
            &format!("{:+.1}% overall", inv.total_return_percent),
            ui::StyleType::Subtle
        )
    );
    println!(
        "Risk Profile: {}",
        ui::style_text(&inv.risk_profile, ui::StyleType::TotalLabel)
    );
    println!(
        "Diversification: {}  {:.0}% optimal",
        ui::meter(inv.diversification_score, 20),
        inv.diversification_score
    );

    // Allocation with derived shares
    println!(
        "\n{}",
        ui::style_text("Portfolio Allocation", ui::StyleType::Title)
    );
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Asset Class"),
        ui::header_cell(&format!("Value ({currency})")),
        ui::header_cell("Allocation"),
    ]);
    for share in investment::allocation_shares(&inv.allocation) {
        let percent_cell = match share.percent {
            Some(pct) => ui::format_percentage_cell(pct, |p| format!("{p:.1}%")),
            None => ui::format_optional_cell(None::<f64>, |p| format!("{p:.1}%")),
        };
        table.add_row(vec![
            Cell::new(&share.name),
            Cell::new(ui::format_amount(share.value)).set_alignment(CellAlignment::Right),
            percent_cell,
        ]);
    }
    println!("\n{table}");

    // Performance series
    if !inv.performance.is_empty() {
        println!(
            "\n{}",
            ui::style_text("6-Month Performance", ui::StyleType::Title)
        );
        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Month"),
            ui::header_cell(&format!("Value ({currency})")),
        ]);
        for point in &inv.performance {
            table.add_row(vec![
                Cell::new(&point.month),
                Cell::new(ui::format_amount(point.value)).set_alignment(CellAlignment::Right),
            ]);
        }
        println!("\n{table}");

        if let Some(change) = investment::performance_change(&inv.performance) {
            let style = if change >= 0.0 {
                ui::StyleType::TotalValue
            } else {
                ui::StyleType::Error
            };
            println!(
                "\nChange over period: {}",
                ui::style_text(&format!("{change:+.1}%"), style)
            );
        }
    }

    // Holdings
    println!("\n{}", ui::style_text("Your Holdings", ui::StyleType::Title));
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Holding"),
        ui::header_cell(&format!("Value ({currency})")),
        ui::header_cell("6M Return"),
        ui::header_cell("Risk"),
    ]);
    for holding in &inv.holdings {
        let risk = match holding.risk {
            RiskLevel::Low => ui::badge_cell(holding.risk.label(), ui::BadgeTone::Success),
            RiskLevel::Medium => ui::badge_cell(holding.risk.label(), ui::BadgeTone::Warning),
            RiskLevel::High => ui::badge_cell(holding.risk.label(), ui::BadgeTone::Danger),
        };
        table.add_row(vec![
            Cell::new(&holding.name),
            Cell::new(ui::format_amount(holding.value)).set_alignment(CellAlignment::Right),
            ui::change_cell(holding.change_percent),
            risk,
        ]);
    }
    println!("\n{table}");

    if !inv.suggestions.is_empty() {
        println!(
            "\n{}",
            ui::style_text("Suggestions", ui::StyleType::TotalLabel)
        );
        for suggestion in &inv.suggestions {
            println!("  - {}", ui::style_text(suggestion, ui::StyleType::Subtle));
        }
    }

    Ok(())
}
