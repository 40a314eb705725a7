use super::ui;
use crate::core::config::AppConfig;
use crate::core::debt::{self, DebtStatus};
use anyhow::Result;
use comfy_table::{Cell, CellAlignment};

pub fn run(config: &AppConfig) -> Result<()> {
    let currency = &config.currency;
    let summary = debt::summarize(&config.debt.debts);

    println!(
        "\n{}",
        ui::style_text("Debt & Loan Manager", ui::StyleType::Title)
    );

    println!(
        "\nTotal Debt ({currency}): {}",
        ui::style_text(
            &ui::format_amount(summary.total_outstanding),
            ui::StyleType::Error
        )
    );
    if let Some(pct) = summary.percent_paid {
        println!("{}  {pct:.1}% paid off", ui::meter(pct, 40));
    }
    println!(
        "Monthly EMI ({currency}): {} across {} active loans",
        ui::style_text(&ui::format_amount(summary.total_emi), ui::StyleType::TotalLabel),
        summary.active_loans
    );
    println!(
        "Total Paid ({currency}): {}",
        ui::style_text(&ui::format_amount(summary.total_paid), ui::StyleType::TotalValue)
    );

    // Repayment schedule
    if !config.debt.repayment_schedule.is_empty() {
        println!(
            "\n{}",
            ui::style_text("Repayment Schedule Breakdown", ui::StyleType::Title)
        );
        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Month"),
            ui::header_cell("Principal"),
            ui::header_cell("Interest"),
            ui::header_cell("Principal Share"),
        ]);
        for month in &config.debt.repayment_schedule {
            table.add_row(vec![
                Cell::new(&month.month),
                Cell::new(ui::format_amount(month.principal)).set_alignment(CellAlignment::Right),
                Cell::new(ui::format_amount(month.interest)).set_alignment(CellAlignment::Right),
                ui::format_optional_cell(month.principal_share(), |p| format!("{p:.1}%")),
            ]);
        }
        println!("\n{table}");
    }

    // Active loans
    println!("\n{}", ui::style_text("Active Loans", ui::StyleType::Title));
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Loan"),
        ui::header_cell("Type"),
        ui::header_cell(&format!("Remaining / Total ({currency})")),
        ui::header_cell("Paid"),
        ui::header_cell(""),
        ui::header_cell("EMI"),
        ui::header_cell("Rate"),
        ui::header_cell("Next Due"),
        ui::header_cell("Status"),
    ]);
    for loan in &config.debt.debts {
        let progress = debt::debt_progress(loan);
        let status = match loan.status() {
            DebtStatus::OnTrack => ui::badge_cell("On Track", ui::BadgeTone::Success),
            DebtStatus::HighInterest => ui::badge_cell("High Interest", ui::BadgeTone::Danger),
        };
        table.add_row(vec![
            Cell::new(&loan.name),
            Cell::new(&loan.kind),
            Cell::new(format!(
                "{} / {}",
                ui::format_amount(loan.remaining),
                ui::format_amount(loan.total)
            ))
            .set_alignment(CellAlignment::Right),
            ui::format_optional_cell(progress.percent_paid, |p| format!("{p:.1}%")),
            Cell::new(ui::meter(progress.percent_paid.unwrap_or(0.0), 15)),
            Cell::new(ui::format_amount(loan.emi)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.1}%", loan.rate)).set_alignment(CellAlignment::Right),
            Cell::new(loan.next_due.format("%d %b %Y").to_string()),
            status,
        ]);
    }
    println!("\n{table}");

    if !config.debt.suggestions.is_empty() {
        println!(
            "\n{}",
            ui::style_text("Debt Reduction Strategy", ui::StyleType::TotalLabel)
        );
        for suggestion in &config.debt.suggestions {
            println!("  - {}", ui::style_text(suggestion, ui::StyleType::Subtle));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debt_renders_sample_config() {
        let config: AppConfig =
            serde_yaml::from_str(include_str!("../../docs/example_config.yaml")).unwrap();
        assert!(run(&config).is_ok());
    }
}
