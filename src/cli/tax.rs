use super::ui;
use crate::core::config::AppConfig;
use crate::core::tax::{self, PolicyStatus};
use anyhow::Result;
use comfy_table::{Cell, CellAlignment, Color};

pub fn run(config: &AppConfig) -> Result<()> {
    let currency = &config.currency;
    let tax_config = &config.tax;

    println!(
        "\n{}",
        ui::style_text("Tax & Insurance Planner", ui::StyleType::Title)
    );

    println!(
        "\nEstimated Tax Liability ({currency}): {} ({})",
        ui::style_text(
            &ui::format_amount(tax_config.estimated_liability),
            ui::StyleType::TotalLabel
        ),
        ui::style_text(&tax_config.fiscal_year, ui::StyleType::Subtle)
    );
    println!(
        "Tax Saved through deductions ({currency}): {}",
        ui::style_text(&ui::format_amount(tax_config.tax_saved), ui::StyleType::TotalValue)
    );

    // Deduction utilization
    println!(
        "\n{}",
        ui::style_text("Tax Deduction Utilization", ui::StyleType::Title)
    );
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Deduction"),
        ui::header_cell(&format!("Used ({currency})")),
        ui::header_cell("Limit"),
        ui::header_cell("Usage"),
        ui::header_cell(""),
        ui::header_cell("Headroom"),
    ]);
    for deduction in &tax_config.deductions {
        let usage = tax::deduction_usage(deduction);
        let limit_cell = if deduction.is_unlimited() {
            Cell::new("No limit").fg(Color::DarkGrey)
        } else {
            Cell::new(ui::format_amount(deduction.limit)).set_alignment(CellAlignment::Right)
        };
        let headroom = match usage.remaining {
            Some(remaining) if remaining > 0.0 => {
                ui::badge_cell(&format!("{} remaining", ui::format_amount(remaining)), ui::BadgeTone::Success)
            }
            Some(remaining) if remaining < 0.0 => {
                ui::badge_cell(&format!("{} over limit", ui::format_amount(-remaining)), ui::BadgeTone::Danger)
            }
            Some(_) => ui::badge_cell("Exhausted", ui::BadgeTone::Warning),
            None => Cell::new("").fg(Color::DarkGrey),
        };
        table.add_row(vec![
            Cell::new(&deduction.name),
            Cell::new(ui::format_amount(deduction.used)).set_alignment(CellAlignment::Right),
            limit_cell,
            Cell::new(format!("{:.1}%", usage.percent)).set_alignment(CellAlignment::Right),
            Cell::new(ui::meter(usage.percent, 15)),
            headroom,
        ]);
    }
    println!("\n{table}");

    // Saving options
    if !tax_config.saving_options.is_empty() {
        println!(
            "\n{}",
            ui::style_text("Tax Saving Investment Options", ui::StyleType::Title)
        );
        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Option"),
            ui::header_cell("Returns"),
            ui::header_cell("Lock-in"),
            ui::header_cell("Section"),
            ui::header_cell(""),
        ]);
        for option in &tax_config.saving_options {
            let recommended = if option.recommended {
                ui::badge_cell("Recommended", ui::BadgeTone::Success)
            } else {
                Cell::new("")
            };
            table.add_row(vec![
                Cell::new(&option.name),
                Cell::new(&option.returns).set_alignment(CellAlignment::Right),
                Cell::new(&option.lock_in),
                Cell::new(&option.section),
                recommended,
            ]);
        }
        println!("\n{table}");
    }

    // Insurance coverage
    if !tax_config.policies.is_empty() {
        println!(
            "\n{}",
            ui::style_text("Insurance Coverage", ui::StyleType::Title)
        );
        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Policy"),
            ui::header_cell("Provider"),
            ui::header_cell(&format!("Coverage ({currency})")),
            ui::header_cell(&format!("Annual Premium ({currency})")),
            ui::header_cell("Status"),
        ]);
        for policy in &tax_config.policies {
            let status = match policy.status {
                PolicyStatus::Active => ui::badge_cell("Active", ui::BadgeTone::Success),
                PolicyStatus::RenewalDue => ui::badge_cell("Renewal Due", ui::BadgeTone::Danger),
            };
            table.add_row(vec![
                Cell::new(&policy.kind),
                Cell::new(&policy.provider),
                Cell::new(ui::format_amount(policy.coverage)).set_alignment(CellAlignment::Right),
                Cell::new(ui::format_amount(policy.premium)).set_alignment(CellAlignment::Right),
                status,
            ]);
        }
        println!("\n{table}");

        let insurance = tax::summarize_policies(&tax_config.policies);
        println!(
            "\nTotal Coverage ({currency}): {}  Annual Premiums ({currency}): {}",
            ui::style_text(
                &ui::format_amount(insurance.total_coverage),
                ui::StyleType::TotalValue
            ),
            ui::style_text(
                &ui::format_amount(insurance.total_premium),
                ui::StyleType::TotalLabel
            )
        );
        if insurance.renewals_due > 0 {
            println!(
                "{}",
                ui::style_text(
                    &format!("{} policy renewal(s) due", insurance.renewals_due),
                    ui::StyleType::Error
                )
            );
        }
    }

    if !tax_config.suggestions.is_empty() {
        println!(
            "\n{}",
            ui::style_text("Tax Optimization Tips", ui::StyleType::TotalLabel)
        );
        for suggestion in &tax_config.suggestions {
            println!("  - {}", ui::style_text(suggestion, ui::StyleType::Subtle));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_renders_sample_config() {
        let config: AppConfig =
            serde_yaml::from_str(include_str!("../../docs/example_config.yaml")).unwrap();
        assert!(run(&config).is_ok());
    }
}
