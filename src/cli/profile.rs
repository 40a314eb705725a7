use super::ui;
use crate::core::config::AppConfig;
use anyhow::Result;
use comfy_table::{Cell, CellAlignment};

pub fn run(config: &AppConfig) -> Result<()> {
    let profile = &config.profile;

    println!(
        "\n{}",
        ui::style_text("Profile & Settings", ui::StyleType::Title)
    );

    println!(
        "\n{} ({})",
        ui::style_text(&profile.name, ui::StyleType::TotalLabel),
        ui::style_text(&profile.membership, ui::StyleType::Subtle)
    );

    let mut table = ui::new_styled_table();
    table.set_header(vec![ui::header_cell("Field"), ui::header_cell("Value")]);
    table.add_row(vec![Cell::new("Email"), Cell::new(&profile.email)]);
    table.add_row(vec![Cell::new("Phone"), Cell::new(&profile.phone)]);
    table.add_row(vec![
        Cell::new("Date of Birth"),
        Cell::new(profile.date_of_birth.format("%b %d, %Y").to_string()),
    ]);
    table.add_row(vec![Cell::new("Occupation"), Cell::new(&profile.occupation)]);
    table.add_row(vec![Cell::new("Location"), Cell::new(&profile.location)]);
    println!("\n{table}");

    println!(
        "\n{}",
        ui::style_text("Financial Profile", ui::StyleType::Title)
    );
    let mut table = ui::new_styled_table();
    table.set_header(vec![ui::header_cell("Field"), ui::header_cell("Value")]);
    table.add_row(vec![
        Cell::new(format!("Annual Income ({})", config.currency)),
        Cell::new(ui::format_amount(profile.annual_income)).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Risk Tolerance"),
        Cell::new(profile.risk_tolerance.label()),
    ]);
    table.add_row(vec![
        Cell::new("Primary Financial Goal"),
        Cell::new(&profile.primary_goal),
    ]);
    table.add_row(vec![
        Cell::new("Investment Timeline"),
        Cell::new(&profile.investment_timeline),
    ]);
    println!("\n{table}");

    println!("\n{}", ui::style_text("App Settings", ui::StyleType::Title));
    let mut table = ui::new_styled_table();
    table.set_header(vec![ui::header_cell("Setting"), ui::header_cell("State")]);
    let settings = [
        ("Email Notifications", profile.settings.email_notifications),
        ("Budget Alerts", profile.settings.budget_alerts),
        ("Investment Updates", profile.settings.investment_updates),
        ("AI Recommendations", profile.settings.ai_recommendations),
    ];
    for (name, enabled) in settings {
        let state = if enabled {
            ui::badge_cell("On", ui::BadgeTone::Success)
        } else {
            ui::badge_cell("Off", ui::BadgeTone::Neutral)
        };
        table.add_row(vec![Cell::new(name), state]);
    }
    println!("\n{table}");

    if !profile.linked_accounts.is_empty() {
        println!(
            "\n{}",
            ui::style_text("Connected Bank Accounts", ui::StyleType::Title)
        );
        let mut table = ui::new_styled_table();
        table.set_header(vec![ui::header_cell("Account"), ui::header_cell("Number")]);
        for account in &profile.linked_accounts {
            table.add_row(vec![
                Cell::new(&account.name),
                Cell::new(ui::style_text(&account.number, ui::StyleType::Subtle)),
            ]);
        }
        println!("\n{table}");
    }

    Ok(())
}
