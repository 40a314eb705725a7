//! View renderers for the terminal dashboard

pub mod budget;
pub mod dashboard;
pub mod debt;
pub mod education;
pub mod export;
pub mod investments;
pub mod profile;
pub mod savings;
pub mod setup;
pub mod tax;
pub mod ui;
