//! Core domain model and metric computations

pub mod budget;
pub mod config;
pub mod debt;
pub mod education;
pub mod investment;
pub mod log;
pub mod metrics;
pub mod savings;
pub mod tax;

// Re-export main types for cleaner imports
pub use config::AppConfig;
pub use metrics::MetricError;
