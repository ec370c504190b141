//! Commission Simulation Toolkit
//!
//! Drives the commission engine across revenue sweeps and packages the
//! results for tables and charts.
//!
//! # Modules
//! - `sweep` — Revenue sweeps, model/level series, snapshots and bracket markers
//! - `reports` — Comparison and breakdown tables, crossover analysis
//! - `export` — Complete simulation JSON export

pub mod sweep;
pub mod reports;
pub mod export;

/// Crate version constant
pub const VERSION: &str = "1.0.0";
