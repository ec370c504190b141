//! Report modules for simulation output
//!
//! Comparison/breakdown tables and crossover analysis.

pub mod comparison;
pub mod crossover;
