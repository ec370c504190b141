//! Commission Engine
//!
//! Computes sales-commission payouts under two compensation models:
//! - tiered: revenue sliced across per-level brackets, plus a fixed base
//! - legacy: flat rate over the whole revenue, plus step bonuses
//!
//! All functions are pure: no I/O, no shared mutable state. Rate tables are
//! compiled-in constants handed out as value copies.

pub mod rates;
pub mod tiered;
pub mod legacy;
pub mod comparison;
pub mod format;

pub use comparison::{compare_models, quote, CommissionQuote, ModelComparison};
pub use legacy::{compute_legacy_total, LegacyPolicy};
pub use rates::{all_rate_tables, fixed_base, rate_table, rate_table_for_key, RateTable};
pub use tiered::{compute_tiered_breakdown, compute_tiered_total};

/// Crate version constant
pub const ENGINE_VERSION: &str = "0.1.0";
