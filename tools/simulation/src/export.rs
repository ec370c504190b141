//! Simulation export
//!
//! Serializes the current-input snapshot together with the sweep series and
//! reports into a single JSON document for external chart renderers.

use chrono::{DateTime, Utc};
use commission_engine::{quote, CommissionQuote};
use serde::{Deserialize, Serialize};
use types::errors::CommissionResult;
use types::level::SellerLevel;
use types::numeric::Revenue;

use crate::reports::comparison::{breakdown_table, comparison_table, BreakdownTable, ComparisonTable};
use crate::reports::crossover::{self, CrossoverReport};
use crate::sweep::{
    axis_ticks, bracket_markers, level_series, level_snapshot, model_point, model_series,
    AxisTick, BracketMarker, LevelPoint, LevelTotal, ModelPoint, RevenueSweep,
};

/// Inputs that drive one simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationInputs {
    pub revenue: Revenue,
    pub level: SellerLevel,
    pub is_launch_period: bool,
}

/// Combined export containing all simulation outputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationExport {
    pub version: String,
    pub generated_at: DateTime<Utc>,
    pub inputs: SimulationInputs,
    pub sweep: RevenueSweep,
    pub quote: CommissionQuote,
    pub comparison_table: ComparisonTable,
    pub breakdown_table: BreakdownTable,
    /// New vs legacy at the current revenue
    pub current_point: ModelPoint,
    /// Every level's tiered total at the current revenue
    pub level_snapshot: Vec<LevelTotal>,
    pub model_series: Vec<ModelPoint>,
    pub level_series: Vec<LevelPoint>,
    pub markers: Vec<BracketMarker>,
    pub axis_ticks: Vec<AxisTick>,
    pub crossovers: CrossoverReport,
}

/// Build a complete simulation export.
pub fn build_export(inputs: SimulationInputs, sweep: RevenueSweep) -> CommissionResult<SimulationExport> {
    sweep.validate()?;

    let SimulationInputs {
        revenue,
        level,
        is_launch_period,
    } = inputs;

    let quote = quote(revenue, level, is_launch_period);
    let models = model_series(&sweep, level, is_launch_period);
    let crossovers = crossover::analyze(&models);

    tracing::info!(
        %revenue,
        %level,
        is_launch_period,
        points = models.len(),
        crossovers = crossovers.crossovers.len(),
        "built simulation export"
    );

    Ok(SimulationExport {
        version: crate::VERSION.to_string(),
        generated_at: Utc::now(),
        inputs,
        sweep,
        comparison_table: comparison_table(&quote.comparison),
        breakdown_table: breakdown_table(&quote.breakdown),
        current_point: model_point(revenue, level, is_launch_period),
        level_snapshot: level_snapshot(revenue),
        model_series: models,
        level_series: level_series(&sweep),
        markers: bracket_markers(level),
        axis_ticks: axis_ticks(&sweep),
        crossovers,
        quote,
    })
}

/// Export complete simulation data as JSON.
pub fn export_json(export: &SimulationExport) -> String {
    serde_json::to_string_pretty(export).unwrap_or_default()
}

/// Write export to a file path.
pub fn write_to_file(export: &SimulationExport, path: &std::path::Path) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(export)?;
    std::fs::write(path, json)
}
