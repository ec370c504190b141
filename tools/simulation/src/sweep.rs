//! Revenue sweeps and chart series
//!
//! A sweep walks revenue from `start` to `end` (inclusive) in fixed steps and
//! evaluates the engine at every point. Series are recomputed on demand.

use commission_engine::format::format_axis_thousands;
use commission_engine::{compute_legacy_total, compute_tiered_total, rate_table};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use types::errors::{CommissionError, CommissionResult};
use types::level::SellerLevel;
use types::numeric::Revenue;

/// Default upper bound of the revenue control.
pub const DEFAULT_SWEEP_MAX: u64 = 150_000;

/// Default revenue control step.
pub const DEFAULT_SWEEP_STEP: u64 = 1_000;

/// Upper bound on points in one sweep; every series request allocates this many rows.
pub const MAX_SWEEP_POINTS: u64 = 10_001;

/// Spacing of the revenue-axis tick labels.
pub const AXIS_TICK_STEP: u64 = 25_000;

/// Labels for the reference lines drawn at each non-final threshold.
const MARKER_LABELS: [&str; 4] = ["Bracket 1", "Bracket 2", "Bracket 3", "Target"];

/// Inclusive revenue range walked in fixed steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueSweep {
    pub start: u64,
    pub end: u64,
    pub step: u64,
}

impl Default for RevenueSweep {
    fn default() -> Self {
        Self {
            start: 0,
            end: DEFAULT_SWEEP_MAX,
            step: DEFAULT_SWEEP_STEP,
        }
    }
}

impl RevenueSweep {
    pub fn new(start: u64, end: u64, step: u64) -> CommissionResult<Self> {
        let sweep = Self { start, end, step };
        sweep.validate()?;
        Ok(sweep)
    }

    pub fn validate(&self) -> CommissionResult<()> {
        if self.step == 0 {
            return Err(CommissionError::invalid_input("sweep step must be positive"));
        }
        if self.start > self.end {
            return Err(CommissionError::invalid_input(format!(
                "sweep start {} exceeds end {}",
                self.start, self.end
            )));
        }
        match self.point_count() {
            Some(count) if count <= MAX_SWEEP_POINTS => Ok(()),
            _ => Err(CommissionError::invalid_input(format!(
                "sweep {}..={} step {} exceeds {} points",
                self.start, self.end, self.step, MAX_SWEEP_POINTS
            ))),
        }
    }

    /// Number of points, including both ends when `end` falls on a step.
    pub fn len(&self) -> usize {
        self.point_count()
            .and_then(|count| usize::try_from(count).ok())
            .unwrap_or(usize::MAX)
    }

    fn point_count(&self) -> Option<u64> {
        if self.step == 0 || self.start > self.end {
            return Some(0);
        }
        ((self.end - self.start) / self.step).checked_add(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `revenue` lies inside the sweep range.
    pub fn contains(&self, revenue: Revenue) -> bool {
        let value = revenue.as_decimal();
        value >= Decimal::from(self.start) && value <= Decimal::from(self.end)
    }

    pub fn points(&self) -> impl Iterator<Item = Revenue> + '_ {
        (0..self.len() as u64).map(move |i| Revenue::from_u64(self.start + i * self.step))
    }
}

/// New-vs-legacy payout at one revenue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelPoint {
    pub revenue: Revenue,
    pub tiered: Decimal,
    pub legacy: Decimal,
}

/// Tiered payout of every level at one revenue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelPoint {
    pub revenue: Revenue,
    pub junior: Decimal,
    pub senior: Decimal,
    pub specialist: Decimal,
}

impl LevelPoint {
    pub fn get(&self, level: SellerLevel) -> Decimal {
        match level {
            SellerLevel::Junior => self.junior,
            SellerLevel::Senior => self.senior,
            SellerLevel::Specialist => self.specialist,
        }
    }
}

/// One bar of the per-level snapshot chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelTotal {
    pub level: SellerLevel,
    pub name: String,
    pub total: Decimal,
}

/// Revenue-axis tick with its compact label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisTick {
    pub revenue: Revenue,
    pub label: String,
}

/// Reference line at a bracket threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketMarker {
    pub threshold: Decimal,
    pub label: String,
}

pub fn model_point(revenue: Revenue, level: SellerLevel, is_launch_period: bool) -> ModelPoint {
    ModelPoint {
        revenue,
        tiered: compute_tiered_total(revenue, level),
        legacy: compute_legacy_total(revenue, is_launch_period),
    }
}

/// Tiered and legacy totals across the sweep for one level.
pub fn model_series(sweep: &RevenueSweep, level: SellerLevel, is_launch_period: bool) -> Vec<ModelPoint> {
    let series: Vec<ModelPoint> = sweep
        .points()
        .map(|revenue| model_point(revenue, level, is_launch_period))
        .collect();

    tracing::debug!(%level, is_launch_period, points = series.len(), "built model series");
    series
}

/// Tiered totals of all three levels across the sweep.
pub fn level_series(sweep: &RevenueSweep) -> Vec<LevelPoint> {
    let series: Vec<LevelPoint> = sweep
        .points()
        .map(|revenue| LevelPoint {
            revenue,
            junior: compute_tiered_total(revenue, SellerLevel::Junior),
            senior: compute_tiered_total(revenue, SellerLevel::Senior),
            specialist: compute_tiered_total(revenue, SellerLevel::Specialist),
        })
        .collect();

    tracing::debug!(points = series.len(), "built level series");
    series
}

/// Tiered total of every level at a single revenue.
pub fn level_snapshot(revenue: Revenue) -> Vec<LevelTotal> {
    SellerLevel::ALL
        .iter()
        .map(|level| LevelTotal {
            level: *level,
            name: level.display_name().to_string(),
            total: compute_tiered_total(revenue, *level),
        })
        .collect()
}

/// Ticks at every multiple of [`AXIS_TICK_STEP`] inside the sweep, labelled `R$25k`.
pub fn axis_ticks(sweep: &RevenueSweep) -> Vec<AxisTick> {
    if sweep.is_empty() {
        return Vec::new();
    }
    let first = sweep.start.div_ceil(AXIS_TICK_STEP) * AXIS_TICK_STEP;
    (first..=sweep.end)
        .step_by(AXIS_TICK_STEP as usize)
        .map(|value| {
            let revenue = Revenue::from_u64(value);
            AxisTick {
                revenue,
                label: format_axis_thousands(revenue.as_decimal()),
            }
        })
        .collect()
}

/// Reference lines at every threshold except the final cap.
pub fn bracket_markers(level: SellerLevel) -> Vec<BracketMarker> {
    let table = rate_table(level);
    table.brackets[..table.brackets.len() - 1]
        .iter()
        .zip(MARKER_LABELS)
        .map(|(bracket, label)| BracketMarker {
            threshold: bracket.threshold,
            label: label.to_string(),
        })
        .collect()
}
