use commission_engine::{CommissionQuote, RateTable};
use serde::{Deserialize, Serialize};
use simulation::sweep::{AxisTick, BracketMarker, LevelPoint, LevelTotal, ModelPoint};
use types::bracket::BracketBreakdownEntry;
use types::level::SellerLevel;
use types::numeric::Revenue;

#[derive(Debug, Clone, Deserialize)]
pub struct CommissionQuery {
    pub revenue: String,
    pub level: String,
    #[serde(default)]
    pub launch: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BreakdownQuery {
    pub revenue: String,
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelSeriesQuery {
    pub level: String,
    #[serde(default)]
    pub launch: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RevenueQuery {
    pub revenue: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct LevelsResponse {
    pub levels: Vec<RateTable>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RatesResponse {
    pub table: RateTable,
    pub markers: Vec<BracketMarker>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommissionResponse {
    #[serde(flatten)]
    pub quote: CommissionQuote,
}

#[derive(Debug, Clone, Serialize)]
pub struct BreakdownResponse {
    pub revenue: Revenue,
    pub level: SellerLevel,
    pub entries: Vec<BracketBreakdownEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelSeriesResponse {
    pub level: SellerLevel,
    pub launch: bool,
    pub points: Vec<ModelPoint>,
    pub axis_ticks: Vec<AxisTick>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LevelSeriesResponse {
    pub points: Vec<LevelPoint>,
    pub axis_ticks: Vec<AxisTick>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LevelSnapshotResponse {
    pub revenue: Revenue,
    pub levels: Vec<LevelTotal>,
}
