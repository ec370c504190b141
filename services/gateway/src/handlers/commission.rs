use crate::error::AppError;
use crate::extract::ApiQuery;
use crate::models::{BreakdownQuery, BreakdownResponse, CommissionQuery, CommissionResponse};
use crate::state::AppState;
use axum::{
    extract::State,
    Json,
};
use commission_engine::{compute_tiered_breakdown, quote};
use simulation::export::{build_export, SimulationExport, SimulationInputs};
use types::level::SellerLevel;

pub async fn get_commission(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<CommissionQuery>,
) -> Result<Json<CommissionResponse>, AppError> {
    let revenue = state.parse_revenue(&query.revenue)?;
    let level: SellerLevel = query.level.parse()?;

    let quote = quote(revenue, level, query.launch);
    tracing::debug!(%revenue, %level, launch = query.launch, tiered = %quote.comparison.tiered_total, "commission quote");

    Ok(Json(CommissionResponse { quote }))
}

pub async fn get_breakdown(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<BreakdownQuery>,
) -> Result<Json<BreakdownResponse>, AppError> {
    let revenue = state.parse_revenue(&query.revenue)?;
    let level: SellerLevel = query.level.parse()?;

    Ok(Json(BreakdownResponse {
        revenue,
        level,
        entries: compute_tiered_breakdown(revenue, level),
    }))
}

pub async fn get_report(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<CommissionQuery>,
) -> Result<Json<SimulationExport>, AppError> {
    let inputs = SimulationInputs {
        revenue: state.parse_revenue(&query.revenue)?,
        level: query.level.parse()?,
        is_launch_period: query.launch,
    };

    let export = build_export(inputs, state.sweep)?;
    Ok(Json(export))
}
