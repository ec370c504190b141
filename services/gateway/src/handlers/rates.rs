use crate::error::AppError;
use crate::models::{HealthResponse, LevelsResponse, RatesResponse};
use axum::{extract::Path, Json};
use commission_engine::{all_rate_tables, rate_table_for_key, ENGINE_VERSION};
use simulation::sweep::bracket_markers;

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: ENGINE_VERSION,
    })
}

pub async fn list_levels() -> Json<LevelsResponse> {
    Json(LevelsResponse {
        levels: all_rate_tables(),
    })
}

pub async fn get_level_rates(Path(level): Path<String>) -> Result<Json<RatesResponse>, AppError> {
    // Unknown keys surface as 404, never a default table
    let table = rate_table_for_key(&level)?;

    Ok(Json(RatesResponse {
        markers: bracket_markers(table.level),
        table,
    }))
}
