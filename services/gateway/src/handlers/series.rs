use crate::error::AppError;
use crate::extract::ApiQuery;
use crate::models::{
    LevelSeriesResponse, LevelSnapshotResponse, ModelSeriesQuery, ModelSeriesResponse, RevenueQuery,
};
use crate::state::AppState;
use axum::{
    extract::State,
    Json,
};
use simulation::sweep::{axis_ticks, level_series, level_snapshot, model_series};
use types::level::SellerLevel;

pub async fn get_model_series(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ModelSeriesQuery>,
) -> Result<Json<ModelSeriesResponse>, AppError> {
    let level: SellerLevel = query.level.parse()?;

    Ok(Json(ModelSeriesResponse {
        level,
        launch: query.launch,
        points: model_series(&state.sweep, level, query.launch),
        axis_ticks: axis_ticks(&state.sweep),
    }))
}

pub async fn get_level_series(State(state): State<AppState>) -> Json<LevelSeriesResponse> {
    Json(LevelSeriesResponse {
        points: level_series(&state.sweep),
        axis_ticks: axis_ticks(&state.sweep),
    })
}

pub async fn get_level_snapshot(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<RevenueQuery>,
) -> Result<Json<LevelSnapshotResponse>, AppError> {
    let revenue = state.parse_revenue(&query.revenue)?;

    Ok(Json(LevelSnapshotResponse {
        revenue,
        levels: level_snapshot(revenue),
    }))
}
