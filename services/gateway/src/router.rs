use crate::handlers::{commission, rates, series};
use crate::state::AppState;
use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/levels", get(rates::list_levels))
        .route("/levels/{level}/rates", get(rates::get_level_rates))
        .route("/commission", get(commission::get_commission))
        .route("/breakdown", get(commission::get_breakdown))
        .route("/report", get(commission::get_report))
        .route("/series/models", get(series::get_model_series))
        .route("/series/levels", get(series::get_level_series))
        .route("/snapshot/levels", get(series::get_level_snapshot));

    Router::new()
        .route("/health", get(rates::health))
        .nest("/v1", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GatewayConfig;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use rust_decimal::Decimal;
    use serde_json::Value;
    use std::collections::HashMap;
    use std::str::FromStr;
    use tower::ServiceExt;

    /// Decimals are serialized as strings with their natural scale.
    fn dec(value: &Value) -> Decimal {
        Decimal::from_str(value.as_str().unwrap()).unwrap()
    }

    fn app() -> Router {
        let config = GatewayConfig::from_map(&HashMap::new()).unwrap();
        create_router(AppState::new(&config))
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let (status, body) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn commission_senior_30k() {
        let (status, body) = get_json("/v1/commission?revenue=30000&level=senior").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(dec(&body["comparison"]["tiered_total"]), Decimal::from(3_350));
        assert_eq!(dec(&body["comparison"]["legacy_total"]), Decimal::from(2_900));
        assert_eq!(body["breakdown"].as_array().unwrap().len(), 1);
        assert_eq!(dec(&body["breakdown"][0]["rate"]), Decimal::new(6, 2));
    }

    #[tokio::test]
    async fn commission_zero_revenue_has_null_percent() {
        let (status, body) = get_json("/v1/commission?revenue=0&level=junior&launch=true").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["comparison"]["percent_difference"].is_null());
        assert_eq!(body["comparison"]["is_launch_period"], true);
    }

    #[tokio::test]
    async fn unknown_level_is_not_found() {
        let (status, body) = get_json("/v1/commission?revenue=1000&level=manager").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "NOT_FOUND");

        let (status, _) = get_json("/v1/levels/manager/rates").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn invalid_revenue_is_bad_request() {
        for uri in [
            "/v1/breakdown?revenue=-10&level=junior",
            "/v1/breakdown?revenue=abc&level=junior",
            "/v1/breakdown?revenue=150001&level=junior",
        ] {
            let (status, body) = get_json(uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
            assert_eq!(body["error"], "BAD_REQUEST");
        }
    }

    #[tokio::test]
    async fn malformed_query_is_json_bad_request() {
        for uri in [
            "/v1/commission?level=junior",
            "/v1/commission?revenue=1000&level=junior&launch=1",
            "/v1/series/models",
            "/v1/snapshot/levels",
        ] {
            let (status, body) = get_json(uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
            assert_eq!(body["error"], "BAD_REQUEST");
            assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));
        }
    }

    #[tokio::test]
    async fn level_rates_include_markers() {
        let (status, body) = get_json("/v1/levels/especialista/rates").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["table"]["level"], "specialist");
        assert_eq!(body["table"]["brackets"].as_array().unwrap().len(), 5);
        assert_eq!(body["markers"].as_array().unwrap().len(), 4);

        let (_, body) = get_json("/v1/levels").await;
        assert_eq!(body["levels"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn series_cover_default_sweep() {
        let (status, body) = get_json("/v1/series/models?level=junior").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["points"].as_array().unwrap().len(), 151);

        let (_, body) = get_json("/v1/series/levels").await;
        let points = body["points"].as_array().unwrap();
        assert_eq!(points.len(), 151);
        assert_eq!(dec(&points[0]["specialist"]), Decimal::from(2_000));
        assert_eq!(body["axis_ticks"][1]["label"], "R$25k");
    }

    #[tokio::test]
    async fn level_snapshot_and_report() {
        let (status, body) = get_json("/v1/snapshot/levels?revenue=0").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(dec(&body["levels"][0]["total"]), Decimal::from(1_300));

        let (status, body) = get_json("/v1/report?revenue=30000&level=senior").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["comparison_table"]["rows"][0]["value"], "R$3,350.00");
        assert_eq!(body["model_series"].as_array().unwrap().len(), 151);
    }
}
