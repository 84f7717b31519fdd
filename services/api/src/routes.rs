use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use innovation_edu::error::AppError;
use innovation_edu::finance::{
    break_even, irr, npv, payback_period, BreakEvenPoint, CashFlowSchedule, IrrOptions,
    IrrResolution,
};
use innovation_edu::recommend::{recommendation_router, RecommendationService};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_service_routes(service: Arc<RecommendationService>) -> axum::Router {
    recommendation_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/api/v1/finance/npv", axum::routing::post(npv_endpoint))
        .route("/api/v1/finance/irr", axum::routing::post(irr_endpoint))
        .route(
            "/api/v1/finance/break-even",
            axum::routing::post(break_even_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[derive(Debug, Deserialize)]
pub(crate) struct NpvRequest {
    pub(crate) cash_flows: CashFlowSchedule,
    pub(crate) rate: f64,
}

#[derive(Debug, Serialize)]
pub(crate) struct NpvResponse {
    pub(crate) rate: f64,
    pub(crate) npv: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) payback_period: Option<u32>,
}

pub(crate) async fn npv_endpoint(
    Json(payload): Json<NpvRequest>,
) -> Result<Json<NpvResponse>, AppError> {
    let value = npv(&payload.cash_flows, payload.rate)?;
    Ok(Json(NpvResponse {
        rate: payload.rate,
        npv: value,
        payback_period: payback_period(&payload.cash_flows),
    }))
}

#[derive(Debug, Deserialize)]
pub(crate) struct IrrRequest {
    pub(crate) cash_flows: CashFlowSchedule,
    #[serde(default)]
    pub(crate) tolerance: Option<f64>,
    #[serde(default)]
    pub(crate) max_iterations: Option<u32>,
}

pub(crate) async fn irr_endpoint(
    Json(payload): Json<IrrRequest>,
) -> Result<Json<IrrResolution>, AppError> {
    let defaults = IrrOptions::default();
    let options = IrrOptions {
        tolerance: payload.tolerance.unwrap_or(defaults.tolerance),
        max_iterations: payload.max_iterations.unwrap_or(defaults.max_iterations),
    };

    let resolution = irr(&payload.cash_flows, options)?;
    Ok(Json(resolution))
}

#[derive(Debug, Deserialize)]
pub(crate) struct BreakEvenRequest {
    pub(crate) fixed_costs: f64,
    pub(crate) unit_price: f64,
    pub(crate) unit_variable_cost: f64,
}

pub(crate) async fn break_even_endpoint(
    Json(payload): Json<BreakEvenRequest>,
) -> Result<Json<BreakEvenPoint>, AppError> {
    let point = break_even(
        payload.fixed_costs,
        payload.unit_price,
        payload.unit_variable_cost,
    )?;
    Ok(Json(point))
}

#[cfg(test)]
mod tests {
    use super::*;
    use innovation_edu::finance::CashFlow;

    fn schedule(pairs: &[(u32, f64)]) -> CashFlowSchedule {
        CashFlowSchedule::new(
            pairs
                .iter()
                .map(|(period, amount)| CashFlow::new(*period, *amount))
                .collect(),
        )
        .expect("test schedule is valid")
    }

    #[tokio::test]
    async fn npv_endpoint_returns_value_and_payback() {
        let request = NpvRequest {
            cash_flows: schedule(&[(0, -1000.0), (1, 500.0), (2, 700.0)]),
            rate: 0.0,
        };

        let Json(body) = npv_endpoint(Json(request)).await.expect("npv computes");

        assert!((body.npv - 200.0).abs() < 1e-9);
        assert_eq!(body.payback_period, Some(2));
    }

    #[tokio::test]
    async fn npv_endpoint_rejects_out_of_domain_rate() {
        let request = NpvRequest {
            cash_flows: schedule(&[(0, -1000.0), (1, 500.0)]),
            rate: -1.0,
        };

        let result = npv_endpoint(Json(request)).await;

        assert!(matches!(result, Err(AppError::Finance(_))));
    }

    #[tokio::test]
    async fn irr_endpoint_reports_no_solution_as_a_result() {
        let request = IrrRequest {
            cash_flows: schedule(&[(0, 1000.0), (1, 500.0)]),
            tolerance: None,
            max_iterations: None,
        };

        let Json(body) = irr_endpoint(Json(request)).await.expect("irr computes");

        assert_eq!(body, IrrResolution::NoSolution);
    }

    #[tokio::test]
    async fn break_even_endpoint_computes_units() {
        let request = BreakEvenRequest {
            fixed_costs: 10_000.0,
            unit_price: 25.0,
            unit_variable_cost: 15.0,
        };

        let Json(body) = break_even_endpoint(Json(request))
            .await
            .expect("margin is positive");

        assert!((body.units - 1000.0).abs() < 1e-9);
    }
}
