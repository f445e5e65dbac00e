pub mod extract;
pub mod reports;
pub mod resource;

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Json;
use axum::Router;
use serde::Serialize;
use tower_http::services::ServeDir;

use crate::error::AppError;
use crate::models::driver::Driver;
use crate::models::fleet::FleetItem;
use crate::models::order::Order;
use crate::models::payout::Payout;
use crate::models::pricing::PricingRule;
use crate::models::vehicle::Vehicle;
use crate::state::AppState;

pub const TOPUPS_SEGMENT: &str = "topups";

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(resource::router::<Order>("orders"))
        .merge(resource::router::<Driver>("drivers"))
        .merge(resource::router::<Vehicle>("vehicles"))
        .merge(resource::router::<FleetItem>("fleet"))
        .merge(resource::router::<Payout>("payouts"))
        .merge(resource::router::<Payout>(TOPUPS_SEGMENT))
        .merge(resource::router::<PricingRule>("pricing"))
        .merge(reports::router())
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .with_state(state)
}

pub fn app(state: Arc<AppState>, static_dir: &Path) -> Router {
    router(state).fallback_service(ServeDir::new(static_dir))
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    records: BTreeMap<&'static str, u64>,
}

async fn health(State(state): State<Arc<AppState>>) -> Result<Json<HealthResponse>, AppError> {
    let records = state.record_counts()?.into_iter().collect();

    Ok(Json(HealthResponse {
        status: "ok",
        records,
    }))
}

async fn metrics(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, AppError> {
    match state.record_counts() {
        Ok(counts) => {
            for (entity, total) in counts {
                state
                    .metrics
                    .records_total
                    .with_label_values(&[entity])
                    .set(i64::try_from(total).unwrap_or(i64::MAX));
            }
        }
        Err(err) => tracing::warn!(error = %err, "failed to refresh record gauges"),
    }

    let body = state.metrics.encode().map_err(AppError::Internal)?;

    Ok((
        StatusCode::OK,
        [("content-type", "text/plain; version=0.0.4; charset=utf-8")],
        body,
    ))
}
