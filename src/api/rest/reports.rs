use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::error::AppError;
use crate::models::analytics::Analytics;
use crate::models::fleet::FleetItem;
use crate::models::schema::Entity;
use crate::query::{Filter, Keyed, SortOrder};
use crate::state::AppState;
use crate::store::RecordStore;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/fleet/all", get(fleet_snapshot))
        .route("/api/analytics", get(analytics))
}

#[derive(Serialize)]
pub struct FleetSnapshot {
    pub data: Vec<Keyed<FleetItem>>,
}

async fn fleet_snapshot(
    State(state): State<Arc<AppState>>,
) -> Result<Json<FleetSnapshot>, AppError> {
    let started = Instant::now();
    let result = all_fleet_items(state.fleet.as_ref());
    state
        .metrics
        .observe(FleetItem::SCHEMA.name, "snapshot", result.is_ok(), started);

    let data = result?.into_iter().map(Keyed).collect();
    Ok(Json(FleetSnapshot { data }))
}

fn all_fleet_items(store: &dyn RecordStore<FleetItem>) -> Result<Vec<FleetItem>, AppError> {
    let filter = Filter::all();
    let total = store.count(&filter)?;
    Ok(store.find_many(&filter, &SortOrder::newest_first(), 0, total)?)
}

async fn analytics(State(state): State<Arc<AppState>>) -> Json<Analytics> {
    let started = Instant::now();
    let analytics = state.analytics.clone();
    state.metrics.observe("analytics", "read", true, started);

    Json(analytics)
}
