use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::routing::{get, patch};
use axum::{Json, Router};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::api::rest::extract::{AppJson, AppPath, AppQuery};
use crate::error::AppError;
use crate::models::schema::Entity;
use crate::query::{resolve_page, Keyed, ListParams, ListQuery, Page};
use crate::state::{store_of, AppState, StoreFor};
use crate::store::BulkChange;

pub fn router<E>(segment: &str) -> Router<Arc<AppState>>
where
    E: Entity,
    AppState: StoreFor<E>,
{
    let base = format!("/api/{segment}");

    Router::new()
        .route(&base, get(list::<E>).post(create::<E>))
        .route(
            &format!("{base}/bulk"),
            patch(bulk_update::<E>).delete(bulk_delete::<E>),
        )
        .route(
            &format!("{base}/:id"),
            patch(update::<E>).delete(delete::<E>),
        )
}

#[derive(Debug, Serialize)]
pub struct Created<T> {
    pub success: bool,
    pub data: T,
}

#[derive(Debug, Deserialize)]
pub struct BulkUpdateRequest {
    pub ids: Vec<String>,
    pub data: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
pub struct BulkDeleteRequest {
    pub ids: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BatchResult {
    pub count: u64,
}

impl BulkUpdateRequest {
    /// Bulk edits only ever carry a status change. Every other key in `data`
    /// is dropped, and an empty or non-string status means "no change".
    pub fn change(&self) -> BulkChange {
        let status = self
            .data
            .get("status")
            .and_then(Value::as_str)
            .filter(|status| !status.is_empty())
            .map(str::to_string);

        BulkChange { status }
    }
}

async fn list<E>(
    State(state): State<Arc<AppState>>,
    AppQuery(pairs): AppQuery<Vec<(String, String)>>,
) -> Result<Json<Page<Keyed<E>>>, AppError>
where
    E: Entity,
    AppState: StoreFor<E>,
{
    let started = Instant::now();
    let query = ListQuery::resolve(&ListParams::from_pairs(pairs), E::SCHEMA);
    let result = resolve_page(store_of::<E>(&state), &query);
    state
        .metrics
        .observe(E::SCHEMA.name, "list", result.is_ok(), started);

    let page = result?;
    debug!(
        entity = E::SCHEMA.name,
        page = page.page,
        page_size = page.page_size,
        total = page.total,
        sort = query.sort.field,
        "list resolved"
    );

    Ok(Json(page))
}

async fn create<E>(
    State(state): State<Arc<AppState>>,
    AppJson(draft): AppJson<E::Draft>,
) -> Result<Json<Created<Keyed<E>>>, AppError>
where
    E: Entity,
    AppState: StoreFor<E>,
{
    let started = Instant::now();
    let result = insert_draft::<E>(&state, draft);
    state
        .metrics
        .observe(E::SCHEMA.name, "create", result.is_ok(), started);

    let record = result?;
    info!(entity = E::SCHEMA.name, key = record.key(), "record created");

    Ok(Json(Created {
        success: true,
        data: Keyed(record),
    }))
}

fn insert_draft<E>(state: &AppState, draft: E::Draft) -> Result<E, AppError>
where
    E: Entity,
    AppState: StoreFor<E>,
{
    let record = E::from_draft(draft, Utc::now());
    if record.key().trim().is_empty() {
        return Err(AppError::BadRequest(format!(
            "{} cannot be empty",
            E::SCHEMA.business_key
        )));
    }

    Ok(store_of::<E>(state).insert(record)?)
}

async fn update<E>(
    State(state): State<Arc<AppState>>,
    AppPath(id): AppPath<String>,
    AppJson(patch): AppJson<E::Patch>,
) -> Result<Json<Keyed<E>>, AppError>
where
    E: Entity,
    AppState: StoreFor<E>,
{
    let started = Instant::now();
    let result = store_of::<E>(&state).update(&id, patch);
    state
        .metrics
        .observe(E::SCHEMA.name, "update", result.is_ok(), started);

    let record = result?;
    info!(entity = E::SCHEMA.name, key = %id, "record updated");

    Ok(Json(Keyed(record)))
}

async fn delete<E>(
    State(state): State<Arc<AppState>>,
    AppPath(id): AppPath<String>,
) -> Result<Json<Keyed<E>>, AppError>
where
    E: Entity,
    AppState: StoreFor<E>,
{
    let started = Instant::now();
    let result = store_of::<E>(&state).delete(&id);
    state
        .metrics
        .observe(E::SCHEMA.name, "delete", result.is_ok(), started);

    let record = result?;
    info!(entity = E::SCHEMA.name, key = %id, "record deleted");

    Ok(Json(Keyed(record)))
}

async fn bulk_update<E>(
    State(state): State<Arc<AppState>>,
    AppJson(payload): AppJson<BulkUpdateRequest>,
) -> Result<Json<BatchResult>, AppError>
where
    E: Entity,
    AppState: StoreFor<E>,
{
    let started = Instant::now();
    let change = payload.change();
    let result = store_of::<E>(&state).update_many(&payload.ids, &change);
    state
        .metrics
        .observe(E::SCHEMA.name, "bulk_update", result.is_ok(), started);

    let count = result?;
    info!(
        entity = E::SCHEMA.name,
        requested = payload.ids.len(),
        count,
        status = change.status.as_deref().unwrap_or("<unchanged>"),
        "bulk update applied"
    );

    Ok(Json(BatchResult { count }))
}

async fn bulk_delete<E>(
    State(state): State<Arc<AppState>>,
    AppJson(payload): AppJson<BulkDeleteRequest>,
) -> Result<Json<BatchResult>, AppError>
where
    E: Entity,
    AppState: StoreFor<E>,
{
    let started = Instant::now();
    let result = store_of::<E>(&state).delete_many(&payload.ids);
    state
        .metrics
        .observe(E::SCHEMA.name, "bulk_delete", result.is_ok(), started);

    let count = result?;
    info!(
        entity = E::SCHEMA.name,
        requested = payload.ids.len(),
        count,
        "bulk delete applied"
    );

    Ok(Json(BatchResult { count }))
}
