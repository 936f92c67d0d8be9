use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use serde_json::{json, Value};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    auth::extractors::{AdminUser, AuthUser},
    error::AppError,
    state::AppState,
};

use super::dto::{ListQuery, PackageBody};
use super::repo::{self, InternetPackage};

pub fn read_routes() -> Router<AppState> {
    Router::new().route("/internet-packages", get(list_packages))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/internet-packages", post(create_package))
        .route(
            "/internet-packages/:id",
            put(update_package).delete(delete_package),
        )
}

#[instrument(skip(state))]
pub async fn list_packages(
    State(state): State<AppState>,
    AuthUser(_user_id): AuthUser,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<InternetPackage>>, AppError> {
    let packages = repo::list(&state.db, query.q.as_deref()).await?;
    Ok(Json(packages))
}

#[instrument(skip(state, admin, payload))]
pub async fn create_package(
    State(state): State<AppState>,
    admin: AdminUser,
    Json(payload): Json<PackageBody>,
) -> Result<(StatusCode, Json<InternetPackage>), AppError> {
    payload.validate().map_err(AppError::validation)?;

    let pkg = repo::create(&state.db, &payload.name, &payload.description, payload.price).await?;

    info!(package_id = %pkg.id, admin_id = admin.0.id, "internet package created");
    Ok((StatusCode::CREATED, Json(pkg)))
}

#[instrument(skip(state, admin, payload))]
pub async fn update_package(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<PackageBody>,
) -> Result<Json<Value>, AppError> {
    payload.validate().map_err(AppError::validation)?;

    let updated =
        repo::update(&state.db, id, &payload.name, &payload.description, payload.price).await?;
    if !updated {
        return Err(AppError::not_found("Internet package not found"));
    }

    info!(package_id = %id, admin_id = admin.0.id, "internet package updated");
    Ok(Json(json!({ "message": "Internet package updated successfully" })))
}

#[instrument(skip(state, admin))]
pub async fn delete_package(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let deleted = repo::delete(&state.db, id).await?;
    if !deleted {
        return Err(AppError::not_found("Internet package not found"));
    }

    info!(package_id = %id, admin_id = admin.0.id, "internet package deleted");
    Ok(Json(json!({ "message": "Internet package deleted successfully" })))
}
