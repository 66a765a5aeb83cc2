use axum::{
    extract::{Path, State},
    Json,
};

use super::parse_id;
use crate::api::errors::ApiError;
use crate::api::extract::JsonBody;
use crate::api::state::AppState;
use crate::domain::entities::{Department, Entity, Record};

/// List all departments
///
/// GET /departments
pub async fn list_departments(
    State(state): State<AppState>,
) -> Result<Json<Vec<Record<Department>>>, ApiError> {
    Ok(Json(state.departments.list().await?))
}

/// Get a random department
///
/// GET /departments/random
pub async fn get_random_department(
    State(state): State<AppState>,
) -> Result<Json<Record<Department>>, ApiError> {
    let department = state
        .departments
        .get_random()
        .await?
        .ok_or_else(ApiError::not_found)?;

    Ok(Json(department))
}

/// Get a department by ID
///
/// GET /departments/:id
pub async fn get_department(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Record<Department>>, ApiError> {
    let id = parse_id(&id)?;
    let department = state
        .departments
        .get_by_id(id)
        .await?
        .ok_or_else(ApiError::not_found)?;

    Ok(Json(department))
}

/// Create a department
///
/// POST /departments
pub async fn create_department(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<Json<Record<Department>>, ApiError> {
    let department = Department::from_candidate(&body)?;
    let record = state.departments.create(department).await?;

    Ok(Json(record))
}

/// Replace a department's fields
///
/// PUT /departments/:id
pub async fn update_department(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<Json<Record<Department>>, ApiError> {
    let id = parse_id(&id)?;
    state
        .departments
        .get_by_id(id)
        .await?
        .ok_or_else(ApiError::not_found)?;

    let department = Department::from_candidate(&body)?;
    let record = state
        .departments
        .update(id, department)
        .await?
        .ok_or_else(ApiError::not_found)?;

    Ok(Json(record))
}

/// Delete a department, returning it
///
/// DELETE /departments/:id
pub async fn delete_department(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Record<Department>>, ApiError> {
    let id = parse_id(&id)?;
    let record = state
        .departments
        .delete(id)
        .await?
        .ok_or_else(ApiError::not_found)?;

    Ok(Json(record))
}
