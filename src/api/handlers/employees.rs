use axum::{
    extract::{Path, State},
    Json,
};

use super::parse_id;
use crate::api::errors::ApiError;
use crate::api::extract::JsonBody;
use crate::api::state::AppState;
use crate::domain::entities::{Employee, Entity, PopulatedEmployee, Record};
use crate::domain::population::{populate_all, populate_department};

// Every employee response carries its department populated.

/// List all employees
///
/// GET /employees
pub async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<Vec<Record<PopulatedEmployee>>>, ApiError> {
    let employees = state.employees.list().await?;
    let populated = populate_all(employees, state.departments.as_ref()).await?;

    Ok(Json(populated))
}

/// Get a random employee
///
/// GET /employees/random
pub async fn get_random_employee(
    State(state): State<AppState>,
) -> Result<Json<Record<PopulatedEmployee>>, ApiError> {
    let employee = state
        .employees
        .get_random()
        .await?
        .ok_or_else(ApiError::not_found)?;

    populated(&state, employee).await
}

/// Get an employee by ID
///
/// GET /employees/:id
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Record<PopulatedEmployee>>, ApiError> {
    let id = parse_id(&id)?;
    let employee = state
        .employees
        .get_by_id(id)
        .await?
        .ok_or_else(ApiError::not_found)?;

    populated(&state, employee).await
}

/// Create an employee
///
/// POST /employees
pub async fn create_employee(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<Json<Record<PopulatedEmployee>>, ApiError> {
    let employee = Employee::from_candidate(&body)?;
    let record = state.employees.create(employee).await?;

    populated(&state, record).await
}

/// Replace an employee's fields
///
/// PUT /employees/:id
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<Json<Record<PopulatedEmployee>>, ApiError> {
    let id = parse_id(&id)?;
    state
        .employees
        .get_by_id(id)
        .await?
        .ok_or_else(ApiError::not_found)?;

    let employee = Employee::from_candidate(&body)?;
    let record = state
        .employees
        .update(id, employee)
        .await?
        .ok_or_else(ApiError::not_found)?;

    populated(&state, record).await
}

/// Delete an employee, returning it
///
/// DELETE /employees/:id
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Record<PopulatedEmployee>>, ApiError> {
    let id = parse_id(&id)?;
    let record = state
        .employees
        .delete(id)
        .await?
        .ok_or_else(ApiError::not_found)?;

    populated(&state, record).await
}

async fn populated(
    state: &AppState,
    employee: Record<Employee>,
) -> Result<Json<Record<PopulatedEmployee>>, ApiError> {
    let employee = populate_department(employee, state.departments.as_ref()).await?;
    Ok(Json(employee))
}
