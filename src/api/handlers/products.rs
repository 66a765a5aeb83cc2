use axum::{
    extract::{Path, State},
    Json,
};

use super::parse_id;
use crate::api::errors::ApiError;
use crate::api::extract::JsonBody;
use crate::api::state::AppState;
use crate::domain::entities::{Entity, Product, Record};

/// List all products
///
/// GET /products
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<Record<Product>>>, ApiError> {
    Ok(Json(state.products.list().await?))
}

/// Get a random product
///
/// GET /products/random
pub async fn get_random_product(
    State(state): State<AppState>,
) -> Result<Json<Record<Product>>, ApiError> {
    let product = state
        .products
        .get_random()
        .await?
        .ok_or_else(ApiError::not_found)?;

    Ok(Json(product))
}

/// Get a product by ID
///
/// GET /products/:id
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Record<Product>>, ApiError> {
    let id = parse_id(&id)?;
    let product = state
        .products
        .get_by_id(id)
        .await?
        .ok_or_else(ApiError::not_found)?;

    Ok(Json(product))
}

/// Create a product
///
/// POST /products
pub async fn create_product(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<Json<Record<Product>>, ApiError> {
    let product = Product::from_candidate(&body)?;
    let record = state.products.create(product).await?;

    Ok(Json(record))
}

/// Replace a product's fields
///
/// PUT /products/:id
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<Json<Record<Product>>, ApiError> {
    let id = parse_id(&id)?;
    state
        .products
        .get_by_id(id)
        .await?
        .ok_or_else(ApiError::not_found)?;

    let product = Product::from_candidate(&body)?;
    let record = state
        .products
        .update(id, product)
        .await?
        .ok_or_else(ApiError::not_found)?;

    Ok(Json(record))
}

/// Delete a product, returning it
///
/// DELETE /products/:id
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Record<Product>>, ApiError> {
    let id = parse_id(&id)?;
    let record = state
        .products
        .delete(id)
        .await?
        .ok_or_else(ApiError::not_found)?;

    Ok(Json(record))
}
