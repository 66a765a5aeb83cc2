use axum::{routing::get, Router};

use super::handlers::{departments, employees, health, products};
use super::state::AppState;

/// Builds the application router
///
/// The static `/random` segment takes priority over `/:id`.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Product routes
        .route("/products", get(products::list_products).post(products::create_product))
        .route("/products/random", get(products::get_random_product))
        .route(
            "/products/:id",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        )
        // Employee routes
        .route("/employees", get(employees::list_employees).post(employees::create_employee))
        .route("/employees/random", get(employees::get_random_employee))
        .route(
            "/employees/:id",
            get(employees::get_employee)
                .put(employees::update_employee)
                .delete(employees::delete_employee),
        )
        // Department routes
        .route(
            "/departments",
            get(departments::list_departments).post(departments::create_department),
        )
        .route("/departments/random", get(departments::get_random_department))
        .route(
            "/departments/:id",
            get(departments::get_department)
                .put(departments::update_department)
                .delete(departments::delete_department),
        )
        .with_state(state)
}
