use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Department, Employee, Product};
use crate::domain::repositories::CrudRepository;
use crate::infrastructure::repositories::{InMemoryRepository, PostgresDocumentRepository};

/// Shared state handed to every handler: one repository per collection
#[derive(Clone)]
pub struct AppState {
    pub products: Arc<dyn CrudRepository<Product>>,
    pub employees: Arc<dyn CrudRepository<Employee>>,
    pub departments: Arc<dyn CrudRepository<Department>>,
}

impl AppState {
    /// State backed by PostgreSQL document tables
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            products: Arc::new(PostgresDocumentRepository::<Product>::new(pool.clone())),
            employees: Arc::new(PostgresDocumentRepository::<Employee>::new(pool.clone())),
            departments: Arc::new(PostgresDocumentRepository::<Department>::new(pool)),
        }
    }

    /// State backed by in-process collections
    pub fn in_memory() -> Self {
        Self {
            products: Arc::new(InMemoryRepository::<Product>::new()),
            employees: Arc::new(InMemoryRepository::<Employee>::new()),
            departments: Arc::new(InMemoryRepository::<Department>::new()),
        }
    }
}
