use async_trait::async_trait;
use rand::Rng;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::entities::{Entity, Record};
use crate::domain::validation::ValidationErrors;

/// Errors surfaced by repository implementations
///
/// A missing record is not an error: lookups return `Ok(None)` instead.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Any backend failure, passed through unmodified
    #[error("{0}")]
    Storage(String),

    /// The record was rejected by its schema at write time
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository trait for a single document collection
///
/// Defines the contract for persisting and retrieving records of `E`.
/// Implementations must run [`Entity::check`] before every write.
#[async_trait]
pub trait CrudRepository<E: Entity>: Send + Sync {
    /// List every record in insertion order
    async fn list(&self) -> RepositoryResult<Vec<Record<E>>>;

    /// Number of records in the collection
    async fn count(&self) -> RepositoryResult<u64>;

    /// Pick one record uniformly at random; `None` when the collection is empty
    async fn get_random(&self) -> RepositoryResult<Option<Record<E>>>;

    /// Find a record by its ID
    async fn get_by_id(&self, id: Uuid) -> RepositoryResult<Option<Record<E>>>;

    /// Insert a new record under a fresh ID
    async fn create(&self, fields: E) -> RepositoryResult<Record<E>>;

    /// Overwrite every field of an existing record
    async fn update(&self, id: Uuid, fields: E) -> RepositoryResult<Option<Record<E>>>;

    /// Remove a record, returning what was removed
    async fn delete(&self, id: Uuid) -> RepositoryResult<Option<Record<E>>>;
}

/// Uniformly picks an index in `0..len`, or `None` for an empty collection
pub fn random_index(len: u64) -> Option<u64> {
    if len == 0 {
        return None;
    }
    Some(rand::thread_rng().gen_range(0..len))
}
