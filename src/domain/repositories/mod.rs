// Repository interfaces (ports)
// Implemented by adapters in the infrastructure layer

pub mod crud_repository;

pub use crud_repository::{random_index, CrudRepository, RepositoryError, RepositoryResult};
