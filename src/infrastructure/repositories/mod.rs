// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod in_memory_repository;
pub mod postgres_document_repository;

pub use in_memory_repository::InMemoryRepository;
pub use postgres_document_repository::PostgresDocumentRepository;
