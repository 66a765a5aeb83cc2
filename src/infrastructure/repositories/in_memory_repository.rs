use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::{Entity, Record};
use crate::domain::repositories::{random_index, CrudRepository, RepositoryResult};

/// In-process implementation of CrudRepository
///
/// Keeps records in insertion order behind a tokio `RwLock`. Cloning shares
/// the same underlying collection.
pub struct InMemoryRepository<E> {
    records: Arc<RwLock<Vec<Record<E>>>>,
}

impl<E> InMemoryRepository<E> {
    /// Creates an empty repository
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl<E> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for InMemoryRepository<E> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}

#[async_trait]
impl<E: Entity> CrudRepository<E> for InMemoryRepository<E> {
    async fn list(&self) -> RepositoryResult<Vec<Record<E>>> {
        Ok(self.records.read().await.clone())
    }

    async fn count(&self) -> RepositoryResult<u64> {
        Ok(self.records.read().await.len() as u64)
    }

    async fn get_random(&self) -> RepositoryResult<Option<Record<E>>> {
        let records = self.records.read().await;
        Ok(random_index(records.len() as u64).and_then(|i| records.get(i as usize).cloned()))
    }

    async fn get_by_id(&self, id: Uuid) -> RepositoryResult<Option<Record<E>>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id == id).cloned())
    }

    async fn create(&self, fields: E) -> RepositoryResult<Record<E>> {
        fields.check()?;

        let record = Record::new(Uuid::new_v4(), fields);
        self.records.write().await.push(record.clone());
        tracing::debug!(collection = E::COLLECTION, id = %record.id, "Record created");

        Ok(record)
    }

    async fn update(&self, id: Uuid, fields: E) -> RepositoryResult<Option<Record<E>>> {
        fields.check()?;

        let mut records = self.records.write().await;
        let Some(record) = records.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };
        record.fields = fields;
        tracing::debug!(collection = E::COLLECTION, id = %id, "Record updated");

        Ok(Some(record.clone()))
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<Option<Record<E>>> {
        let mut records = self.records.write().await;
        let position = records.iter().position(|r| r.id == id);
        let removed = position.map(|index| records.remove(index));

        if removed.is_some() {
            tracing::debug!(collection = E::COLLECTION, id = %id, "Record deleted");
        }

        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Department, Employee, Product};
    use crate::domain::repositories::RepositoryError;

    #[tokio::test]
    async fn create_then_get_by_id() {
        let repo = InMemoryRepository::<Employee>::new();
        let created = repo
            .create(Employee::new("FirstName #1", "LastName #1", "Department #1"))
            .await
            .unwrap();

        let found = repo.get_by_id(created.id).await.unwrap();
        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn get_by_unknown_id_is_none() {
        let repo = InMemoryRepository::<Department>::new();
        assert!(repo.get_by_id(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_keeps_insertion_order() {
        let repo = InMemoryRepository::<Employee>::new();
        for i in 1..=3 {
            repo.create(Employee::new(
                format!("FirstName #{}", i),
                format!("LastName #{}", i),
                format!("Department #{}", i),
            ))
            .await
            .unwrap();
        }

        let employees = repo.list().await.unwrap();
        assert_eq!(employees.len(), 3);
        assert_eq!(employees[0].fields.first_name, "FirstName #1");
        assert_eq!(employees[2].fields.first_name, "FirstName #3");
        assert_eq!(repo.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn create_rejects_invalid_record() {
        let repo = InMemoryRepository::<Department>::new();
        let result = repo.create(Department::new("IT")).await;

        assert!(matches!(result, Err(RepositoryError::Validation(_))));
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn update_overwrites_all_fields() {
        let repo = InMemoryRepository::<Product>::new();
        let created = repo.create(Product::new("Widget", "Acme")).await.unwrap();

        let updated = repo
            .update(
                created.id,
                Product {
                    name: Some("Gadget".to_string()),
                    client: None,
                },
            )
            .await
            .unwrap()
            .expect("record exists");

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.fields.name.as_deref(), Some("Gadget"));
        assert_eq!(updated.fields.client, None);
    }

    #[tokio::test]
    async fn update_unknown_id_is_none() {
        let repo = InMemoryRepository::<Product>::new();
        let result = repo.update(Uuid::new_v4(), Product::default()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn update_rejects_invalid_record() {
        let repo = InMemoryRepository::<Department>::new();
        let created = repo.create(Department::new("Marketing")).await.unwrap();

        let result = repo.update(created.id, Department::new("")).await;
        assert!(matches!(result, Err(RepositoryError::Validation(_))));

        let unchanged = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(unchanged.fields.name, "Marketing");
    }

    #[tokio::test]
    async fn delete_then_get_by_id_is_none() {
        let repo = InMemoryRepository::<Employee>::new();
        let created = repo
            .create(Employee::new("FirstName #2", "LastName #2", "Department #2"))
            .await
            .unwrap();

        let deleted = repo.delete(created.id).await.unwrap();
        assert_eq!(deleted, Some(created.clone()));
        assert!(repo.get_by_id(created.id).await.unwrap().is_none());
        assert!(repo.delete(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn get_random_from_empty_is_none() {
        let repo = InMemoryRepository::<Product>::new();
        assert!(repo.get_random().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn get_random_returns_stored_record() {
        let repo = InMemoryRepository::<Product>::new();
        let a = repo.create(Product::new("A", "X")).await.unwrap();
        let b = repo.create(Product::new("B", "Y")).await.unwrap();

        for _ in 0..20 {
            let picked = repo.get_random().await.unwrap().expect("non-empty");
            assert!(picked == a || picked == b);
        }
    }

    #[tokio::test]
    async fn clones_share_storage() {
        let repo = InMemoryRepository::<Department>::new();
        let other = repo.clone();
        repo.create(Department::new("Finance")).await.unwrap();

        assert_eq!(other.count().await.unwrap(), 1);
    }
}
