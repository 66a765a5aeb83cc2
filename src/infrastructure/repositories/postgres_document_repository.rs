use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use std::marker::PhantomData;
use uuid::Uuid;

use crate::domain::entities::{Entity, Record};
use crate::domain::repositories::{random_index, CrudRepository, RepositoryError, RepositoryResult};

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        RepositoryError::Storage(err.to_string())
    }
}

type DocumentRow<E> = (Uuid, Json<E>);

fn into_record<E>((id, Json(fields)): DocumentRow<E>) -> Record<E> {
    Record::new(id, fields)
}

/// PostgreSQL implementation of CrudRepository
///
/// Stores each record as a JSONB document in the table named by
/// [`Entity::COLLECTION`]. Tables are created by the migrations in
/// `migrations/`; `seq` gives the insertion order.
pub struct PostgresDocumentRepository<E> {
    pool: PgPool,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> PostgresDocumentRepository<E> {
    /// Creates a new PostgresDocumentRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<E: Entity> CrudRepository<E> for PostgresDocumentRepository<E> {
    async fn list(&self) -> RepositoryResult<Vec<Record<E>>> {
        let sql = format!("SELECT id, body FROM {} ORDER BY seq", E::COLLECTION);
        let rows = sqlx::query_as::<_, DocumentRow<E>>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(into_record).collect())
    }

    async fn count(&self) -> RepositoryResult<u64> {
        let sql = format!("SELECT COUNT(*) FROM {}", E::COLLECTION);
        let count: i64 = sqlx::query_scalar(&sql).fetch_one(&self.pool).await?;

        Ok(count as u64)
    }

    async fn get_random(&self) -> RepositoryResult<Option<Record<E>>> {
        // Count and read share one snapshot so the offset is always in range.
        let mut tx = self.pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ READ ONLY")
            .execute(&mut *tx)
            .await?;

        let count_sql = format!("SELECT COUNT(*) FROM {}", E::COLLECTION);
        let count: i64 = sqlx::query_scalar(&count_sql).fetch_one(&mut *tx).await?;

        let row = match random_index(count as u64) {
            Some(offset) => {
                let sql = format!(
                    "SELECT id, body FROM {} ORDER BY seq OFFSET $1 LIMIT 1",
                    E::COLLECTION
                );
                sqlx::query_as::<_, DocumentRow<E>>(&sql)
                    .bind(offset as i64)
                    .fetch_optional(&mut *tx)
                    .await?
            }
            None => None,
        };
        tx.commit().await?;

        Ok(row.map(into_record))
    }

    async fn get_by_id(&self, id: Uuid) -> RepositoryResult<Option<Record<E>>> {
        let sql = format!("SELECT id, body FROM {} WHERE id = $1", E::COLLECTION);
        let row = sqlx::query_as::<_, DocumentRow<E>>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(into_record))
    }

    async fn create(&self, fields: E) -> RepositoryResult<Record<E>> {
        fields.check()?;

        let id = Uuid::new_v4();
        let sql = format!("INSERT INTO {} (id, body) VALUES ($1, $2)", E::COLLECTION);
        sqlx::query(&sql)
            .bind(id)
            .bind(Json(&fields))
            .execute(&self.pool)
            .await?;
        tracing::debug!(collection = E::COLLECTION, id = %id, "Document inserted");

        Ok(Record::new(id, fields))
    }

    async fn update(&self, id: Uuid, fields: E) -> RepositoryResult<Option<Record<E>>> {
        fields.check()?;

        let sql = format!(
            "UPDATE {} SET body = $2 WHERE id = $1 RETURNING id, body",
            E::COLLECTION
        );
        let row = sqlx::query_as::<_, DocumentRow<E>>(&sql)
            .bind(id)
            .bind(Json(&fields))
            .fetch_optional(&self.pool)
            .await?;
        tracing::debug!(collection = E::COLLECTION, id = %id, found = row.is_some(), "Document updated");

        Ok(row.map(into_record))
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<Option<Record<E>>> {
        let sql = format!(
            "DELETE FROM {} WHERE id = $1 RETURNING id, body",
            E::COLLECTION
        );
        let row = sqlx::query_as::<_, DocumentRow<E>>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        tracing::debug!(collection = E::COLLECTION, id = %id, found = row.is_some(), "Document deleted");

        Ok(row.map(into_record))
    }
}
