use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::domain::validation::{FieldErrorKind, Schema, ValidationErrors};

/// A document type stored in its own collection
///
/// Implementors describe their collection name and the schema every
/// candidate must satisfy before it is written.
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync + Unpin + 'static {
    /// Collection (table) the documents live in
    const COLLECTION: &'static str;

    /// Field constraints checked before any write
    fn schema() -> &'static Schema;

    /// Validates an untyped candidate and reads it into the entity type
    ///
    /// Fields not named by the schema are dropped.
    fn from_candidate(candidate: &Value) -> Result<Self, ValidationErrors> {
        Self::schema().validate(candidate)?;
        serde_json::from_value(candidate.clone()).map_err(malformed::<Self>)
    }

    /// Re-checks an already typed value against the schema
    fn check(&self) -> Result<(), ValidationErrors> {
        let value = serde_json::to_value(self).map_err(malformed::<Self>)?;
        Self::schema().validate(&value)
    }
}

fn malformed<E: Entity>(err: serde_json::Error) -> ValidationErrors {
    ValidationErrors::record(E::schema().entity, FieldErrorKind::Malformed(err.to_string()))
}

/// A stored document: its id plus the entity fields, flattened on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record<E> {
    pub id: Uuid,
    #[serde(flatten)]
    pub fields: E,
}

impl<E> Record<E> {
    pub fn new(id: Uuid, fields: E) -> Self {
        Self { id, fields }
    }

    /// Replaces the fields while keeping the id
    pub fn map<F>(self, f: impl FnOnce(E) -> F) -> Record<F> {
        Record {
            id: self.id,
            fields: f(self.fields),
        }
    }
}
