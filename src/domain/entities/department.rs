use serde::{Deserialize, Serialize};

use super::record::Entity;
use crate::domain::validation::{FieldRule, Schema};

static DEPARTMENT_SCHEMA: Schema = Schema {
    entity: "Department",
    fields: &[FieldRule::required("name").length(5, 20)],
};

/// Department document
///
/// # Invariants
/// - `name` is required and 5 to 20 characters long
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub name: String,
}

impl Department {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Entity for Department {
    const COLLECTION: &'static str = "departments";

    fn schema() -> &'static Schema {
        &DEPARTMENT_SCHEMA
    }
}
