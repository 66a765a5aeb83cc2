use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::department::Department;
use super::record::{Entity, Record};
use crate::domain::validation::{FieldRule, Schema};

static EMPLOYEE_SCHEMA: Schema = Schema {
    entity: "Employee",
    fields: &[
        FieldRule::required("firstName"),
        FieldRule::required("lastName"),
        FieldRule::required("department"),
    ],
};

/// Employee document
///
/// `department` holds either free text or the id of a department record.
/// The latter is resolved at read time, see
/// [`populate_department`](crate::domain::population::populate_department).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub first_name: String,
    pub last_name: String,
    pub department: String,
}

impl Employee {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            department: department.into(),
        }
    }

    /// Returns the referenced department id, if `department` holds one
    pub fn department_id(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.department).ok()
    }
}

impl Entity for Employee {
    const COLLECTION: &'static str = "employees";

    fn schema() -> &'static Schema {
        &EMPLOYEE_SCHEMA
    }
}

/// The `department` field after population
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DepartmentField {
    /// The reference resolved to a stored department
    Populated(Record<Department>),
    /// Free text, or an id with no matching department
    Reference(String),
}

/// Employee as returned to readers, with its department populated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulatedEmployee {
    pub first_name: String,
    pub last_name: String,
    pub department: DepartmentField,
}
