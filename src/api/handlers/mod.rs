// HTTP handlers, one module per collection

pub mod departments;
pub mod employees;
pub mod health;
pub mod products;

use uuid::Uuid;

use crate::api::errors::ApiError;

/// Parses a record id from the path
///
/// An id that is not a UUID cannot name a stored record, so it is reported
/// as not found.
pub(crate) fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::not_found())
}
