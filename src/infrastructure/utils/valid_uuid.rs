use uuid::Uuid;

use crate::errors::AppError;

/// Path identifiers that are not UUIDs cannot resolve to any record, so they
/// are reported as NotFound rather than a parse failure.
pub fn valid_uuid(id: &str, resource: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id).map_err(|_| AppError::NotFound(format!("{} not found", resource)))
}
