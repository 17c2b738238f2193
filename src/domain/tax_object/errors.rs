use super::value_objects::ValueObjectError;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaxObjectError {
  #[error("Validation error: {0}")]
  Validation(#[from] ValueObjectError),

  #[error("Database error: {0}")]
  Database(#[from] sqlx::Error),

  #[error("Migration error: {0}")]
  Migration(#[from] sqlx::migrate::MigrateError),

  #[error("Repository error: {0}")]
  Repository(String),

  #[error("{operation} timed out after {timeout:?}")]
  Timeout {
    operation: &'static str,
    timeout: Duration,
  },
}
