use async_trait::async_trait;

use super::entities::{NewTaxObject, TaxObject};
use super::errors::TaxObjectError;

/// Durable record of submitted tax objects.
#[async_trait]
pub trait TaxObjectRepository: Send + Sync {
  /// Returns every stored tax object in storage order.
  async fn get_all(&self) -> Result<Vec<TaxObject>, TaxObjectError>;

  /// Persists a new tax object and returns it with its assigned id.
  async fn create(&self, tax_object: NewTaxObject) -> Result<TaxObject, TaxObjectError>;

  /// Creates the backing schema if it does not exist yet. Safe to call repeatedly.
  async fn migrate(&self) -> Result<(), TaxObjectError>;

  /// Releases any held resources.
  async fn close(&self);
}
