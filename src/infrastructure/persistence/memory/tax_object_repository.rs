use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::tax_object::{NewTaxObject, TaxObject, TaxObjectError, TaxObjectRepository};

/// Process-local tax object store. Ids are assigned sequentially from 1.
#[derive(Debug, Default)]
pub struct InMemoryTaxObjectRepository {
  tax_objects: Mutex<Vec<TaxObject>>,
}

impl InMemoryTaxObjectRepository {
  pub fn new() -> Self {
    Self::default()
  }

  /// Starts from already stored tax objects, e.g. to exercise a startup replay.
  pub fn with_tax_objects(tax_objects: Vec<TaxObject>) -> Self {
    Self {
      tax_objects: Mutex::new(tax_objects),
    }
  }
}

#[async_trait]
impl TaxObjectRepository for InMemoryTaxObjectRepository {
  async fn get_all(&self) -> Result<Vec<TaxObject>, TaxObjectError> {
    Ok(self.tax_objects.lock().await.clone())
  }

  async fn create(&self, tax_object: NewTaxObject) -> Result<TaxObject, TaxObjectError> {
    let mut tax_objects = self.tax_objects.lock().await;
    let next_id = tax_objects.iter().map(|t| t.id).max().unwrap_or(0) + 1;
    let created = tax_object.with_id(next_id);
    tax_objects.push(created.clone());
    Ok(created)
  }

  async fn migrate(&self) -> Result<(), TaxObjectError> {
    Ok(())
  }

  async fn close(&self) {}
}
