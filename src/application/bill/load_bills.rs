use std::sync::Arc;

use crate::domain::bill::BillAggregator;
use crate::domain::tax_object::{TaxObjectError, TaxObjectRepository};

/// Replays every stored tax object into the bill. Meant to run once at startup.
pub struct LoadBillsUseCase {
  tax_object_repo: Arc<dyn TaxObjectRepository>,
  bill_aggregator: Arc<dyn BillAggregator>,
}

impl LoadBillsUseCase {
  pub fn new(
    tax_object_repo: Arc<dyn TaxObjectRepository>,
    bill_aggregator: Arc<dyn BillAggregator>,
  ) -> Self {
    Self {
      tax_object_repo,
      bill_aggregator,
    }
  }

  /// Returns how many tax objects were replayed. Nothing is added when the
  /// store cannot be read.
  pub async fn execute(&self) -> Result<usize, TaxObjectError> {
    let tax_objects = self.tax_object_repo.get_all().await?;

    for tax_object in &tax_objects {
      self.bill_aggregator.add(tax_object);
    }

    Ok(tax_objects.len())
  }
}
