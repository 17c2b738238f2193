use rust_decimal::Decimal;
use std::sync::Arc;

use crate::domain::bill::BillAggregator;
use crate::domain::tax_object::{ItemName, NewTaxObject, TaxObjectError, TaxObjectRepository};

#[derive(Debug)]
pub struct CreateTaxObjectCommand {
  pub name: String,
  pub tax_code: i64,
  pub price: Decimal,
}

#[derive(Debug)]
pub struct CreateTaxObjectResponse {
  pub id: i64,
  pub name: String,
  pub tax_code: i64,
  pub price: Decimal,
}

/// Stores a tax object and adds it to the running bill.
///
/// The bill is updated before `execute` returns, so a bill read issued after
/// a successful create always includes the new item.
pub struct CreateTaxObjectUseCase {
  tax_object_repo: Arc<dyn TaxObjectRepository>,
  bill_aggregator: Arc<dyn BillAggregator>,
}

impl CreateTaxObjectUseCase {
  pub fn new(
    tax_object_repo: Arc<dyn TaxObjectRepository>,
    bill_aggregator: Arc<dyn BillAggregator>,
  ) -> Self {
    Self {
      tax_object_repo,
      bill_aggregator,
    }
  }

  pub async fn execute(
    &self,
    command: CreateTaxObjectCommand,
  ) -> Result<CreateTaxObjectResponse, TaxObjectError> {
    let name = ItemName::new(command.name)?;
    let new_tax_object = NewTaxObject::try_new(name, command.tax_code, command.price)?;

    let tax_object = self.tax_object_repo.create(new_tax_object).await?;

    self.bill_aggregator.add(&tax_object);

    tracing::info!(
      tax_object_id = tax_object.id,
      tax_code = tax_object.tax_code.value(),
      "Tax object created"
    );

    Ok(CreateTaxObjectResponse {
      id: tax_object.id,
      name: tax_object.name.into_inner(),
      tax_code: tax_object.tax_code.value(),
      price: tax_object.price,
    })
  }
}
