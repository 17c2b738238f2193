use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::value_objects::{ItemName, MAX_PRICE, TaxCode, ValueObjectError};

/// A taxable item as submitted by a user and stored by the repository.
/// Never mutated after it has been persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxObject {
  pub id: i64,
  pub name: ItemName,
  pub tax_code: TaxCode,
  pub price: Decimal,
}

/// A tax object that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTaxObject {
  pub name: ItemName,
  pub tax_code: TaxCode,
  pub price: Decimal,
}

impl NewTaxObject {
  pub fn new(name: ItemName, tax_code: TaxCode, price: Decimal) -> Self {
    Self {
      name,
      tax_code,
      price,
    }
  }

  /// Applies the creation rules: the tax code must select a known category and
  /// the price must be positive and no larger than [`MAX_PRICE`].
  pub fn try_new(name: ItemName, tax_code: i64, price: Decimal) -> Result<Self, ValueObjectError> {
    let tax_code = TaxCode::known(tax_code)?;
    if price <= Decimal::ZERO {
      return Err(ValueObjectError::InvalidPrice(format!(
        "Price must be greater than zero, got {}",
        price
      )));
    }
    if price > MAX_PRICE {
      return Err(ValueObjectError::InvalidPrice(format!(
        "Price must not exceed {}, got {}",
        MAX_PRICE, price
      )));
    }
    Ok(Self::new(name, tax_code, price))
  }

  pub fn with_id(self, id: i64) -> TaxObject {
    TaxObject {
      id,
      name: self.name,
      tax_code: self.tax_code,
      price: self.price,
    }
  }
}
