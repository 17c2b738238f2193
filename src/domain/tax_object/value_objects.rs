use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest price accepted for a new tax object. Keeps every running total far
/// below the `Decimal` range.
pub const MAX_PRICE: Decimal = dec!(1000000000000);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueObjectError {
  #[error("Invalid item name: {0}")]
  InvalidItemName(String),
  #[error("Invalid tax code: {0}")]
  InvalidTaxCode(String),
  #[error("Invalid price: {0}")]
  InvalidPrice(String),
}

// Item Name - what the user bought
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemName(String);

impl ItemName {
  /// Sanitizes user input: unsafe markup is removed with `ammonia`, then the
  /// result is trimmed and must be 1..=255 characters long.
  pub fn new(value: String) -> Result<Self, ValueObjectError> {
    let sanitized = ammonia::clean(&value);
    let trimmed = sanitized.trim();
    if trimmed.is_empty() {
      return Err(ValueObjectError::InvalidItemName(
        "Item name cannot be empty".to_string(),
      ));
    }
    if trimmed.chars().count() > 255 {
      return Err(ValueObjectError::InvalidItemName(
        "Item name cannot exceed 255 characters".to_string(),
      ));
    }
    Ok(Self(trimmed.to_string()))
  }

  /// Wraps a name that was already accepted once, e.g. read back from storage.
  pub fn from_stored(value: String) -> Self {
    Self(value)
  }

  pub fn value(&self) -> &str {
    &self.0
  }

  pub fn into_inner(self) -> String {
    self.0
  }
}

impl fmt::Display for ItemName {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// Tax category selected by a tax code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaxCategory {
  FoodAndBeverage,
  Tobacco,
  Entertainment,
}

impl TaxCategory {
  pub fn label(&self) -> &'static str {
    match self {
      TaxCategory::FoodAndBeverage => "Food & Beverage",
      TaxCategory::Tobacco => "Tobacco",
      TaxCategory::Entertainment => "Entertainment",
    }
  }

  pub fn refundable(&self) -> Refundable {
    match self {
      TaxCategory::FoodAndBeverage => Refundable::Yes,
      TaxCategory::Tobacco | TaxCategory::Entertainment => Refundable::No,
    }
  }
}

impl fmt::Display for TaxCategory {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.label())
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Refundable {
  Yes,
  No,
}

impl Refundable {
  pub fn as_str(&self) -> &'static str {
    match self {
      Refundable::Yes => "Yes",
      Refundable::No => "No",
    }
  }
}

/// Raw tax code as stored. Codes outside the known categories are kept as-is;
/// they simply map to no category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxCode(i64);

impl TaxCode {
  pub fn new(value: i64) -> Self {
    Self(value)
  }

  /// Accepts only codes that select a known category.
  pub fn known(value: i64) -> Result<Self, ValueObjectError> {
    let code = Self(value);
    if code.category().is_none() {
      return Err(ValueObjectError::InvalidTaxCode(format!(
        "Tax code must be 1, 2 or 3, got {}",
        value
      )));
    }
    Ok(code)
  }

  pub fn value(&self) -> i64 {
    self.0
  }

  pub fn category(&self) -> Option<TaxCategory> {
    match self.0 {
      1 => Some(TaxCategory::FoodAndBeverage),
      2 => Some(TaxCategory::Tobacco),
      3 => Some(TaxCategory::Entertainment),
      _ => None,
    }
  }
}

impl From<i64> for TaxCode {
  fn from(value: i64) -> Self {
    Self(value)
  }
}

impl fmt::Display for TaxCode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}
