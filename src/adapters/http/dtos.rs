use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

use crate::application::bill::{BillLineDto, BillTotalDto, GetBillResponse};
use crate::application::tax_object::CreateTaxObjectResponse;
use crate::domain::tax_object::MAX_PRICE;

fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
  if *price <= Decimal::ZERO {
    return Err(
      ValidationError::new("positive_price")
        .with_message(Cow::from("Price must be greater than zero")),
    );
  }
  if *price > MAX_PRICE {
    return Err(
      ValidationError::new("max_price")
        .with_message(Cow::from(format!("Price must not exceed {}", MAX_PRICE))),
    );
  }
  Ok(())
}

/// Request for creating a tax object
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTaxObjectRequest {
  /// What was bought
  #[validate(length(
    min = 1,
    max = 255,
    message = "Name must be between 1 and 255 characters"
  ))]
  pub name: String,

  /// 1 = Food & Beverage, 2 = Tobacco, 3 = Entertainment
  #[validate(range(min = 1, max = 3, message = "Tax code must be 1, 2 or 3"))]
  pub tax_code: i64,

  #[validate(custom(function = "validate_price"))]
  pub price: Decimal,
}

/// Response after a tax object has been stored
#[derive(Debug, Clone, Serialize)]
pub struct TaxObjectResponse {
  pub id: i64,
  pub name: String,
  pub tax_code: i64,
  #[serde(with = "rust_decimal::serde::float")]
  pub price: Decimal,
}

impl From<CreateTaxObjectResponse> for TaxObjectResponse {
  fn from(response: CreateTaxObjectResponse) -> Self {
    Self {
      id: response.id,
      name: response.name,
      tax_code: response.tax_code,
      price: response.price,
    }
  }
}

/// One computed line of the bill
#[derive(Debug, Clone, Serialize)]
pub struct BillLineResponse {
  pub name: String,
  pub tax_code: i64,
  /// Category label, empty for unknown tax codes
  #[serde(rename = "type")]
  pub type_label: String,
  pub refundable: String,
  #[serde(with = "rust_decimal::serde::float")]
  pub price: Decimal,
  #[serde(with = "rust_decimal::serde::float")]
  pub tax: Decimal,
  #[serde(with = "rust_decimal::serde::float")]
  pub amount: Decimal,
}

impl From<BillLineDto> for BillLineResponse {
  fn from(line: BillLineDto) -> Self {
    Self {
      name: line.name,
      tax_code: line.tax_code,
      type_label: line.type_label,
      refundable: line.refundable,
      price: line.price,
      tax: line.tax,
      amount: line.amount,
    }
  }
}

#[derive(Debug, Clone, Serialize)]
pub struct BillTotalResponse {
  #[serde(with = "rust_decimal::serde::float")]
  pub price_subtotal: Decimal,
  #[serde(with = "rust_decimal::serde::float")]
  pub tax_subtotal: Decimal,
  #[serde(with = "rust_decimal::serde::float")]
  pub grand_total: Decimal,
}

impl From<BillTotalDto> for BillTotalResponse {
  fn from(total: BillTotalDto) -> Self {
    Self {
      price_subtotal: total.price_subtotal,
      tax_subtotal: total.tax_subtotal,
      grand_total: total.grand_total,
    }
  }
}

/// Response containing every bill line and the running totals
#[derive(Debug, Clone, Serialize)]
pub struct BillResponse {
  pub bill: Vec<BillLineResponse>,
  pub total: BillTotalResponse,
}

impl From<GetBillResponse> for BillResponse {
  fn from(response: GetBillResponse) -> Self {
    Self {
      bill: response.bills.into_iter().map(Into::into).collect(),
      total: response.total.into(),
    }
  }
}

/// Standard error response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
  /// Error type/code
  pub error: String,

  /// Human-readable error message
  pub message: String,

  /// Optional detailed error information
  #[serde(skip_serializing_if = "Option::is_none")]
  pub details: Option<serde_json::Value>,
}
