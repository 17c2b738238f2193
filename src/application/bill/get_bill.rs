use rust_decimal::Decimal;
use std::sync::Arc;

use crate::domain::bill::{Bill, BillAggregator, BillTotal};

#[derive(Debug, Clone, PartialEq)]
pub struct BillLineDto {
  pub name: String,
  pub tax_code: i64,
  pub type_label: String,
  pub refundable: String,
  pub price: Decimal,
  pub tax: Decimal,
  pub amount: Decimal,
}

impl From<Bill> for BillLineDto {
  fn from(bill: Bill) -> Self {
    Self {
      type_label: bill.type_label().to_string(),
      refundable: bill.refundable_label().to_string(),
      tax_code: bill.tax_code.value(),
      name: bill.name,
      price: bill.price,
      tax: bill.tax,
      amount: bill.amount,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BillTotalDto {
  pub price_subtotal: Decimal,
  pub tax_subtotal: Decimal,
  pub grand_total: Decimal,
}

impl From<BillTotal> for BillTotalDto {
  fn from(total: BillTotal) -> Self {
    Self {
      price_subtotal: total.price_subtotal,
      tax_subtotal: total.tax_subtotal,
      grand_total: total.grand_total,
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GetBillResponse {
  pub bills: Vec<BillLineDto>,
  pub total: BillTotalDto,
}

pub struct GetBillUseCase {
  bill_aggregator: Arc<dyn BillAggregator>,
}

impl GetBillUseCase {
  pub fn new(bill_aggregator: Arc<dyn BillAggregator>) -> Self {
    Self { bill_aggregator }
  }

  pub fn execute(&self) -> GetBillResponse {
    let snapshot = self.bill_aggregator.get_all();

    GetBillResponse {
      bills: snapshot.bills.into_iter().map(BillLineDto::from).collect(),
      total: snapshot.total.into(),
    }
  }
}
