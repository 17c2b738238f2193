use rust_decimal::Decimal;

use super::tax_rules::calculate_tax;
use crate::domain::tax_object::{TaxCategory, TaxCode, TaxObject};

/// Display-ready projection of a tax object once its tax has been computed.
#[derive(Debug, Clone, PartialEq)]
pub struct Bill {
  pub name: String,
  pub tax_code: TaxCode,
  pub category: Option<TaxCategory>,
  pub price: Decimal,
  pub tax: Decimal,
  pub amount: Decimal,
}

impl Bill {
  /// Returns `None` when the amount does not fit in a `Decimal`.
  pub fn from_tax_object(tax_object: &TaxObject) -> Option<Self> {
    let tax = calculate_tax(tax_object.tax_code, tax_object.price);
    let amount = tax_object.price.checked_add(tax)?;

    Some(Self {
      name: tax_object.name.value().to_string(),
      tax_code: tax_object.tax_code,
      category: tax_object.tax_code.category(),
      price: tax_object.price,
      tax,
      amount,
    })
  }

  /// Category label, empty for unknown tax codes.
  pub fn type_label(&self) -> &'static str {
    self.category.map(|c| c.label()).unwrap_or_default()
  }

  /// "Yes"/"No", empty for unknown tax codes.
  pub fn refundable_label(&self) -> &'static str {
    self
      .category
      .map(|c| c.refundable().as_str())
      .unwrap_or_default()
  }
}

/// Running sums over every bill line.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BillTotal {
  pub price_subtotal: Decimal,
  pub tax_subtotal: Decimal,
  pub grand_total: Decimal,
}

impl BillTotal {
  /// Totals with `bill` folded in, or `None` if any of the three sums
  /// overflows. `self` is left untouched either way.
  pub fn checked_add(&self, bill: &Bill) -> Option<BillTotal> {
    Some(BillTotal {
      price_subtotal: self.price_subtotal.checked_add(bill.price)?,
      tax_subtotal: self.tax_subtotal.checked_add(bill.tax)?,
      grand_total: self.grand_total.checked_add(bill.amount)?,
    })
  }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BillSnapshot {
  pub bills: Vec<Bill>,
  pub total: BillTotal,
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::tax_object::ItemName;
  use rust_decimal_macros::dec;

  fn tax_object(name: &str, code: i64, price: Decimal) -> TaxObject {
    TaxObject {
      id: 1,
      name: ItemName::new(name.to_string()).unwrap(),
      tax_code: TaxCode::new(code),
      price,
    }
  }

  #[test]
  fn test_bill_from_food_item() {
    let bill = Bill::from_tax_object(&tax_object("MACD", 1, dec!(20000))).unwrap();

    assert_eq!(bill.name, "MACD");
    assert_eq!(bill.tax, dec!(2000));
    assert_eq!(bill.amount, dec!(22000));
    assert_eq!(bill.type_label(), "Food & Beverage");
    assert_eq!(bill.refundable_label(), "Yes");
  }

  #[test]
  fn test_bill_from_unknown_code() {
    let bill = Bill::from_tax_object(&tax_object("Mystery", 0, dec!(75))).unwrap();

    assert_eq!(bill.category, None);
    assert_eq!(bill.type_label(), "");
    assert_eq!(bill.refundable_label(), "");
    assert_eq!(bill.tax, Decimal::ZERO);
    assert_eq!(bill.amount, dec!(75));
  }

  #[test]
  fn test_amount_for_negative_price() {
    let bill = Bill::from_tax_object(&tax_object("Refund", 1, dec!(-10))).unwrap();

    assert_eq!(bill.tax, Decimal::ZERO);
    assert_eq!(bill.amount, dec!(-10));
  }

  #[test]
  fn test_bill_amount_overflow() {
    assert_eq!(Bill::from_tax_object(&tax_object("Yacht", 1, Decimal::MAX)), None);
    // Untaxed, so the amount is the price itself.
    assert!(Bill::from_tax_object(&tax_object("Yacht", 0, Decimal::MAX)).is_some());
  }

  #[test]
  fn test_total_checked_add() {
    let bill_a = Bill::from_tax_object(&tax_object("A", 1, dec!(100))).unwrap();
    let bill_b = Bill::from_tax_object(&tax_object("B", 2, dec!(1000))).unwrap();

    let total = BillTotal::default()
      .checked_add(&bill_a)
      .and_then(|total| total.checked_add(&bill_b))
      .unwrap();

    assert_eq!(total.price_subtotal, dec!(1100));
    assert_eq!(total.tax_subtotal, dec!(40));
    assert_eq!(total.grand_total, dec!(1140));
  }

  #[test]
  fn test_total_checked_add_overflow() {
    let bill =
      Bill::from_tax_object(&tax_object("Jet", 1, dec!(37000000000000000000000000000))).unwrap();
    let total = BillTotal::default().checked_add(&bill).unwrap();

    // Price subtotal still fits, the grand total does not.
    assert_eq!(total.checked_add(&bill), None);
    assert_eq!(total.price_subtotal, dec!(37000000000000000000000000000));
  }
}
