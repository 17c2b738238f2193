use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::tax_object::{TaxCategory, TaxCode};

const FOOD_AND_BEVERAGE_RATE: Decimal = dec!(0.10);
const TOBACCO_BASE: Decimal = dec!(10);
const TOBACCO_RATE: Decimal = dec!(0.02);
const ENTERTAINMENT_THRESHOLD: Decimal = dec!(100);
const ENTERTAINMENT_RATE: Decimal = dec!(0.01);

/// Tax owed for a single item.
///
/// Non-positive prices are never taxed, and codes without a category carry no tax.
pub fn calculate_tax(tax_code: TaxCode, price: Decimal) -> Decimal {
  if price <= Decimal::ZERO {
    return Decimal::ZERO;
  }

  match tax_code.category() {
    Some(TaxCategory::FoodAndBeverage) => price * FOOD_AND_BEVERAGE_RATE,
    Some(TaxCategory::Tobacco) => TOBACCO_BASE + price * TOBACCO_RATE,
    Some(TaxCategory::Entertainment) if price < ENTERTAINMENT_THRESHOLD => Decimal::ZERO,
    Some(TaxCategory::Entertainment) => (price - ENTERTAINMENT_THRESHOLD) * ENTERTAINMENT_RATE,
    None => Decimal::ZERO,
  }
}
