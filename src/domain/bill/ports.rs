use super::entities::BillSnapshot;
use crate::domain::tax_object::TaxObject;

/// Running bill built from tax objects.
///
/// Implementations must apply `add` and `get_all` atomically with respect to
/// each other: a snapshot never shows a bill line without its contribution to
/// the totals, or the other way around.
pub trait BillAggregator: Send + Sync {
  /// Computes the tax for `tax_object` and folds it into the bill. Items whose
  /// amount or totals would leave the `Decimal` range are logged and skipped.
  fn add(&self, tax_object: &TaxObject);

  /// Returns a point-in-time copy of all bill lines and their totals.
  fn get_all(&self) -> BillSnapshot;
}
