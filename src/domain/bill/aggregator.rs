//! In-memory bill cache.
//!
//! Every computed bill line and the running totals live behind one mutex so
//! that a reader always sees the lines and the totals from the same moment.
//! Nothing inside the lock performs I/O, which keeps the critical section short
//! enough for request handlers to share it.

use std::sync::{Mutex, MutexGuard, PoisonError};

use super::entities::{Bill, BillSnapshot, BillTotal};
use super::ports::BillAggregator;
use crate::domain::tax_object::TaxObject;

#[derive(Debug, Default)]
struct Ledger {
  bills: Vec<Bill>,
  total: BillTotal,
}

#[derive(Debug, Default)]
pub struct TaxAggregator {
  ledger: Mutex<Ledger>,
}

impl TaxAggregator {
  pub fn new() -> Self {
    Self::default()
  }

  // The ledger is written only after every sum has been computed, so a
  // poisoned lock still guards consistent data.
  fn lock(&self) -> MutexGuard<'_, Ledger> {
    self.ledger.lock().unwrap_or_else(PoisonError::into_inner)
  }
}

impl BillAggregator for TaxAggregator {
  fn add(&self, tax_object: &TaxObject) {
    let Some(bill) = Bill::from_tax_object(tax_object) else {
      tracing::error!(
        tax_object_id = tax_object.id,
        "Tax object amount out of range, left out of the bill"
      );
      return;
    };

    let mut ledger = self.lock();
    let Some(total) = ledger.total.checked_add(&bill) else {
      tracing::error!(
        tax_object_id = tax_object.id,
        "Bill totals would overflow, tax object left out of the bill"
      );
      return;
    };
    ledger.total = total;
    ledger.bills.push(bill);

    tracing::debug!(
      tax_object_id = tax_object.id,
      bills = ledger.bills.len(),
      "Added tax object to bill"
    );
  }

  fn get_all(&self) -> BillSnapshot {
    let ledger = self.lock();
    BillSnapshot {
      bills: ledger.bills.clone(),
      total: ledger.total,
    }
  }
}
