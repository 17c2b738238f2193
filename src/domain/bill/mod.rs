pub mod aggregator;
pub mod entities;
pub mod ports;
pub mod tax_rules;

pub use aggregator::TaxAggregator;
pub use entities::{Bill, BillSnapshot, BillTotal};
pub use ports::BillAggregator;
pub use tax_rules::calculate_tax;
