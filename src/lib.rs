//! Tax calculator service.
//!
//! Accepts taxable items over HTTP, stores them in PostgreSQL and keeps a
//! running, itemized bill of the computed taxes in memory.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod infrastructure;
