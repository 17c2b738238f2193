//! Application layer
//!
//! This layer contains use cases that orchestrate domain logic to implement
//! application-specific workflows: storing tax objects, reading the bill and
//! replaying stored tax objects into the bill at startup.

pub mod bill;
pub mod tax_object;
