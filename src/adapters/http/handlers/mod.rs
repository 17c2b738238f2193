pub mod bill;
pub mod health;
pub mod tax_object;
