pub mod bill;
pub mod tax_object;
