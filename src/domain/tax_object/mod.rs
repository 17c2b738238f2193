pub mod entities;
pub mod errors;
pub mod ports;
pub mod value_objects;

pub use entities::{NewTaxObject, TaxObject};
pub use errors::TaxObjectError;
pub use ports::TaxObjectRepository;
pub use value_objects::{
  ItemName, MAX_PRICE, Refundable, TaxCategory, TaxCode, ValueObjectError,
};
