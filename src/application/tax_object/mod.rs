pub mod create_tax_object;

pub use create_tax_object::{
  CreateTaxObjectCommand, CreateTaxObjectResponse, CreateTaxObjectUseCase,
};
