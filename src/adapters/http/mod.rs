pub mod dtos;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod routes;

// Re-export commonly used types
pub use dtos::{
  BillLineResponse, BillResponse, BillTotalResponse, CreateTaxObjectRequest, ErrorResponse,
  TaxObjectResponse,
};
pub use errors::ApiError;
pub use handlers::bill::get_bill_handler;
pub use handlers::health::health_check;
pub use handlers::tax_object::create_tax_object_handler;
pub use middleware::{RequestId, RequestIdExt, RequestIdMiddleware};
pub use routes::{configure_bill_routes, configure_tax_object_routes};
