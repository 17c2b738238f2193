use actix_web::{HttpResponse, web};
use std::sync::Arc;
use validator::Validate;

use crate::{
  adapters::http::{
    dtos::{CreateTaxObjectRequest, TaxObjectResponse},
    errors::ApiError,
  },
  application::tax_object::{CreateTaxObjectCommand, CreateTaxObjectUseCase},
};

/// Create new tax object
/// POST /tax
pub async fn create_tax_object_handler(
  request: web::Json<CreateTaxObjectRequest>,
  use_case: web::Data<Arc<CreateTaxObjectUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;

  let request = request.into_inner();
  let command = CreateTaxObjectCommand {
    name: request.name,
    tax_code: request.tax_code,
    price: request.price,
  };

  let response = use_case.execute(command).await?;

  Ok(HttpResponse::Created().json(TaxObjectResponse::from(response)))
}
