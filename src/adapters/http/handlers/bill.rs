use actix_web::{HttpResponse, web};
use std::sync::Arc;

use crate::{adapters::http::dtos::BillResponse, application::bill::GetBillUseCase};

/// Get every bill line with the running totals
/// GET /bill
pub async fn get_bill_handler(use_case: web::Data<Arc<GetBillUseCase>>) -> HttpResponse {
  let response = use_case.execute();

  HttpResponse::Ok().json(BillResponse::from(response))
}
