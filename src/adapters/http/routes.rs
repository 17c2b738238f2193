use actix_web::web;
use std::sync::Arc;

use crate::application::bill::GetBillUseCase;
use crate::application::tax_object::CreateTaxObjectUseCase;

use super::errors::json_error_handler;
use super::handlers::bill::get_bill_handler;
use super::handlers::tax_object::create_tax_object_handler;

/// Configure tax object routes
///
/// # Routes
///
/// - POST /tax - Store a tax object and add it to the bill
///
/// Malformed JSON bodies are answered with the same 400 response as field
/// validation failures.
///
/// # Example
///
/// ```no_run
/// use actix_web::App;
/// use std::sync::Arc;
/// # use tax_calculator::application::tax_object::CreateTaxObjectUseCase;
/// # use tax_calculator::adapters::http::routes::configure_tax_object_routes;
///
/// # fn example(create_use_case: Arc<CreateTaxObjectUseCase>) {
/// let app = App::new().configure(|cfg| configure_tax_object_routes(cfg, create_use_case));
/// # }
/// ```
pub fn configure_tax_object_routes(
  cfg: &mut web::ServiceConfig,
  create_use_case: Arc<CreateTaxObjectUseCase>,
) {
  cfg
    .app_data(web::Data::new(create_use_case))
    .app_data(web::JsonConfig::default().error_handler(json_error_handler))
    .route("/tax", web::post().to(create_tax_object_handler));
}

/// Configure bill routes
///
/// # Routes
///
/// - GET /bill - List every bill line and the running totals
pub fn configure_bill_routes(cfg: &mut web::ServiceConfig, get_bill_use_case: Arc<GetBillUseCase>) {
  cfg
    .app_data(web::Data::new(get_bill_use_case))
    .route("/bill", web::get().to(get_bill_handler));
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::bill::{BillAggregator, TaxAggregator};
  use crate::domain::tax_object::{NewTaxObject, TaxObject, TaxObjectError, TaxObjectRepository};
  use crate::infrastructure::persistence::memory::InMemoryTaxObjectRepository;
  use actix_web::{
    App,
    http::StatusCode,
    test::{self, TestRequest},
  };
  use async_trait::async_trait;
  use serde_json::{Value, json};

  struct UnreachableRepository;

  #[async_trait]
  impl TaxObjectRepository for UnreachableRepository {
    async fn get_all(&self) -> Result<Vec<TaxObject>, TaxObjectError> {
      Err(TaxObjectError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn create(&self, _tax_object: NewTaxObject) -> Result<TaxObject, TaxObjectError> {
      Err(TaxObjectError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn migrate(&self) -> Result<(), TaxObjectError> {
      Ok(())
    }

    async fn close(&self) {}
  }

  fn use_cases(
    repo: Arc<dyn TaxObjectRepository>,
  ) -> (
    Arc<CreateTaxObjectUseCase>,
    Arc<GetBillUseCase>,
    Arc<TaxAggregator>,
  ) {
    let aggregator = Arc::new(TaxAggregator::new());
    let create = Arc::new(CreateTaxObjectUseCase::new(repo, aggregator.clone()));
    let get_bill = Arc::new(GetBillUseCase::new(aggregator.clone()));
    (create, get_bill, aggregator)
  }

  macro_rules! init_app {
    ($create:expr, $get_bill:expr) => {
      test::init_service(
        App::new()
          .configure(|cfg| configure_tax_object_routes(cfg, $create.clone()))
          .configure(|cfg| configure_bill_routes(cfg, $get_bill.clone())),
      )
      .await
    };
  }

  #[actix_web::test]
  async fn test_create_then_get_bill() {
    let (create, get_bill, _) = use_cases(Arc::new(InMemoryTaxObjectRepository::new()));
    let app = init_app!(create, get_bill);

    let req = TestRequest::post()
      .uri("/tax")
      .set_json(json!({"name": "KFC Burger", "tax_code": 1, "price": 5000}))
      .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["id"], 1);
    assert_eq!(created["name"], "KFC Burger");
    assert_eq!(created["tax_code"], 1);
    assert_eq!(created["price"].as_f64(), Some(5000.0));

    let req = TestRequest::get().uri("/bill").to_request();
    let bill: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(bill["bill"].as_array().map(Vec::len), Some(1));
    let line = &bill["bill"][0];
    assert_eq!(line["name"], "KFC Burger");
    assert_eq!(line["tax_code"], 1);
    assert_eq!(line["type"], "Food & Beverage");
    assert_eq!(line["refundable"], "Yes");
    assert_eq!(line["price"].as_f64(), Some(5000.0));
    assert_eq!(line["tax"].as_f64(), Some(500.0));
    assert_eq!(line["amount"].as_f64(), Some(5500.0));

    assert_eq!(bill["total"]["price_subtotal"].as_f64(), Some(5000.0));
    assert_eq!(bill["total"]["tax_subtotal"].as_f64(), Some(500.0));
    assert_eq!(bill["total"]["grand_total"].as_f64(), Some(5500.0));
  }

  #[actix_web::test]
  async fn test_get_bill_empty() {
    let (create, get_bill, _) = use_cases(Arc::new(InMemoryTaxObjectRepository::new()));
    let app = init_app!(create, get_bill);

    let req = TestRequest::get().uri("/bill").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let bill: Value = test::read_body_json(resp).await;
    assert_eq!(bill["bill"], json!([]));
    assert_eq!(bill["total"]["price_subtotal"].as_f64(), Some(0.0));
    assert_eq!(bill["total"]["tax_subtotal"].as_f64(), Some(0.0));
    assert_eq!(bill["total"]["grand_total"].as_f64(), Some(0.0));
  }

  #[actix_web::test]
  async fn test_create_rejects_invalid_fields() {
    let (create, get_bill, aggregator) = use_cases(Arc::new(InMemoryTaxObjectRepository::new()));
    let app = init_app!(create, get_bill);

    let invalid_bodies = [
      json!({"name": "", "tax_code": 1, "price": 100}),
      json!({"name": "   ", "tax_code": 1, "price": 100}),
      json!({"name": "<script>alert(1)</script>", "tax_code": 1, "price": 100}),
      json!({"name": "Movie", "tax_code": 0, "price": 100}),
      json!({"name": "Movie", "tax_code": 4, "price": 100}),
      json!({"name": "Movie", "tax_code": 3, "price": 0}),
      json!({"name": "Movie", "tax_code": 3, "price": -20}),
      json!({"name": "Movie", "tax_code": 3}),
      json!({"tax_code": 3, "price": 150}),
      json!({"name": "Movie", "tax_code": "three", "price": 150}),
    ];

    for body in invalid_bodies {
      let req = TestRequest::post().uri("/tax").set_json(&body).to_request();
      let resp = test::call_service(&app, req).await;
      assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "body: {}", body);

      let error: Value = test::read_body_json(resp).await;
      assert_eq!(error["error"], "validation_error");
      assert_eq!(error["message"], "Invalid input");
    }

    assert!(aggregator.get_all().bills.is_empty());
  }

  #[actix_web::test]
  async fn test_create_strips_markup_from_name() {
    let (create, get_bill, _) = use_cases(Arc::new(InMemoryTaxObjectRepository::new()));
    let app = init_app!(create, get_bill);

    let req = TestRequest::post()
      .uri("/tax")
      .set_json(json!({"name": "<script>x</script>Burger", "tax_code": 1, "price": 50}))
      .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(created["name"], "Burger");

    let req = TestRequest::get().uri("/bill").to_request();
    let bill: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(bill["bill"][0]["name"], "Burger");
  }

  #[actix_web::test]
  async fn test_create_rejects_malformed_json() {
    let (create, get_bill, _) = use_cases(Arc::new(InMemoryTaxObjectRepository::new()));
    let app = init_app!(create, get_bill);

    let req = TestRequest::post()
      .uri("/tax")
      .insert_header(("content-type", "application/json"))
      .set_payload("{\"name\": \"Movie\",")
      .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: Value = test::read_body_json(resp).await;
    assert_eq!(error["message"], "Invalid input");
  }

  #[actix_web::test]
  async fn test_create_rejects_price_that_would_overflow_bill() {
    let (create, get_bill, aggregator) = use_cases(Arc::new(InMemoryTaxObjectRepository::new()));
    let app = init_app!(create, get_bill);

    for _ in 0..2 {
      let req = TestRequest::post()
        .uri("/tax")
        .set_json(json!({"name": "Jet", "tax_code": 1, "price": 3.7e28}))
        .to_request();
      let resp = test::call_service(&app, req).await;
      assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    let req = TestRequest::get().uri("/bill").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(aggregator.get_all().bills.is_empty());
  }

  #[actix_web::test]
  async fn test_create_store_failure() {
    let (create, get_bill, aggregator) = use_cases(Arc::new(UnreachableRepository));
    let app = init_app!(create, get_bill);

    let req = TestRequest::post()
      .uri("/tax")
      .set_json(json!({"name": "MACD", "tax_code": 1, "price": 20000}))
      .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let error: Value = test::read_body_json(resp).await;
    assert_eq!(error["error"], "internal_error");
    assert!(aggregator.get_all().bills.is_empty());
  }

  #[actix_web::test]
  async fn test_bill_accumulates_across_requests() {
    let (create, get_bill, _) = use_cases(Arc::new(InMemoryTaxObjectRepository::new()));
    let app = init_app!(create, get_bill);

    for body in [
      json!({"name": "MACD", "tax_code": 1, "price": 20000}),
      json!({"name": "Lucky Stretch", "tax_code": 2, "price": 1000}),
      json!({"name": "Movie", "tax_code": 3, "price": 150}),
    ] {
      let req = TestRequest::post().uri("/tax").set_json(&body).to_request();
      let resp = test::call_service(&app, req).await;
      assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let req = TestRequest::get().uri("/bill").to_request();
    let bill: Value = test::call_and_read_body_json(&app, req).await;

    let types: Vec<&str> = bill["bill"]
      .as_array()
      .unwrap()
      .iter()
      .map(|line| line["type"].as_str().unwrap())
      .collect();
    assert_eq!(types, vec!["Food & Beverage", "Tobacco", "Entertainment"]);

    // 2000 + 30 + 0.5
    assert_eq!(bill["total"]["price_subtotal"].as_f64(), Some(21150.0));
    assert_eq!(bill["total"]["tax_subtotal"].as_f64(), Some(2030.5));
    assert_eq!(bill["total"]["grand_total"].as_f64(), Some(23180.5));
  }
}
