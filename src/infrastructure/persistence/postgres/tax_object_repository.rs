use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use std::future::Future;
use std::time::Duration;

use crate::domain::tax_object::{
  ItemName, NewTaxObject, TaxCode, TaxObject, errors::TaxObjectError, ports::TaxObjectRepository,
};

/// Database row structure for the tax_object table
#[derive(Debug, FromRow)]
struct TaxObjectRow {
  id: i64,
  name: String,
  tax_code: i64,
  price: Decimal,
}

impl From<TaxObjectRow> for TaxObject {
  fn from(row: TaxObjectRow) -> Self {
    // Stored rows are replayed as they are, even if they predate the
    // current name rules.
    TaxObject {
      id: row.id,
      name: ItemName::from_stored(row.name),
      tax_code: TaxCode::new(row.tax_code),
      price: row.price,
    }
  }
}

/// Runs a store call under `timeout`. Pool acquisition counts against the
/// same deadline as the query itself.
async fn with_deadline<T, F>(
  operation: &'static str,
  timeout: Duration,
  call: F,
) -> Result<T, TaxObjectError>
where
  F: Future<Output = Result<T, sqlx::Error>>,
{
  match tokio::time::timeout(timeout, call).await {
    Ok(result) => Ok(result?),
    Err(_) => {
      tracing::warn!(operation, ?timeout, "Store call timed out");
      Err(TaxObjectError::Timeout { operation, timeout })
    }
  }
}

/// PostgreSQL implementation of the TaxObjectRepository trait
pub struct PostgresTaxObjectRepository {
  pool: PgPool,
  query_timeout: Duration,
}

impl PostgresTaxObjectRepository {
  pub fn new(pool: PgPool, query_timeout: Duration) -> Self {
    Self {
      pool,
      query_timeout,
    }
  }
}

#[async_trait]
impl TaxObjectRepository for PostgresTaxObjectRepository {
  async fn get_all(&self) -> Result<Vec<TaxObject>, TaxObjectError> {
    let rows = with_deadline(
      "get_all",
      self.query_timeout,
      sqlx::query_as::<_, TaxObjectRow>(
        r#"
            SELECT id, name, tax_code, price
            FROM tax_object
            ORDER BY id ASC
            "#,
      )
      .fetch_all(&self.pool),
    )
    .await?;

    Ok(rows.into_iter().map(TaxObject::from).collect())
  }

  async fn create(&self, tax_object: NewTaxObject) -> Result<TaxObject, TaxObjectError> {
    let row = with_deadline(
      "create",
      self.query_timeout,
      sqlx::query_as::<_, TaxObjectRow>(
        r#"
            INSERT INTO tax_object (name, tax_code, price)
            VALUES ($1, $2, $3)
            RETURNING id, name, tax_code, price
            "#,
      )
      .bind(tax_object.name.value())
      .bind(tax_object.tax_code.value())
      .bind(tax_object.price)
      .fetch_one(&self.pool),
    )
    .await?;

    Ok(row.into())
  }

  // Migrations run once at startup and are not bound by the per-call deadline.
  async fn migrate(&self) -> Result<(), TaxObjectError> {
    sqlx::migrate!("./migrations").run(&self.pool).await?;
    Ok(())
  }

  async fn close(&self) {
    self.pool.close().await;
  }
}
