use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// Fixed reference entity shared by all accounts.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Location {
    pub id: i32,
    pub name: String,
    pub latitude: Decimal,
    pub longitude: Decimal,
    pub description: Option<String>,
    #[sqlx(rename = "display_order")]
    pub order: i32,
    pub created_date: DateTime<Utc>,
}
