use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct FishSpecies {
    pub id: i32,
    #[sqlx(rename = "display_order")]
    pub order: i32,
    pub name: String,
    pub scientific_name: Option<String>,
    pub description: Option<String>,
    pub created_date: DateTime<Utc>,
}
