use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use super::{utc_now, SoftDeletable, Timestamped};

/// Top-level tenant. Email is unique across all rows, including soft-deleted ones.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Account {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub created_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
    pub deleted_date: Option<DateTime<Utc>>,
}

impl Account {
    pub fn new(email: String, first_name: String, last_name: String) -> Self {
        let now = utc_now();
        Self {
            id: Uuid::new_v4(),
            email,
            first_name,
            last_name,
            created_date: now,
            updated_date: now,
            deleted_date: None,
        }
    }
}

impl SoftDeletable for Account {
    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_date
    }

    fn mark_deleted(&mut self, at: DateTime<Utc>) {
        self.deleted_date = Some(at);
    }
}

impl Timestamped for Account {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_date
    }

    fn stamp_created(&mut self, at: DateTime<Utc>) {
        self.created_date = at;
        self.updated_date = at;
    }

    fn stamp_updated(&mut self, at: DateTime<Utc>) {
        self.updated_date = at;
    }
}
