use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

use super::utc_now;

/// A recorded catch, attached to a fishing report of the same account.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Landing {
    pub id: Uuid,
    pub account_id: Uuid,
    pub fish_species_id: i32,
    pub fishing_report_id: Uuid,
    pub length_in_inches: Option<Decimal>,
    pub lure_used: Option<Uuid>,
    pub rod_used: Option<Uuid>,
    pub reel_used: Option<Uuid>,
    pub main_line_test_in_pounds: Option<i32>,
    pub leader_line_test_in_pounds: Option<i32>,
    pub time_of_catch: Option<DateTime<Utc>>,
    pub released: bool,
    pub created_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
    pub deleted_date: Option<DateTime<Utc>>,
}

impl Landing {
    pub fn new(account_id: Uuid, fishing_report_id: Uuid, fish_species_id: i32) -> Self {
        let now = utc_now();
        Self {
            id: Uuid::new_v4(),
            account_id,
            fish_species_id,
            fishing_report_id,
            length_in_inches: None,
            lure_used: None,
            rod_used: None,
            reel_used: None,
            main_line_test_in_pounds: None,
            leader_line_test_in_pounds: None,
            time_of_catch: None,
            released: true,
            created_date: now,
            updated_date: now,
            deleted_date: None,
        }
    }
}

super::tenant_entity!(
    Landing,
    owner = account_id,
    created = created_date,
    updated = updated_date,
    deleted = deleted_date
);
