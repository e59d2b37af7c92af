use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::{fetch_page, PgTable};
use crate::database::models::{utc_now, Landing};
use crate::database::ordering::{landing_position, LANDINGS};
use crate::database::stores::{LandingStore, StoreResult, Visibility};
use crate::pagination::{Page, PageRequest};

pub struct PgLandingStore {
    table: PgTable,
}

impl PgLandingStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            table: PgTable::new("landings", pool),
        }
    }

    fn scoped(&self) -> String {
        format!(
            "{} AND fishing_report_id = $1 AND account_id = $2",
            self.table.select_live()
        )
    }
}

#[async_trait]
impl LandingStore for PgLandingStore {
    async fn get(&self, id: Uuid, visibility: Visibility) -> StoreResult<Option<Landing>> {
        self.table.get(id, visibility).await
    }

    async fn list_by_report(&self, report_id: Uuid, account_id: Uuid) -> StoreResult<Vec<Landing>> {
        let sql = format!("{} {}", self.scoped(), LANDINGS.order_by());
        let landings = sqlx::query_as::<_, Landing>(&sql)
            .bind(report_id)
            .bind(account_id)
            .fetch_all(self.table.pool())
            .await?;
        Ok(landings)
    }

    async fn page_by_report(
        &self,
        report_id: Uuid,
        account_id: Uuid,
        request: &PageRequest,
    ) -> StoreResult<Page<Landing>> {
        let base = self.scoped();
        fetch_page(
            self.table.pool(),
            &LANDINGS,
            &base,
            &[report_id, account_id],
            request,
            landing_position,
        )
        .await
    }

    async fn add(&self, landing: Landing) -> StoreResult<Landing> {
        let landing = sqlx::query_as::<_, Landing>(
            "INSERT INTO landings (id, account_id, fish_species_id, fishing_report_id, length_in_inches, \
             lure_used, rod_used, reel_used, main_line_test_in_pounds, leader_line_test_in_pounds, \
             time_of_catch, released, created_date, updated_date) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $13) RETURNING *",
        )
        .bind(landing.id)
        .bind(landing.account_id)
        .bind(landing.fish_species_id)
        .bind(landing.fishing_report_id)
        .bind(landing.length_in_inches)
        .bind(landing.lure_used)
        .bind(landing.rod_used)
        .bind(landing.reel_used)
        .bind(landing.main_line_test_in_pounds)
        .bind(landing.leader_line_test_in_pounds)
        .bind(landing.time_of_catch)
        .bind(landing.released)
        .bind(utc_now())
        .fetch_one(self.table.pool())
        .await?;
        Ok(landing)
    }

    async fn update(&self, landing: Landing) -> StoreResult<Option<Landing>> {
        let landing = sqlx::query_as::<_, Landing>(
            "UPDATE landings SET fish_species_id = $2, length_in_inches = $3, lure_used = $4, \
             rod_used = $5, reel_used = $6, main_line_test_in_pounds = $7, \
             leader_line_test_in_pounds = $8, time_of_catch = $9, released = $10, updated_date = $11 \
             WHERE id = $1 AND deleted_date IS NULL RETURNING *",
        )
        .bind(landing.id)
        .bind(landing.fish_species_id)
        .bind(landing.length_in_inches)
        .bind(landing.lure_used)
        .bind(landing.rod_used)
        .bind(landing.reel_used)
        .bind(landing.main_line_test_in_pounds)
        .bind(landing.leader_line_test_in_pounds)
        .bind(landing.time_of_catch)
        .bind(landing.released)
        .bind(utc_now())
        .fetch_optional(self.table.pool())
        .await?;
        Ok(landing)
    }

    async fn soft_delete(&self, id: Uuid) -> StoreResult<bool> {
        self.table.soft_delete(id, None).await
    }

    async fn exists(&self, id: Uuid) -> StoreResult<bool> {
        self.table.exists(id).await
    }

    async fn belongs_to_owner(&self, id: Uuid, account_id: Uuid) -> StoreResult<bool> {
        self.table.belongs_to_owner(id, account_id).await
    }
}
