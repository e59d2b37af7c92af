use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::{fetch_page, PgTable};
use crate::database::models::{utc_now, FishingReport};
use crate::database::ordering::{report_position, FISHING_REPORTS};
use crate::database::stores::{FishingReportStore, StoreResult, Visibility};
use crate::pagination::{Page, PageRequest};

pub struct PgFishingReportStore {
    table: PgTable,
}

impl PgFishingReportStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            table: PgTable::new("fishing_reports", pool),
        }
    }
}

#[async_trait]
impl FishingReportStore for PgFishingReportStore {
    async fn get(&self, id: Uuid, visibility: Visibility) -> StoreResult<Option<FishingReport>> {
        self.table.get(id, visibility).await
    }

    async fn list_by_owner(&self, account_id: Uuid) -> StoreResult<Vec<FishingReport>> {
        let sql = format!(
            "{} AND account_id = $1 {}",
            self.table.select_live(),
            FISHING_REPORTS.order_by()
        );
        let reports = sqlx::query_as::<_, FishingReport>(&sql)
            .bind(account_id)
            .fetch_all(self.table.pool())
            .await?;
        Ok(reports)
    }

    async fn page_by_owner(
        &self,
        account_id: Uuid,
        request: &PageRequest,
    ) -> StoreResult<Page<FishingReport>> {
        let base = format!("{} AND account_id = $1", self.table.select_live());
        fetch_page(
            self.table.pool(),
            &FISHING_REPORTS,
            &base,
            &[account_id],
            request,
            report_position,
        )
        .await
    }

    async fn add(&self, report: FishingReport) -> StoreResult<FishingReport> {
        let report = sqlx::query_as::<_, FishingReport>(
            "INSERT INTO fishing_reports (id, account_id, location_id, arrival_time, departure_time, \
             first_high_tide, second_high_tide, first_low_tide, second_low_tide, daytime_temperature, \
             water_temperature, wind_speed_in_miles_per_hour, wind_direction, weather_conditions, \
             notes, video_url, trip_date, created_date, updated_date) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $18) \
             RETURNING *",
        )
        .bind(report.id)
        .bind(report.account_id)
        .bind(report.location_id)
        .bind(report.arrival_time)
        .bind(report.departure_time)
        .bind(report.first_high_tide)
        .bind(report.second_high_tide)
        .bind(report.first_low_tide)
        .bind(report.second_low_tide)
        .bind(report.daytime_temperature)
        .bind(report.water_temperature)
        .bind(report.wind_speed_in_miles_per_hour)
        .bind(&report.wind_direction)
        .bind(report.weather_conditions)
        .bind(&report.notes)
        .bind(&report.video_url)
        .bind(report.trip_date)
        .bind(utc_now())
        .fetch_one(self.table.pool())
        .await?;
        Ok(report)
    }

    async fn update(&self, report: FishingReport) -> StoreResult<Option<FishingReport>> {
        let report = sqlx::query_as::<_, FishingReport>(
            "UPDATE fishing_reports SET location_id = $2, arrival_time = $3, departure_time = $4, \
             first_high_tide = $5, second_high_tide = $6, first_low_tide = $7, second_low_tide = $8, \
             daytime_temperature = $9, water_temperature = $10, wind_speed_in_miles_per_hour = $11, \
             wind_direction = $12, weather_conditions = $13, notes = $14, video_url = $15, \
             trip_date = $16, updated_date = $17 \
             WHERE id = $1 AND deleted_date IS NULL RETURNING *",
        )
        .bind(report.id)
        .bind(report.location_id)
        .bind(report.arrival_time)
        .bind(report.departure_time)
        .bind(report.first_high_tide)
        .bind(report.second_high_tide)
        .bind(report.first_low_tide)
        .bind(report.second_low_tide)
        .bind(report.daytime_temperature)
        .bind(report.water_temperature)
        .bind(report.wind_speed_in_miles_per_hour)
        .bind(&report.wind_direction)
        .bind(report.weather_conditions)
        .bind(&report.notes)
        .bind(&report.video_url)
        .bind(report.trip_date)
        .bind(utc_now())
        .fetch_optional(self.table.pool())
        .await?;
        Ok(report)
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
