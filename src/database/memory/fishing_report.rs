use async_trait::async_trait;
use uuid::Uuid;

use super::Table;
use crate::database::models::FishingReport;
use crate::database::ordering::{report_position, FISHING_REPORTS};
use crate::database::stores::{FishingReportStore, StoreResult, Visibility};
use crate::pagination::{Page, PageRequest};

#[derive(Default)]
pub struct MemoryFishingReportStore {
    table: Table<FishingReport>,
}

#[async_trait]
impl FishingReportStore for MemoryFishingReportStore {
    async fn get(&self, id: Uuid, visibility: Visibility) -> StoreResult<Option<FishingReport>> {
        Ok(self.table.get(id, visibility).await)
    }

    async fn list_by_owner(&self, account_id: Uuid) -> StoreResult<Vec<FishingReport>> {
        let mut reports = self.table.select(|r| r.account_id == account_id).await;
        reports.sort_by(|a, b| FISHING_REPORTS.compare(&report_position(a), &report_position(b)));
        Ok(reports)
    }

    async fn page_by_owner(
        &self,
        account_id: Uuid,
        request: &PageRequest,
    ) -> StoreResult<Page<FishingReport>> {
        let rows = self.table.select(|r| r.account_id == account_id).await;
        Ok(FISHING_REPORTS.paginate(rows, request, report_position)?)
    }

    async fn add(&self, report: FishingReport) -> StoreResult<FishingReport> {
        Ok(self.table.insert(report).await)
    }

    async fn update(&self, report: FishingReport) -> StoreResult<Option<FishingReport>> {
        Ok(self.table.replace(report, |_| false).await.into_option())
    }

    async fn soft_delete(&self, id: Uuid) -> StoreResult<bool> {
        Ok(self.table.soft_delete(id).await)
    }

    async fn exists(&self, id: Uuid) -> StoreResult<bool> {
        Ok(self.table.any(|r| r.id == id).await)
    }

    async fn belongs_to_owner(&self, id: Uuid, account_id: Uuid) -> StoreResult<bool> {
        Ok(self
            .table
            .any(|r| r.id == id && r.account_id == account_id)
            .await)
    }
}
