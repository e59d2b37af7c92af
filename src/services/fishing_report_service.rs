use std::sync::Arc;

use futures::future::try_join_all;
use uuid::Uuid;

use super::{owned, ServiceError, ServiceResult};
use crate::api::{
    CreateFishingReportRequest, FishingReportResponse, LocationResponse, UpdateFishingReportRequest,
};
use crate::database::models::FishingReport;
use crate::database::{AccountStore, FishingReportStore, LocationStore, Stores, Visibility};
use crate::pagination::{Page, PageRequest};

#[derive(Clone)]
pub struct FishingReportService {
    accounts: Arc<dyn AccountStore>,
    locations: Arc<dyn LocationStore>,
    reports: Arc<dyn FishingReportStore>,
}

impl FishingReportService {
    pub fn new(stores: &Stores) -> Self {
        Self {
            accounts: stores.accounts.clone(),
            locations: stores.locations.clone(),
            reports: stores.reports.clone(),
        }
    }

    async fn to_response(&self, report: FishingReport) -> ServiceResult<FishingReportResponse> {
        let location = self.locations.get(report.location_id).await?;
        Ok(FishingReportResponse::new(
            report,
            location.map(LocationResponse::from),
        ))
    }

    async fn to_responses(&self, reports: Vec<FishingReport>) -> ServiceResult<Vec<FishingReportResponse>> {
        try_join_all(reports.into_iter().map(|report| self.to_response(report))).await
    }

    async fn ensure_location(&self, location_id: i32) -> ServiceResult<()> {
        if !self.locations.exists(location_id).await? {
            return Err(ServiceError::rule("Location does not exist"));
        }
        Ok(())
    }

    pub async fn get(&self, account_id: Uuid, id: Uuid) -> ServiceResult<Option<FishingReportResponse>> {
        match owned(self.reports.get(id, Visibility::Live).await?, account_id) {
            Some(report) => Ok(Some(self.to_response(report).await?)),
            None => Ok(None),
        }
    }

    pub async fn page(
        &self,
        account_id: Uuid,
        request: &PageRequest,
    ) -> ServiceResult<Page<FishingReportResponse>> {
        let mut page = self.reports.page_by_owner(account_id, request).await?;
        let reports = std::mem::take(&mut page.data);
        Ok(page.with_data(self.to_responses(reports).await?))
    }

    pub async fn create(
        &self,
        account_id: Uuid,
        request: CreateFishingReportRequest,
    ) -> ServiceResult<FishingReportResponse> {
        if !self.accounts.exists(account_id).await? {
            return Err(ServiceError::rule("Account does not exist"));
        }
        let location_id = request
            .location_id
            .ok_or_else(|| ServiceError::rule("Location does not exist"))?;
        self.ensure_location(location_id).await?;

        let report = self.reports.add(request.into_report(account_id)).await?;
        self.to_response(report).await
    }

    /// Writes only the fields present in the request.
    pub async fn update(
        &self,
        account_id: Uuid,
        id: Uuid,
        request: UpdateFishingReportRequest,
    ) -> ServiceResult<Option<FishingReportResponse>> {
        let Some(mut report) = owned(self.reports.get(id, Visibility::Live).await?, account_id) else {
            return Ok(None);
        };
        if let Some(location_id) = request.location_id.as_set() {
            self.ensure_location(*location_id).await?;
        }

        request.apply_to(&mut report);
        match self.reports.update(report).await? {
            Some(report) => Ok(Some(self.to_response(report).await?)),
            None => Ok(None),
        }
    }

    pub async fn delete(&self, account_id: Uuid, id: Uuid) -> ServiceResult<bool> {
        if !self.reports.belongs_to_owner(id, account_id).await? {
            return Ok(false);
        }
        Ok(self.reports.soft_delete(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Patch;
    use crate::database::models::Account;
    use chrono::NaiveDate;

    async fn setup() -> (FishingReportService, Uuid) {
        let stores = Stores::in_memory();
        let account = stores
            .accounts
            .add(Account::new("alice@example.com".into(), "Alice".into(), "A".into()))
            .await
            .unwrap();
        (FishingReportService::new(&stores), account.id)
    }

    fn at(location_id: i32) -> CreateFishingReportRequest {
        CreateFishingReportRequest {
            location_id: Some(location_id),
            trip_date: NaiveDate::from_ymd_opt(2025, 6, 1),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_embeds_location() {
        let (service, alice) = setup().await;
        let report = service.create(alice, at(1)).await.unwrap();
        assert_eq!(report.location.unwrap().name, "Flamingo, Everglades National Park");
    }

    #[tokio::test]
    async fn test_create_rejects_unknown_location_and_account() {
        let (service, alice) = setup().await;
        let err = service.create(alice, at(42)).await.unwrap_err();
        assert_eq!(err.to_string(), "Location does not exist");

        let err = service.create(Uuid::new_v4(), at(1)).await.unwrap_err();
        assert_eq!(err.to_string(), "Account does not exist");
    }

    #[tokio::test]
    async fn test_partial_update_advances_updated_date() {
        let (service, alice) = setup().await;
        let mut request = at(3);
        request.wind_direction = Some("SW".to_string());
        let report = service.create(alice, request).await.unwrap();

        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        let update = UpdateFishingReportRequest {
            notes: Patch::Set("Tarpon rolling at dawn".to_string()),
            ..Default::default()
        };
        let updated = service.update(alice, report.id, update).await.unwrap().unwrap();

        assert_eq!(updated.notes.as_deref(), Some("Tarpon rolling at dawn"));
        assert_eq!(updated.wind_direction.as_deref(), Some("SW"));
        assert_eq!(updated.trip_date, report.trip_date);
        assert_eq!(updated.location_id, 3);
        assert_eq!(updated.created_date, report.created_date);
        assert!(updated.updated_date > report.updated_date);
    }

    #[tokio::test]
    async fn test_foreign_report_is_invisible() {
        let (service, alice) = setup().await;
        let report = service.create(alice, at(1)).await.unwrap();
        let mallory = Uuid::new_v4();

        assert!(service.get(mallory, report.id).await.unwrap().is_none());
        assert!(service
            .update(mallory, report.id, UpdateFishingReportRequest::default())
            .await
            .unwrap()
            .is_none());
        assert!(!service.delete(mallory, report.id).await.unwrap());
        assert_eq!(service.page(mallory, &PageRequest::default()).await.unwrap().count, 0);
    }
}
