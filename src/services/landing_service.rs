use std::sync::Arc;

use futures::future::try_join_all;
use uuid::Uuid;

use super::{owned, ServiceError, ServiceResult};
use crate::api::{FishSpeciesResponse, LandingRelations, LandingRequest, LandingResponse, TackleResponse};
use crate::database::models::Landing;
use crate::database::{
    AccountStore, FishSpeciesStore, FishingReportStore, LandingStore, Stores, TackleStore, Visibility,
};
use crate::pagination::{Page, PageRequest};

/// Landings are always addressed through their fishing report, and the
/// report must belong to the caller before anything else is looked at.
#[derive(Clone)]
pub struct LandingService {
    accounts: Arc<dyn AccountStore>,
    reports: Arc<dyn FishingReportStore>,
    species: Arc<dyn FishSpeciesStore>,
    tackle: Arc<dyn TackleStore>,
    landings: Arc<dyn LandingStore>,
}

impl LandingService {
    pub fn new(stores: &Stores) -> Self {
        Self {
            accounts: stores.accounts.clone(),
            reports: stores.reports.clone(),
            species: stores.species.clone(),
            tackle: stores.tackle.clone(),
            landings: stores.landings.clone(),
        }
    }

    async fn tackle_ref(&self, account_id: Uuid, id: Option<Uuid>) -> ServiceResult<Option<TackleResponse>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let tackle = owned(self.tackle.get(id, Visibility::Live).await?, account_id);
        Ok(tackle.map(TackleResponse::from))
    }

    async fn to_response(&self, landing: Landing) -> ServiceResult<LandingResponse> {
        let account_id = landing.account_id;
        let (fish_species, lure, rod, reel) = futures::try_join!(
            async {
                let species = self.species.get(landing.fish_species_id).await?;
                Ok::<_, ServiceError>(species.map(FishSpeciesResponse::from))
            },
            self.tackle_ref(account_id, landing.lure_used),
            self.tackle_ref(account_id, landing.rod_used),
            self.tackle_ref(account_id, landing.reel_used),
        )?;

        Ok(LandingResponse::new(
            landing,
            LandingRelations {
                fish_species,
                lure,
                rod,
                reel,
            },
        ))
    }

    /// The landing, if the caller owns it and it sits under `report_id`.
    async fn find(&self, account_id: Uuid, report_id: Uuid, id: Uuid) -> ServiceResult<Option<Landing>> {
        if !self.reports.belongs_to_owner(report_id, account_id).await? {
            return Ok(None);
        }
        let landing = owned(self.landings.get(id, Visibility::Live).await?, account_id);
        Ok(landing.filter(|l| l.fishing_report_id == report_id))
    }

    async fn check_references(&self, account_id: Uuid, request: &LandingRequest) -> ServiceResult<()> {
        let species_id = request
            .fish_species_id
            .ok_or_else(|| ServiceError::rule("Fish species does not exist"))?;
        if !self.species.exists(species_id).await? {
            return Err(ServiceError::rule("Fish species does not exist"));
        }
        for tackle_id in request.tackle_refs() {
            if !self.tackle.belongs_to_owner(tackle_id, account_id).await? {
                return Err(ServiceError::rule(format!(
                    "Tackle {} does not exist or does not belong to the account",
                    tackle_id
                )));
            }
        }
        Ok(())
    }

    pub async fn get(
        &self,
        account_id: Uuid,
        report_id: Uuid,
        id: Uuid,
    ) -> ServiceResult<Option<LandingResponse>> {
        match self.find(account_id, report_id, id).await? {
            Some(landing) => Ok(Some(self.to_response(landing).await?)),
            None => Ok(None),
        }
    }

    /// A report the caller does not own pages as empty.
    pub async fn page(
        &self,
        account_id: Uuid,
        report_id: Uuid,
        request: &PageRequest,
    ) -> ServiceResult<Page<LandingResponse>> {
        if !self.reports.belongs_to_owner(report_id, account_id).await? {
            return Ok(Page::empty(request.limit()));
        }
        let mut page = self
            .landings
            .page_by_report(report_id, account_id, request)
            .await?;
        let landings = std::mem::take(&mut page.data);
        let data = try_join_all(landings.into_iter().map(|l| self.to_response(l))).await?;
        Ok(page.with_data(data))
    }

    pub async fn create(
        &self,
        account_id: Uuid,
        report_id: Uuid,
        request: LandingRequest,
    ) -> ServiceResult<LandingResponse> {
        if !self.accounts.exists(account_id).await? {
            return Err(ServiceError::rule("Account does not exist"));
        }
        if !self.reports.belongs_to_owner(report_id, account_id).await? {
            return Err(ServiceError::rule(
                "Fishing report does not exist or does not belong to the account",
            ));
        }
        self.check_references(account_id, &request).await?;

        let landing = self
            .landings
            .add(request.into_landing(account_id, report_id))
            .await?;
        self.to_response(landing).await
    }

    /// Wholesale overwrite of the catch details.
    pub async fn update(
        &self,
        account_id: Uuid,
        report_id: Uuid,
        id: Uuid,
        request: LandingRequest,
    ) -> ServiceResult<Option<LandingResponse>> {
        let Some(mut landing) = self.find(account_id, report_id, id).await? else {
            return Ok(None);
        };
        self.check_references(account_id, &request).await?;

        request.apply_to(&mut landing);
        match self.landings.update(landing).await? {
            Some(landing) => Ok(Some(self.to_response(landing).await?)),
            None => Ok(None),
        }
    }

    pub async fn delete(&self, account_id: Uuid, report_id: Uuid, id: Uuid) -> ServiceResult<bool> {
        if self.find(account_id, report_id, id).await?.is_none() {
            return Ok(false);
        }
        Ok(self.landings.soft_delete(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::{Account, FishingReport, Tackle, TackleType};
    use rust_decimal::Decimal;

    struct Fixture {
        service: LandingService,
        stores: Stores,
        alice: Uuid,
        bob: Uuid,
        report: Uuid,
    }

    async fn fixture() -> Fixture {
        let stores = Stores::in_memory();
        let alice = stores
            .accounts
            .add(Account::new("alice@example.com".into(), "Alice".into(), "A".into()))
            .await
            .unwrap()
            .id;
        let bob = stores
            .accounts
            .add(Account::new("bob@example.com".into(), "Bob".into(), "B".into()))
            .await
            .unwrap()
            .id;
        let report = stores.reports.add(FishingReport::new(alice, 1)).await.unwrap().id;
        Fixture {
            service: LandingService::new(&stores),
            stores,
            alice,
            bob,
            report,
        }
    }

    fn catch(species: i32, length: i64) -> LandingRequest {
        LandingRequest {
            fish_species_id: Some(species),
            length_in_inches: Some(Decimal::from(length)),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_against_foreign_report_is_business_error() {
        let f = fixture().await;
        let err = f.service.create(f.bob, f.report, catch(1, 20)).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Fishing report does not exist or does not belong to the account"
        );
    }

    #[tokio::test]
    async fn test_create_checks_species() {
        let f = fixture().await;
        let err = f.service.create(f.alice, f.report, catch(99, 20)).await.unwrap_err();
        assert_eq!(err.to_string(), "Fish species does not exist");
    }

    #[tokio::test]
    async fn test_foreign_tackle_cannot_be_referenced() {
        let f = fixture().await;
        let bobs_rod = f
            .stores
            .tackle
            .add(Tackle::new(f.bob, TackleType::Rod, "Bob's rod".into(), String::new()))
            .await
            .unwrap();

        let mut request = catch(1, 20);
        request.rod_used = Some(bobs_rod.id);
        let err = f.service.create(f.alice, f.report, request).await.unwrap_err();
        assert!(matches!(err, ServiceError::BusinessRule(_)));
    }

    #[tokio::test]
    async fn test_nested_relations_are_filled() {
        let f = fixture().await;
        let lure = f
            .stores
            .tackle
            .add(Tackle::new(f.alice, TackleType::Lure, "Gold spoon".into(), String::new()))
            .await
            .unwrap();

        let mut request = catch(3, 26);
        request.lure_used = Some(lure.id);
        let landing = f.service.create(f.alice, f.report, request).await.unwrap();

        assert_eq!(landing.fish_species.unwrap().name, "Redfish (Red Drum)");
        assert_eq!(landing.lure.unwrap().name, "Gold spoon");
        assert!(landing.rod.is_none());
        assert!(landing.released);
    }

    #[tokio::test]
    async fn test_foreign_report_lists_empty_and_hides_landings() {
        let f = fixture().await;
        let landing = f.service.create(f.alice, f.report, catch(1, 20)).await.unwrap();

        let page = f.service.page(f.bob, f.report, &PageRequest::default()).await.unwrap();
        assert_eq!(page.count, 0);
        assert!(!page.has_more);
        assert!(f.service.get(f.bob, f.report, landing.id).await.unwrap().is_none());
        assert!(!f.service.delete(f.bob, f.report, landing.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_landing_addressed_through_wrong_report() {
        let f = fixture().await;
        let other_report = f.stores.reports.add(FishingReport::new(f.alice, 2)).await.unwrap().id;
        let landing = f.service.create(f.alice, f.report, catch(1, 20)).await.unwrap();

        assert!(f.service.get(f.alice, other_report, landing.id).await.unwrap().is_none());
        assert!(f.service.get(f.alice, f.report, landing.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_update_overwrites_and_delete_hides() {
        let f = fixture().await;
        let mut request = catch(1, 20);
        request.released = Some(false);
        let landing = f.service.create(f.alice, f.report, request).await.unwrap();
        assert!(!landing.released);

        let updated = f
            .service
            .update(f.alice, f.report, landing.id, catch(2, 40))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.fish_species_id, 2);
        assert!(updated.released);

        assert!(f.service.delete(f.alice, f.report, landing.id).await.unwrap());
        let page = f.service.page(f.alice, f.report, &PageRequest::default()).await.unwrap();
        assert_eq!(page.count, 0);
    }
}
