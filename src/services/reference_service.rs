use std::sync::Arc;

use crate::api::{FishSpeciesResponse, LocationResponse};
use crate::database::{FishSpeciesStore, LocationStore, Stores};
use crate::pagination::{Page, PageRequest};

use super::ServiceResult;

/// Read-only access to locations and fish species.
#[derive(Clone)]
pub struct ReferenceService {
    locations: Arc<dyn LocationStore>,
    species: Arc<dyn FishSpeciesStore>,
}

impl ReferenceService {
    pub fn new(stores: &Stores) -> Self {
        Self {
            locations: stores.locations.clone(),
            species: stores.species.clone(),
        }
    }

    pub async fn location(&self, id: i32) -> ServiceResult<Option<LocationResponse>> {
        Ok(self.locations.get(id).await?.map(LocationResponse::from))
    }

    pub async fn locations(&self, request: &PageRequest) -> ServiceResult<Page<LocationResponse>> {
        Ok(self.locations.page(request).await?.map(LocationResponse::from))
    }

    pub async fn species(&self, id: i32) -> ServiceResult<Option<FishSpeciesResponse>> {
        Ok(self.species.get(id).await?.map(FishSpeciesResponse::from))
    }

    pub async fn species_page(&self, request: &PageRequest) -> ServiceResult<Page<FishSpeciesResponse>> {
        Ok(self.species.page(request).await?.map(FishSpeciesResponse::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reference_lookups() {
        let service = ReferenceService::new(&Stores::in_memory());
        assert_eq!(service.locations(&PageRequest::first(100)).await.unwrap().count, 4);
        assert_eq!(service.species_page(&PageRequest::first(100)).await.unwrap().count, 20);
        assert_eq!(service.species(2).await.unwrap().unwrap().name, "Tarpon");
        assert!(service.location(0).await.unwrap().is_none());

        let page = service.species_page(&PageRequest::first(5)).await.unwrap();
        assert_eq!(page.count, 5);
        assert!(page.has_more);
    }
}
