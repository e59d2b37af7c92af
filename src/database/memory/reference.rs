use async_trait::async_trait;

use crate::database::models::{FishSpecies, Location};
use crate::database::ordering::{location_position, species_position, LOCATIONS, SPECIES};
use crate::database::seed;
use crate::database::stores::{FishSpeciesStore, LocationStore, StoreResult};
use crate::pagination::{Page, PageRequest};

/// Read-only locations fixed at construction.
pub struct MemoryLocationStore {
    rows: Vec<Location>,
}

impl MemoryLocationStore {
    pub fn seeded() -> Self {
        let mut rows = seed::locations();
        rows.sort_by(|a, b| LOCATIONS.compare(&location_position(a), &location_position(b)));
        Self { rows }
    }
}

#[async_trait]
impl LocationStore for MemoryLocationStore {
    async fn get(&self, id: i32) -> StoreResult<Option<Location>> {
        Ok(self.rows.iter().find(|l| l.id == id).cloned())
    }

    async fn list(&self) -> StoreResult<Vec<Location>> {
        Ok(self.rows.clone())
    }

    async fn page(&self, request: &PageRequest) -> StoreResult<Page<Location>> {
        Ok(LOCATIONS.paginate(self.rows.clone(), request, location_position)?)
    }

    async fn exists(&self, id: i32) -> StoreResult<bool> {
        Ok(self.rows.iter().any(|l| l.id == id))
    }
}

/// Read-only species fixed at construction.
pub struct MemoryFishSpeciesStore {
    rows: Vec<FishSpecies>,
}

impl MemoryFishSpeciesStore {
    pub fn seeded() -> Self {
        let mut rows = seed::fish_species();
        rows.sort_by(|a, b| SPECIES.compare(&species_position(a), &species_position(b)));
        Self { rows }
    }
}

#[async_trait]
impl FishSpeciesStore for MemoryFishSpeciesStore {
    async fn get(&self, id: i32) -> StoreResult<Option<FishSpecies>> {
        Ok(self.rows.iter().find(|s| s.id == id).cloned())
    }

    async fn list(&self) -> StoreResult<Vec<FishSpecies>> {
        Ok(self.rows.clone())
    }

    async fn page(&self, request: &PageRequest) -> StoreResult<Page<FishSpecies>> {
        Ok(SPECIES.paginate(self.rows.clone(), request, species_position)?)
    }

    async fn exists(&self, id: i32) -> StoreResult<bool> {
        Ok(self.rows.iter().any(|s| s.id == id))
    }
}
