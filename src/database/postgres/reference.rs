use async_trait::async_trait;
use sqlx::PgPool;

use super::fetch_page;
use crate::database::models::{FishSpecies, Location};
use crate::database::ordering::{location_position, species_position, LOCATIONS, SPECIES};
use crate::database::stores::{FishSpeciesStore, LocationStore, StoreResult};
use crate::pagination::{Page, PageRequest};

pub struct PgLocationStore {
    pool: PgPool,
}

impl PgLocationStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LocationStore for PgLocationStore {
    async fn get(&self, id: i32) -> StoreResult<Option<Location>> {
        let location = sqlx::query_as::<_, Location>("SELECT * FROM locations WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(location)
    }

    async fn list(&self) -> StoreResult<Vec<Location>> {
        let sql = format!("SELECT * FROM locations {}", LOCATIONS.order_by());
        let locations = sqlx::query_as::<_, Location>(&sql).fetch_all(&self.pool).await?;
        Ok(locations)
    }

    async fn page(&self, request: &PageRequest) -> StoreResult<Page<Location>> {
        fetch_page(
            &self.pool,
            &LOCATIONS,
            "SELECT * FROM locations WHERE TRUE",
            &[],
            request,
            location_position,
        )
        .await
    }

    async fn exists(&self, id: i32) -> StoreResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM locations WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }
}

pub struct PgFishSpeciesStore {
    pool: PgPool,
}

impl PgFishSpeciesStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FishSpeciesStore for PgFishSpeciesStore {
    async fn get(&self, id: i32) -> StoreResult<Option<FishSpecies>> {
        let species = sqlx::query_as::<_, FishSpecies>("SELECT * FROM fish_species WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(species)
    }

    async fn list(&self) -> StoreResult<Vec<FishSpecies>> {
        let sql = format!("SELECT * FROM fish_species {}", SPECIES.order_by());
        let species = sqlx::query_as::<_, FishSpecies>(&sql).fetch_all(&self.pool).await?;
        Ok(species)
    }

    async fn page(&self, request: &PageRequest) -> StoreResult<Page<FishSpecies>> {
        fetch_page(
            &self.pool,
            &SPECIES,
            "SELECT * FROM fish_species WHERE TRUE",
            &[],
            request,
            species_position,
        )
        .await
    }

    async fn exists(&self, id: i32) -> StoreResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM fish_species WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }
}
