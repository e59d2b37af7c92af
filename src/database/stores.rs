use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::manager::{DatabaseError, DatabaseManager};
use super::memory;
use super::models::{Account, FishSpecies, FishingReport, Landing, Location, Tackle, User};
use super::postgres;
use crate::pagination::{Page, PageRequest};

/// Whether a read honours the soft-delete filter. `IncludeDeleted` is passed
/// per call; there is no store-wide switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Live,
    IncludeDeleted,
}

impl Visibility {
    pub fn admits(&self, deleted_at: Option<DateTime<Utc>>) -> bool {
        match self {
            Visibility::Live => deleted_at.is_none(),
            Visibility::IncludeDeleted => true,
        }
    }
}

pub type StoreResult<T> = Result<T, DatabaseError>;

#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn get(&self, id: Uuid, visibility: Visibility) -> StoreResult<Option<Account>>;
    async fn list(&self) -> StoreResult<Vec<Account>>;
    async fn add(&self, account: Account) -> StoreResult<Account>;
    /// Returns `None` when the row is missing or soft-deleted.
    async fn update(&self, account: Account) -> StoreResult<Option<Account>>;
    /// Returns `false` when the row is missing or already deleted.
    async fn soft_delete(&self, id: Uuid) -> StoreResult<bool>;
    async fn exists(&self, id: Uuid) -> StoreResult<bool>;
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn get(&self, id: Uuid, visibility: Visibility) -> StoreResult<Option<User>>;
    async fn list_by_owner(&self, account_id: Uuid) -> StoreResult<Vec<User>>;
    async fn add(&self, user: User) -> StoreResult<User>;
    async fn update(&self, user: User) -> StoreResult<Option<User>>;
    async fn soft_delete(&self, id: Uuid) -> StoreResult<bool>;
    async fn exists(&self, id: Uuid) -> StoreResult<bool>;
    async fn belongs_to_owner(&self, id: Uuid, account_id: Uuid) -> StoreResult<bool>;
}

#[async_trait]
pub trait TackleStore: Send + Sync {
    async fn get(&self, id: Uuid, visibility: Visibility) -> StoreResult<Option<Tackle>>;
    async fn list_by_owner(&self, account_id: Uuid) -> StoreResult<Vec<Tackle>>;
    async fn page_by_owner(&self, account_id: Uuid, request: &PageRequest) -> StoreResult<Page<Tackle>>;
    async fn add(&self, tackle: Tackle) -> StoreResult<Tackle>;
    async fn update(&self, tackle: Tackle) -> StoreResult<Option<Tackle>>;
    async fn soft_delete(&self, id: Uuid) -> StoreResult<bool>;
    async fn exists(&self, id: Uuid) -> StoreResult<bool>;
    async fn belongs_to_owner(&self, id: Uuid, account_id: Uuid) -> StoreResult<bool>;
}

#[async_trait]
pub trait LocationStore: Send + Sync {
    async fn get(&self, id: i32) -> StoreResult<Option<Location>>;
    async fn list(&self) -> StoreResult<Vec<Location>>;
    async fn page(&self, request: &PageRequest) -> StoreResult<Page<Location>>;
    async fn exists(&self, id: i32) -> StoreResult<bool>;
}

#[async_trait]
pub trait FishSpeciesStore: Send + Sync {
    async fn get(&self, id: i32) -> StoreResult<Option<FishSpecies>>;
    async fn list(&self) -> StoreResult<Vec<FishSpecies>>;
    async fn page(&self, request: &PageRequest) -> StoreResult<Page<FishSpecies>>;
    async fn exists(&self, id: i32) -> StoreResult<bool>;
}

#[async_trait]
pub trait FishingReportStore: Send + Sync {
    async fn get(&self, id: Uuid, visibility: Visibility) -> StoreResult<Option<FishingReport>>;
    async fn list_by_owner(&self, account_id: Uuid) -> StoreResult<Vec<FishingReport>>;
    async fn page_by_owner(
        &self,
        account_id: Uuid,
        request: &PageRequest,
    ) -> StoreResult<Page<FishingReport>>;
    async fn add(&self, report: FishingReport) -> StoreResult<FishingReport>;
    async fn update(&self, report: FishingReport) -> StoreResult<Option<FishingReport>>;
    async fn soft_delete(&self, id: Uuid) -> StoreResult<bool>;
    async fn exists(&self, id: Uuid) -> StoreResult<bool>;
    async fn belongs_to_owner(&self, id: Uuid, account_id: Uuid) -> StoreResult<bool>;
}

/// Landings are listed per fishing report, always scoped to the owning account.
#[async_trait]
pub trait LandingStore: Send + Sync {
    async fn get(&self, id: Uuid, visibility: Visibility) -> StoreResult<Option<Landing>>;
    async fn list_by_report(&self, report_id: Uuid, account_id: Uuid) -> StoreResult<Vec<Landing>>;
    async fn page_by_report(
        &self,
        report_id: Uuid,
        account_id: Uuid,
        request: &PageRequest,
    ) -> StoreResult<Page<Landing>>;
    async fn add(&self, landing: Landing) -> StoreResult<Landing>;
    async fn update(&self, landing: Landing) -> StoreResult<Option<Landing>>;
    async fn soft_delete(&self, id: Uuid) -> StoreResult<bool>;
    async fn exists(&self, id: Uuid) -> StoreResult<bool>;
    async fn belongs_to_owner(&self, id: Uuid, account_id: Uuid) -> StoreResult<bool>;
}

#[derive(Clone)]
enum Backend {
    Memory,
    Postgres(PgPool),
}

/// The full set of stores, assembled once at startup.
#[derive(Clone)]
pub struct Stores {
    pub accounts: Arc<dyn AccountStore>,
    pub users: Arc<dyn UserStore>,
    pub tackle: Arc<dyn TackleStore>,
    pub locations: Arc<dyn LocationStore>,
    pub species: Arc<dyn FishSpeciesStore>,
    pub reports: Arc<dyn FishingReportStore>,
    pub landings: Arc<dyn LandingStore>,
    backend: Backend,
}

impl Stores {
    /// Process-local stores preloaded with reference data.
    pub fn in_memory() -> Self {
        Self {
            accounts: Arc::new(memory::MemoryAccountStore::default()),
            users: Arc::new(memory::MemoryUserStore::default()),
            tackle: Arc::new(memory::MemoryTackleStore::default()),
            locations: Arc::new(memory::MemoryLocationStore::seeded()),
            species: Arc::new(memory::MemoryFishSpeciesStore::seeded()),
            reports: Arc::new(memory::MemoryFishingReportStore::default()),
            landings: Arc::new(memory::MemoryLandingStore::default()),
            backend: Backend::Memory,
        }
    }

    pub fn postgres(pool: PgPool) -> Self {
        Self {
            accounts: Arc::new(postgres::PgAccountStore::new(pool.clone())),
            users: Arc::new(postgres::PgUserStore::new(pool.clone())),
            tackle: Arc::new(postgres::PgTackleStore::new(pool.clone())),
            locations: Arc::new(postgres::PgLocationStore::new(pool.clone())),
            species: Arc::new(postgres::PgFishSpeciesStore::new(pool.clone())),
            reports: Arc::new(postgres::PgFishingReportStore::new(pool.clone())),
            landings: Arc::new(postgres::PgLandingStore::new(pool.clone())),
            backend: Backend::Postgres(pool),
        }
    }

    pub fn backend_name(&self) -> &'static str {
        match self.backend {
            Backend::Memory => "memory",
            Backend::Postgres(_) => "postgres",
        }
    }

    pub async fn health_check(&self) -> StoreResult<()> {
        match &self.backend {
            Backend::Memory => Ok(()),
            Backend::Postgres(pool) => DatabaseManager::health_check(pool).await,
        }
    }
}
