use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::{fetch_page, PgTable};
use crate::database::models::{utc_now, Tackle};
use crate::database::ordering::{tackle_position, TACKLE};
use crate::database::stores::{StoreResult, TackleStore, Visibility};
use crate::pagination::{Page, PageRequest};

pub struct PgTackleStore {
    table: PgTable,
}

impl PgTackleStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            table: PgTable::new("tackle", pool),
        }
    }
}

#[async_trait]
impl TackleStore for PgTackleStore {
    async fn get(&self, id: Uuid, visibility: Visibility) -> StoreResult<Option<Tackle>> {
        self.table.get(id, visibility).await
    }

    async fn list_by_owner(&self, account_id: Uuid) -> StoreResult<Vec<Tackle>> {
        let sql = format!(
            "{} AND account_id = $1 {}",
            self.table.select_live(),
            TACKLE.order_by()
        );
        let tackle = sqlx::query_as::<_, Tackle>(&sql)
            .bind(account_id)
            .fetch_all(self.table.pool())
            .await?;
        Ok(tackle)
    }

    async fn page_by_owner(&self, account_id: Uuid, request: &PageRequest) -> StoreResult<Page<Tackle>> {
        let base = format!("{} AND account_id = $1", self.table.select_live());
        fetch_page(self.table.pool(), &TACKLE, &base, &[account_id], request, tackle_position).await
    }

    async fn add(&self, tackle: Tackle) -> StoreResult<Tackle> {
        let tackle = sqlx::query_as::<_, Tackle>(
            "INSERT INTO tackle (id, account_id, tackle_type, name, description, created_date, updated_date) \
             VALUES ($1, $2, $3, $4, $5, $6, $6) RETURNING *",
        )
        .bind(tackle.id)
        .bind(tackle.account_id)
        .bind(tackle.tackle_type)
        .bind(&tackle.name)
        .bind(&tackle.description)
        .bind(utc_now())
        .fetch_one(self.table.pool())
        .await?;
        Ok(tackle)
    }

    async fn update(&self, tackle: Tackle) -> StoreResult<Option<Tackle>> {
        let tackle = sqlx::query_as::<_, Tackle>(
            "UPDATE tackle SET tackle_type = $2, name = $3, description = $4, updated_date = $5 \
             WHERE id = $1 AND deleted_date IS NULL RETURNING *",
        )
        .bind(tackle.id)
        .bind(tackle.tackle_type)
        .bind(&tackle.name)
        .bind(&tackle.description)
        .bind(utc_now())
        .fetch_optional(self.table.pool())
        .await?;
        Ok(tackle)
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
