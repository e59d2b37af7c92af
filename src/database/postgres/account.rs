use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::PgTable;
use crate::database::manager::DatabaseError;
use crate::database::models::{utc_now, Account};
use crate::database::stores::{AccountStore, StoreResult, Visibility};

const DUPLICATE_EMAIL: &str = "An account with this email already exists";

pub struct PgAccountStore {
    table: PgTable,
}

impl PgAccountStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            table: PgTable::new("accounts", pool),
        }
    }
}

#[async_trait]
impl AccountStore for PgAccountStore {
    async fn get(&self, id: Uuid, visibility: Visibility) -> StoreResult<Option<Account>> {
        self.table.get(id, visibility).await
    }

    async fn list(&self) -> StoreResult<Vec<Account>> {
        let sql = format!("{} ORDER BY created_date, id", self.table.select_live());
        let accounts = sqlx::query_as::<_, Account>(&sql)
            .fetch_all(self.table.pool())
            .await?;
        Ok(accounts)
    }

    async fn add(&self, account: Account) -> StoreResult<Account> {
        let now = utc_now();
        sqlx::query_as::<_, Account>(
            "INSERT INTO accounts (id, email, first_name, last_name, created_date, updated_date) \
             VALUES ($1, $2, $3, $4, $5, $5) RETURNING *",
        )
        .bind(account.id)
        .bind(&account.email)
        .bind(&account.first_name)
        .bind(&account.last_name)
        .bind(now)
        .fetch_one(self.table.pool())
        .await
        .map_err(|e| DatabaseError::from_unique(e, DUPLICATE_EMAIL))
    }

    async fn update(&self, account: Account) -> StoreResult<Option<Account>> {
        sqlx::query_as::<_, Account>(
            "UPDATE accounts SET email = $2, first_name = $3, last_name = $4, updated_date = $5 \
             WHERE id = $1 AND deleted_date IS NULL RETURNING *",
        )
        .bind(account.id)
        .bind(&account.email)
        .bind(&account.first_name)
        .bind(&account.last_name)
        .bind(utc_now())
        .fetch_optional(self.table.pool())
        .await
        .map_err(|e| DatabaseError::from_unique(e, DUPLICATE_EMAIL))
    }

    async fn soft_delete(&self, id: Uuid) -> StoreResult<bool> {
        self.table.soft_delete(id, None).await
    }

    async fn exists(&self, id: Uuid) -> StoreResult<bool> {
        self.table.exists(id).await
    }
}
