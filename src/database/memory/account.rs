use async_trait::async_trait;
use uuid::Uuid;

use super::{Replace, Table};
use crate::database::manager::DatabaseError;
use crate::database::models::Account;
use crate::database::stores::{AccountStore, StoreResult, Visibility};

#[derive(Default)]
pub struct MemoryAccountStore {
    table: Table<Account>,
}

fn email_taken(email: &str) -> DatabaseError {
    DatabaseError::Conflict(format!("An account with email '{}' already exists", email))
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn get(&self, id: Uuid, visibility: Visibility) -> StoreResult<Option<Account>> {
        Ok(self.table.get(id, visibility).await)
    }

    async fn list(&self) -> StoreResult<Vec<Account>> {
        let mut accounts = self.table.select(|_| true).await;
        accounts.sort_by(|a, b| a.created_date.cmp(&b.created_date).then(a.id.cmp(&b.id)));
        Ok(accounts)
    }

    async fn add(&self, account: Account) -> StoreResult<Account> {
        let email = account.email.to_lowercase();
        self.table
            .insert_unless(account, |existing| existing.email.to_lowercase() == email)
            .await
            .map_err(|rejected| email_taken(&rejected.email))
    }

    async fn update(&self, account: Account) -> StoreResult<Option<Account>> {
        let email = account.email.clone();
        let lowered = email.to_lowercase();
        match self
            .table
            .replace(account, |existing| existing.email.to_lowercase() == lowered)
            .await
        {
            Replace::Done(account) => Ok(Some(account)),
            Replace::Missing => Ok(None),
            Replace::Clash => Err(email_taken(&email)),
        }
    }

    async fn soft_delete(&self, id: Uuid) -> StoreResult<bool> {
        Ok(self.table.soft_delete(id).await)
    }

    async fn exists(&self, id: Uuid) -> StoreResult<bool> {
        Ok(self.table.any(|account| account.id == id).await)
    }
}
