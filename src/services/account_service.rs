use std::sync::Arc;

use uuid::Uuid;

use super::ServiceResult;
use crate::api::{AccountRequest, AccountResponse};
use crate::database::{AccountStore, Stores, Visibility};

#[derive(Clone)]
pub struct AccountService {
    accounts: Arc<dyn AccountStore>,
}

impl AccountService {
    pub fn new(stores: &Stores) -> Self {
        Self {
            accounts: stores.accounts.clone(),
        }
    }

    pub async fn get(&self, id: Uuid) -> ServiceResult<Option<AccountResponse>> {
        let account = self.accounts.get(id, Visibility::Live).await?;
        Ok(account.map(AccountResponse::from))
    }

    pub async fn list(&self) -> ServiceResult<Vec<AccountResponse>> {
        let accounts = self.accounts.list().await?;
        Ok(accounts.into_iter().map(AccountResponse::from).collect())
    }

    /// Email uniqueness is left to the store, which reports a conflict.
    pub async fn create(&self, request: AccountRequest) -> ServiceResult<AccountResponse> {
        let account = self.accounts.add(request.into_account()).await?;
        tracing::info!("Created account {}", account.id);
        Ok(account.into())
    }

    pub async fn update(&self, id: Uuid, request: AccountRequest) -> ServiceResult<Option<AccountResponse>> {
        let Some(mut account) = self.accounts.get(id, Visibility::Live).await? else {
            return Ok(None);
        };
        request.apply_to(&mut account);
        let updated = self.accounts.update(account).await?;
        Ok(updated.map(AccountResponse::from))
    }

    pub async fn delete(&self, id: Uuid) -> ServiceResult<bool> {
        let deleted = self.accounts.soft_delete(id).await?;
        if deleted {
            tracing::info!("Deleted account {}", id);
        }
        Ok(deleted)
    }

    pub async fn exists(&self, id: Uuid) -> ServiceResult<bool> {
        Ok(self.accounts.exists(id).await?)
    }
}
