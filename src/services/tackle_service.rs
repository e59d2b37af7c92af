use std::sync::Arc;

use uuid::Uuid;

use super::{owned, ServiceError, ServiceResult};
use crate::api::{TackleRequest, TackleResponse};
use crate::database::{AccountStore, Stores, TackleStore, Visibility};
use crate::pagination::{Page, PageRequest};

#[derive(Clone)]
pub struct TackleService {
    accounts: Arc<dyn AccountStore>,
    tackle: Arc<dyn TackleStore>,
}

impl TackleService {
    pub fn new(stores: &Stores) -> Self {
        Self {
            accounts: stores.accounts.clone(),
            tackle: stores.tackle.clone(),
        }
    }

    pub async fn get(&self, account_id: Uuid, id: Uuid) -> ServiceResult<Option<TackleResponse>> {
        let tackle = owned(self.tackle.get(id, Visibility::Live).await?, account_id);
        Ok(tackle.map(TackleResponse::from))
    }

    pub async fn page(&self, account_id: Uuid, request: &PageRequest) -> ServiceResult<Page<TackleResponse>> {
        let page = self.tackle.page_by_owner(account_id, request).await?;
        Ok(page.map(TackleResponse::from))
    }

    pub async fn create(&self, account_id: Uuid, request: TackleRequest) -> ServiceResult<TackleResponse> {
        if !self.accounts.exists(account_id).await? {
            return Err(ServiceError::rule("Account does not exist"));
        }
        let tackle = self.tackle.add(request.into_tackle(account_id)).await?;
        Ok(tackle.into())
    }

    /// Wholesale overwrite of type, name and description.
    pub async fn update(
        &self,
        account_id: Uuid,
        id: Uuid,
        request: TackleRequest,
    ) -> ServiceResult<Option<TackleResponse>> {
        let Some(mut tackle) = owned(self.tackle.get(id, Visibility::Live).await?, account_id) else {
            return Ok(None);
        };
        request.apply_to(&mut tackle);
        let updated = self.tackle.update(tackle).await?;
        Ok(updated.map(TackleResponse::from))
    }

    pub async fn delete(&self, account_id: Uuid, id: Uuid) -> ServiceResult<bool> {
        if !self.tackle.belongs_to_owner(id, account_id).await? {
            return Ok(false);
        }
        Ok(self.tackle.soft_delete(id).await?)
    }
}
