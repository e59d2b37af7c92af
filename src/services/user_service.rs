use std::sync::Arc;

use uuid::Uuid;

use super::{owned, ServiceError, ServiceResult};
use crate::api::{UserRequest, UserResponse};
use crate::database::{AccountStore, Stores, UserStore, Visibility};

#[derive(Clone)]
pub struct UserService {
    accounts: Arc<dyn AccountStore>,
    users: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(stores: &Stores) -> Self {
        Self {
            accounts: stores.accounts.clone(),
            users: stores.users.clone(),
        }
    }

    pub async fn get(&self, account_id: Uuid, id: Uuid) -> ServiceResult<Option<UserResponse>> {
        let user = owned(self.users.get(id, Visibility::Live).await?, account_id);
        Ok(user.map(UserResponse::from))
    }

    pub async fn list(&self, account_id: Uuid) -> ServiceResult<Vec<UserResponse>> {
        let users = self.users.list_by_owner(account_id).await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    pub async fn create(&self, account_id: Uuid, request: UserRequest) -> ServiceResult<UserResponse> {
        if !self.accounts.exists(account_id).await? {
            return Err(ServiceError::rule("Account does not exist"));
        }
        let user = self.users.add(request.into_user(account_id)).await?;
        Ok(user.into())
    }

    pub async fn update(
        &self,
        account_id: Uuid,
        id: Uuid,
        request: UserRequest,
    ) -> ServiceResult<Option<UserResponse>> {
        let Some(mut user) = owned(self.users.get(id, Visibility::Live).await?, account_id) else {
            return Ok(None);
        };
        request.apply_to(&mut user);
        let updated = self.users.update(user).await?;
        Ok(updated.map(UserResponse::from))
    }

    /// Also flips the user's status to `Deleted`.
    pub async fn delete(&self, account_id: Uuid, id: Uuid) -> ServiceResult<bool> {
        if !self.users.belongs_to_owner(id, account_id).await? {
            return Ok(false);
        }
        Ok(self.users.soft_delete(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::{Account, UserStatus};

    fn request() -> UserRequest {
        UserRequest {
            first_name: "Ana".into(),
            last_name: "Reyes".into(),
            email: "ana@example.com".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_requires_account() {
        let service = UserService::new(&Stores::in_memory());
        let err = service.create(Uuid::new_v4(), request()).await.unwrap_err();
        assert_eq!(err.to_string(), "Account does not exist");
    }

    #[tokio::test]
    async fn test_soft_delete_marks_status() {
        let stores = Stores::in_memory();
        let account = stores
            .accounts
            .add(Account::new("a@example.com".into(), "A".into(), "B".into()))
            .await
            .unwrap();
        let service = UserService::new(&stores);
        let user = service.create(account.id, request()).await.unwrap();

        assert!(!service.delete(Uuid::new_v4(), user.id).await.unwrap());
        assert!(service.delete(account.id, user.id).await.unwrap());
        assert!(service.get(account.id, user.id).await.unwrap().is_none());

        let hidden = stores.users.get(user.id, Visibility::IncludeDeleted).await.unwrap().unwrap();
        assert_eq!(hidden.status, UserStatus::Deleted);
    }
}
