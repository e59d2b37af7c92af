use async_trait::async_trait;
use uuid::Uuid;

use super::Table;
use crate::database::models::User;
use crate::database::stores::{StoreResult, UserStore, Visibility};

#[derive(Default)]
pub struct MemoryUserStore {
    table: Table<User>,
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn get(&self, id: Uuid, visibility: Visibility) -> StoreResult<Option<User>> {
        Ok(self.table.get(id, visibility).await)
    }

    async fn list_by_owner(&self, account_id: Uuid) -> StoreResult<Vec<User>> {
        let mut users = self.table.select(|user| user.account_id == account_id).await;
        users.sort_by_key(|user| (user.created_at, user.id));
        Ok(users)
    }

    async fn add(&self, user: User) -> StoreResult<User> {
        Ok(self.table.insert(user).await)
    }

    async fn update(&self, user: User) -> StoreResult<Option<User>> {
        Ok(self.table.replace(user, |_| false).await.into_option())
    }

    async fn soft_delete(&self, id: Uuid) -> StoreResult<bool> {
        Ok(self.table.soft_delete(id).await)
    }

    async fn exists(&self, id: Uuid) -> StoreResult<bool> {
        Ok(self.table.any(|user| user.id == id).await)
    }

    async fn belongs_to_owner(&self, id: Uuid, account_id: Uuid) -> StoreResult<bool> {
        Ok(self
            .table
            .any(|user| user.id == id && user.account_id == account_id)
            .await)
    }
}
