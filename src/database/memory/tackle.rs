use async_trait::async_trait;
use uuid::Uuid;

use super::Table;
use crate::database::models::Tackle;
use crate::database::ordering::{tackle_position, TACKLE};
use crate::database::stores::{StoreResult, TackleStore, Visibility};
use crate::pagination::{Page, PageRequest};

#[derive(Default)]
pub struct MemoryTackleStore {
    table: Table<Tackle>,
}

#[async_trait]
impl TackleStore for MemoryTackleStore {
    async fn get(&self, id: Uuid, visibility: Visibility) -> StoreResult<Option<Tackle>> {
        Ok(self.table.get(id, visibility).await)
    }

    async fn list_by_owner(&self, account_id: Uuid) -> StoreResult<Vec<Tackle>> {
        let mut tackle = self.table.select(|t| t.account_id == account_id).await;
        tackle.sort_by(|a, b| TACKLE.compare(&tackle_position(a), &tackle_position(b)));
        Ok(tackle)
    }

    async fn page_by_owner(&self, account_id: Uuid, request: &PageRequest) -> StoreResult<Page<Tackle>> {
        let rows = self.table.select(|t| t.account_id == account_id).await;
        Ok(TACKLE.paginate(rows, request, tackle_position)?)
    }

    async fn add(&self, tackle: Tackle) -> StoreResult<Tackle> {
        Ok(self.table.insert(tackle).await)
    }

    async fn update(&self, tackle: Tackle) -> StoreResult<Option<Tackle>> {
        Ok(self.table.replace(tackle, |_| false).await.into_option())
    }

    async fn soft_delete(&self, id: Uuid) -> StoreResult<bool> {
        Ok(self.table.soft_delete(id).await)
    }

    async fn exists(&self, id: Uuid) -> StoreResult<bool> {
        Ok(self.table.any(|t| t.id == id).await)
    }

    async fn belongs_to_owner(&self, id: Uuid, account_id: Uuid) -> StoreResult<bool> {
        Ok(self
            .table
            .any(|t| t.id == id && t.account_id == account_id)
            .await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::TackleType;

    #[tokio::test]
    async fn test_page_is_scoped_and_sorted_by_name() {
        let store = MemoryTackleStore::default();
        let mine = Uuid::new_v4();
        let theirs = Uuid::new_v4();

        for name in ["Spinning reel", "Bucktail jig", "Medium rod"] {
            store
                .add(Tackle::new(mine, TackleType::Other, name.to_string(), String::new()))
                .await
                .unwrap();
        }
        store
            .add(Tackle::new(theirs, TackleType::Rod, "Another rod".to_string(), String::new()))
            .await
            .unwrap();

        let page = store.page_by_owner(mine, &PageRequest::first(2)).await.unwrap();
        let names: Vec<_> = page.data.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Bucktail jig", "Medium rod"]);
        assert!(page.has_more);

        let next = PageRequest::after(2, page.next_cursor.unwrap());
        let page = store.page_by_owner(mine, &next).await.unwrap();
        assert_eq!(page.data[0].name, "Spinning reel");
        assert!(!page.has_more);
    }

    #[tokio::test]
    async fn test_ownership_ignores_deleted_rows() {
        let store = MemoryTackleStore::default();
        let owner = Uuid::new_v4();
        let rod = store
            .add(Tackle::new(owner, TackleType::Rod, "Rod".to_string(), String::new()))
            .await
            .unwrap();

        assert!(store.belongs_to_owner(rod.id, owner).await.unwrap());
        assert!(!store.belongs_to_owner(rod.id, Uuid::new_v4()).await.unwrap());

        store.soft_delete(rod.id).await.unwrap();
        assert!(!store.belongs_to_owner(rod.id, owner).await.unwrap());
    }

    #[tokio::test]
    async fn test_list_by_owner_sorted_by_name() {
        let store = MemoryTackleStore::default();
        let owner = Uuid::new_v4();
        for name in ["Popper", "Baitcaster", "Jig"] {
            store
                .add(Tackle::new(owner, TackleType::Lure, name.to_string(), String::new()))
                .await
                .unwrap();
        }
        store
            .add(Tackle::new(Uuid::new_v4(), TackleType::Lure, "Alien".to_string(), String::new()))
            .await
            .unwrap();

        let names: Vec<_> = store
            .list_by_owner(owner)
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["Baitcaster", "Jig", "Popper"]);
    }
}
