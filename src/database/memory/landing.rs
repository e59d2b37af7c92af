use async_trait::async_trait;
use uuid::Uuid;

use super::Table;
use crate::database::models::Landing;
use crate::database::ordering::{landing_position, LANDINGS};
use crate::database::stores::{LandingStore, StoreResult, Visibility};
use crate::pagination::{Page, PageRequest};

#[derive(Default)]
pub struct MemoryLandingStore {
    table: Table<Landing>,
}

#[async_trait]
impl LandingStore for MemoryLandingStore {
    async fn get(&self, id: Uuid, visibility: Visibility) -> StoreResult<Option<Landing>> {
        Ok(self.table.get(id, visibility).await)
    }

    async fn list_by_report(&self, report_id: Uuid, account_id: Uuid) -> StoreResult<Vec<Landing>> {
        let mut landings = self
            .table
            .select(|l| l.fishing_report_id == report_id && l.account_id == account_id)
            .await;
        landings.sort_by(|a, b| LANDINGS.compare(&landing_position(a), &landing_position(b)));
        Ok(landings)
    }

    async fn page_by_report(
        &self,
        report_id: Uuid,
        account_id: Uuid,
        request: &PageRequest,
    ) -> StoreResult<Page<Landing>> {
        let rows = self
            .table
            .select(|l| l.fishing_report_id == report_id && l.account_id == account_id)
            .await;
        Ok(LANDINGS.paginate(rows, request, landing_position)?)
    }

    async fn add(&self, landing: Landing) -> StoreResult<Landing> {
        Ok(self.table.insert(landing).await)
    }

    async fn update(&self, landing: Landing) -> StoreResult<Option<Landing>> {
        Ok(self.table.replace(landing, |_| false).await.into_option())
    }

    async fn soft_delete(&self, id: Uuid) -> StoreResult<bool> {
        Ok(self.table.soft_delete(id).await)
    }

    async fn exists(&self, id: Uuid) -> StoreResult<bool> {
        Ok(self.table.any(|l| l.id == id).await)
    }

    async fn belongs_to_owner(&self, id: Uuid, account_id: Uuid) -> StoreResult<bool> {
        Ok(self
            .table
            .any(|l| l.id == id && l.account_id == account_id)
            .await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn test_shortest_catch_first_and_unmeasured_last() {
        let store = MemoryLandingStore::default();
        let owner = Uuid::new_v4();
        let report = Uuid::new_v4();

        for length in [Some(24), None, Some(20)] {
            let mut landing = Landing::new(owner, report, 1);
            landing.length_in_inches = length.map(Decimal::from);
            store.add(landing).await.unwrap();
        }
        // different report, same owner
        store.add(Landing::new(owner, Uuid::new_v4(), 1)).await.unwrap();

        let page = store
            .page_by_report(report, owner, &PageRequest::default())
            .await
            .unwrap();
        let lengths: Vec<_> = page.data.iter().map(|l| l.length_in_inches).collect();
        assert_eq!(
            lengths,
            vec![Some(Decimal::from(20)), Some(Decimal::from(24)), None]
        );
    }

    #[tokio::test]
    async fn test_other_accounts_see_nothing() {
        let store = MemoryLandingStore::default();
        let owner = Uuid::new_v4();
        let report = Uuid::new_v4();
        store.add(Landing::new(owner, report, 3)).await.unwrap();

        let page = store
            .page_by_report(report, Uuid::new_v4(), &PageRequest::default())
            .await
            .unwrap();
        assert_eq!(page.count, 0);
    }

    #[tokio::test]
    async fn test_list_matches_page_order_and_skips_deleted() {
        let store = MemoryLandingStore::default();
        let owner = Uuid::new_v4();
        let report = Uuid::new_v4();

        let mut added = Vec::new();
        for length in [None, Some(30), Some(12)] {
            let mut landing = Landing::new(owner, report, 2);
            landing.length_in_inches = length.map(Decimal::from);
            added.push(store.add(landing).await.unwrap());
        }
        store.add(Landing::new(Uuid::new_v4(), report, 2)).await.unwrap();
        store.soft_delete(added[1].id).await.unwrap();

        let listed = store.list_by_report(report, owner).await.unwrap();
        let ids: Vec<_> = listed.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![added[2].id, added[0].id]);

        let page = store
            .page_by_report(report, owner, &PageRequest::default())
            .await
            .unwrap();
        assert_eq!(page.data, listed);
    }
}
