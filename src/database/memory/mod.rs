//! Process-local stores with the same visibility, ownership and ordering
//! semantics as the Postgres adapters.

mod account;
mod fishing_report;
mod landing;
mod reference;
mod tackle;
mod user;

use std::collections::HashMap;

use tokio::sync::RwLock;
use uuid::Uuid;

use super::models::{utc_now, Account, FishingReport, Landing, SoftDeletable, Tackle, Timestamped, User};
use super::stores::Visibility;

pub use account::MemoryAccountStore;
pub use fishing_report::MemoryFishingReportStore;
pub use landing::MemoryLandingStore;
pub use reference::{MemoryFishSpeciesStore, MemoryLocationStore};
pub use tackle::MemoryTackleStore;
pub use user::MemoryUserStore;

pub(crate) trait Row: Clone + SoftDeletable + Timestamped + Send + Sync {
    fn row_id(&self) -> Uuid;
}

macro_rules! row_by_id {
    ($($name:ty),+) => {
        $(impl Row for $name {
            fn row_id(&self) -> Uuid {
                self.id
            }
        })+
    };
}

row_by_id!(Account, User, Tackle, FishingReport, Landing);

pub(crate) enum Replace<V> {
    Done(V),
    Missing,
    Clash,
}

/// A soft-delete aware table keyed by row id.
pub(crate) struct Table<V> {
    rows: RwLock<HashMap<Uuid, V>>,
}

impl<V> Default for Table<V> {
    fn default() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
        }
    }
}

impl<V: Row> Table<V> {
    pub async fn get(&self, id: Uuid, visibility: Visibility) -> Option<V> {
        let rows = self.rows.read().await;
        rows.get(&id)
            .filter(|row| visibility.admits(row.deleted_at()))
            .cloned()
    }

    /// Live rows matching `filter`, in no particular order.
    pub async fn select(&self, filter: impl Fn(&V) -> bool) -> Vec<V> {
        let rows = self.rows.read().await;
        rows.values()
            .filter(|row| !row.is_deleted() && filter(row))
            .cloned()
            .collect()
    }

    pub async fn any(&self, filter: impl Fn(&V) -> bool) -> bool {
        let rows = self.rows.read().await;
        rows.values().any(|row| !row.is_deleted() && filter(row))
    }

    pub async fn insert(&self, row: V) -> V {
        match self.insert_unless(row, |_| false).await {
            Ok(row) | Err(row) => row,
        }
    }

    /// Insert unless any existing row, deleted or not, clashes with the new one.
    /// A clash hands the row back unchanged as `Err`.
    pub async fn insert_unless(&self, mut row: V, clash: impl Fn(&V) -> bool) -> Result<V, V> {
        let mut rows = self.rows.write().await;
        if rows.values().any(|existing| clash(existing)) {
            return Err(row);
        }
        row.stamp_created(utc_now());
        rows.insert(row.row_id(), row.clone());
        Ok(row)
    }

    /// Overwrite a live row, keeping its creation time and refreshing its modification time.
    pub async fn replace(&self, mut row: V, clash: impl Fn(&V) -> bool) -> Replace<V> {
        let mut rows = self.rows.write().await;
        let id = row.row_id();

        let created = match rows.get(&id) {
            Some(existing) if !existing.is_deleted() => existing.created_at(),
            _ => return Replace::Missing,
        };
        if rows
            .values()
            .any(|existing| existing.row_id() != id && clash(existing))
        {
            return Replace::Clash;
        }

        row.stamp_created(created);
        row.stamp_updated(utc_now());
        rows.insert(id, row.clone());
        Replace::Done(row)
    }

    /// Looks the row up without the visibility filter so the delete path can
    /// tell "already deleted" apart from "live".
    pub async fn soft_delete(&self, id: Uuid) -> bool {
        let mut rows = self.rows.write().await;
        match rows.get_mut(&id) {
            Some(row) if !row.is_deleted() => {
                let now = utc_now();
                row.mark_deleted(now);
                row.stamp_updated(now);
                true
            }
            _ => false,
        }
    }
}

impl<V> Replace<V> {
    /// Collapse for tables without uniqueness rules.
    pub fn into_option(self) -> Option<V> {
        match self {
            Replace::Done(row) => Some(row),
            Replace::Missing | Replace::Clash => None,
        }
    }
}
