//! sqlx-backed stores. Soft-deleted rows are filtered in SQL and every write
//! returns the row as stored.

mod account;
mod fishing_report;
mod landing;
mod reference;
mod tackle;
mod user;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::QueryAs;
use sqlx::{Encode, FromRow, PgPool, Postgres, Type};
use uuid::Uuid;

use super::models::utc_now;
use super::stores::{StoreResult, Visibility};
use crate::pagination::{Keyset, KeysetPosition, Page, PageRequest};

pub use account::PgAccountStore;
pub use fishing_report::PgFishingReportStore;
pub use landing::PgLandingStore;
pub use reference::{PgFishSpeciesStore, PgLocationStore};
pub use tackle::PgTackleStore;
pub use user::PgUserStore;

type PgQueryAs<'q, R> = QueryAs<'q, Postgres, R, PgArguments>;

/// Tie-break values bound in column order after the primary sort value.
pub(crate) trait BindTieBreak: Send {
    fn bind_to<'q, R>(self, query: PgQueryAs<'q, R>) -> PgQueryAs<'q, R>;
}

impl BindTieBreak for i32 {
    fn bind_to<'q, R>(self, query: PgQueryAs<'q, R>) -> PgQueryAs<'q, R> {
        query.bind(self)
    }
}

impl BindTieBreak for Uuid {
    fn bind_to<'q, R>(self, query: PgQueryAs<'q, R>) -> PgQueryAs<'q, R> {
        query.bind(self)
    }
}

impl BindTieBreak for (DateTime<Utc>, Uuid) {
    fn bind_to<'q, R>(self, query: PgQueryAs<'q, R>) -> PgQueryAs<'q, R> {
        query.bind(self.0).bind(self.1)
    }
}

/// Shared single-table statements for tenant rows.
#[derive(Clone)]
pub(crate) struct PgTable {
    name: &'static str,
    updated: &'static str,
    deleted: &'static str,
    pool: PgPool,
}

impl PgTable {
    pub fn new(name: &'static str, pool: PgPool) -> Self {
        Self {
            name,
            updated: "updated_date",
            deleted: "deleted_date",
            pool,
        }
    }

    pub fn with_columns(mut self, updated: &'static str, deleted: &'static str) -> Self {
        self.updated = updated;
        self.deleted = deleted;
        self
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// `SELECT * FROM <table> WHERE <deleted> IS NULL`
    pub fn select_live(&self) -> String {
        format!("SELECT * FROM {} WHERE {} IS NULL", self.name, self.deleted)
    }

    pub async fn get<R>(&self, id: Uuid, visibility: Visibility) -> StoreResult<Option<R>>
    where
        R: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        let sql = match visibility {
            Visibility::Live => format!("{} AND id = $1", self.select_live()),
            Visibility::IncludeDeleted => format!("SELECT * FROM {} WHERE id = $1", self.name),
        };
        let row = sqlx::query_as::<_, R>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    pub async fn exists(&self, id: Uuid) -> StoreResult<bool> {
        let sql = format!(
            "SELECT EXISTS (SELECT 1 FROM {} WHERE id = $1 AND {} IS NULL)",
            self.name, self.deleted
        );
        let exists: bool = sqlx::query_scalar(&sql).bind(id).fetch_one(&self.pool).await?;
        Ok(exists)
    }

    pub async fn belongs_to_owner(&self, id: Uuid, account_id: Uuid) -> StoreResult<bool> {
        let sql = format!(
            "SELECT EXISTS (SELECT 1 FROM {} WHERE id = $1 AND account_id = $2 AND {} IS NULL)",
            self.name, self.deleted
        );
        let exists: bool = sqlx::query_scalar(&sql)
            .bind(id)
            .bind(account_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    /// Stamp the deletion time on a live row. `extra_set` is appended to the
    /// SET list verbatim.
    pub async fn soft_delete(&self, id: Uuid, extra_set: Option<&str>) -> StoreResult<bool> {
        let mut sql = format!(
            "UPDATE {} SET {} = $2, {} = $2",
            self.name, self.deleted, self.updated
        );
        if let Some(extra) = extra_set {
            sql.push_str(", ");
            sql.push_str(extra);
        }
        sql.push_str(&format!(" WHERE id = $1 AND {} IS NULL", self.deleted));

        let result = sqlx::query(&sql)
            .bind(id)
            .bind(utc_now())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Run one keyset page query. `base` must end in a WHERE clause whose
/// placeholders `$1..` are filled from `scope`.
pub(crate) async fn fetch_page<R, P, T>(
    pool: &PgPool,
    keyset: &Keyset,
    base: &str,
    scope: &[Uuid],
    request: &PageRequest,
    position: impl Fn(&R) -> KeysetPosition<P, T> + Send,
) -> StoreResult<Page<R>>
where
    R: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    P: for<'q> Encode<'q, Postgres> + Type<Postgres> + Serialize + DeserializeOwned + Send + 'static,
    T: BindTieBreak + Serialize + DeserializeOwned + 'static,
{
    let cursor = request.position::<P, T>();
    let sql = keyset.page_sql(
        base,
        cursor.as_ref().map(|c| c.primary.is_none()),
        scope.len() + 1,
    );

    let mut query = sqlx::query_as::<_, R>(&sql);
    for id in scope {
        query = query.bind(*id);
    }
    if let Some(KeysetPosition { primary, tie_break }) = cursor {
        if let Some(primary) = primary {
            query = query.bind(primary);
        }
        query = tie_break.bind_to(query);
    }

    let rows = query
        .bind(request.fetch_limit() as i64)
        .fetch_all(pool)
        .await?;
    Ok(Page::from_fetched(rows, request.limit(), position)?)
}
