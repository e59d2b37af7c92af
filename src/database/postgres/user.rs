use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::PgTable;
use crate::database::models::{utc_now, User};
use crate::database::stores::{StoreResult, UserStore, Visibility};

pub struct PgUserStore {
    table: PgTable,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            table: PgTable::new("users", pool).with_columns("updated_at", "deleted_at"),
        }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn get(&self, id: Uuid, visibility: Visibility) -> StoreResult<Option<User>> {
        self.table.get(id, visibility).await
    }

    async fn list_by_owner(&self, account_id: Uuid) -> StoreResult<Vec<User>> {
        let sql = format!(
            "{} AND account_id = $1 ORDER BY created_at, id",
            self.table.select_live()
        );
        let users = sqlx::query_as::<_, User>(&sql)
            .bind(account_id)
            .fetch_all(self.table.pool())
            .await?;
        Ok(users)
    }

    async fn add(&self, user: User) -> StoreResult<User> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (id, account_id, first_name, last_name, phone_number, user_role, \
             preferred_notification_method, email_notifications_enabled, sms_notifications_enabled, \
             notification_opt_out_date, email, alternate_email, alternate_phone_number, \
             emergency_contact_name, emergency_contact_phone, status, preferred_language, \
             created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $18) \
             RETURNING *",
        )
        .bind(user.id)
        .bind(user.account_id)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.phone_number)
        .bind(user.user_role)
        .bind(user.preferred_notification_method)
        .bind(user.email_notifications_enabled)
        .bind(user.sms_notifications_enabled)
        .bind(user.notification_opt_out_date)
        .bind(&user.email)
        .bind(&user.alternate_email)
        .bind(&user.alternate_phone_number)
        .bind(&user.emergency_contact_name)
        .bind(&user.emergency_contact_phone)
        .bind(user.status)
        .bind(user.preferred_language)
        .bind(utc_now())
        .fetch_one(self.table.pool())
        .await?;
        Ok(user)
    }

    async fn update(&self, user: User) -> StoreResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "UPDATE users SET first_name = $2, last_name = $3, phone_number = $4, user_role = $5, \
             preferred_notification_method = $6, email_notifications_enabled = $7, \
             sms_notifications_enabled = $8, notification_opt_out_date = $9, email = $10, \
             alternate_email = $11, alternate_phone_number = $12, emergency_contact_name = $13, \
             emergency_contact_phone = $14, status = $15, preferred_language = $16, updated_at = $17 \
             WHERE id = $1 AND deleted_at IS NULL RETURNING *",
        )
        .bind(user.id)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.phone_number)
        .bind(user.user_role)
        .bind(user.preferred_notification_method)
        .bind(user.email_notifications_enabled)
        .bind(user.sms_notifications_enabled)
        .bind(user.notification_opt_out_date)
        .bind(&user.email)
        .bind(&user.alternate_email)
        .bind(&user.alternate_phone_number)
        .bind(&user.emergency_contact_name)
        .bind(&user.emergency_contact_phone)
        .bind(user.status)
        .bind(user.preferred_language)
        .bind(utc_now())
        .fetch_optional(self.table.pool())
        .await?;
        Ok(user)
    }

    async fn soft_delete(&self, id: Uuid) -> StoreResult<bool> {
        self.table.soft_delete(id, Some("status = 'Deleted'")).await
    }

    async fn exists(&self, id: Uuid) -> StoreResult<bool> {
        self.table.exists(id).await
    }

    async fn belongs_to_owner(&self, id: Uuid, account_id: Uuid) -> StoreResult<bool> {
        self.table.belongs_to_owner(id, account_id).await
    }
}
