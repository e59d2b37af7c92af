use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use super::{utc_now, Owned, SoftDeletable, Timestamped};

super::text_enum! {
    pub enum UserRole {
        Owner,
        Member,
        Guest,
    }
}

super::text_enum! {
    pub enum NotificationMethod {
        Email,
        Sms,
        Both,
        None,
    }
}

super::text_enum! {
    pub enum UserStatus {
        Active,
        Inactive,
        Suspended,
        Deleted,
    }
}

super::text_enum! {
    pub enum Language {
        English,
        Spanish,
        French,
        German,
        Portuguese,
    }
}

/// A named profile under an account.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct User {
    pub id: Uuid,
    pub account_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub user_role: UserRole,
    pub preferred_notification_method: NotificationMethod,
    pub email_notifications_enabled: bool,
    pub sms_notifications_enabled: bool,
    pub notification_opt_out_date: Option<DateTime<Utc>>,
    pub email: String,
    pub alternate_email: String,
    pub alternate_phone_number: String,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
    pub status: UserStatus,
    pub preferred_language: Language,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn new(account_id: Uuid, first_name: String, last_name: String, email: String) -> Self {
        let now = utc_now();
        Self {
            id: Uuid::new_v4(),
            account_id,
            first_name,
            last_name,
            phone_number: String::new(),
            user_role: UserRole::Member,
            preferred_notification_method: NotificationMethod::Email,
            email_notifications_enabled: true,
            sms_notifications_enabled: true,
            notification_opt_out_date: None,
            email,
            alternate_email: String::new(),
            alternate_phone_number: String::new(),
            emergency_contact_name: String::new(),
            emergency_contact_phone: String::new(),
            status: UserStatus::Active,
            preferred_language: Language::English,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }
}

impl Owned for User {
    fn owner_id(&self) -> Uuid {
        self.account_id
    }
}

impl SoftDeletable for User {
    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    /// Deleting a user also flips its status.
    fn mark_deleted(&mut self, at: DateTime<Utc>) {
        self.deleted_at = Some(at);
        self.status = UserStatus::Deleted;
    }
}

impl Timestamped for User {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn stamp_created(&mut self, at: DateTime<Utc>) {
        self.created_at = at;
        self.updated_at = at;
    }

    fn stamp_updated(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }
}
