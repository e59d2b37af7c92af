use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validate::{FieldErrors, Validate};
use crate::database::models::{Language, NotificationMethod, User, UserRole, UserStatus};

/// Body of both `POST` and `PUT /api/users`. Omitted enums and flags take the
/// same defaults as a new user.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserRequest {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub user_role: Option<UserRole>,
    pub preferred_notification_method: Option<NotificationMethod>,
    pub email_notifications_enabled: Option<bool>,
    pub sms_notifications_enabled: Option<bool>,
    pub notification_opt_out_date: Option<DateTime<Utc>>,
    pub email: String,
    pub alternate_email: String,
    pub alternate_phone_number: String,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
    pub status: Option<UserStatus>,
    pub preferred_language: Option<Language>,
}

impl Validate for UserRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        errors.required("firstName", &self.first_name);
        errors.max_len("firstName", &self.first_name, 50);
        errors.required("lastName", &self.last_name);
        errors.max_len("lastName", &self.last_name, 50);
        errors.max_len("phoneNumber", &self.phone_number, 20);
        errors.required("email", &self.email);
        errors.max_len("email", &self.email, 100);
        errors.email("email", &self.email);
        if !self.alternate_email.is_empty() {
            errors.max_len("alternateEmail", &self.alternate_email, 100);
            errors.email("alternateEmail", &self.alternate_email);
        }
        errors.max_len("alternatePhoneNumber", &self.alternate_phone_number, 50);
        errors.max_len("emergencyContactName", &self.emergency_contact_name, 100);
        errors.max_len("emergencyContactPhone", &self.emergency_contact_phone, 50);
        if self.status == Some(UserStatus::Deleted) {
            errors.add("status", "Deleted is set by removing the user");
        }
        errors.into_result()
    }
}

impl UserRequest {
    pub fn into_user(self, account_id: Uuid) -> User {
        let mut user = User::new(account_id, String::new(), String::new(), String::new());
        self.apply_to(&mut user);
        user
    }

    pub fn apply_to(self, user: &mut User) {
        user.first_name = self.first_name;
        user.last_name = self.last_name;
        user.phone_number = self.phone_number;
        user.user_role = self.user_role.unwrap_or(UserRole::Member);
        user.preferred_notification_method = self
            .preferred_notification_method
            .unwrap_or(NotificationMethod::Email);
        user.email_notifications_enabled = self.email_notifications_enabled.unwrap_or(true);
        user.sms_notifications_enabled = self.sms_notifications_enabled.unwrap_or(true);
        user.notification_opt_out_date = self.notification_opt_out_date;
        user.email = self.email.trim().to_string();
        user.alternate_email = self.alternate_email;
        user.alternate_phone_number = self.alternate_phone_number;
        user.emergency_contact_name = self.emergency_contact_name;
        user.emergency_contact_phone = self.emergency_contact_phone;
        user.status = self.status.unwrap_or(UserStatus::Active);
        user.preferred_language = self.preferred_language.unwrap_or(Language::English);
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
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
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            account_id: user.account_id,
            first_name: user.first_name,
            last_name: user.last_name,
            phone_number: user.phone_number,
            user_role: user.user_role,
            preferred_notification_method: user.preferred_notification_method,
            email_notifications_enabled: user.email_notifications_enabled,
            sms_notifications_enabled: user.sms_notifications_enabled,
            notification_opt_out_date: user.notification_opt_out_date,
            email: user.email,
            alternate_email: user.alternate_email,
            alternate_phone_number: user.alternate_phone_number,
            emergency_contact_name: user.emergency_contact_name,
            emergency_contact_phone: user.emergency_contact_phone,
            status: user.status,
            preferred_language: user.preferred_language,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
