use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validate::{FieldErrors, Validate};
use crate::database::models::Account;

/// Body of both `POST` and `PUT /api/accounts`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccountRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl Validate for AccountRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        errors.required("email", &self.email);
        errors.max_len("email", &self.email, 255);
        errors.email("email", &self.email);
        errors.required("firstName", &self.first_name);
        errors.max_len("firstName", &self.first_name, 100);
        errors.required("lastName", &self.last_name);
        errors.max_len("lastName", &self.last_name, 100);
        errors.into_result()
    }
}

impl AccountRequest {
    pub fn into_account(self) -> Account {
        Account::new(self.email.trim().to_string(), self.first_name, self.last_name)
    }

    pub fn apply_to(self, account: &mut Account) {
        account.email = self.email.trim().to_string();
        account.first_name = self.first_name;
        account.last_name = self.last_name;
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub created_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            email: account.email,
            first_name: account.first_name,
            last_name: account.last_name,
            created_date: account.created_date,
            updated_date: account.updated_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_are_validation_errors() {
        let request: AccountRequest = serde_json::from_str(r#"{"email": "not-an-email"}"#).unwrap();
        let errors = request.validate().unwrap_err();
        assert!(errors.get("email").is_some());
        assert!(errors.get("firstName").is_some());
        assert!(errors.get("lastName").is_some());
    }
}
