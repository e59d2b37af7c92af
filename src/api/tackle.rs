use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validate::{FieldErrors, Validate};
use crate::database::models::{Tackle, TackleType};

/// Body of both `POST` and `PUT /api/tackle`; updates overwrite every field.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TackleRequest {
    #[serde(rename = "type")]
    pub tackle_type: Option<TackleType>,
    pub name: String,
    pub description: String,
}

impl Validate for TackleRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        errors.present("type", &self.tackle_type);
        errors.required("name", &self.name);
        errors.max_len("name", &self.name, 200);
        errors.max_len("description", &self.description, 1000);
        errors.into_result()
    }
}

impl TackleRequest {
    pub fn into_tackle(self, account_id: Uuid) -> Tackle {
        Tackle::new(
            account_id,
            self.tackle_type.unwrap_or(TackleType::Other),
            self.name,
            self.description,
        )
    }

    pub fn apply_to(self, tackle: &mut Tackle) {
        if let Some(tackle_type) = self.tackle_type {
            tackle.tackle_type = tackle_type;
        }
        tackle.name = self.name;
        tackle.description = self.description;
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TackleResponse {
    pub id: Uuid,
    pub account_id: Uuid,
    #[serde(rename = "type")]
    pub tackle_type: TackleType,
    pub name: String,
    pub description: String,
    pub created_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
}

impl From<Tackle> for TackleResponse {
    fn from(tackle: Tackle) -> Self {
        Self {
            id: tackle.id,
            account_id: tackle.account_id,
            tackle_type: tackle.tackle_type,
            name: tackle.name,
            description: tackle.description,
            created_date: tackle.created_date,
            updated_date: tackle.updated_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_field_name_and_enum_text() {
        let request: TackleRequest =
            serde_json::from_str(r#"{"type": "Lure", "name": "Paddle tail"}"#).unwrap();
        assert_eq!(request.tackle_type, Some(TackleType::Lure));
        assert_eq!(request.description, "");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        assert!(serde_json::from_str::<TackleRequest>(r#"{"type": "Net", "name": "x"}"#).is_err());
    }
}
