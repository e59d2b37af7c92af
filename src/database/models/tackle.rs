use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use super::utc_now;

super::text_enum! {
    pub enum TackleType {
        Rod,
        Reel,
        Line,
        Lure,
        Terminal,
        Vessel,
        Other,
    }
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Tackle {
    pub id: Uuid,
    pub account_id: Uuid,
    pub tackle_type: TackleType,
    pub name: String,
    pub description: String,
    pub created_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
    pub deleted_date: Option<DateTime<Utc>>,
}

impl Tackle {
    pub fn new(account_id: Uuid, tackle_type: TackleType, name: String, description: String) -> Self {
        let now = utc_now();
        Self {
            id: Uuid::new_v4(),
            account_id,
            tackle_type,
            name,
            description,
            created_date: now,
            updated_date: now,
            deleted_date: None,
        }
    }
}

super::tenant_entity!(
    Tackle,
    owner = account_id,
    created = created_date,
    updated = updated_date,
    deleted = deleted_date
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tackle_type_text_round_trip() {
        for kind in TackleType::ALL {
            assert_eq!(kind.as_str().parse::<TackleType>().unwrap(), *kind);
        }
        assert!("Harpoon".parse::<TackleType>().is_err());
    }

    #[test]
    fn test_tackle_type_serializes_by_name() {
        assert_eq!(serde_json::to_value(TackleType::Lure).unwrap(), "Lure");
    }
}
