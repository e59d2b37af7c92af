use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::database::models::{FishSpecies, Location};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationResponse {
    pub id: i32,
    pub name: String,
    pub latitude: Decimal,
    pub longitude: Decimal,
    pub description: Option<String>,
    pub order: i32,
    pub created_date: DateTime<Utc>,
}

impl From<Location> for LocationResponse {
    fn from(location: Location) -> Self {
        Self {
            id: location.id,
            name: location.name,
            latitude: location.latitude,
            longitude: location.longitude,
            description: location.description,
            order: location.order,
            created_date: location.created_date,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FishSpeciesResponse {
    pub id: i32,
    pub order: i32,
    pub name: String,
    pub scientific_name: Option<String>,
    pub description: Option<String>,
    pub created_date: DateTime<Utc>,
}

impl From<FishSpecies> for FishSpeciesResponse {
    fn from(species: FishSpecies) -> Self {
        Self {
            id: species.id,
            order: species.order,
            name: species.name,
            scientific_name: species.scientific_name,
            description: species.description,
            created_date: species.created_date,
        }
    }
}
