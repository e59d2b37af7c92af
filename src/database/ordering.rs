//! Sort keys of every paginated listing. Column names are shared by the SQL
//! and in-memory stores so both produce identical pages and cursors.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use super::models::{FishSpecies, FishingReport, Landing, Location, Tackle};
use crate::pagination::{Keyset, KeysetPosition, SortDirection};

pub type SpeciesPosition = KeysetPosition<i32, i32>;
pub type LocationPosition = KeysetPosition<i32, i32>;
pub type TacklePosition = KeysetPosition<String, Uuid>;
pub type ReportPosition = KeysetPosition<NaiveDate, (DateTime<Utc>, Uuid)>;
pub type LandingPosition = KeysetPosition<Decimal, (DateTime<Utc>, Uuid)>;

pub const SPECIES: Keyset = Keyset::new("display_order", SortDirection::Asc, &["id"], SortDirection::Asc);

pub const LOCATIONS: Keyset = Keyset::new("display_order", SortDirection::Asc, &["id"], SortDirection::Asc);

pub const TACKLE: Keyset = Keyset::new("name", SortDirection::Asc, &["id"], SortDirection::Asc);

pub const FISHING_REPORTS: Keyset = Keyset::new(
    "trip_date",
    SortDirection::Desc,
    &["created_date", "id"],
    SortDirection::Desc,
);

pub const LANDINGS: Keyset = Keyset::new(
    "length_in_inches",
    SortDirection::Asc,
    &["created_date", "id"],
    SortDirection::Desc,
);

pub fn species_position(species: &FishSpecies) -> SpeciesPosition {
    KeysetPosition::new(Some(species.order), species.id)
}

pub fn location_position(location: &Location) -> LocationPosition {
    KeysetPosition::new(Some(location.order), location.id)
}

pub fn tackle_position(tackle: &Tackle) -> TacklePosition {
    KeysetPosition::new(Some(tackle.name.clone()), tackle.id)
}

pub fn report_position(report: &FishingReport) -> ReportPosition {
    KeysetPosition::new(report.trip_date, (report.created_date, report.id))
}

pub fn landing_position(landing: &Landing) -> LandingPosition {
    KeysetPosition::new(landing.length_in_inches, (landing.created_date, landing.id))
}
