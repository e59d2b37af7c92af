use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::reference::FishSpeciesResponse;
use super::tackle::TackleResponse;
use super::validate::{FieldErrors, Validate};
use crate::database::models::Landing;

/// Body of both `POST` and `PUT` on a report's landings; updates overwrite every field.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LandingRequest {
    pub fish_species_id: Option<i32>,
    pub length_in_inches: Option<Decimal>,
    pub lure_used: Option<Uuid>,
    pub rod_used: Option<Uuid>,
    pub reel_used: Option<Uuid>,
    pub main_line_test_in_pounds: Option<i32>,
    pub leader_line_test_in_pounds: Option<i32>,
    pub time_of_catch: Option<DateTime<Utc>>,
    pub released: Option<bool>,
}

impl Validate for LandingRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        errors.present("fishSpeciesId", &self.fish_species_id);
        errors.decimal_5_2("lengthInInches", self.length_in_inches);
        if self.length_in_inches.is_some_and(|l| l.is_sign_negative()) {
            errors.add("lengthInInches", "Must not be negative");
        }
        errors.non_negative("mainLineTestInPounds", self.main_line_test_in_pounds);
        errors.non_negative("leaderLineTestInPounds", self.leader_line_test_in_pounds);
        errors.into_result()
    }
}

impl LandingRequest {
    /// Tackle ids referenced by the request, in lure, rod, reel order.
    pub fn tackle_refs(&self) -> impl Iterator<Item = Uuid> {
        [self.lure_used, self.rod_used, self.reel_used].into_iter().flatten()
    }

    pub fn into_landing(self, account_id: Uuid, fishing_report_id: Uuid) -> Landing {
        let mut landing = Landing::new(
            account_id,
            fishing_report_id,
            self.fish_species_id.unwrap_or_default(),
        );
        self.apply_to(&mut landing);
        landing
    }

    pub fn apply_to(self, landing: &mut Landing) {
        if let Some(species) = self.fish_species_id {
            landing.fish_species_id = species;
        }
        landing.length_in_inches = self.length_in_inches;
        landing.lure_used = self.lure_used;
        landing.rod_used = self.rod_used;
        landing.reel_used = self.reel_used;
        landing.main_line_test_in_pounds = self.main_line_test_in_pounds;
        landing.leader_line_test_in_pounds = self.leader_line_test_in_pounds;
        landing.time_of_catch = self.time_of_catch;
        landing.released = self.released.unwrap_or(true);
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingResponse {
    pub id: Uuid,
    pub account_id: Uuid,
    pub fishing_report_id: Uuid,
    pub fish_species_id: i32,
    pub fish_species: Option<FishSpeciesResponse>,
    pub length_in_inches: Option<Decimal>,
    pub lure_used: Option<Uuid>,
    pub lure: Option<TackleResponse>,
    pub rod_used: Option<Uuid>,
    pub rod: Option<TackleResponse>,
    pub reel_used: Option<Uuid>,
    pub reel: Option<TackleResponse>,
    pub main_line_test_in_pounds: Option<i32>,
    pub leader_line_test_in_pounds: Option<i32>,
    pub time_of_catch: Option<DateTime<Utc>>,
    pub released: bool,
    pub created_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
}

/// Related rows embedded in a [`LandingResponse`].
#[derive(Debug, Clone, Default)]
pub struct LandingRelations {
    pub fish_species: Option<FishSpeciesResponse>,
    pub lure: Option<TackleResponse>,
    pub rod: Option<TackleResponse>,
    pub reel: Option<TackleResponse>,
}

impl LandingResponse {
    pub fn new(landing: Landing, related: LandingRelations) -> Self {
        Self {
            id: landing.id,
            account_id: landing.account_id,
            fishing_report_id: landing.fishing_report_id,
            fish_species_id: landing.fish_species_id,
            fish_species: related.fish_species,
            length_in_inches: landing.length_in_inches,
            lure_used: landing.lure_used,
            lure: related.lure,
            rod_used: landing.rod_used,
            rod: related.rod,
            reel_used: landing.reel_used,
            reel: related.reel,
            main_line_test_in_pounds: landing.main_line_test_in_pounds,
            leader_line_test_in_pounds: landing.leader_line_test_in_pounds,
            time_of_catch: landing.time_of_catch,
            released: landing.released,
            created_date: landing.created_date,
            updated_date: landing.updated_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_released_defaults_to_true() {
        let request: LandingRequest =
            serde_json::from_str(r#"{"fishSpeciesId": 1, "lengthInInches": 20}"#).unwrap();
        assert!(request.validate().is_ok());
        let landing = request.into_landing(Uuid::new_v4(), Uuid::new_v4());
        assert!(landing.released);
        assert_eq!(landing.length_in_inches, Some(Decimal::from(20)));
    }

    #[test]
    fn test_species_required_and_lengths_checked() {
        let request: LandingRequest =
            serde_json::from_str(r#"{"lengthInInches": -3, "mainLineTestInPounds": -10}"#).unwrap();
        let errors = request.validate().unwrap_err();
        assert!(errors.get("fishSpeciesId").is_some());
        assert!(errors.get("lengthInInches").is_some());
        assert!(errors.get("mainLineTestInPounds").is_some());
    }
}
