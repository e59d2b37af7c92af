use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::patch::Patch;
use super::reference::LocationResponse;
use super::validate::{FieldErrors, Validate};
use crate::database::models::{FishingReport, WeatherConditions};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateFishingReportRequest {
    pub location_id: Option<i32>,
    pub arrival_time: Option<DateTime<Utc>>,
    pub departure_time: Option<DateTime<Utc>>,
    pub first_high_tide: Option<DateTime<Utc>>,
    pub second_high_tide: Option<DateTime<Utc>>,
    pub first_low_tide: Option<DateTime<Utc>>,
    pub second_low_tide: Option<DateTime<Utc>>,
    pub daytime_temperature: Option<Decimal>,
    pub water_temperature: Option<Decimal>,
    pub wind_speed_in_miles_per_hour: Option<i32>,
    pub wind_direction: Option<String>,
    pub weather_conditions: Option<WeatherConditions>,
    pub notes: Option<String>,
    pub video_url: Option<String>,
    pub trip_date: Option<NaiveDate>,
}

fn check_report_fields(
    errors: &mut FieldErrors,
    daytime_temperature: Option<Decimal>,
    water_temperature: Option<Decimal>,
    wind_speed: Option<i32>,
    wind_direction: Option<&String>,
    notes: Option<&String>,
    video_url: Option<&String>,
) {
    errors.decimal_5_2("daytimeTemperature", daytime_temperature);
    errors.decimal_5_2("waterTemperature", water_temperature);
    errors.non_negative("windSpeedInMilesPerHour", wind_speed);
    if let Some(direction) = wind_direction {
        errors.max_len("windDirection", direction, 10);
    }
    if let Some(notes) = notes {
        errors.max_len("notes", notes, 2000);
    }
    if let Some(url) = video_url {
        errors.max_len("videoUrl", url, 500);
        errors.absolute_url("videoUrl", url);
    }
}

impl Validate for CreateFishingReportRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        errors.present("locationId", &self.location_id);
        check_report_fields(
            &mut errors,
            self.daytime_temperature,
            self.water_temperature,
            self.wind_speed_in_miles_per_hour,
            self.wind_direction.as_ref(),
            self.notes.as_ref(),
            self.video_url.as_ref(),
        );
        errors.into_result()
    }
}

impl CreateFishingReportRequest {
    /// Callers validate first; a missing location id is rejected there.
    pub fn into_report(self, account_id: Uuid) -> FishingReport {
        let mut report = FishingReport::new(account_id, self.location_id.unwrap_or_default());
        report.arrival_time = self.arrival_time;
        report.departure_time = self.departure_time;
        report.first_high_tide = self.first_high_tide;
        report.second_high_tide = self.second_high_tide;
        report.first_low_tide = self.first_low_tide;
        report.second_low_tide = self.second_low_tide;
        report.daytime_temperature = self.daytime_temperature;
        report.water_temperature = self.water_temperature;
        report.wind_speed_in_miles_per_hour = self.wind_speed_in_miles_per_hour;
        report.wind_direction = self.wind_direction;
        report.weather_conditions = self.weather_conditions;
        report.notes = self.notes;
        report.video_url = self.video_url;
        report.trip_date = self.trip_date;
        report
    }
}

/// Partial update: only fields present in the body are written.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateFishingReportRequest {
    pub location_id: Patch<i32>,
    pub arrival_time: Patch<DateTime<Utc>>,
    pub departure_time: Patch<DateTime<Utc>>,
    pub first_high_tide: Patch<DateTime<Utc>>,
    pub second_high_tide: Patch<DateTime<Utc>>,
    pub first_low_tide: Patch<DateTime<Utc>>,
    pub second_low_tide: Patch<DateTime<Utc>>,
    pub daytime_temperature: Patch<Decimal>,
    pub water_temperature: Patch<Decimal>,
    pub wind_speed_in_miles_per_hour: Patch<i32>,
    pub wind_direction: Patch<String>,
    pub weather_conditions: Patch<WeatherConditions>,
    pub notes: Patch<String>,
    pub video_url: Patch<String>,
    pub trip_date: Patch<NaiveDate>,
}

impl Validate for UpdateFishingReportRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        if self.location_id == Patch::Clear {
            errors.add("locationId", "This field cannot be cleared");
        }
        check_report_fields(
            &mut errors,
            self.daytime_temperature.as_set().copied(),
            self.water_temperature.as_set().copied(),
            self.wind_speed_in_miles_per_hour.as_set().copied(),
            self.wind_direction.as_set(),
            self.notes.as_set(),
            self.video_url.as_set(),
        );
        errors.into_result()
    }
}

impl UpdateFishingReportRequest {
    pub fn apply_to(self, report: &mut FishingReport) {
        if let Patch::Set(location_id) = self.location_id {
            report.location_id = location_id;
        }
        self.arrival_time.apply_to(&mut report.arrival_time);
        self.departure_time.apply_to(&mut report.departure_time);
        self.first_high_tide.apply_to(&mut report.first_high_tide);
        self.second_high_tide.apply_to(&mut report.second_high_tide);
        self.first_low_tide.apply_to(&mut report.first_low_tide);
        self.second_low_tide.apply_to(&mut report.second_low_tide);
        self.daytime_temperature.apply_to(&mut report.daytime_temperature);
        self.water_temperature.apply_to(&mut report.water_temperature);
        self.wind_speed_in_miles_per_hour
            .apply_to(&mut report.wind_speed_in_miles_per_hour);
        self.wind_direction.apply_to(&mut report.wind_direction);
        self.weather_conditions.apply_to(&mut report.weather_conditions);
        self.notes.apply_to(&mut report.notes);
        self.video_url.apply_to(&mut report.video_url);
        self.trip_date.apply_to(&mut report.trip_date);
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FishingReportResponse {
    pub id: Uuid,
    pub account_id: Uuid,
    pub location_id: i32,
    pub location: Option<LocationResponse>,
    pub arrival_time: Option<DateTime<Utc>>,
    pub departure_time: Option<DateTime<Utc>>,
    pub first_high_tide: Option<DateTime<Utc>>,
    pub second_high_tide: Option<DateTime<Utc>>,
    pub first_low_tide: Option<DateTime<Utc>>,
    pub second_low_tide: Option<DateTime<Utc>>,
    pub daytime_temperature: Option<Decimal>,
    pub water_temperature: Option<Decimal>,
    pub wind_speed_in_miles_per_hour: Option<i32>,
    pub wind_direction: Option<String>,
    pub weather_conditions: Option<WeatherConditions>,
    pub notes: Option<String>,
    pub video_url: Option<String>,
    pub trip_date: Option<NaiveDate>,
    pub created_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
}

impl FishingReportResponse {
    pub fn new(report: FishingReport, location: Option<LocationResponse>) -> Self {
        Self {
            id: report.id,
            account_id: report.account_id,
            location_id: report.location_id,
            location,
            arrival_time: report.arrival_time,
            departure_time: report.departure_time,
            first_high_tide: report.first_high_tide,
            second_high_tide: report.second_high_tide,
            first_low_tide: report.first_low_tide,
            second_low_tide: report.second_low_tide,
            daytime_temperature: report.daytime_temperature,
            water_temperature: report.water_temperature,
            wind_speed_in_miles_per_hour: report.wind_speed_in_miles_per_hour,
            wind_direction: report.wind_direction,
            weather_conditions: report.weather_conditions,
            notes: report.notes,
            video_url: report.video_url,
            trip_date: report.trip_date,
            created_date: report.created_date,
            updated_date: report.updated_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notes_only_update_touches_nothing_else() {
        let mut report = FishingReport::new(Uuid::new_v4(), 2);
        report.trip_date = NaiveDate::from_ymd_opt(2025, 6, 1);
        report.wind_direction = Some("NE".to_string());

        let update: UpdateFishingReportRequest =
            serde_json::from_str(r#"{"notes": "Snook on the outgoing tide"}"#).unwrap();
        assert!(update.validate().is_ok());
        update.apply_to(&mut report);

        assert_eq!(report.notes.as_deref(), Some("Snook on the outgoing tide"));
        assert_eq!(report.trip_date, NaiveDate::from_ymd_opt(2025, 6, 1));
        assert_eq!(report.wind_direction.as_deref(), Some("NE"));
        assert_eq!(report.location_id, 2);
    }

    #[test]
    fn test_location_cannot_be_cleared() {
        let update: UpdateFishingReportRequest =
            serde_json::from_str(r#"{"locationId": null}"#).unwrap();
        assert!(update.validate().unwrap_err().get("locationId").is_some());
    }

    #[test]
    fn test_video_url_must_be_absolute() {
        let request = CreateFishingReportRequest {
            location_id: Some(1),
            video_url: Some("clips/42".to_string()),
            ..Default::default()
        };
        assert!(request.validate().unwrap_err().get("videoUrl").is_some());
    }

    #[test]
    fn test_trip_date_is_plain_date() {
        let request: CreateFishingReportRequest =
            serde_json::from_str(r#"{"locationId": 1, "tripDate": "2025-06-01"}"#).unwrap();
        assert_eq!(request.trip_date, NaiveDate::from_ymd_opt(2025, 6, 1));
    }
}
