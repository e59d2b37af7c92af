use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

use super::utc_now;

super::text_enum! {
    pub enum WeatherConditions {
        Windy,
        Cloudy,
        Sunny,
        Hot,
        VeryHot,
        Cold,
        VeryCold,
        Rainy,
        Foggy,
        Stormy,
        StrongCurrent,
        Other,
    }
}

/// A single fishing trip. Everything except the location is optional.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct FishingReport {
    pub id: Uuid,
    pub account_id: Uuid,
    pub location_id: i32,
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
    pub deleted_date: Option<DateTime<Utc>>,
}

impl FishingReport {
    pub fn new(account_id: Uuid, location_id: i32) -> Self {
        let now = utc_now();
        Self {
            id: Uuid::new_v4(),
            account_id,
            location_id,
            arrival_time: None,
            departure_time: None,
            first_high_tide: None,
            second_high_tide: None,
            first_low_tide: None,
            second_low_tide: None,
            daytime_temperature: None,
            water_temperature: None,
            wind_speed_in_miles_per_hour: None,
            wind_direction: None,
            weather_conditions: None,
            notes: None,
            video_url: None,
            trip_date: None,
            created_date: now,
            updated_date: now,
            deleted_date: None,
        }
    }
}

super::tenant_entity!(
    FishingReport,
    owner = account_id,
    created = created_date,
    updated = updated_date,
    deleted = deleted_date
);
