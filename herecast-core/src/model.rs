use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

/// Caller location as reported by the IP geolocation service.
#[derive(Debug, Clone, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
    /// IANA identifier, e.g. "America/Los_Angeles".
    pub timezone: String,
}

/// Unit-coded measurement. The value is missing for some periods, so the
/// renderer must branch on presence instead of assuming one.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantitativeValue {
    /// Namespaced WMO unit code, e.g. "wmoUnit:percent".
    pub unit_code: String,
    #[serde(default)]
    pub value: Option<f64>,
}

/// One named forecast window ("Today", "Tonight", ...).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPeriod {
    pub number: i64,
    pub name: String,
    /// Start/end carry their own UTC offsets; rendering converts them
    /// into the location's named timezone.
    pub start_time: DateTime<FixedOffset>,
    pub end_time: DateTime<FixedOffset>,
    pub is_daytime: bool,
    pub temperature: i64,
    pub temperature_unit: String,
    pub probability_of_precipitation: QuantitativeValue,
    pub wind_direction: String,
    pub wind_speed: String,
    pub icon: String,
    pub short_forecast: String,
    pub detailed_forecast: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastProperties {
    pub generated_at: DateTime<FixedOffset>,
    pub update_time: DateTime<FixedOffset>,
    /// Chronological, as returned by the service.
    pub periods: Vec<ForecastPeriod>,
}

/// Multi-period forecast served by a grid's forecast resource.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub properties: ForecastProperties,
}
