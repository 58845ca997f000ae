//! National Weather Service API. A points lookup resolves a coordinate
//! to the grid responsible for it; the grid's forecast resource serves
//! the period forecast.

use reqwest::Client;
use serde::Deserialize;

use crate::error::ForecastError;
use crate::model::ForecastResponse;
use crate::provider::{get_json, http_client};

const POINTS_BASE: &str = "https://api.weather.gov/points/";

#[derive(Debug, Clone)]
pub struct NwsClient {
    http: Client,
    points_base: String,
}

/// Points response; only the forecast resource URL is of interest.
#[derive(Debug, Deserialize)]
struct PointsResponse {
    properties: PointsProperties,
}

#[derive(Debug, Deserialize)]
struct PointsProperties {
    forecast: String,
}

impl Default for NwsClient {
    fn default() -> Self {
        Self::new(POINTS_BASE.to_string())
    }
}

impl NwsClient {
    /// `points_base` is the points-API prefix (trailing slash included),
    /// overridable so tests can point the client at a local server.
    pub fn new(points_base: String) -> Self {
        Self { http: http_client(), points_base }
    }

    /// Look up the forecast-resource URL for a coordinate.
    pub async fn grid_endpoint(&self, lat: f64, lon: f64) -> Result<String, ForecastError> {
        let url = format!("{}{}", self.points_base, points_path(lat, lon));
        let points: PointsResponse = get_json(&self.http, &url).await?;
        Ok(points.properties.forecast)
    }

    /// Fetch the multi-period forecast from a grid's forecast resource.
    /// Decoding only; no transformation happens here.
    pub async fn forecast(&self, url: &str) -> Result<ForecastResponse, ForecastError> {
        get_json(&self.http, url).await
    }
}

/// The points API resolves grids at 4-decimal precision; the query path
/// must carry exactly 4 fractional digits per coordinate.
fn points_path(lat: f64, lon: f64) -> String {
    format!("{lat:.4},{lon:.4}")
}
