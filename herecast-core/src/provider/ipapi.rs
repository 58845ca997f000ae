//! IP geolocation via ip-api.com. The service infers the caller's
//! position from the request's source address, so the lookup takes no
//! parameters.

use reqwest::Client;
use tracing::debug;

use crate::error::ForecastError;
use crate::model::Location;
use crate::provider::{get_json, http_client};

const IP_API_URL: &str = "http://ip-api.com/json";

#[derive(Debug, Clone)]
pub struct IpApiClient {
    http: Client,
    base_url: String,
}

impl Default for IpApiClient {
    fn default() -> Self {
        Self::new(IP_API_URL.to_string())
    }
}

impl IpApiClient {
    /// `base_url` is the full lookup URL, overridable so tests can point
    /// the client at a local server.
    pub fn new(base_url: String) -> Self {
        Self { http: http_client(), base_url }
    }

    /// Resolve the caller's approximate coordinates and timezone.
    pub async fn locate(&self) -> Result<Location, ForecastError> {
        let location: Location = get_json(&self.http, &self.base_url).await?;

        debug!(
            lat = location.lat,
            lon = location.lon,
            timezone = %location.timezone,
            "resolved caller location"
        );

        Ok(location)
    }
}
