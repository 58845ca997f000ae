use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::ForecastError;

pub mod ipapi;
pub mod nws;

pub use ipapi::IpApiClient;
pub use nws::NwsClient;

/// api.weather.gov rejects anonymous clients, so every request carries
/// a descriptive agent string.
const USER_AGENT: &str = "herecast/0.1 (weather CLI; github.com/herecast/herecast)";

pub(crate) fn http_client() -> Client {
    Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .expect("Failed to build HTTP client")
}

/// GET `url` and decode the JSON body into `T`.
///
/// Transport failures map to `Network`, non-success statuses to `Status`
/// (with a truncated body), and bad or incomplete JSON to `Decode`.
pub(crate) async fn get_json<T: DeserializeOwned>(
    http: &Client,
    url: &str,
) -> Result<T, ForecastError> {
    let res = http.get(url).send().await.map_err(|source| ForecastError::Network {
        url: url.to_string(),
        source,
    })?;

    let status = res.status();
    let body = res.text().await.map_err(|source| ForecastError::Network {
        url: url.to_string(),
        source,
    })?;

    if !status.is_success() {
        return Err(ForecastError::Status {
            url: url.to_string(),
            status,
            body: truncate_body(&body),
        });
    }

    serde_json::from_str(&body).map_err(|source| ForecastError::Decode {
        url: url.to_string(),
        source,
    })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX { format!("{}...", &body[..MAX]) } else { body.to_string() }
}
