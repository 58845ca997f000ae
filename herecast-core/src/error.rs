use reqwest::StatusCode;
use thiserror::Error;

/// Failures surfaced by the forecast chain.
///
/// Every stage aborts on its first failure; the variants keep enough
/// context (the request URL) to tell the stages apart in one line.
#[derive(Debug, Error)]
pub enum ForecastError {
    /// The request could not be sent, or the response body never arrived.
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status.
    #[error("{url} returned status {status}: {body}")]
    Status {
        url: String,
        status: StatusCode,
        body: String,
    },

    /// The response body is not valid JSON or is missing expected fields.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The geolocation service reported a timezone identifier the
    /// timezone database does not know.
    #[error("unrecognized timezone identifier '{0}'")]
    Timezone(String),
}
