//! Core library for the `herecast` CLI.
//!
//! This crate defines:
//! - Typed models for the geolocation and forecast payloads
//! - Clients for the IP geolocation and weather-grid services
//! - Timezone-aware rendering of forecast periods into a report
//!
//! It is used by `herecast-cli`, but can also be reused by other binaries or services.

pub mod error;
pub mod model;
pub mod provider;
pub mod render;
pub mod report;

pub use error::ForecastError;
pub use model::{ForecastPeriod, ForecastResponse, Location, QuantitativeValue};
pub use provider::{IpApiClient, NwsClient};
pub use report::build_report;
