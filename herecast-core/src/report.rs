//! The forecast chain: locate the caller, resolve their forecast grid,
//! fetch the periods, render the report.

use tracing::debug;

use crate::error::ForecastError;
use crate::provider::{IpApiClient, NwsClient};
use crate::render::render_forecast;

/// Run the three-stage chain and produce the printable report.
///
/// The stages are strictly sequential; the first failure aborts the run
/// and no partial report is produced.
pub async fn build_report(geo: &IpApiClient, nws: &NwsClient) -> Result<String, ForecastError> {
    let location = geo.locate().await?;

    let forecast_url = nws.grid_endpoint(location.lat, location.lon).await?;
    debug!(%forecast_url, "resolved grid endpoint");

    let forecast = nws.forecast(&forecast_url).await?;

    render_forecast(&forecast.properties.periods, &location.timezone)
}
