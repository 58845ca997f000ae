//! Human-readable rendering of forecast periods, adjusted to the
//! caller's named timezone.

use chrono::{DateTime, FixedOffset};
use chrono_tz::Tz;

use crate::error::ForecastError;
use crate::model::{ForecastPeriod, QuantitativeValue};

const HEADER: &str = "--- Local Forecast ---";

/// "10 June 2026 at 7:00 AM PDT"
const TIME_FORMAT: &str = "%-d %B %Y at %-I:%M %p %Z";

/// Render the report: the header plus one block per period in source
/// order, blocks separated by a blank line.
pub fn render_forecast(
    periods: &[ForecastPeriod],
    timezone: &str,
) -> Result<String, ForecastError> {
    let tz: Tz = timezone
        .parse()
        .map_err(|_| ForecastError::Timezone(timezone.to_string()))?;

    let mut blocks = Vec::with_capacity(periods.len() + 1);
    blocks.push(HEADER.to_string());
    for period in periods {
        blocks.push(render_period(period, tz));
    }

    Ok(blocks.join("\n\n"))
}

fn render_period(period: &ForecastPeriod, tz: Tz) -> String {
    format!(
        "{}\nTemperature: {}\nWind: {}\nPrecipitation: {}\n{}",
        format_time_range(period, tz),
        format_temp(period.temperature, &period.temperature_unit),
        format_wind(&period.wind_direction, &period.wind_speed),
        format_precipitation(&period.probability_of_precipitation),
        period.detailed_forecast,
    )
}

/// "<name> <start> to <end>", both endpoints converted from their own
/// offsets into the target zone.
fn format_time_range(period: &ForecastPeriod, tz: Tz) -> String {
    format!(
        "{} {} to {}",
        period.name,
        format_local(period.start_time, tz),
        format_local(period.end_time, tz),
    )
}

fn format_local(ts: DateTime<FixedOffset>, tz: Tz) -> String {
    ts.with_timezone(&tz).format(TIME_FORMAT).to_string()
}

fn format_temp(temperature: i64, unit: &str) -> String {
    format!("{temperature}{unit}")
}

fn format_wind(direction: &str, speed: &str) -> String {
    format!("{direction} at {speed}")
}

/// A missing probability value renders as "N/A" rather than failing the
/// whole report.
fn format_precipitation(probability: &QuantitativeValue) -> String {
    match probability.value {
        Some(value) => {
            format!("{}{}", format_value(value), unit_symbol(&probability.unit_code))
        }
        None => "N/A".to_string(),
    }
}

/// Whole values print without a fractional part: "40", not "40.0".
fn format_value(value: f64) -> String {
    if value.fract() == 0.0 { format!("{}", value as i64) } else { format!("{value}") }
}

/// Map the unit name after the "wmoUnit:" namespace to a short symbol.
/// Unmapped names degrade to an empty string, not an error.
fn unit_symbol(unit_code: &str) -> &'static str {
    let name = match unit_code.split_once(':') {
        Some((_, name)) => name,
        None => unit_code,
    };

    match name {
        "percent" => "%",
        "inches" => "in",
        "centimeters" => "cm",
        _ => "",
    }
}
