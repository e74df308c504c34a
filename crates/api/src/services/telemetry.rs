//! Temperature telemetry writer.
//!
//! Readings are forwarded to an InfluxDB 1.x compatible `/write` endpoint as
//! line protocol, one point per request:
//!
//! ```text
//! temperature,sensor_id=kitchen temp=21.5 1709294400
//! ```

use std::time::Duration;

use domain::models::TemperatureReading;
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use crate::config::TelemetryConfig;

const MEASUREMENT: &str = "temperature";

/// Telemetry writer errors.
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("Request timeout after {0}ms")]
    Timeout(u64),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Metric store rejected write: HTTP {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// HTTP client for the metric store.
#[derive(Debug, Clone)]
pub struct TelemetryClient {
    client: Client,
    config: TelemetryConfig,
}

impl TelemetryClient {
    pub fn new(config: TelemetryConfig) -> Result<Self, TelemetryError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self { client, config })
    }

    fn write_url(&self) -> String {
        format!("{}/write", self.config.url.trim_end_matches('/'))
    }

    /// Write one reading.
    pub async fn write(&self, reading: &TemperatureReading) -> Result<(), TelemetryError> {
        let line = to_line_protocol(reading);
        debug!(sensor_id = %reading.sensor_id, line = %line, "Writing temperature point");

        let mut request = self
            .client
            .post(self.write_url())
            .query(&[("db", self.config.database.as_str()), ("precision", "s")])
            .body(line);

        if !self.config.username.is_empty() {
            request = request.basic_auth(&self.config.username, Some(&self.config.password));
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                TelemetryError::Timeout(self.config.timeout_ms)
            } else {
                TelemetryError::Http(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TelemetryError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}

/// Encodes a reading as a single line-protocol point with second precision.
pub fn to_line_protocol(reading: &TemperatureReading) -> String {
    format!(
        "{},sensor_id={} temp={} {}",
        MEASUREMENT,
        escape_tag(&reading.sensor_id),
        reading.value,
        reading.recorded_at.timestamp()
    )
}

/// Escapes backslashes, commas, equals signs and spaces in tag values.
/// Control characters have no escape in line protocol and are dropped.
fn escape_tag(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars().filter(|c| !c.is_control()) {
        if matches!(c, '\\' | ',' | '=' | ' ') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
