//! Sensor telemetry ingestion.

use axum::{extract::State, http::StatusCode};
use chrono::Utc;
use domain::models::telemetry::TemperatureForm;
use tracing::debug;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::AppForm;

/// Forward one temperature sample to the metric store.
///
/// POST /data/temp (form fields `sensorID`, `val`)
pub async fn record_temperature(
    State(state): State<AppState>,
    AppForm(form): AppForm<TemperatureForm>,
) -> Result<StatusCode, ApiError> {
    // Only mounted when a client exists; see `create_app`.
    let Some(client) = state.telemetry.as_ref() else {
        return Err(ApiError::NotFound("Telemetry is disabled".into()));
    };

    let reading = form.into_reading(Utc::now())?;
    client.write(&reading).await?;

    debug!(sensor_id = %reading.sensor_id, value = reading.value, "Temperature recorded");

    Ok(StatusCode::NO_CONTENT)
}
