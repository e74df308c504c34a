//! Sensor telemetry models.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::ValidationError;

/// Form payload for `POST /data/temp`.
#[derive(Debug, Clone, Deserialize)]
pub struct TemperatureForm {
    #[serde(rename = "sensorID", default)]
    pub sensor_id: String,
    #[serde(default)]
    pub val: String,
}

/// A single temperature sample ready to be written to the metrics store.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureReading {
    pub sensor_id: String,
    pub value: f64,
    pub recorded_at: DateTime<Utc>,
}

impl TemperatureForm {
    /// Parses the raw form fields into a reading stamped with `recorded_at`.
    pub fn into_reading(self, recorded_at: DateTime<Utc>) -> Result<TemperatureReading, ValidationError> {
        let sensor_id = self.sensor_id.trim();
        if sensor_id.is_empty() {
            let mut err = ValidationError::new("sensor_id");
            err.message = Some("sensorID is required".into());
            return Err(err);
        }
        if sensor_id.chars().any(char::is_control) {
            let mut err = ValidationError::new("sensor_id");
            err.message = Some("sensorID must not contain control characters".into());
            return Err(err);
        }

        let value = self
            .val
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| {
                let mut err = ValidationError::new("val");
                err.message = Some("val must be a finite number".into());
                err
            })?;

        Ok(TemperatureReading {
            sensor_id: sensor_id.to_string(),
            value,
            recorded_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(sensor_id: &str, val: &str) -> TemperatureForm {
        TemperatureForm {
            sensor_id: sensor_id.to_string(),
            val: val.to_string(),
        }
    }

    #[test]
    fn test_parses_valid_form() {
        let now = Utc::now();
        let reading = form("kitchen", " 21.5 ").into_reading(now).unwrap();
        assert_eq!(reading.sensor_id, "kitchen");
        assert_eq!(reading.value, 21.5);
        assert_eq!(reading.recorded_at, now);
    }

    #[test]
    fn test_rejects_non_numeric_value() {
        let err = form("kitchen", "warm").into_reading(Utc::now()).unwrap_err();
        assert_eq!(err.code, "val");
    }

    #[test]
    fn test_rejects_non_finite_value() {
        assert!(form("kitchen", "NaN").into_reading(Utc::now()).is_err());
        assert!(form("kitchen", "inf").into_reading(Utc::now()).is_err());
    }

    #[test]
    fn test_rejects_missing_sensor() {
        let err = form("  ", "20").into_reading(Utc::now()).unwrap_err();
        assert_eq!(err.code, "sensor_id");
    }

    #[test]
    fn test_rejects_control_characters_in_sensor() {
        for sensor in ["a\nevil temp=99 1", "a\rb", "a\tb"] {
            let err = form(sensor, "20").into_reading(Utc::now()).unwrap_err();
            assert_eq!(err.code, "sensor_id");
        }
    }
}
