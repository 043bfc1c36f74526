// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use crate::error::Error;
use serde::Deserialize;

pub const DEFAULT_RESOLUTION: u32 = 1000;
pub const DEFAULT_ENDPOINT: &str = "https://api.example.com/metrics";
pub const DEFAULT_STREAM_CAPACITY: usize = 1000;
pub const DEFAULT_STREAM_INTERVAL_MS: u64 = 100;

fn default_resolution() -> u32 {
    DEFAULT_RESOLUTION
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_stream_capacity() -> usize {
    DEFAULT_STREAM_CAPACITY
}

fn default_stream_interval_ms() -> u64 {
    DEFAULT_STREAM_INTERVAL_MS
}

/// Instance settings the host hands over when it creates the data source.
/// Every field has a default, so an empty JSON object is a valid config.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasourceSettings {
    /// Target sample count across a queried time range.
    #[serde(default = "default_resolution")]
    pub resolution: u32,
    /// Metrics backend the buffered fetch mode calls.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Row capacity of each streaming session's circular frame.
    #[serde(default = "default_stream_capacity")]
    pub stream_capacity: usize,
    /// Streaming tick period in milliseconds.
    #[serde(default = "default_stream_interval_ms")]
    pub stream_interval_ms: u64,
}

impl Default for DatasourceSettings {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            stream_capacity: DEFAULT_STREAM_CAPACITY,
            stream_interval_ms: DEFAULT_STREAM_INTERVAL_MS,
        }
    }
}

impl DatasourceSettings {
    /// Parse the host's instance-settings JSON. Unknown fields are ignored.
    pub fn from_json(value: serde_json::Value) -> Result<Self, Error> {
        Ok(serde_json::from_value(value)?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_object_takes_defaults() {
        let settings = DatasourceSettings::from_json(json!({})).unwrap();
        assert_eq!(settings.resolution, 1000);
        assert_eq!(settings.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(settings.stream_capacity, 1000);
        assert_eq!(settings.stream_interval_ms, 100);
    }

    #[test]
    fn test_partial_override() {
        let settings = DatasourceSettings::from_json(json!({"resolution": 4})).unwrap();
        assert_eq!(settings.resolution, 4);
        assert_eq!(settings.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_camel_case_keys() {
        let settings = DatasourceSettings::from_json(json!({
            "streamCapacity": 16,
            "streamIntervalMs": 10,
            "endpoint": "http://localhost:9999/metrics",
        }))
        .unwrap();
        assert_eq!(settings.stream_capacity, 16);
        assert_eq!(settings.stream_interval_ms, 10);
        assert_eq!(settings.endpoint, "http://localhost:9999/metrics");
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let settings =
            DatasourceSettings::from_json(json!({"apiKey": "not-our-problem"})).unwrap();
        assert_eq!(settings.resolution, 1000);
    }

    #[test]
    fn test_wrong_type_is_settings_error() {
        let result = DatasourceSettings::from_json(json!({"resolution": "a lot"}));
        assert!(matches!(result, Err(Error::Settings(_))));
    }

    #[test]
    fn test_default_impl_matches_serde_defaults() {
        let from_serde = DatasourceSettings::from_json(json!({})).unwrap();
        let from_default = DatasourceSettings::default();
        assert_eq!(from_serde.resolution, from_default.resolution);
        assert_eq!(from_serde.endpoint, from_default.endpoint);
        assert_eq!(from_serde.stream_capacity, from_default.stream_capacity);
        assert_eq!(from_serde.stream_interval_ms, from_default.stream_interval_ms);
    }
}
