// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Query contract between the host and the data source.

use crate::frame::Frame;
use serde::{Deserialize, Serialize};

/// Reference id used when a target does not carry one.
pub const DEFAULT_REF_ID: &str = "A";
/// Full periods across the queried range when a target does not say.
pub const DEFAULT_FREQUENCY: f64 = 1.0;

/// Absolute time window in epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub from: i64,
    pub to: i64,
}

impl TimeRange {
    pub fn new(from: i64, to: i64) -> Self {
        Self { from, to }
    }

    /// Signed duration. Zero or negative means there is nothing to sample.
    pub fn duration_ms(&self) -> i64 {
        self.to - self.from
    }
}

/// One query target as supplied by the host. Missing fields are filled from
/// the documented defaults at dispatch time; the host's value is never
/// mutated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuerySpec {
    pub ref_id: Option<String>,
    pub frequency: Option<f64>,
}

impl QuerySpec {
    /// Pure default-merge: produces the resolved form of this target
    /// without touching `self`.
    pub fn resolve(&self) -> ResolvedQuery {
        ResolvedQuery {
            ref_id: self
                .ref_id
                .clone()
                .unwrap_or_else(|| DEFAULT_REF_ID.to_string()),
            frequency: self.frequency.unwrap_or(DEFAULT_FREQUENCY),
        }
    }
}

/// A query target with defaults applied. This is what travels to the
/// backend as request parameters in the remote mode.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedQuery {
    pub ref_id: String,
    pub frequency: f64,
}

/// A batch of targets over one time range.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryRequest {
    pub range: TimeRange,
    pub targets: Vec<QuerySpec>,
}

/// Lifecycle tag attached to responses and stream events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadingState {
    Streaming,
    Done,
}

/// Response envelope for the one-shot modes.
#[derive(Debug, Serialize)]
pub struct QueryResponse {
    pub frames: Vec<Frame>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<LoadingState>,
}

impl QueryResponse {
    /// Envelope for a finished, non-streaming result.
    pub fn complete(frames: Vec<Frame>) -> Self {
        Self {
            frames,
            key: None,
            state: None,
        }
    }
}
