// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! The host-facing surface: sampled-range queries, buffered remote fetch,
//! push streaming, and the health check. The three retrieval modes are
//! selected by distinct entry points, never by inspecting query content.

use crate::config::DatasourceSettings;
use crate::error::Error;
use crate::frame::Frame;
use crate::query::{QueryRequest, QueryResponse, QuerySpec};
use crate::remote::RemoteClient;
use crate::sine::sine_series;
use crate::stream::{self, StreamConfig, StreamSubscription};
use log::debug;
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Success,
    Error,
}

/// Health probe outcome reported back to the host.
#[derive(Debug, Clone, Serialize)]
pub struct HealthCheckResult {
    pub status: HealthStatus,
    pub message: String,
}

/// The data-source engine the host drives.
pub struct Datasource {
    resolution: u32,
    stream_config: StreamConfig,
    remote: RemoteClient,
}

impl Datasource {
    pub fn new(settings: DatasourceSettings) -> Result<Self, Error> {
        let remote = RemoteClient::new(&settings.endpoint)?;
        Ok(Self {
            resolution: settings.resolution,
            stream_config: StreamConfig {
                capacity: settings.stream_capacity,
                period: Duration::from_millis(settings.stream_interval_ms),
            },
            remote,
        })
    }

    /// Build a data source straight from the host's instance-settings JSON.
    pub fn from_json(settings: serde_json::Value) -> Result<Self, Error> {
        Self::new(DatasourceSettings::from_json(settings)?)
    }

    /// Default sampled-range mode: one synthetic sine frame per target at
    /// the configured resolution. Defaults are merged per target without
    /// touching the request.
    pub async fn query(&self, request: &QueryRequest) -> Result<QueryResponse, Error> {
        debug!(
            "sampling {} target(s) over {}..{}",
            request.targets.len(),
            request.range.from,
            request.range.to
        );

        let frames = request
            .targets
            .iter()
            .map(|target| {
                let query = target.resolve();
                let samples = sine_series(request.range, self.resolution, query.frequency);
                Frame::from_samples(query.ref_id, samples)
            })
            .collect();
        Ok(QueryResponse::complete(frames))
    }

    /// Buffered remote mode: one backend fetch per target, awaited
    /// together. A single failing target fails the whole batch.
    pub async fn query_remote(&self, request: &QueryRequest) -> Result<QueryResponse, Error> {
        let queries: Vec<_> = request.targets.iter().map(QuerySpec::resolve).collect();
        let frames = self.remote.fetch_all(&queries).await?;
        Ok(QueryResponse::complete(frames))
    }

    /// Streaming mode: one live session per target, merged into a single
    /// cancellable subscription.
    pub fn query_streaming(&self, targets: &[QuerySpec]) -> StreamSubscription {
        let queries: Vec<_> = targets.iter().map(QuerySpec::resolve).collect();
        stream::subscribe(&queries, self.stream_config)
    }

    /// Health check reported to the host. There is no connectivity probe
    /// behind it; callers wanting one extend this.
    pub async fn check_health(&self) -> HealthCheckResult {
        HealthCheckResult {
            status: HealthStatus::Success,
            message: "data source is working".to_string(),
        }
    }
}
