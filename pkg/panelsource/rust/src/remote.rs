// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Buffered fetch against the remote metrics backend.
//!
//! One GET per query, the resolved query riding along as URL parameters.
//! The backend answers with a JSON array of `{time, value}` points, which
//! map one-to-one into frame rows in the order the backend sent them — no
//! re-sorting. Retries, if wanted, belong to the caller.

use crate::error::Error;
use crate::frame::{Frame, Sample};
use crate::query::ResolvedQuery;
use futures::future::try_join_all;
use log::debug;
use serde::Deserialize;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// One point as the backend returns it. A missing or mistyped field fails
/// the whole fetch at decode time.
#[derive(Debug, Deserialize)]
struct WirePoint {
    time: i64,
    value: f64,
}

/// Thin client for the metrics backend.
#[derive(Debug, Clone)]
pub struct RemoteClient {
    endpoint: String,
    client: reqwest::Client,
}

impl RemoteClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    /// Fetch the frame for a single query. Transport errors, non-success
    /// statuses, and undecodable payloads all reject the fetch.
    pub async fn fetch_one(&self, query: &ResolvedQuery) -> Result<Frame, Error> {
        debug!("[{}] fetching {}", query.ref_id, self.endpoint);

        let points: Vec<WirePoint> = self
            .client
            .get(&self.endpoint)
            .query(query)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let mut frame = Frame::new(query.ref_id.clone());
        for point in points {
            frame.push(Sample {
                time_ms: point.time,
                value: point.value,
            });
        }
        Ok(frame)
    }

    /// Fetch every query in the batch. A single failing target rejects the
    /// whole batch; partial results are never returned.
    pub async fn fetch_all(&self, queries: &[ResolvedQuery]) -> Result<Vec<Frame>, Error> {
        try_join_all(queries.iter().map(|query| self.fetch_one(query))).await
    }
}
