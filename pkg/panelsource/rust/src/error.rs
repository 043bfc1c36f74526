// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Transport failure, non-success status, or undecodable payload from
    /// the metrics backend. The failing fetch is not retried.
    #[error("remote metrics request failed: {0}")]
    Remote(#[from] reqwest::Error),

    /// The host handed over instance settings that do not deserialize.
    #[error("invalid instance settings: {0}")]
    Settings(#[from] serde_json::Error),
}
