// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Time-series data-source engine for dashboard panels.
//!
//! The visualization host hands this crate a batch of query targets over a
//! time range and gets back columnar (time, value) frames. Three retrieval
//! modes sit behind one query contract, each with its own entry point on
//! [`Datasource`]:
//!
//! - **Sampled range** ([`Datasource::query`]) — deterministic synthetic
//!   sine series across the requested range.
//! - **Buffered remote** ([`Datasource::query_remote`]) — one HTTP fetch
//!   per target against the configured metrics backend, all-or-nothing.
//! - **Streaming** ([`Datasource::query_streaming`]) — one cancellable
//!   session per target appending random samples to a bounded circular
//!   frame and pushing full snapshots on a fixed cadence.
//!
//! Host glue (plugin registration, settings UI, credential storage) lives
//! outside this crate; the host supplies instance settings as JSON and
//! consumes frames, events, and health results.

// Correctness
#![deny(clippy::indexing_slicing)]
#![deny(clippy::string_slice)]
#![deny(clippy::cast_possible_wrap)]
#![deny(clippy::undocumented_unsafe_blocks)]
// Panicking code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::unimplemented)]
#![deny(clippy::todo)]
// Debug code that shouldn't be in production
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]

pub mod config;
pub mod datasource;
pub mod error;
pub mod frame;
pub mod query;
pub mod remote;
pub mod sine;
pub mod stream;

// Re-export the public API
pub use config::DatasourceSettings;
pub use datasource::{Datasource, HealthCheckResult, HealthStatus};
pub use error::Error;
pub use frame::{Frame, Sample};
pub use query::{
    LoadingState, QueryRequest, QueryResponse, QuerySpec, ResolvedQuery, TimeRange,
};
pub use remote::RemoteClient;
pub use sine::sine_series;
pub use stream::{StreamConfig, StreamEvent, StreamSubscription};
