// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Synthetic sine-wave series generation.

use crate::frame::Sample;
use crate::query::TimeRange;
use std::f64::consts::PI;

/// Sample a sine wave across `range`.
///
/// `resolution` is the target sample count across the whole range; it is
/// clamped to at least one before the step is derived. `frequency` is the
/// number of full periods traced across the range. A zero or negative
/// duration yields an empty series rather than an error.
///
/// There is no implicit cap on `resolution`; callers size it. The function
/// is pure: no I/O, no shared state, identical inputs give identical
/// output.
pub fn sine_series(range: TimeRange, resolution: u32, frequency: f64) -> Vec<Sample> {
    let duration = range.duration_ms();
    if duration <= 0 {
        return Vec::new();
    }

    let duration = duration as f64;
    let step = duration / f64::from(resolution.max(1));

    let mut samples = Vec::new();
    let mut t = 0.0;
    while t < duration {
        samples.push(Sample {
            time_ms: range.from + t as i64,
            value: (2.0 * PI * frequency * t / duration).sin(),
        });
        t += step;
    }
    samples
}
