// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Columnar frames handed to the rendering host.
//!
//! A frame is a two-column (time, value) table keyed by the ref id of the
//! query that produced it. The growable variant accumulates rows without
//! bound and is returned whole; the circular variant carries a fixed row
//! capacity and evicts the oldest row on overflow, which is what the
//! streaming sessions use. One type covers both: the eviction policy is the
//! only difference.

use serde::ser::{SerializeStruct, Serializer};
use std::collections::VecDeque;

/// One timestamped measurement. Epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub time_ms: i64,
    pub value: f64,
}

#[derive(Debug, Clone)]
pub struct Frame {
    ref_id: String,
    times: VecDeque<i64>,
    values: VecDeque<f64>,
    capacity: Option<usize>,
}

impl Frame {
    /// Growable frame: rows accumulate without bound.
    pub fn new(ref_id: impl Into<String>) -> Self {
        Self {
            ref_id: ref_id.into(),
            times: VecDeque::new(),
            values: VecDeque::new(),
            capacity: None,
        }
    }

    /// Fixed-capacity frame: once full, each append evicts the oldest row.
    /// Capacity is clamped to at least one row.
    pub fn circular(ref_id: impl Into<String>, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            ref_id: ref_id.into(),
            times: VecDeque::with_capacity(capacity),
            values: VecDeque::with_capacity(capacity),
            capacity: Some(capacity),
        }
    }

    /// Growable frame built from an already-ordered sample sequence.
    pub fn from_samples(
        ref_id: impl Into<String>,
        samples: impl IntoIterator<Item = Sample>,
    ) -> Self {
        let mut frame = Self::new(ref_id);
        for sample in samples {
            frame.push(sample);
        }
        frame
    }

    /// Append one row. Both columns move in lockstep, so the row count is
    /// always shared.
    pub fn push(&mut self, sample: Sample) {
        if let Some(capacity) = self.capacity
            && self.times.len() == capacity
        {
            self.times.pop_front();
            self.values.pop_front();
        }
        self.times.push_back(sample.time_ms);
        self.values.push_back(sample.value);
    }

    pub fn ref_id(&self) -> &str {
        &self.ref_id
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Row capacity, if this is a circular frame.
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Rows in append order.
    pub fn samples(&self) -> impl Iterator<Item = Sample> + '_ {
        self.times
            .iter()
            .zip(self.values.iter())
            .map(|(&time_ms, &value)| Sample { time_ms, value })
    }
}

/// Host-facing field layout: name, type tag, and the column values.
#[derive(serde::Serialize)]
struct FieldView<'a, T> {
    name: &'static str,
    #[serde(rename = "type")]
    field_type: &'static str,
    values: &'a VecDeque<T>,
}

impl serde::Serialize for Frame {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let time = FieldView {
            name: "time",
            field_type: "time",
            values: &self.times,
        };
        let value = FieldView {
            name: "value",
            field_type: "number",
            values: &self.values,
        };
        let mut state = serializer.serialize_struct("Frame", 2)?;
        state.serialize_field("refId", &self.ref_id)?;
        state.serialize_field("fields", &(time, value))?;
        state.end()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn sample(time_ms: i64) -> Sample {
        Sample {
            time_ms,
            value: time_ms as f64 / 10.0,
        }
    }

    // -- growable frame tests --

    #[test]
    fn test_growable_appends_without_bound() {
        let mut frame = Frame::new("A");
        for t in 0..2500 {
            frame.push(sample(t));
        }
        assert_eq!(frame.len(), 2500);
        assert_eq!(frame.capacity(), None);
    }

    #[test]
    fn test_from_samples_preserves_order() {
        let frame = Frame::from_samples("A", [sample(3), sample(1), sample(2)]);
        let times: Vec<i64> = frame.samples().map(|s| s.time_ms).collect();
        assert_eq!(times, vec![3, 1, 2]);
    }

    // -- circular frame tests --

    #[test]
    fn test_circular_evicts_oldest_first() {
        let mut frame = Frame::circular("A", 3);
        for t in 0..4 {
            frame.push(sample(t));
        }
        assert_eq!(frame.len(), 3);
        let times: Vec<i64> = frame.samples().map(|s| s.time_ms).collect();
        assert_eq!(times, vec![1, 2, 3]);
    }

    #[test]
    fn test_circular_keeps_most_recent_capacity_rows() {
        let mut frame = Frame::circular("A", 5);
        for t in 0..100 {
            frame.push(sample(t));
        }
        assert_eq!(frame.len(), 5);
        let times: Vec<i64> = frame.samples().map(|s| s.time_ms).collect();
        assert_eq!(times, vec![95, 96, 97, 98, 99]);
    }

    #[test]
    fn test_circular_columns_stay_in_lockstep() {
        let mut frame = Frame::circular("A", 2);
        for t in 0..7 {
            frame.push(sample(t));
        }
        for s in frame.samples() {
            assert_eq!(s.value, s.time_ms as f64 / 10.0);
        }
    }

    #[test]
    fn test_zero_capacity_clamps_to_one() {
        let mut frame = Frame::circular("A", 0);
        frame.push(sample(1));
        frame.push(sample(2));
        assert_eq!(frame.len(), 1);
        assert_eq!(frame.samples().next().unwrap().time_ms, 2);
    }

    // -- serialization tests --

    #[test]
    fn test_serializes_host_field_layout() {
        let frame = Frame::from_samples("B", [sample(10), sample(20)]);
        let json = serde_json::to_value(&frame).unwrap();
        assert_eq!(json["refId"], "B");
        assert_eq!(json["fields"][0]["name"], "time");
        assert_eq!(json["fields"][0]["type"], "time");
        assert_eq!(json["fields"][0]["values"], serde_json::json!([10, 20]));
        assert_eq!(json["fields"][1]["name"], "value");
        assert_eq!(json["fields"][1]["type"], "number");
        assert_eq!(json["fields"][1]["values"], serde_json::json!([1.0, 2.0]));
    }
}
