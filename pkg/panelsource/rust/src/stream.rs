// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Live streaming sessions.
//!
//! Each query target gets one independent session: a task that owns a
//! circular frame and a tick interval, appends one random sample per tick,
//! and publishes a full snapshot of the frame as an event. All sessions of
//! one subscription fan into a single channel; there is no ordering
//! contract across sessions. A session is Active from subscribe until the
//! subscription is cancelled, which is terminal.

use crate::frame::{Frame, Sample};
use crate::query::{LoadingState, ResolvedQuery};
use chrono::Utc;
use log::debug;
use serde::Serialize;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tokio::task::JoinHandle;

/// Lower bound on the shared event buffer, so small subscriptions still
/// absorb short consumer stalls.
const MIN_EVENT_BUFFER: usize = 64;

/// Streaming knobs, derived from the instance settings.
#[derive(Debug, Clone, Copy)]
pub struct StreamConfig {
    /// Row capacity of each session's circular frame.
    pub capacity: usize,
    /// Tick period.
    pub period: Duration,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            capacity: 1000,
            period: Duration::from_millis(100),
        }
    }
}

/// One update published by a session: a full snapshot of its frame, the
/// originating ref id as routing key, and the streaming lifecycle tag.
#[derive(Debug, Clone, Serialize)]
pub struct StreamEvent {
    pub key: String,
    pub state: LoadingState,
    pub frame: Frame,
}

struct Session {
    ref_id: String,
    task: JoinHandle<()>,
}

/// Handle to a set of live sessions. Events are read with
/// [`StreamSubscription::recv`]; the subscription is torn down by
/// [`StreamSubscription::cancel`] or by dropping the handle.
pub struct StreamSubscription {
    events: mpsc::Receiver<StreamEvent>,
    sessions: Vec<Session>,
    cancelled: bool,
}

/// Start one independent session per target, fanned into one subscription.
/// Must be called from within a tokio runtime.
pub fn subscribe(targets: &[ResolvedQuery], config: StreamConfig) -> StreamSubscription {
    let (tx, rx) = mpsc::channel(MIN_EVENT_BUFFER.max(targets.len()));

    let sessions = targets
        .iter()
        .map(|target| Session {
            ref_id: target.ref_id.clone(),
            task: tokio::spawn(run_session(target.clone(), config, tx.clone())),
        })
        .collect();

    StreamSubscription {
        events: rx,
        sessions,
        cancelled: false,
    }
}

impl StreamSubscription {
    /// Next update from any session. `None` once every session has ended or
    /// the subscription has been cancelled.
    pub async fn recv(&mut self) -> Option<StreamEvent> {
        if self.cancelled {
            return None;
        }
        self.events.recv().await
    }

    /// Session routing keys, in subscription order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.sessions.iter().map(|session| session.ref_id.as_str())
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Stop every session. No event is observable once this returns: the
    /// timers are deregistered, the channel refuses anything a still
    /// unwinding tick might push, and what was already buffered is
    /// discarded. Calling it again is a no-op.
    pub fn cancel(&mut self) {
        if self.cancelled {
            return;
        }
        self.cancelled = true;

        for session in &self.sessions {
            session.task.abort();
            debug!("[{}] streaming session cancelled", session.ref_id);
        }

        self.events.close();
        while self.events.try_recv().is_ok() {}
    }
}

impl Drop for StreamSubscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// The session loop. Runs on its own task so a failure here is isolated
/// from sibling sessions; the subscription remains cancellable either way.
async fn run_session(target: ResolvedQuery, config: StreamConfig, tx: mpsc::Sender<StreamEvent>) {
    let mut frame = Frame::circular(target.ref_id.clone(), config.capacity);
    // interval() panics on a zero period; settings are host input.
    let period = config.period.max(Duration::from_millis(1));
    let mut ticker = tokio::time::interval(period);
    ticker.tick().await; // consume the immediate first tick

    debug!("[{}] streaming session started", target.ref_id);
    loop {
        ticker.tick().await;

        frame.push(Sample {
            time_ms: Utc::now().timestamp_millis(),
            value: rand::random::<f64>(),
        });

        let event = StreamEvent {
            key: target.ref_id.clone(),
            state: LoadingState::Streaming,
            frame: frame.clone(),
        };
        match tx.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                // The next tick's snapshot supersedes this one.
                debug!("[{}] subscriber behind, dropping snapshot", target.ref_id);
            }
            Err(TrySendError::Closed(_)) => break,
        }
    }
    debug!("[{}] streaming session ended", target.ref_id);
}
