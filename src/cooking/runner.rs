// ABOUTME: Drives a cooking session's countdown from a cancellable tokio tick task
// ABOUTME: Pause, advance and shutdown cancel the ticker before returning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Session runner
//!
//! The session lives behind an async mutex shared with one tick task. Each
//! spawned ticker is tagged with an epoch; `pause`, `advance` and `shutdown`
//! bump the epoch and abort the task while holding the lock, and the task
//! re-checks epoch and state under the lock before every tick.

use super::session::{CookingSession, SessionEvent, SessionSnapshot, SessionState};
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::sync::{broadcast, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::debug;

struct Shared {
    session: CookingSession,
    epoch: u64,
    ticker: Option<JoinHandle<()>>,
}

impl Shared {
    /// Invalidate and abort any running ticker
    fn cancel_ticker(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
    }
}

/// Owner of a running cooking session
pub struct CookingSessionHandle {
    shared: Arc<Mutex<Shared>>,
    events: broadcast::Sender<SessionEvent>,
    tick_interval: Duration,
}

impl CookingSessionHandle {
    /// Wrap `session`; ticks fire every `tick_interval` while running
    #[must_use]
    pub fn new(session: CookingSession, tick_interval: Duration) -> Self {
        let events = session.event_sender();
        Self {
            shared: Arc::new(Mutex::new(Shared {
                session,
                epoch: 0,
                ticker: None,
            })),
            events,
            tick_interval,
        }
    }

    /// Start or resume the countdown
    pub async fn start(&self) {
        let mut shared = self.shared.lock().await;
        shared.session.start();
        if shared.session.state() == SessionState::Running && shared.ticker.is_none() {
            self.spawn_ticker(&mut shared);
        }
    }

    /// Stop the countdown; no tick fires after this returns
    pub async fn pause(&self) {
        let mut shared = self.shared.lock().await;
        shared.cancel_ticker();
        shared.session.pause();
    }

    /// Complete the current step and auto-start the next one
    pub async fn advance(&self) {
        let mut shared = self.shared.lock().await;
        shared.cancel_ticker();
        shared.session.advance();
        if shared.session.state() == SessionState::Running {
            self.spawn_ticker(&mut shared);
        }
    }

    /// Current session view
    pub async fn snapshot(&self) -> SessionSnapshot {
        self.shared.lock().await.session.snapshot()
    }

    /// Receive session events from now on
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    /// Stop ticking and leave the session paused
    pub async fn shutdown(&self) {
        let mut shared = self.shared.lock().await;
        shared.cancel_ticker();
        shared.session.pause();
        debug!("Cooking session runner shut down");
    }

    fn spawn_ticker(&self, shared: &mut Shared) {
        shared.cancel_ticker();
        let epoch = shared.epoch;
        let weak = Arc::downgrade(&self.shared);
        shared.ticker = Some(tokio::spawn(run_ticker(weak, epoch, self.tick_interval)));
    }
}

impl Drop for CookingSessionHandle {
    fn drop(&mut self) {
        if let Ok(mut shared) = self.shared.try_lock() {
            shared.cancel_ticker();
        }
    }
}

/// Tick loop; exits when the session stops running, the epoch moves on,
/// or the handle is gone
async fn run_ticker(shared: Weak<Mutex<Shared>>, epoch: u64, period: Duration) {
    let mut interval = interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        interval.tick().await;

        let Some(shared) = shared.upgrade() else {
            break;
        };
        let mut guard = shared.lock().await;
        if guard.epoch != epoch || guard.session.state() != SessionState::Running {
            break;
        }

        guard.session.tick();
        if guard.session.state() != SessionState::Running {
            // Step elapsed; detach ourselves so a later start spawns afresh
            guard.ticker = None;
            break;
        }
    }
}
