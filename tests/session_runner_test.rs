// ABOUTME: Tests for the tokio-driven cooking session runner
// ABOUTME: Uses paused tokio time to verify tick cadence and cancellation on pause
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::steps;
use recipe_session::cooking::{
    CookingSession, CookingSessionHandle, SessionEvent, SessionSettings, SessionState,
};
use recipe_session::notifications::{ChannelNotifier, ScheduledNotification};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::sleep;

const TICK: Duration = Duration::from_secs(1);

fn handle(texts: &[&str]) -> (CookingSessionHandle, UnboundedReceiver<ScheduledNotification>) {
    common::init_test_logging();
    let (notifier, receiver) = ChannelNotifier::new();
    let session = CookingSession::new(
        "Risotto",
        steps(texts),
        Arc::new(notifier),
        SessionSettings::default(),
    );
    (CookingSessionHandle::new(session, TICK), receiver)
}

#[tokio::test(start_paused = true)]
async fn test_countdown_completes_step_and_notifies() {
    let (handle, mut notifications) = handle(&["Toast rice 2 minutes", "Add stock"]);
    handle.start().await;

    sleep(Duration::from_millis(120_500)).await;

    let snapshot = handle.snapshot().await;
    assert_eq!(snapshot.state, SessionState::Paused);
    assert_eq!(snapshot.completed, vec![1]);
    assert_eq!(snapshot.time_remaining, Duration::ZERO);

    let notification = notifications.recv().await.unwrap();
    assert_eq!(notification.body, "Step 1 is complete");
}

#[tokio::test(start_paused = true)]
async fn test_first_tick_fires_one_period_after_start() {
    let (handle, _rx) = handle(&["Simmer 1 minute"]);
    handle.start().await;

    sleep(Duration::from_millis(500)).await;
    assert_eq!(handle.snapshot().await.time_remaining, Duration::from_secs(60));

    sleep(Duration::from_millis(1_000)).await;
    assert_eq!(handle.snapshot().await.time_remaining, Duration::from_secs(59));
}

#[tokio::test(start_paused = true)]
async fn test_no_tick_after_pause() {
    let (handle, _rx) = handle(&["Simmer 1 minute"]);
    handle.start().await;
    sleep(Duration::from_millis(10_500)).await;

    handle.pause().await;
    let paused_at = handle.snapshot().await.time_remaining;
    assert_eq!(paused_at, Duration::from_secs(50));

    sleep(Duration::from_secs(30)).await;
    let snapshot = handle.snapshot().await;
    assert_eq!(snapshot.state, SessionState::Paused);
    assert_eq!(snapshot.time_remaining, paused_at);
}

#[tokio::test(start_paused = true)]
async fn test_resume_continues_from_remaining_time() {
    let (handle, _rx) = handle(&["Simmer 1 minute"]);
    handle.start().await;
    sleep(Duration::from_millis(10_500)).await;
    handle.pause().await;

    handle.start().await;
    sleep(Duration::from_millis(5_500)).await;
    assert_eq!(
        handle.snapshot().await.time_remaining,
        Duration::from_secs(45)
    );
}

#[tokio::test(start_paused = true)]
async fn test_advance_auto_runs_next_step() {
    let (handle, mut notifications) = handle(&["Chop 1 minute", "Stir"]);
    let mut events = handle.subscribe();

    handle.advance().await;
    let snapshot = handle.snapshot().await;
    assert_eq!(snapshot.cursor, 1);
    assert_eq!(snapshot.state, SessionState::Running);

    sleep(Duration::from_millis(1_500)).await;
    let snapshot = handle.snapshot().await;
    assert_eq!(snapshot.state, SessionState::Paused);
    assert_eq!(snapshot.completed, vec![1, 2]);
    assert_eq!(notifications.recv().await.unwrap().body, "Step 2 is complete");

    handle.advance().await;
    let snapshot = handle.snapshot().await;
    assert_eq!(snapshot.state, SessionState::Finished);
    assert_eq!(snapshot.cursor, 2);

    let mut saw_finished = false;
    while let Ok(event) = events.try_recv() {
        if let SessionEvent::Finished { completed } = event {
            assert_eq!(completed, vec![1, 2]);
            saw_finished = true;
        }
    }
    assert!(saw_finished);
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_leaves_session_paused() {
    let (handle, _rx) = handle(&["Knead 10 minutes"]);
    handle.start().await;
    sleep(Duration::from_millis(3_500)).await;

    handle.shutdown().await;
    sleep(Duration::from_secs(10)).await;

    let snapshot = handle.snapshot().await;
    assert_eq!(snapshot.state, SessionState::Paused);
    assert_eq!(snapshot.time_remaining, Duration::from_secs(597));
}

#[tokio::test(start_paused = true)]
async fn test_restart_after_elapsed_step_is_noop() {
    let (handle, _rx) = handle(&["Rest 1 minute", "Serve"]);
    handle.start().await;
    sleep(Duration::from_millis(60_500)).await;
    assert_eq!(handle.snapshot().await.state, SessionState::Paused);

    handle.start().await;
    sleep(Duration::from_secs(5)).await;
    let snapshot = handle.snapshot().await;
    assert_eq!(snapshot.state, SessionState::Paused);
    assert_eq!(snapshot.cursor, 0);
}
