// ABOUTME: Local notification scheduling for cooking step completion
// ABOUTME: Scheduler trait plus tracing-backed and channel-backed implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Notification scheduling
//!
//! Scheduling is fire-and-forget: the session logs a failed `schedule` call
//! and carries on.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::info;

/// A user-facing notification to deliver after `delay`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledNotification {
    /// Notification title (the recipe title)
    pub title: String,
    /// Notification body
    pub body: String,
    /// Delay before delivery
    pub delay: Duration,
}

impl ScheduledNotification {
    /// Notification announcing that step `step_number` is done
    #[must_use]
    pub fn step_complete(title: &str, step_number: u32, delay: Duration) -> Self {
        Self {
            title: title.to_owned(),
            body: format!("Step {step_number} is complete"),
            delay,
        }
    }
}

/// Platform notification facility
pub trait NotificationScheduler: Send + Sync {
    /// Hand `notification` to the platform for delivery
    ///
    /// # Errors
    ///
    /// Returns an error if the platform refuses the notification
    fn schedule(&self, notification: &ScheduledNotification) -> AppResult<()>;
}

/// Scheduler that only records notifications in the log
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl NotificationScheduler for TracingNotifier {
    fn schedule(&self, notification: &ScheduledNotification) -> AppResult<()> {
        info!(
            title = %notification.title,
            body = %notification.body,
            delay_secs = notification.delay.as_secs(),
            "Notification scheduled"
        );
        Ok(())
    }
}

/// Scheduler that forwards notifications into an unbounded channel
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    sender: mpsc::UnboundedSender<ScheduledNotification>,
}

impl ChannelNotifier {
    /// Create a notifier and the receiving end of its channel
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<ScheduledNotification>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl NotificationScheduler for ChannelNotifier {
    fn schedule(&self, notification: &ScheduledNotification) -> AppResult<()> {
        self.sender
            .send(notification.clone())
            .map_err(|_| AppError::internal("notification receiver dropped"))
    }
}
