// ABOUTME: Interactive guided cooking command for recipe-cli
// ABOUTME: Runs a timed session and maps keyboard input to start, pause and next step
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use recipe_session::cooking::{
    CookingSession, CookingSessionHandle, SessionEvent, SessionSettings, SessionState,
};
use recipe_session::notifications::{ChannelNotifier, ScheduledNotification};
use std::sync::Arc;
use tokio::io::{self, AsyncBufReadExt, BufReader};
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, info};

use super::recipes::orchestrator;
use crate::helpers::display::{display_event, display_notification, display_snapshot};
use crate::Context;

/// Keyboard command during a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Next,
    Start,
    Pause,
    Quit,
    Unknown,
}

impl Input {
    fn parse(line: &str) -> Self {
        match line.trim().to_lowercase().as_str() {
            "" | "n" | "next" => Self::Next,
            "s" | "start" => Self::Start,
            "p" | "pause" => Self::Pause,
            "q" | "quit" => Self::Quit,
            _ => Self::Unknown,
        }
    }
}

/// Cook recipe `id` interactively
pub async fn run(context: &Context, id: u64) -> Result<()> {
    let resolved = orchestrator(context)?.resolve_recipe(id).await?;

    let (notifier, notifications) = ChannelNotifier::new();
    let session = CookingSession::for_recipe(
        &resolved.detail,
        Arc::new(notifier),
        SessionSettings::from(&context.config.cooking),
    );
    let handle = CookingSessionHandle::new(session, context.config.cooking.tick_interval());

    let printer = tokio::spawn(print_updates(handle.subscribe(), notifications));

    display_snapshot(&handle.snapshot().await);
    println!("Enter/n: next step, s: start, p: pause, q: quit");
    info!(recipe_id = id, "Cooking session opened");

    let mut lines = BufReader::new(io::stdin()).lines();
    while handle.snapshot().await.state != SessionState::Finished {
        let Some(line) = lines.next_line().await? else {
            break;
        };

        match Input::parse(&line) {
            Input::Next => handle.advance().await,
            Input::Start => handle.start().await,
            Input::Pause => handle.pause().await,
            Input::Quit => break,
            Input::Unknown => {
                println!("Unknown command {:?}", line.trim());
                continue;
            }
        }
        display_snapshot(&handle.snapshot().await);
    }

    handle.shutdown().await;
    drop(handle);
    printer.abort();
    debug!(recipe_id = id, "Cooking session closed");
    Ok(())
}

/// Print session events and step notifications as they arrive
async fn print_updates(
    mut events: broadcast::Receiver<SessionEvent>,
    mut notifications: mpsc::UnboundedReceiver<ScheduledNotification>,
) {
    loop {
        tokio::select! {
            event = events.recv() => match event {
                Ok(event) => display_event(&event),
                Err(broadcast::error::RecvError::Lagged(_)) => {}
                Err(broadcast::error::RecvError::Closed) => break,
            },
            Some(notification) = notifications.recv() => display_notification(&notification),
        }
    }
}
