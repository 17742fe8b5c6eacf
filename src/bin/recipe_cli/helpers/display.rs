// ABOUTME: Output formatting helpers for recipe-cli
// ABOUTME: Consistent display of listings, recipe details, favorites and session state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_session::cooking::{SessionEvent, SessionSnapshot, SessionState};
use recipe_session::models::{FavoriteEntry, Nutrition, RecipeSummary};
use recipe_session::notifications::ScheduledNotification;
use recipe_session::recipes::ResolvedRecipe;
use std::time::Duration;

/// `mm:ss`, or `h:mm:ss` past an hour
fn format_clock(duration: Duration) -> String {
    let total = duration.as_secs();
    let (hours, minutes, seconds) = (total / 3600, (total % 3600) / 60, total % 60);
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes:02}:{seconds:02}")
    }
}

/// Display a recipe listing
pub fn display_summaries(heading: &str, recipes: &[RecipeSummary]) {
    println!("\n{heading}");
    println!("{}", "=".repeat(60));
    if recipes.is_empty() {
        println!("   (no recipes)");
        return;
    }
    for recipe in recipes {
        let ready = recipe
            .ready_minutes
            .map_or_else(|| "?".to_owned(), |m| format!("{m} min"));
        println!(
            "   {:>8}  {}  [{}, {}]",
            recipe.id, recipe.title, ready, recipe.difficulty
        );
    }
}

/// Display a resolved recipe
pub fn display_recipe(resolved: &ResolvedRecipe) {
    let detail = &resolved.detail;
    let marker = if resolved.is_favorite { "  (favorite)" } else { "" };
    println!("\n{}{marker}", detail.title);
    println!("{}", "=".repeat(60));
    println!("   Ready in: {} min", detail.ready_minutes);
    println!("   Servings: {}", detail.servings);
    if let Some(calories) = detail.nutrition.as_ref().and_then(Nutrition::calories) {
        println!("   Calories: {calories:.0}");
    }

    println!("\nIngredients:");
    for ingredient in &detail.ingredients {
        println!("   - {}", ingredient.original);
    }

    println!("\nSteps:");
    for step in detail.first_group_steps() {
        println!("   {}. {}", step.number, step.text);
    }

    if let Some(video) = &resolved.video {
        println!("\nVideo: {} ({})", video.title, video.watch_url());
    }
}

/// Display the favorites list
pub fn display_favorites(favorites: &[FavoriteEntry]) {
    println!("\nFavorites");
    println!("{}", "=".repeat(60));
    if favorites.is_empty() {
        println!("   (none yet)");
        return;
    }
    for entry in favorites {
        println!(
            "   {:>8}  {}  [{} min, added {}]",
            entry.recipe_id,
            entry.title,
            entry.ready_minutes,
            entry.date_added.format("%Y-%m-%d %H:%M UTC")
        );
    }
}

/// Display the session state after a command
pub fn display_snapshot(snapshot: &SessionSnapshot) {
    if snapshot.state == SessionState::Finished {
        println!(
            "\n{}: all {} steps done",
            snapshot.title, snapshot.total_steps
        );
        return;
    }

    if let Some(step) = &snapshot.current_step {
        println!(
            "\nStep {}/{}: {}",
            snapshot.cursor + 1,
            snapshot.total_steps,
            step.text
        );
    }
    println!(
        "   {} of {} [{:?}]",
        format_clock(snapshot.time_remaining),
        format_clock(snapshot.step_duration),
        snapshot.state
    );
}

/// Display one session event
pub fn display_event(event: &SessionEvent) {
    match event {
        SessionEvent::Ticked {
            step_number,
            remaining,
        } => println!("   step {step_number}: {} left", format_clock(*remaining)),
        SessionEvent::StepCompleted { step_number } => {
            println!("   step {step_number} completed");
        }
        SessionEvent::Finished { completed } => {
            println!("   finished, completed steps {completed:?}");
        }
        SessionEvent::StepStarted { .. } | SessionEvent::Paused { .. } => {}
    }
}

/// Display a delivered notification
pub fn display_notification(notification: &ScheduledNotification) {
    println!("\n>> {}: {}", notification.title, notification.body);
}
