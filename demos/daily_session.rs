//! Daily Session
//!
//! This demo plays one day of the game against the bundled catalog.
//!
//! Key concepts:
//! - Daily gate backed by a JSON marker file
//! - Loading pause taken from configuration
//! - Guessing through a set and reading the summary
//! - Replaying a finished day with `review_today`
//!
//! Run with: cargo run --example daily_session
//! Set `RUST_LOG=daily_swipe=debug` to watch phase changes.

use daily_swipe::config::GameConfig;
use daily_swipe::core::{GamePhase, Guess, TriviaItem};
use daily_swipe::effects::{FileMarkerStore, GameEnv};
use daily_swipe::session::SessionController;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

// Guesses from the card alone, the way a casual player might.
fn hunch(item: &TriviaItem) -> Guess {
    if item.proposed_value.fract() == 0.0 && item.proposed_value as u64 % 2 == 0 {
        Guess::Higher
    } else {
        Guess::Lower
    }
}

async fn play(controller: &mut SessionController) {
    while let Some(item) = controller.current_item().cloned() {
        let (position, total) = controller.progress().unwrap_or_default();
        let guess = hunch(&item);

        println!(
            "  [{position}/{total}] {} {}: is it {} than {} {}?",
            item.emoji, item.name, guess, item.proposed_value, item.unit
        );

        if let Some(result) = controller.submit_guess(guess).await {
            let mark = if result.correct() { "✓" } else { "✗" };
            println!(
                "         {mark} actual {} {}. {}",
                item.actual_value, item.unit, item.fact
            );
        }
    }
}

fn print_summary(controller: &SessionController) {
    if let Some(summary) = controller.summary() {
        println!("\n=== {} ===", summary.label());
        println!(
            "{} {}/{}  {}",
            summary.verdict.emoji(),
            summary.score,
            summary.total,
            summary.verdict.message()
        );
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("daily_swipe=info")),
        )
        .init();

    println!("=== Daily Swipe ===\n");

    let marker_file = std::env::temp_dir().join("daily-swipe").join("markers.json");
    let config = GameConfig {
        loading_delay_ms: 200,
        ..GameConfig::default()
    };
    let env = GameEnv::builder()
        .markers(Arc::new(FileMarkerStore::new(&marker_file)))
        .configured(&config)
        .build()
        .expect("environment");

    let mut controller = SessionController::initialize(env, config).await;

    if controller.phase() == GamePhase::Start {
        println!("Today's challenge is already done. Reviewing it.\n");
        controller.review_today().await;
    }

    if let Some(trivia) = controller.trivia() {
        println!("Challenge #{}: {}", controller.active_challenge_id(), trivia.topic);
    }
    play(&mut controller).await;
    print_summary(&controller);

    println!("\nOne more for the road.\n");
    controller.play_next().await;
    if let Some(trivia) = controller.trivia() {
        println!("Challenge #{}: {}", controller.active_challenge_id(), trivia.topic);
    }
    play(&mut controller).await;
    print_summary(&controller);

    println!("\nMarker file: {}", marker_file.display());
}
