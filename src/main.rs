//! Brick Breaker entry point
//!
//! Runs one headless demo session with the autopilot at the paddle and
//! prints a JSON summary. An optional first argument names a tuning file.

use anyhow::Context;
use serde::Serialize;

use brick_breaker::sim::autopilot;
use brick_breaker::{Game, GameEvent, GameStatus, ShapeRenderer, Tuning};

/// Give up on sessions that bounce forever without finishing
const MAX_FRAMES: u64 = 500_000;

#[derive(Serialize)]
struct Summary {
    status: &'static str,
    score: u32,
    frames: u64,
    bricks_remaining: usize,
    paddle_hits: u32,
    wall_bounces: u32,
}

fn load_tuning() -> anyhow::Result<Tuning> {
    match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading tuning file {}", path))?;
            Tuning::from_json(&json).with_context(|| format!("loading tuning from {}", path))
        }
        None => {
            log::info!("No tuning file given, using defaults");
            Ok(Tuning::default())
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Brick Breaker (headless demo) starting...");

    let tuning = load_tuning()?;
    let mut game = Game::new(tuning, ShapeRenderer::with_surface())?;
    game.redraw();

    let handle = game
        .start()
        .context("a fresh session must accept the start command")?;

    let mut paddle_hits = 0;
    let mut wall_bounces = 0;
    while game.driver().is_active() && game.session().frame() < MAX_FRAMES {
        // Input lands before the frame, as pointer events would
        let pointer = autopilot::target_pointer(game.session());
        game.pointer_moved(pointer);

        for event in game.on_frame(handle) {
            match event {
                GameEvent::PaddleHit { .. } => paddle_hits += 1,
                GameEvent::WallBounce => wall_bounces += 1,
                _ => {}
            }
        }
    }

    if game.status() == GameStatus::Playing {
        log::warn!("Demo stopped after {} frames without finishing", MAX_FRAMES);
    }

    let summary = Summary {
        status: game.status().as_str(),
        score: game.score(),
        frames: game.session().frame(),
        bricks_remaining: game.session().bricks().remaining(),
        paddle_hits,
        wall_bounces,
    };
    log::info!(
        "Session ended: {} with score {} after {} frames",
        summary.status,
        summary.score,
        summary.frames
    );
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
