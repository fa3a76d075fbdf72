//! Idle/demo mode - a pointer source that plays the game
//!
//! Produces the pointer x a player would send: under the point where the
//! ball will meet the paddle, shifted by a slow deterministic sway so the
//! ball comes off different parts of the paddle.

use super::state::Session;

/// Radians of sway phase per frame
const SWAY_RATE: f32 = 0.013;
/// Fraction of the paddle half-width the sway may use
const SWAY_REACH: f32 = 0.8;

/// Pointer x that keeps the paddle under the ball
pub fn target_pointer(session: &Session) -> f32 {
    let ball = session.ball();
    let paddle = session.paddle();
    let arena_width = session.tuning().arena_width;

    // Lead the ball only while it is falling toward the paddle
    let landing_x = if ball.vel.y > 0.0 {
        let drop = (paddle.y() - ball.radius() - ball.pos.y).max(0.0);
        let frames = drop / ball.vel.y;
        fold_into(
            ball.pos.x + ball.vel.x * frames,
            ball.radius(),
            arena_width - ball.radius(),
        )
    } else {
        ball.pos.x
    };

    let phase = session.frame() as f32 * SWAY_RATE;
    let sway = phase.sin() * 0.7 + (phase * 0.37).sin() * 0.3;
    landing_x - sway * paddle.width() * 0.5 * SWAY_REACH
}

/// Mirror `x` back into `[lo, hi]` the way wall bounces would
fn fold_into(x: f32, lo: f32, hi: f32) -> f32 {
    let span = hi - lo;
    if span <= 0.0 {
        return lo;
    }
    let m = (x - lo).rem_euclid(2.0 * span);
    if m <= span { lo + m } else { hi - (m - span) }
}
