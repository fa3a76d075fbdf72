//! Per-frame simulation step
//!
//! One frame is an ordered pipeline over a local copy of the ball:
//! advance, wall reflection, floor loss, paddle deflection, brick resolution.
//! Each stage consumes the ball produced by the previous one and the result is
//! committed back to the session once, so no stage ever reads a stale ball.

use glam::Vec2;

use super::bricks::BrickField;
use super::collision::{ball_ceiling_collision, ball_floor_crossed, ball_side_wall_collision};
use super::state::{Ball, GameEvent, GameStatus, Paddle, Session};
use crate::tuning::BrickProbe;

/// Advance the session by one frame. No-op unless the session is playing.
pub fn tick(session: &mut Session) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if session.state.status != GameStatus::Playing {
        return events;
    }
    session.frame += 1;

    let arena = session.tuning.arena_size();
    let before = session.ball;

    let mut ball = advance(before);

    if reflect_walls(&mut ball, arena) {
        events.push(GameEvent::WallBounce);
    }

    if ball_floor_crossed(ball.pos, arena.y) {
        session.ball = ball;
        session.state.status = GameStatus::GameOver;
        events.push(GameEvent::BallLost);
        log::info!(
            "Ball lost on frame {} with score {}",
            session.frame,
            session.score()
        );
        return events;
    }

    if let Some(dx) = deflect_off_paddle(
        &mut ball,
        &session.paddle,
        session.tuning.paddle_angle_spread,
    ) {
        events.push(GameEvent::PaddleHit { dx });
    }

    let probe = match session.tuning.brick_probe {
        BrickProbe::AfterMove => ball,
        BrickProbe::BeforeMove => before,
    };
    if let Some((row, col)) = hit_brick(&mut ball, probe, &mut session.bricks) {
        let score = session.state.score.add(session.tuning.points_per_brick);
        events.push(GameEvent::BrickDestroyed { row, col, score });
        log::debug!("Brick ({}, {}) destroyed, score {}", row, col, score);
    }

    session.ball = ball;

    if session.bricks.all_cleared() {
        session.state.status = GameStatus::Won;
        events.push(GameEvent::FieldCleared);
        log::info!(
            "Field cleared on frame {} with score {}",
            session.frame,
            session.score()
        );
    }

    events
}

/// One integration step, no sub-stepping
fn advance(mut ball: Ball) -> Ball {
    ball.pos += ball.vel;
    ball
}

/// Flip velocity components at the side walls and ceiling.
///
/// Position is not clamped back inside, so the ball may overshoot a wall by
/// up to one frame of travel.
fn reflect_walls(ball: &mut Ball, arena: Vec2) -> bool {
    let mut bounced = false;
    if ball_side_wall_collision(ball.pos, ball.radius(), arena.x) {
        ball.vel.x = -ball.vel.x;
        bounced = true;
    }
    if ball_ceiling_collision(ball.pos, ball.radius()) {
        ball.vel.y = -ball.vel.y;
        bounced = true;
    }
    bounced
}

/// Send the ball upward with a horizontal speed set by where it struck the
/// paddle: `dx = (hit - 0.5) * spread`, `hit` in [0, 1] from left to right.
fn deflect_off_paddle(ball: &mut Ball, paddle: &Paddle, spread: f32) -> Option<f32> {
    if !ball.bounds().overlaps(&paddle.rect()) {
        return None;
    }
    let hit = paddle.hit_position(ball.pos.x);
    ball.vel.x = (hit - 0.5) * spread;
    ball.vel.y = -ball.vel.y.abs();
    Some(ball.vel.x)
}

/// Destroy at most one brick: the first visible one, in row-major order,
/// overlapping the probe ball's bounding square. Reverses vertical velocity.
fn hit_brick(ball: &mut Ball, probe: Ball, bricks: &mut BrickField) -> Option<(usize, usize)> {
    let index = bricks.first_hit(&probe.bounds())?;
    let brick = bricks.destroy(index)?;
    let cell = (brick.row(), brick.col());
    ball.vel.y = -ball.vel.y;
    Some(cell)
}
