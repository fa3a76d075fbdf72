//! Game state and core simulation types
//!
//! [`Session`] is the single authoritative owner of every entity. Outside the
//! simulation, collaborators only see borrowed [`Snapshot`]s.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bricks::BrickField;
use super::collision::{Rect, ball_bounds};
use crate::tuning::{Tuning, TuningError};

/// Overall status of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Laid out and waiting for the start command
    #[default]
    Waiting,
    /// Active gameplay
    Playing,
    /// Ball fell through the floor
    GameOver,
    /// Every brick destroyed
    Won,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Waiting => "waiting",
            GameStatus::Playing => "playing",
            GameStatus::GameOver => "gameOver",
            GameStatus::Won => "won",
        }
    }

    /// Terminal until an explicit reset
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameStatus::GameOver | GameStatus::Won)
    }
}

/// Things that happened during a single frame, in order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball reflected off a side wall or the ceiling
    WallBounce,
    /// Ball deflected by the paddle with the given new horizontal velocity
    PaddleHit { dx: f32 },
    /// A brick was destroyed
    BrickDestroyed { row: usize, col: usize, score: u32 },
    /// Ball crossed the floor
    BallLost,
    /// Last brick destroyed
    FieldCleared,
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Bounding square used for every rectangle test
    pub fn bounds(&self) -> Rect {
        ball_bounds(self.pos, self.radius)
    }
}

/// The player's paddle
///
/// Only the horizontal position changes, and only through
/// [`Paddle::move_to_pointer`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

impl Paddle {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Center the paddle under a pointer x, clamped to the arena
    pub fn move_to_pointer(&mut self, pointer_x: f32, arena_width: f32) {
        let max_x = (arena_width - self.width).max(0.0);
        self.x = (pointer_x - self.width / 2.0).clamp(0.0, max_x);
    }

    /// Normalized hit position across the paddle (0 = left edge, 1 = right edge)
    pub fn hit_position(&self, ball_x: f32) -> f32 {
        (ball_x - self.x) / self.width
    }
}

/// Brick score. Only ever grows within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Score(u32);

impl Score {
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Award points for a destroyed brick
    pub(crate) fn add(&mut self, points: u32) -> u32 {
        self.0 = self.0.saturating_add(points);
        self.0
    }
}

/// Score and status, the part of the session the UI displays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameState {
    pub score: Score,
    pub status: GameStatus,
}

/// Read-only view handed to render and UI collaborators
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Snapshot<'a> {
    pub arena: Vec2,
    pub ball: &'a Ball,
    pub paddle: &'a Paddle,
    pub bricks: &'a BrickField,
    pub state: GameState,
    pub frame: u64,
}

/// Complete session state (deterministic, serializable)
///
/// Serialize only: every session is built from a validated [`Tuning`]
/// through [`Session::new`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Session {
    pub(crate) tuning: Tuning,
    pub(crate) ball: Ball,
    pub(crate) paddle: Paddle,
    pub(crate) bricks: BrickField,
    pub(crate) state: GameState,
    /// Simulation frames run since the last reset
    pub(crate) frame: u64,
}

impl Session {
    /// Create a session laid out from `tuning`, waiting for start.
    /// Fails if the tuning does not describe a playable arena.
    pub fn new(tuning: Tuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self {
            ball: Self::initial_ball(&tuning),
            paddle: Self::initial_paddle(&tuning),
            bricks: BrickField::layout(&tuning),
            state: GameState::default(),
            frame: 0,
            tuning,
        })
    }

    fn initial_ball(tuning: &Tuning) -> Ball {
        Ball::new(tuning.ball_start, tuning.ball_velocity, tuning.ball_radius)
    }

    fn initial_paddle(tuning: &Tuning) -> Paddle {
        Paddle::new(
            tuning.paddle_start_x(),
            tuning.paddle_y,
            tuning.paddle_width,
            tuning.paddle_height,
        )
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn paddle(&self) -> &Paddle {
        &self.paddle
    }

    pub fn bricks(&self) -> &BrickField {
        &self.bricks
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn score(&self) -> u32 {
        self.state.score.value()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            arena: self.tuning.arena_size(),
            ball: &self.ball,
            paddle: &self.paddle,
            bricks: &self.bricks,
            state: self.state,
            frame: self.frame,
        }
    }

    /// `waiting -> playing`. Ignored from any other status.
    pub fn start(&mut self) -> bool {
        if self.state.status != GameStatus::Waiting {
            log::debug!("Ignoring start while {}", self.state.status.as_str());
            return false;
        }
        self.state.status = GameStatus::Playing;
        log::info!("Session started");
        true
    }

    /// `gameOver | won -> waiting`, rebuilding every entity from the tuning.
    /// Ignored from any other status.
    pub fn reset(&mut self) -> bool {
        if !self.state.status.is_terminal() {
            log::debug!("Ignoring reset while {}", self.state.status.as_str());
            return false;
        }
        log::info!(
            "Session reset after {} with score {}",
            self.state.status.as_str(),
            self.score()
        );
        self.ball = Self::initial_ball(&self.tuning);
        self.paddle = Self::initial_paddle(&self.tuning);
        self.bricks = BrickField::layout(&self.tuning);
        self.state = GameState::default();
        self.frame = 0;
        true
    }

    /// Paddle controller: apply a pointer x immediately, independent of frames
    pub fn pointer_moved(&mut self, pointer_x: f32) {
        if !pointer_x.is_finite() {
            log::debug!("Ignoring non-finite pointer x {}", pointer_x);
            return;
        }
        self.paddle.move_to_pointer(pointer_x, self.tuning.arena_width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_session_layout() {
        let session = Session::new(Tuning::default()).unwrap();
        assert_eq!(session.status(), GameStatus::Waiting);
        assert_eq!(session.score(), 0);
        assert_eq!(session.ball().pos, Vec2::new(600.0, 700.0));
        assert_eq!(session.ball().vel, Vec2::new(6.0, -6.0));
        assert_eq!(session.ball().radius(), 10.0);
        assert_eq!(session.paddle().x(), 450.0);
        assert_eq!(session.bricks().remaining(), 45);
    }

    #[test]
    fn test_start_only_from_waiting() {
        let mut session = Session::new(Tuning::default()).unwrap();
        assert!(session.start());
        assert_eq!(session.status(), GameStatus::Playing);

        // Second start is ignored
        assert!(!session.start());
        assert_eq!(session.status(), GameStatus::Playing);

        // Terminal states only leave through reset
        for terminal in [GameStatus::GameOver, GameStatus::Won] {
            session.state.status = terminal;
            assert!(!session.start());
            assert_eq!(session.status(), terminal);
        }
    }

    #[test]
    fn test_new_rejects_unplayable_tuning() {
        let empty = Tuning {
            brick_rows: 0,
            ..Default::default()
        };
        assert!(matches!(Session::new(empty), Err(TuningError::EmptyGrid)));

        let wide = Tuning {
            paddle_width: 1500.0,
            ..Default::default()
        };
        assert!(matches!(
            Session::new(wide),
            Err(TuningError::OutOfArena(_))
        ));

        let flat = Tuning {
            paddle_width: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            Session::new(flat),
            Err(TuningError::NonPositive("paddle_width"))
        ));
    }

    #[test]
    fn test_reset_only_from_terminal() {
        let mut session = Session::new(Tuning::default()).unwrap();
        assert!(!session.reset());
        assert_eq!(session.status(), GameStatus::Waiting);

        session.start();
        assert!(!session.reset());
        assert_eq!(session.status(), GameStatus::Playing);

        session.state.status = GameStatus::Won;
        assert!(session.reset());
        assert_eq!(session.status(), GameStatus::Waiting);
    }

    #[test]
    fn test_reset_restores_fresh_session() {
        let fresh = Session::new(Tuning::default()).unwrap();
        let mut session = fresh.clone();
        session.start();
        session.pointer_moved(100.0);
        session.ball.pos = Vec2::new(33.0, 749.0);
        session.ball.vel = Vec2::new(-2.5, 6.0);
        session.bricks.destroy(3);
        session.state.score.add(10);
        session.frame = 77;
        session.state.status = GameStatus::GameOver;

        assert!(session.reset());
        assert_eq!(session, fresh);
        assert_eq!(
            serde_json::to_string(&session).unwrap(),
            serde_json::to_string(&fresh).unwrap()
        );
    }

    #[test]
    fn test_saved_session_reloads_through_validation() {
        let session = Session::new(Tuning::default()).unwrap();
        let mut saved = serde_json::to_value(&session).unwrap();

        // The tuning is the only part that loads back in
        let tuning = Tuning::from_json(&saved["tuning"].to_string()).unwrap();
        assert_eq!(Session::new(tuning).unwrap(), session);

        saved["tuning"]["brick_rows"] = 0.into();
        assert!(matches!(
            Tuning::from_json(&saved["tuning"].to_string()),
            Err(TuningError::EmptyGrid)
        ));
    }

    #[test]
    fn test_pointer_clamps_paddle() {
        let mut session = Session::new(Tuning::default()).unwrap();

        session.pointer_moved(600.0);
        assert_eq!(session.paddle().x(), 450.0);

        session.pointer_moved(-50.0);
        assert_eq!(session.paddle().x(), 0.0);

        session.pointer_moved(5000.0);
        assert_eq!(session.paddle().x(), 900.0);

        session.pointer_moved(f32::NAN);
        assert_eq!(session.paddle().x(), 900.0);
    }

    #[test]
    fn test_hit_position() {
        let paddle = Paddle::new(450.0, 720.0, 300.0, 15.0);
        assert_eq!(paddle.hit_position(450.0), 0.0);
        assert_eq!(paddle.hit_position(600.0), 0.5);
        assert_eq!(paddle.hit_position(750.0), 1.0);
    }

    #[test]
    fn test_score_saturates() {
        let mut score = Score(u32::MAX - 5);
        assert_eq!(score.add(10), u32::MAX);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(GameStatus::GameOver.as_str(), "gameOver");
        assert!(GameStatus::Won.is_terminal());
        assert!(!GameStatus::Playing.is_terminal());
    }

    proptest! {
        #[test]
        fn prop_paddle_stays_in_arena(pointer in -5000.0f32..5000.0) {
            let mut session = Session::new(Tuning::default()).unwrap();
            session.pointer_moved(pointer);
            let x = session.paddle().x();
            prop_assert!(x >= 0.0);
            prop_assert!(x <= 1200.0 - 300.0);
        }
    }
}
