//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame, no wall-clock time
//! - Stable iteration order (row-major brick scan)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod bricks;
pub mod collision;
pub mod state;
pub mod tick;

pub use bricks::{Brick, BrickColor, BrickField};
pub use collision::{Rect, ball_bounds, overlaps};
pub use state::{Ball, GameEvent, GameState, GameStatus, Paddle, Score, Session, Snapshot};
pub use tick::tick;
