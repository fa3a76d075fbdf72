//! Brick Breaker - A classic brick-breaking arcade simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, collisions, game state)
//! - `driver`: Frame scheduling tied to the game status
//! - `game`: Session orchestration for UI, input and render collaborators
//! - `renderer`: Render collaborator seam and vertex generation
//! - `tuning`: Data-driven game balance

pub mod driver;
pub mod game;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use driver::{FrameDriver, FrameHandle};
pub use game::Game;
pub use renderer::{NullRenderer, Render, ShapeRenderer};
pub use sim::{GameEvent, GameState, GameStatus, Session, Snapshot};
pub use tuning::{BrickProbe, Tuning, TuningError};

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 1200.0;
    pub const ARENA_HEIGHT: f32 = 750.0;

    /// Ball defaults - launched from just above the paddle, heading up-right
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_START_X: f32 = 600.0;
    pub const BALL_START_Y: f32 = 700.0;
    pub const BALL_START_DX: f32 = 6.0;
    pub const BALL_START_DY: f32 = -6.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 300.0;
    pub const PADDLE_HEIGHT: f32 = 15.0;
    /// Distance from the paddle's top edge to the arena floor
    pub const PADDLE_FLOOR_GAP: f32 = 30.0;
    /// Horizontal speed range produced by paddle hits: dx in [-SPREAD/2, SPREAD/2]
    pub const PADDLE_ANGLE_SPREAD: f32 = 8.0;

    /// Brick grid defaults
    pub const BRICK_ROWS: usize = 5;
    pub const BRICK_COLS: usize = 9;
    pub const BRICK_WIDTH: f32 = 100.0;
    pub const BRICK_HEIGHT: f32 = 30.0;
    pub const BRICK_PADDING: f32 = 20.0;
    pub const BRICK_OFFSET_TOP: f32 = 60.0;
    pub const BRICK_OFFSET_LEFT: f32 = 70.0;

    /// Row colors (0xRRGGBB), cycled top to bottom
    pub const BRICK_ROW_COLORS: [u32; 5] = [0xE74C3C, 0xE67E22, 0xF1C40F, 0x2ECC71, 0x3498DB];

    /// Score awarded per destroyed brick
    pub const POINTS_PER_BRICK: u32 = 10;
}
