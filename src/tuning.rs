//! Data-driven game balance
//!
//! Every gameplay constant lives in [`Tuning`] so a session can be reshaped
//! from JSON without touching the simulation. Defaults come from [`crate::consts`].

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Which ball position is tested against the brick field each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrickProbe {
    /// Test the position held before this frame's move (one frame behind)
    #[default]
    BeforeMove,
    /// Test the position reached after this frame's move
    AfterMove,
}

/// Gameplay constants for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub arena_width: f32,
    pub arena_height: f32,

    pub ball_start: Vec2,
    pub ball_velocity: Vec2,
    pub ball_radius: f32,

    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Top edge of the paddle
    pub paddle_y: f32,
    pub paddle_angle_spread: f32,

    pub brick_rows: usize,
    pub brick_cols: usize,
    pub brick_width: f32,
    pub brick_height: f32,
    pub brick_padding: f32,
    pub brick_offset_top: f32,
    pub brick_offset_left: f32,
    /// Row colors (0xRRGGBB), cycled when there are more rows than colors
    pub row_colors: Vec<u32>,

    pub points_per_brick: u32,
    pub brick_probe: BrickProbe,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            ball_start: Vec2::new(BALL_START_X, BALL_START_Y),
            ball_velocity: Vec2::new(BALL_START_DX, BALL_START_DY),
            ball_radius: BALL_RADIUS,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_y: ARENA_HEIGHT - PADDLE_FLOOR_GAP,
            paddle_angle_spread: PADDLE_ANGLE_SPREAD,

            brick_rows: BRICK_ROWS,
            brick_cols: BRICK_COLS,
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_padding: BRICK_PADDING,
            brick_offset_top: BRICK_OFFSET_TOP,
            brick_offset_left: BRICK_OFFSET_LEFT,
            row_colors: BRICK_ROW_COLORS.to_vec(),

            points_per_brick: POINTS_PER_BRICK,
            brick_probe: BrickProbe::BeforeMove,
        }
    }
}

/// Reasons a tuning file is rejected
#[derive(Debug)]
pub enum TuningError {
    /// The JSON could not be parsed
    Parse(serde_json::Error),
    /// A dimension that must be strictly positive is not
    NonPositive(&'static str),
    /// The brick grid has no bricks
    EmptyGrid,
    /// A field does not fit inside the arena
    OutOfArena(&'static str),
    /// A position, offset or velocity component is NaN or infinite
    NotFinite(&'static str),
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::Parse(e) => write!(f, "invalid tuning JSON: {}", e),
            TuningError::NonPositive(field) => write!(f, "{} must be greater than zero", field),
            TuningError::EmptyGrid => write!(f, "brick grid must contain at least one brick"),
            TuningError::OutOfArena(field) => write!(f, "{} does not fit inside the arena", field),
            TuningError::NotFinite(field) => write!(f, "{} must be a finite number", field),
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TuningError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(e: serde_json::Error) -> Self {
        TuningError::Parse(e)
    }
}

impl Tuning {
    /// Parse and validate tuning from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        log::info!(
            "Loaded tuning: arena {}x{}, {}x{} bricks",
            tuning.arena_width,
            tuning.arena_height,
            tuning.brick_rows,
            tuning.brick_cols
        );
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that the arena can hold every entity this tuning describes
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("ball_radius", self.ball_radius),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("brick_width", self.brick_width),
            ("brick_height", self.brick_height),
        ];
        if let Some((field, _)) = positive
            .iter()
            .find(|(_, v)| !v.is_finite() || *v <= 0.0)
        {
            return Err(TuningError::NonPositive(*field));
        }
        let finite = [
            ("brick_padding", self.brick_padding),
            ("brick_offset_top", self.brick_offset_top),
            ("brick_offset_left", self.brick_offset_left),
            ("paddle_y", self.paddle_y),
            ("ball_start.x", self.ball_start.x),
            ("ball_start.y", self.ball_start.y),
            ("ball_velocity.x", self.ball_velocity.x),
            ("ball_velocity.y", self.ball_velocity.y),
        ];
        if let Some((field, _)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(TuningError::NotFinite(*field));
        }
        if self.brick_padding < 0.0 {
            return Err(TuningError::NonPositive("brick_padding"));
        }

        if self.brick_rows == 0 || self.brick_cols == 0 {
            return Err(TuningError::EmptyGrid);
        }

        if self.paddle_width > self.arena_width {
            return Err(TuningError::OutOfArena("paddle_width"));
        }
        if self.paddle_y < 0.0 || self.paddle_y + self.paddle_height > self.arena_height {
            return Err(TuningError::OutOfArena("paddle_y"));
        }

        let grid = self.grid_extent();
        if self.brick_offset_left < 0.0 || self.brick_offset_left + grid.x > self.arena_width {
            return Err(TuningError::OutOfArena("brick grid width"));
        }
        if self.brick_offset_top < 0.0 || self.brick_offset_top + grid.y > self.arena_height {
            return Err(TuningError::OutOfArena("brick grid height"));
        }

        let start = self.ball_start;
        if start.x < 0.0 || start.x > self.arena_width || start.y < 0.0 || start.y >= self.arena_height
        {
            return Err(TuningError::OutOfArena("ball_start"));
        }

        Ok(())
    }

    pub fn arena_size(&self) -> Vec2 {
        Vec2::new(self.arena_width, self.arena_height)
    }

    /// Total width and height covered by the brick grid
    pub fn grid_extent(&self) -> Vec2 {
        let cols = self.brick_cols as f32;
        let rows = self.brick_rows as f32;
        Vec2::new(
            cols * self.brick_width + (cols - 1.0).max(0.0) * self.brick_padding,
            rows * self.brick_height + (rows - 1.0).max(0.0) * self.brick_padding,
        )
    }

    /// Paddle x that centers the paddle in the arena
    pub fn paddle_start_x(&self) -> f32 {
        (self.arena_width - self.paddle_width) / 2.0
    }

    /// Color for a brick row; falls back to white when no colors are configured
    pub fn row_color(&self, row: usize) -> u32 {
        if self.row_colors.is_empty() {
            0xFFFFFF
        } else {
            self.row_colors[row % self.row_colors.len()]
        }
    }
}
