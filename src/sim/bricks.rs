//! The brick field
//!
//! Bricks are laid out once, row-major, and never move or resize. Only their
//! visibility changes during a session.

use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::tuning::Tuning;

/// Display color (0xRRGGBB). Opaque to the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BrickColor(pub u32);

impl BrickColor {
    /// Normalized RGBA
    pub fn to_rgba(self) -> [f32; 4] {
        let r = ((self.0 >> 16) & 0xFF) as f32 / 255.0;
        let g = ((self.0 >> 8) & 0xFF) as f32 / 255.0;
        let b = (self.0 & 0xFF) as f32 / 255.0;
        [r, g, b, 1.0]
    }
}

/// A single destructible brick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    rect: Rect,
    row: usize,
    col: usize,
    color: BrickColor,
    visible: bool,
}

impl Brick {
    pub fn rect(&self) -> &Rect {
        &self.rect
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn color(&self) -> BrickColor {
        self.color
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Fixed grid of bricks, stored row-major
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrickField {
    bricks: Vec<Brick>,
    rows: usize,
    cols: usize,
}

impl BrickField {
    /// Lay out a fresh, fully visible grid
    pub fn layout(tuning: &Tuning) -> Self {
        let mut bricks = Vec::with_capacity(tuning.brick_rows * tuning.brick_cols);
        for row in 0..tuning.brick_rows {
            let y = tuning.brick_offset_top + row as f32 * (tuning.brick_height + tuning.brick_padding);
            let color = BrickColor(tuning.row_color(row));
            for col in 0..tuning.brick_cols {
                let x =
                    tuning.brick_offset_left + col as f32 * (tuning.brick_width + tuning.brick_padding);
                bricks.push(Brick {
                    rect: Rect::new(x, y, tuning.brick_width, tuning.brick_height),
                    row,
                    col,
                    color,
                    visible: true,
                });
            }
        }

        Self {
            bricks,
            rows: tuning.brick_rows,
            cols: tuning.brick_cols,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    /// All bricks in scan order (row 0 left to right, then row 1, ...)
    pub fn iter(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter()
    }

    pub fn visible(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter().filter(|b| b.visible)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Brick> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.bricks.get(row * self.cols + col)
    }

    /// Number of bricks still standing
    pub fn remaining(&self) -> usize {
        self.visible().count()
    }

    /// True once every brick has been destroyed
    pub fn all_cleared(&self) -> bool {
        self.bricks.iter().all(|b| !b.visible)
    }

    /// Index of the first visible brick (in scan order) overlapping `bounds`
    pub fn first_hit(&self, bounds: &Rect) -> Option<usize> {
        self.bricks
            .iter()
            .position(|b| b.visible && b.rect.overlaps(bounds))
    }

    /// Hide a brick, returning it if it was still visible
    pub(crate) fn destroy(&mut self, index: usize) -> Option<&Brick> {
        let brick = self.bricks.get_mut(index)?;
        if !brick.visible {
            return None;
        }
        brick.visible = false;
        Some(&*brick)
    }
}
