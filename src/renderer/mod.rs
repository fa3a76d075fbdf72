//! Render collaborator seam
//!
//! The simulation hands a [`Snapshot`] to a [`Render`] implementation once per
//! frame. [`ShapeRenderer`] turns it into a triangle list a GPU backend can
//! upload as-is.

pub mod shapes;
pub mod vertex;

pub use vertex::Vertex;

use crate::sim::{Rect, Snapshot};
use vertex::colors;

/// Triangle segments used for the ball
const BALL_SEGMENTS: u32 = 24;

/// Something that draws a frame
pub trait Render {
    fn render(&mut self, snapshot: &Snapshot<'_>);
}

/// Draws nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Render for NullRenderer {
    fn render(&mut self, _snapshot: &Snapshot<'_>) {}
}

/// Target buffer a [`ShapeRenderer`] draws into
#[derive(Debug, Default, Clone)]
pub struct VertexSurface {
    pub vertices: Vec<Vertex>,
    /// Frame number of the last snapshot drawn
    pub frame: u64,
}

/// Builds vertices for the arena, visible bricks, paddle and ball
#[derive(Debug, Default)]
pub struct ShapeRenderer {
    surface: Option<VertexSurface>,
    skipped: u64,
}

impl ShapeRenderer {
    /// Renderer without a surface; every render is skipped until one is attached
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_surface() -> Self {
        Self {
            surface: Some(VertexSurface::default()),
            skipped: 0,
        }
    }

    pub fn attach(&mut self, surface: VertexSurface) {
        self.surface = Some(surface);
    }

    pub fn detach(&mut self) -> Option<VertexSurface> {
        self.surface.take()
    }

    pub fn surface(&self) -> Option<&VertexSurface> {
        self.surface.as_ref()
    }

    /// Frames skipped for lack of a surface
    pub fn skipped(&self) -> u64 {
        self.skipped
    }
}

impl Render for ShapeRenderer {
    fn render(&mut self, snapshot: &Snapshot<'_>) {
        let Some(surface) = self.surface.as_mut() else {
            self.skipped += 1;
            log::trace!("No surface attached, skipping frame {}", snapshot.frame);
            return;
        };

        let vertices = &mut surface.vertices;
        vertices.clear();

        let arena = Rect::new(0.0, 0.0, snapshot.arena.x, snapshot.arena.y);
        vertices.extend(shapes::rect(&arena, colors::BACKGROUND));

        for brick in snapshot.bricks.visible() {
            vertices.extend(shapes::rect(brick.rect(), brick.color().to_rgba()));
        }

        vertices.extend(shapes::rect(&snapshot.paddle.rect(), colors::PADDLE));

        vertices.extend(shapes::circle(
            snapshot.ball.pos,
            snapshot.ball.radius(),
            colors::BALL,
            BALL_SEGMENTS,
        ));

        surface.frame = snapshot.frame;
    }
}
