//! Session orchestration
//!
//! [`Game`] is what a host embeds: it owns the session, the frame driver and
//! the render collaborator. UI commands and pointer input arrive through its
//! methods; the host's refresh callback calls [`Game::on_frame`] with the
//! handle it was scheduled under.
//!
//! Pointer input is applied the moment it arrives, not on the next frame, and
//! may land any number of times between two frames.

use crate::driver::{FrameDriver, FrameHandle};
use crate::renderer::{NullRenderer, Render};
use crate::sim::{GameEvent, GameState, GameStatus, Session, Snapshot, tick};
use crate::tuning::{Tuning, TuningError};

pub struct Game<R: Render = NullRenderer> {
    session: Session,
    driver: FrameDriver,
    renderer: R,
}

impl Game<NullRenderer> {
    /// Game without a render collaborator
    pub fn headless(tuning: Tuning) -> Result<Self, TuningError> {
        Self::new(tuning, NullRenderer)
    }
}

impl<R: Render> Game<R> {
    /// Fails if `tuning` does not validate
    pub fn new(tuning: Tuning, renderer: R) -> Result<Self, TuningError> {
        Ok(Self {
            session: Session::new(tuning)?,
            driver: FrameDriver::new(),
            renderer,
        })
    }

    /// UI `start` command. Returns the handle frames must be delivered with,
    /// or `None` if the command was ignored.
    pub fn start(&mut self) -> Option<FrameHandle> {
        if !self.session.start() {
            return None;
        }
        Some(self.driver.start())
    }

    /// UI `reset` command. Returns false if the command was ignored.
    pub fn reset(&mut self) -> bool {
        if !self.session.reset() {
            return false;
        }
        self.driver.stop();
        true
    }

    /// Input collaborator: horizontal pointer position in surface coordinates
    pub fn pointer_moved(&mut self, pointer_x: f32) {
        self.session.pointer_moved(pointer_x);
    }

    /// Host refresh callback: one simulation step, then one render.
    ///
    /// Frames carrying a stale handle, or arriving while the driver is
    /// stopped, are dropped. The driver stops itself as soon as the session
    /// leaves `playing`.
    pub fn on_frame(&mut self, handle: FrameHandle) -> Vec<GameEvent> {
        if !self.driver.accepts(handle) {
            log::trace!("Dropping frame for stale handle {}", handle.id());
            return Vec::new();
        }

        let events = tick(&mut self.session);
        self.driver.record_frame();
        self.renderer.render(&self.session.snapshot());

        if self.session.status() != GameStatus::Playing {
            self.driver.stop();
        }
        events
    }

    /// Render the current state outside the frame loop (e.g. while waiting)
    pub fn redraw(&mut self) {
        self.renderer.render(&self.session.snapshot());
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        self.session.snapshot()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn state(&self) -> GameState {
        self.session.state()
    }

    pub fn status(&self) -> GameStatus {
        self.session.status()
    }

    pub fn score(&self) -> u32 {
        self.session.score()
    }

    /// Live frame handle, if the driver is running
    pub fn handle(&self) -> Option<FrameHandle> {
        self.driver.handle()
    }

    pub fn driver(&self) -> &FrameDriver {
        &self.driver
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}
