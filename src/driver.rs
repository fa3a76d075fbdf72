//! Frame scheduling
//!
//! The host owns the display-refresh callback; the driver decides whether a
//! delivered frame may run. Every `start` issues a new [`FrameHandle`] and
//! `stop` revokes it, so callbacks queued before a stop are dropped instead of
//! stepping a finished game.

use serde::{Deserialize, Serialize};

/// Identifies one run of the frame driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameHandle(u64);

impl FrameHandle {
    pub fn id(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct FrameDriver {
    active: Option<FrameHandle>,
    next_id: u64,
    frames: u64,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin delivering frames. Returns the live handle; starting an active
    /// driver keeps its current handle.
    pub fn start(&mut self) -> FrameHandle {
        if let Some(handle) = self.active {
            return handle;
        }
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.active = Some(handle);
        log::debug!("Frame driver started (handle {})", handle.0);
        handle
    }

    /// Cancel the live handle. Returns false if nothing was running.
    pub fn stop(&mut self) -> bool {
        match self.active.take() {
            Some(handle) => {
                log::debug!(
                    "Frame driver stopped (handle {}, {} frames)",
                    handle.0,
                    self.frames
                );
                true
            }
            None => false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn handle(&self) -> Option<FrameHandle> {
        self.active
    }

    /// Whether a frame delivered with `handle` should run
    pub fn accepts(&self, handle: FrameHandle) -> bool {
        self.active == Some(handle)
    }

    /// Total frames run across all starts
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub(crate) fn record_frame(&mut self) {
        self.frames += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_stop() {
        let mut driver = FrameDriver::new();
        assert!(!driver.is_active());
        assert!(!driver.stop());

        let handle = driver.start();
        assert!(driver.is_active());
        assert!(driver.accepts(handle));
        assert_eq!(driver.handle(), Some(handle));

        assert!(driver.stop());
        assert!(!driver.is_active());
        assert!(!driver.accepts(handle));
    }

    #[test]
    fn test_restart_issues_new_handle() {
        let mut driver = FrameDriver::new();
        let first = driver.start();
        assert_eq!(driver.start(), first);

        driver.stop();
        let second = driver.start();
        assert_ne!(first, second);
        assert!(!driver.accepts(first));
        assert!(driver.accepts(second));
    }

    #[test]
    fn test_frame_count() {
        let mut driver = FrameDriver::new();
        driver.start();
        driver.record_frame();
        driver.record_frame();
        assert_eq!(driver.frames(), 2);
    }
}
