//! Pause sources for the renderer.
//!
//! The renderer never sleeps directly; it asks a `Pause` implementation to
//! wait. The binary uses `ThreadPause`, tests use `RecordingPause`.

use std::thread;
use std::time::Duration;

/// Something that can suspend the current run for a given duration.
pub trait Pause {
    /// Wait for `duration` before returning.
    fn pause(&mut self, duration: Duration);
}

/// Blocks the current thread with `std::thread::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadPause;

impl Pause for ThreadPause {
    fn pause(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Records requested pauses without waiting.
///
/// Used to assert timing behaviour without spending real time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingPause {
    /// Every requested pause, in order.
    pub requests: Vec<Duration>,
}

impl RecordingPause {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum of all requested pauses.
    pub fn total(&self) -> Duration {
        self.requests.iter().sum()
    }
}

impl Pause for RecordingPause {
    fn pause(&mut self, duration: Duration) {
        self.requests.push(duration);
    }
}

impl<P: Pause + ?Sized> Pause for &mut P {
    fn pause(&mut self, duration: Duration) {
        (**self).pause(duration);
    }
}
