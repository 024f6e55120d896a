//! Timer abstraction
//!
//! The grid asks a [`Scheduler`] for a repeating callback instead of talking to
//! `setInterval` directly, so the animation can be driven by the browser, by a
//! native loop or by a test clock.

pub mod interval;
pub mod manual;

pub use interval::IntervalScheduler;
pub use manual::ManualScheduler;

use crate::core::Result;

pub type TickCallback = Box<dyn FnMut()>;

/// Identifies one repeating timer. Only meaningful to the scheduler that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(i32);

impl TimerHandle {
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    pub fn id(&self) -> i32 {
        self.0
    }
}

pub trait Scheduler {
    /// Run `callback` every `interval_ms` until cancelled.
    fn schedule(&mut self, interval_ms: u32, callback: TickCallback) -> Result<TimerHandle>;

    /// Stop a timer. Unknown handles are ignored.
    fn cancel(&mut self, handle: TimerHandle);
}
