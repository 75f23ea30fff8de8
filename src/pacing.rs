//! Pauses between dealt cards.

use core::time::Duration;

/// Blocks the calling thread between dealt cards.
///
/// Any `FnMut(Duration)` closure is a pacer.
pub trait Pacer {
    /// Pauses for `delay`. A zero delay must return immediately.
    fn pause(&mut self, delay: Duration);
}

impl<F: FnMut(Duration)> Pacer for F {
    fn pause(&mut self, delay: Duration) {
        self(delay);
    }
}

/// Pacer that sleeps the current thread.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleep;

#[cfg(feature = "std")]
impl Pacer for ThreadSleep {
    fn pause(&mut self, delay: Duration) {
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}
