use std::cell::Cell;
use std::time::Instant;

/// Measures the wall-clock time of one scope. The elapsed seconds land
/// in the slot when the guard drops, which also happens while
/// unwinding, so a failing strategy still leaves its interval behind.
pub struct ScopedTimer<'a> {
    start: Instant,
    interval: &'a Cell<f64>,
}

impl<'a> ScopedTimer<'a> {
    pub fn new(interval: &'a Cell<f64>) -> Self {
        Self {
            start: Instant::now(),
            interval,
        }
    }
}

impl Drop for ScopedTimer<'_> {
    fn drop(&mut self) {
        self.interval.set(self.start.elapsed().as_secs_f64());
    }
}
