//! Time utilities for tick budgeting

use std::time::{Duration, Instant};

/// A simple timer for measuring durations
#[derive(Debug, Clone)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn elapsed_micros(&self) -> u64 {
        self.start.elapsed().as_micros() as u64
    }

    /// Whether more than `budget` has passed since the timer started
    pub fn exceeded(&self, budget: Duration) -> bool {
        self.elapsed() > budget
    }

    pub fn reset(&mut self) {
        self.start = Instant::now();
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_check() {
        let mut timer = Timer::new();
        assert!(!timer.exceeded(Duration::from_secs(3600)));
        std::thread::sleep(Duration::from_millis(2));
        assert!(timer.exceeded(Duration::from_micros(1)));
        timer.reset();
        assert!(timer.elapsed() < Duration::from_secs(3600));
    }
}
