// src/throttle.rs

use std::thread;
use std::time::Duration;

/// Pacing between consecutive image downloads.
pub trait Throttle {
    fn pause(&mut self);
}

/// Sleeps the same interval every time. Not adaptive.
#[derive(Debug, Clone, Copy)]
pub struct FixedInterval {
    pub interval: Duration,
}

impl FixedInterval {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }
}

impl Throttle for FixedInterval {
    fn pause(&mut self) {
        if !self.interval.is_zero() {
            thread::sleep(self.interval);
        }
    }
}

/// Never waits.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoThrottle;

impl Throttle for NoThrottle {
    fn pause(&mut self) {}
}
