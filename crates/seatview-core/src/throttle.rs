use instant::Instant;
use std::time::Duration;

/// Coalesces values arriving within one animation frame; the latest wins.
#[derive(Debug)]
pub struct FrameThrottle<T> {
    latest: Option<T>,
    scheduled: bool,
}

impl<T> Default for FrameThrottle<T> {
    fn default() -> Self {
        Self {
            latest: None,
            scheduled: false,
        }
    }
}

impl<T> FrameThrottle<T> {
    /// Store `value`; returns `true` when a frame has to be requested.
    pub fn push(&mut self, value: T) -> bool {
        self.latest = Some(value);
        !std::mem::replace(&mut self.scheduled, true)
    }

    /// Called from the frame callback.
    pub fn take(&mut self) -> Option<T> {
        self.scheduled = false;
        self.latest.take()
    }

    pub fn clear(&mut self) {
        self.latest = None;
    }

    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }
}

/// Leading-edge throttle: lets one call through, then drops calls until
/// `interval` has elapsed.
#[derive(Clone, Debug)]
pub struct IntervalThrottle {
    interval: Duration,
    last: Option<Instant>,
}

impl IntervalThrottle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    pub fn ready(&mut self, now: Instant) -> bool {
        match self.last {
            Some(last) if now < last + self.interval => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }
}
