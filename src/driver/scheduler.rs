use std::time::{Duration, Instant};

use crate::foundation::error::{FrescoError, FrescoResult};

/// Frame-scheduling abstraction the animation driver runs on.
///
/// A scheduler hands out frame slots one at a time; the driver runs one step
/// per slot. Cancellation takes effect before the next slot is handed out,
/// and cancelling an already-cancelled scheduler is a no-op.
pub trait FrameScheduler {
    /// Wait until the next frame slot. Returns `false` once the schedule has
    /// been cancelled or exhausted.
    fn next_frame(&mut self) -> bool;

    /// Cancel the schedule. Idempotent.
    fn cancel(&mut self);

    /// Whether the schedule has been cancelled.
    fn is_cancelled(&self) -> bool;
}

/// Wall-clock scheduler pacing frames at a fixed rate.
///
/// `next_frame` sleeps until the next deadline. A late caller is not punished
/// with a burst of catch-up frames; the deadline is re-anchored to now.
#[derive(Clone, Debug)]
pub struct FixedRateScheduler {
    frame_interval: Duration,
    next_deadline: Option<Instant>,
    cancelled: bool,
}

impl FixedRateScheduler {
    /// Scheduler delivering `fps` frames per second.
    pub fn new(fps: f64) -> FrescoResult<Self> {
        if !(fps.is_finite() && fps > 0.0) {
            return Err(FrescoError::validation(
                "FixedRateScheduler fps must be finite and > 0",
            ));
        }
        Ok(Self {
            frame_interval: Duration::from_secs_f64(1.0 / fps),
            next_deadline: None,
            cancelled: false,
        })
    }
}

impl FrameScheduler for FixedRateScheduler {
    fn next_frame(&mut self) -> bool {
        if self.cancelled {
            return false;
        }
        let now = Instant::now();
        match self.next_deadline {
            None => {
                self.next_deadline = Some(now + self.frame_interval);
            }
            Some(deadline) => {
                if deadline > now {
                    std::thread::sleep(deadline - now);
                }
                let anchor = deadline.max(now);
                self.next_deadline = Some(anchor + self.frame_interval);
            }
        }
        true
    }

    fn cancel(&mut self) {
        self.cancelled = true;
    }

    fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

/// Deterministic scheduler delivering a fixed number of frame slots.
///
/// Used by tests and by bounded CLI renders: frames are handed out
/// immediately, with no wall-clock pacing, until the budget runs out.
#[derive(Clone, Copy, Debug)]
pub struct StepScheduler {
    remaining: u64,
    cancelled: bool,
}

impl StepScheduler {
    /// Scheduler that delivers exactly `frames` slots.
    pub fn new(frames: u64) -> Self {
        Self {
            remaining: frames,
            cancelled: false,
        }
    }

    /// Slots not yet handed out.
    pub fn remaining(&self) -> u64 {
        self.remaining
    }
}

impl FrameScheduler for StepScheduler {
    fn next_frame(&mut self) -> bool {
        if self.cancelled || self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }

    fn cancel(&mut self) {
        self.cancelled = true;
    }

    fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}
