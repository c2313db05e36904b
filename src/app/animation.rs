//! Repeating timer that decides which animation frame is due

use std::time::{Duration, Instant};

pub const FRAME_INTERVAL: Duration = Duration::from_millis(100);

pub struct FrameClock {
    interval: Duration,
    frame_count: usize,
    next_frame: usize,
    last_tick: Option<Instant>,
}

impl FrameClock {
    pub fn new(frame_count: usize, interval: Duration) -> Self {
        FrameClock {
            interval,
            frame_count,
            next_frame: 0,
            last_tick: None,
        }
    }

    /// Returns the frame to draw if a tick is due at `now`.
    /// Frames come out in order, one per tick, and start over after the last.
    pub fn poll(&mut self, now: Instant) -> Option<usize> {
        if self.frame_count == 0 {
            return None;
        }
        if let Some(last) = self.last_tick {
            if now.duration_since(last) < self.interval {
                return None;
            }
        }
        self.last_tick = Some(now);

        let frame = self.next_frame;
        self.next_frame += 1;
        if self.next_frame == self.frame_count {
            self.next_frame = 0;
        }
        if frame == 0 && self.frame_count > 1 {
            log::info!("Starting animation of {} frames", self.frame_count);
        }
        Some(frame)
    }

    /// How long until the next tick is due.
    pub fn until_next(&self, now: Instant) -> Duration {
        match self.last_tick {
            Some(last) => self.interval.saturating_sub(now.duration_since(last)),
            None => Duration::ZERO,
        }
    }
}
