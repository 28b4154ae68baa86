use std::time::Duration;

use bitflags::bitflags;

bitflags! {
    /// Flags reported by a draggable after each frame tick
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ChangeFlags: u8 {
        /// The offset changed and needs repainting
        const NEEDS_PAINT = 0b01;
        /// An animation is still running and wants another frame
        const ANIMATING   = 0b10;
    }
}

impl ChangeFlags {
    pub fn needs_paint(&self) -> bool {
        self.contains(ChangeFlags::NEEDS_PAINT)
    }

    pub fn wants_frame(&self) -> bool {
        self.contains(ChangeFlags::ANIMATING)
    }
}

/// Deterministic frame clock advancing by a fixed interval per frame.
#[derive(Clone, Debug)]
pub struct FrameClock {
    interval: Duration,
    now: Duration,
    frame: u64,
}

impl FrameClock {
    /// Clock ticking at roughly 60 frames per second
    pub const DEFAULT_INTERVAL: Duration = Duration::from_micros(16_667);

    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            now: Duration::ZERO,
            frame: 0,
        }
    }

    /// Advance one frame and return the time elapsed since the previous one
    pub fn tick(&mut self) -> Duration {
        self.now += self.interval;
        self.frame += 1;
        self.interval
    }

    /// Time of the latest frame since the clock started
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of frames ticked so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INTERVAL)
    }
}
