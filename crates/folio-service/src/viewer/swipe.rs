//! Horizontal swipe detection for touch navigation.

/// Distance in px that always counts as a swipe.
pub const MIN_SWIPE_DISTANCE: f64 = 50.0;
/// Velocity in px/ms that counts as a flick.
pub const MIN_SWIPE_VELOCITY: f64 = 0.3;
/// Shortest distance in px a flick must still cover.
pub const MIN_FLICK_DISTANCE: f64 = 20.0;

/// Outcome of a completed touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Finger moved left: show the next photo.
    Next,
    /// Finger moved right: show the previous photo.
    Prev,
    /// Not a swipe.
    None,
}

#[derive(Debug, Clone, Copy)]
struct Sample {
    x: f64,
    at_ms: u64,
}

/// Tracks one touch at a time.
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    start: Option<Sample>,
    last: Option<Sample>,
}

impl SwipeTracker {
    /// Idle tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Touch began at `x`.
    pub fn start(&mut self, x: f64, at_ms: u64) {
        let sample = Sample { x, at_ms };
        self.start = Some(sample);
        self.last = Some(sample);
    }

    /// Touch moved to `x`. Ignored without a preceding start.
    pub fn move_to(&mut self, x: f64, at_ms: u64) {
        if self.start.is_some() {
            self.last = Some(Sample { x, at_ms });
        }
    }

    /// Touch ended at `x`; classify and reset.
    pub fn end(&mut self, x: f64, at_ms: u64) -> Swipe {
        let Some(start) = self.start.take() else {
            return Swipe::None;
        };
        self.last = None;

        let delta = x - start.x;
        let distance = delta.abs();
        let elapsed = at_ms.saturating_sub(start.at_ms).max(1) as f64;
        let velocity = distance / elapsed;

        let is_swipe = distance > MIN_SWIPE_DISTANCE
            || (velocity > MIN_SWIPE_VELOCITY && distance >= MIN_FLICK_DISTANCE);
        if !is_swipe {
            Swipe::None
        } else if delta < 0.0 {
            Swipe::Next
        } else {
            Swipe::Prev
        }
    }

    /// Horizontal offset since the touch began, for drag feedback.
    pub fn offset(&self) -> f64 {
        match (self.start, self.last) {
            (Some(start), Some(last)) => last.x - start.x,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gesture(from: f64, to: f64, duration_ms: u64) -> Swipe {
        let mut tracker = SwipeTracker::new();
        tracker.start(from, 1_000);
        tracker.move_to((from + to) / 2.0, 1_000 + duration_ms / 2);
        tracker.end(to, 1_000 + duration_ms)
    }

    #[test]
    fn long_drag_is_a_swipe_regardless_of_speed() {
        assert_eq!(gesture(300.0, 200.0, 2_000), Swipe::Next);
        assert_eq!(gesture(200.0, 300.0, 2_000), Swipe::Prev);
    }

    #[test]
    fn short_fast_flick_counts() {
        // 30 px in 50 ms = 0.6 px/ms
        assert_eq!(gesture(100.0, 70.0, 50), Swipe::Next);
    }

    #[test]
    fn tiny_or_slow_moves_are_ignored() {
        assert_eq!(gesture(100.0, 90.0, 10), Swipe::None);
        assert_eq!(gesture(100.0, 60.0, 1_000), Swipe::None);
    }

    #[test]
    fn end_without_start_is_none() {
        let mut tracker = SwipeTracker::new();
        tracker.move_to(10.0, 5);
        assert_eq!(tracker.offset(), 0.0);
        assert_eq!(tracker.end(500.0, 10), Swipe::None);
    }
}
