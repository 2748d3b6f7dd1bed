//! Time-based interpolation for a single count-up.
//!
//! A [`CountUp`] is sampled with the timestamp of each display refresh. The
//! first sample fixes the start time, so the animation always begins at zero
//! no matter how late the first frame arrives. Progress is clamped to
//! `[0, 1]` and the sample at or past the end snaps to the exact target.

/// Length of one count-up animation.
pub const DEFAULT_DURATION_MS: f64 = 2000.0;

/// One sampled point of a count-up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub value: u64,
    pub progress: f64,
    pub finished: bool,
}

#[derive(Debug, Clone)]
pub struct CountUp {
    target: u64,
    duration_ms: f64,
    started_at: Option<f64>,
}

impl CountUp {
    pub fn new(target: u64, duration_ms: f64) -> Self {
        Self {
            target,
            duration_ms,
            started_at: None,
        }
    }

    /// Sample the animation at `now_ms` (a monotonic frame timestamp).
    pub fn sample(&mut self, now_ms: f64) -> Frame {
        let start = *self.started_at.get_or_insert(now_ms);
        let progress = progress(now_ms - start, self.duration_ms);
        if progress >= 1.0 {
            Frame {
                value: self.target,
                progress: 1.0,
                finished: true,
            }
        } else {
            Frame {
                value: interpolate(progress, self.target),
                progress,
                finished: false,
            }
        }
    }
}

/// Fraction of the animation elapsed, clamped to `[0, 1]`.
///
/// A non-positive duration finishes immediately.
pub fn progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

/// Linear interpolation from zero to `target`, rounded down.
pub fn interpolate(progress: f64, target: u64) -> u64 {
    let value = (progress.clamp(0.0, 1.0) * target as f64).floor() as u64;
    value.min(target)
}
