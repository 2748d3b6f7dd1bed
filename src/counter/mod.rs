//! Count-up counters revealed by viewport visibility.
//!
//! A results section holds several counters. When enough of the section
//! becomes visible, every counter that has not run yet starts counting from
//! zero to its target, sampled once per display refresh. Each counter runs at
//! most once per page load; scrolling away and back does nothing.
//!
//! ```text
//! Idle ──(section visible)──▶ Animating ──(duration elapsed)──▶ Done
//! ```
//!
//! The module is split into:
//! - **Format**: pure rendering of a value for a given target ([`CountFormat`])
//! - **Animation**: time-based interpolation ([`CountUp`])
//! - **Board**: the per-section state machine ([`CounterBoard`]) driving a
//!   [`CounterDisplay`] per counter
//!
//! The board does not schedule frames itself. Its owner calls
//! [`CounterBoard::tick`] from the refresh callback and keeps requesting
//! frames for as long as `tick` returns `true`.

mod animation;
mod format;

pub use animation::{CountUp, DEFAULT_DURATION_MS, Frame, interpolate, progress};
pub use format::{
    CountFormat, DEFAULT_PERCENT_TARGET, DEFAULT_THOUSANDS_SEPARATOR, GROUPING_THRESHOLD,
    group_thousands, parse_target,
};

use tracing::debug;

/// The text node a counter renders into, plus its "already ran" marker.
pub trait CounterDisplay {
    /// Replace the displayed text.
    fn set_text(&mut self, text: &str);

    /// Record that this counter has started, so it is never started again.
    fn mark_animated(&mut self);
}

#[derive(Debug, Clone)]
enum Phase {
    Idle,
    Animating(CountUp),
    Done,
}

/// One counter: its display, target, and at-most-once guard.
#[derive(Debug)]
pub struct RevealCounter<D> {
    display: D,
    target: u64,
    animated: bool,
    phase: Phase,
}

impl<D: CounterDisplay> RevealCounter<D> {
    pub fn new(display: D, target: u64) -> Self {
        Self {
            display,
            target,
            animated: false,
            phase: Phase::Idle,
        }
    }

    /// A counter that already ran before this board was built (its marker
    /// was present in the page). It never starts.
    pub fn already_animated(display: D, target: u64) -> Self {
        Self {
            display,
            target,
            animated: true,
            phase: Phase::Done,
        }
    }

    pub fn is_animated(&self) -> bool {
        self.animated
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Animating(_))
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    fn start(&mut self, duration_ms: f64) -> bool {
        if self.animated {
            return false;
        }
        self.animated = true;
        self.display.mark_animated();
        self.phase = Phase::Animating(CountUp::new(self.target, duration_ms));
        true
    }

    /// Advance one frame. Returns whether the counter is still running.
    fn tick(&mut self, now_ms: f64, format: &CountFormat) -> bool {
        let Phase::Animating(count) = &mut self.phase else {
            return false;
        };
        let frame = count.sample(now_ms);
        self.display.set_text(&format.render(frame.value, self.target));
        if frame.finished {
            self.phase = Phase::Done;
        }
        !frame.finished
    }
}

/// All counters of one results section.
#[derive(Debug)]
pub struct CounterBoard<D> {
    counters: Vec<RevealCounter<D>>,
    format: CountFormat,
    duration_ms: f64,
}

impl<D: CounterDisplay> CounterBoard<D> {
    pub fn new(counters: Vec<RevealCounter<D>>, format: CountFormat, duration_ms: f64) -> Self {
        Self {
            counters,
            format,
            duration_ms,
        }
    }

    pub fn counters(&self) -> &[RevealCounter<D>] {
        &self.counters
    }

    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }

    /// React to the section crossing the visibility threshold.
    ///
    /// Starts every counter that has not run yet and returns how many started.
    /// When this is non-zero the owner must begin (or keep) ticking.
    pub fn on_visibility_change(&mut self, is_intersecting: bool) -> usize {
        if !is_intersecting {
            return 0;
        }
        let duration_ms = self.duration_ms;
        let started = self
            .counters
            .iter_mut()
            .map(|counter| counter.start(duration_ms))
            .filter(|&started| started)
            .count();
        if started > 0 {
            debug!(started, duration_ms, "count-up animation started");
        }
        started
    }

    /// Whether any counter still needs frames.
    pub fn is_animating(&self) -> bool {
        self.counters.iter().any(RevealCounter::is_running)
    }

    /// Render one frame for every running counter.
    ///
    /// Returns `true` while another frame is needed.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        let mut running = false;
        for counter in &mut self.counters {
            running |= counter.tick(now_ms, &self.format);
        }
        running
    }
}
