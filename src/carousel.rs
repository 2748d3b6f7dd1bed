//! Manually-indexed carousel with wraparound navigation.
//!
//! Slides sit side by side inside a track. Showing a slide means translating
//! the track left by that slide's offset from the track's own origin, then
//! lighting up the matching position indicator.
//!
//! ## Index Resolution
//!
//! Requests one step past either end wrap around:
//!
//! | Requested | Resolved |
//! |-----------|----------|
//! | `< 0` | last slide |
//! | `>= count` | first slide |
//! | otherwise | unchanged |
//!
//! Forward and back controls request `current ± 1` and rely on this rule to
//! loop. Offsets are pixel measurements and shift when the viewport resizes,
//! so [`Carousel::relayout`] re-measures without changing the selection.

use tracing::debug;

/// The DOM side of a carousel: slide geometry, the track transform, and the
/// indicator controls (one per slide, created before the carousel).
pub trait CarouselView {
    /// Horizontal distance in pixels from the track's origin to slide `index`.
    fn slide_offset(&self, index: usize) -> f64;

    /// Shift the track so a point `offset_px` into it aligns with the
    /// viewport start.
    fn translate_track(&mut self, offset_px: f64);

    /// Show or clear the active state of indicator `index`.
    fn set_indicator_active(&mut self, index: usize, active: bool);
}

/// Resolve a requested slide index against `count` slides.
///
/// Returns `None` for an empty carousel; otherwise always a valid index.
pub fn resolve_index(requested: isize, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let resolved = if requested < 0 {
        count - 1
    } else if requested as usize >= count {
        0
    } else {
        requested as usize
    };
    Some(resolved)
}

/// CSS `transform` value placing the slide at `offset_px` at the viewport start.
pub fn track_transform(offset_px: f64) -> String {
    format!("translateX(-{offset_px}px)")
}

#[derive(Debug)]
pub struct Carousel<V> {
    view: V,
    slide_count: usize,
    current: usize,
}

impl<V: CarouselView> Carousel<V> {
    /// Build a carousel over `slide_count` slides and settle on the first one.
    ///
    /// Returns `None` when there are no slides; the carousel is then inert.
    pub fn new(view: V, slide_count: usize) -> Option<Self> {
        if slide_count == 0 {
            return None;
        }
        let mut carousel = Self {
            view,
            slide_count,
            current: 0,
        };
        carousel.move_to_slide(0);
        Some(carousel)
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Select `index` (with wraparound), translate the track, and update the
    /// indicators so exactly the selected one is active. Returns the resolved
    /// index.
    pub fn move_to_slide(&mut self, index: isize) -> usize {
        let Some(target) = resolve_index(index, self.slide_count) else {
            return self.current;
        };
        let offset = self.view.slide_offset(target);
        self.view.translate_track(offset);
        for i in 0..self.slide_count {
            self.view.set_indicator_active(i, i == target);
        }
        self.current = target;
        debug!(requested = index, slide = target, offset, "carousel moved");
        target
    }

    pub fn next(&mut self) -> usize {
        self.move_to_slide(self.current as isize + 1)
    }

    pub fn prev(&mut self) -> usize {
        self.move_to_slide(self.current as isize - 1)
    }

    /// Re-apply the current slide after a layout change.
    pub fn relayout(&mut self) -> usize {
        self.move_to_slide(self.current as isize)
    }
}
