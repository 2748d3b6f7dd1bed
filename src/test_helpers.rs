//! Shared test doubles for the landing-kit test suite.
//!
//! Every view trait gets a recording implementation that performs no DOM work
//! and keeps an ordered log of what it was asked to do. Tests drive the real
//! state machines against these and assert on the log or on the derived
//! "current page state" accessors.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let mut menu = NavMenu::new(RecordingMenu::new());
//! menu.toggle();
//! assert_eq!(menu.view().expanded(), Some(true));
//! ```

use std::cell::RefCell;
use std::collections::HashMap;

use crate::carousel::CarouselView;
use crate::counter::CounterDisplay;
use crate::menu::{MenuIcon, MenuView};
use crate::reveal::{RevealEngine, RevealError, RevealOptions};
use crate::scroll::ScrollHost;

// =========================================================================
// Menu
// =========================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum MenuOp {
    OpenClasses(bool),
    Icon(MenuIcon),
    Expanded(bool),
    FocusFirstLink,
    FocusToggle,
}

#[derive(Debug, Default)]
pub struct RecordingMenu {
    ops: Vec<MenuOp>,
}

impl RecordingMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[MenuOp] {
        &self.ops
    }

    /// Last `aria-expanded` value written, if any.
    pub fn expanded(&self) -> Option<bool> {
        self.ops.iter().rev().find_map(|op| match op {
            MenuOp::Expanded(v) => Some(*v),
            _ => None,
        })
    }

    /// Last icon set, if any.
    pub fn icon(&self) -> Option<MenuIcon> {
        self.ops.iter().rev().find_map(|op| match op {
            MenuOp::Icon(icon) => Some(*icon),
            _ => None,
        })
    }
}

impl MenuView for RecordingMenu {
    fn set_open_classes(&mut self, open: bool) {
        self.ops.push(MenuOp::OpenClasses(open));
    }

    fn set_icon(&mut self, icon: MenuIcon) {
        self.ops.push(MenuOp::Icon(icon));
    }

    fn set_expanded(&mut self, expanded: bool) {
        self.ops.push(MenuOp::Expanded(expanded));
    }

    fn focus_first_link(&mut self) {
        self.ops.push(MenuOp::FocusFirstLink);
    }

    fn focus_toggle(&mut self) {
        self.ops.push(MenuOp::FocusToggle);
    }
}

// =========================================================================
// Scroll
// =========================================================================

#[derive(Debug, Default)]
pub struct FakeScrollHost {
    targets: HashMap<String, f64>,
    header: Option<f64>,
    scrolls: Vec<f64>,
}

impl FakeScrollHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_target(mut self, id: &str, top: f64) -> Self {
        self.targets.insert(id.to_string(), top);
        self
    }

    pub fn with_header(mut self, height: f64) -> Self {
        self.header = Some(height);
        self
    }

    pub fn scrolls(&self) -> &[f64] {
        &self.scrolls
    }
}

impl ScrollHost for FakeScrollHost {
    fn target_top(&self, id: &str) -> Option<f64> {
        self.targets.get(id).copied()
    }

    fn header_height(&self) -> Option<f64> {
        self.header
    }

    fn smooth_scroll_to(&mut self, top: f64) {
        self.scrolls.push(top);
    }
}

// =========================================================================
// Counters
// =========================================================================

#[derive(Debug, Default)]
pub struct RecordingDisplay {
    texts: Vec<String>,
    marked: bool,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// A display whose page markup already shows `text`.
    pub fn with_text(text: &str) -> Self {
        Self {
            texts: vec![text.to_string()],
            marked: false,
        }
    }

    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    pub fn last_text(&self) -> Option<&str> {
        self.texts.last().map(String::as_str)
    }

    pub fn is_marked(&self) -> bool {
        self.marked
    }
}

impl CounterDisplay for RecordingDisplay {
    fn set_text(&mut self, text: &str) {
        self.texts.push(text.to_string());
    }

    fn mark_animated(&mut self) {
        self.marked = true;
    }
}

// =========================================================================
// Carousel
// =========================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum CarouselOp {
    Translate(f64),
    Indicator(usize, bool),
}

/// Slides laid out left to right with the given widths.
#[derive(Debug, Default)]
pub struct RecordingCarousel {
    widths: Vec<f64>,
    indicators: Vec<bool>,
    ops: Vec<CarouselOp>,
}

impl RecordingCarousel {
    pub fn with_widths(widths: &[f64]) -> Self {
        Self {
            widths: widths.to_vec(),
            indicators: vec![false; widths.len()],
            ops: Vec::new(),
        }
    }

    /// Simulate a resize that changes slide widths.
    pub fn set_widths(&mut self, widths: &[f64]) {
        self.widths = widths.to_vec();
    }

    pub fn ops(&self) -> &[CarouselOp] {
        &self.ops
    }

    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    /// Current track translation, if one was ever applied.
    pub fn translation(&self) -> Option<f64> {
        self.ops.iter().rev().find_map(|op| match op {
            CarouselOp::Translate(px) => Some(*px),
            _ => None,
        })
    }

    pub fn active_indicators(&self) -> Vec<usize> {
        self.indicators
            .iter()
            .enumerate()
            .filter(|(_, active)| **active)
            .map(|(i, _)| i)
            .collect()
    }
}

impl CarouselView for RecordingCarousel {
    fn slide_offset(&self, index: usize) -> f64 {
        self.widths[..index].iter().sum()
    }

    fn translate_track(&mut self, offset_px: f64) {
        self.ops.push(CarouselOp::Translate(offset_px));
    }

    fn set_indicator_active(&mut self, index: usize, active: bool) {
        self.indicators[index] = active;
        self.ops.push(CarouselOp::Indicator(index, active));
    }
}

// =========================================================================
// Reveal
// =========================================================================

/// Engine that records each registration. Optionally rejects one selector.
#[derive(Debug, Default)]
pub struct RecordingReveal {
    calls: RefCell<Vec<(String, RevealOptions)>>,
    fail_on: Option<String>,
}

impl RecordingReveal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(selector: &str) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            fail_on: Some(selector.to_string()),
        }
    }

    pub fn calls(&self) -> Vec<(String, RevealOptions)> {
        self.calls.borrow().clone()
    }
}

impl RevealEngine for RecordingReveal {
    fn name(&self) -> &str {
        "recording"
    }

    fn reveal(&self, selector: &str, options: &RevealOptions) -> Result<(), RevealError> {
        if self.fail_on.as_deref() == Some(selector) {
            return Err(RevealError::Engine(format!("rejected {selector}")));
        }
        self.calls
            .borrow_mut()
            .push((selector.to_string(), options.clone()));
        Ok(())
    }
}
