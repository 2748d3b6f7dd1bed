//! Scroll-reveal entrance animations.
//!
//! The animations themselves belong to an external library that the page may
//! or may not load. This module only owns the configuration shape handed to it
//! and the lookup policy:
//!
//! - A [`RevealEngine`] is whatever can animate a CSS selector group with a set
//!   of [`RevealOptions`]. In the browser that is the global `ScrollReveal`
//!   function; in tests it is a recording mock.
//! - [`resolve_engine`] turns "maybe found" into "always usable": when nothing
//!   is registered it logs a warning and hands back [`NoopReveal`].
//! - [`apply_reveals`] layers each group's options over the shared defaults and
//!   registers the groups one by one. A failing group is logged and skipped.
//!
//! Options serialize to the library's own option object, so field names match
//! its documented keys (`opacity`, `duration`, `easing`, `distance`, ...).

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum RevealError {
    #[error("Reveal engine error: {0}")]
    Engine(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Animation parameters for one selector group.
///
/// Every field is optional so a group only states what differs from the
/// shared defaults. Unset fields are omitted from the serialized object and
/// the library falls back to its own defaults for them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealOptions {
    /// Starting opacity (0.0 = fully transparent).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    /// Animation length in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    /// CSS easing function name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub easing: Option<String>,
    /// Whether the animation also runs on mobile devices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<bool>,
    /// Travel distance as a CSS length (e.g. `"60px"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<String>,
    /// Side the element travels in from (`top`, `bottom`, `left`, `right`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    /// Starting scale factor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    /// Stagger between sibling elements of the group, in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<u32>,
    /// Delay before the animation starts, in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<u32>,
    /// Replay the animation every time the element re-enters the viewport.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reset: Option<bool>,
}

impl RevealOptions {
    /// Fill every unset field from `base`. Fields set on `self` win.
    pub fn merged_over(&self, base: &RevealOptions) -> RevealOptions {
        RevealOptions {
            opacity: self.opacity.or(base.opacity),
            duration: self.duration.or(base.duration),
            easing: self.easing.clone().or_else(|| base.easing.clone()),
            mobile: self.mobile.or(base.mobile),
            distance: self.distance.clone().or_else(|| base.distance.clone()),
            origin: self.origin.clone().or_else(|| base.origin.clone()),
            scale: self.scale.or(base.scale),
            interval: self.interval.or(base.interval),
            delay: self.delay.or(base.delay),
            reset: self.reset.or(base.reset),
        }
    }

    /// Serialize to the JSON object the library expects.
    pub fn to_json(&self) -> Result<String, RevealError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// A CSS selector and the options its matching elements animate with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RevealGroup {
    pub selector: String,
    #[serde(default)]
    pub options: RevealOptions,
}

impl RevealGroup {
    pub fn new(selector: impl Into<String>, options: RevealOptions) -> Self {
        Self {
            selector: selector.into(),
            options,
        }
    }
}

/// Options shared by every stock group: fade in from transparent over one
/// second, desktop only.
pub fn default_shared_options() -> RevealOptions {
    RevealOptions {
        opacity: Some(0.0),
        duration: Some(1000),
        easing: Some("ease-out".to_string()),
        mobile: Some(false),
        ..RevealOptions::default()
    }
}

/// The four stock groups: slide up, slide from either side, and scale in.
pub fn default_groups() -> Vec<RevealGroup> {
    vec![
        RevealGroup::new(
            ".reveal-bottom",
            RevealOptions {
                distance: Some("60px".to_string()),
                origin: Some("bottom".to_string()),
                interval: Some(150),
                ..RevealOptions::default()
            },
        ),
        RevealGroup::new(
            ".reveal-left",
            RevealOptions {
                distance: Some("100px".to_string()),
                origin: Some("left".to_string()),
                ..RevealOptions::default()
            },
        ),
        RevealGroup::new(
            ".reveal-right",
            RevealOptions {
                distance: Some("100px".to_string()),
                origin: Some("right".to_string()),
                ..RevealOptions::default()
            },
        ),
        RevealGroup::new(
            ".reveal-scale",
            RevealOptions {
                scale: Some(0.85),
                interval: Some(200),
                ..RevealOptions::default()
            },
        ),
    ]
}

/// Something that can animate the elements matching a selector.
pub trait RevealEngine {
    /// Short name used in log messages.
    fn name(&self) -> &str;

    /// Register `selector` for reveal with fully-merged `options`.
    fn reveal(&self, selector: &str, options: &RevealOptions) -> Result<(), RevealError>;
}

/// Engine used when no reveal library is available. Elements stay as styled.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReveal;

impl RevealEngine for NoopReveal {
    fn name(&self) -> &str {
        "none"
    }

    fn reveal(&self, _selector: &str, _options: &RevealOptions) -> Result<(), RevealError> {
        Ok(())
    }
}

/// Pick the registered engine, or fall back to [`NoopReveal`] with a warning.
pub fn resolve_engine(found: Option<Box<dyn RevealEngine>>) -> Box<dyn RevealEngine> {
    match found {
        Some(engine) => {
            debug!(engine = engine.name(), "reveal library found");
            engine
        }
        None => {
            warn!("reveal library not loaded; element animations will not play");
            Box::new(NoopReveal)
        }
    }
}

/// Register every group with `engine`, each layered over `shared`.
///
/// Returns the number of groups the engine accepted.
pub fn apply_reveals(
    engine: &dyn RevealEngine,
    shared: &RevealOptions,
    groups: &[RevealGroup],
) -> usize {
    let mut applied = 0;
    for group in groups {
        let options = group.options.merged_over(shared);
        match engine.reveal(&group.selector, &options) {
            Ok(()) => applied += 1,
            Err(e) => warn!(
                selector = %group.selector,
                engine = engine.name(),
                "reveal group skipped: {e}"
            ),
        }
    }
    applied
}
