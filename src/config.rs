//! Page configuration module.
//!
//! Handles loading, validating, and merging the page config. Every feature
//! finds its elements by CSS selector and styles them by class name; all of
//! those names, plus the handful of tuning constants, live here so one build
//! of the module can drive pages with different markup.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [menu]
//! toggle = ".hamburger-menu"   # Button that opens/closes the menu
//! menu = ".nav-menu"           # Menu container
//! links = ".nav-list li a"     # Links that close the menu when clicked
//! icon = "i"                   # Icon element inside the toggle
//! open_class = "active"        # Class on the menu while open
//! body_class = "no-scroll"     # Class on <body> while open
//! icon_closed = "fa-bars"
//! icon_open = "fa-times"
//!
//! [scroll]
//! anchors = "a[href^=\"#\"]"   # Same-page links to smooth-scroll
//! header = ".header"           # Fixed header whose height is compensated
//! extra_padding = 20.0         # Extra pixels between header and target
//!
//! [counters]
//! section_id = "resultados"    # Id of the results section
//! item = ".result-item"
//! number = ".result-number"
//! target_attribute = "data-target"
//! animated_class = "animated"
//! duration_ms = 2000
//! threshold = 0.5              # Visible fraction that triggers the count
//! thousands_separator = "."
//! percent_target = 95          # Target rendered as "%N" instead of "+N"
//!
//! [carousel]
//! track = ".carousel-track"
//! prev = ".carousel-prev"
//! next = ".carousel-next"
//! indicators = ".carousel-indicators"
//! indicator_class = "carousel-indicator"
//! active_class = "active"
//!
//! [reveal]
//! enabled = true
//! library = "ScrollReveal"     # Global function name of the reveal library
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse. Override just the values you want:
//!
//! ```toml
//! [counters]
//! section_id = "results"
//! ```
//!
//! Arrays (`reveal.groups`) are replaced wholesale, not merged item by item.
//! Unknown keys are rejected to catch typos early.

use crate::counter::{self, CountFormat};
use crate::reveal::{self, RevealGroup, RevealOptions};
use crate::scroll;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Why a page config could not be used.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("cannot read page config: {0}")]
    Io(#[from] std::io::Error),
    /// Not valid TOML, an unknown key, or a value of the wrong type.
    #[error("invalid page config: {0}")]
    Toml(#[from] toml::de::Error),
    /// Well-formed but unusable, e.g. an empty selector.
    #[error("page config rejected: {0}")]
    Validation(String),
}

/// Page configuration.
///
/// All fields have defaults matching the stock landing page markup. User
/// config need only specify the values it wants to override.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// Mobile navigation menu.
    pub menu: MenuConfig,
    /// Anchor smooth scrolling.
    pub scroll: ScrollConfig,
    /// Count-up counters in the results section.
    pub counters: CounterConfig,
    /// Slide carousel.
    pub carousel: CarouselConfig,
    /// Scroll-reveal library groups.
    pub reveal: RevealConfig,
}

impl PageConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let selectors = [
            ("menu.toggle", &self.menu.toggle),
            ("menu.menu", &self.menu.menu),
            ("menu.links", &self.menu.links),
            ("scroll.anchors", &self.scroll.anchors),
            ("counters.section_id", &self.counters.section_id),
            ("counters.item", &self.counters.item),
            ("counters.number", &self.counters.number),
            ("counters.target_attribute", &self.counters.target_attribute),
            ("carousel.track", &self.carousel.track),
            ("carousel.prev", &self.carousel.prev),
            ("carousel.next", &self.carousel.next),
            ("carousel.indicators", &self.carousel.indicators),
        ];
        if let Some((key, _)) = selectors.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(ConfigError::Validation(format!("{key} must not be empty")));
        }
        if !self.scroll.extra_padding.is_finite() {
            return Err(ConfigError::Validation(
                "scroll.extra_padding must be a finite number".into(),
            ));
        }
        if self.counters.duration_ms == 0 {
            return Err(ConfigError::Validation(
                "counters.duration_ms must be greater than 0".into(),
            ));
        }
        if !(self.counters.threshold > 0.0 && self.counters.threshold <= 1.0) {
            return Err(ConfigError::Validation(
                "counters.threshold must be in (0, 1]".into(),
            ));
        }
        if self.counters.thousands_separator.is_empty() {
            return Err(ConfigError::Validation(
                "counters.thousands_separator must not be empty".into(),
            ));
        }
        if let Some(idx) = self
            .reveal
            .groups
            .iter()
            .position(|g| g.selector.trim().is_empty())
        {
            return Err(ConfigError::Validation(format!(
                "reveal.groups[{idx}].selector must not be empty"
            )));
        }
        Ok(())
    }
}

/// Mobile navigation menu selectors and classes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MenuConfig {
    pub toggle: String,
    pub menu: String,
    pub links: String,
    /// Icon element, looked up inside the toggle.
    pub icon: String,
    pub open_class: String,
    /// Class on `<body>` that stops background scrolling while open.
    pub body_class: String,
    pub icon_closed: String,
    pub icon_open: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            toggle: ".hamburger-menu".to_string(),
            menu: ".nav-menu".to_string(),
            links: ".nav-list li a".to_string(),
            icon: "i".to_string(),
            open_class: "active".to_string(),
            body_class: "no-scroll".to_string(),
            icon_closed: "fa-bars".to_string(),
            icon_open: "fa-times".to_string(),
        }
    }
}

/// Anchor smooth-scroll settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScrollConfig {
    pub anchors: String,
    /// Fixed header; absent from the page means no compensation.
    pub header: String,
    /// Pixels left between the header and the scrolled-to element.
    pub extra_padding: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            anchors: r##"a[href^="#"]"##.to_string(),
            header: ".header".to_string(),
            extra_padding: scroll::DEFAULT_EXTRA_PADDING,
        }
    }
}

/// Count-up counter settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CounterConfig {
    /// Element id (not a selector) of the observed results section.
    pub section_id: String,
    pub item: String,
    /// Text element inside each item.
    pub number: String,
    /// Attribute on the number element holding the target value.
    pub target_attribute: String,
    /// Class added to an item once its counter starts.
    pub animated_class: String,
    pub duration_ms: u32,
    /// Fraction of the section that must be visible to start counting.
    pub threshold: f64,
    pub thousands_separator: String,
    pub percent_target: u64,
}

impl CounterConfig {
    pub fn format(&self) -> CountFormat {
        CountFormat {
            thousands_separator: self.thousands_separator.clone(),
            percent_target: self.percent_target,
        }
    }
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            section_id: "resultados".to_string(),
            item: ".result-item".to_string(),
            number: ".result-number".to_string(),
            target_attribute: "data-target".to_string(),
            animated_class: "animated".to_string(),
            duration_ms: counter::DEFAULT_DURATION_MS as u32,
            threshold: 0.5,
            thousands_separator: counter::DEFAULT_THOUSANDS_SEPARATOR.to_string(),
            percent_target: counter::DEFAULT_PERCENT_TARGET,
        }
    }
}

/// Carousel selectors and classes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselConfig {
    /// Track element; its children are the slides.
    pub track: String,
    pub prev: String,
    pub next: String,
    /// Container the indicator buttons are appended to.
    pub indicators: String,
    pub indicator_class: String,
    pub active_class: String,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            track: ".carousel-track".to_string(),
            prev: ".carousel-prev".to_string(),
            next: ".carousel-next".to_string(),
            indicators: ".carousel-indicators".to_string(),
            indicator_class: "carousel-indicator".to_string(),
            active_class: "active".to_string(),
        }
    }
}

/// Scroll-reveal library settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealConfig {
    pub enabled: bool,
    /// Name of the global function that creates the reveal instance.
    pub library: String,
    /// Options every group inherits.
    pub defaults: RevealOptions,
    pub groups: Vec<RevealGroup>,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            library: "ScrollReveal".to_string(),
            defaults: reveal::default_shared_options(),
            groups: reveal::default_groups(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// The stock page config as a TOML table: the layer every overlay is merged
/// onto, both for the CLI's file and for the string passed from the page.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(PageConfig::default()).expect("default config must serialize")
}

/// Lay a sparse page overlay over the stock table.
///
/// Feature sections (`[menu]`, `[reveal.defaults]`, ...) merge key by key, so
/// `[counters] duration_ms = 800` keeps every other counter setting. Anything
/// that is not a table, including the `reveal.groups` array, is replaced
/// whole.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut stock), toml::Value::Table(overrides)) => {
            for (key, value) in overrides {
                let merged = match stock.remove(&key) {
                    Some(current) => merge_toml(current, value),
                    None => value,
                };
                stock.insert(key, merged);
            }
            toml::Value::Table(stock)
        }
        (_, replacement) => replacement,
    }
}

/// Read the page overlay at `path`. A missing file is not an error: the CLI
/// then reports on the stock config.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    Ok(Some(toml::from_str(&source)?))
}

/// Turn the merged layers into a checked [`PageConfig`]. Unknown keys surface
/// here as [`ConfigError::Toml`], unusable values as
/// [`ConfigError::Validation`].
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<PageConfig, ConfigError> {
    let merged = match overlay {
        Some(overlay) => merge_toml(base, overlay),
        None => base,
    };
    let config: PageConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Page config for the CLI: the overlay file at `path` (if any) on top of the
/// stock config.
pub fn load_config(path: &Path) -> Result<PageConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(path)?;
    resolve_config(base, overlay)
}

/// Parse a TOML overlay from a string (the browser entry point has no
/// filesystem) and resolve it against the stock defaults.
pub fn config_from_str(source: &str) -> Result<PageConfig, ConfigError> {
    let overlay: toml::Value = toml::from_str(source)?;
    resolve_config(stock_defaults_value(), Some(overlay))
}

/// Returns a fully-commented stock config with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Landing Kit Configuration
# =========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults and match the stock landing page markup.
#
# Pass the file contents to `bindPageWithConfig` from the page, or check it
# locally with `landing-kit check --config <file>`.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Mobile navigation menu
# ---------------------------------------------------------------------------
[menu]
# Button that opens and closes the menu.
toggle = ".hamburger-menu"
# Menu container; gets `open_class` while open.
menu = ".nav-menu"
# Links that close the menu when clicked.
links = ".nav-list li a"
# Icon element inside the toggle, swapped between the two icon classes.
icon = "i"
open_class = "active"
# Class on <body> that stops background scrolling while the menu is open.
body_class = "no-scroll"
icon_closed = "fa-bars"
icon_open = "fa-times"

# ---------------------------------------------------------------------------
# Smooth scrolling to same-page anchors
# ---------------------------------------------------------------------------
[scroll]
anchors = 'a[href^="#"]'
# Fixed header whose height is subtracted from the scroll destination.
header = ".header"
# Extra pixels left between the header and the target.
extra_padding = 20.0

# ---------------------------------------------------------------------------
# Count-up counters
# ---------------------------------------------------------------------------
[counters]
# Id (not a selector) of the section observed for visibility.
section_id = "resultados"
item = ".result-item"
# Text element inside each item; its `target_attribute` holds the target.
# Decoration such as "+" or "%" in the attribute is ignored.
number = ".result-number"
target_attribute = "data-target"
# Added to an item once its counter has started; it never runs again.
animated_class = "animated"
duration_ms = 2000
# Fraction of the section that must be visible (0 < threshold <= 1).
threshold = 0.5
# Targets of 1000 and above are grouped with this separator ("+1.500").
thousands_separator = "."
# The target rendered as a percentage ("%95") instead of "+95".
percent_target = 95

# ---------------------------------------------------------------------------
# Carousel
# ---------------------------------------------------------------------------
[carousel]
# Track element; each child is one slide.
track = ".carousel-track"
prev = ".carousel-prev"
next = ".carousel-next"
# Container that receives one indicator button per slide.
indicators = ".carousel-indicators"
indicator_class = "carousel-indicator"
active_class = "active"

# ---------------------------------------------------------------------------
# Scroll-reveal animations (external library, optional)
# ---------------------------------------------------------------------------
[reveal]
enabled = true
# Global function that creates the library instance. When the page does not
# load it, a warning is logged and elements simply appear.
library = "ScrollReveal"

# Options inherited by every group.
[reveal.defaults]
opacity = 0.0
duration = 1000
easing = "ease-out"
mobile = false

[[reveal.groups]]
selector = ".reveal-bottom"
options = { distance = "60px", origin = "bottom", interval = 150 }

[[reveal.groups]]
selector = ".reveal-left"
options = { distance = "100px", origin = "left" }

[[reveal.groups]]
selector = ".reveal-right"
options = { distance = "100px", origin = "right" }

[[reveal.groups]]
selector = ".reveal-scale"
options = { scale = 0.85, interval = 200 }
"##
}
