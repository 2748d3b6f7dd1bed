//! Smooth scrolling to same-page anchors under a fixed header.
//!
//! A fixed header covers the top of the viewport, so scrolling a section's
//! top edge to `y = 0` would hide its heading. The destination is pulled up by
//! the header's height plus a little breathing room:
//!
//! ```text
//! destination = target_top - header_height - extra_padding
//! ```
//!
//! `target_top` is in document coordinates (viewport top plus the current
//! scroll offset). A missing header counts as zero height.

use tracing::debug;

/// Breathing room left between the header and the target, in pixels.
pub const DEFAULT_EXTRA_PADDING: f64 = 20.0;

/// The page-side queries and the scroll request.
pub trait ScrollHost {
    /// Document-relative top of the element with this id, if it exists.
    fn target_top(&self, id: &str) -> Option<f64>;

    /// Rendered height of the fixed header, if the page has one.
    fn header_height(&self) -> Option<f64>;

    /// Request an animated scroll to `top`.
    fn smooth_scroll_to(&mut self, top: f64);
}

/// Outcome of activating an anchor link.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnchorOutcome {
    /// A scroll to `top` was requested.
    Scrolled { top: f64 },
    /// The link does not point at an element on this page.
    NoTarget,
}

/// Compute the scroll destination for a target.
pub fn scroll_destination(target_top: f64, header_height: Option<f64>, extra_padding: f64) -> f64 {
    target_top - header_height.unwrap_or(0.0) - extra_padding
}

/// Extract the element id from a same-page link.
///
/// - `"#contato"` → `Some("contato")`
/// - `"#"` → `None` (top-of-page placeholder, no element)
/// - `"/about#team"` → `None` (not a same-page link)
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorScroller {
    extra_padding: f64,
}

impl Default for AnchorScroller {
    fn default() -> Self {
        Self::new(DEFAULT_EXTRA_PADDING)
    }
}

impl AnchorScroller {
    pub fn new(extra_padding: f64) -> Self {
        Self { extra_padding }
    }

    /// Handle activation of a link with this `href`.
    ///
    /// The caller suppresses the browser's default jump regardless of the
    /// outcome. At most one scroll is requested.
    pub fn handle_activation<H: ScrollHost>(&self, host: &mut H, href: &str) -> AnchorOutcome {
        let Some(top) = fragment_id(href).and_then(|id| host.target_top(id)) else {
            debug!(href, "anchor target not found");
            return AnchorOutcome::NoTarget;
        };
        let destination = scroll_destination(top, host.header_height(), self.extra_padding);
        host.smooth_scroll_to(destination);
        AnchorOutcome::Scrolled { top: destination }
    }
}
