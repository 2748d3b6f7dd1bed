//! CLI output formatting.
//!
//! Every formatter returns lines instead of printing, so `main` owns stdout and
//! tests can assert on exact text.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Menu
//!     Toggle: .hamburger-menu → .nav-menu (active, body no-scroll)
//!     Links: .nav-list li a
//! Scroll
//!     Anchors: a[href^="#"]
//!     Offset: .header height + 20px
//! Counters
//!     Section: #resultados (.result-item .result-number[data-target])
//!     Trigger: 50% visible, 2000ms
//!     Format: +1.500 / %95 / +42
//! Carousel
//!     Track: .carousel-track (prev .carousel-prev, next .carousel-next)
//!     Indicators: .carousel-indicators → .carousel-indicator.active
//! Reveal
//!     Library: ScrollReveal
//!     001 .reveal-bottom {"opacity":0.0,...}
//! ```
//!
//! ## Count
//!
//! ```text
//! 000   0ms  +0
//! 001 500ms  +375
//! ...
//! 004 2000ms +1.500
//! ```

use crate::config::PageConfig;
use crate::counter::{CountFormat, CountUp};

/// Sample values used to illustrate the counter format.
const FORMAT_SAMPLES: [u64; 2] = [1500, 42];

/// Summarize the effective configuration, one section per feature.
pub fn format_config_summary(config: &PageConfig) -> Vec<String> {
    let mut lines = Vec::new();

    let menu = &config.menu;
    lines.push("Menu".to_string());
    lines.push(format!(
        "    Toggle: {} → {} ({}, body {})",
        menu.toggle, menu.menu, menu.open_class, menu.body_class
    ));
    lines.push(format!("    Links: {}", menu.links));

    let scroll = &config.scroll;
    lines.push("Scroll".to_string());
    lines.push(format!("    Anchors: {}", scroll.anchors));
    lines.push(format!(
        "    Offset: {} height + {}px",
        scroll.header, scroll.extra_padding
    ));

    let counters = &config.counters;
    let format = counters.format();
    lines.push("Counters".to_string());
    lines.push(format!(
        "    Section: #{} ({} {}[{}])",
        counters.section_id, counters.item, counters.number, counters.target_attribute
    ));
    lines.push(format!(
        "    Trigger: {}% visible, {}ms",
        (counters.threshold * 100.0).round(),
        counters.duration_ms
    ));
    lines.push(format!(
        "    Format: {} / {} / {}",
        format.render(FORMAT_SAMPLES[0], FORMAT_SAMPLES[0]),
        format.render(counters.percent_target, counters.percent_target),
        format.render(FORMAT_SAMPLES[1], FORMAT_SAMPLES[1]),
    ));

    let carousel = &config.carousel;
    lines.push("Carousel".to_string());
    lines.push(format!(
        "    Track: {} (prev {}, next {})",
        carousel.track, carousel.prev, carousel.next
    ));
    lines.push(format!(
        "    Indicators: {} → .{}.{}",
        carousel.indicators, carousel.indicator_class, carousel.active_class
    ));

    let reveal = &config.reveal;
    lines.push("Reveal".to_string());
    if !reveal.enabled {
        lines.push("    Disabled".to_string());
        return lines;
    }
    lines.push(format!("    Library: {}", reveal.library));
    for (idx, group) in reveal.groups.iter().enumerate() {
        let options = group.options.merged_over(&reveal.defaults);
        let json = options.to_json().unwrap_or_else(|e| format!("<{e}>"));
        lines.push(format!("    {:03} {} {}", idx + 1, group.selector, json));
    }
    lines
}

/// Preview a count-up: `frames` evenly spaced samples across the duration,
/// followed by the exact final frame.
pub fn format_count_preview(
    target: u64,
    duration_ms: u32,
    frames: u32,
    format: &CountFormat,
) -> Vec<String> {
    let frames = frames.max(1);
    let step = f64::from(duration_ms) / f64::from(frames);
    let mut count = CountUp::new(target, f64::from(duration_ms));
    (0..=frames)
        .map(|i| {
            let at = step * f64::from(i);
            let frame = count.sample(at);
            format!(
                "{:03} {:>5}ms  {}",
                i,
                at.round(),
                format.render(frame.value, target)
            )
        })
        .collect()
}
