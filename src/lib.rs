//! # Landing Kit
//!
//! Client-side interactivity for a marketing landing page, compiled to
//! WebAssembly: a collapsible mobile menu, smooth anchor scrolling under a
//! fixed header, scroll-reveal entrance animations, count-up counters started
//! by viewport visibility, and a slide carousel.
//!
//! # Architecture: State Machines Behind View Traits
//!
//! Each feature is split in two:
//!
//! ```text
//! feature module      NavMenu / AnchorScroller / CounterBoard / Carousel
//!       │                 owns the state, decides what changes
//!       ▼
//! view trait          MenuView / ScrollHost / CounterDisplay / CarouselView
//!       │                 "set this class", "scroll there", "show this text"
//!       ▼
//! web module          web-sys implementations + event wiring (wasm32 only)
//! ```
//!
//! This separation exists for two reasons:
//!
//! - **Testability**: the state machines run natively against recording
//!   views, so wraparound, at-most-once counters, and focus handling are
//!   covered by plain `cargo test` with no browser.
//! - **Explicit state**: every feature's state lives in one owning struct
//!   that is shared only with its own event handlers.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`menu`] | Mobile menu open/close state, icon, `aria-expanded`, focus |
//! | [`scroll`] | Anchor scroll destination under a fixed header |
//! | [`counter`] | Count-up formatting, interpolation, and the per-section board |
//! | [`carousel`] | Slide index with wraparound, track offset, indicators |
//! | [`reveal`] | Option shape and lookup policy for the external reveal library |
//! | [`config`] | Selector/class/tuning config, TOML loading, merging, validation |
//! | [`logging`] | `tracing` subscriber for stderr or the browser console |
//! | [`output`] | CLI output formatting |
//! | `web` | Browser bindings, exported as `bindPage` / `bindPageWithConfig` (wasm32) |
//!
//! # Design Decisions
//!
//! ## Best-Effort Features
//!
//! Not every page template includes every section. A feature whose elements
//! are missing logs why and stays inert; the others still initialize. Nothing
//! here is allowed to break the page.
//!
//! ## Config Over Constants
//!
//! Selectors, class names, and tuning values (scroll padding, count duration,
//! visibility threshold) come from [`config::PageConfig`]. The stock values
//! match the stock markup, so most pages call `bindPage()` with no config at all.

pub mod carousel;
pub mod config;
pub mod counter;
pub mod logging;
pub mod menu;
pub mod output;
pub mod reveal;
pub mod scroll;

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(test)]
pub(crate) mod test_helpers;
