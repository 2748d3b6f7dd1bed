//! Browser bindings (wasm32 only).
//!
//! Implements every view trait over `web-sys` elements and wires the page
//! events to the feature state machines. The page loads the module and calls
//! one of the exported entry points once:
//!
//! ```js
//! import loadWasm, { bindPage } from "./pkg/landing_kit.js";
//! await loadWasm();
//! bindPage();  // or bindPageWithConfig(tomlText)
//! ```
//!
//! Binding waits for `DOMContentLoaded` when the document is still loading.
//! Each feature looks up its own elements; a feature whose elements are absent
//! logs why and stays inert while the rest bind normally.
//!
//! Every listener is registered once and lives as long as the page, so the
//! closures are intentionally leaked with `forget`.

mod carousel;
mod counter;
mod menu;
mod reveal;
mod scroll;

use crate::config::{self, PageConfig};
use thiserror::Error;
use tracing::{error, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, NodeList, Window};

#[derive(Error, Debug)]
pub enum WebError {
    #[error("JavaScript error: {0}")]
    JavaScript(String),
    #[error("No global window; not running in a browser page")]
    NoWindow,
    #[error("Window has no document")]
    NoDocument,
}

impl From<JsValue> for WebError {
    fn from(js_val: JsValue) -> Self {
        WebError::JavaScript(describe(&js_val))
    }
}

impl From<WebError> for JsValue {
    fn from(err: WebError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub type WebResult<T> = Result<T, WebError>;

/// Module start hook: panic messages and logs go to the browser console.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    crate::logging::init("info");
}

/// Bind every feature using the stock configuration.
#[wasm_bindgen(js_name = bindPage)]
pub fn init() {
    if let Err(e) = run(PageConfig::default()) {
        error!("landing page not bound: {e}");
    }
}

/// Bind every feature using a TOML overlay on the stock configuration.
///
/// An invalid overlay is logged and the stock configuration is used instead.
#[wasm_bindgen(js_name = bindPageWithConfig)]
pub fn init_with_config(toml_source: &str) {
    let page = config::config_from_str(toml_source).unwrap_or_else(|e| {
        error!("invalid page config, using defaults: {e}");
        PageConfig::default()
    });
    if let Err(e) = run(page) {
        error!("landing page not bound: {e}");
    }
}

fn run(page: PageConfig) -> WebResult<()> {
    let window = web_sys::window().ok_or(WebError::NoWindow)?;
    let document = window.document().ok_or(WebError::NoDocument)?;

    if document.ready_state() == "loading" {
        let (win, doc) = (window.clone(), document.clone());
        let on_ready = Closure::once_into_js(move |_: Event| bind_all(&win, &doc, &page));
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    } else {
        bind_all(&window, &document, &page);
    }
    Ok(())
}

fn bind_all(window: &Window, document: &Document, page: &PageConfig) {
    let results = [
        ("menu", menu::bind(document, &page.menu)),
        ("scroll", scroll::bind(window, document, &page.scroll)),
        ("reveal", reveal::bind(&page.reveal)),
        ("counters", counter::bind(window, document, &page.counters)),
        ("carousel", carousel::bind(window, document, &page.carousel)),
    ];
    for (feature, result) in results {
        if let Err(e) = result {
            error!(feature, "binding failed: {e}");
        }
    }
    info!("landing page bound");
}

// ============================================================================
// DOM helpers
// ============================================================================

/// Human-readable text of a thrown JavaScript value.
pub(crate) fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Log a failed DOM call. Used inside view methods, which cannot fail.
pub(crate) fn log_js_err<T>(result: Result<T, JsValue>, action: &str) {
    if let Err(e) = result {
        warn!(action, "DOM call failed: {}", describe(&e));
    }
}

/// First element matching `selector`. An invalid selector counts as no match.
pub(crate) fn query_element(document: &Document, selector: &str) -> Option<Element> {
    match document.query_selector(selector) {
        Ok(found) => found,
        Err(e) => {
            warn!(selector, "invalid selector: {}", describe(&e));
            None
        }
    }
}

/// Every element matching `selector`. An invalid selector counts as no match.
pub(crate) fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    match document.query_selector_all(selector) {
        Ok(list) => elements(&list),
        Err(e) => {
            warn!(selector, "invalid selector: {}", describe(&e));
            Vec::new()
        }
    }
}

pub(crate) fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Register `handler` for `event_type` on `target` for the page's lifetime.
pub(crate) fn listen(
    target: &EventTarget,
    event_type: &str,
    handler: impl FnMut(Event) + 'static,
) -> WebResult<()> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
