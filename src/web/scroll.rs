//! Smooth scrolling bound to every same-page anchor.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use super::{WebResult, listen, query_all, query_element};
use crate::config::ScrollConfig;
use crate::scroll::{AnchorScroller, ScrollHost};

struct DomScrollHost {
    window: Window,
    document: Document,
    header: String,
}

impl ScrollHost for DomScrollHost {
    fn target_top(&self, id: &str) -> Option<f64> {
        let target = self.document.get_element_by_id(id)?;
        let scrolled = self.window.page_y_offset().unwrap_or(0.0);
        Some(target.get_bounding_client_rect().top() + scrolled)
    }

    fn header_height(&self) -> Option<f64> {
        query_element(&self.document, &self.header)?
            .dyn_into::<HtmlElement>()
            .ok()
            .map(|header| f64::from(header.offset_height()))
    }

    fn smooth_scroll_to(&mut self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}

pub(super) fn bind(window: &Window, document: &Document, config: &ScrollConfig) -> WebResult<()> {
    let anchors = query_all(document, &config.anchors);
    if anchors.is_empty() {
        debug!("no same-page anchors; smooth scroll inactive");
        return Ok(());
    }

    let host = Rc::new(RefCell::new(DomScrollHost {
        window: window.clone(),
        document: document.clone(),
        header: config.header.clone(),
    }));
    let scroller = AnchorScroller::new(config.extra_padding);

    for anchor in &anchors {
        let host = Rc::clone(&host);
        let link = anchor.clone();
        listen(anchor, "click", move |event: Event| {
            event.prevent_default();
            let href = link.get_attribute("href").unwrap_or_default();
            scroller.handle_activation(&mut *host.borrow_mut(), &href);
        })?;
    }

    debug!(anchors = anchors.len(), "smooth scroll bound");
    Ok(())
}
