//! Carousel bound to its track, prev/next buttons, generated indicators, and
//! window resizes.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use super::{WebResult, listen, log_js_err, query_element};
use crate::carousel::{Carousel, CarouselView, track_transform};
use crate::config::CarouselConfig;

struct DomCarouselView {
    track: HtmlElement,
    slides: Vec<Element>,
    indicators: Vec<Element>,
    active_class: String,
}

impl CarouselView for DomCarouselView {
    fn slide_offset(&self, index: usize) -> f64 {
        // Both rects move with the track's transform, so their difference is
        // the slide's layout offset inside the track.
        let origin = self.track.get_bounding_client_rect().left();
        self.slides
            .get(index)
            .map(|slide| slide.get_bounding_client_rect().left() - origin)
            .unwrap_or(0.0)
    }

    fn translate_track(&mut self, offset_px: f64) {
        log_js_err(
            self.track
                .style()
                .set_property("transform", &track_transform(offset_px)),
            "translate carousel track",
        );
    }

    fn set_indicator_active(&mut self, index: usize, active: bool) {
        if let Some(indicator) = self.indicators.get(index) {
            log_js_err(
                indicator
                    .class_list()
                    .toggle_with_force(&self.active_class, active),
                "update carousel indicator",
            );
        }
    }
}

fn create_indicators(
    document: &Document,
    container: &Element,
    count: usize,
    class: &str,
) -> WebResult<Vec<Element>> {
    (0..count)
        .map(|i| {
            let button = document.create_element("button")?;
            button.set_attribute("type", "button")?;
            button.set_attribute("aria-label", &format!("Slide {}", i + 1))?;
            button.class_list().add_1(class)?;
            container.append_child(&button)?;
            Ok(button)
        })
        .collect()
}

pub(super) fn bind(window: &Window, document: &Document, config: &CarouselConfig) -> WebResult<()> {
    let track = query_element(document, &config.track)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    let prev = query_element(document, &config.prev);
    let next = query_element(document, &config.next);
    let container = query_element(document, &config.indicators);
    let (Some(track), Some(prev), Some(next), Some(container)) = (track, prev, next, container)
    else {
        warn!("carousel elements not found; carousel inactive");
        return Ok(());
    };

    let children = track.children();
    let slides: Vec<Element> = (0..children.length())
        .filter_map(|i| children.item(i))
        .collect();
    let count = slides.len();

    let indicators = create_indicators(document, &container, count, &config.indicator_class)?;
    let view = DomCarouselView {
        track,
        slides,
        indicators: indicators.clone(),
        active_class: config.active_class.clone(),
    };
    let Some(carousel) = Carousel::new(view, count) else {
        warn!("carousel track has no slides; carousel inactive");
        return Ok(());
    };
    let carousel = Rc::new(RefCell::new(carousel));

    for (idx, indicator) in indicators.iter().enumerate() {
        let carousel = Rc::clone(&carousel);
        listen(indicator, "click", move |_| {
            carousel.borrow_mut().move_to_slide(idx as isize);
        })?;
    }
    {
        let carousel = Rc::clone(&carousel);
        listen(&prev, "click", move |_| {
            carousel.borrow_mut().prev();
        })?;
    }
    {
        let carousel = Rc::clone(&carousel);
        listen(&next, "click", move |_| {
            carousel.borrow_mut().next();
        })?;
    }
    listen(window, "resize", move |_| {
        carousel.borrow_mut().relayout();
    })?;

    debug!(slides = count, "carousel bound");
    Ok(())
}
