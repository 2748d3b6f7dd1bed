//! Count-up counters bound to an `IntersectionObserver` on the results
//! section and driven by `requestAnimationFrame`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use js_sys::Array;
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    Window,
};

use super::{WebResult, describe, elements, log_js_err};
use crate::config::CounterConfig;
use crate::counter::{CounterBoard, CounterDisplay, RevealCounter, parse_target};

type Board = Rc<RefCell<CounterBoard<DomCounterDisplay>>>;

struct DomCounterDisplay {
    item: Element,
    number: Element,
    animated_class: String,
}

impl CounterDisplay for DomCounterDisplay {
    fn set_text(&mut self, text: &str) {
        self.number.set_text_content(Some(text));
    }

    fn mark_animated(&mut self) {
        log_js_err(
            self.item.class_list().add_1(&self.animated_class),
            "mark counter animated",
        );
    }
}

/// Ticks the board once per display refresh while any counter is running.
///
/// `running` is the stop flag: it is raised by [`FrameLoop::start`] and
/// lowered when the board reports no more frames are needed (or scheduling
/// fails), which ends the frame chain.
struct FrameLoop {
    window: Window,
    running: Rc<Cell<bool>>,
    callback: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
}

impl FrameLoop {
    fn new(window: Window, board: Board) -> Self {
        let running = Rc::new(Cell::new(false));
        let callback: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));

        let tick = {
            let window = window.clone();
            let running = Rc::clone(&running);
            let callback = Rc::clone(&callback);
            Closure::<dyn FnMut(f64)>::new(move |now: f64| {
                let more = board.borrow_mut().tick(now);
                if more && running.get() {
                    if let Some(cb) = callback.borrow().as_ref() {
                        schedule(&window, cb, &running);
                    }
                } else {
                    running.set(false);
                }
            })
        };
        // The closure keeps a handle to its own slot so it can reschedule
        // itself; the cycle lives for the rest of the page.
        *callback.borrow_mut() = Some(tick);

        Self {
            window,
            running,
            callback,
        }
    }

    fn start(&self) {
        if self.running.replace(true) {
            return;
        }
        if let Some(cb) = self.callback.borrow().as_ref() {
            schedule(&self.window, cb, &self.running);
        }
    }
}

fn schedule(window: &Window, cb: &Closure<dyn FnMut(f64)>, running: &Cell<bool>) {
    if let Err(e) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
        warn!("animation frame not scheduled: {}", describe(&e));
        running.set(false);
    }
}

fn collect_counters(section: &Element, config: &CounterConfig) -> Vec<RevealCounter<DomCounterDisplay>> {
    let items = match section.query_selector_all(&config.item) {
        Ok(list) => elements(&list),
        Err(e) => {
            warn!(selector = %config.item, "invalid selector: {}", describe(&e));
            return Vec::new();
        }
    };

    let mut counters = Vec::with_capacity(items.len());
    for item in items {
        let Some(number) = item.query_selector(&config.number).ok().flatten() else {
            debug!("result item without a number element skipped");
            continue;
        };
        let raw = number
            .get_attribute(&config.target_attribute)
            .unwrap_or_default();
        let Some(target) = parse_target(&raw) else {
            warn!(raw = %raw, attribute = %config.target_attribute, "counter target has no digits; skipped");
            continue;
        };
        let already = item.class_list().contains(&config.animated_class);
        let display = DomCounterDisplay {
            item,
            number,
            animated_class: config.animated_class.clone(),
        };
        counters.push(if already {
            RevealCounter::already_animated(display, target)
        } else {
            RevealCounter::new(display, target)
        });
    }
    counters
}

pub(super) fn bind(window: &Window, document: &Document, config: &CounterConfig) -> WebResult<()> {
    let Some(section) = document.get_element_by_id(&config.section_id) else {
        warn!(
            section = %config.section_id,
            "results section not found; count-up animation inactive"
        );
        return Ok(());
    };

    let counters = collect_counters(&section, config);
    if counters.is_empty() {
        warn!(section = %config.section_id, "results section has no counters");
        return Ok(());
    }
    let count = counters.len();

    let board: Board = Rc::new(RefCell::new(CounterBoard::new(
        counters,
        config.format(),
        f64::from(config.duration_ms),
    )));
    let frames = FrameLoop::new(window.clone(), Rc::clone(&board));

    let on_intersect = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, _observer: IntersectionObserver| {
            let visible = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());
            if board.borrow_mut().on_visibility_change(visible) > 0 {
                frames.start();
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.threshold));
    let observer =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)?;
    // The section's registration keeps the observer alive.
    observer.observe(&section);
    on_intersect.forget();

    debug!(counters = count, "count-up counters bound");
    Ok(())
}
