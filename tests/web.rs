//! Browser tests for the DOM bindings.
//!
//! Each test inserts its own markup with unique class names and binds it
//! through `init_with_config`, since listeners from earlier tests stay
//! registered on the shared page.
//!
//! Run with: wasm-pack test --headless --chrome

#![cfg(target_arch = "wasm32")]

use landing_kit::web::init_with_config;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{
    Document, Element, Event, EventInit, HtmlElement, KeyboardEvent, KeyboardEventInit, Node,
};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn mount(html: &str) -> Element {
    let doc = document();
    let root = doc.create_element("div").unwrap();
    root.set_inner_html(html);
    doc.body().unwrap().append_child(&root).unwrap();
    root
}

fn html(doc: &Document, selector: &str) -> HtmlElement {
    doc.query_selector(selector)
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
}

fn has_focus(doc: &Document, element: &Element) -> bool {
    let node: &Node = element;
    doc.active_element()
        .is_some_and(|active| active.is_same_node(Some(node)))
}

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

/// Menu bound to `<prefix>-toggle`, `<prefix>-menu`, and `<prefix>-list`;
/// every other feature points at nothing.
fn menu_config(prefix: &str) -> String {
    format!(
        r#"
[menu]
toggle = ".{prefix}-toggle"
menu = ".{prefix}-menu"
links = ".{prefix}-list li a"

[scroll]
anchors = ".none-anchor"

[counters]
section_id = "none-results"

[carousel]
track = ".none-track"

[reveal]
enabled = false
"#
    )
}

fn menu_markup(prefix: &str) -> String {
    format!(
        r##"
<button class="{prefix}-toggle" aria-expanded="false"><i class="fa-bars"></i></button>
<nav class="{prefix}-menu"><ul class="{prefix}-list"><li><a href="#{prefix}-top">Top</a></li></ul></nav>
<p class="{prefix}-outside">Elsewhere</p>
"##
    )
}

// ===========================================================================
// Menu
// ===========================================================================

#[wasm_bindgen_test]
fn menu_opens_and_closes_on_escape() {
    let root = mount(&menu_markup("m1"));
    init_with_config(&menu_config("m1"));

    let doc = document();
    let toggle = html(&doc, ".m1-toggle");
    let menu = html(&doc, ".m1-menu");
    let icon = html(&doc, ".m1-toggle i");
    let link = html(&doc, ".m1-list a");
    let body = doc.body().unwrap();

    toggle.click();
    assert!(menu.class_list().contains("active"));
    assert!(body.class_list().contains("no-scroll"));
    assert!(icon.class_list().contains("fa-times"));
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("true"));
    assert!(has_focus(&doc, &link));

    let init = KeyboardEventInit::new();
    init.set_key("Escape");
    let escape = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    doc.dispatch_event(&escape).unwrap();

    assert!(!menu.class_list().contains("active"));
    assert!(!body.class_list().contains("no-scroll"));
    assert!(icon.class_list().contains("fa-bars"));
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("false"));
    assert!(has_focus(&doc, &toggle));
    root.remove();
}

#[wasm_bindgen_test]
fn menu_link_click_closes_and_focuses_toggle() {
    let root = mount(&menu_markup("m2"));
    init_with_config(&menu_config("m2"));

    let doc = document();
    let toggle = html(&doc, ".m2-toggle");
    let menu = html(&doc, ".m2-menu");
    let link = html(&doc, ".m2-list a");

    toggle.click();
    assert!(menu.class_list().contains("active"));

    link.click();
    assert!(!menu.class_list().contains("active"));
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("false"));
    assert!(has_focus(&doc, &toggle));
    root.remove();
}

#[wasm_bindgen_test]
fn menu_outside_click_closes_without_moving_focus() {
    let root = mount(&menu_markup("m3"));
    init_with_config(&menu_config("m3"));

    let doc = document();
    let toggle = html(&doc, ".m3-toggle");
    let menu = html(&doc, ".m3-menu");
    let link = html(&doc, ".m3-list a");

    toggle.click();
    assert!(has_focus(&doc, &link));

    // Clicks inside the menu are not outside clicks.
    menu.click();
    assert!(menu.class_list().contains("active"));

    html(&doc, ".m3-outside").click();
    assert!(!menu.class_list().contains("active"));
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("false"));
    assert!(has_focus(&doc, &link));
    assert!(!has_focus(&doc, &toggle));
    root.remove();
}

// ===========================================================================
// Scroll
// ===========================================================================

#[wasm_bindgen_test]
fn anchor_default_is_prevented_even_without_target() {
    let root = mount(r##"<a class="s1-anchor" href="#">Top</a>"##);
    init_with_config(
        r#"
[scroll]
anchors = ".s1-anchor"

[counters]
section_id = "none-results"

[carousel]
track = ".none-track"

[reveal]
enabled = false
"#,
    );

    let anchor = html(&document(), ".s1-anchor");
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let click = Event::new_with_event_init_dict("click", &init).unwrap();
    let not_prevented = anchor.dispatch_event(&click).unwrap();
    assert!(!not_prevented);
    root.remove();
}

#[wasm_bindgen_test]
async fn anchor_scrolls_target_below_fixed_header() {
    let root = mount(
        r##"
<div class="s2-header" style="position:fixed;top:0;left:0;width:100%;height:50px;"></div>
<a class="s2-anchor" href="#s2-target">Go</a>
<div style="height:3000px"></div>
<div id="s2-target" style="height:10px">Target</div>
<div style="height:3000px"></div>
"##,
    );
    init_with_config(
        r#"
[scroll]
anchors = ".s2-anchor"
header = ".s2-header"

[counters]
section_id = "none-results"

[carousel]
track = ".none-track"

[reveal]
enabled = false
"#,
    );

    let window = web_sys::window().unwrap();
    let doc = document();
    window.scroll_to_with_x_and_y(0.0, 0.0);
    let target = doc.get_element_by_id("s2-target").unwrap();
    let target_top = target.get_bounding_client_rect().top() + window.scroll_y().unwrap();
    let expected = target_top - 50.0 - 20.0;

    html(&doc, ".s2-anchor").click();

    let mut scrolled = window.scroll_y().unwrap();
    for _ in 0..50 {
        if (scrolled - expected).abs() < 1.0 {
            break;
        }
        sleep(100).await;
        scrolled = window.scroll_y().unwrap();
    }
    assert!(
        (scrolled - expected).abs() < 1.0,
        "scrolled to {scrolled}, expected {expected}"
    );

    window.scroll_to_with_x_and_y(0.0, 0.0);
    root.remove();
}

// ===========================================================================
// Counters
// ===========================================================================

#[wasm_bindgen_test]
async fn counters_count_up_once_when_section_is_visible() {
    let root = mount(
        r#"
<section id="k1-results" style="position:fixed;top:0;left:0;width:200px;height:200px;">
  <div class="k1-item"><span class="k1-number" data-target="1500">0</span></div>
  <div class="k1-item"><span class="k1-number" data-target="95%">0</span></div>
  <div class="k1-item"><span class="k1-number" data-target="+42">0</span></div>
  <div class="k1-item animated"><span class="k1-number" data-target="700">700+</span></div>
  <div class="k1-item"><span class="k1-number" data-target="n/a">n/a</span></div>
</section>
"#,
    );
    init_with_config(
        r#"
[scroll]
anchors = ".none-anchor"

[carousel]
track = ".none-track"

[reveal]
enabled = false

[counters]
section_id = "k1-results"
item = ".k1-item"
number = ".k1-number"
duration_ms = 300
"#,
    );

    let items = root.query_selector_all(".k1-item").unwrap();
    let item = |i: u32| items.item(i).unwrap().dyn_into::<Element>().unwrap();
    let text = |i: u32| {
        item(i)
            .query_selector(".k1-number")
            .unwrap()
            .unwrap()
            .text_content()
            .unwrap_or_default()
    };

    for _ in 0..50 {
        if text(0) == "+1.500" && text(1) == "%95" && text(2) == "+42" {
            break;
        }
        sleep(100).await;
    }
    assert_eq!(text(0), "+1.500");
    assert_eq!(text(1), "%95");
    assert_eq!(text(2), "+42");
    for i in 0..3 {
        assert!(item(i).class_list().contains("animated"));
    }

    // Already marked, and no digits: both left untouched.
    assert_eq!(text(3), "700+");
    assert_eq!(text(4), "n/a");
    assert!(!item(4).class_list().contains("animated"));

    // Leaving and re-entering the viewport does not restart anything.
    let section = html(&document(), "#k1-results");
    section.style().set_property("display", "none").unwrap();
    sleep(100).await;
    section.style().remove_property("display").unwrap();
    sleep(200).await;
    assert_eq!(text(0), "+1.500");
    assert_eq!(text(1), "%95");
    assert_eq!(text(2), "+42");
    assert_eq!(text(3), "700+");

    root.remove();
}

// ===========================================================================
// Carousel
// ===========================================================================

#[wasm_bindgen_test]
fn carousel_builds_indicators_and_wraps() {
    let root = mount(
        r#"
<div class="c1-track"><div>One</div><div>Two</div><div>Three</div></div>
<button class="c1-prev">Prev</button>
<button class="c1-next">Next</button>
<div class="c1-dots"></div>
"#,
    );
    init_with_config(
        r#"
[scroll]
anchors = ".none-anchor"

[counters]
section_id = "none-results"

[reveal]
enabled = false

[carousel]
track = ".c1-track"
prev = ".c1-prev"
next = ".c1-next"
indicators = ".c1-dots"
"#,
    );

    let doc = document();
    let dots = doc.query_selector(".c1-dots").unwrap().unwrap();
    let buttons = dots.children();
    assert_eq!(buttons.length(), 3);
    assert_eq!(
        buttons.item(1).unwrap().get_attribute("aria-label").as_deref(),
        Some("Slide 2")
    );

    let active = || -> Vec<u32> {
        (0..buttons.length())
            .filter(|&i| buttons.item(i).unwrap().class_list().contains("active"))
            .collect()
    };
    assert_eq!(active(), vec![0]);

    html(&doc, ".c1-prev").click();
    assert_eq!(active(), vec![2]);

    html(&doc, ".c1-next").click();
    assert_eq!(active(), vec![0]);

    buttons
        .item(1)
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
    assert_eq!(active(), vec![1]);
    root.remove();
}

// ===========================================================================
// Entry points
// ===========================================================================

#[wasm_bindgen_test]
fn invalid_config_falls_back_without_throwing() {
    init_with_config("[menu]\nbogus = 1\n");
    init_with_config("not = [valid toml");
}

#[wasm_bindgen_test]
fn logging_init_is_idempotent() {
    landing_kit::logging::init("debug");
    landing_kit::logging::init("warn");
    tracing::warn!("console logging still works");
}
