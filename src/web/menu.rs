//! Mobile menu bound to the toggle button, its links, and the document.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, KeyboardEvent, Node};

use super::{WebResult, listen, log_js_err, query_all, query_element};
use crate::config::MenuConfig;
use crate::menu::{ClickTarget, MenuIcon, MenuView, NavMenu};

struct DomMenuView {
    toggle: HtmlElement,
    menu: Element,
    body: HtmlElement,
    icon: Option<Element>,
    config: MenuConfig,
}

impl MenuView for DomMenuView {
    fn set_open_classes(&mut self, open: bool) {
        log_js_err(
            self.menu
                .class_list()
                .toggle_with_force(&self.config.open_class, open),
            "toggle menu class",
        );
        log_js_err(
            self.body
                .class_list()
                .toggle_with_force(&self.config.body_class, open),
            "toggle body class",
        );
    }

    fn set_icon(&mut self, icon: MenuIcon) {
        let Some(el) = &self.icon else {
            return;
        };
        let (remove, add) = match icon {
            MenuIcon::Bars => (&self.config.icon_open, &self.config.icon_closed),
            MenuIcon::Close => (&self.config.icon_closed, &self.config.icon_open),
        };
        let classes = el.class_list();
        log_js_err(classes.remove_1(remove), "swap menu icon");
        log_js_err(classes.add_1(add), "swap menu icon");
    }

    fn set_expanded(&mut self, expanded: bool) {
        let value = if expanded { "true" } else { "false" };
        log_js_err(
            self.toggle.set_attribute("aria-expanded", value),
            "set aria-expanded",
        );
    }

    fn focus_first_link(&mut self) {
        let link = self
            .menu
            .query_selector("a")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        if let Some(link) = link {
            log_js_err(link.focus(), "focus first menu link");
        }
    }

    fn focus_toggle(&mut self) {
        log_js_err(self.toggle.focus(), "focus menu toggle");
    }
}

pub(super) fn bind(document: &Document, config: &MenuConfig) -> WebResult<()> {
    let toggle = query_element(document, &config.toggle)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    let menu = query_element(document, &config.menu);
    let (Some(toggle), Some(menu), Some(body)) = (toggle, menu, document.body()) else {
        debug!("menu elements not found; mobile menu inactive");
        return Ok(());
    };

    let icon = toggle.query_selector(&config.icon).ok().flatten();
    let view = DomMenuView {
        toggle: toggle.clone(),
        menu: menu.clone(),
        body,
        icon,
        config: config.clone(),
    };
    let nav = Rc::new(RefCell::new(NavMenu::new(view)));

    {
        let nav = Rc::clone(&nav);
        listen(&toggle, "click", move |_| nav.borrow_mut().toggle())?;
    }

    let links = query_all(document, &config.links);
    for link in &links {
        let nav = Rc::clone(&nav);
        listen(link, "click", move |_| {
            nav.borrow_mut().handle_link_click();
        })?;
    }

    {
        let nav = Rc::clone(&nav);
        let menu_node: Node = menu.into();
        let toggle_node: Node = toggle.into();
        listen(document, "click", move |event: Event| {
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            let click = ClickTarget {
                inside_menu: menu_node.contains(target.as_ref()),
                on_toggle: toggle_node.contains(target.as_ref()),
            };
            nav.borrow_mut().handle_document_click(click);
        })?;
    }

    listen(document, "keydown", move |event: Event| {
        if let Some(key) = event.dyn_ref::<KeyboardEvent>() {
            nav.borrow_mut().handle_keydown(&key.key());
        }
    })?;

    debug!(links = links.len(), "mobile menu bound");
    Ok(())
}
