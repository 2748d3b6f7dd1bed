//! Collapsible mobile navigation menu.
//!
//! The menu is a single open/closed flag mirrored into the page through a
//! [`MenuView`]:
//!
//! | | Open | Closed |
//! |---|---|---|
//! | Menu + body classes | set (body stops scrolling) | cleared |
//! | Toggle icon | [`MenuIcon::Close`] | [`MenuIcon::Bars`] |
//! | `aria-expanded` | `"true"` | `"false"` |
//! | Focus | first menu link | back to the toggle (see [`CloseTrigger`]) |
//!
//! The toggle control flips the state. A link click, an outside click, or the
//! Escape key close it.

use tracing::debug;

/// Icon state of the toggle control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIcon {
    /// Hamburger bars, shown while closed.
    Bars,
    /// Close cross, shown while open.
    Close,
}

/// What closed the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    LinkClick,
    OutsideClick,
    Escape,
}

impl CloseTrigger {
    /// Whether keyboard focus goes back to the toggle after closing.
    ///
    /// An outside click already moved the user's attention elsewhere, so focus
    /// is left where the click put it.
    pub fn restores_focus(self) -> bool {
        !matches!(self, CloseTrigger::OutsideClick)
    }
}

/// Where a document-level click landed relative to the menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickTarget {
    pub inside_menu: bool,
    pub on_toggle: bool,
}

impl ClickTarget {
    pub fn is_outside(self) -> bool {
        !self.inside_menu && !self.on_toggle
    }
}

/// The DOM side of the menu.
pub trait MenuView {
    /// Set or clear the open class on the menu and the scroll-lock class on
    /// the document body.
    fn set_open_classes(&mut self, open: bool);

    fn set_icon(&mut self, icon: MenuIcon);

    /// Reflect the state in the toggle's `aria-expanded` attribute.
    fn set_expanded(&mut self, expanded: bool);

    fn focus_first_link(&mut self);

    fn focus_toggle(&mut self);
}

#[derive(Debug)]
pub struct NavMenu<V> {
    view: V,
    open: bool,
}

impl<V: MenuView> NavMenu<V> {
    /// Wrap a view whose page starts with the menu closed.
    pub fn new(view: V) -> Self {
        Self { view, open: false }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Handle activation of the toggle control.
    pub fn toggle(&mut self) {
        self.open = !self.open;
        self.view.set_open_classes(self.open);
        if self.open {
            self.view.set_icon(MenuIcon::Close);
            self.view.set_expanded(true);
            self.view.focus_first_link();
        } else {
            self.view.set_icon(MenuIcon::Bars);
            self.view.set_expanded(false);
        }
        debug!(open = self.open, "menu toggled");
    }

    /// Close the menu if it is open. Returns whether anything changed.
    pub fn close(&mut self, trigger: CloseTrigger) -> bool {
        if !self.open {
            return false;
        }
        self.open = false;
        self.view.set_open_classes(false);
        self.view.set_icon(MenuIcon::Bars);
        self.view.set_expanded(false);
        if trigger.restores_focus() {
            self.view.focus_toggle();
        }
        debug!(?trigger, "menu closed");
        true
    }

    pub fn handle_link_click(&mut self) -> bool {
        self.close(CloseTrigger::LinkClick)
    }

    pub fn handle_document_click(&mut self, target: ClickTarget) -> bool {
        if !target.is_outside() {
            return false;
        }
        self.close(CloseTrigger::OutsideClick)
    }

    pub fn handle_keydown(&mut self, key: &str) -> bool {
        if key != "Escape" {
            return false;
        }
        self.close(CloseTrigger::Escape)
    }
}
