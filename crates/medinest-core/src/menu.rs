//! Mobile menu visibility

use crate::navigation::Icon;

/// Open/closed state of the sidebar on narrow viewports
///
/// The sidebar is never unmounted; this only decides whether it is slid
/// into view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn closed() -> Self {
        Self { open: false }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Menu button press
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Sidebar link activation; always leaves the menu closed
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Glyph on the toggle button: hamburger while closed, close while open
    pub fn glyph(&self) -> Icon {
        if self.open {
            Icon::Close
        } else {
            Icon::Menu
        }
    }

    /// Accessible label for the toggle button
    pub fn toggle_label(&self) -> &'static str {
        if self.open {
            "Close menu"
        } else {
            "Open menu"
        }
    }

    /// Position class of the sidebar; closed only hides it below the
    /// desktop breakpoint
    pub fn sidebar_class(&self) -> &'static str {
        if self.open {
            "sidebar sidebar-open"
        } else {
            "sidebar sidebar-closed"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores_state() {
        for initial in [MobileMenu::closed(), {
            let mut open = MobileMenu::closed();
            open.toggle();
            open
        }] {
            let mut menu = initial;
            menu.toggle();
            assert_ne!(menu, initial);
            menu.toggle();
            assert_eq!(menu, initial);
        }
    }

    #[test]
    fn test_close_is_unconditional() {
        let mut menu = MobileMenu::closed();
        menu.close();
        assert!(!menu.is_open());

        menu.toggle();
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_glyph_follows_state() {
        let mut menu = MobileMenu::default();
        assert_eq!(menu.glyph(), Icon::Menu);
        assert_eq!(menu.sidebar_class(), "sidebar sidebar-closed");

        menu.toggle();
        assert_eq!(menu.glyph(), Icon::Close);
        assert_eq!(menu.toggle_label(), "Close menu");
        assert_eq!(menu.sidebar_class(), "sidebar sidebar-open");
    }
}
