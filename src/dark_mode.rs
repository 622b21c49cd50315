//! Dark-mode flag and its toggle control.

use std::cell::Cell;
use std::rc::Rc;

use crate::page::{Page, Region};
use crate::theme::DarkModeQuery;

/// Class set on the page root while dark mode is on.
pub const DARK_MODE_CLASS: &str = "dark-mode";

/// Shared dark-mode flag.
///
/// Clones observe the same flag; the theme gets a clone as its
/// [`DarkModeQuery`] and only the toggle owner writes.
#[derive(Clone, Debug, Default)]
pub struct DarkMode(Rc<Cell<bool>>);

impl DarkMode {
    pub fn new(active: bool) -> Self {
        Self(Rc::new(Cell::new(active)))
    }

    pub fn is_active(&self) -> bool {
        self.0.get()
    }

    /// Flip the flag, update the page root class and toggle label, and
    /// return the new state.
    ///
    /// Callers re-apply the slide theme afterwards.
    pub fn toggle<P: Page + ?Sized>(&self, page: &mut P) -> bool {
        let active = !self.0.get();
        self.0.set(active);
        self.sync_page(page);
        log::info!("dark mode {}", if active { "on" } else { "off" });
        active
    }

    /// Write the root class and toggle label for the current state.
    pub fn sync_page<P: Page + ?Sized>(&self, page: &mut P) {
        let active = self.is_active();
        page.set_class(Region::Root, DARK_MODE_CLASS, active);
        page.set_text(Region::ThemeButton, toggle_label(active));
    }
}

impl DarkModeQuery for DarkMode {
    fn is_dark(&self) -> bool {
        self.is_active()
    }
}

/// Label offering the opposite mode.
pub fn toggle_label(active: bool) -> &'static str {
    if active {
        "Toggle Light Mode"
    } else {
        "Toggle Dark Mode"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Document;

    #[test]
    fn toggle_flips_flag_class_and_label() {
        let flag = DarkMode::default();
        let reader = flag.clone();
        let mut doc = Document::profile();

        assert!(flag.toggle(&mut doc));
        assert!(reader.is_dark());
        assert!(doc.has_class(Region::Root, DARK_MODE_CLASS));
        assert_eq!(doc.text(Region::ThemeButton), Some("Toggle Light Mode"));

        assert!(!flag.toggle(&mut doc));
        assert!(!reader.is_dark());
        assert!(!doc.has_class(Region::Root, DARK_MODE_CLASS));
        assert_eq!(doc.text(Region::ThemeButton), Some("Toggle Dark Mode"));
    }
}
