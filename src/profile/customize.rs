//! Font size adjuster and the background/text color pickers.

use crate::color::HexColor;
use crate::page::{Page, Property, Region, StyleValue};

pub const MIN_FONT_SIZE: u32 = 12;
pub const MAX_FONT_SIZE: u32 = 24;
const FONT_STEP: u32 = 2;

/// Base page font size in pixels, kept within
/// [`MIN_FONT_SIZE`]..=[`MAX_FONT_SIZE`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FontSize(u32);

impl FontSize {
    pub fn new(px: u32) -> Self {
        Self(px.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE))
    }

    pub fn px(self) -> u32 {
        self.0
    }

    /// Step up or down and write the new size to the page root.
    pub fn adjust<P: Page + ?Sized>(&mut self, page: &mut P, increase: bool) -> u32 {
        self.0 = if increase {
            (self.0 + FONT_STEP).min(MAX_FONT_SIZE)
        } else {
            self.0.saturating_sub(FONT_STEP).max(MIN_FONT_SIZE)
        };
        self.write(page);
        self.0
    }

    pub fn write<P: Page + ?Sized>(self, page: &mut P) {
        page.set_style(Region::Root, Property::FontSize, StyleValue::Px(self.0 as f32));
    }
}

impl Default for FontSize {
    fn default() -> Self {
        Self(16)
    }
}

/// Background picker: recolors the root and the wrapper.
pub fn pick_background<P: Page + ?Sized>(page: &mut P, color: HexColor) {
    page.set_style(Region::Root, Property::BackgroundColor, StyleValue::Color(color));
    page.set_style(Region::Wrapper, Property::BackgroundColor, StyleValue::Color(color));
}

/// Text picker: recolors body text. Navbar and buttons keep their own.
pub fn pick_text_color<P: Page + ?Sized>(page: &mut P, color: HexColor) {
    page.set_style(Region::Root, Property::Color, StyleValue::Color(color));
}
