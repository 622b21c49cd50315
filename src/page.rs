//! Host page surface the slideshow and theme write to.
//!
//! Writers address a [`Region`] and never learn whether it exists: a page
//! that lacks a region drops the write. [`Document`] is the in-memory page
//! used by the desktop renderer and by tests.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use crate::color::{HexColor, Rgba};

/// Regions of the profile page touched by the slideshow, theme and toggles.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    /// Page root (body).
    Root,
    /// Outer wrapper around all content.
    Wrapper,
    /// Top navigation bar.
    Navbar,
    /// Links inside the navigation bar.
    NavLinks,
    /// Standard interactive buttons.
    Buttons,
    /// Primary action buttons (submit, quote, auto-advance).
    PrimaryButtons,
    /// Highlighted quote section.
    QuoteSection,
    /// Slide image element.
    SlideImage,
    /// "position / total" counter text.
    SlideCounter,
    /// Start/stop auto-advance control.
    AutoAdvanceButton,
    /// Dark-mode toggle control.
    ThemeButton,
    /// Profile photo, cycled and zoomable.
    ProfileImage,
    /// "Today's Date: ..." line.
    TodayDate,
}

impl Region {
    pub const ALL: [Region; 13] = [
        Region::Root,
        Region::Wrapper,
        Region::Navbar,
        Region::NavLinks,
        Region::Buttons,
        Region::PrimaryButtons,
        Region::QuoteSection,
        Region::SlideImage,
        Region::SlideCounter,
        Region::AutoAdvanceButton,
        Region::ThemeButton,
        Region::ProfileImage,
        Region::TodayDate,
    ];
}

/// Style properties a writer may set on a region.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Property {
    BackgroundColor,
    /// Gradient background (buttons).
    Background,
    Color,
    BoxShadow,
    BorderLeftColor,
    Opacity,
    Transition,
    FontSize,
}

impl Property {
    /// CSS-style property name, used in log output.
    pub fn name(self) -> &'static str {
        match self {
            Property::BackgroundColor => "background-color",
            Property::Background => "background",
            Property::Color => "color",
            Property::BoxShadow => "box-shadow",
            Property::BorderLeftColor => "border-left-color",
            Property::Opacity => "opacity",
            Property::Transition => "transition",
            Property::FontSize => "font-size",
        }
    }
}

/// A typed style value.
#[derive(Clone, Debug, PartialEq)]
pub enum StyleValue {
    Color(HexColor),
    /// Two-stop top-to-bottom gradient.
    Gradient { from: HexColor, to: HexColor },
    /// Outer shadow plus a tighter glow, both translucent, over a fixed
    /// white inset highlight.
    Glow { shadow: Rgba, glow: Rgba },
    Opacity(f32),
    /// Transition hint as CSS text, e.g. `color 0.8s ease`.
    Transition(&'static str),
    Px(f32),
}

impl StyleValue {
    /// The plain color, when this value is one.
    pub fn as_color(&self) -> Option<HexColor> {
        match self {
            StyleValue::Color(color) => Some(*color),
            _ => None,
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Color(color) => write!(f, "{color}"),
            StyleValue::Gradient { from, to } => {
                write!(f, "linear-gradient(180deg, {from} 0%, {to} 100%)")
            }
            StyleValue::Glow { shadow, glow } => write!(
                f,
                "0 4px 12px {shadow}, 0 2px 4px {glow}, inset 0 1px 0 rgba(255, 255, 255, 0.2)"
            ),
            StyleValue::Opacity(value) => write!(f, "{value}"),
            StyleValue::Transition(text) => f.write_str(text),
            StyleValue::Px(value) => write!(f, "{value}px"),
        }
    }
}

/// Write-only view of the host page.
pub trait Page {
    /// Set one style property; absent regions ignore the write.
    fn set_style(&mut self, region: Region, property: Property, value: StyleValue);

    /// Replace the text content of a region.
    fn set_text(&mut self, region: Region, text: &str);

    /// Point an image region at a new source.
    fn set_image(&mut self, region: Region, source: &str);

    /// Add or remove a class on a region.
    fn set_class(&mut self, region: Region, class: &str, enabled: bool);
}

/// State of one region in a [`Document`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Element {
    pub styles: HashMap<Property, StyleValue>,
    pub text: Option<String>,
    pub source: Option<String>,
    pub classes: BTreeSet<String>,
}

/// In-memory page holding a fixed set of regions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    elements: HashMap<Region, Element>,
}

impl Document {
    /// A document containing only the given regions.
    pub fn with_regions(regions: impl IntoIterator<Item = Region>) -> Self {
        Self {
            elements: regions
                .into_iter()
                .map(|region| (region, Element::default()))
                .collect(),
        }
    }

    /// A document with every profile page region present.
    pub fn profile() -> Self {
        Self::with_regions(Region::ALL)
    }

    pub fn contains(&self, region: Region) -> bool {
        self.elements.contains_key(&region)
    }

    pub fn element(&self, region: Region) -> Option<&Element> {
        self.elements.get(&region)
    }

    pub fn style(&self, region: Region, property: Property) -> Option<&StyleValue> {
        self.element(region)?.styles.get(&property)
    }

    /// Shorthand for a style that holds a plain color.
    pub fn color(&self, region: Region, property: Property) -> Option<HexColor> {
        self.style(region, property)?.as_color()
    }

    pub fn text(&self, region: Region) -> Option<&str> {
        self.element(region)?.text.as_deref()
    }

    pub fn source(&self, region: Region) -> Option<&str> {
        self.element(region)?.source.as_deref()
    }

    pub fn has_class(&self, region: Region, class: &str) -> bool {
        self.element(region)
            .is_some_and(|element| element.classes.contains(class))
    }
}

impl Page for Document {
    fn set_style(&mut self, region: Region, property: Property, value: StyleValue) {
        if let Some(element) = self.elements.get_mut(&region) {
            log::trace!("{region:?} {}: {value}", property.name());
            element.styles.insert(property, value);
        }
    }

    fn set_text(&mut self, region: Region, text: &str) {
        if let Some(element) = self.elements.get_mut(&region) {
            element.text = Some(text.to_string());
        }
    }

    fn set_image(&mut self, region: Region, source: &str) {
        if let Some(element) = self.elements.get_mut(&region) {
            element.source = Some(source.to_string());
        }
    }

    fn set_class(&mut self, region: Region, class: &str, enabled: bool) {
        if let Some(element) = self.elements.get_mut(&region) {
            if enabled {
                element.classes.insert(class.to_string());
            } else {
                element.classes.remove(class);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::to_rgba;

    #[test]
    fn absent_regions_drop_writes() {
        let mut doc = Document::with_regions([Region::Root]);
        doc.set_style(Region::Navbar, Property::BackgroundColor, StyleValue::Color(HexColor::WHITE));
        doc.set_text(Region::SlideCounter, "1 / 5");
        assert!(!doc.contains(Region::Navbar));
        assert_eq!(doc.text(Region::SlideCounter), None);
        assert_eq!(doc, Document::with_regions([Region::Root]));
    }

    #[test]
    fn writes_land_on_present_regions() {
        let mut doc = Document::profile();
        doc.set_style(Region::Root, Property::Color, StyleValue::Color(HexColor::new(1, 2, 3)));
        doc.set_image(Region::SlideImage, "a.jpg");
        doc.set_class(Region::Root, "dark-mode", true);
        assert_eq!(doc.color(Region::Root, Property::Color), Some(HexColor::new(1, 2, 3)));
        assert_eq!(doc.source(Region::SlideImage), Some("a.jpg"));
        assert!(doc.has_class(Region::Root, "dark-mode"));
        doc.set_class(Region::Root, "dark-mode", false);
        assert!(!doc.has_class(Region::Root, "dark-mode"));
    }

    #[test]
    fn css_rendering_of_button_styles() {
        let gradient = StyleValue::Gradient {
            from: HexColor::new(0x10, 0xb9, 0x81),
            to: HexColor::new(0x00, 0x86, 0x4e),
        };
        assert_eq!(
            gradient.to_string(),
            "linear-gradient(180deg, #10b981 0%, #00864e 100%)"
        );
        let accent = HexColor::new(0x10, 0xb9, 0x81);
        let glow = StyleValue::Glow {
            shadow: to_rgba(accent, 0.3),
            glow: to_rgba(accent, 0.2),
        };
        assert_eq!(
            glow.to_string(),
            "0 4px 12px rgba(16, 185, 129, 0.3), 0 2px 4px rgba(16, 185, 129, 0.2), inset 0 1px 0 rgba(255, 255, 255, 0.2)"
        );
    }
}
