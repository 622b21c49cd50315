//! Theme synchronization: derive page colors from the current slide.

use crate::color::{HexColor, shade, to_rgba};
use crate::page::{Page, Property, Region, StyleValue};
use crate::scheme::ColorScheme;

const BODY_TRANSITION: &str = "background-color 0.8s ease, color 0.8s ease";
const BACKGROUND_TRANSITION: &str = "background-color 0.8s ease";
const BUTTON_TRANSITION: &str = "background 0.8s ease, box-shadow 0.8s ease";
const LINK_TRANSITION: &str = "color 0.8s ease, background-color 0.8s ease";
const BORDER_TRANSITION: &str = "border-left-color 0.8s ease";

/// Read access to the dark-mode flag.
pub trait DarkModeQuery {
    fn is_dark(&self) -> bool;
}

impl<F> DarkModeQuery for F
where
    F: Fn() -> bool,
{
    fn is_dark(&self) -> bool {
        self()
    }
}

/// Tunables for the derived button styles.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ThemeSettings {
    /// Alpha of the wide button shadow.
    pub shadow_alpha: f32,
    /// Alpha of the tight button glow.
    pub glow_alpha: f32,
    /// Percent passed to [`shade`] for the gradient's lower stop.
    pub shade_percent: i32,
    /// Navbar background, independent of the slide.
    pub navbar_background: HexColor,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            shadow_alpha: 0.3,
            glow_alpha: 0.2,
            shade_percent: -20,
            navbar_background: HexColor::WHITE,
        }
    }
}

/// Applies the scheme of a slide index to a [`Page`].
///
/// Holds no mutable state: the outcome depends only on the index and on
/// what the dark-mode query reports at call time.
pub struct ThemeSynchronizer {
    schemes: Vec<ColorScheme>,
    settings: ThemeSettings,
    dark_mode: Box<dyn DarkModeQuery>,
}

impl ThemeSynchronizer {
    pub fn new(
        schemes: Vec<ColorScheme>,
        settings: ThemeSettings,
        dark_mode: impl DarkModeQuery + 'static,
    ) -> Self {
        Self {
            schemes,
            settings,
            dark_mode: Box::new(dark_mode),
        }
    }

    pub fn schemes(&self) -> &[ColorScheme] {
        &self.schemes
    }

    pub fn scheme(&self, index: usize) -> Option<&ColorScheme> {
        self.schemes.get(index)
    }

    pub fn settings(&self) -> &ThemeSettings {
        &self.settings
    }

    /// Write the theme for `index`. Out-of-range indices are ignored.
    ///
    /// While dark mode is active only the two button groups are restyled;
    /// surfaces, links and the quote border keep their dark-mode look.
    pub fn apply_theme<P: Page + ?Sized>(&self, page: &mut P, index: usize) {
        let Some(scheme) = self.schemes.get(index) else {
            log::debug!("no color scheme for slide {index}, theme unchanged");
            return;
        };
        let dark = self.dark_mode.is_dark();
        log::debug!("applying theme for slide {index} (dark mode: {dark})");

        if !dark {
            self.paint_surfaces(page, scheme);
        }

        let gradient = StyleValue::Gradient {
            from: scheme.accent,
            to: shade(scheme.accent, self.settings.shade_percent),
        };
        let glow = StyleValue::Glow {
            shadow: to_rgba(scheme.accent, self.settings.shadow_alpha),
            glow: to_rgba(scheme.accent, self.settings.glow_alpha),
        };
        for region in [Region::Buttons, Region::PrimaryButtons] {
            page.set_style(region, Property::Transition, StyleValue::Transition(BUTTON_TRANSITION));
            page.set_style(region, Property::Background, gradient.clone());
            page.set_style(region, Property::BoxShadow, glow.clone());
        }
        page.set_style(Region::Buttons, Property::Color, StyleValue::Color(HexColor::WHITE));

        if !dark {
            page.set_style(Region::NavLinks, Property::Transition, StyleValue::Transition(LINK_TRANSITION));
            page.set_style(Region::NavLinks, Property::Color, StyleValue::Color(scheme.text));
            page.set_style(Region::QuoteSection, Property::Transition, StyleValue::Transition(BORDER_TRANSITION));
            page.set_style(Region::QuoteSection, Property::BorderLeftColor, StyleValue::Color(scheme.accent));
        }
    }

    fn paint_surfaces<P: Page + ?Sized>(&self, page: &mut P, scheme: &ColorScheme) {
        page.set_style(Region::Root, Property::Transition, StyleValue::Transition(BODY_TRANSITION));
        page.set_style(Region::Root, Property::BackgroundColor, StyleValue::Color(scheme.background));
        page.set_style(Region::Root, Property::Color, StyleValue::Color(scheme.text));

        page.set_style(Region::Wrapper, Property::Transition, StyleValue::Transition(BACKGROUND_TRANSITION));
        page.set_style(Region::Wrapper, Property::BackgroundColor, StyleValue::Color(scheme.background));

        page.set_style(Region::Navbar, Property::Transition, StyleValue::Transition(BACKGROUND_TRANSITION));
        page.set_style(
            Region::Navbar,
            Property::BackgroundColor,
            StyleValue::Color(self.settings.navbar_background),
        );
    }
}

impl std::fmt::Debug for ThemeSynchronizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeSynchronizer")
            .field("schemes", &self.schemes)
            .field("settings", &self.settings)
            .field("dark", &self.dark_mode.is_dark())
            .finish()
    }
}
