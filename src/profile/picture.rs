//! Profile photo switcher and click-to-zoom.

use std::time::{Duration, Instant};

use crate::page::{Page, Region};
use crate::slideshow::Fade;

/// Class set on the profile image while it is zoomed in.
pub const ZOOM_CLASS: &str = "zoomed";

/// Cycles the profile photo through a fixed list, fading like the slides.
#[derive(Debug)]
pub struct ProfilePicture {
    images: Vec<String>,
    current: usize,
    zoomed: bool,
    fade: Fade,
}

impl ProfilePicture {
    pub fn new(images: Vec<String>, fade_delay: Duration) -> Self {
        Self {
            images,
            current: 0,
            zoomed: false,
            fade: Fade::new(Region::ProfileImage, fade_delay),
        }
    }

    /// Show the first photo, not zoomed.
    pub fn init<P: Page + ?Sized>(&mut self, page: &mut P) {
        self.current = 0;
        self.zoomed = false;
        if let Some(first) = self.images.first() {
            page.set_image(Region::ProfileImage, first);
        }
        page.set_class(Region::ProfileImage, ZOOM_CLASS, false);
    }

    /// Switch to the next photo, wrapping after the last, and start the fade.
    /// An empty list leaves the page alone.
    pub fn cycle<P: Page + ?Sized>(&mut self, page: &mut P) -> Option<&str> {
        if self.images.is_empty() {
            log::debug!("no profile pictures to cycle");
            return None;
        }
        self.current = (self.current + 1) % self.images.len();
        let source = &self.images[self.current];
        page.set_image(Region::ProfileImage, source);
        self.fade.start(page, Instant::now());
        Some(source)
    }

    pub fn poll<P: Page + ?Sized>(&mut self, page: &mut P, now: Instant) {
        self.fade.finish(page, now);
    }

    /// Flip the zoom class; returns the new state.
    pub fn toggle_zoom<P: Page + ?Sized>(&mut self, page: &mut P) -> bool {
        self.zoomed = !self.zoomed;
        page.set_class(Region::ProfileImage, ZOOM_CLASS, self.zoomed);
        self.zoomed
    }

    pub fn current_source(&self) -> Option<&str> {
        self.images.get(self.current).map(String::as_str)
    }

    pub fn is_zoomed(&self) -> bool {
        self.zoomed
    }

    pub fn is_fading(&self) -> bool {
        self.fade.is_active()
    }
}
