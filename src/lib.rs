//! Profile page with a themed slideshow.
//!
//! The slideshow and theme write to a [`page::Page`]; the desktop app
//! renders the in-memory [`page::Document`] with egui.

pub mod app;
pub mod cli;
pub mod color;
pub mod dark_mode;
pub mod image_ops;
pub mod page;
pub mod profile;
pub mod render;
pub mod scheme;
pub mod settings;
pub mod slideshow;
pub mod state;
pub mod theme;
