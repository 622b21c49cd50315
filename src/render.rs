//! Translate [`Document`] styles into egui visuals and widgets.

use eframe::egui::{self, Color32, RichText, Stroke, TextStyle, Visuals};

use crate::color::{HexColor, Rgba};
use crate::page::{Document, Property, Region, StyleValue};

pub const ERROR_RED: Color32 = Color32::from_rgb(0xc6, 0x28, 0x28);
pub const WARNING_ORANGE: Color32 = Color32::from_rgb(0xf5, 0x7c, 0x00);
pub const SUCCESS_GREEN: Color32 = Color32::from_rgb(0x2e, 0x7d, 0x32);
pub const MUTED_GRAY: Color32 = Color32::from_rgb(0x66, 0x66, 0x66);

pub fn color32(color: HexColor) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}

pub fn rgba32(color: Rgba) -> Color32 {
    let alpha = (color.alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, alpha)
}

/// Apply light or dark visuals and the root font size.
///
/// Light mode takes the panel fill and text color from the page root;
/// dark mode keeps egui's dark palette.
pub fn apply_page_style(ctx: &egui::Context, doc: &Document, dark: bool) {
    let mut visuals = if dark { Visuals::dark() } else { Visuals::light() };
    if !dark {
        if let Some(background) = doc.color(Region::Root, Property::BackgroundColor) {
            visuals.panel_fill = color32(background);
            visuals.window_fill = color32(background);
        }
        visuals.override_text_color = doc.color(Region::Root, Property::Color).map(color32);
    }

    let mut style = (*ctx.style()).clone();
    style.visuals = visuals;
    if let Some(StyleValue::Px(px)) = doc.style(Region::Root, Property::FontSize) {
        for (text_style, font) in style.text_styles.iter_mut() {
            font.size = match text_style {
                TextStyle::Heading => px * 1.5,
                TextStyle::Small => px * 0.75,
                _ => *px,
            };
        }
    }
    ctx.set_style(style);
}

/// Plain fill color of a region, if it has one.
pub fn region_fill(doc: &Document, region: Region) -> Option<Color32> {
    doc.color(region, Property::BackgroundColor).map(color32)
}

/// Opacity of an image region, fully opaque unless a fade is in progress.
pub fn opacity(doc: &Document, region: Region) -> f32 {
    match doc.style(region, Property::Opacity) {
        Some(StyleValue::Opacity(value)) => value.clamp(0.0, 1.0),
        _ => 1.0,
    }
}

/// A button drawn with the accent styles of `group`.
///
/// The gradient's upper stop fills the button and the shadow color
/// outlines it; unstyled groups fall back to egui's defaults.
pub fn accent_button(doc: &Document, group: Region, label: &str) -> egui::Button<'static> {
    let top = match doc.style(group, Property::Background) {
        Some(StyleValue::Gradient { from, .. }) => Some(color32(*from)),
        _ => None,
    };
    let mut text = RichText::new(label.to_string());
    if let Some(color) = doc.color(group, Property::Color) {
        text = text.color(color32(color));
    } else if top.is_some() {
        text = text.color(Color32::WHITE);
    }
    let mut button = egui::Button::new(text);
    if let Some(fill) = top {
        button = button.fill(fill);
    }
    if let Some(StyleValue::Glow { shadow, .. }) = doc.style(group, Property::BoxShadow) {
        button = button.stroke(Stroke::new(2.0, rgba32(*shadow)));
    }
    button
}

/// Accent for a region's left border, if set.
pub fn border_left(doc: &Document, region: Region) -> Option<Color32> {
    doc.color(region, Property::BorderLeftColor).map(color32)
}
