//! Configuration model and loading.
//!
//! Settings are read once at startup and never written back.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::color::HexColor;
use crate::scheme::{ColorScheme, DEFAULT_SCHEMES, DEFAULT_SLIDES, cycled_scheme};
use crate::slideshow::SlideshowTiming;
use crate::theme::ThemeSettings;

/// File name used under the per-user config directory.
const SETTINGS_FILE: &str = "settings.json";

/// One slide: its image and the colors it brings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SlideSetting {
    /// Image path, relative to `image_dir` when that is set.
    pub image: String,
    #[serde(flatten)]
    pub scheme: ColorScheme,
}

/// Static profile content shown around the slideshow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProfileSetting {
    pub name: String,
    pub job_title: String,
    pub skills: Vec<String>,
    /// Maximum length of the contact message.
    pub message_max_length: usize,
    /// Profile photos in switch order, relative to `image_dir` when set.
    pub pictures: Vec<String>,
}

impl Default for ProfileSetting {
    fn default() -> Self {
        Self {
            name: "Your Name".to_string(),
            job_title: "Web Developer".to_string(),
            skills: ["HTML", "CSS", "JavaScript", "Rust", "Git"]
                .into_iter()
                .map(String::from)
                .collect(),
            message_max_length: 200,
            pictures: ["2x2.jpg", "profile-1.jpg", "profile-2.jpg", "profile-3.jpg"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

/// Settings read from `settings.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    /// Slides in display order.
    pub slides: Vec<SlideSetting>,
    /// Base folder for slide images.
    pub image_dir: Option<String>,
    /// Auto-advance period in milliseconds.
    pub interval_ms: u64,
    /// Fade-in delay after a slide change, in milliseconds.
    pub fade_delay_ms: u64,
    /// Alpha of the accent button shadow.
    pub shadow_alpha: f32,
    /// Alpha of the accent button glow.
    pub glow_alpha: f32,
    /// Shade applied to the accent for the gradient's lower stop.
    pub shade_percent: i32,
    /// Fixed navbar background.
    pub navbar_background: HexColor,
    /// Start in dark mode.
    pub dark_mode: bool,
    /// Base font size in pixels.
    pub font_size: u32,
    pub profile: ProfileSetting,
}

impl Default for AppSettings {
    fn default() -> Self {
        let theme = ThemeSettings::default();
        let timing = SlideshowTiming::default();
        Self {
            slides: DEFAULT_SLIDES
                .iter()
                .zip(DEFAULT_SCHEMES)
                .map(|(image, scheme)| SlideSetting {
                    image: image.to_string(),
                    scheme,
                })
                .collect(),
            image_dir: None,
            interval_ms: timing.interval.as_millis() as u64,
            fade_delay_ms: timing.fade_delay.as_millis() as u64,
            shadow_alpha: theme.shadow_alpha,
            glow_alpha: theme.glow_alpha,
            shade_percent: theme.shade_percent,
            navbar_background: theme.navbar_background,
            dark_mode: false,
            font_size: 16,
            profile: ProfileSetting::default(),
        }
    }
}

impl AppSettings {
    /// Image sources, resolved against `image_dir`.
    pub fn slide_sources(&self) -> Vec<String> {
        self.slides.iter().map(|slide| self.resolve(&slide.image)).collect()
    }

    /// Profile photo sources, resolved against `image_dir`.
    pub fn picture_sources(&self) -> Vec<String> {
        self.profile.pictures.iter().map(|image| self.resolve(image)).collect()
    }

    fn resolve(&self, image: &str) -> String {
        match &self.image_dir {
            Some(dir) => Path::new(dir).join(image).to_string_lossy().to_string(),
            None => image.to_string(),
        }
    }

    /// Color schemes, index-aligned with [`Self::slide_sources`].
    pub fn schemes(&self) -> Vec<ColorScheme> {
        self.slides.iter().map(|slide| slide.scheme).collect()
    }

    /// Replace the slides with discovered image files, cycling the
    /// built-in schemes.
    pub fn use_discovered_images(&mut self, images: &[PathBuf]) {
        self.image_dir = None;
        self.slides = images
            .iter()
            .enumerate()
            .map(|(index, path)| SlideSetting {
                image: path.to_string_lossy().to_string(),
                scheme: cycled_scheme(index),
            })
            .collect();
    }

    pub fn theme_settings(&self) -> ThemeSettings {
        ThemeSettings {
            shadow_alpha: self.shadow_alpha.clamp(0.0, 1.0),
            glow_alpha: self.glow_alpha.clamp(0.0, 1.0),
            shade_percent: self.shade_percent,
            navbar_background: self.navbar_background,
        }
    }

    pub fn timing(&self) -> SlideshowTiming {
        SlideshowTiming {
            interval: Duration::from_millis(self.interval_ms.max(1)),
            fade_delay: Duration::from_millis(self.fade_delay_ms),
        }
    }
}

/// Resolve the per-user settings file path.
pub fn settings_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("dev", "profile_slideshow", "profile_slideshow")
        .ok_or_else(|| anyhow!("cannot determine config directory"))?;
    Ok(proj_dirs.config_dir().join(SETTINGS_FILE))
}

/// Load settings from the per-user config directory, returning defaults
/// when the file is missing or unreadable.
pub fn load() -> AppSettings {
    let path = match settings_path() {
        Ok(path) => path,
        Err(err) => {
            log::warn!("{err}; using default settings");
            return AppSettings::default();
        }
    };
    if !path.exists() {
        log::debug!("no settings at {}, using defaults", path.display());
        return AppSettings::default();
    }
    load_from(&path).unwrap_or_else(|err| {
        log::warn!("{err:#}; using default settings");
        AppSettings::default()
    })
}

/// Load settings from an explicit file.
pub fn load_from(path: &Path) -> Result<AppSettings> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let settings = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    log::info!("loaded settings from {}", path.display());
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_mirror_builtin_slides() {
        let settings = AppSettings::default();
        assert_eq!(settings.slides.len(), 5);
        assert_eq!(settings.schemes(), DEFAULT_SCHEMES.to_vec());
        assert_eq!(settings.timing(), SlideshowTiming::default());
        assert_eq!(settings.theme_settings(), ThemeSettings::default());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let settings: AppSettings =
            serde_json::from_str(r#"{ "interval_ms": 1000, "dark_mode": true }"#).unwrap();
        assert_eq!(settings.timing().interval, Duration::from_millis(1000));
        assert!(settings.dark_mode);
        assert_eq!(settings.slides.len(), 5);
        assert_eq!(settings.profile.message_max_length, 200);
    }

    #[test]
    fn slides_flatten_scheme_fields() {
        let json = r##"{
            "image_dir": "pics",
            "slides": [
                { "image": "a.jpg", "background": "#ffffff", "accent": "#000000", "text": "#111111" }
            ]
        }"##;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        let expected = Path::new("pics").join("a.jpg").to_string_lossy().to_string();
        assert_eq!(settings.slide_sources(), vec![expected]);
        assert_eq!(settings.schemes()[0].text, HexColor::new(0x11, 0x11, 0x11));
    }

    #[test]
    fn pictures_resolve_against_image_dir() {
        let json = r#"{ "image_dir": "pics", "profile": { "pictures": ["me.jpg", "alt.png"] } }"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        let expected: Vec<String> = ["me.jpg", "alt.png"]
            .iter()
            .map(|name| Path::new("pics").join(name).to_string_lossy().to_string())
            .collect();
        assert_eq!(settings.picture_sources(), expected);
        assert_eq!(settings.profile.name, "Your Name");
        assert_eq!(AppSettings::default().picture_sources().len(), 4);
    }

    #[test]
    fn malformed_colors_are_rejected() {
        let json = r#"{ "navbar_background": "white" }"#;
        assert!(serde_json::from_str::<AppSettings>(json).is_err());
    }

    #[test]
    fn alpha_is_clamped() {
        let settings = AppSettings {
            shadow_alpha: 3.0,
            glow_alpha: -1.0,
            ..AppSettings::default()
        };
        let theme = settings.theme_settings();
        assert_eq!(theme.shadow_alpha, 1.0);
        assert_eq!(theme.glow_alpha, 0.0);
    }

    #[test]
    fn discovered_images_cycle_schemes() {
        let mut settings = AppSettings::default();
        let images: Vec<PathBuf> = (0..7).map(|i| PathBuf::from(format!("{i}.png"))).collect();
        settings.use_discovered_images(&images);
        assert_eq!(settings.slides.len(), 7);
        assert_eq!(settings.slides[6].scheme, DEFAULT_SCHEMES[1]);
        assert_eq!(settings.slide_sources()[0], "0.png");
    }
}
