//! Slide image discovery and decoding.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

/// Collect all supported images under `folder`, sorted by path.
pub fn collect_images(folder: &Path, include_subfolders: bool) -> Result<Vec<PathBuf>> {
    let mut walker = WalkDir::new(folder).follow_links(true);
    if !include_subfolders {
        walker = walker.max_depth(1);
    }
    let mut images = Vec::new();
    for entry in walker {
        let entry = entry.with_context(|| format!("failed to scan {}", folder.display()))?;
        if entry.file_type().is_file() && is_supported_image(entry.path()) {
            images.push(entry.path().to_path_buf());
        }
    }
    images.sort();
    images.dedup();
    log::info!("found {} slide images in {}", images.len(), folder.display());
    Ok(images)
}

/// Return true when the file extension is a supported image type.
pub fn is_supported_image(path: &Path) -> bool {
    match path.extension().and_then(OsStr::to_str) {
        Some(ext) => matches!(
            ext.to_ascii_lowercase().as_str(),
            "jpg" | "jpeg" | "png" | "bmp" | "gif" | "tif" | "tiff" | "webp"
        ),
        None => false,
    }
}

/// Decode an image file into an egui texture image.
pub fn load_color_image(path: &Path) -> Result<egui::ColorImage> {
    let img = image::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let rgba = img.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn extension_filter_ignores_case() {
        assert!(is_supported_image(Path::new("a/B.JPG")));
        assert!(is_supported_image(Path::new("c.webp")));
        assert!(!is_supported_image(Path::new("notes.txt")));
        assert!(!is_supported_image(Path::new("README")));
    }

    #[test]
    fn collects_sorted_images_and_respects_depth() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.png"), b"").unwrap();
        fs::write(dir.path().join("a.jpg"), b"").unwrap();
        fs::write(dir.path().join("skip.txt"), b"").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("c.gif"), b"").unwrap();

        let flat = collect_images(dir.path(), false).unwrap();
        let names: Vec<_> = flat
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.jpg", "b.png"]);

        let deep = collect_images(dir.path(), true).unwrap();
        assert_eq!(deep.len(), 3);
    }

    #[test]
    fn decodes_a_small_png() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dot.png");
        image::RgbaImage::from_pixel(2, 3, image::Rgba([10, 20, 30, 255]))
            .save(&path)
            .unwrap();
        let color = load_color_image(&path).unwrap();
        assert_eq!(color.size, [2, 3]);
        assert_eq!(color.pixels[0], egui::Color32::from_rgb(10, 20, 30));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_color_image(Path::new("/definitely/not/here.png")).is_err());
    }
}
