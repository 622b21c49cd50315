use anyhow::{Result, bail};
use clap::Parser;

use profile_slideshow::app::ProfileApp;
use profile_slideshow::cli::CliArgs;
use profile_slideshow::image_ops::collect_images;
use profile_slideshow::settings;

fn main() -> Result<()> {
    // Set RUST_LOG to control verbosity.
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = CliArgs::parse();

    let mut settings = match &args.config {
        Some(path) => settings::load_from(path)?,
        None => settings::load(),
    };
    if let Some(folder) = &args.images {
        let images = collect_images(folder, args.recursive)?;
        if images.is_empty() {
            bail!("no supported images in {}", folder.display());
        }
        settings.use_discovered_images(&images);
    }
    if args.dark {
        settings.dark_mode = true;
    }
    if let Some(interval_ms) = args.interval_ms {
        settings.interval_ms = interval_ms;
    }

    let app = ProfileApp::new(&settings)?;
    let native_options = eframe::NativeOptions::default();
    eframe::run_native(
        "Profile Slideshow",
        native_options,
        Box::new(move |_cc| Box::new(app)),
    )?;
    Ok(())
}
