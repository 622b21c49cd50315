use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Default, Parser)]
#[command(name = "profile_slideshow")]
#[command(version)]
#[command(about = "A profile page with a themed image slideshow")]
pub struct CliArgs {
    /// Settings file to read instead of the per-user one
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Folder of slide images; overrides the configured slides
    #[arg(long, short = 'i')]
    pub images: Option<PathBuf>,

    /// Also scan subfolders of --images
    #[arg(long, short = 'r', requires = "images")]
    pub recursive: bool,

    /// Start in dark mode
    #[arg(long)]
    pub dark: bool,

    /// Auto-advance period in milliseconds
    #[arg(long)]
    pub interval_ms: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_args() {
        let args = CliArgs::parse_from(["profile_slideshow"]);
        assert!(args.config.is_none());
        assert!(args.images.is_none());
        assert!(!args.dark);
    }

    #[test]
    fn all_flags() {
        let args = CliArgs::parse_from([
            "profile_slideshow",
            "--config",
            "s.json",
            "--images",
            "pics",
            "-r",
            "--dark",
            "--interval-ms",
            "1500",
        ]);
        assert_eq!(args.config, Some(PathBuf::from("s.json")));
        assert_eq!(args.images, Some(PathBuf::from("pics")));
        assert!(args.recursive);
        assert!(args.dark);
        assert_eq!(args.interval_ms, Some(1500));
    }

    #[test]
    fn recursive_needs_images() {
        assert!(CliArgs::try_parse_from(["profile_slideshow", "-r"]).is_err());
    }
}
