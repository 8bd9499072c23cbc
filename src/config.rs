use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::constants::*;

/// Album cover carousel viewer
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Args {
    /// Directory containing the album cover images
    pub image_directory: PathBuf,

    /// Delay between automatic advances, in milliseconds
    #[arg(long, default_value_t = AUTOPLAY_DELAY_MS)]
    pub autoplay_delay_ms: u64,

    /// Minimum horizontal drag distance for a swipe, in render pixels
    #[arg(long, default_value_t = SWIPE_THRESHOLD)]
    pub swipe_threshold: f32,

    /// Show the albums in random order
    #[arg(long)]
    pub shuffle: bool,

    /// Target frames per second
    #[arg(long, default_value_t = FPS)]
    pub fps: u32,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("autoplay delay must be greater than zero")]
    ZeroAutoplayDelay,
    #[error("swipe threshold must be a finite, non-negative number (got {0})")]
    InvalidSwipeThreshold(f32),
    #[error("fps must be greater than zero")]
    ZeroFps,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselConfig {
    pub autoplay_delay: Duration,
    pub swipe_threshold: f32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay_delay: AUTOPLAY_DELAY,
            swipe_threshold: SWIPE_THRESHOLD,
        }
    }
}

impl TryFrom<&Args> for CarouselConfig {
    type Error = ConfigError;

    fn try_from(args: &Args) -> Result<Self, Self::Error> {
        if args.autoplay_delay_ms == 0 {
            return Err(ConfigError::ZeroAutoplayDelay);
        }
        if !args.swipe_threshold.is_finite() || args.swipe_threshold < 0.0 {
            return Err(ConfigError::InvalidSwipeThreshold(args.swipe_threshold));
        }
        if args.fps == 0 {
            return Err(ConfigError::ZeroFps);
        }
        Ok(Self {
            autoplay_delay: Duration::from_millis(args.autoplay_delay_ms),
            swipe_threshold: args.swipe_threshold,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(extra: &[&str]) -> Args {
        let mut argv = vec!["album-carousel", "covers"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn defaults_match_constants() {
        let args = parse(&[]);
        assert_eq!(args.image_directory, PathBuf::from("covers"));
        assert!(!args.shuffle);
        assert_eq!(args.fps, FPS);

        let config = CarouselConfig::try_from(&args).unwrap();
        assert_eq!(config, CarouselConfig::default());
        assert_eq!(config.autoplay_delay, Duration::from_millis(5000));
        assert_eq!(config.swipe_threshold, 50.0);
    }

    #[test]
    fn overrides_are_applied() {
        let args = parse(&["--autoplay-delay-ms", "1500", "--swipe-threshold", "80", "--shuffle"]);
        assert!(args.shuffle);

        let config = CarouselConfig::try_from(&args).unwrap();
        assert_eq!(config.autoplay_delay, Duration::from_millis(1500));
        assert_eq!(config.swipe_threshold, 80.0);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let args = parse(&["--autoplay-delay-ms", "0"]);
        assert_eq!(CarouselConfig::try_from(&args), Err(ConfigError::ZeroAutoplayDelay));

        let args = parse(&["--fps", "0"]);
        assert_eq!(CarouselConfig::try_from(&args), Err(ConfigError::ZeroFps));

        let mut args = parse(&[]);
        args.swipe_threshold = -1.0;
        assert_eq!(
            CarouselConfig::try_from(&args),
            Err(ConfigError::InvalidSwipeThreshold(-1.0))
        );
    }

    #[test]
    fn missing_directory_is_a_usage_error() {
        assert!(Args::try_parse_from(["album-carousel"]).is_err());
    }
}
