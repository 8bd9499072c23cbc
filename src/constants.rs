use std::time::Duration;

pub const RENDER_WIDTH: i32 = 1920;           // Width of the render texture
pub const RENDER_HEIGHT: i32 = 1080;          // Height of the render texture
pub const FPS: u32 = 60;                      // Default frames per second

pub const AUTOPLAY_DELAY_MS: u64 = 5000;      // Time between automatic advances (milliseconds)
pub const AUTOPLAY_DELAY: Duration = Duration::from_millis(AUTOPLAY_DELAY_MS);
pub const SWIPE_THRESHOLD: f32 = 50.0;        // Horizontal drag dead zone (render pixels)

pub const SLIDE_TRANSITION_DURATION: f32 = 0.5; // Track easing duration (seconds)

// Layout, in render space
pub const TRACK_WIDTH: f32 = 1280.0;
pub const TRACK_HEIGHT: f32 = 800.0;
pub const TRACK_TOP: f32 = 80.0;
pub const CONTROL_RADIUS: f32 = 48.0;
pub const CONTROL_GAP: f32 = 64.0;            // Distance between track edge and control edge
pub const INDICATOR_RADIUS: f32 = 10.0;
pub const INDICATOR_SPACING: f32 = 36.0;      // Centre to centre
pub const INDICATOR_GAP: f32 = 60.0;          // Distance between track bottom and indicator centres

pub const CAPTION_FONT_SIZE: i32 = 40;
pub const TOOLTIP_FONT_SIZE: i32 = 24;
pub const ERROR_DISPLAY_SECS: u64 = 5;
