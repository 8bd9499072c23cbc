use std::path::PathBuf;
use std::time::Duration;

use raylib::prelude::*;
use tracing::{info, warn};

use crate::carousel::{Carousel, CarouselError};
use crate::config::CarouselConfig;
use crate::constants::*;
use crate::slider::input::FrameInput;
use crate::slider::layout::{Hit, Layout};
use crate::slider::slide::Slide;
use crate::slider::track::TrackMotion;
use crate::texture_loader::load_texture_with_exif_rotation;

pub struct SliderEngine {
    config: CarouselConfig,
    slides: Vec<Slide>,
    carousel: Option<Carousel>,
    layout: Layout,
    motion: TrackMotion,
    pointer_inside: bool,
    hovered_indicator: Option<usize>,
}

impl SliderEngine {
    pub fn new(config: CarouselConfig) -> Self {
        Self {
            config,
            slides: Vec::new(),
            carousel: None,
            layout: Layout::new(0),
            motion: TrackMotion::new(0.0),
            pointer_inside: false,
            hovered_indicator: None,
        }
    }

    fn draw_slides<D: RaylibDraw>(&self, d: &mut D) {
        let offset = self.motion.displayed_percent();
        let track = self.layout.track;
        for (i, slide) in self.slides.iter().enumerate() {
            let cell = self.layout.slide_cell(i, offset);
            // Skip cells entirely outside the track
            if cell.x + cell.width <= track.x || cell.x >= track.x + track.width {
                continue;
            }
            slide.draw(d, cell);
        }
    }

    fn draw_controls<D: RaylibDraw>(&self, d: &mut D, carousel: &Carousel) {
        for (centre, glyph) in [(self.layout.previous, "<"), (self.layout.next, ">")] {
            d.draw_circle_v(centre, CONTROL_RADIUS, Color::MAROON);
            d.draw_text(glyph, centre.x as i32 - 12, centre.y as i32 - 24, 48, Color::WHITE);
        }

        for (centre, indicator) in self.layout.indicators().iter().zip(carousel.indicators()) {
            let color = if indicator.active { Color::GOLD } else { Color::GRAY };
            d.draw_circle_v(*centre, INDICATOR_RADIUS, color);
        }

        // Autoplay countdown along the bottom edge of the track
        let track = self.layout.track;
        let bar_y = (track.y + track.height) as i32 + 4;
        match carousel.autoplay_remaining() {
            Some(remaining) => {
                let progress = 1.0 - remaining.as_secs_f32() / self.config.autoplay_delay.as_secs_f32();
                d.draw_rectangle(track.x as i32, bar_y, (track.width * progress) as i32, 4, Color::MAROON);
            }
            None => d.draw_text("PAUSED", track.x as i32, bar_y + 8, TOOLTIP_FONT_SIZE, Color::GRAY),
        }

        let counter = format!("{} / {}", carousel.position() + 1, carousel.slide_count());
        d.draw_text(&counter, (track.x + track.width) as i32 - 120, bar_y + 8, TOOLTIP_FONT_SIZE, Color::RAYWHITE);

        if let Some(i) = self.hovered_indicator {
            if let (Some(centre), Some(indicator)) =
                (self.layout.indicators().get(i), carousel.indicators().get(i))
            {
                d.draw_text(
                    &indicator.label,
                    centre.x as i32 - 60,
                    centre.y as i32 + 2 * INDICATOR_RADIUS as i32,
                    TOOLTIP_FONT_SIZE,
                    Color::RAYWHITE,
                );
            }
        }
    }
}

impl crate::engine::Engine for SliderEngine {
    fn initialize(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, paths: Vec<PathBuf>) -> Result<usize, CarouselError> {
        self.slides.clear();
        for path in paths {
            match load_texture_with_exif_rotation(rl, thread, &path) {
                Ok(image) => {
                    let caption = path
                        .file_stem()
                        .map(|stem| stem.to_string_lossy().into_owned())
                        .unwrap_or_default();
                    self.slides.push(Slide::new(image, caption));
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping image");
                }
            }
        }

        let carousel = Carousel::new(self.slides.len(), &self.config)?;
        self.layout = Layout::new(carousel.slide_count());
        self.motion = TrackMotion::new(carousel.track_offset_percent() as f32);
        self.carousel = Some(carousel);

        info!(
            slides = self.slides.len(),
            first = self.slides.first().map(Slide::caption).unwrap_or_default(),
            "album carousel initialized"
        );
        Ok(self.slides.len())
    }

    fn update(&mut self, dt: f32, rl: &RaylibHandle) {
        let Some(carousel) = self.carousel.as_mut() else {
            return;
        };

        // A minimized window has nothing to show; release the timer
        if rl.is_window_minimized() {
            carousel.deactivate();
            return;
        }
        if !carousel.is_active() {
            carousel.activate();
        }

        let frame = FrameInput::poll(rl);
        for input in frame.translate(&self.layout, self.pointer_inside) {
            carousel.handle(input);
        }
        self.pointer_inside = self.layout.track_contains(frame.pointer);
        self.hovered_indicator = match self.layout.hit(frame.pointer) {
            Some(Hit::Indicator(i)) => Some(i),
            _ => None,
        };

        carousel.tick(Duration::from_secs_f32(dt.max(0.0)));

        self.motion.retarget(carousel.track_offset_percent() as f32);
        self.motion.update(dt);
    }

    fn render_frame(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, framebuffer: &mut RenderTexture2D) {
        let Some(carousel) = self.carousel.as_ref() else {
            return;
        };
        let track = self.layout.track;

        rl.draw_texture_mode(thread, framebuffer, |mut tmd| {
            let mut d = tmd.begin_drawing(thread);
            d.clear_background(Color::BLACK);
            d.draw_rectangle_rec(track, Color::new(20, 20, 20, 255));

            {
                let mut s = d.begin_scissor_mode(
                    track.x as i32,
                    track.y as i32,
                    track.width as i32,
                    track.height as i32,
                );
                self.draw_slides(&mut s);
            }

            self.draw_controls(&mut d, carousel);
        });
    }
}
