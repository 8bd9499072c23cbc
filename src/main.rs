use std::time::Duration;

use anyhow::{anyhow, Context};
use clap::Parser;
use rand::seq::SliceRandom;
use raylib::prelude::*;
use tracing::info;

mod carousel;
mod config;
mod constants;
mod engine;
mod slider;
mod texture_loader;

use crate::config::{Args, CarouselConfig};
use crate::constants::*;
use crate::engine::Engine;
use crate::slider::SliderEngine;
use crate::texture_loader::load_sorted_image_paths;

/// Shows a fatal error in the window for a few seconds.
fn show_error(rl: &mut RaylibHandle, thread: &RaylibThread, message: &str) {
    let mut d = rl.begin_drawing(thread);
    d.clear_background(Color::BLACK);
    d.draw_text(&format!("Error: {}", message), 20, 20, 20, Color::RED);
    drop(d);
    std::thread::sleep(Duration::from_secs(ERROR_DISPLAY_SECS));
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let config = CarouselConfig::try_from(&args).context("invalid arguments")?;

    let mut image_paths = load_sorted_image_paths(&args.image_directory)
        .with_context(|| format!("failed to load images from {}", args.image_directory.display()))?;
    if args.shuffle {
        image_paths.shuffle(&mut rand::rng());
    }
    info!(
        directory = %args.image_directory.display(),
        images = image_paths.len(),
        shuffle = args.shuffle,
        "found album covers"
    );

    let (mut rl, thread) = raylib::init()
        .size(RENDER_WIDTH / 2, RENDER_HEIGHT / 2)
        .title("Album Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(args.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Load Slides ---
    let mut engine = SliderEngine::new(config);
    if let Err(e) = engine.initialize(&mut rl, &thread, image_paths) {
        show_error(&mut rl, &thread, "No slides loaded.");
        return Err(e).context("no slide could be loaded");
    }

    let mut framebuffer = rl
        .load_render_texture(&thread, RENDER_WIDTH as u32, RENDER_HEIGHT as u32)
        .map_err(|e| anyhow!("failed to create render texture: {e}"))?;

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        engine.update(dt, &rl);
        engine.render_frame(&mut rl, &thread, &mut framebuffer);

        // Scale the fixed-size framebuffer to the window
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);

        let sw = d.get_screen_width() as f32;
        let sh = d.get_screen_height() as f32;

        d.draw_texture_pro(
            &framebuffer,
            Rectangle::new(0.0, 0.0, framebuffer.width() as f32, -(framebuffer.height() as f32)),
            Rectangle::new(0.0, 0.0, sw, sh),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }

    info!("window closed");
    Ok(())
}
