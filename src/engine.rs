use raylib::prelude::*;
use std::path::PathBuf;

use crate::carousel::CarouselError;

pub trait Engine {
    /// Loads the slides and builds the controller. Returns how many slides
    /// were loaded.
    fn initialize(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, paths: Vec<PathBuf>) -> Result<usize, CarouselError>;
    /// Polls input and advances timers and animations by `dt` seconds.
    fn update(&mut self, dt: f32, rl: &RaylibHandle);
    fn render_frame(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, framebuffer: &mut RenderTexture2D);
}
