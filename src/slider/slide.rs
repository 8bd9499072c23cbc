use raylib::prelude::*;
use crate::constants::*;

/// Share of the track cell a cover may fill.
const COVER_FILL: f32 = 0.9;

pub struct Slide {
    image: Texture2D,
    caption: String,
}

/// Scale that fits a `width` x `height` image inside the cell, keeping its
/// aspect ratio and leaving a margin.
pub fn fit_scale(width: f32, height: f32, cell: Rectangle) -> f32 {
    if width <= 0.0 || height <= 0.0 {
        return 0.0;
    }
    let horizontal = cell.width * COVER_FILL / width;
    let vertical = cell.height * COVER_FILL / height;
    horizontal.min(vertical)
}

impl Slide {
    pub fn new(image: Texture2D, caption: impl Into<String>) -> Self {
        Self { image, caption: caption.into() }
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// Draws the cover centred in `cell` with its caption in the bottom-left
    /// corner.
    pub fn draw<D: RaylibDraw>(&self, d: &mut D, cell: Rectangle) {
        let tex_width = self.image.width() as f32;
        let tex_height = self.image.height() as f32;
        let scale = fit_scale(tex_width, tex_height, cell);

        let scaled_width = tex_width * scale;
        let scaled_height = tex_height * scale;

        d.draw_texture_pro(
            &self.image,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            Rectangle::new(
                cell.x + (cell.width - scaled_width) * 0.5,
                cell.y + (cell.height - scaled_height) * 0.5,
                scaled_width,
                scaled_height,
            ),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );

        d.draw_text(
            &self.caption,
            (cell.x + 24.0) as i32,
            (cell.y + cell.height) as i32 - CAPTION_FONT_SIZE - 16,
            CAPTION_FONT_SIZE,
            Color::GOLD,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_image_is_bound_by_width() {
        let cell = Rectangle::new(0.0, 0.0, 1000.0, 500.0);
        assert!((fit_scale(2000.0, 500.0, cell) - 0.45).abs() < 1e-6);
    }

    #[test]
    fn tall_image_is_bound_by_height() {
        let cell = Rectangle::new(0.0, 0.0, 1000.0, 500.0);
        assert!((fit_scale(100.0, 1000.0, cell) - 0.45).abs() < 1e-6);
    }

    #[test]
    fn small_images_are_scaled_up() {
        let cell = Rectangle::new(0.0, 0.0, 1000.0, 1000.0);
        assert!((fit_scale(300.0, 300.0, cell) - 3.0).abs() < 1e-6);
    }

    #[test]
    fn degenerate_image_is_not_drawn() {
        let cell = Rectangle::new(0.0, 0.0, 1000.0, 1000.0);
        assert_eq!(fit_scale(0.0, 300.0, cell), 0.0);
    }
}
