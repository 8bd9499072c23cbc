use raylib::prelude::*;
use crate::constants::*;

/// What the pointer is over, in render space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Previous,
    Next,
    Indicator(usize),
    Track,
}

/// Fixed render-space geometry of the slider: the track in the middle, one
/// round control on each side and a centred row of indicator dots below.
pub struct Layout {
    pub track: Rectangle,
    pub previous: Vector2,
    pub next: Vector2,
    indicators: Vec<Vector2>,
}

impl Layout {
    pub fn new(slide_count: usize) -> Self {
        let track = Rectangle::new(
            (RENDER_WIDTH as f32 - TRACK_WIDTH) * 0.5,
            TRACK_TOP,
            TRACK_WIDTH,
            TRACK_HEIGHT,
        );
        let middle_y = track.y + track.height * 0.5;

        let previous = Vector2::new(track.x - CONTROL_GAP - CONTROL_RADIUS, middle_y);
        let next = Vector2::new(track.x + track.width + CONTROL_GAP + CONTROL_RADIUS, middle_y);

        // Squeeze the row to the track width for long album lists
        let gaps = slide_count.saturating_sub(1) as f32;
        let spacing = if gaps * INDICATOR_SPACING > track.width {
            track.width / gaps
        } else {
            INDICATOR_SPACING
        };
        let row_width = gaps * spacing;
        let first_x = RENDER_WIDTH as f32 * 0.5 - row_width * 0.5;
        let row_y = track.y + track.height + INDICATOR_GAP;
        let indicators = (0..slide_count)
            .map(|i| Vector2::new(first_x + i as f32 * spacing, row_y))
            .collect();

        Self { track, previous, next, indicators }
    }

    pub fn indicators(&self) -> &[Vector2] {
        &self.indicators
    }

    pub fn track_contains(&self, point: Vector2) -> bool {
        point.x >= self.track.x
            && point.x < self.track.x + self.track.width
            && point.y >= self.track.y
            && point.y < self.track.y + self.track.height
    }

    /// The cell occupied by slide `index` when the track is translated by
    /// `offset_percent` of its width.
    pub fn slide_cell(&self, index: usize, offset_percent: f32) -> Rectangle {
        let shift = (index as f32 * 100.0 + offset_percent) / 100.0;
        Rectangle::new(
            self.track.x + shift * self.track.width,
            self.track.y,
            self.track.width,
            self.track.height,
        )
    }

    pub fn hit(&self, point: Vector2) -> Option<Hit> {
        if point.distance_to(self.previous) <= CONTROL_RADIUS {
            return Some(Hit::Previous);
        }
        if point.distance_to(self.next) <= CONTROL_RADIUS {
            return Some(Hit::Next);
        }
        // Dots are small; accept clicks slightly outside them, nearest wins
        let dot_reach = INDICATOR_RADIUS * 1.5;
        let nearest = self
            .indicators
            .iter()
            .map(|centre| point.distance_to(*centre))
            .enumerate()
            .filter(|(_, distance)| *distance <= dot_reach)
            .min_by(|(_, a), (_, b)| a.total_cmp(b));
        if let Some((i, _)) = nearest {
            return Some(Hit::Indicator(i));
        }
        if self.track_contains(point) {
            return Some(Hit::Track);
        }
        None
    }
}
