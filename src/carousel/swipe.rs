//! Horizontal swipe detection with a dead zone.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Leftward,  // towards smaller x, shows the next slide
    Rightward, // towards larger x, shows the previous slide
}

/// Classifies a gesture from its start and end x coordinates.
///
/// The displacement must be strictly greater than `threshold`; anything
/// smaller is treated as a tap or an accidental drag.
pub fn classify(start_x: f32, end_x: f32, threshold: f32) -> Option<SwipeDirection> {
    let diff = start_x - end_x;
    if diff.abs() <= threshold {
        return None;
    }
    if diff > 0.0 {
        Some(SwipeDirection::Leftward)
    } else {
        Some(SwipeDirection::Rightward)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwipeTracker {
    threshold: f32,
    start_x: Option<f32>,
}

impl SwipeTracker {
    pub fn new(threshold: f32) -> Self {
        Self { threshold, start_x: None }
    }

    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    // None inside the dead zone or when no gesture was started
    pub fn finish(&mut self, x: f32) -> Option<SwipeDirection> {
        let start_x = self.start_x.take()?;
        classify(start_x, x, self.threshold)
    }

    pub fn cancel(&mut self) {
        self.start_x = None;
    }
}
