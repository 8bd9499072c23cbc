use std::time::Duration;

use tracing::{debug, warn};

use crate::carousel::autoplay::AutoplayTimer;
use crate::carousel::input::{CarouselInput, Transition};
use crate::carousel::swipe::{SwipeDirection, SwipeTracker};
use crate::carousel::CarouselError;
use crate::config::CarouselConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indicator {
    pub label: String,
    pub active: bool,
}

/// Cyclic slide position with indicators, autoplay and swipe handling.
///
/// Position, track offset and the active indicator are updated together by
/// `render`, so they agree whenever a public method returns.
#[derive(Debug, Clone)]
pub struct Carousel {
    position: usize,
    slide_count: usize,
    track_offset: i64,
    indicators: Vec<Indicator>,
    autoplay: AutoplayTimer,
    swipe: SwipeTracker,
    pointer_inside: bool,
    active: bool,
}

impl Carousel {
    /// Builds the controller for `slide_count` slides, shows the first one
    /// and starts autoplay.
    pub fn new(slide_count: usize, config: &CarouselConfig) -> Result<Self, CarouselError> {
        if slide_count == 0 {
            return Err(CarouselError::NoSlides);
        }
        if config.autoplay_delay.is_zero() {
            return Err(CarouselError::ZeroAutoplayDelay);
        }

        let mut carousel = Self {
            position: 0,
            slide_count,
            track_offset: 0,
            indicators: Vec::new(),
            autoplay: AutoplayTimer::new(config.autoplay_delay),
            swipe: SwipeTracker::new(config.swipe_threshold),
            pointer_inside: false,
            active: true,
        };
        carousel.create_indicators();
        carousel.render();
        carousel.start_autoplay();
        Ok(carousel)
    }

    fn create_indicators(&mut self) {
        self.indicators = (0..self.slide_count)
            .map(|i| Indicator {
                label: format!("Go to album {}", i + 1),
                active: false,
            })
            .collect();
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    // Percentage of the track width
    pub fn track_offset_percent(&self) -> i64 {
        self.track_offset
    }

    pub fn indicators(&self) -> &[Indicator] {
        &self.indicators
    }

    pub fn autoplay_remaining(&self) -> Option<Duration> {
        self.autoplay.remaining()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn advance(&mut self) {
        self.position = (self.position + 1) % self.slide_count;
        self.render();
    }

    pub fn retreat(&mut self) {
        self.position = (self.position + self.slide_count - 1) % self.slide_count;
        self.render();
    }

    pub fn jump_to(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= self.slide_count {
            return Err(CarouselError::IndexOutOfRange {
                index,
                count: self.slide_count,
            });
        }
        self.position = index;
        self.render();
        Ok(())
    }

    pub fn render(&mut self) {
        self.track_offset = -(self.position as i64) * 100;
        for (i, indicator) in self.indicators.iter_mut().enumerate() {
            indicator.active = i == self.position;
        }
    }

    pub fn start_autoplay(&mut self) {
        self.autoplay.start();
    }

    pub fn stop_autoplay(&mut self) {
        self.autoplay.stop();
    }

    pub fn reset_autoplay(&mut self) {
        self.autoplay.reset();
    }

    /// Applies one input. User-driven transitions restart the autoplay
    /// countdown; hover only suspends or resumes it.
    pub fn handle(&mut self, input: CarouselInput) -> Option<Transition> {
        if !self.active {
            return None;
        }

        let transition = match input {
            CarouselInput::PreviousControl | CarouselInput::ArrowLeft => {
                self.retreat();
                Transition::Retreat
            }
            CarouselInput::NextControl | CarouselInput::ArrowRight => {
                self.advance();
                Transition::Advance
            }
            CarouselInput::Indicator(index) => {
                if let Err(e) = self.jump_to(index) {
                    warn!(error = %e, "ignoring indicator selection");
                    return None;
                }
                Transition::JumpTo(index)
            }
            CarouselInput::GestureStart { x } => {
                self.swipe.begin(x);
                return None;
            }
            CarouselInput::GestureEnd { x } => match self.swipe.finish(x)? {
                SwipeDirection::Leftward => {
                    self.advance();
                    Transition::Advance
                }
                SwipeDirection::Rightward => {
                    self.retreat();
                    Transition::Retreat
                }
            },
            CarouselInput::PointerEnter => {
                self.pointer_inside = true;
                self.stop_autoplay();
                return None;
            }
            CarouselInput::PointerLeave => {
                self.pointer_inside = false;
                self.start_autoplay();
                return None;
            }
        };

        self.reset_autoplay();
        debug!(?input, ?transition, position = self.position, "carousel moved");
        Some(transition)
    }

    /// Advances the autoplay countdown by `dt`, moving forward once per
    /// elapsed delay. Returns the number of automatic advances.
    pub fn tick(&mut self, dt: Duration) -> usize {
        if !self.active {
            return 0;
        }

        let fires = self.autoplay.tick(dt) as usize;
        for _ in 0..fires {
            self.advance();
        }
        if fires > 0 {
            debug!(fires, position = self.position, "autoplay advanced");
        }
        fires
    }

    /// Releases the autoplay countdown and any pending gesture. Input is
    /// ignored until `activate` is called.
    pub fn deactivate(&mut self) {
        if !self.active {
            return;
        }
        let was_autoplaying = self.autoplay.is_running();
        self.active = false;
        self.stop_autoplay();
        self.swipe.cancel();
        debug!(was_autoplaying, "carousel deactivated");
    }

    pub fn activate(&mut self) {
        if self.active {
            return;
        }
        self.active = true;
        self.render();
        if !self.pointer_inside {
            self.start_autoplay();
        }
        debug!(position = self.position, "carousel activated");
    }
}
