//! Carousel controller: a cyclic slide position driven by controls,
//! indicators, keyboard arrows, swipe gestures and an autoplay timer.
//!
//! Nothing in here touches the window; the slider engine feeds it
//! `CarouselInput`s and frame delta times and draws what it reports.

pub mod autoplay;
pub mod controller;
pub mod input;
pub mod swipe;

pub use controller::{Carousel, Indicator};
pub use input::{CarouselInput, Transition};

#[derive(Debug, thiserror::Error)]
pub enum CarouselError {
    #[error("carousel requires at least one slide")]
    NoSlides,
    #[error("slide index {index} out of range for {count} slides")]
    IndexOutOfRange { index: usize, count: usize },
    #[error("autoplay delay must be greater than zero")]
    ZeroAutoplayDelay,
}
