//! raylib front-end for the carousel: geometry, per-frame input, track
//! easing and slide drawing.

pub mod engine;
pub mod input;
pub mod layout;
pub mod slide;
pub mod state;
pub mod track;

pub use engine::SliderEngine;
