#[derive(Debug, PartialEq, Clone, Copy)]
pub enum TrackState {
    Resting, // Displayed offset matches the carousel position
    Sliding, // Easing towards a new position
}
