use raylib::prelude::*;
use crate::constants::*;
use crate::slider::state::TrackState;

/// Eases the drawn track offset towards the carousel's offset.
pub struct TrackMotion {
    pub state: TrackState,
    displayed: f32,
    target: f32,
    animation_timer: f32,
    tween: Option<ease::Tween>,
}

impl TrackMotion {
    pub fn new(offset_percent: f32) -> Self {
        Self {
            state: TrackState::Resting,
            displayed: offset_percent,
            target: offset_percent,
            animation_timer: 0.0,
            tween: None,
        }
    }

    pub fn displayed_percent(&self) -> f32 {
        self.displayed
    }

    /// Starts a new slide from wherever the track currently is. A target equal
    /// to the current one leaves a running animation alone.
    pub fn retarget(&mut self, target: f32) {
        if target == self.target {
            return;
        }
        self.target = target;
        self.tween = Some(ease::Tween::new(
            ease::cubic_out,
            self.displayed,
            target,
            SLIDE_TRANSITION_DURATION,
        ));
        self.animation_timer = 0.0;
        self.state = TrackState::Sliding;
    }

    pub fn update(&mut self, dt: f32) {
        if self.state != TrackState::Sliding {
            return;
        }

        self.animation_timer += dt;
        if let Some(tween) = self.tween.as_mut() {
            self.displayed = tween.apply(dt);
        }

        if self.animation_timer >= SLIDE_TRANSITION_DURATION {
            self.displayed = self.target;
            self.tween = None;
            self.state = TrackState::Resting;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_rest() {
        let motion = TrackMotion::new(-200.0);
        assert_eq!(motion.state, TrackState::Resting);
        assert_eq!(motion.displayed_percent(), -200.0);
    }

    #[test]
    fn slides_between_offsets_and_settles() {
        let mut motion = TrackMotion::new(0.0);
        motion.retarget(-100.0);
        assert_eq!(motion.state, TrackState::Sliding);

        motion.update(SLIDE_TRANSITION_DURATION * 0.5);
        let halfway = motion.displayed_percent();
        assert!(halfway < 0.0 && halfway > -100.0, "halfway was {halfway}");

        motion.update(SLIDE_TRANSITION_DURATION);
        assert_eq!(motion.state, TrackState::Resting);
        assert_eq!(motion.displayed_percent(), -100.0);
    }

    #[test]
    fn same_target_is_ignored() {
        let mut motion = TrackMotion::new(0.0);
        motion.retarget(0.0);
        assert_eq!(motion.state, TrackState::Resting);

        motion.retarget(-300.0);
        motion.update(0.1);
        let before = motion.displayed_percent();
        motion.retarget(-300.0);
        motion.update(0.0);
        assert_eq!(motion.displayed_percent(), before);
    }

    #[test]
    fn retarget_mid_slide_continues_from_current_offset() {
        let mut motion = TrackMotion::new(0.0);
        motion.retarget(-300.0);
        motion.update(0.1);
        let current = motion.displayed_percent();

        motion.retarget(0.0);
        motion.update(0.0);
        assert!((motion.displayed_percent() - current).abs() < 1e-3);

        motion.update(SLIDE_TRANSITION_DURATION);
        assert_eq!(motion.displayed_percent(), 0.0);
    }
}
