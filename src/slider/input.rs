use raylib::prelude::*;

use crate::carousel::CarouselInput;
use crate::constants::*;
use crate::slider::layout::{Hit, Layout};

/// Raw input sampled once per frame, pointer already in render space.
#[derive(Debug, Clone, Copy)]
pub struct FrameInput {
    pub pointer: Vector2,
    pub pressed: bool,
    pub released: bool,
    pub left: bool,
    pub right: bool,
}

impl FrameInput {
    pub fn poll(rl: &RaylibHandle) -> Self {
        let pointer = if rl.is_cursor_on_screen() {
            let mouse = rl.get_mouse_position();
            let sx = RENDER_WIDTH as f32 / rl.get_screen_width().max(1) as f32;
            let sy = RENDER_HEIGHT as f32 / rl.get_screen_height().max(1) as f32;
            Vector2::new(mouse.x * sx, mouse.y * sy)
        } else {
            // Off-window counts as outside every control
            Vector2::new(-1.0, -1.0)
        };

        Self {
            pointer,
            pressed: rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT),
            released: rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT),
            left: rl.is_key_pressed(KeyboardKey::KEY_LEFT),
            right: rl.is_key_pressed(KeyboardKey::KEY_RIGHT),
        }
    }

    /// Maps this frame to carousel inputs: keys, then hover changes, then the
    /// press, then the release.
    pub fn translate(&self, layout: &Layout, pointer_was_inside: bool) -> Vec<CarouselInput> {
        let mut inputs = Vec::new();

        if self.left {
            inputs.push(CarouselInput::ArrowLeft);
        }
        if self.right {
            inputs.push(CarouselInput::ArrowRight);
        }

        match (pointer_was_inside, layout.track_contains(self.pointer)) {
            (false, true) => inputs.push(CarouselInput::PointerEnter),
            (true, false) => inputs.push(CarouselInput::PointerLeave),
            _ => {}
        }

        if self.pressed {
            match layout.hit(self.pointer) {
                Some(Hit::Previous) => inputs.push(CarouselInput::PreviousControl),
                Some(Hit::Next) => inputs.push(CarouselInput::NextControl),
                Some(Hit::Indicator(i)) => inputs.push(CarouselInput::Indicator(i)),
                Some(Hit::Track) => inputs.push(CarouselInput::GestureStart { x: self.pointer.x }),
                None => {}
            }
        }

        if self.released {
            inputs.push(CarouselInput::GestureEnd { x: self.pointer.x });
        }

        inputs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idle_at(pointer: Vector2) -> FrameInput {
        FrameInput {
            pointer,
            pressed: false,
            released: false,
            left: false,
            right: false,
        }
    }

    #[test]
    fn arrow_keys_are_global() {
        let layout = Layout::new(3);
        let frame = FrameInput {
            left: true,
            right: true,
            ..idle_at(Vector2::new(-1.0, -1.0))
        };
        assert_eq!(
            frame.translate(&layout, false),
            vec![CarouselInput::ArrowLeft, CarouselInput::ArrowRight]
        );
    }

    #[test]
    fn hover_changes_emit_enter_and_leave() {
        let layout = Layout::new(3);
        let inside = idle_at(Vector2::new(960.0, 480.0));
        let outside = idle_at(Vector2::new(5.0, 5.0));

        assert_eq!(inside.translate(&layout, false), vec![CarouselInput::PointerEnter]);
        assert!(inside.translate(&layout, true).is_empty());
        assert_eq!(outside.translate(&layout, true), vec![CarouselInput::PointerLeave]);
        assert!(outside.translate(&layout, false).is_empty());
    }

    #[test]
    fn presses_map_to_controls() {
        let layout = Layout::new(3);

        let frame = FrameInput { pressed: true, ..idle_at(layout.previous) };
        assert_eq!(frame.translate(&layout, false), vec![CarouselInput::PreviousControl]);

        let frame = FrameInput { pressed: true, ..idle_at(layout.next) };
        assert_eq!(frame.translate(&layout, false), vec![CarouselInput::NextControl]);

        let frame = FrameInput { pressed: true, ..idle_at(layout.indicators()[1]) };
        assert_eq!(frame.translate(&layout, false), vec![CarouselInput::Indicator(1)]);
    }

    #[test]
    fn drag_on_track_becomes_gesture() {
        let layout = Layout::new(3);

        let press = FrameInput { pressed: true, ..idle_at(Vector2::new(900.0, 400.0)) };
        assert_eq!(
            press.translate(&layout, true),
            vec![CarouselInput::GestureStart { x: 900.0 }]
        );

        // Release may land anywhere
        let release = FrameInput { released: true, ..idle_at(Vector2::new(5.0, 400.0)) };
        assert_eq!(
            release.translate(&layout, true),
            vec![CarouselInput::PointerLeave, CarouselInput::GestureEnd { x: 5.0 }]
        );
    }
}
