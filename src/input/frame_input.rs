//! Per-tick input snapshot
//!
//! Collects winit keyboard and mouse events between two ticks. Two views of
//! the keyboard are kept: the held-key set used for continuous camera
//! movement, and a single latched key press used by the input mapper.
//!
//! Only one key press reaches the mapper per tick, the most recent one. When
//! two keys go down within the same tick (say M and P) only the later one
//! has an effect.

use std::collections::HashSet;

use winit::{
    event::{ElementState, MouseScrollDelta},
    keyboard::KeyCode,
};

/// Pixels of precise scrolling that count as one wheel notch
const PIXELS_PER_WHEEL_LINE: f32 = 120.0;

#[derive(Debug, Default, Clone)]
pub struct FrameInput {
    held: HashSet<KeyCode>,
    pressed_this_tick: HashSet<KeyCode>,
    last_pressed: Option<KeyCode>,
    mouse_delta: (f32, f32),
    wheel: f32,
}

impl FrameInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a keyboard event. Auto-repeat presses are ignored.
    pub fn on_key(&mut self, code: KeyCode, state: ElementState, repeat: bool) {
        match state {
            ElementState::Pressed => {
                if !repeat {
                    self.pressed_this_tick.insert(code);
                    self.last_pressed = Some(code);
                }
                self.held.insert(code);
            }
            ElementState::Released => {
                self.held.remove(&code);
            }
        }
    }

    pub fn on_mouse_motion(&mut self, dx: f64, dy: f64) {
        self.mouse_delta.0 += dx as f32;
        self.mouse_delta.1 += dy as f32;
    }

    pub fn on_mouse_wheel(&mut self, delta: MouseScrollDelta) {
        self.wheel += match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(position) => position.y as f32 / PIXELS_PER_WHEEL_LINE,
        };
    }

    /// Drops held keys, e.g. when the window loses focus and releases go missing
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    /// The one key press the mapper sees this tick
    pub fn pressed_key(&self) -> Option<KeyCode> {
        self.last_pressed
    }

    pub fn is_down(&self, code: KeyCode) -> bool {
        self.held.contains(&code)
    }

    pub fn was_pressed(&self, code: KeyCode) -> bool {
        self.pressed_this_tick.contains(&code)
    }

    /// Accumulated mouse motion since the last tick, in pixels
    pub fn mouse_delta(&self) -> (f32, f32) {
        self.mouse_delta
    }

    /// Accumulated wheel movement since the last tick, in notches (positive = away from the user)
    pub fn wheel(&self) -> f32 {
        self.wheel
    }

    /// Clears everything that only lives for one tick
    pub fn end_tick(&mut self) {
        self.pressed_this_tick.clear();
        self.last_pressed = None;
        self.mouse_delta = (0.0, 0.0);
        self.wheel = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_press_wins() {
        let mut input = FrameInput::new();
        input.on_key(KeyCode::KeyM, ElementState::Pressed, false);
        input.on_key(KeyCode::KeyP, ElementState::Pressed, false);
        assert_eq!(input.pressed_key(), Some(KeyCode::KeyP));
        assert!(input.was_pressed(KeyCode::KeyM));
    }

    #[test]
    fn test_repeat_does_not_latch() {
        let mut input = FrameInput::new();
        input.on_key(KeyCode::KeyW, ElementState::Pressed, true);
        assert_eq!(input.pressed_key(), None);
        assert!(input.is_down(KeyCode::KeyW));
    }

    #[test]
    fn test_end_tick_keeps_held_keys() {
        let mut input = FrameInput::new();
        input.on_key(KeyCode::KeyW, ElementState::Pressed, false);
        input.on_mouse_motion(3.0, -2.0);
        input.on_mouse_wheel(MouseScrollDelta::LineDelta(0.0, 1.0));
        input.end_tick();

        assert_eq!(input.pressed_key(), None);
        assert!(!input.was_pressed(KeyCode::KeyW));
        assert!(input.is_down(KeyCode::KeyW));
        assert_eq!(input.mouse_delta(), (0.0, 0.0));
        assert_eq!(input.wheel(), 0.0);

        input.on_key(KeyCode::KeyW, ElementState::Released, false);
        assert!(!input.is_down(KeyCode::KeyW));
    }

    #[test]
    fn test_mouse_motion_accumulates() {
        let mut input = FrameInput::new();
        input.on_mouse_motion(1.5, 2.0);
        input.on_mouse_motion(0.5, -1.0);
        assert_eq!(input.mouse_delta(), (2.0, 1.0));
    }
}
