use std::collections::HashSet;

use winit::event::{ElementState, MouseButton, VirtualKeyCode};

/// Accumulates winit input events into a per-frame snapshot: which
/// keys are held, which fired this frame, and where the pointer is in
/// buffer pixels.
///
/// `end_frame` must run after the controller each frame so that
/// edge-triggered queries fire exactly once per press.
pub struct InputHandler {
    held_keys: HashSet<VirtualKeyCode>,
    just_pressed_keys: HashSet<VirtualKeyCode>,
    mouse_held: bool,
    mouse_just_pressed: bool,
    cursor: Option<(u32, u32)>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            held_keys: HashSet::new(),
            just_pressed_keys: HashSet::new(),
            mouse_held: false,
            mouse_just_pressed: false,
            cursor: None,
        }
    }

    pub fn key_event(&mut self, state: ElementState, key_code: Option<VirtualKeyCode>) {
        let Some(key_code) = key_code else { return };
        match state {
            ElementState::Pressed => {
                // OS key repeat delivers Pressed again while held;
                // only the first press is an edge.
                if self.held_keys.insert(key_code) {
                    self.just_pressed_keys.insert(key_code);
                }
            }
            ElementState::Released => {
                self.held_keys.remove(&key_code);
            }
        }
    }

    pub fn mouse_event(&mut self, state: ElementState, button: MouseButton) {
        if button != MouseButton::Left {
            return;
        }
        match state {
            ElementState::Pressed => {
                if !self.mouse_held {
                    self.mouse_just_pressed = true;
                }
                self.mouse_held = true;
            }
            ElementState::Released => {
                self.mouse_held = false;
            }
        }
    }

    /// Latest pointer position in buffer pixels, `None` while the
    /// pointer is outside the buffer or has left the window.
    pub fn set_cursor(&mut self, position: Option<(u32, u32)>) {
        self.cursor = position;
    }

    pub fn cursor(&self) -> Option<(u32, u32)> {
        self.cursor
    }

    pub fn is_held(&self, key_code: VirtualKeyCode) -> bool {
        self.held_keys.contains(&key_code)
    }

    pub fn just_pressed(&self, key_code: VirtualKeyCode) -> bool {
        self.just_pressed_keys.contains(&key_code)
    }

    pub fn mouse_held(&self) -> bool {
        self.mouse_held
    }

    pub fn mouse_just_pressed(&self) -> bool {
        self.mouse_just_pressed
    }

    /// Retire this frame's edges. Held state persists.
    pub fn end_frame(&mut self) {
        self.just_pressed_keys.clear();
        self.mouse_just_pressed = false;
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_fires_once_per_press() {
        let mut input = InputHandler::new();
        input.key_event(ElementState::Pressed, Some(VirtualKeyCode::R));
        assert!(input.just_pressed(VirtualKeyCode::R));
        assert!(input.is_held(VirtualKeyCode::R));

        input.end_frame();
        // Key repeat while held: no new edge.
        input.key_event(ElementState::Pressed, Some(VirtualKeyCode::R));
        assert!(!input.just_pressed(VirtualKeyCode::R));
        assert!(input.is_held(VirtualKeyCode::R));

        input.key_event(ElementState::Released, Some(VirtualKeyCode::R));
        input.key_event(ElementState::Pressed, Some(VirtualKeyCode::R));
        assert!(input.just_pressed(VirtualKeyCode::R));
    }

    #[test]
    fn mouse_edge_and_held() {
        let mut input = InputHandler::new();
        input.mouse_event(ElementState::Pressed, MouseButton::Left);
        assert!(input.mouse_just_pressed());
        assert!(input.mouse_held());

        input.end_frame();
        assert!(!input.mouse_just_pressed());
        assert!(input.mouse_held());

        input.mouse_event(ElementState::Released, MouseButton::Left);
        assert!(!input.mouse_held());
    }

    #[test]
    fn ignores_secondary_buttons() {
        let mut input = InputHandler::new();
        input.mouse_event(ElementState::Pressed, MouseButton::Right);
        assert!(!input.mouse_held());
        assert!(!input.mouse_just_pressed());
    }
}
