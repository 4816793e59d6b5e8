//! Keyboard input.
//!
//! [`Input`] folds winit keyboard events into a set of held keys, and
//! [`Input::controls`] turns that into the game's per-frame [`Controls`].
//! Arrow keys or WASD move, Space fires, Escape quits.

use crate::game::Controls;
use std::collections::HashSet;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode as WinitKeyCode, PhysicalKey};

/// Keys the game cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Fire,
    Pause,
    Quit,
}

impl Key {
    /// Map a physical key; `None` for keys without a binding.
    pub fn from_keycode(code: WinitKeyCode) -> Option<Self> {
        match code {
            WinitKeyCode::ArrowUp | WinitKeyCode::KeyW => Some(Key::Up),
            WinitKeyCode::ArrowDown | WinitKeyCode::KeyS => Some(Key::Down),
            WinitKeyCode::ArrowLeft | WinitKeyCode::KeyA => Some(Key::Left),
            WinitKeyCode::ArrowRight | WinitKeyCode::KeyD => Some(Key::Right),
            WinitKeyCode::Space => Some(Key::Fire),
            WinitKeyCode::KeyP => Some(Key::Pause),
            WinitKeyCode::Escape => Some(Key::Quit),
            _ => None,
        }
    }
}

/// Held-key state.
#[derive(Debug, Default)]
pub struct Input {
    held: HashSet<Key>,
    pressed: HashSet<Key>,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `key` is currently down.
    pub fn held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Whether `key` went down since the last [`end_frame`](Self::end_frame).
    pub fn pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    /// Snapshot of the movement and fire keys for this frame.
    pub fn controls(&self) -> Controls {
        Controls {
            up: self.held(Key::Up),
            down: self.held(Key::Down),
            left: self.held(Key::Left),
            right: self.held(Key::Right),
            fire: self.held(Key::Fire),
        }
    }

    /// Clear per-frame edges. Call after the frame has been simulated.
    pub fn end_frame(&mut self) {
        self.pressed.clear();
    }

    /// Forget everything, e.g. when the window loses focus.
    pub fn release_all(&mut self) {
        self.held.clear();
        self.pressed.clear();
    }

    pub fn press(&mut self, key: Key) {
        // Key repeat does not count as a new press.
        if self.held.insert(key) {
            self.pressed.insert(key);
        }
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    /// Process a winit window event.
    pub(crate) fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                let Some(key) = Key::from_keycode(code) else {
                    return;
                };
                match event.state {
                    ElementState::Pressed => self.press(key),
                    ElementState::Released => self.release(key),
                }
            }
            WindowEvent::Focused(false) => self.release_all(),
            _ => {}
        }
    }
}
