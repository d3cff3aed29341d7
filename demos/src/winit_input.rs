// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Translation of winit window events into Planar input events.
//!
//! All positions and sizes are converted to logical pixels, which is the
//! coordinate space the viewer works in.

use kurbo::Point;
use planar_interaction::{InputEvent, Key, PointerButton};
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{Key as WinitKey, NamedKey};

/// Stateful translator; winit reports button presses without a position, so
/// the last cursor position is tracked here.
#[derive(Debug, Default)]
pub struct InputTranslator {
    cursor: Point,
}

impl InputTranslator {
    /// Last known cursor position in logical pixels.
    pub fn cursor(&self) -> Point {
        self.cursor
    }

    /// Translates one window event, or returns `None` if the viewer has no
    /// use for it.
    pub fn translate(&mut self, event: &WindowEvent, scale_factor: f64) -> Option<InputEvent> {
        match event {
            WindowEvent::CloseRequested => Some(InputEvent::Quit),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => Some(InputEvent::KeyDown(translate_key(logical_key))),
            WindowEvent::Resized(size) => {
                let (width, height) = logical_size(*size, scale_factor);
                Some(InputEvent::Resize { width, height })
            }
            WindowEvent::CursorMoved { position, .. } => {
                let logical = position.to_logical::<f64>(scale_factor);
                self.cursor = Point::new(logical.x, logical.y);
                Some(InputEvent::PointerMove {
                    position: self.cursor,
                })
            }
            WindowEvent::MouseInput { state, button, .. } => {
                Some(self.mouse_input(*state, *button))
            }
            WindowEvent::MouseWheel { delta, .. } => Some(InputEvent::WheelScroll {
                delta_y: wheel_delta(*delta),
            }),
            _ => None,
        }
    }

    fn mouse_input(&self, state: ElementState, button: MouseButton) -> InputEvent {
        let button = translate_button(button);
        let position = self.cursor;
        match state {
            ElementState::Pressed => InputEvent::PointerDown { button, position },
            ElementState::Released => InputEvent::PointerUp { button, position },
        }
    }
}

/// Maps a winit mouse button.
pub fn translate_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Right => PointerButton::Secondary,
        MouseButton::Middle => PointerButton::Auxiliary,
        MouseButton::Back => PointerButton::Other(3),
        MouseButton::Forward => PointerButton::Other(4),
        MouseButton::Other(n) => PointerButton::Other(n),
    }
}

/// Maps a winit logical key.
pub fn translate_key(key: &WinitKey) -> Key {
    match key {
        WinitKey::Named(NamedKey::Escape) => Key::Escape,
        WinitKey::Character(s) => s.chars().next().map_or(Key::Other, Key::Character),
        _ => Key::Other,
    }
}

/// Vertical wheel movement; positive when scrolling away from the user.
pub fn wheel_delta(delta: MouseScrollDelta) -> f64 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => f64::from(y),
        MouseScrollDelta::PixelDelta(p) => p.y,
    }
}

/// Physical window size in logical pixels, rounded.
pub fn logical_size(size: PhysicalSize<u32>, scale_factor: f64) -> (u32, u32) {
    let logical = size.to_logical::<u32>(scale_factor);
    (logical.width, logical.height)
}
