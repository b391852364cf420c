//! winit keyboard/focus events → engine `InputEvent`.
//!
//! Only physical key positions are used. Digits come from the top row alone;
//! numpad digits stay `Key::Unknown`.

use winit::event::{KeyEvent, WindowEvent};
use winit::keyboard::{KeyCode, ModifiersState, PhysicalKey};

use crate::input::{InputEvent, InputState, Key, KeyState, Modifiers};

const DIGIT_ROW: [KeyCode; 10] = [
    KeyCode::Digit0,
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
    KeyCode::Digit8,
    KeyCode::Digit9,
];

/// Returns `None` for events the counter does not track (pointer, IME, ...).
pub(crate) fn translate_window_event(state: &InputState, event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::ModifiersChanged(m) => Some(InputEvent::ModifiersChanged(map_modifiers(m.state()))),
        WindowEvent::Focused(f) => Some(InputEvent::Focused(*f)),
        WindowEvent::KeyboardInput { event, .. } => Some(key_event(state.modifiers, event)),
        _ => None,
    }
}

fn key_event(modifiers: Modifiers, event: &KeyEvent) -> InputEvent {
    let (key, code) = match event.physical_key {
        PhysicalKey::Code(code) => (map_key_code(code), code as u32),
        PhysicalKey::Unidentified(_) => (Key::Unknown(0), 0),
    };

    InputEvent::Key {
        key,
        state: if event.state.is_pressed() {
            KeyState::Pressed
        } else {
            KeyState::Released
        },
        modifiers,
        code,
        repeat: event.repeat,
    }
}

fn map_modifiers(m: ModifiersState) -> Modifiers {
    Modifiers {
        shift: m.shift_key(),
        ctrl: m.control_key(),
        alt: m.alt_key(),
        meta: m.super_key(),
    }
}

fn map_key_code(code: KeyCode) -> Key {
    if let Some(d) = DIGIT_ROW.iter().position(|&c| c == code) {
        return Key::from_digit(d as u8).unwrap_or(Key::Unknown(code as u32));
    }

    match code {
        KeyCode::Escape => Key::Escape,
        KeyCode::ShiftLeft | KeyCode::ShiftRight => Key::Shift,
        KeyCode::ControlLeft | KeyCode::ControlRight => Key::Control,
        KeyCode::AltLeft | KeyCode::AltRight => Key::Alt,
        KeyCode::SuperLeft | KeyCode::SuperRight => Key::Meta,
        other => Key::Unknown(other as u32),
    }
}
