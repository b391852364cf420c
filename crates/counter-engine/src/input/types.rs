use std::fmt;

/// Keyboard key identifier.
///
/// Covers the keys the counter reacts to (escape, digits, modifiers). Anything
/// else maps to `Key::Unknown` with the platform code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,

    // Modifiers as keys
    Shift,
    Control,
    Alt,
    Meta,

    // Digits
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    /// Platform-dependent key not represented here.
    Unknown(u32),
}

impl Key {
    const DIGITS: [Key; 10] = [
        Key::Digit0, Key::Digit1, Key::Digit2, Key::Digit3, Key::Digit4,
        Key::Digit5, Key::Digit6, Key::Digit7, Key::Digit8, Key::Digit9,
    ];

    /// Returns the numeric value of a digit key (`Digit0..=Digit9`).
    pub fn digit(self) -> Option<u8> {
        Self::DIGITS.iter().position(|&k| k == self).map(|i| i as u8)
    }

    /// Returns the key for digit `d` (`0..=9`).
    pub fn from_digit(d: u8) -> Option<Key> {
        Self::DIGITS.get(d as usize).copied()
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Modifier keys state.
///
/// Stored as booleans rather than bitflags to keep it explicit and stable.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const SHIFT: Modifiers = Modifiers { shift: true, ctrl: false, alt: false, meta: false };

    /// `true` when Shift is held and no other modifier is.
    pub fn shift_only(&self) -> bool {
        *self == Self::SHIFT
    }
}

/// Platform-agnostic input events emitted by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    ModifiersChanged(Modifiers),

    Key {
        key: Key,
        state: KeyState,
        modifiers: Modifiers,
        /// Stable platform code when available (e.g. scancode).
        code: u32,
        /// True when event is a key-repeat.
        repeat: bool,
    },

    /// Window focus change.
    Focused(bool),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.digit() {
            Some(d) => write!(f, "{d}"),
            None => write!(f, "{:?}", self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_round_trip() {
        for d in 0..10u8 {
            assert_eq!(Key::from_digit(d).and_then(Key::digit), Some(d));
        }
        assert_eq!(Key::from_digit(10), None);
        assert_eq!(Key::Escape.digit(), None);
    }

    #[test]
    fn shift_only_rejects_combinations() {
        assert!(Modifiers::SHIFT.shift_only());
        assert!(!Modifiers::default().shift_only());
        assert!(!Modifiers { ctrl: true, ..Modifiers::SHIFT }.shift_only());
    }

    #[test]
    fn display_digits_as_numbers() {
        assert_eq!(Key::Digit7.to_string(), "7");
        assert_eq!(Key::Escape.to_string(), "Escape");
    }
}
