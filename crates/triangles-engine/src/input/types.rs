/// Keyboard key identifier.
///
/// Only keys the runtime acts on get their own variant. Everything else is
/// `Unknown` carrying the platform code when one exists.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,

    /// Platform-dependent key not represented here.
    Unknown(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// A single keyboard transition.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct KeyEvent {
    pub key: Key,
    pub state: KeyState,
    /// True when event is a key-repeat.
    pub repeat: bool,
}

impl KeyEvent {
    /// True on the initial press of `key`; repeats and releases do not count.
    #[inline]
    pub fn is_press_of(&self, key: Key) -> bool {
        self.key == key && self.state == KeyState::Pressed && !self.repeat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ev(key: Key, state: KeyState, repeat: bool) -> KeyEvent {
        KeyEvent { key, state, repeat }
    }

    #[test]
    fn initial_press_matches() {
        assert!(ev(Key::Escape, KeyState::Pressed, false).is_press_of(Key::Escape));
    }

    #[test]
    fn release_and_repeat_do_not_match() {
        assert!(!ev(Key::Escape, KeyState::Released, false).is_press_of(Key::Escape));
        assert!(!ev(Key::Escape, KeyState::Pressed, true).is_press_of(Key::Escape));
    }

    #[test]
    fn other_key_does_not_match() {
        assert!(!ev(Key::Unknown(7), KeyState::Pressed, false).is_press_of(Key::Escape));
    }
}
