use std::collections::HashSet;

use super::state::InputState;
use super::types::Key;

/// Read-only "is this key held" query.
///
/// Per-frame logic takes `&impl KeyboardState` so it can run against the live
/// `InputState` as well as a plain key set in tests.
pub trait KeyboardState {
    fn key_down(&self, key: Key) -> bool;
}

impl KeyboardState for InputState {
    #[inline]
    fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }
}

impl KeyboardState for HashSet<Key> {
    #[inline]
    fn key_down(&self, key: Key) -> bool {
        self.contains(&key)
    }
}

impl KeyboardState for [Key] {
    #[inline]
    fn key_down(&self, key: Key) -> bool {
        self.contains(&key)
    }
}

impl<const N: usize> KeyboardState for [Key; N] {
    #[inline]
    fn key_down(&self, key: Key) -> bool {
        self.contains(&key)
    }
}

impl<T: KeyboardState + ?Sized> KeyboardState for &T {
    #[inline]
    fn key_down(&self, key: Key) -> bool {
        (**self).key_down(key)
    }
}
