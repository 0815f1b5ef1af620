use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{InputEvent, Key, KeyState};

/// Current keyboard state for the window.
///
/// Holds "is down" information. Per-frame transitions are recorded into an
/// `InputFrame`.
#[derive(Debug, Default)]
pub struct InputState {
    /// Whether the window is focused.
    pub focused: bool,

    /// Set of currently held keys.
    pub keys_down: HashSet<Key>,
}

impl InputState {
    /// Applies a platform-agnostic input event to the current state and writes deltas to `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match ev {
            InputEvent::Focused(f) => {
                self.focused = f;
                if !f {
                    // Release events are not delivered while unfocused; drop
                    // everything so nothing stays held.
                    for key in self.keys_down.drain() {
                        frame.keys_released.insert(key);
                    }
                }
            }

            InputEvent::Key { key, state, repeat } => match state {
                KeyState::Pressed => {
                    // A repeat for a key dropped on focus loss re-holds it
                    // without a new press.
                    if self.keys_down.insert(key) && !repeat {
                        frame.keys_pressed.insert(key);
                    }
                }
                KeyState::Released => {
                    if self.keys_down.remove(&key) {
                        frame.keys_released.insert(key);
                    }
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyboardState;

    fn key(key: Key, state: KeyState, repeat: bool) -> InputEvent {
        InputEvent::Key { key, state, repeat }
    }

    fn press(k: Key) -> InputEvent {
        key(k, KeyState::Pressed, false)
    }

    fn release(k: Key) -> InputEvent {
        key(k, KeyState::Released, false)
    }

    // ── press / release ───────────────────────────────────────────────────

    #[test]
    fn press_marks_key_down_and_pressed() {
        let mut st = InputState::default();
        let mut fr = InputFrame::default();
        st.apply_event(&mut fr, press(Key::D));

        assert!(st.key_down(Key::D));
        assert!(fr.pressed(Key::D));
        assert!(fr.keys_released.is_empty());
    }

    #[test]
    fn release_clears_key_and_records_transition() {
        let mut st = InputState::default();
        let mut fr = InputFrame::default();
        st.apply_event(&mut fr, press(Key::W));
        fr.clear();
        st.apply_event(&mut fr, release(Key::W));

        assert!(!st.key_down(Key::W));
        assert!(fr.keys_released.contains(&Key::W));
        assert!(!fr.pressed(Key::W));
    }

    #[test]
    fn repeat_is_not_a_second_press() {
        let mut st = InputState::default();
        let mut fr = InputFrame::default();
        st.apply_event(&mut fr, press(Key::A));
        fr.clear();
        st.apply_event(&mut fr, key(Key::A, KeyState::Pressed, true));

        assert!(st.key_down(Key::A));
        assert!(fr.keys_pressed.is_empty());
    }

    #[test]
    fn repeat_after_focus_loss_holds_without_press() {
        let mut st = InputState::default();
        let mut fr = InputFrame::default();
        st.apply_event(&mut fr, press(Key::D));
        st.apply_event(&mut fr, InputEvent::Focused(false));
        fr.clear();

        st.apply_event(&mut fr, InputEvent::Focused(true));
        st.apply_event(&mut fr, key(Key::D, KeyState::Pressed, true));

        assert!(st.key_down(Key::D));
        assert!(!fr.pressed(Key::D));
    }

    #[test]
    fn release_of_unheld_key_is_ignored() {
        let mut st = InputState::default();
        let mut fr = InputFrame::default();
        st.apply_event(&mut fr, release(Key::S));
        assert!(fr.keys_released.is_empty());
    }

    #[test]
    fn several_keys_can_be_held() {
        let mut st = InputState::default();
        let mut fr = InputFrame::default();
        st.apply_event(&mut fr, press(Key::W));
        st.apply_event(&mut fr, press(Key::D));
        assert_eq!(st.keys_down.len(), 2);
        assert!(st.key_down(Key::W) && st.key_down(Key::D));
    }

    // ── focus ─────────────────────────────────────────────────────────────

    #[test]
    fn focus_loss_releases_everything() {
        let mut st = InputState::default();
        let mut fr = InputFrame::default();
        st.apply_event(&mut fr, InputEvent::Focused(true));
        st.apply_event(&mut fr, press(Key::D));
        st.apply_event(&mut fr, press(Key::Digit2));
        fr.clear();

        st.apply_event(&mut fr, InputEvent::Focused(false));

        assert!(!st.focused);
        assert!(st.keys_down.is_empty());
        assert!(fr.keys_released.contains(&Key::D));
        assert!(fr.keys_released.contains(&Key::Digit2));
    }

    #[test]
    fn focus_gain_keeps_state() {
        let mut st = InputState::default();
        let mut fr = InputFrame::default();
        st.apply_event(&mut fr, press(Key::A));
        st.apply_event(&mut fr, InputEvent::Focused(true));
        assert!(st.focused);
        assert!(st.key_down(Key::A));
    }

    // ── keyboard trait ────────────────────────────────────────────────────

    #[test]
    fn slices_and_sets_answer_key_queries() {
        let held = [Key::W, Key::Digit1];
        assert!(held.key_down(Key::W));
        assert!(!held.key_down(Key::S));

        let set: HashSet<Key> = held.into_iter().collect();
        assert!(set.key_down(Key::Digit1));
        assert!(!set.key_down(Key::Digit2));

        let empty: &[Key] = &[];
        assert!(!empty.key_down(Key::W));
    }
}
