//! The square's per-frame state transform.
//!
//! `update` is a pure function of the previous state, the held keys and the
//! viewport aspect ratio; it never touches the GPU or the window.

use glam::{Vec2, Vec3};

use squarely_engine::input::{Key, KeyboardState};
use squarely_engine::render::DEFAULT_HALF_EXTENT;

pub const RED: Vec3 = Vec3::X;
pub const GREEN: Vec3 = Vec3::Y;
pub const BLUE: Vec3 = Vec3::Z;

/// Distance moved per frame while a direction key is held, in world units.
pub const MOVE_STEP: f32 = 0.003;

/// Color selection keys, checked in order. A later match overrides an
/// earlier one when several are held.
const COLOR_KEYS: [(Key, Vec3); 3] = [
    (Key::Digit1, RED),
    (Key::Digit2, GREEN),
    (Key::Digit3, BLUE),
];

/// Direction keys and the unit direction each contributes.
const MOVE_KEYS: [(Key, Vec2); 4] = [
    (Key::D, Vec2::X),
    (Key::A, Vec2::NEG_X),
    (Key::W, Vec2::Y),
    (Key::S, Vec2::NEG_Y),
];

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SquareState {
    /// Center of the square in world units (origin at the window center).
    pub position: Vec2,
    /// RGB multiplier.
    pub color: Vec3,
}

impl Default for SquareState {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            color: RED,
        }
    }
}

/// Movement parameters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Motion {
    pub step: f32,
    pub half_extent: f32,
}

impl Default for Motion {
    fn default() -> Self {
        Self {
            step: MOVE_STEP,
            half_extent: DEFAULT_HALF_EXTENT,
        }
    }
}

/// Advances the square by one frame.
pub fn update<K>(state: SquareState, keys: &K, aspect_ratio: f32, motion: &Motion) -> SquareState
where
    K: KeyboardState + ?Sized,
{
    let color = select_color(keys, state.color);
    let position = state.position + movement(keys, motion.step);
    let max = bounds(aspect_ratio, motion.half_extent);

    SquareState {
        position: position.clamp(-max, max),
        color,
    }
}

/// Largest `|x|` and `|y|` that keep the square fully on screen.
///
/// Collapses to zero on an axis narrower than the square itself.
pub fn bounds(aspect_ratio: f32, half_extent: f32) -> Vec2 {
    Vec2::new(aspect_ratio - half_extent, 1.0 - half_extent).max(Vec2::ZERO)
}

fn select_color<K>(keys: &K, current: Vec3) -> Vec3
where
    K: KeyboardState + ?Sized,
{
    COLOR_KEYS
        .iter()
        .filter(|(key, _)| keys.key_down(*key))
        .map(|(_, color)| *color)
        .last()
        .unwrap_or(current)
}

// Summed before it is applied, so opposite keys cancel exactly.
fn movement<K>(keys: &K, step: f32) -> Vec2
where
    K: KeyboardState + ?Sized,
{
    MOVE_KEYS
        .iter()
        .filter(|(key, _)| keys.key_down(*key))
        .map(|(_, dir)| *dir * step)
        .sum()
}
