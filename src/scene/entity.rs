//! Entity kinematics: movement, clamping, facing and walk-cycle animation.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{
    ANIMATED_FRAMES, ANIMATION_FRAME_RATE, PLAYER_HEIGHT, PLAYER_SPEED, PLAYER_WIDTH,
};
use crate::geometry::{Point, Rect, Size};
use crate::input::{HeldKeys, Key};

/// Direction an entity's sprite faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    /// Away from the viewer.
    Up,
    /// Toward the viewer.
    #[default]
    Down,
    /// Left.
    Left,
    /// Right.
    Right,
}

/// The two playable personas. Whichever one the player is not controlling
/// stands around as the NPC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Character {
    /// Primary character; can talk to the NPC.
    #[default]
    Frisk,
    /// Secondary character; has a walk cycle.
    Sans,
}

impl Character {
    /// The character not being played.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Character::Frisk => Character::Sans,
            Character::Sans => Character::Frisk,
        }
    }

    /// Whether this character's sprite cycles through animation frames.
    #[must_use]
    pub const fn is_animated(self) -> bool {
        matches!(self, Character::Sans)
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Character::Frisk => "Frisk",
            Character::Sans => "Sans",
        }
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A moving sprite with a fixed-size bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entity {
    /// Left edge in world pixels.
    pub x: f64,
    /// Top edge in world pixels.
    pub y: f64,
    /// Bounding box width.
    pub w: f64,
    /// Bounding box height.
    pub h: f64,
    /// Sprite direction.
    pub facing: Facing,
    /// Current walk-cycle frame.
    pub frame: u32,
    /// Ticks since the last frame advance.
    pub anim_ticks: u32,
}

impl Entity {
    /// A player-sized entity with its top-left corner at `at`, facing down.
    #[must_use]
    pub fn at(at: Point) -> Self {
        Self {
            x: at.x,
            y: at.y,
            w: PLAYER_WIDTH,
            h: PLAYER_HEIGHT,
            facing: Facing::Down,
            frame: 0,
            anim_ticks: 0,
        }
    }

    /// Bounding box.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }

    /// Top-left corner.
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Move the entity to `to` without touching facing or animation.
    pub fn place(&mut self, to: Point) {
        self.x = to.x;
        self.y = to.y;
    }

    /// Apply one tick of held arrow keys.
    ///
    /// Each held direction moves [`PLAYER_SPEED`] on its own axis, so diagonals
    /// are not normalized. Facing follows the last held direction in the order
    /// up, down, left, right. Returns whether any direction was held.
    pub fn apply_input(&mut self, keys: &HeldKeys) -> bool {
        let mut any = false;
        if keys.is_held(Key::Up) {
            self.y -= PLAYER_SPEED;
            self.facing = Facing::Up;
            any = true;
        }
        if keys.is_held(Key::Down) {
            self.y += PLAYER_SPEED;
            self.facing = Facing::Down;
            any = true;
        }
        if keys.is_held(Key::Left) {
            self.x -= PLAYER_SPEED;
            self.facing = Facing::Left;
            any = true;
        }
        if keys.is_held(Key::Right) {
            self.x += PLAYER_SPEED;
            self.facing = Facing::Right;
            any = true;
        }
        any
    }

    /// Keep the bounding box inside `canvas`.
    pub fn clamp_to(&mut self, canvas: Size) {
        self.x = self.x.min(canvas.width - self.w).max(0.0);
        self.y = self.y.min(canvas.height - self.h).max(0.0);
    }

    /// Count one tick toward the next walk-cycle frame.
    pub fn advance_animation(&mut self) {
        self.anim_ticks += 1;
        if self.anim_ticks >= ANIMATION_FRAME_RATE {
            self.frame = (self.frame + 1) % ANIMATED_FRAMES;
            self.anim_ticks = 0;
        }
    }

    /// Scale the position by `sx`/`sy` (canvas resize ratios), then clamp to
    /// the new `canvas`.
    pub fn rescale(&mut self, sx: f64, sy: f64, canvas: Size) {
        self.x *= sx;
        self.y *= sy;
        self.clamp_to(canvas);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn held(keys: &[Key]) -> HeldKeys {
        let mut held = HeldKeys::new();
        for &k in keys {
            held.press(k, Duration::ZERO);
        }
        held
    }

    #[test]
    fn test_single_direction_moves_by_speed() {
        let mut e = Entity::at(Point::new(100.0, 100.0));
        assert!(e.apply_input(&held(&[Key::Right])));
        assert!((e.x - 102.0).abs() < f64::EPSILON);
        assert!((e.y - 100.0).abs() < f64::EPSILON);
        assert_eq!(e.facing, Facing::Right);
    }

    #[test]
    fn test_diagonal_is_not_normalized() {
        let mut e = Entity::at(Point::new(100.0, 100.0));
        e.apply_input(&held(&[Key::Up, Key::Left]));
        assert!((e.x - 98.0).abs() < f64::EPSILON);
        assert!((e.y - 98.0).abs() < f64::EPSILON);
        assert_eq!(e.facing, Facing::Left);
    }

    #[test]
    fn test_opposite_keys_cancel_but_still_count() {
        let mut e = Entity::at(Point::new(50.0, 50.0));
        assert!(e.apply_input(&held(&[Key::Up, Key::Down])));
        assert!((e.y - 50.0).abs() < f64::EPSILON);
        assert_eq!(e.facing, Facing::Down);
    }

    #[test]
    fn test_no_keys_no_motion() {
        let mut e = Entity::at(Point::new(5.0, 5.0));
        assert!(!e.apply_input(&HeldKeys::new()));
        assert_eq!(e.position(), Point::new(5.0, 5.0));
    }

    #[test]
    fn test_clamp_both_edges() {
        let canvas = Size::new(200.0, 100.0);
        let mut e = Entity::at(Point::new(-3.0, 90.0));
        e.clamp_to(canvas);
        assert_eq!(e.position(), Point::new(0.0, 52.0));

        e.place(Point::new(500.0, -1.0));
        e.clamp_to(canvas);
        assert_eq!(e.position(), Point::new(168.0, 0.0));
    }

    #[test]
    fn test_animation_cycles_every_rate_ticks() {
        let mut e = Entity::at(Point::default());
        for _ in 0..ANIMATION_FRAME_RATE - 1 {
            e.advance_animation();
        }
        assert_eq!(e.frame, 0);
        e.advance_animation();
        assert_eq!(e.frame, 1);
        for _ in 0..ANIMATION_FRAME_RATE * (ANIMATED_FRAMES - 1) {
            e.advance_animation();
        }
        assert_eq!(e.frame, 0);
    }

    #[test]
    fn test_rescale_is_proportional_then_clamped() {
        let mut e = Entity::at(Point::new(400.0, 300.0));
        e.rescale(0.5, 2.0, Size::new(1000.0, 500.0));
        assert_eq!(e.position(), Point::new(200.0, 452.0));
    }

    #[test]
    fn test_character_other_and_serde() {
        assert_eq!(Character::Frisk.other(), Character::Sans);
        assert_eq!(Character::Sans.other(), Character::Frisk);
        assert!(Character::Sans.is_animated());
        assert_eq!(serde_json::to_string(&Character::Sans).unwrap(), "\"sans\"");
    }
}
