//! Logical keys and held-key tracking.
//!
//! Front-ends translate their raw events into [`Key`]s. Discrete actions go
//! through `Scene::handle_key`; movement is read each tick from [`HeldKeys`].

use std::collections::HashMap;
use std::time::Duration;

/// A logical key, independent of the terminal or keyboard layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Move up / previous option.
    Up,
    /// Move down / next option.
    Down,
    /// Move left.
    Left,
    /// Move right.
    Right,
    /// Interact / confirm (`Z` or Enter).
    Confirm,
    /// Fast-forward dialog text (`X`).
    Skip,
    /// Close / go back (Escape).
    Cancel,
    /// Toggle sound (`M`).
    Mute,
    /// Save the game (`S`).
    Save,
    /// Swap the controlled character directly (`C`).
    SwitchCharacter,
}

impl Key {
    /// Whether this key moves the player while held.
    #[must_use]
    pub const fn is_direction(self) -> bool {
        matches!(self, Key::Up | Key::Down | Key::Left | Key::Right)
    }
}

/// Keys currently held down.
///
/// Terminals that report key releases call [`HeldKeys::release`]. For the
/// rest, a press is treated as held until `hold` elapses without a repeat;
/// [`HeldKeys::expire`] drops such stale keys. A zero `hold` disables expiry.
#[derive(Debug, Clone, Default)]
pub struct HeldKeys {
    pressed_at: HashMap<Key, Duration>,
    hold: Duration,
}

impl HeldKeys {
    /// Tracker whose keys stay held until released.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracker whose keys auto-release `hold` after their last press.
    #[must_use]
    pub fn with_hold(hold: Duration) -> Self {
        Self {
            pressed_at: HashMap::new(),
            hold,
        }
    }

    /// Record a press (or auto-repeat) of `key` at scene time `now`.
    pub fn press(&mut self, key: Key, now: Duration) {
        self.pressed_at.insert(key, now);
    }

    /// Record a release of `key`.
    pub fn release(&mut self, key: Key) {
        self.pressed_at.remove(&key);
    }

    /// Whether `key` is held.
    #[must_use]
    pub fn is_held(&self, key: Key) -> bool {
        self.pressed_at.contains_key(&key)
    }

    /// Whether any movement key is held.
    #[must_use]
    pub fn any_direction(&self) -> bool {
        self.pressed_at.keys().any(|k| k.is_direction())
    }

    /// Drop presses older than the hold window.
    pub fn expire(&mut self, now: Duration) {
        if self.hold.is_zero() {
            return;
        }
        let hold = self.hold;
        self.pressed_at
            .retain(|_, at| now.saturating_sub(*at) < hold);
    }

    /// Release everything.
    pub fn clear(&mut self) {
        self.pressed_at.clear();
    }
}
