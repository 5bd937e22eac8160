//! Tuning constants for the exploration scene.
//!
//! All distances are world pixels; all durations are wall-clock (scene clock)
//! time. Movement is per tick, not per second.

use std::time::Duration;

/// Player displacement per tick, per held arrow key.
pub const PLAYER_SPEED: f64 = 2.0;
/// Entity bounding box width.
pub const PLAYER_WIDTH: f64 = 32.0;
/// Entity bounding box height.
pub const PLAYER_HEIGHT: f64 = 48.0;

/// Card width (all cards share it).
pub const CARD_WIDTH: f64 = 350.0;
/// Tallest card height; shorter variants subtract from it.
pub const CARD_HEIGHT: f64 = 220.0;
/// Gap between grid cells, also used to place the spawn slot.
pub const CARD_SPACING: f64 = 50.0;
/// Margin by which card rectangles are inflated for hit-testing.
pub const CARD_COLLISION_PADDING: f64 = 10.0;
/// Cards per grid row.
pub const CARDS_PER_ROW: usize = 2;

/// Center-to-center distance under which the NPC can be talked to.
pub const NPC_INTERACTION_DISTANCE: f64 = 100.0;

/// Ticks between animation frame advances.
pub const ANIMATION_FRAME_RATE: u32 = 20;
/// Frames in the secondary character's walk cycle.
pub const ANIMATED_FRAMES: u32 = 4;

/// Minimum time between two camera corrections.
pub const SCROLL_THROTTLE: Duration = Duration::from_millis(16);
/// Per-axis offset under which the camera stays put.
pub const SCROLL_THRESHOLD: f64 = 5.0;
/// Fraction of the offset corrected per camera step.
pub const SCROLL_SMOOTHING: f64 = 0.3;

/// Height reserved for the title banner.
pub const TITLE_HEIGHT: f64 = 80.0;
/// Gap between the banner and the first card row.
pub const TITLE_SPACING: f64 = 40.0;

/// Typewriter reveal speed.
pub const TYPEWRITER_CHAR_DELAY: Duration = Duration::from_millis(20);
/// Lifetime of the "file saved" toast.
pub const SAVE_TOAST_DURATION: Duration = Duration::from_millis(1500);
/// Lifetime of the "journey continues" toast shown after loading.
pub const LOAD_TOAST_DURATION: Duration = Duration::from_millis(2000);

/// Greedy wrap width for card preview lines, in characters.
pub const PREVIEW_WRAP: usize = 40;
