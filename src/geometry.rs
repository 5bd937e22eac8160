//! Axis-aligned rectangles and the two hit tests the scene relies on.

use serde::{Deserialize, Serialize};

/// A point in world pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate (grows downward).
    pub y: f64,
}

impl Point {
    /// Create a point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A width/height pair in world pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Size {
    /// Create a size.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub w: f64,
    /// Height.
    pub h: f64,
}

impl Rect {
    /// Create a rectangle.
    #[must_use]
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Right edge (exclusive).
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    /// Bottom edge (exclusive).
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    /// Geometric center.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Grow the rectangle by `margin` on every side.
    #[must_use]
    pub fn inflate(&self, margin: f64) -> Self {
        Self::new(
            self.x - margin,
            self.y - margin,
            self.w + margin * 2.0,
            self.h + margin * 2.0,
        )
    }

    /// Strict interior intersection; touching edges do not count.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

/// Card hit test: does `player` overlap `card` once the card is inflated by
/// `padding` on every side?
#[must_use]
pub fn rect_overlap(player: &Rect, card: &Rect, padding: f64) -> bool {
    player.intersects(&card.inflate(padding))
}

/// NPC hit test: is the Euclidean distance between the two centers strictly
/// below `radius`?
#[must_use]
pub fn circular_interact(player: &Rect, npc: &Rect, radius: f64) -> bool {
    center_distance(player, npc) < radius
}

/// Euclidean distance between the centers of two rectangles.
#[must_use]
pub fn center_distance(a: &Rect, b: &Rect) -> f64 {
    let (ca, cb) = (a.center(), b.center());
    (ca.x - cb.x).hypot(ca.y - cb.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_inside_padding() {
        let card = Rect::new(100.0, 100.0, 50.0, 50.0);
        // Player ends 5px left of the card: inside the 10px margin.
        let player = Rect::new(63.0, 110.0, 32.0, 48.0);
        assert!(rect_overlap(&player, &card, 10.0));
        assert!(!rect_overlap(&player, &card, 0.0));
    }

    #[test]
    fn test_overlap_touching_padded_edge_is_outside() {
        let card = Rect::new(100.0, 100.0, 50.0, 50.0);
        // Right edge at exactly card.x - padding.
        let player = Rect::new(58.0, 100.0, 32.0, 48.0);
        assert!(!rect_overlap(&player, &card, 10.0));
    }

    #[test]
    fn test_circular_boundary_is_exclusive() {
        let a = Rect::new(0.0, 0.0, 32.0, 48.0);
        let b = Rect::new(100.0, 0.0, 32.0, 48.0);
        assert!(!circular_interact(&a, &b, 100.0));
        let c = Rect::new(99.5, 0.0, 32.0, 48.0);
        assert!(circular_interact(&a, &c, 100.0));
    }

    #[test]
    fn test_circular_uses_linear_distance() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(30.0, 40.0, 10.0, 10.0);
        assert!((center_distance(&a, &b) - 50.0).abs() < 1e-9);
        assert!(circular_interact(&a, &b, 50.1));
        assert!(!circular_interact(&a, &b, 50.0));
    }

    #[test]
    fn test_rect_center_and_inflate() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.center(), Point::new(25.0, 40.0));
        assert_eq!(r.inflate(5.0), Rect::new(5.0, 15.0, 40.0, 50.0));
    }
}
