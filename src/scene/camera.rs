//! Smoothed camera that keeps the player near the middle of the viewport.

use std::time::Duration;

use crate::constants::{SCROLL_SMOOTHING, SCROLL_THRESHOLD, SCROLL_THROTTLE};
use crate::geometry::{Point, Rect, Size};

/// Viewport offset into the document, plus the follow throttle.
///
/// `origin` is where the canvas sits inside the document; in the terminal
/// front-end the canvas is the whole document and it stays at zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Camera {
    /// Top-left corner of the viewport, in document pixels.
    pub scroll: Point,
    /// Canvas position inside the document.
    pub origin: Point,
    last_follow: Option<Duration>,
}

impl Camera {
    /// A camera at the document's top-left corner.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Step the viewport toward the player.
    ///
    /// Calls closer than [`SCROLL_THROTTLE`] to the previous accepted call are
    /// ignored. The target is the scroll that centers the player, clamped to
    /// the scrollable range. When both axes are within [`SCROLL_THRESHOLD`] of
    /// it the camera holds still; otherwise it moves [`SCROLL_SMOOTHING`] of
    /// the way. Returns whether the scroll changed.
    pub fn follow_player(
        &mut self,
        player: &Rect,
        viewport: Size,
        document: Size,
        now: Duration,
    ) -> bool {
        if let Some(last) = self.last_follow
            && now.saturating_sub(last) < SCROLL_THROTTLE
        {
            return false;
        }
        self.last_follow = Some(now);

        let max_x = (document.width - viewport.width).max(0.0);
        let max_y = (document.height - viewport.height).max(0.0);
        let center = player.center();
        let target_x = (self.origin.x + center.x - viewport.width / 2.0).clamp(0.0, max_x);
        let target_y = (self.origin.y + center.y - viewport.height / 2.0).clamp(0.0, max_y);
        let dx = target_x - self.scroll.x;
        let dy = target_y - self.scroll.y;
        if dx.abs() < SCROLL_THRESHOLD && dy.abs() < SCROLL_THRESHOLD {
            return false;
        }

        self.scroll = Point::new(
            self.scroll.x + dx * SCROLL_SMOOTHING,
            self.scroll.y + dy * SCROLL_SMOOTHING,
        );
        true
    }

    /// Pull the scroll back inside the document after a resize.
    pub fn clamp(&mut self, viewport: Size, document: Size) {
        let max_x = (document.width - viewport.width).max(0.0);
        let max_y = (document.height - viewport.height).max(0.0);
        self.scroll.x = self.scroll.x.min(max_x).max(0.0);
        self.scroll.y = self.scroll.y.min(max_y).max(0.0);
    }

    /// Jump straight to the player without smoothing.
    pub fn center_on(&mut self, player: &Rect, viewport: Size, document: Size) {
        let center = player.center();
        self.scroll = Point::new(
            self.origin.x + center.x - viewport.width / 2.0,
            self.origin.y + center.y - viewport.height / 2.0,
        );
        self.clamp(viewport, document);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW: Size = Size::new(400.0, 300.0);
    const DOC: Size = Size::new(2000.0, 2000.0);

    #[test]
    fn test_throttle_drops_close_calls() {
        let mut cam = Camera::new();
        let player = Rect::new(1000.0, 1000.0, 32.0, 48.0);
        assert!(cam.follow_player(&player, VIEW, DOC, Duration::from_millis(100)));
        let before = cam.scroll;
        assert!(!cam.follow_player(&player, VIEW, DOC, Duration::from_millis(110)));
        assert_eq!(cam.scroll, before);
        assert!(cam.follow_player(&player, VIEW, DOC, Duration::from_millis(116)));
    }

    #[test]
    fn test_partial_correction() {
        let mut cam = Camera::new();
        // Center (216, 174) puts the target at (16, 24).
        let player = Rect::new(200.0, 150.0, 32.0, 48.0);
        cam.follow_player(&player, VIEW, DOC, Duration::ZERO);
        assert!((cam.scroll.x - 4.8).abs() < 1e-9);
        assert!((cam.scroll.y - 7.2).abs() < 1e-9);
    }

    #[test]
    fn test_converges_without_oscillation() {
        let mut cam = Camera::new();
        let player = Rect::new(1200.0, 900.0, 32.0, 48.0);
        let mut now = Duration::ZERO;
        let mut last_step = f64::INFINITY;
        let mut calls = 0;
        loop {
            let before = cam.scroll;
            cam.follow_player(&player, VIEW, DOC, now);
            let step = (cam.scroll.x - before.x).hypot(cam.scroll.y - before.y);
            if step == 0.0 {
                break;
            }
            assert!(step < last_step, "step grew: {step} >= {last_step}");
            last_step = step;
            now += SCROLL_THROTTLE;
            calls += 1;
            assert!(calls < 100, "camera never settled");
        }
        let target_x = 1216.0 - 200.0;
        assert!((cam.scroll.x - target_x).abs() < SCROLL_THRESHOLD);
        assert!(cam.scroll.x <= target_x);
    }

    #[test]
    fn test_clamped_to_document() {
        let mut cam = Camera::new();
        let corner = Rect::new(0.0, 0.0, 32.0, 48.0);
        assert!(!cam.follow_player(&corner, VIEW, DOC, Duration::ZERO));
        assert_eq!(cam.scroll, Point::default());

        let far = Rect::new(1968.0, 1952.0, 32.0, 48.0);
        cam.center_on(&far, VIEW, DOC);
        assert_eq!(cam.scroll, Point::new(1600.0, 1700.0));
    }

    #[test]
    fn test_small_document_never_scrolls() {
        let mut cam = Camera::new();
        let player = Rect::new(350.0, 250.0, 32.0, 48.0);
        assert!(!cam.follow_player(&player, VIEW, VIEW, Duration::ZERO));
    }

    #[test]
    fn test_origin_offsets_target() {
        let mut cam = Camera::new();
        cam.origin = Point::new(0.0, 100.0);
        let player = Rect::new(184.0, 126.0, 32.0, 48.0);
        // Canvas center matches the viewport on x; y target is 100.
        cam.follow_player(&player, VIEW, DOC, Duration::ZERO);
        assert!(cam.scroll.x.abs() < f64::EPSILON);
        assert!((cam.scroll.y - 30.0).abs() < 1e-9);
    }
}
