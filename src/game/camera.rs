//! Scrolling camera
//!
//! One-dimensional horizontal offset that follows the player rightward.
//! It never scrolls left of the level origin, and only advances once the
//! player moves past roughly a third of the window.

use super::constants::{CAMERA_LEAD, WINDOW_WIDTH};
use super::rect::Rect;

#[derive(Debug, Clone, Copy, Default)]
pub struct Camera {
    /// World-space x of the left window edge
    pub offset: f32,
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Follow a target rectangle (the player)
    pub fn update(&mut self, target: &Rect) {
        let lead = target.center_x() - WINDOW_WIDTH * CAMERA_LEAD;
        if lead > 0.0 {
            self.offset = lead;
        }
    }

    /// World-space rectangle to screen-space
    pub fn apply(&self, rect: &Rect) -> Rect {
        Rect::new(rect.x - self.offset, rect.y, rect.w, rect.h)
    }

    /// Back to the level origin (level transitions)
    pub fn reset(&mut self) {
        self.offset = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_holds_at_origin() {
        let mut camera = Camera::new();
        // Player near the left edge: center well inside the lead third
        let target = Rect::new(50.0, 400.0, 40.0, 56.0);
        camera.update(&target);
        assert_eq!(camera.offset, 0.0);
    }

    #[test]
    fn test_camera_follows_past_the_lead_third() {
        let mut camera = Camera::new();
        let target = Rect::new(800.0, 400.0, 40.0, 56.0);
        camera.update(&target);
        let expected = target.center_x() - WINDOW_WIDTH * CAMERA_LEAD;
        assert!((camera.offset - expected).abs() < 0.001);
    }

    #[test]
    fn test_camera_never_scrolls_left_of_origin() {
        let mut camera = Camera::new();
        camera.update(&Rect::new(800.0, 400.0, 40.0, 56.0));
        let advanced = camera.offset;

        // A target back inside the lead third leaves the offset alone
        camera.update(&Rect::new(100.0, 400.0, 40.0, 56.0));
        assert_eq!(camera.offset, advanced);
    }

    #[test]
    fn test_apply_shifts_world_to_screen() {
        let mut camera = Camera::new();
        camera.offset = 150.0;
        let world = Rect::new(500.0, 120.0, 64.0, 32.0);
        let screen = camera.apply(&world);
        assert!((screen.x - 350.0).abs() < 0.001);
        assert_eq!(screen.y, world.y);
        assert_eq!(screen.w, world.w);
    }

    #[test]
    fn test_reset() {
        let mut camera = Camera::new();
        camera.offset = 900.0;
        camera.reset();
        assert_eq!(camera.offset, 0.0);
    }
}
