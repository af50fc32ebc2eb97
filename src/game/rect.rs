//! Rectangle type for entity placement and collision

/// An axis-aligned rectangle defined by top-left position and size
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Right edge
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Bottom edge
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Center X
    pub fn center_x(&self) -> f32 {
        self.x + self.w * 0.5
    }

    /// Center Y
    pub fn center_y(&self) -> f32 {
        self.y + self.h * 0.5
    }

    /// Do two rectangles overlap? Touching edges do not count.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Same rectangle anchored so its center sits at (cx, cy)
    pub fn centered_at(cx: f32, cy: f32, w: f32, h: f32) -> Self {
        Self::new(cx - w * 0.5, cy - h * 0.5, w, h)
    }

    /// Same rectangle anchored so its bottom-center sits at (cx, bottom)
    pub fn mid_bottom_at(cx: f32, bottom: f32, w: f32, h: f32) -> Self {
        Self::new(cx - w * 0.5, bottom - h, w, h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlaps() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        let c = Rect::new(20.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
        assert!(!a.overlaps(&below));
    }

    #[test]
    fn test_edges_and_center() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert!((r.right() - 110.0).abs() < 0.001);
        assert!((r.bottom() - 70.0).abs() < 0.001);
        assert!((r.center_x() - 60.0).abs() < 0.001);
        assert!((r.center_y() - 45.0).abs() < 0.001);
    }

    #[test]
    fn test_anchored_constructors() {
        let c = Rect::centered_at(50.0, 50.0, 20.0, 10.0);
        assert!((c.x - 40.0).abs() < 0.001);
        assert!((c.y - 45.0).abs() < 0.001);

        let m = Rect::mid_bottom_at(100.0, 536.0, 40.0, 40.0);
        assert!((m.x - 80.0).abs() < 0.001);
        assert!((m.bottom() - 536.0).abs() < 0.001);
    }
}
