/// Axis-aligned rectangle in pixel space; (x, y) is the top-left corner
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Rect { x, y, width, height }
    }

    /// Square of side `size` with its top-left corner at (x, y)
    pub fn square(x: f32, y: f32, size: f32) -> Self {
        Rect::new(x, y, size, size)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Same extent moved to a new top-left corner
    pub fn at(&self, x: f32, y: f32) -> Self {
        Rect::new(x, y, self.width, self.height)
    }

    /// True when the rectangles share a region of positive area.
    /// Rectangles that only touch along an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_positive_area() {
        let actor = Rect::square(390.0, 390.0, 32.0);
        let gem = Rect::square(400.0, 400.0, 32.0);
        assert!(actor.overlaps(&gem));
        assert!(gem.overlaps(&actor));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        let corner = Rect::new(10.0, 10.0, 5.0, 5.0);
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));
        assert!(!a.overlaps(&corner));
    }

    #[test]
    fn test_overlap_needs_both_axes() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 20.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_bounds() {
        let r = Rect::new(2.0, 3.0, 4.0, 5.0);
        assert_eq!((r.right(), r.bottom()), (6.0, 8.0));
        assert_eq!(r.at(0.0, 0.0), Rect::new(0.0, 0.0, 4.0, 5.0));
    }
}
