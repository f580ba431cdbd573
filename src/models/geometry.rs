use serde::{Deserialize, Serialize};

/// Two-dimensional point in the Accessibility coordinate space
/// (origin at the top-left of the main display, y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Window size in display points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Rectangle describing a window frame or a display's visible area
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn min_x(&self) -> f64 {
        self.origin.x
    }

    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }

    /// Top edge in this coordinate space
    pub fn min_y(&self) -> f64 {
        self.origin.y
    }

    /// Bottom edge in this coordinate space
    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }

    pub fn width(&self) -> f64 {
        self.size.width
    }

    pub fn height(&self) -> f64 {
        self.size.height
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x()
            && point.x < self.max_x()
            && point.y >= self.min_y()
            && point.y < self.max_y()
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            origin: Point::new(self.origin.x + dx, self.origin.y + dy),
            size: self.size,
        }
    }

    /// Shrink the rectangle by `margin` on every side.
    pub fn inset(&self, margin: f64) -> Self {
        Self::new(
            self.origin.x + margin,
            self.origin.y + margin,
            self.size.width - 2.0 * margin,
            self.size.height - 2.0 * margin,
        )
    }

    /// Translate the rectangle so it lies fully inside `bounds`. The size is
    /// never reduced; callers cap dimensions before clamping.
    pub fn clamped_within(&self, bounds: &Rect) -> Self {
        let mut dx = 0.0;
        let mut dy = 0.0;

        if self.min_x() < bounds.min_x() {
            dx = bounds.min_x() - self.min_x();
        } else if self.max_x() > bounds.max_x() {
            dx = bounds.max_x() - self.max_x();
        }

        if self.min_y() < bounds.min_y() {
            dy = bounds.min_y() - self.min_y();
        } else if self.max_y() > bounds.max_y() {
            dy = bounds.max_y() - self.max_y();
        }

        self.translated(dx, dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_accessors_match_origin_and_size() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(rect.min_x(), 10.0);
        assert_eq!(rect.max_x(), 110.0);
        assert_eq!(rect.min_y(), 20.0);
        assert_eq!(rect.max_y(), 70.0);
    }

    #[test]
    fn contains_is_half_open() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains(Point::new(0.0, 0.0)));
        assert!(rect.contains(Point::new(9.9, 9.9)));
        assert!(!rect.contains(Point::new(10.0, 5.0)));
    }

    #[test]
    fn clamp_translates_without_shrinking() {
        let bounds = Rect::new(0.0, 0.0, 1000.0, 800.0);
        let overflow = Rect::new(900.0, -50.0, 200.0, 100.0);
        let clamped = overflow.clamped_within(&bounds);

        assert_eq!(clamped.size, overflow.size);
        assert_eq!(clamped.max_x(), 1000.0);
        assert_eq!(clamped.min_y(), 0.0);
    }

    #[test]
    fn inset_shrinks_every_side() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0).inset(10.0);
        assert_eq!(rect, Rect::new(10.0, 10.0, 80.0, 80.0));
    }
}
