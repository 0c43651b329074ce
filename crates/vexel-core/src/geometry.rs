use std::ops::Mul;

use glam::Vec2;

/// Axis-aligned rectangle with an explicit origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect<T> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
}

impl<T> Rect<T> {
    pub fn new(x: T, y: T, width: T, height: T) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }
}

impl<T: Mul + Copy> Mul<T> for Rect<T> {
    type Output = Rect<<T as Mul>::Output>;

    fn mul(self, rhs: T) -> Self::Output {
        Rect {
            x: self.x * rhs,
            y: self.y * rhs,
            width: self.width * rhs,
            height: self.height * rhs,
        }
    }
}

impl Rect<f32> {
    pub const ZERO: Self = Rect {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// Half-open containment test: the min edges are inclusive, the max
    /// edges exclusive, so adjacent rects never both claim a point.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(1.0, 2.0, 10.0, 20.0);
        assert!(rect.contains(Vec2::new(1.0, 2.0)));
        assert!(rect.contains(Vec2::new(5.0, 10.0)));
        assert!(!rect.contains(Vec2::new(11.0, 10.0)));
        assert!(!rect.contains(Vec2::new(5.0, 22.0)));
        assert!(!rect.contains(Vec2::new(0.5, 10.0)));
    }

    #[test]
    fn test_rect_scale() {
        let rect = Rect::new(1.0, 2.0, 3.0, 4.0) * 2.0;
        assert_eq!(rect, Rect::new(2.0, 4.0, 6.0, 8.0));
    }

    #[test]
    fn test_zero_rect_contains_nothing() {
        assert!(!Rect::<f32>::ZERO.contains(Vec2::ZERO));
    }
}
