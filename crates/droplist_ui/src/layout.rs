//! Screen-space geometry shared by the dropdown, the host and the view description.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in absolute screen coordinates.
///
/// `y` grows downward from the top edge of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge.
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge.
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Check whether a point lies inside (edges inclusive).
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }

    /// Smallest rectangle covering both `self` and `other`.
    pub fn union(&self, other: &Bounds) -> Bounds {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        Bounds::new(
            x,
            y,
            self.right().max(other.right()) - x,
            self.bottom().max(other.bottom()) - y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_edge_inclusive() {
        let b = Bounds::new(10.0, 20.0, 100.0, 30.0);
        assert!(b.contains(10.0, 20.0));
        assert!(b.contains(110.0, 50.0));
        assert!(!b.contains(9.9, 25.0));
        assert!(!b.contains(50.0, 50.1));
    }

    #[test]
    fn test_union_covers_both() {
        let anchor = Bounds::new(10.0, 100.0, 200.0, 32.0);
        let popup = Bounds::new(10.0, 132.0, 200.0, 84.0);
        let u = anchor.union(&popup);
        assert_eq!(u, Bounds::new(10.0, 100.0, 200.0, 116.0));
    }
}
