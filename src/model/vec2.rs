//! 2D world-space vector helpers

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Squared euclidean distance
    pub fn distance_sqr(&self, other: Vec2) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Vector from `self` pointing at `target`
    pub fn aim_at(&self, target: Vec2) -> Vec2 {
        target - *self
    }

    pub fn is_left_of(&self, other: Vec2) -> bool {
        self.x < other.x
    }

    pub fn is_right_of(&self, other: Vec2) -> bool {
        self.x > other.x
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aim_points_at_target() {
        let me = Vec2::new(3.0, 4.0);
        assert_eq!(me.aim_at(Vec2::new(1.0, 10.0)), Vec2::new(-2.0, 6.0));
        assert_eq!(me.distance_sqr(Vec2::new(0.0, 0.0)), 25.0);
    }

    #[test]
    fn left_right_are_strict() {
        let a = Vec2::new(1.0, 0.0);
        let b = Vec2::new(1.0, 5.0);
        assert!(!a.is_left_of(b));
        assert!(!a.is_right_of(b));
        assert!(a.is_left_of(Vec2::new(1.5, 0.0)));
        assert!(a.is_right_of(Vec2::new(0.5, 0.0)));
    }
}
