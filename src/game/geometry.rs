//! Hitbox rectangles and segment/rectangle intersection

use crate::model::{Unit, Vec2};

/// Axis-aligned hitbox as four corners
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left_bottom: Vec2,
    pub right_bottom: Vec2,
    pub left_top: Vec2,
    pub right_top: Vec2,
}

impl Rect {
    /// Rectangle spanning `min` to `max`
    pub fn from_bounds(min: Vec2, max: Vec2) -> Self {
        Self {
            left_bottom: Vec2::new(min.x, min.y),
            right_bottom: Vec2::new(max.x, min.y),
            left_top: Vec2::new(min.x, max.y),
            right_top: Vec2::new(max.x, max.y),
        }
    }

    /// Hitbox of a unit. Position is the bottom centre, `size.x` the
    /// horizontal half-extent and `size.y` the height.
    pub fn of_unit(unit: &Unit) -> Self {
        let Vec2 { x, y } = unit.position;
        Self::from_bounds(
            Vec2::new(x - unit.size.x, y),
            Vec2::new(x + unit.size.x, y + unit.size.y),
        )
    }

    pub fn corners(&self) -> [Vec2; 4] {
        [self.left_bottom, self.right_bottom, self.left_top, self.right_top]
    }
}

/// Whether the segment `p1 -> p2` touches the rectangle.
///
/// First rejects segments whose endpoints both lie strictly past every
/// corner along X or Y, then evaluates the segment's implicit line equation
/// at each corner: if all corners sit strictly on one side the line misses.
pub fn line_rect_intersect(p1: Vec2, p2: Vec2, rect: &Rect) -> bool {
    let corners = rect.corners();

    let beyond = |axis: fn(&Vec2) -> f64, greater: bool| {
        corners.iter().all(|c| {
            let (a, b, r) = (axis(&p1), axis(&p2), axis(c));
            if greater {
                a > r && b > r
            } else {
                a < r && b < r
            }
        })
    };

    if beyond(|v| v.x, true)
        || beyond(|v| v.x, false)
        || beyond(|v| v.y, true)
        || beyond(|v| v.y, false)
    {
        return false;
    }

    let side = |r: &Vec2| (p2.y - p1.y) * r.x + (p1.x - p2.x) * r.y + (p2.x * p1.y - p1.x * p2.y);

    let all_negative = corners.iter().all(|c| side(c) < 0.0);
    let all_positive = corners.iter().all(|c| side(c) > 0.0);

    !(all_negative || all_positive)
}
