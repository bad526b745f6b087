//! Line-of-sight occlusion against the tile grid
//!
//! A segment is rasterized one tile column at a time, always from the left
//! endpoint to the right one, and every sampled cell is tested for a wall.

use crate::model::{GridDimensions, Level, Tile, Vec2};

/// Answers "is there a wall between these two points" for one level
#[derive(Debug, Clone, Copy)]
pub struct VisibilityChecker<'a> {
    level: &'a Level,
    dims: GridDimensions,
}

impl<'a> VisibilityChecker<'a> {
    pub fn new(level: &'a Level, dims: GridDimensions) -> Self {
        Self { level, dims }
    }

    /// Checker sized from the level itself
    pub fn for_level(level: &'a Level) -> Self {
        Self::new(level, level.dimensions())
    }

    pub fn dimensions(&self) -> GridDimensions {
        self.dims
    }

    /// True if any sampled tile on the segment `p1 -> p2` is a wall.
    ///
    /// Samples outside the grid count as open, so a ray leaving the arena
    /// never fails the query.
    pub fn has_wall_between(&self, p1: Vec2, p2: Vec2) -> bool {
        if !p1.is_finite() || !p2.is_finite() {
            return false;
        }

        let (left, right) = if p1.is_left_of(p2) { (p1, p2) } else { (p2, p1) };

        if left.x == right.x {
            return self.column_has_wall(left.x, left.y, right.y);
        }

        let Some((first, last)) = self.clamp_span(left.x.floor(), right.x.floor(), self.dims.width)
        else {
            return false;
        };

        // y(x) = (a*x + c) / (x2 - x1)
        let a = right.y - left.y;
        let c = right.x * left.y - left.x * right.y;
        let run = right.x - left.x;

        (first..=last).any(|x| {
            let y = (a * x as f64 + c) / run;
            self.is_wall(x, y)
        })
    }

    /// Vertical or single-point segment: walk rows of one column
    fn column_has_wall(&self, x: f64, y1: f64, y2: f64) -> bool {
        let column = x.trunc() as i64;
        let (low, high) = if y1 <= y2 { (y1, y2) } else { (y2, y1) };

        let Some((first, last)) = self.clamp_span(low.floor(), high.floor(), self.dims.height)
        else {
            return false;
        };

        (first..=last).any(|y| self.level.cell(column, y) == Some(Tile::Wall))
    }

    fn is_wall(&self, x: i64, y: f64) -> bool {
        if !y.is_finite() {
            return false;
        }
        let row = y.trunc();
        if row < 0.0 {
            return false;
        }
        let row = row as i64;
        self.dims.contains(x, row) && self.level.cell(x, row) == Some(Tile::Wall)
    }

    /// Intersect `[from, to]` with `[0, extent)`; cells outside never hold a wall
    fn clamp_span(&self, from: f64, to: f64, extent: usize) -> Option<(i64, i64)> {
        if extent == 0 {
            return None;
        }
        let max = extent as f64 - 1.0;
        if to < 0.0 || from > max {
            return None;
        }
        Some((from.max(0.0) as i64, to.min(max) as i64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level_with_walls(width: usize, height: usize, walls: &[(usize, usize)]) -> Level {
        let mut level = Level::empty(width, height);
        for &(x, y) in walls {
            level.set(x, y, Tile::Wall);
        }
        level
    }

    #[test]
    fn open_level_has_no_walls() {
        let level = Level::empty(20, 20);
        let vis = VisibilityChecker::for_level(&level);
        assert!(!vis.has_wall_between(Vec2::new(1.5, 1.5), Vec2::new(18.5, 12.5)));
    }

    #[test]
    fn horizontal_wall_blocks() {
        let level = level_with_walls(20, 20, &[(7, 10)]);
        let vis = VisibilityChecker::for_level(&level);
        assert!(vis.has_wall_between(Vec2::new(2.0, 10.5), Vec2::new(15.0, 10.5)));
        assert!(vis.has_wall_between(Vec2::new(15.0, 10.5), Vec2::new(2.0, 10.5)));
        // Row above is clear
        assert!(!vis.has_wall_between(Vec2::new(2.0, 11.5), Vec2::new(15.0, 11.5)));
    }

    #[test]
    fn diagonal_samples_interpolated_row() {
        // Segment (0,0) -> (10,10) passes through cell (5,5)
        let level = level_with_walls(12, 12, &[(5, 5)]);
        let vis = VisibilityChecker::for_level(&level);
        assert!(vis.has_wall_between(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0)));
        assert!(!vis.has_wall_between(Vec2::new(0.0, 2.0), Vec2::new(10.0, 2.0)));
    }

    #[test]
    fn vertical_segment_does_not_divide() {
        let level = level_with_walls(10, 10, &[(4, 6)]);
        let vis = VisibilityChecker::for_level(&level);
        assert!(vis.has_wall_between(Vec2::new(4.5, 1.0), Vec2::new(4.5, 8.0)));
        assert!(vis.has_wall_between(Vec2::new(4.5, 8.0), Vec2::new(4.5, 1.0)));
        assert!(!vis.has_wall_between(Vec2::new(3.5, 1.0), Vec2::new(3.5, 8.0)));
        assert!(!vis.has_wall_between(Vec2::new(4.5, 1.0), Vec2::new(4.5, 5.9)));
    }

    #[test]
    fn single_point_checks_its_own_tile() {
        let level = level_with_walls(10, 10, &[(2, 2)]);
        let vis = VisibilityChecker::for_level(&level);
        let p = Vec2::new(2.5, 2.5);
        assert!(vis.has_wall_between(p, p));
        let q = Vec2::new(3.5, 2.5);
        assert!(!vis.has_wall_between(q, q));
    }

    #[test]
    fn out_of_grid_samples_are_open() {
        let level = level_with_walls(10, 10, &[(0, 5)]);
        let vis = VisibilityChecker::for_level(&level);
        // Starts left of the grid and crosses the wall column
        assert!(vis.has_wall_between(Vec2::new(-5.0, 5.5), Vec2::new(3.0, 5.5)));
        // Entirely outside
        assert!(!vis.has_wall_between(Vec2::new(-5.0, 5.5), Vec2::new(-1.0, 5.5)));
        assert!(!vis.has_wall_between(Vec2::new(12.0, 5.5), Vec2::new(30.0, 5.5)));
        // Row leaves the grid vertically
        assert!(!vis.has_wall_between(Vec2::new(1.0, 50.0), Vec2::new(8.0, 60.0)));
        assert!(!vis.has_wall_between(Vec2::new(f64::NAN, 1.0), Vec2::new(3.0, 1.0)));
    }

    #[test]
    fn samples_just_below_zero_truncate_into_the_grid() {
        let level = level_with_walls(10, 10, &[(5, 0), (0, 7)]);
        let vis = VisibilityChecker::for_level(&level);
        // Row -0.5 truncates to row 0
        assert!(vis.has_wall_between(Vec2::new(2.0, -0.5), Vec2::new(8.0, -0.5)));
        assert!(vis.has_wall_between(Vec2::new(8.0, -0.5), Vec2::new(2.0, -0.5)));
        // Column -0.5 truncates to column 0
        assert!(vis.has_wall_between(Vec2::new(-0.5, 6.0), Vec2::new(-0.5, 8.0)));
        // A full tile below is still outside
        assert!(!vis.has_wall_between(Vec2::new(2.0, -1.5), Vec2::new(8.0, -1.5)));
    }

    #[test]
    fn huge_coordinates_are_clamped_to_grid() {
        let level = level_with_walls(10, 10, &[(9, 3)]);
        let vis = VisibilityChecker::for_level(&level);
        assert!(vis.has_wall_between(Vec2::new(0.0, 3.5), Vec2::new(1e15, 3.5)));
        assert!(!vis.has_wall_between(Vec2::new(-1e15, 1.5), Vec2::new(1e15, 1.5)));
    }

    #[test]
    fn empty_level_never_blocks() {
        let level = Level::default();
        let vis = VisibilityChecker::for_level(&level);
        assert!(!vis.has_wall_between(Vec2::new(0.0, 0.0), Vec2::new(5.0, 5.0)));
        assert!(!vis.has_wall_between(Vec2::new(1.0, 0.0), Vec2::new(1.0, 5.0)));
    }
}
