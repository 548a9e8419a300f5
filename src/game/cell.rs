//! file: cell.rs
//! author: Jacob Xie
//! date: 2025/12/14 23:45:17 Sunday
//! brief: integer grid position

use std::fmt;

use super::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, direction: Direction) -> Self {
        let (dx, dy) = direction.vector();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// `|dx| + |dy|`, the A* heuristic on a 4-connected unit-cost grid.
    pub fn manhattan(self, other: Cell) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Direction of a single unit step from `self` to `other`, if it is one.
    pub fn step_to(self, other: Cell) -> Option<Direction> {
        Direction::from_delta(other.x - self.x, other.y - self.y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}
