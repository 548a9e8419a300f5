//! file: grid.rs
//! author: Jacob Xie
//! date: 2025/12/16 21:02:40 Tuesday
//! brief: bounded 4-connected lattice

use super::{Cell, Direction};

/// Logical board. Fixed for a session; window geometry never feeds back here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
}

impl Grid {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn area(&self) -> usize {
        (self.width.max(0) as usize) * (self.height.max(0) as usize)
    }

    /// Longest starting body that fits: head in the middle column, the rest
    /// trailing left, and one cell left over for the goal.
    pub fn max_initial_length(&self) -> usize {
        if self.width < 1 || self.height < 1 {
            return 0;
        }
        let row_fit = (self.width / 2 + 1) as usize;
        row_fit.min(self.area().saturating_sub(1))
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.x) && (0..self.height).contains(&cell.y)
    }

    /// In-bounds axis-aligned neighbours, in `Direction::ALL` order.
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        Direction::ALL
            .into_iter()
            .map(move |direction| cell.offset(direction))
            .filter(|next| self.in_bounds(*next))
    }

    /// Row-major walk over every cell.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Cell { x, y }))
    }
}
