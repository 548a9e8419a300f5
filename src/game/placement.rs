//! file: placement.rs
//! author: Jacob Xie
//! date: 2025/12/17 20:41:09 Wednesday
//! brief: goal relocation

use std::collections::{HashSet, VecDeque};

use rand::{Rng, SeedableRng, rngs::StdRng};

use super::{Cell, Grid};

/// Chooses where the next goal goes.
pub trait GoalPlacer {
    /// A cell on `grid` not covered by `body`, or `None` when there is none.
    fn place(&mut self, grid: &Grid, body: &VecDeque<Cell>) -> Option<Cell>;
}

/// Uniform choice over the free cells, enumerated up front so a crowded
/// board never turns into an unbounded rejection loop.
pub struct RandomPlacer {
    rng: StdRng,
}

impl RandomPlacer {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl GoalPlacer for RandomPlacer {
    fn place(&mut self, grid: &Grid, body: &VecDeque<Cell>) -> Option<Cell> {
        let occupied: HashSet<Cell> = body.iter().copied().collect();
        let free: Vec<Cell> = grid.cells().filter(|cell| !occupied.contains(cell)).collect();
        if free.is_empty() {
            return None;
        }
        Some(free[self.rng.gen_range(0..free.len())])
    }
}
