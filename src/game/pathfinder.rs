//! file: pathfinder.rs
//! author: Jacob Xie
//! date: 2025/12/16 21:34:12 Tuesday
//! brief: A* from head to goal over the grid minus the obstacle snapshot

use std::{
    cmp::{Ordering, Reverse},
    collections::{BinaryHeap, HashMap, HashSet},
};

use super::{Cell, Grid};

/// Cells from start to goal inclusive, each one unit step from the last.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    cells: Vec<Cell>,
}

impl Path {
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell count, i.e. number of moves + 1.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn start(&self) -> Option<Cell> {
        self.cells.first().copied()
    }

    pub fn goal(&self) -> Option<Cell> {
        self.cells.last().copied()
    }

    /// The cell to move into next, if the path goes anywhere.
    pub fn next_step(&self) -> Option<Cell> {
        self.cells.get(1).copied()
    }

    pub fn contains(&self, cell: &Cell) -> bool {
        self.cells.contains(cell)
    }

    /// Every consecutive pair differs by exactly one axis-aligned unit step.
    pub fn is_contiguous(&self) -> bool {
        self.cells
            .windows(2)
            .all(|pair| pair[0].step_to(pair[1]).is_some())
    }
}

/// Frontier entry. Ordered by f-score, then by push order, so equal-f ties
/// always pop first-in-first-out and every search is reproducible.
#[derive(Clone, Copy, PartialEq, Eq)]
struct Frontier {
    f: u32,
    seq: u64,
    g: u32,
    cell: Cell,
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.f, self.seq).cmp(&(other.f, other.seq))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

pub struct Pathfinder<'a> {
    grid: &'a Grid,
}

impl<'a> Pathfinder<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }

    /// Shortest 4-connected route from `start` to `goal` avoiding `blocked`.
    ///
    /// `None` means the goal is unreachable under this snapshot; that is a
    /// normal outcome, not an error. `start` itself may be in `blocked`.
    pub fn find_path(&self, start: Cell, goal: Cell, blocked: &HashSet<Cell>) -> Option<Path> {
        if !self.grid.in_bounds(start) || !self.grid.in_bounds(goal) {
            return None;
        }

        let mut open = BinaryHeap::new();
        let mut came_from: HashMap<Cell, Cell> = HashMap::new();
        let mut g_score: HashMap<Cell, u32> = HashMap::new();
        let mut seq = 0u64;
        let mut expanded = 0usize;

        g_score.insert(start, 0);
        open.push(Reverse(Frontier {
            f: start.manhattan(goal),
            seq,
            g: 0,
            cell: start,
        }));

        while let Some(Reverse(Frontier { g, cell: current, .. })) = open.pop() {
            // superseded by a cheaper push of the same cell
            if g_score.get(&current).is_some_and(|best| g > *best) {
                continue;
            }
            if current == goal {
                let path = reconstruct(&came_from, current);
                tracing::trace!(expanded, length = path.len(), "path found");
                return Some(path);
            }
            expanded += 1;

            for neighbor in self.grid.neighbors(current) {
                if blocked.contains(&neighbor) {
                    continue;
                }
                let tentative_g = g + 1;
                if g_score.get(&neighbor).is_none_or(|best| tentative_g < *best) {
                    came_from.insert(neighbor, current);
                    g_score.insert(neighbor, tentative_g);
                    seq += 1;
                    open.push(Reverse(Frontier {
                        f: tentative_g + neighbor.manhattan(goal),
                        seq,
                        g: tentative_g,
                        cell: neighbor,
                    }));
                }
            }
        }

        tracing::trace!(expanded, "goal unreachable");
        None
    }
}

fn reconstruct(came_from: &HashMap<Cell, Cell>, goal: Cell) -> Path {
    let mut cells = vec![goal];
    let mut current = goal;
    while let Some(&prev) = came_from.get(&current) {
        cells.push(prev);
        current = prev;
    }
    cells.reverse();
    Path { cells }
}
