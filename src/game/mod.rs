//! file: mod.rs
//! author: Jacob Xie
//! date: 2025/12/14 23:44:40 Sunday
//! brief: grid model, A* planner and the tick loop that drives the snake

mod cell;
mod direction;
mod grid;
pub mod motion;
pub mod obstacles;
mod pathfinder;
mod placement;
mod session;
mod status;

pub use cell::Cell;
pub use direction::Direction;
pub use grid::Grid;
pub use pathfinder::{Path, Pathfinder};
pub use placement::{GoalPlacer, RandomPlacer};
pub use session::{Session, TickOutcome};
pub use status::{GameStatus, TerminationCause};
