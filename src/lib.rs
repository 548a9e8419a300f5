//! file: lib.rs
//! author: Jacob Xie
//! date: 2025/12/17 21:05:11 Wednesday
//! brief: autonomous snake; every tick the head re-plans an A* route to the
//! food around its own body, and falls back to going straight when boxed in

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod score;

pub use crate::config::Settings;
pub use crate::game::{Cell, Direction, GameStatus, Grid, Path, Pathfinder, Session, TickOutcome};
