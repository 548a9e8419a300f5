//! file: status.rs
//! author: Jacob Xie
//! date: 2025/12/14 23:44:54 Sunday
//! brief: session lifecycle

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    GameOver(TerminationCause),
}

impl GameStatus {
    pub fn is_running(self) -> bool {
        matches!(self, GameStatus::Running)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TerminationCause {
    /// The new head left the grid.
    Wall,
    /// The new head landed on a non-head body cell.
    SelfCollision,
    /// The body covers every cell, so no goal can be placed.
    BoardFull,
}

impl fmt::Display for TerminationCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TerminationCause::Wall => "hit the wall",
            TerminationCause::SelfCollision => "ran into itself",
            TerminationCause::BoardFull => "filled the board",
        };
        f.write_str(text)
    }
}
