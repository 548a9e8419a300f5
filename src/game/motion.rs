//! file: motion.rs
//! author: Jacob Xie
//! date: 2025/12/16 22:05:51 Tuesday
//! brief: path -> next heading

use super::{Direction, Path};

/// Heading for the coming tick.
///
/// Follows the first step of `path` when there is one; otherwise keeps
/// `current` and the snake carries on in a straight line, even if that line
/// ends in a wall or in its own body.
pub fn next_direction(current: Direction, path: Option<&Path>) -> Direction {
    let Some(path) = path else {
        tracing::debug!(?current, "no path, keeping heading");
        return current;
    };
    match (path.start(), path.next_step()) {
        (Some(from), Some(to)) => from.step_to(to).unwrap_or(current),
        _ => current,
    }
}
