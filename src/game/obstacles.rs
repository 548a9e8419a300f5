//! file: obstacles.rs
//! author: Jacob Xie
//! date: 2025/12/16 21:10:05 Tuesday
//! brief: cells blocked for one search

use std::collections::{HashSet, VecDeque};

use super::Cell;

/// Blocked cells for one tick: the whole body except the head.
///
/// The tail is treated as staying put for the entire search, so routes that
/// only open up once the tail retracts are reported as unreachable.
pub fn snapshot(body: &VecDeque<Cell>) -> HashSet<Cell> {
    body.iter().skip(1).copied().collect()
}
