//! Pathfinding module.
//!
//! This module finds the way from the player's cell to the exit, which the in-game screen can
//! overlay as a hint.

use crate::grid::{Direction, Grid, Position};

/// Finds a path between two open cells with a depth-first search.
///
/// The returned path starts with `from` and ends with `to`, each cell adjacent to the previous one.
/// In a perfect maze this is the only simple path between the two. Returns `None` when either cell
/// is closed or no path connects them.
///
/// The search keeps its own stack, so the path length is bounded by memory rather than by the
/// thread's call stack.
pub(crate) fn solve(grid: &Grid, from: Position, to: Position) -> Option<Vec<Position>> {
    if !grid.is_open(from) || !grid.is_open(to) {
        return None;
    }

    let mut seen = vec![false; usize::from(grid.width()) * usize::from(grid.height())];
    let _ = mark(grid, &mut seen, from);

    // Cells are pushed on the way in and popped again when backtracking out of a dead end, each
    // one paired with the directions it has left to try.
    let mut path = vec![from];
    let mut pending = vec![Direction::ALL.into_iter()];

    while let Some(&at) = path.last() {
        if at == to {
            return Some(path);
        }

        let next = pending.last_mut().and_then(|directions| {
            directions
                .filter_map(|direction| at.step(direction))
                .find(|&next| grid.is_open(next) && mark(grid, &mut seen, next))
        });

        if let Some(next) = next {
            path.push(next);
            pending.push(Direction::ALL.into_iter());
        } else {
            let _ = path.pop();
            let _ = pending.pop();
        }
    }

    None
}

/// Marks a cell as seen, returning whether it had not been seen before.
fn mark(grid: &Grid, seen: &mut [bool], position: Position) -> bool {
    let index = usize::from(position.y) * usize::from(grid.width()) + usize::from(position.x);

    match seen.get_mut(index) {
        Some(flag) if !*flag => {
            *flag = true;
            true
        }
        _ => false,
    }
}
