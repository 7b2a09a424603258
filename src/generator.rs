//! Maze generation module.
//!
//! This module carves perfect mazes with a randomized depth-first "recursive backtracker". The
//! random source is supplied by the caller so that a seeded generator always carves the same maze.

use color_eyre::eyre::Result;
use rand::{seq::SliceRandom as _, Rng};
use tracing::info;

use crate::grid::{Direction, Grid, Position};

/// Carves a perfect maze of the given dimensions.
///
/// Starting from the entry, the carver walks to a random unvisited junction two cells away,
/// opening the cell in between, and backtracks along its stack once a junction has no unvisited
/// neighbours left. Every junction is pushed and popped exactly once, so the open junctions form a
/// spanning tree. The exit is forced open afterwards regardless of what the carving did.
///
/// # Errors
///
/// This function returns an error if the dimensions are not a valid [`Grid`] size.
pub(crate) fn generate<R: Rng + ?Sized>(width: u16, height: u16, rng: &mut R) -> Result<Grid> {
    let mut grid = Grid::new(width, height)?;

    let entry = Grid::entry();
    grid.set_open(entry);
    let mut stack = vec![entry];
    let mut candidates = Vec::with_capacity(Direction::ALL.len());

    while let Some(&current) = stack.last() {
        candidates.clear();
        candidates.extend(
            Direction::ALL
                .into_iter()
                .filter_map(|direction| unvisited_neighbour(&grid, current, direction)),
        );

        if let Some(&(passage, next)) = candidates.choose(rng) {
            grid.set_open(passage);
            grid.set_open(next);
            stack.push(next);
        } else {
            let _ = stack.pop();
        }
    }

    grid.set_open(grid.exit());

    info!(width, height, open_cells = grid.open_count(), "carved maze");

    Ok(grid)
}

/// Looks up the junction two cells away in the given direction.
///
/// Returns the cell in between and the junction itself, or `None` if the junction lies on or past
/// the border or has already been carved.
fn unvisited_neighbour(
    grid: &Grid,
    from: Position,
    direction: Direction,
) -> Option<(Position, Position)> {
    let passage = from.step(direction)?;
    let next = passage.step(direction)?;

    (grid.is_interior(next) && !grid.is_open(next)).then_some((passage, next))
}
