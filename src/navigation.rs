//! Navigation state machine.
//!
//! This module tracks where the player stands, where they are heading, which cells they have
//! explored and whether they have found the exit. It validates moves against the [`Grid`] and
//! applies the accepted ones.

use tracing::{debug, trace};

use crate::grid::{Direction, Grid, Position};

/// Reason a move was turned down.
///
/// Neither reason is an error: a rejected move is simply ignored by the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Rejection {
    /// The destination is out of bounds or a wall.
    InvalidMove,
    /// The avatar is still gliding to its previous target, or the maze is already solved.
    MoveWhileBusy,
}

/// Outcome of a move attempt.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MoveResult {
    /// The move was accepted and a new target set.
    Accepted,
    /// The move was accepted and reached the exit.
    Won,
    /// The move was ignored and nothing changed.
    Rejected(Rejection),
}

impl MoveResult {
    /// Checks whether the move changed the navigation state.
    pub(crate) const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted | Self::Won)
    }
}

/// Set of explored cells, kept as a flag grid parallel to the maze.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Visited {
    /// Number of columns of the mirrored grid.
    width: u16,
    /// Row-major membership flags.
    flags: Vec<bool>,
    /// Number of flags set.
    count: usize,
}

impl Visited {
    /// Creates an empty set sized after the given grid.
    fn new(grid: &Grid) -> Self {
        Self {
            width: grid.width(),
            flags: vec![false; usize::from(grid.width()) * usize::from(grid.height())],
            count: 0,
        }
    }

    /// Maps a position to its flag index, if it lies inside the mirrored grid.
    fn index(&self, position: Position) -> Option<usize> {
        (position.x < self.width).then(|| {
            usize::from(position.y) * usize::from(self.width) + usize::from(position.x)
        })
    }

    /// Adds a position, returning whether it was new.
    fn insert(&mut self, position: Position) -> bool {
        let Some(flag) = self
            .index(position)
            .and_then(|index| self.flags.get_mut(index))
        else {
            return false;
        };

        if *flag {
            false
        } else {
            *flag = true;
            self.count += 1;
            true
        }
    }

    /// Empties the set.
    fn clear(&mut self) {
        self.flags.fill(false);
        self.count = 0;
    }

    /// Checks whether a position has been explored.
    pub(crate) fn contains(&self, position: Position) -> bool {
        self.index(position)
            .and_then(|index| self.flags.get(index))
            .copied()
            .unwrap_or(false)
    }

    /// Returns the number of explored cells.
    pub(crate) const fn len(&self) -> usize {
        self.count
    }
}

/// Discrete navigation state of the player.
///
/// `current` is the authoritative cell the player stands on, while `target` is the cell an accepted
/// move is heading to. The two only differ while `moving` is set, which lasts until the animation
/// catches up and [`Navigation::arrive`] is called.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Navigation {
    /// Cell the player stands on.
    current: Position,
    /// Cell the player is heading to.
    target: Position,
    /// Whether a move is still in progress.
    moving: bool,
    /// Whether the exit has been reached.
    won: bool,
    /// Explored cells.
    visited: Visited,
    /// Exit cell of the grid being navigated.
    exit: Position,
}

impl Navigation {
    /// Creates fresh navigation state at the entry of the given grid.
    pub(crate) fn new(grid: &Grid) -> Self {
        let mut navigation = Self {
            current: Grid::entry(),
            target: Grid::entry(),
            moving: false,
            won: false,
            visited: Visited::new(grid),
            exit: grid.exit(),
        };
        navigation.reset();

        navigation
    }

    /// Returns the cell the player stands on.
    pub(crate) const fn current(&self) -> Position {
        self.current
    }

    /// Returns the cell the player is heading to.
    pub(crate) const fn target(&self) -> Position {
        self.target
    }

    /// Checks whether a move is in progress.
    pub(crate) const fn is_moving(&self) -> bool {
        self.moving
    }

    /// Checks whether the exit has been reached.
    pub(crate) const fn has_won(&self) -> bool {
        self.won
    }

    /// Returns the explored cells.
    pub(crate) const fn visited(&self) -> &Visited {
        &self.visited
    }

    /// Attempts a single-cell move in the given direction.
    ///
    /// The move is rejected without touching any state while another move is in progress, once
    /// the maze is solved, or when the destination is not an open cell of `grid`. Otherwise the
    /// destination becomes the new target and is marked as explored.
    pub(crate) fn attempt_move(&mut self, grid: &Grid, direction: Direction) -> MoveResult {
        if self.moving || self.won {
            trace!(?direction, "move rejected while busy");
            return MoveResult::Rejected(Rejection::MoveWhileBusy);
        }

        let Some(next) = self
            .current
            .step(direction)
            .filter(|&next| grid.is_open(next))
        else {
            trace!(?direction, current = ?self.current, "move rejected into wall");
            return MoveResult::Rejected(Rejection::InvalidMove);
        };

        self.target = next;
        self.moving = true;
        let _ = self.visited.insert(next);
        debug!(?direction, target = ?next, explored = self.visited.len(), "move accepted");

        if next == self.exit {
            self.won = true;
            MoveResult::Won
        } else {
            MoveResult::Accepted
        }
    }

    /// Completes the move in progress, making the target the current cell.
    pub(crate) fn arrive(&mut self) {
        self.current = self.target;
        self.moving = false;
    }

    /// Returns the player to the entry with only the entry explored.
    pub(crate) fn reset(&mut self) {
        self.current = Grid::entry();
        self.target = Grid::entry();
        self.moving = false;
        self.won = false;
        self.visited.clear();
        let _ = self.visited.insert(Grid::entry());
    }
}
