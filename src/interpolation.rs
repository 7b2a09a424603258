//! Animation interpolation module.
//!
//! This module eases a continuous avatar position toward the discrete cell the player is heading
//! to. The renderer draws the continuous position; the navigation state only ever sees whole cells.

use crate::grid::Position;

/// Default share of the remaining offset covered on each tick.
pub(crate) const DEFAULT_EASE_RATE: f64 = 0.25;

/// Distance on both axes under which the position snaps onto its target.
pub(crate) const SNAP_EPSILON: f64 = 0.01;

/// Floating-point position in cell coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ContinuousPosition {
    /// Column coordinate.
    pub(crate) x: f64,
    /// Row coordinate.
    pub(crate) y: f64,
}

impl From<Position> for ContinuousPosition {
    fn from(position: Position) -> Self {
        Self {
            x: f64::from(position.x),
            y: f64::from(position.y),
        }
    }
}

/// Result of advancing the interpolator by one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Motion {
    /// Still on the way to the target.
    Moving,
    /// Resting exactly on the target.
    Settled,
}

/// Exponential ease toward a target cell.
///
/// Each tick covers a fixed share of the remaining offset, so the avatar decelerates as it
/// approaches and never overshoots. Once within [`SNAP_EPSILON`] on both axes it snaps onto the
/// target, which bounds the number of ticks any move takes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Interpolator {
    /// Current animated position.
    position: ContinuousPosition,
    /// Share of the remaining offset covered per tick, in `(0, 1]`.
    rate: f64,
}

impl Interpolator {
    /// Creates an interpolator resting on the given cell.
    pub(crate) fn new(start: Position, rate: f64) -> Self {
        Self {
            position: start.into(),
            rate,
        }
    }

    /// Returns the current animated position.
    pub(crate) const fn position(&self) -> ContinuousPosition {
        self.position
    }

    /// Places the position directly on the given cell.
    pub(crate) fn snap(&mut self, position: Position) {
        self.position = position.into();
    }

    /// Advances the position one tick toward the target cell.
    pub(crate) fn tick(&mut self, target: Position) -> Motion {
        let goal = ContinuousPosition::from(target);
        let dx = goal.x - self.position.x;
        let dy = goal.y - self.position.y;

        if dx.abs() < SNAP_EPSILON && dy.abs() < SNAP_EPSILON {
            self.position = goal;
            return Motion::Settled;
        }

        self.position.x = dx.mul_add(self.rate, self.position.x);
        self.position.y = dy.mul_add(self.rate, self.position.y);

        Motion::Moving
    }
}
