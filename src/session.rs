//! Game session module.
//!
//! This module ties the maze, the navigation state and the animation together into a single
//! [`Session`] built from the [`Config`]. The session also owns the delayed victory announcement,
//! which is tagged with an epoch so that a reset or a new maze discards announcements scheduled
//! before it.

use std::time::{Duration, Instant};

use color_eyre::eyre::{ensure, Result};
use rand::{rngs::StdRng, SeedableRng as _};
use tracing::info;

use crate::{
    config::Config,
    generator,
    grid::{Direction, Grid, MAX_DIMENSION},
    interpolation::{ContinuousPosition, Interpolator, Motion},
    navigation::{MoveResult, Navigation},
    progress,
};

/// Victory announcement waiting for its delay to pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PendingVictory {
    /// Session epoch at the time the announcement was scheduled.
    epoch: u64,
    /// Earliest instant the announcement may fire.
    due: Instant,
}

/// A single playthrough of a maze and everything that regenerates with it.
#[derive(Debug)]
pub(crate) struct Session {
    /// Current maze.
    grid: Grid,
    /// Number of open cells in the current maze.
    total_open: usize,
    /// Discrete player state.
    navigation: Navigation,
    /// Animated avatar position.
    interpolator: Interpolator,
    /// Random source for every maze of this session.
    rng: StdRng,
    /// Counter bumped on every reset, invalidating pending announcements.
    epoch: u64,
    /// Announcement scheduled by the winning move, if any.
    pending_victory: Option<PendingVictory>,
    /// Whether the victory has been announced since the last reset.
    announced: bool,
    /// Delay between the winning move and its announcement.
    victory_delay: Duration,
}

impl Session {
    /// Creates a session and carves its first maze.
    ///
    /// The maze random source is seeded from the configured seed when there is one, making the
    /// whole sequence of mazes reproducible, and from system entropy otherwise.
    ///
    /// # Errors
    ///
    /// This function returns an error if the configured dimensions are not a valid maze size or
    /// exceed [`MAX_DIMENSION`], or if the configured speed lies outside `(0, 1]`.
    pub(crate) fn new(config: &Config) -> Result<Self> {
        ensure!(
            config.width <= MAX_DIMENSION && config.height <= MAX_DIMENSION,
            "maze dimensions must not exceed {MAX_DIMENSION}, got {}x{}",
            config.width,
            config.height
        );
        ensure!(
            config.speed > 0.0 && config.speed <= 1.0,
            "speed must lie within (0, 1], got {}",
            config.speed
        );

        let mut rng = config
            .seed
            .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        let grid = generator::generate(config.width, config.height, &mut rng)?;

        Ok(Self {
            total_open: grid.open_count(),
            navigation: Navigation::new(&grid),
            interpolator: Interpolator::new(Grid::entry(), config.speed),
            grid,
            rng,
            epoch: 0,
            pending_victory: None,
            announced: false,
            victory_delay: Duration::from_millis(config.victory_delay_ms),
        })
    }

    /// Returns the current maze.
    pub(crate) const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the discrete player state.
    pub(crate) const fn navigation(&self) -> &Navigation {
        &self.navigation
    }

    /// Returns the animated avatar position.
    pub(crate) const fn avatar(&self) -> ContinuousPosition {
        self.interpolator.position()
    }

    /// Returns the number of open cells in the current maze.
    pub(crate) const fn total_open(&self) -> usize {
        self.total_open
    }

    /// Returns the explored share of the maze as a whole percentage.
    pub(crate) fn progress_percent(&self) -> u8 {
        progress::percent(self.navigation.visited().len(), self.total_open)
    }

    /// Checks whether the victory has been announced.
    pub(crate) const fn announced(&self) -> bool {
        self.announced
    }

    /// Attempts to move the player one cell.
    ///
    /// A winning move schedules the victory announcement for `now` plus the configured delay, so
    /// that the avatar finishes gliding onto the exit first.
    pub(crate) fn attempt_move(&mut self, direction: Direction, now: Instant) -> MoveResult {
        let result = self.navigation.attempt_move(&self.grid, direction);

        if result == MoveResult::Won {
            info!(
                explored = self.navigation.visited().len(),
                total = self.total_open,
                "exit reached"
            );
            self.pending_victory = Some(PendingVictory {
                epoch: self.epoch,
                due: now + self.victory_delay,
            });
        }

        result
    }

    /// Advances the session by one frame.
    ///
    /// The avatar eases toward its target and completes the move once settled. A pending victory
    /// announcement fires once its delay has passed, unless the session was reset since it was
    /// scheduled. Returns `true` on the tick the announcement fires.
    pub(crate) fn tick(&mut self, now: Instant) -> bool {
        if self.navigation.is_moving()
            && self.interpolator.tick(self.navigation.target()) == Motion::Settled
        {
            self.navigation.arrive();
        }

        let Some(pending) = self.pending_victory else {
            return false;
        };

        if pending.epoch != self.epoch {
            self.pending_victory = None;
            return false;
        }
        if now < pending.due {
            return false;
        }

        self.pending_victory = None;
        self.announced = true;
        info!("victory announced");

        true
    }

    /// Restarts the current maze from the entry.
    pub(crate) fn reset(&mut self) {
        self.navigation.reset();
        self.interpolator.snap(Grid::entry());
        self.epoch = self.epoch.wrapping_add(1);
        self.announced = false;
        info!(epoch = self.epoch, "session reset");
    }

    /// Carves a new maze of the same size and restarts from its entry.
    ///
    /// # Errors
    ///
    /// This function returns an error if the maze cannot be generated.
    pub(crate) fn regenerate(&mut self) -> Result<()> {
        let grid = generator::generate(self.grid.width(), self.grid.height(), &mut self.rng)?;

        self.total_open = grid.open_count();
        self.navigation = Navigation::new(&grid);
        self.grid = grid;
        self.reset();

        Ok(())
    }
}
