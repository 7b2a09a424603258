//! Core application state and main loop of the maze toy.

use std::{
    io,
    time::{Duration, Instant},
};

use color_eyre::eyre::{ensure, Result};
use rand::{rngs::StdRng, SeedableRng as _};
use ratatui::DefaultTerminal;
use tracing::info;

use crate::{
    audio::{Chime, Cue, TerminalBell},
    config::Config,
    events,
    grid::Direction,
    particles::ParticleField,
    session::Session,
    types::{MainMenuItem, Screen},
    ui,
};

/// Application state container for the maze toy.
///
/// This structure holds the state of the application, which is to say the structure from which
/// Ratatui renders each frame and which Crossterm key events are applied to. The maze itself lives
/// in the [`Session`]; everything else here is presentation.
pub struct App {
    /// Application exit flag.
    ///
    /// This field is set to `true` when the user wants to quit the game; the main loop stops at the
    /// next iteration.
    pub(crate) exit: bool,
    /// Current screen being displayed to the user.
    pub(crate) screen: Screen,
    /// Maze session being played.
    pub(crate) session: Session,
    /// Sparks shed by the avatar.
    pub(crate) particles: ParticleField,
    /// Random source for particle bursts.
    ///
    /// This is kept apart from the session's random source so that visuals never change which
    /// mazes a seed produces.
    pub(crate) sparks: StdRng,
    /// Audio cue sink.
    pub(crate) chime: Box<dyn Chime>,
    /// Whether audio cues are silenced.
    pub(crate) muted: bool,
    /// Whether the way to the exit is overlaid on the maze.
    pub(crate) show_path: bool,
    /// Terminal columns spanned by each maze cell.
    pub(crate) cell_width: u16,
    /// Time between two animation ticks.
    pub(crate) frame_interval: Duration,
}

impl App {
    /// Creates the application and carves the first maze.
    ///
    /// # Errors
    ///
    /// This function returns an error if the configuration does not describe a playable session.
    pub fn new(config: &Config) -> Result<Self> {
        ensure!(config.fps > 0, "fps must be positive");
        ensure!(config.cell_width > 0, "cell width must be positive");

        let session = Session::new(config)?;
        let sparks = config
            .seed
            .map_or_else(StdRng::from_entropy, |seed| {
                StdRng::seed_from_u64(seed.rotate_left(32))
            });

        info!(
            width = config.width,
            height = config.height,
            seed = config.seed,
            "application started"
        );

        Ok(Self {
            exit: false,
            screen: Screen::MainMenu(MainMenuItem::StartGame),
            session,
            particles: ParticleField::new(),
            sparks,
            chime: Box::new(TerminalBell),
            muted: false,
            show_path: false,
            cell_width: config.cell_width,
            frame_interval: Duration::from_secs(1) / u32::from(config.fps),
        })
    }

    /// Runs the main loop of the application.
    ///
    /// Each iteration draws a frame, waits for input until the next tick is due and then advances
    /// the animation if it is. The loop continues until the exit flag is set.
    ///
    /// # Errors
    ///
    /// This function returns terminal I/O errors and errors from applying user commands.
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        let mut last_tick = Instant::now();

        while !self.exit {
            // The completed frame is not inspected.
            let _ = terminal.try_draw(|frame| ui::draw(self, frame).map_err(io::Error::other))?;

            let timeout = self.frame_interval.saturating_sub(last_tick.elapsed());
            events::handle_events(self, timeout)?;

            let now = Instant::now();
            if now.duration_since(last_tick) >= self.frame_interval {
                self.update(now)?;
                last_tick = now;
            }
        }

        Ok(())
    }

    /// Advances every animation by one tick.
    ///
    /// # Errors
    ///
    /// This function returns errors from the audio cue sink.
    pub(crate) fn update(&mut self, now: Instant) -> Result<()> {
        self.particles.tick();

        if self.session.tick(now) {
            self.cue(Cue::Victory)?;
        }

        Ok(())
    }

    /// Moves the player one cell, shedding sparks where the avatar was.
    ///
    /// # Errors
    ///
    /// This function returns errors from the audio cue sink.
    pub(crate) fn move_player(&mut self, direction: Direction, now: Instant) -> Result<()> {
        let origin = self.session.avatar();

        if self.session.attempt_move(direction, now).is_accepted() {
            self.particles.emit(origin, &mut self.sparks);
            self.cue(Cue::Step)?;
        }

        Ok(())
    }

    /// Restarts the current maze.
    pub(crate) fn reset(&mut self) {
        self.session.reset();
        self.particles.clear();
    }

    /// Carves a new maze and starts over.
    ///
    /// # Errors
    ///
    /// This function returns an error if the maze cannot be generated.
    pub(crate) fn regenerate(&mut self) -> Result<()> {
        self.session.regenerate()?;
        self.particles.clear();

        Ok(())
    }

    /// Forwards a cue to the chime unless muted.
    fn cue(&mut self, cue: Cue) -> Result<()> {
        if self.muted {
            return Ok(());
        }

        self.chime.cue(cue)
    }
}
