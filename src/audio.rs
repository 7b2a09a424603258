//! Audio cue module.
//!
//! The game only signals what happened; a [`Chime`] decides what that sounds like. The terminal
//! front end rings the bell on victory and keeps quiet otherwise.

use std::io::{self, Write as _};

use color_eyre::eyre::Result;

/// Event worth a sound.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Cue {
    /// The player stepped into a new cell.
    Step,
    /// The victory was announced.
    Victory,
}

/// Sink for audio cues.
pub(crate) trait Chime {
    /// Plays the sound for a cue.
    ///
    /// # Errors
    ///
    /// Implementations may return errors from their output device.
    fn cue(&mut self, cue: Cue) -> Result<()>;
}

/// Chime ringing the terminal bell.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct TerminalBell;

impl Chime for TerminalBell {
    fn cue(&mut self, cue: Cue) -> Result<()> {
        if cue == Cue::Victory {
            let mut stdout = io::stdout();
            stdout.write_all(b"\x07")?;
            stdout.flush()?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_bell_ignores_steps() {
        let mut bell = TerminalBell;

        assert!(bell.cue(Cue::Step).is_ok());
    }
}
