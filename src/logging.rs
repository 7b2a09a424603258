//! Logging setup.
//!
//! The terminal belongs to the user interface, so logs only ever go to a file, and only when one
//! is configured.

use std::{fs::File, sync::Mutex};

use color_eyre::eyre::{eyre, Result};
use tracing_subscriber::EnvFilter;

use crate::Config;

/// Installs the global log subscriber described by the configuration.
///
/// Does nothing when no log file is configured.
///
/// # Errors
///
/// This function returns an error if the log file cannot be created, the filter directive does not
/// parse, or a global subscriber is already installed.
pub fn install(config: &Config) -> Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };

    let filter = EnvFilter::try_new(&config.log_level)?;
    let file = File::create(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| eyre!("failed to install log subscriber: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_without_log_file_is_a_no_op() {
        assert!(install(&Config::default()).is_ok());
    }

    #[test]
    fn test_install_rejects_bad_filters() {
        let config = Config {
            log_file: Some(std::env::temp_dir().join("glowmaze-bad-filter.log")),
            log_level: "glowmaze=loud".to_owned(),
            ..Config::default()
        };

        assert!(install(&config).is_err());
    }
}
