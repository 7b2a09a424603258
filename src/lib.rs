//! This crate contains the library behind glowmaze, a calm terminal maze toy.
//!
//! A perfect maze is carved with a randomized depth-first backtracker and walked with a glowing
//! avatar that glides from cell to cell. The maze, the navigation state machine and the animation
//! live in the session; the terminal front end draws them with Ratatui and feeds them Crossterm
//! key presses.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

mod app;
mod audio;
mod config;
mod events;
mod generator;
mod grid;
mod interpolation;
pub mod logging;
mod navigation;
mod particles;
mod pathfinding;
mod progress;
mod session;
mod types;
mod ui;

pub use app::App;
pub use config::Config;
