//! # Connect Four
//!
//! A two-player Connect Four game with a terminal UI built on Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, win scan, state machine
//! - [`session`] — Long-lived game session broadcasting [`session::GameEvent`]s
//! - [`ui`] — Terminal UI: presenter and game view
//! - [`cli`] — Command-line arguments and headless replay
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod cli;
pub mod config;
pub mod error;
pub mod game;
pub mod session;
pub mod ui;
