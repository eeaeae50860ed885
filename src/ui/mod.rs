//! Terminal UI: a ratatui front end that turns key presses into move
//! requests and redraws from game state and session events.

mod app;
mod game_view;
pub mod presenter;

pub use app::App;
pub use presenter::{Mood, PlayerPanel, Presenter};
