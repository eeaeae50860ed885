//! Core Connect Four game logic: board representation, player types,
//! incremental win detection, and the mutable game state machine.

mod board;
mod player;
mod state;
pub mod win;

pub use board::{Board, Cell, Coord, CELLS, COLS, ROWS};
pub use player::Player;
pub use state::{GameOutcome, GameState, MoveApplied};
pub use win::{check_winner, WinCheck, WinPath, CONNECT};
