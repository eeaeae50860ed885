use tracing::{debug, info, instrument};

use super::win::{check_winner, WinPath};
use super::{Board, Coord, Player, CELLS, COLS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Tie,
}

/// Emitted for every accepted move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveApplied {
    pub column: usize,
    pub row: usize,
    pub player: Player,
    pub moves: usize,
    pub game_over: bool,
    pub winner: Option<Player>,
    pub win_paths: Vec<WinPath>,
}

impl MoveApplied {
    pub fn coord(&self) -> Coord {
        Coord::new(self.column, self.row)
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        outcome_of(self.game_over, self.winner)
    }
}

/// A single game session, mutated in place.
///
/// `turn` holds the player who made the last move and is `None` before the
/// first move. Accepting a move toggles it first, so the mover is always the
/// post-toggle value.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    turn: Option<Player>,
    moves: usize,
    winner: Option<Player>,
    win_paths: Vec<WinPath>,
    game_over: bool,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            turn: None,
            moves: 0,
            winner: None,
            win_paths: Vec::new(),
            game_over: false,
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player who made the most recent move, `None` before the first one.
    pub fn turn(&self) -> Option<Player> {
        self.turn
    }

    /// Player who will be credited with the next accepted move.
    pub fn next_player(&self) -> Player {
        match self.turn {
            None | Some(Player::Yellow) => Player::Red,
            Some(Player::Red) => Player::Yellow,
        }
    }

    pub fn moves(&self) -> usize {
        self.moves
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub fn win_paths(&self) -> &[WinPath] {
        &self.win_paths
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        outcome_of(self.game_over, self.winner)
    }

    /// A move is valid while the game is running and the column's top cell
    /// is empty.
    pub fn is_valid_move(&self, column: usize) -> bool {
        !self.game_over && !self.board.is_column_full(column)
    }

    /// Columns that would currently accept a piece.
    pub fn valid_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| self.is_valid_move(col)).collect()
    }

    /// Drop a piece for the next player into `column`.
    ///
    /// Invalid moves (full or out-of-range column, finished game) are
    /// ignored and leave the state untouched.
    #[instrument(skip(self), fields(moves = self.moves))]
    pub fn attempt_move(&mut self, column: usize) -> Option<MoveApplied> {
        if self.game_over {
            debug!("game is over, ignoring move");
            return None;
        }
        let Some(row) = self.board.landing_row(column) else {
            debug!("column is full or out of range, ignoring move");
            return None;
        };

        let mover = self.next_player();
        self.turn = Some(mover);
        self.moves += 1;
        self.board.set(Coord::new(column, row), Some(mover));

        let check = check_winner(&self.board, Coord::new(column, row), mover);
        if check.winner.is_some() {
            self.winner = check.winner;
            self.win_paths.extend(check.paths);
            self.game_over = true;
            info!(player = mover.name(), moves = self.moves, "game won");
        }
        if self.moves == CELLS {
            self.game_over = true;
            if self.winner.is_none() {
                info!("board full, game tied");
            }
        }

        debug!(row, player = mover.name(), "move applied");

        Some(MoveApplied {
            column,
            row,
            player: mover,
            moves: self.moves,
            game_over: self.game_over,
            winner: self.winner,
            win_paths: self.win_paths.clone(),
        })
    }

    /// Return to the empty starting position without reallocating the board.
    pub fn reset(&mut self) {
        self.board.clear();
        self.turn = None;
        self.moves = 0;
        self.winner = None;
        self.win_paths.clear();
        self.game_over = false;
        debug!("game state reset");
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

fn outcome_of(game_over: bool, winner: Option<Player>) -> Option<GameOutcome> {
    match (game_over, winner) {
        (false, _) => None,
        (true, Some(player)) => Some(GameOutcome::Winner(player)),
        (true, None) => Some(GameOutcome::Tie),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ROWS;

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();
        assert_eq!(state.turn(), None);
        assert_eq!(state.next_player(), Player::Red);
        assert_eq!(state.moves(), 0);
        assert!(!state.is_game_over());
        assert_eq!(state.outcome(), None);
        assert_eq!(state.valid_columns().len(), 7);
    }

    #[test]
    fn test_apply_move() {
        let mut state = GameState::initial();
        let applied = state.attempt_move(3).unwrap();

        assert_eq!(applied.player, Player::Red);
        assert_eq!(applied.coord(), Coord::new(3, 5));
        assert_eq!(state.turn(), Some(Player::Red));
        assert_eq!(state.next_player(), Player::Yellow);
        assert_eq!(state.board().get(3, 5), Some(Player::Red));
        assert_eq!(state.moves(), 1);
    }

    #[test]
    fn test_turn_alternates() {
        let mut state = GameState::initial();
        let movers: Vec<Player> = [0, 1, 2, 3, 4, 5]
            .into_iter()
            .map(|col| state.attempt_move(col).unwrap().player)
            .collect();
        assert_eq!(
            movers,
            vec![
                Player::Red,
                Player::Yellow,
                Player::Red,
                Player::Yellow,
                Player::Red,
                Player::Yellow
            ]
        );
    }

    #[test]
    fn test_full_column_is_ignored() {
        let mut state = GameState::initial();
        for _ in 0..ROWS {
            state.attempt_move(0).unwrap();
        }
        let before = state.clone();

        assert!(!state.is_valid_move(0));
        assert_eq!(state.attempt_move(0), None);
        assert_eq!(state, before);
    }

    #[test]
    fn test_out_of_range_column_is_ignored() {
        let mut state = GameState::initial();
        assert!(!state.is_valid_move(COLS));
        assert_eq!(state.attempt_move(COLS), None);
        assert_eq!(state, GameState::initial());
    }

    #[test]
    fn test_win_detection() {
        let mut state = GameState::initial();

        // Red builds along the bottom row, Yellow stacks on top
        for col in 0..3 {
            state.attempt_move(col).unwrap();
            state.attempt_move(col).unwrap();
        }
        let applied = state.attempt_move(3).unwrap();

        assert!(applied.game_over);
        assert_eq!(applied.winner, Some(Player::Red));
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::Red)));
        assert_eq!(state.win_paths().len(), 1);
        assert_eq!(state.win_paths()[0].len(), 4);
    }

    #[test]
    fn test_moves_after_game_over_are_ignored() {
        let mut state = GameState::initial();
        for col in [0, 1, 0, 1, 0, 1, 0] {
            state.attempt_move(col).unwrap();
        }
        assert_eq!(state.winner(), Some(Player::Red));
        let before = state.clone();

        for col in 0..COLS {
            assert_eq!(state.attempt_move(col), None);
        }
        assert_eq!(state, before);
        assert!(state.valid_columns().is_empty());
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut state = GameState::initial();
        for col in [0, 1, 0, 1, 0, 1, 0] {
            state.attempt_move(col);
        }
        state.reset();
        assert_eq!(state, GameState::initial());

        // Idempotent
        state.reset();
        assert_eq!(state, GameState::initial());
    }
}
