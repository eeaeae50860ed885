use std::fmt;
use std::str::FromStr;

use super::Player;
use crate::error::BoardParseError;

pub const COLS: usize = 7;
pub const ROWS: usize = 6;
pub const CELLS: usize = COLS * ROWS;

/// A board square: empty or owned by a player.
pub type Cell = Option<Player>;

/// A board position. Ordered by column, then row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub col: usize,
    pub row: usize,
}

impl Coord {
    pub const fn new(col: usize, row: usize) -> Self {
        Coord { col, row }
    }

    /// Step by `(dcol, drow)`, returning `None` when the result leaves the board.
    pub fn offset(self, dcol: isize, drow: isize) -> Option<Coord> {
        let col = self.col.checked_add_signed(dcol)?;
        let row = self.row.checked_add_signed(drow)?;
        (col < COLS && row < ROWS).then_some(Coord { col, row })
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.col, self.row)
    }
}

/// 7×6 grid indexed `[col][row]`. Row 0 is the top, row 5 the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; ROWS]; COLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[None; ROWS]; COLS],
        }
    }

    /// Cell at `(col, row)`. Both indices must be on the board; unlike
    /// [`Board::is_column_full`], out-of-range positions panic.
    pub fn get(&self, col: usize, row: usize) -> Cell {
        self.cells[col][row]
    }

    /// Same as [`Board::get`]; `coord` must be on the board.
    pub fn at(&self, coord: Coord) -> Cell {
        self.cells[coord.col][coord.row]
    }

    /// Overwrite a single cell. Does not apply gravity. Panics if `coord`
    /// is off the board.
    pub fn set(&mut self, coord: Coord, cell: Cell) {
        self.cells[coord.col][coord.row] = cell;
    }

    /// A column is full once its top cell is taken. Out-of-range columns
    /// count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[col][0].is_some()
    }

    /// Lowest empty row in `col`, if any.
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        (0..ROWS).rev().find(|&row| self.cells[col][row].is_none())
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Option<usize> {
        let row = self.landing_row(col)?;
        self.cells[col][row] = Some(player);
        Some(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    pub fn occupied(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// Empty every cell in place.
    pub fn clear(&mut self) {
        for column in self.cells.iter_mut() {
            column.fill(None);
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Rows top to bottom, `.` for empty, `X` for Red and `O` for Yellow.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..ROWS {
            for col in 0..COLS {
                let ch = self.cells[col][row].map_or('.', Player::symbol);
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parses seven `/`-separated columns, each listing its six cells top to
/// bottom as `.`, `0` or `1`, e.g. `....10/...111/....00/....10/.....0/.....0/......`.
///
/// Gravity is not checked, so fixtures may describe positions that could
/// never arise in play.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let columns: Vec<&str> = s.trim().split('/').collect();
        if columns.len() != COLS {
            return Err(BoardParseError::ColumnCount(columns.len()));
        }

        let mut board = Board::new();
        for (col, column) in columns.iter().enumerate() {
            let column = column.trim();
            if column.chars().count() != ROWS {
                return Err(BoardParseError::ColumnLength {
                    col,
                    len: column.chars().count(),
                });
            }
            for (row, ch) in column.chars().enumerate() {
                board.cells[col][row] = match ch {
                    '.' | '_' => None,
                    '0' => Some(Player::Red),
                    '1' => Some(Player::Yellow),
                    other => return Err(BoardParseError::BadCell { col, row, ch: other }),
                };
            }
        }
        Ok(board)
    }
}
