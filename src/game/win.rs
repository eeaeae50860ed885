//! Incremental win detection around a freshly placed piece.

use tracing::instrument;

use super::{Board, Coord, Player};

/// Pieces in a row needed to win.
pub const CONNECT: usize = 4;

/// Cells forming one qualifying line: the checked cell, then the walk toward
/// the negative direction, then the walk toward the positive direction.
pub type WinPath = Vec<Coord>;

/// Axes scanned through the placed cell, as the negative half of each
/// mirrored direction pair: horizontal, vertical, diagonal (↖/↘) and
/// anti-diagonal (↗/↙).
pub const AXES: [(isize, isize); 4] = [(-1, 0), (0, -1), (-1, -1), (1, -1)];

/// Result of scanning one cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WinCheck {
    pub winner: Option<Player>,
    pub paths: Vec<WinPath>,
}

/// Walk from `from` (inclusive) in direction `step` while the cells belong
/// to `player`, returning the visited coordinates.
pub fn walk(
    board: &Board,
    from: Option<Coord>,
    step: (isize, isize),
    player: Player,
) -> Vec<Coord> {
    let mut visited = Vec::new();
    let mut cursor = from;
    while let Some(coord) = cursor {
        if board.at(coord) != Some(player) {
            break;
        }
        visited.push(coord);
        cursor = coord.offset(step.0, step.1);
    }
    visited
}

/// Full line along one axis through `at`, counting `at` itself as the
/// mover's piece.
pub fn axis_run(board: &Board, at: Coord, (dc, dr): (isize, isize), mover: Player) -> WinPath {
    let mut path = vec![at];
    path.extend(walk(board, at.offset(dc, dr), (dc, dr), mover));
    path.extend(walk(board, at.offset(-dc, -dr), (-dc, -dr), mover));
    path
}

/// Check every axis through `at` for a run of [`CONNECT`] or more pieces
/// owned by `mover`. Each qualifying axis contributes its whole path.
#[instrument(skip(board))]
pub fn check_winner(board: &Board, at: Coord, mover: Player) -> WinCheck {
    let paths: Vec<WinPath> = AXES
        .iter()
        .map(|&axis| axis_run(board, at, axis, mover))
        .filter(|path| path.len() >= CONNECT)
        .collect();

    WinCheck {
        winner: (!paths.is_empty()).then_some(mover),
        paths,
    }
}
