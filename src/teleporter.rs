use crate::distance::manhattan;
use crate::game_interface::{Board, Number, Position};

/// Distance reported when no usable teleporter pair is known. Larger than any
/// reachable distance on the board, so a teleporter route can never win a
/// min() against a direct route.
pub const NO_TELEPORT_DISTANCE: Number = 999;

/// Teleporters discovered on the current board snapshot, in the order the
/// board presents them. Only the first two are ever routed through, no matter
/// how many exist.
#[derive(Debug, Default, Clone)]
pub struct TeleporterIndex {
    positions: Vec<Position>,
}

impl TeleporterIndex {
    pub fn from_board(board: &Board) -> Self {
        TeleporterIndex {
            positions: board.teleporters().map(|tp| tp.position).collect(),
        }
    }

    /// The (entry, exit) pair, when at least two teleporters are known.
    pub fn pair(&self) -> Option<(Position, Position)> {
        if self.positions.len() >= 2 {
            Some((self.positions[0], self.positions[1]))
        } else {
            None
        }
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Steps for a -> entry, then out of the exit and on to b. Falls back to
    /// [`NO_TELEPORT_DISTANCE`] when fewer than two teleporters are known.
    pub fn teleported_distance(&self, a: Position, b: Position) -> Number {
        match self.pair() {
            Some((entry, exit)) => manhattan(a, entry) + manhattan(exit, b),
            None => NO_TELEPORT_DISTANCE,
        }
    }
}
