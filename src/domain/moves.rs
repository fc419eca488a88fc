use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::domain::board::bitboard::BitBoard;
use crate::domain::models::Direction;

/// A single-piece relocation. No capture: `target` is always an empty
/// cell when the move is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub source: BitBoard,
    pub target: BitBoard,
    /// `source | target`, the XOR mask that both applies and undoes the
    /// move.
    pub full: BitBoard,
}

impl Move {
    pub fn new(source: BitBoard, target: BitBoard) -> Self {
        Move {
            source,
            target,
            full: source | target,
        }
    }
}

/// A pusher shoving a contiguous line of pieces one step.
///
/// `moves` is ordered from the pusher outward; application walks it in
/// reverse so the far end of the line vacates first, and undo walks it
/// forward, reversing the domino order exactly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Push {
    pub source: BitBoard,
    pub direction: Direction,
    /// The blocked board as it stood before this push, restored on undo.
    pub blocked_before: BitBoard,
    pub moves: SmallVec<[Move; 8]>,
}

impl Push {
    pub fn new(
        source: BitBoard,
        moves: SmallVec<[Move; 8]>,
        direction: Direction,
        blocked_before: BitBoard,
    ) -> Self {
        Push {
            source,
            direction,
            blocked_before,
            moves,
        }
    }
}

/// One full turn: up to two repositioning moves, then exactly one push.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub moves: SmallVec<[Move; 2]>,
    pub push: Push,
}

impl Turn {
    pub fn push_only(push: Push) -> Self {
        Turn {
            moves: SmallVec::new(),
            push,
        }
    }

    pub fn with_move(mv: Move, push: Push) -> Self {
        Turn {
            moves: SmallVec::from_slice(&[mv]),
            push,
        }
    }

    pub fn with_moves(first: Move, second: Move, push: Push) -> Self {
        Turn {
            moves: SmallVec::from_slice(&[first, second]),
            push,
        }
    }

    /// How many of the optional repositioning moves this turn used.
    pub fn moved(&self) -> usize {
        self.moves.len()
    }
}
