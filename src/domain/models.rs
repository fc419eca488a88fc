use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::coordinate::Coord;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    /// A movable token with no pushing capability.
    Pawn,
    /// A token that can shove a contiguous line of pieces one step.
    Pusher,
}

/// Tagged piece descriptor stored by value in the position view.
/// `blocked` is only ever set on pushers: the pusher that made the most
/// recent push is immobile until another push lands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
    pub blocked: bool,
}

impl Piece {
    pub fn pawn(side: Side) -> Self {
        Piece {
            kind: PieceKind::Pawn,
            side,
            blocked: false,
        }
    }

    pub fn pusher(side: Side) -> Self {
        Piece {
            kind: PieceKind::Pusher,
            side,
            blocked: false,
        }
    }

    pub fn blocked_pusher(side: Side) -> Self {
        Piece {
            kind: PieceKind::Pusher,
            side,
            blocked: true,
        }
    }
}

/// Push and movement direction. Row 0 is the top of the board, so `Up`
/// decreases the row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn reverse(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn row_delta(self) -> i8 {
        match self {
            Direction::Up => -1,
            Direction::Down => 1,
            Direction::Left | Direction::Right => 0,
        }
    }

    pub fn col_delta(self) -> i8 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
            Direction::Up | Direction::Down => 0,
        }
    }

    /// The direction of the unit step from `from` to `to`, if they are
    /// 4-neighbors.
    pub fn between(from: Coord, to: Coord) -> Option<Direction> {
        match (to.row - from.row, to.col - from.col) {
            (-1, 0) => Some(Direction::Up),
            (1, 0) => Some(Direction::Down),
            (0, -1) => Some(Direction::Left),
            (0, 1) => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Drives the legal-square rules: during each side's setup the mover may
/// drop anywhere open in its own half; during play movement is searched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    WhiteSetup,
    BlackSetup,
    Play,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// An index with zero or more than one bit set where a single square
    /// was required.
    NotASquare(u32),
    /// A move probed the ownership boards and found none containing its
    /// anchor bit; applying it would corrupt the occupancy invariant.
    VacantSquare(u32),
    /// Coordinate lookup on a hole or a bit outside the square table.
    Untabulated(u32),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::NotASquare(bits) => {
                write!(f, "expected a single-square index, got {bits:#010x}")
            }
            BoardError::VacantSquare(bits) => {
                write!(f, "no piece occupies square {bits:#010x}")
            }
            BoardError::Untabulated(bits) => {
                write!(f, "square {bits:#010x} has no tabulated coordinate")
            }
        }
    }
}

impl std::error::Error for BoardError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// The queried target lies outside the board.
    OffBoard(Coord),
    /// The queried target was not reached by the search that produced
    /// this result.
    Unreachable(Coord),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::OffBoard(c) => write!(f, "target {c:?} is off the board"),
            PathError::Unreachable(c) => write!(f, "target {c:?} was not reached"),
        }
    }
}

impl std::error::Error for PathError {}
