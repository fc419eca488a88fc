use std::fmt;

use crate::domain::board::masks;
use crate::domain::coordinate::{Coord, NUM_COLS, NUM_ROWS};
use crate::domain::models::{Piece, PieceKind};

/// The coordinate-addressed view of the position: one tagged piece
/// descriptor per occupied cell. Holes are geometry, not contents; the
/// grid refuses to place anything on them. The search layer walks this
/// view where bitboards would lose piece identity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PieceGrid {
    cells: [[Option<Piece>; NUM_COLS]; NUM_ROWS],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    OffBoard(Coord),
    Hole(Coord),
    Occupied(Coord),
    /// Only pushers carry the blocked flag.
    BlockedPawn(Coord),
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OffBoard(c) => write!(f, "{c:?} is off the board"),
            PlacementError::Hole(c) => write!(f, "{c:?} is a hole"),
            PlacementError::Occupied(c) => write!(f, "{c:?} is already occupied"),
            PlacementError::BlockedPawn(c) => write!(f, "pawn at {c:?} cannot be blocked"),
        }
    }
}

impl std::error::Error for PlacementError {}

impl PieceGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// The piece at `coord`, or `None` for empty, hole, and off-board
    /// cells alike.
    pub fn piece(&self, coord: Coord) -> Option<Piece> {
        if !coord.in_bounds() {
            return None;
        }
        self.cells[coord.row as usize][coord.col as usize]
    }

    /// True iff `coord` is a playable, unoccupied cell: the only cells a
    /// piece may step onto or be pushed onto and survive.
    pub fn is_open(&self, coord: Coord) -> bool {
        coord.in_bounds() && !masks::is_hole(coord) && self.piece(coord).is_none()
    }

    pub fn place(&mut self, coord: Coord, piece: Piece) -> Result<(), PlacementError> {
        if !coord.in_bounds() {
            return Err(PlacementError::OffBoard(coord));
        }
        if masks::is_hole(coord) {
            return Err(PlacementError::Hole(coord));
        }
        if self.piece(coord).is_some() {
            return Err(PlacementError::Occupied(coord));
        }
        if piece.blocked && piece.kind == PieceKind::Pawn {
            return Err(PlacementError::BlockedPawn(coord));
        }
        self.cells[coord.row as usize][coord.col as usize] = Some(piece);
        Ok(())
    }

    pub fn remove(&mut self, coord: Coord) -> Option<Piece> {
        if !coord.in_bounds() {
            return None;
        }
        self.cells[coord.row as usize][coord.col as usize].take()
    }

    /// Every occupied cell with its piece, row-major.
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        (0..NUM_ROWS).flat_map(move |row| {
            (0..NUM_COLS).filter_map(move |col| {
                let coord = Coord::new(row as i8, col as i8);
                self.cells[row][col].map(|piece| (coord, piece))
            })
        })
    }
}
