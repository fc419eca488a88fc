//! Fixed board geometry: the square-index table and the masks derived
//! from the hole layout. Bit 0 is the top-left cell, bits run row-major
//! left to right, top to bottom. Every constant here depends on that
//! ordering; none may change without re-deriving the rest.

use crate::domain::board::bitboard::BitBoard;
use crate::domain::coordinate::{Coord, NUM_COLS, NUM_ROWS};
use crate::domain::models::{BoardError, Direction};

/// Cells that are not part of the playing surface. Pieces can never
/// occupy them; a piece forced onto one falls through.
pub const HOLES: BitBoard = BitBoard(0b_1001_0001_0000_0000_0000_0000_1000_1001);

/// Squares from which one further push in some direction drops the piece
/// off the board or into a hole. Union of the four falls masks.
pub const CAN_FALL: BitBoard = BitBoard(0b_0110_1010_0001_0000_0000_1000_0101_0110);

/// The four central cells.
pub const MIDDLE_OF_BOARD: BitBoard = BitBoard(0b_0000_0000_0000_0110_0110_0000_0000_0000);

/// Squares one push away from the fall zone. Does not include the
/// `CAN_FALL` squares themselves.
pub const PAWN_WEAK_SPOTS: BitBoard = BitBoard(0b_0000_0100_1010_0001_1000_0101_0010_0000);

pub const FALLS_PUSHED_UP: BitBoard = BitBoard(0b_0000_0000_0000_0000_0000_1000_0001_0110);
pub const FALLS_PUSHED_DOWN: BitBoard = BitBoard(0b_0110_1000_0001_0000_0000_0000_0000_0000);
pub const FALLS_PUSHED_LEFT: BitBoard = BitBoard(0b_0010_0010_0000_0000_0000_0000_0000_0010);
pub const FALLS_PUSHED_RIGHT: BitBoard = BitBoard(0b_0100_0000_0000_0000_0000_0000_0100_0100);

/// Squares whose neighbor in the named direction is a hole: pushing that
/// way would drop the pusher itself, so the push is never offered.
/// Board-edge directions are handled separately by the table builder.
pub const ILLEGAL_UP_PUSH: BitBoard = BitBoard(0b_0000_0000_0000_0000_0000_1000_0001_0000);
pub const ILLEGAL_DOWN_PUSH: BitBoard = BitBoard(0b_0000_1000_0001_0000_0000_0000_0000_0000);
pub const ILLEGAL_LEFT_PUSH: BitBoard = BitBoard(0b_0010_0010_0000_0000_0000_0000_0000_0010);
pub const ILLEGAL_RIGHT_PUSH: BitBoard = BitBoard(0b_0100_0000_0000_0000_0000_0000_0100_0100);

/// Squares from which a piece pushed one step in `direction` falls.
pub fn falls(direction: Direction) -> BitBoard {
    match direction {
        Direction::Up => FALLS_PUSHED_UP,
        Direction::Down => FALLS_PUSHED_DOWN,
        Direction::Left => FALLS_PUSHED_LEFT,
        Direction::Right => FALLS_PUSHED_RIGHT,
    }
}

/// Squares that may not push toward `direction` because the pusher would
/// land in a hole.
pub fn illegal_push(direction: Direction) -> BitBoard {
    match direction {
        Direction::Up => ILLEGAL_UP_PUSH,
        Direction::Down => ILLEGAL_DOWN_PUSH,
        Direction::Left => ILLEGAL_LEFT_PUSH,
        Direction::Right => ILLEGAL_RIGHT_PUSH,
    }
}

/// The square index for cell `(row, col)`. Defined for every cell,
/// holes included.
pub const fn square(row: usize, col: usize) -> BitBoard {
    BitBoard(1 << (row * NUM_COLS + col))
}

/// Square-index table, `SQUARES[row][col]`.
pub const SQUARES: [[BitBoard; NUM_COLS]; NUM_ROWS] = {
    let mut table = [[BitBoard::EMPTY; NUM_COLS]; NUM_ROWS];
    let mut row = 0;
    while row < NUM_ROWS {
        let mut col = 0;
        while col < NUM_COLS {
            table[row][col] = square(row, col);
            col += 1;
        }
        row += 1;
    }
    table
};

pub fn is_hole(coord: Coord) -> bool {
    match square_at(coord) {
        Some(sq) => sq.intersects(HOLES),
        None => false,
    }
}

/// The square index for an in-bounds coordinate.
pub fn square_at(coord: Coord) -> Option<BitBoard> {
    if coord.in_bounds() {
        Some(square(coord.row as usize, coord.col as usize))
    } else {
        None
    }
}

/// Inverse of the square table. Fails on anything that is not exactly
/// one playable square; callers must treat the failure as a bad lookup,
/// not as a position.
pub fn coordinate_of(index: BitBoard) -> Result<Coord, BoardError> {
    if !index.is_single() {
        return Err(BoardError::NotASquare(index.0));
    }
    if index.intersects(HOLES) {
        return Err(BoardError::Untabulated(index.0));
    }
    let bit = index.index();
    Ok(Coord::new(
        (bit / NUM_COLS) as i8,
        (bit % NUM_COLS) as i8,
    ))
}
