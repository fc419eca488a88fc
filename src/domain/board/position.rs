use smallvec::SmallVec;

use crate::domain::board::bitboard::BitBoard;
use crate::domain::board::masks;
use crate::domain::coordinate::NUM_COLS;
use crate::domain::models::{BoardError, Direction, PieceKind, Side};
use crate::domain::moves::{Move, Push, Turn};
use crate::domain::rules::grid::PieceGrid;

/// The mutable game position: one board per side and piece kind, the
/// total occupancy, and the blocked-pusher marker. All mutation happens
/// in place; make and undo are exact inverses, so search can backtrack
/// by replaying the protocol in reverse.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub white_pawns: BitBoard,
    pub white_pushers: BitBoard,
    pub black_pawns: BitBoard,
    pub black_pushers: BitBoard,
    pub occupied: BitBoard,
    pub blocked: BitBoard,
}

impl Position {
    /// Classify every grid cell into its ownership board. Empty cells
    /// and holes contribute nothing.
    pub fn from_grid(grid: &PieceGrid) -> Self {
        let mut position = Position::default();
        for (coord, piece) in grid.pieces() {
            let Some(sq) = masks::square_at(coord) else {
                continue;
            };
            match (piece.side, piece.kind) {
                (Side::White, PieceKind::Pawn) => position.white_pawns |= sq,
                (Side::White, PieceKind::Pusher) => position.white_pushers |= sq,
                (Side::Black, PieceKind::Pawn) => position.black_pawns |= sq,
                (Side::Black, PieceKind::Pusher) => position.black_pushers |= sq,
            }
            if piece.blocked {
                position.blocked |= sq;
            }
        }
        position.occupied = position.white_pawns
            | position.white_pushers
            | position.black_pawns
            | position.black_pushers;
        position
    }

    /// Shift a square one step. Left/Right wrap across row boundaries
    /// for edge columns; callers only pass squares whose neighbor in
    /// `direction` exists.
    pub fn shift(square: BitBoard, direction: Direction) -> BitBoard {
        match direction {
            Direction::Up => square >> NUM_COLS,
            Direction::Down => square << NUM_COLS,
            Direction::Left => square >> 1,
            Direction::Right => square << 1,
        }
    }

    pub fn pieces(&self, side: Side, kind: PieceKind) -> BitBoard {
        match (side, kind) {
            (Side::White, PieceKind::Pawn) => self.white_pawns,
            (Side::White, PieceKind::Pusher) => self.white_pushers,
            (Side::Black, PieceKind::Pawn) => self.black_pawns,
            (Side::Black, PieceKind::Pusher) => self.black_pushers,
        }
    }

    pub fn side_pieces(&self, side: Side) -> BitBoard {
        self.pieces(side, PieceKind::Pawn) | self.pieces(side, PieceKind::Pusher)
    }

    /// The squares holding a side's pieces of one kind, in board order.
    pub fn squares_of(&self, side: Side, kind: PieceKind) -> SmallVec<[BitBoard; 5]> {
        self.pieces(side, kind).bits().collect()
    }

    /// Relocate the piece standing on the move's source square. The
    /// ownership boards are probed in a fixed order; for a well-formed
    /// move exactly one contains the source bit. A move with no owner is
    /// an invariant violation and is rejected, never absorbed.
    pub fn make_move(&mut self, mv: &Move) -> Result<(), BoardError> {
        self.toggle(mv.source, mv.full)
    }

    /// Inverse of `make_move`. Probes via the target square: after the
    /// move, that is where the piece stands.
    pub fn undo_move(&mut self, mv: &Move) -> Result<(), BoardError> {
        self.toggle(mv.target, mv.full)
    }

    fn toggle(&mut self, anchor: BitBoard, full: BitBoard) -> Result<(), BoardError> {
        if !anchor.is_single() {
            return Err(BoardError::NotASquare(anchor.0));
        }
        if self.white_pawns.intersects(anchor) {
            self.white_pawns ^= full;
        } else if self.white_pushers.intersects(anchor) {
            self.white_pushers ^= full;
        } else if self.black_pawns.intersects(anchor) {
            self.black_pawns ^= full;
        } else if self.black_pushers.intersects(anchor) {
            self.black_pushers ^= full;
        } else {
            return Err(BoardError::VacantSquare(anchor.0));
        }
        self.occupied ^= full;
        Ok(())
    }

    /// Apply a push: the line moves starting from its far end, so no
    /// square is ever doubly occupied mid-flight, then the pusher's new
    /// square becomes the blocked marker.
    pub fn make_push(&mut self, push: &Push) -> Result<(), BoardError> {
        for mv in push.moves.iter().rev() {
            self.make_move(mv)?;
        }
        self.blocked = Self::shift(push.source, push.direction);
        Ok(())
    }

    /// Exact inverse of `make_push`: near end first, then the saved
    /// blocked board is restored.
    pub fn undo_push(&mut self, push: &Push) -> Result<(), BoardError> {
        for mv in &push.moves {
            self.undo_move(mv)?;
        }
        self.blocked = push.blocked_before;
        Ok(())
    }

    pub fn make_turn(&mut self, turn: &Turn) -> Result<(), BoardError> {
        self.make_moves(turn)?;
        self.make_push(&turn.push)
    }

    /// Strict stack discipline: the push unwinds first, then the
    /// optional moves in reverse order of application.
    pub fn undo_turn(&mut self, turn: &Turn) -> Result<(), BoardError> {
        self.undo_push(&turn.push)?;
        self.undo_moves(turn)
    }

    /// Apply only a turn's optional repositioning moves.
    pub fn make_moves(&mut self, turn: &Turn) -> Result<(), BoardError> {
        for mv in &turn.moves {
            self.make_move(mv)?;
        }
        Ok(())
    }

    pub fn undo_moves(&mut self, turn: &Turn) -> Result<(), BoardError> {
        for mv in turn.moves.iter().rev() {
            self.undo_move(mv)?;
        }
        Ok(())
    }
}
