pub mod grid;
pub mod legality;
pub mod path;

use smallvec::SmallVec;

use crate::domain::coordinate::Coord;
use crate::domain::models::{Direction, GamePhase};

pub use grid::{PieceGrid, PlacementError};
pub use legality::{CellFlags, LegalPush, LegalSquares, Reachability};

pub struct Rules;

impl Rules {
    pub fn legal_squares(grid: &PieceGrid, phase: GamePhase, from: Coord) -> LegalSquares {
        legality::legal_squares(grid, phase, from)
    }

    pub fn reachable_squares(grid: &PieceGrid, from: Coord) -> Reachability {
        legality::reachable_squares(grid, from)
    }

    pub fn legal_pushes(grid: &PieceGrid, pusher: Coord) -> SmallVec<[LegalPush; 4]> {
        legality::legal_pushes(grid, pusher)
    }

    pub fn line_of_pieces(
        grid: &PieceGrid,
        start: Coord,
        direction: Direction,
    ) -> SmallVec<[Coord; 8]> {
        legality::line_of_pieces(grid, start, direction)
    }

    pub fn does_push_win(grid: &PieceGrid, line: &[Coord], direction: Direction) -> bool {
        legality::does_push_win(grid, line, direction)
    }
}
