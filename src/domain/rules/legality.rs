use smallvec::SmallVec;
use std::collections::VecDeque;

use crate::domain::coordinate::{Coord, NUM_COLS, NUM_ROWS};
use crate::domain::models::{Direction, GamePhase, PieceKind};
use crate::domain::rules::grid::PieceGrid;

pub type CellFlags = [[bool; NUM_COLS]; NUM_ROWS];

pub(crate) const UNREACHED: u8 = u8::MAX;

/// Where a piece may legally go this phase.
#[derive(Clone, Debug)]
pub enum LegalSquares {
    /// Setup: any open cell of the mover's home half, no search needed.
    Setup { open: CellFlags },
    /// Play: the cells reached by searching from the piece's square.
    Play(Reachability),
}

impl LegalSquares {
    /// The legality verdict as a plain boolean grid.
    pub fn flags(&self) -> CellFlags {
        let mut flags = [[false; NUM_COLS]; NUM_ROWS];
        for (row, line) in flags.iter_mut().enumerate() {
            for (col, cell) in line.iter_mut().enumerate() {
                *cell = self.is_legal(Coord::new(row as i8, col as i8));
            }
        }
        flags
    }

    pub fn is_legal(&self, coord: Coord) -> bool {
        if !coord.in_bounds() {
            return false;
        }
        match self {
            LegalSquares::Setup { open } => open[coord.row as usize][coord.col as usize],
            // The source cell is where the piece already stands, not a
            // destination.
            LegalSquares::Play(reach) => coord != reach.source() && reach.is_reachable(coord),
        }
    }
}

/// The product of one breadth-first search: per-cell shortest distance
/// and predecessor, owned by value so a later search can never be
/// confused with this one.
#[derive(Clone, Debug)]
pub struct Reachability {
    pub(crate) source: Coord,
    pub(crate) distance: [[u8; NUM_COLS]; NUM_ROWS],
    pub(crate) predecessor: [[Option<Coord>; NUM_COLS]; NUM_ROWS],
}

impl Reachability {
    pub fn source(&self) -> Coord {
        self.source
    }

    pub fn is_reachable(&self, coord: Coord) -> bool {
        self.distance(coord).is_some()
    }

    /// Shortest step count from the source, if the cell was reached.
    pub fn distance(&self, coord: Coord) -> Option<u8> {
        if !coord.in_bounds() {
            return None;
        }
        match self.distance[coord.row as usize][coord.col as usize] {
            UNREACHED => None,
            d => Some(d),
        }
    }
}

/// Phase-dependent legal destinations for the piece standing at `from`.
pub fn legal_squares(grid: &PieceGrid, phase: GamePhase, from: Coord) -> LegalSquares {
    match phase {
        GamePhase::WhiteSetup => LegalSquares::Setup {
            open: open_half(grid, NUM_ROWS / 2, NUM_ROWS),
        },
        GamePhase::BlackSetup => LegalSquares::Setup {
            open: open_half(grid, 0, NUM_ROWS / 2),
        },
        GamePhase::Play => LegalSquares::Play(reachable_squares(grid, from)),
    }
}

fn open_half(grid: &PieceGrid, row_start: usize, row_end: usize) -> CellFlags {
    let mut open = [[false; NUM_COLS]; NUM_ROWS];
    for row in row_start..row_end {
        for col in 0..NUM_COLS {
            open[row][col] = grid.is_open(Coord::new(row as i8, col as i8));
        }
    }
    open
}

/// Breadth-first search from `from` over the 4-neighbor graph. A step is
/// traversable iff its target is an open cell; the moving piece itself
/// occupies `from`, so the search never cycles back into it. Distance
/// and predecessor state is freshly allocated per call.
pub fn reachable_squares(grid: &PieceGrid, from: Coord) -> Reachability {
    let mut reach = Reachability {
        source: from,
        distance: [[UNREACHED; NUM_COLS]; NUM_ROWS],
        predecessor: [[None; NUM_COLS]; NUM_ROWS],
    };
    if !from.in_bounds() {
        return reach;
    }
    reach.distance[from.row as usize][from.col as usize] = 0;

    let mut queue = VecDeque::new();
    queue.push_back(from);
    while let Some(popped) = queue.pop_front() {
        let here = reach.distance[popped.row as usize][popped.col as usize];
        for direction in Direction::ALL {
            let next = popped.step(direction);
            if !grid.is_open(next) {
                continue;
            }
            let (r, c) = (next.row as usize, next.col as usize);
            if reach.distance[r][c] != UNREACHED {
                continue;
            }
            reach.distance[r][c] = here + 1;
            reach.predecessor[r][c] = Some(popped);
            queue.push_back(next);
        }
    }
    reach
}

/// One direction a given pusher may push in, with the adjacent piece
/// that heads the pushed line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LegalPush {
    pub direction: Direction,
    pub neighbor: Coord,
}

/// The pushes available to the pusher standing at `pusher`. A push is
/// legal iff there is an adjacent piece to shove, no piece in the
/// contiguous line is blocked, and a sideways line is not already
/// pressed against the target wall column. Vertical lines always have
/// somewhere to go: the short board ends are open. A blocked pusher (or
/// a non-pusher) yields nothing.
pub fn legal_pushes(grid: &PieceGrid, pusher: Coord) -> SmallVec<[LegalPush; 4]> {
    let mut result = SmallVec::new();
    match grid.piece(pusher) {
        Some(piece) if piece.kind == PieceKind::Pusher && !piece.blocked => {}
        _ => return result,
    }

    for direction in Direction::ALL {
        let neighbor = pusher.step(direction);
        if grid.piece(neighbor).is_none() {
            continue;
        }
        let line = line_of_pieces(grid, neighbor, direction);
        let Some(&last) = line.last() else {
            continue;
        };

        // No space at the wall: a sideways push whose line already ends
        // in the target wall column cannot move.
        let blocked_by_wall = match direction {
            Direction::Left => last.col == 0,
            Direction::Right => last.col as usize == NUM_COLS - 1,
            Direction::Up | Direction::Down => false,
        };
        if blocked_by_wall {
            continue;
        }

        if line
            .iter()
            .any(|&c| grid.piece(c).is_some_and(|p| p.blocked))
        {
            continue;
        }

        result.push(LegalPush {
            direction,
            neighbor,
        });
    }
    result
}

/// The contiguous run of occupied cells starting at `start` and walking
/// `direction`, stopping before the first empty, hole, or off-board
/// cell. Bounded by the board, so always finite.
pub fn line_of_pieces(grid: &PieceGrid, start: Coord, direction: Direction) -> SmallVec<[Coord; 8]> {
    let mut line = SmallVec::new();
    let mut current = start;
    while grid.piece(current).is_some() {
        line.push(current);
        current = current.step(direction);
    }
    line
}

/// A push wins iff the cell one step beyond the line's last piece is not
/// a survivable landing: off the board's open ends or a hole.
pub fn does_push_win(grid: &PieceGrid, line: &[Coord], direction: Direction) -> bool {
    let Some(&last) = line.last() else {
        return false;
    };
    !grid.is_open(last.step(direction))
}
