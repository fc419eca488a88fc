use pushfight::domain::coordinate::{Coord, NUM_COLS, NUM_ROWS};
use pushfight::domain::models::{Direction, GamePhase, Piece, Side};
use pushfight::domain::rules::{LegalSquares, PieceGrid, Rules};

fn coord(row: i8, col: i8) -> Coord {
    Coord::new(row, col)
}

fn place(grid: &mut PieceGrid, row: i8, col: i8, piece: Piece) {
    grid.place(coord(row, col), piece).unwrap();
}

fn playable_cells() -> Vec<Coord> {
    let mut cells = Vec::new();
    for row in 0..NUM_ROWS as i8 {
        for col in 0..NUM_COLS as i8 {
            let c = coord(row, col);
            if PieceGrid::new().is_open(c) {
                cells.push(c);
            }
        }
    }
    cells
}

#[test]
fn setup_phase_offers_the_open_home_half() {
    let mut grid = PieceGrid::new();
    place(&mut grid, 5, 1, Piece::pusher(Side::White));
    let legal = Rules::legal_squares(&grid, GamePhase::WhiteSetup, coord(5, 1));

    // White sets up on rows 4..8; occupied cells and holes are closed.
    assert!(legal.is_legal(coord(4, 0)));
    assert!(legal.is_legal(coord(7, 1)));
    assert!(!legal.is_legal(coord(5, 1)), "occupied");
    assert!(!legal.is_legal(coord(7, 0)), "hole");
    assert!(!legal.is_legal(coord(3, 1)), "wrong half");
    assert!(!legal.is_legal(coord(8, 1)), "off board");

    let legal = Rules::legal_squares(&grid, GamePhase::BlackSetup, coord(5, 1));
    assert!(legal.is_legal(coord(0, 1)));
    assert!(legal.is_legal(coord(3, 3)));
    assert!(!legal.is_legal(coord(0, 0)), "hole");
    assert!(!legal.is_legal(coord(4, 0)), "wrong half");

    let flags = legal.flags();
    // 16 cells in the upper half, minus the three holes there.
    let open: usize = flags
        .iter()
        .flatten()
        .map(|&legal| usize::from(legal))
        .sum();
    assert_eq!(open, 13);
}

#[test]
fn play_phase_reaches_every_open_cell_on_an_open_board() {
    let mut grid = PieceGrid::new();
    place(&mut grid, 4, 1, Piece::pawn(Side::White));
    let legal = Rules::legal_squares(&grid, GamePhase::Play, coord(4, 1));

    for cell in playable_cells() {
        if cell == coord(4, 1) {
            assert!(!legal.is_legal(cell), "own square is not a destination");
        } else {
            assert!(legal.is_legal(cell), "{cell:?} should be reachable");
        }
    }
    assert!(!legal.is_legal(coord(0, 0)), "hole");
    assert!(!legal.is_legal(coord(-1, 0)), "off board");
}

#[test]
fn bfs_distances_are_manhattan_on_an_open_column() {
    let mut grid = PieceGrid::new();
    place(&mut grid, 4, 1, Piece::pawn(Side::White));
    let reach = Rules::reachable_squares(&grid, coord(4, 1));

    assert_eq!(reach.distance(coord(4, 1)), Some(0));
    assert_eq!(reach.distance(coord(1, 1)), Some(3));
    assert_eq!(reach.distance(coord(0, 2)), Some(5));
    assert_eq!(reach.distance(coord(4, 3)), Some(2));
    assert_eq!(reach.distance(coord(0, 0)), None, "hole never reached");
}

#[test]
fn occupied_cells_block_movement() {
    let mut grid = PieceGrid::new();
    place(&mut grid, 4, 1, Piece::pawn(Side::White));
    // Wall the mover into the lower board half.
    for col in 0..NUM_COLS as i8 {
        place(&mut grid, 3, col, Piece::pawn(Side::Black));
    }
    let legal = Rules::legal_squares(&grid, GamePhase::Play, coord(4, 1));

    assert!(legal.is_legal(coord(4, 2)));
    assert!(legal.is_legal(coord(7, 1)));
    assert!(!legal.is_legal(coord(3, 1)), "occupied");
    assert!(!legal.is_legal(coord(2, 1)), "behind the wall");
    assert!(!legal.is_legal(coord(0, 1)), "behind the wall");
}

#[test]
fn line_of_pieces_stops_at_the_first_gap() {
    let mut grid = PieceGrid::new();
    place(&mut grid, 5, 1, Piece::pusher(Side::White));
    place(&mut grid, 4, 1, Piece::pawn(Side::White));
    place(&mut grid, 3, 1, Piece::pawn(Side::Black));
    place(&mut grid, 1, 1, Piece::pawn(Side::Black));

    let line = Rules::line_of_pieces(&grid, coord(4, 1), Direction::Up);
    assert_eq!(line.as_slice(), &[coord(4, 1), coord(3, 1)]);

    let line = Rules::line_of_pieces(&grid, coord(5, 1), Direction::Down);
    assert_eq!(line.as_slice(), &[coord(5, 1)]);
}

#[test]
fn legal_pushes_require_an_adjacent_piece() {
    let mut grid = PieceGrid::new();
    place(&mut grid, 4, 1, Piece::pusher(Side::White));
    place(&mut grid, 3, 1, Piece::pawn(Side::Black));
    place(&mut grid, 4, 2, Piece::pawn(Side::White));

    let pushes = Rules::legal_pushes(&grid, coord(4, 1));
    let directions: Vec<Direction> = pushes.iter().map(|p| p.direction).collect();
    assert_eq!(directions, vec![Direction::Up, Direction::Right]);
    assert_eq!(pushes[0].neighbor, coord(3, 1));
    assert_eq!(pushes[1].neighbor, coord(4, 2));
}

#[test]
fn pawns_and_blocked_pushers_cannot_push() {
    let mut grid = PieceGrid::new();
    place(&mut grid, 4, 1, Piece::pawn(Side::White));
    place(&mut grid, 3, 1, Piece::pawn(Side::Black));
    assert!(Rules::legal_pushes(&grid, coord(4, 1)).is_empty());

    let mut grid = PieceGrid::new();
    place(&mut grid, 4, 1, Piece::blocked_pusher(Side::White));
    place(&mut grid, 3, 1, Piece::pawn(Side::Black));
    assert!(Rules::legal_pushes(&grid, coord(4, 1)).is_empty());
}

#[test]
fn a_blocked_piece_in_the_line_forbids_the_push() {
    let mut grid = PieceGrid::new();
    place(&mut grid, 4, 1, Piece::pusher(Side::White));
    place(&mut grid, 3, 1, Piece::pawn(Side::Black));
    place(&mut grid, 2, 1, Piece::blocked_pusher(Side::Black));

    let pushes = Rules::legal_pushes(&grid, coord(4, 1));
    assert!(
        !pushes.iter().any(|p| p.direction == Direction::Up),
        "blocked pusher interferes with the line"
    );
}

#[test]
fn sideways_lines_jammed_against_the_rail_cannot_move() {
    let mut grid = PieceGrid::new();
    place(&mut grid, 4, 1, Piece::pusher(Side::White));
    place(&mut grid, 4, 0, Piece::pawn(Side::White));
    place(&mut grid, 4, 2, Piece::pawn(Side::Black));
    place(&mut grid, 4, 3, Piece::pawn(Side::Black));

    let pushes = Rules::legal_pushes(&grid, coord(4, 1));
    let directions: Vec<Direction> = pushes.iter().map(|p| p.direction).collect();
    assert!(
        !directions.contains(&Direction::Left),
        "line ends on the left rail"
    );
    assert!(
        !directions.contains(&Direction::Right),
        "line ends on the right rail"
    );
}

#[test]
fn vertical_lines_may_always_move() {
    let mut grid = PieceGrid::new();
    place(&mut grid, 2, 1, Piece::pusher(Side::White));
    place(&mut grid, 1, 1, Piece::pawn(Side::Black));
    place(&mut grid, 0, 1, Piece::pawn(Side::Black));

    let pushes = Rules::legal_pushes(&grid, coord(2, 1));
    assert!(
        pushes.iter().any(|p| p.direction == Direction::Up),
        "a line against the open end may still be pushed"
    );
}

#[test]
fn pushing_over_the_open_end_wins() {
    let mut grid = PieceGrid::new();
    place(&mut grid, 2, 1, Piece::pusher(Side::White));
    place(&mut grid, 1, 1, Piece::pawn(Side::Black));
    place(&mut grid, 0, 1, Piece::pawn(Side::Black));

    let line = Rules::line_of_pieces(&grid, coord(1, 1), Direction::Up);
    assert!(Rules::does_push_win(&grid, &line, Direction::Up));
}

#[test]
fn pushing_into_a_hole_wins() {
    let mut grid = PieceGrid::new();
    place(&mut grid, 7, 2, Piece::pusher(Side::White));
    place(&mut grid, 7, 1, Piece::pawn(Side::Black));

    // One step left of (7, 1) is the (7, 0) hole.
    let line = Rules::line_of_pieces(&grid, coord(7, 1), Direction::Left);
    assert!(Rules::does_push_win(&grid, &line, Direction::Left));
}

#[test]
fn pushing_onto_an_open_cell_does_not_win() {
    let mut grid = PieceGrid::new();
    place(&mut grid, 5, 1, Piece::pusher(Side::White));
    place(&mut grid, 5, 2, Piece::pawn(Side::Black));

    let line = Rules::line_of_pieces(&grid, coord(5, 2), Direction::Right);
    assert!(!Rules::does_push_win(&grid, &line, Direction::Right));
}

#[test]
fn legal_squares_play_matches_reachability_source_exclusion() {
    let mut grid = PieceGrid::new();
    place(&mut grid, 6, 2, Piece::pusher(Side::Black));
    let legal = Rules::legal_squares(&grid, GamePhase::Play, coord(6, 2));
    match &legal {
        LegalSquares::Play(reach) => {
            assert_eq!(reach.source(), coord(6, 2));
            assert!(reach.is_reachable(coord(6, 2)));
            assert!(!legal.is_legal(coord(6, 2)));
        }
        LegalSquares::Setup { .. } => panic!("play phase must search"),
    }
}
