//! Per-square lookup tables derived from the board geometry. Built once
//! on first use and shared read-only for the life of the process; every
//! table is an array of 32 boards keyed by a square's bit position.

use std::sync::OnceLock;

use crate::domain::board::bitboard::BitBoard;
use crate::domain::board::masks::{
    self, HOLES, ILLEGAL_DOWN_PUSH, ILLEGAL_LEFT_PUSH, ILLEGAL_RIGHT_PUSH, ILLEGAL_UP_PUSH,
};
use crate::domain::coordinate::{NUM_COLS, NUM_ROWS};
use crate::domain::models::Direction;

static TABLES: OnceLock<Tables> = OnceLock::new();

const TABLE_LEN: usize = NUM_ROWS * NUM_COLS;

#[derive(Debug)]
pub struct Tables {
    pushes: [BitBoard; TABLE_LEN],
    horizontal_pushes: [BitBoard; TABLE_LEN],
    close_wall: [BitBoard; TABLE_LEN],
    far_wall: [BitBoard; TABLE_LEN],
    far_side: [BitBoard; TABLE_LEN],
    row: [BitBoard; TABLE_LEN],
    blocker_up: [BitBoard; TABLE_LEN],
    blocker_down: [BitBoard; TABLE_LEN],
    blocker_left: [BitBoard; TABLE_LEN],
    blocker_right: [BitBoard; TABLE_LEN],
}

impl Tables {
    pub fn get() -> &'static Tables {
        TABLES.get_or_init(Tables::build)
    }

    /// Cells a pusher on `square` could push into, all four directions.
    /// Edge directions and pushes that would drop or strand the pusher
    /// are already removed.
    pub fn pushes(&self, square: BitBoard) -> BitBoard {
        self.entry(&self.pushes, square)
    }

    /// The left/right subset of `pushes`.
    pub fn horizontal_pushes(&self, square: BitBoard) -> BitBoard {
        self.entry(&self.horizontal_pushes, square)
    }

    /// The playable wall-column cell nearest to `square` in its row.
    pub fn close_wall(&self, square: BitBoard) -> BitBoard {
        self.entry(&self.close_wall, square)
    }

    /// The playable wall-column cell farthest from `square` in its row.
    pub fn far_wall(&self, square: BitBoard) -> BitBoard {
        self.entry(&self.far_wall, square)
    }

    /// The two playable cells of the row half farthest from `square`.
    pub fn far_side(&self, square: BitBoard) -> BitBoard {
        self.entry(&self.far_side, square)
    }

    /// All playable cells of `square`'s row.
    pub fn row(&self, square: BitBoard) -> BitBoard {
        self.entry(&self.row, square)
    }

    /// The span from `square` to the board edge in `direction`, the
    /// square itself included, holes included. The empty board maps to
    /// an empty span: no blocker, no influence.
    pub fn blocker(&self, direction: Direction, square: BitBoard) -> BitBoard {
        let table = match direction {
            Direction::Up => &self.blocker_up,
            Direction::Down => &self.blocker_down,
            Direction::Left => &self.blocker_left,
            Direction::Right => &self.blocker_right,
        };
        self.entry(table, square)
    }

    fn entry(&self, table: &[BitBoard; TABLE_LEN], square: BitBoard) -> BitBoard {
        if square.is_single() {
            table[square.index()]
        } else {
            BitBoard::EMPTY
        }
    }

    fn build() -> Tables {
        let mut t = Tables {
            pushes: [BitBoard::EMPTY; TABLE_LEN],
            horizontal_pushes: [BitBoard::EMPTY; TABLE_LEN],
            close_wall: [BitBoard::EMPTY; TABLE_LEN],
            far_wall: [BitBoard::EMPTY; TABLE_LEN],
            far_side: [BitBoard::EMPTY; TABLE_LEN],
            row: [BitBoard::EMPTY; TABLE_LEN],
            blocker_up: [BitBoard::EMPTY; TABLE_LEN],
            blocker_down: [BitBoard::EMPTY; TABLE_LEN],
            blocker_left: [BitBoard::EMPTY; TABLE_LEN],
            blocker_right: [BitBoard::EMPTY; TABLE_LEN],
        };
        t.build_walls_and_rows();
        t.build_blockers();
        // Pushes subtract the close wall, so the wall tables come first.
        t.build_pushes();
        t
    }

    fn build_walls_and_rows(&mut self) {
        for row in 0..NUM_ROWS {
            for col in 0..NUM_COLS {
                let sq = masks::square(row, col);
                if sq.intersects(HOLES) {
                    continue;
                }
                let i = sq.index();

                let (near, far) = if col <= 1 {
                    (masks::square(row, 0), masks::square(row, NUM_COLS - 1))
                } else {
                    (masks::square(row, NUM_COLS - 1), masks::square(row, 0))
                };
                let far_inward = if col <= 1 {
                    masks::square(row, NUM_COLS - 2)
                } else {
                    masks::square(row, 1)
                };
                self.close_wall[i] = near & !HOLES;
                self.far_wall[i] = far & !HOLES;
                self.far_side[i] = (far & !HOLES) | (far_inward & !HOLES);

                let mut full_row = BitBoard::EMPTY;
                for c in 0..NUM_COLS {
                    full_row |= masks::square(row, c);
                }
                self.row[i] = full_row & !HOLES;
            }
        }
    }

    fn build_blockers(&mut self) {
        for row in 0..NUM_ROWS {
            for col in 0..NUM_COLS {
                let sq = masks::square(row, col);
                if sq.intersects(HOLES) {
                    continue;
                }
                let i = sq.index();

                for r in 0..=row {
                    self.blocker_up[i] |= masks::square(r, col);
                }
                for r in row..NUM_ROWS {
                    self.blocker_down[i] |= masks::square(r, col);
                }
                for c in 0..=col {
                    self.blocker_left[i] |= masks::square(row, c);
                }
                for c in col..NUM_COLS {
                    self.blocker_right[i] |= masks::square(row, c);
                }
            }
        }
    }

    fn build_pushes(&mut self) {
        for row in 0..NUM_ROWS {
            for col in 0..NUM_COLS {
                let sq = masks::square(row, col);
                if sq.intersects(HOLES) {
                    continue;
                }
                let i = sq.index();

                let mut illegal = self.close_wall[i];
                if sq.intersects(ILLEGAL_UP_PUSH) {
                    illegal |= sq >> NUM_COLS;
                }
                if sq.intersects(ILLEGAL_DOWN_PUSH) {
                    illegal |= sq << NUM_COLS;
                }
                if sq.intersects(ILLEGAL_LEFT_PUSH) {
                    illegal |= sq >> 1;
                }
                if sq.intersects(ILLEGAL_RIGHT_PUSH) {
                    illegal |= sq << 1;
                }

                // Plain shifts wrap across row boundaries for the edge
                // columns and leave the word at the edge rows, hence the
                // explicit cases.
                let vertical = if row == 0 {
                    sq << NUM_COLS
                } else if row == NUM_ROWS - 1 {
                    sq >> NUM_COLS
                } else {
                    (sq << NUM_COLS) | (sq >> NUM_COLS)
                };
                let horizontal = if col == 0 {
                    sq << 1
                } else if col == NUM_COLS - 1 {
                    sq >> 1
                } else {
                    (sq << 1) | (sq >> 1)
                };

                self.pushes[i] = (vertical | horizontal) & !illegal;
                self.horizontal_pushes[i] = horizontal & !illegal;
            }
        }
    }
}
