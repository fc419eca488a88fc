pub mod bitboard;
pub mod display;
pub mod masks;
pub mod position;
pub mod tables;

pub use bitboard::BitBoard;
pub use bitboard::Bits;
pub use display::render_bitboard;
pub use position::Position;
pub use tables::Tables;
