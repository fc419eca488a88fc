pub mod board;
pub mod coordinate;
pub mod models;
pub mod moves;
pub mod rules;
