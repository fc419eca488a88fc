//! Declarative starting layouts. A layout file lists piece placements
//! plus the phase to resume in, and validates into the piece grid that
//! seeds a position. The engine itself never reads files; this is the
//! convenience surface for hosts and tests.

use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::domain::coordinate::Coord;
use crate::domain::models::{GamePhase, Piece, PieceKind, Side};
use crate::domain::rules::grid::{PieceGrid, PlacementError};

#[derive(Debug, Deserialize, Clone)]
pub struct LayoutConfig {
    #[serde(default = "default_phase")]
    pub phase: GamePhase,
    #[serde(default)]
    pub pieces: Vec<PlacementConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PlacementConfig {
    pub side: Side,
    pub kind: PieceKind,
    pub row: i8,
    pub col: i8,
    #[serde(default)]
    pub blocked: bool,
}

fn default_phase() -> GamePhase {
    GamePhase::WhiteSetup
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            phase: GamePhase::WhiteSetup,
            pieces: Vec::new(),
        }
    }
}

impl LayoutConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Validate every placement and build the grid: in bounds, not a
    /// hole, one piece per cell, blocked flags only on pushers.
    pub fn to_grid(&self) -> Result<PieceGrid, ConfigError> {
        let mut grid = PieceGrid::new();
        for placement in &self.pieces {
            let coord = Coord::new(placement.row, placement.col);
            let piece = Piece {
                kind: placement.kind,
                side: placement.side,
                blocked: placement.blocked,
            };
            grid.place(coord, piece)?;
        }
        Ok(grid)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Placement(PlacementError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "failed to read layout: {e}"),
            ConfigError::Parse(e) => write!(f, "failed to parse layout: {e}"),
            ConfigError::Placement(e) => write!(f, "bad placement: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Placement(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl From<PlacementError> for ConfigError {
    fn from(e: PlacementError) -> Self {
        ConfigError::Placement(e)
    }
}
