// config.rs - Board configuration and command line arguments

use clap::Parser;

use crate::error::BoardError;
use crate::grid::{COMPACT_GRID_SIZE, DEFAULT_GRID_SIZE, MAX_GRID_SIZE};

/// Validated board settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    size: usize,
    enable_neighbor_reset: bool,
}

impl BoardConfig {
    pub fn new(size: usize, enable_neighbor_reset: bool) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::EmptyGrid);
        }
        if size > MAX_GRID_SIZE {
            return Err(BoardError::TooLarge { size, max: MAX_GRID_SIZE });
        }
        Ok(Self { size, enable_neighbor_reset })
    }

    /// 10x10 board that runs the neighbour scan after every click.
    pub fn compact() -> Self {
        Self { size: COMPACT_GRID_SIZE, enable_neighbor_reset: true }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn enable_neighbor_reset(&self) -> bool {
        self.enable_neighbor_reset
    }
}

impl Default for BoardConfig {
    /// 50x50 board without the neighbour scan.
    fn default() -> Self {
        Self { size: DEFAULT_GRID_SIZE, enable_neighbor_reset: false }
    }
}

/// Clickable grid that lights up rows and columns
#[derive(Parser, Debug, Clone)]
#[command(name = "blinkenlights", version, about)]
pub struct Args {
    /// Number of cells along each side of the grid (1 to 50)
    #[arg(short, long, default_value_t = DEFAULT_GRID_SIZE)]
    pub size: usize,

    /// Use the 10x10 board with the neighbour scan enabled
    #[arg(long, conflicts_with = "size")]
    pub compact: bool,

    /// Count cells holding 4 after every click
    #[arg(long)]
    pub neighbor_reset: bool,

    /// Default log filter, used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    pub fn board_config(&self) -> Result<BoardConfig, BoardError> {
        if self.compact {
            return Ok(BoardConfig::compact());
        }
        BoardConfig::new(self.size, self.neighbor_reset)
    }
}
