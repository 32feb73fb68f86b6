// error.rs - Error types

use thiserror::Error;

/// Invalid board configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("grid size must be at least 1")]
    EmptyGrid,

    #[error("grid size {size} exceeds the maximum of {max}")]
    TooLarge { size: usize, max: usize },
}

/// Failures surfaced by the binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("failed to initialise logging: {0}")]
    Logging(String),

    #[error("window runtime failed: {0}")]
    Ui(#[from] eframe::Error),
}
