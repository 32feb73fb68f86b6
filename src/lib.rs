//! Blinkenlights: an N x N grid of counters.
//!
//! Clicking a cell lights up its row and column with a two-phase colour
//! transition and adds one to every cell in them. Optionally, a scan after
//! each click counts the cells holding 4 and reports 4/2 neighbour pairs.

pub mod animation;
pub mod board;
pub mod config;
pub mod error;
pub mod grid;
pub mod logging;
pub mod ui;

pub use board::{ClickOutcome, GridBoard, ResetScan};
pub use config::{Args, BoardConfig};
pub use error::{AppError, BoardError};
