// board.rs - GridBoard: the click / highlight / increment interaction

use egui::Color32;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::animation::{Highlights, PHASE_DURATION, Phase};
use crate::config::BoardConfig;
use crate::grid::{Cell, Grid};

/// Value whose cells are counted by the neighbour scan.
pub const RESET_TRIGGER: u32 = 4;
/// Neighbour value that pairs with a trigger cell.
pub const RESET_PARTNER: u32 = 2;

/// Result of one neighbour scan.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResetScan {
    /// Cells currently holding 4.
    pub fours: usize,
    /// (four, two) linear index pairs of adjacent 4/2 cells. Reported only.
    pub pairs: Vec<(usize, usize)>,
}

/// What a click did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickOutcome {
    pub row: usize,
    pub col: usize,
    pub touched: usize,
    pub scan: Option<ResetScan>,
}

/// N x N grid of counters plus its highlight animations.
#[derive(Debug)]
pub struct GridBoard {
    config: BoardConfig,
    grid: Grid,
    highlights: Highlights,
    phase_duration: Duration,
    clicks: u64,
}

impl GridBoard {
    pub fn new(config: BoardConfig) -> Self {
        let grid = Grid::new(config.size());
        let highlights = Highlights::new(grid.len());
        info!(
            size = config.size(),
            cells = grid.len(),
            neighbor_reset = config.enable_neighbor_reset(),
            "Creating grid"
        );
        Self {
            config,
            grid,
            highlights,
            phase_duration: PHASE_DURATION,
            clicks: 0,
        }
    }

    /// Sets the length of each highlight phase. Kept across [`GridBoard::reset`].
    pub fn with_phase_duration(mut self, duration: Duration) -> Self {
        self.phase_duration = duration;
        self.highlights = Highlights::with_duration(self.grid.len(), duration);
        self
    }

    pub fn phase_duration(&self) -> Duration {
        self.phase_duration
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn clicks(&self) -> u64 {
        self.clicks
    }

    pub fn value(&self, row: usize, col: usize) -> Option<u32> {
        self.grid.value(row, col)
    }

    /// Handles a click on `(row, col)` at `now`.
    ///
    /// Every cell in the clicked row or column is incremented once and starts
    /// its highlight. Increments happen immediately; the animation finishes
    /// later through [`GridBoard::tick`].
    pub fn on_cell_click(&mut self, row: usize, col: usize, now: Instant) -> ClickOutcome {
        let cross = self.grid.cross_indices(row, col);
        for &index in &cross {
            let cell = &mut self.grid.cells_mut()[index];
            cell.value = cell.value.saturating_add(1);
            self.highlights.start(index, now);
        }
        self.clicks += 1;

        info!("Click detected on ({}, {})", row, col);

        let scan = self
            .config
            .enable_neighbor_reset()
            .then(|| self.reset_neighbors());

        ClickOutcome { row, col, touched: cross.len(), scan }
    }

    /// Counts cells holding 4 and finds their neighbouring 2s.
    ///
    /// Values are left untouched: what a matched pair should turn into is
    /// still undecided, so the pairs are only reported.
    pub fn reset_neighbors(&self) -> ResetScan {
        let mut scan = ResetScan::default();
        for (index, cell) in self.grid.cells().iter().enumerate() {
            if cell.value != RESET_TRIGGER {
                continue;
            }
            scan.fours += 1;
            for n in self.grid.neighbours(index) {
                if self.grid.cells()[n].value == RESET_PARTNER {
                    scan.pairs.push((index, n));
                }
            }
        }

        for &(four, two) in &scan.pairs {
            let (a, b) = (self.grid.cells()[four], self.grid.cells()[two]);
            debug!("Cell [{}, {}] holds 4 next to [{}, {}] holding 2", a.row, a.col, b.row, b.col);
        }
        info!("There are {} cells containing a {}", scan.fours, RESET_TRIGGER);
        debug!("Grid after scan:\n{}", self.grid);
        scan
    }

    /// Advances animations to `now`.
    pub fn tick(&mut self, now: Instant) -> usize {
        self.highlights.tick(now)
    }

    pub fn is_animating(&self) -> bool {
        self.highlights.is_animating()
    }

    pub fn phase(&self, row: usize, col: usize) -> Phase {
        self.cell_index(row, col)
            .map_or(Phase::Idle, |i| self.highlights.phase(i))
    }

    pub fn color_at(&self, row: usize, col: usize, now: Instant) -> Color32 {
        let index = self.cell_index(row, col).unwrap_or(usize::MAX);
        self.highlights.color_at(index, now)
    }

    pub fn cells(&self) -> &[Cell] {
        self.grid.cells()
    }

    /// Rebuilds the board from its configuration.
    pub fn reset(&mut self) {
        *self = GridBoard::new(self.config).with_phase_duration(self.phase_duration);
    }

    fn cell_index(&self, row: usize, col: usize) -> Option<usize> {
        self.grid.cell(row, col).map(|_| self.grid.index(row, col))
    }
}
