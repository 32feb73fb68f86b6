// animation.rs - Two-phase highlight transitions driven by timed events
//
// A click starts a forward transition (current colour -> highlight). Its
// completion is queued as a timed event; handling that event starts the
// reverse transition (highlight -> idle), whose own completion returns the
// cell to idle. Time is always passed in, never read from a global clock.

use egui::Color32;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

pub const HIGHLIGHT_COLOR: Color32 = Color32::from_rgb(0xFF, 0xFF, 0x00);
pub const IDLE_COLOR: Color32 = Color32::from_rgb(0xD0, 0xD0, 0xD0);
pub const PHASE_DURATION: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Forward,
    Reverse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum EventKind {
    ForwardDone,
    ReverseDone,
}

/// A phase completion due at `at` for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct TimedEvent {
    at: Instant,
    cell: usize,
    generation: u64,
    kind: EventKind,
}

#[derive(Debug, Clone, Copy)]
struct Transition {
    phase: Phase,
    from: Color32,
    started: Instant,
    generation: u64,
}

/// Per-cell highlight state for a whole board.
#[derive(Debug)]
pub struct Highlights {
    cells: Vec<Option<Transition>>,
    queue: BinaryHeap<Reverse<TimedEvent>>, // min-ordered by due time
    next_generation: u64,
    duration: Duration,
}

impl Highlights {
    pub fn new(len: usize) -> Self {
        Self::with_duration(len, PHASE_DURATION)
    }

    pub fn with_duration(len: usize, duration: Duration) -> Self {
        Self {
            cells: vec![None; len],
            queue: BinaryHeap::new(),
            next_generation: 0,
            duration,
        }
    }

    /// Starts (or restarts) the highlight of `cell` at `now`.
    ///
    /// A restart continues from the colour the cell shows at `now`, and any
    /// completion still queued for the previous transition is ignored.
    pub fn start(&mut self, cell: usize, now: Instant) {
        debug_assert!(cell < self.cells.len(), "cell {cell} outside highlight table");
        let from = self.color_at(cell, now);
        self.next_generation += 1;
        let generation = self.next_generation;
        self.cells[cell] = Some(Transition {
            phase: Phase::Forward,
            from,
            started: now,
            generation,
        });
        self.queue.push(Reverse(TimedEvent {
            at: now + self.duration,
            cell,
            generation,
            kind: EventKind::ForwardDone,
        }));
    }

    /// Handles every completion due at or before `now`.
    /// Returns how many cells changed phase.
    pub fn tick(&mut self, now: Instant) -> usize {
        let mut changed = 0;
        while let Some(Reverse(event)) = self.queue.peek().copied() {
            if event.at > now {
                break;
            }
            self.queue.pop();

            let Some(current) = self.cells[event.cell] else {
                continue;
            };
            if current.generation != event.generation {
                continue; // superseded by a later click
            }

            match event.kind {
                EventKind::ForwardDone => {
                    self.cells[event.cell] = Some(Transition {
                        phase: Phase::Reverse,
                        from: HIGHLIGHT_COLOR,
                        started: event.at,
                        generation: event.generation,
                    });
                    self.queue.push(Reverse(TimedEvent {
                        at: event.at + self.duration,
                        kind: EventKind::ReverseDone,
                        ..event
                    }));
                }
                EventKind::ReverseDone => {
                    self.cells[event.cell] = None;
                }
            }
            changed += 1;
        }
        changed
    }

    pub fn phase(&self, cell: usize) -> Phase {
        self.cells
            .get(cell)
            .copied()
            .flatten()
            .map_or(Phase::Idle, |t| t.phase)
    }

    /// Background colour of `cell` at `now`.
    pub fn color_at(&self, cell: usize, now: Instant) -> Color32 {
        let Some(t) = self.cells.get(cell).copied().flatten() else {
            return IDLE_COLOR;
        };
        let progress = self.progress(t.started, now);
        match t.phase {
            Phase::Idle => IDLE_COLOR,
            Phase::Forward => lerp_color(t.from, HIGHLIGHT_COLOR, progress),
            Phase::Reverse => lerp_color(t.from, IDLE_COLOR, progress),
        }
    }

    /// True while any transition is still pending completion.
    pub fn is_animating(&self) -> bool {
        !self.queue.is_empty()
    }

    fn progress(&self, started: Instant, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(started).as_secs_f32();
        (elapsed / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}

/// Linear blend between two colours, `t` in `0.0..=1.0`.
pub fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color32::from_rgb(mix(a.r(), b.r()), mix(a.g(), b.g()), mix(a.b(), b.b()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn forward_then_reverse_then_idle() {
        let t0 = Instant::now();
        let mut h = Highlights::new(4);
        h.start(2, t0);
        assert_eq!(h.phase(2), Phase::Forward);
        assert_eq!(h.color_at(2, t0), IDLE_COLOR);

        assert_eq!(h.tick(t0 + ms(499)), 0);
        assert_eq!(h.phase(2), Phase::Forward);

        assert_eq!(h.tick(t0 + ms(500)), 1);
        assert_eq!(h.phase(2), Phase::Reverse);
        assert_eq!(h.color_at(2, t0 + ms(500)), HIGHLIGHT_COLOR);

        assert_eq!(h.tick(t0 + ms(1000)), 1);
        assert_eq!(h.phase(2), Phase::Idle);
        assert_eq!(h.color_at(2, t0 + ms(1000)), IDLE_COLOR);
        assert!(!h.is_animating());
    }

    #[test]
    fn forward_holds_highlight_until_ticked() {
        let t0 = Instant::now();
        let mut h = Highlights::new(1);
        h.start(0, t0);
        // Reverse never starts on its own
        assert_eq!(h.color_at(0, t0 + ms(800)), HIGHLIGHT_COLOR);
        assert_eq!(h.phase(0), Phase::Forward);
    }

    #[test]
    fn late_tick_runs_both_phases() {
        let t0 = Instant::now();
        let mut h = Highlights::new(1);
        h.start(0, t0);
        assert_eq!(h.tick(t0 + ms(5000)), 2);
        assert_eq!(h.phase(0), Phase::Idle);
    }

    #[test]
    fn restart_discards_stale_completion() {
        let t0 = Instant::now();
        let mut h = Highlights::new(1);
        h.start(0, t0);
        h.start(0, t0 + ms(300));

        // First transition's completion is stale
        assert_eq!(h.tick(t0 + ms(500)), 0);
        assert_eq!(h.phase(0), Phase::Forward);

        assert_eq!(h.tick(t0 + ms(800)), 1);
        assert_eq!(h.phase(0), Phase::Reverse);
        assert_eq!(h.tick(t0 + ms(1300)), 1);
        assert_eq!(h.phase(0), Phase::Idle);
        assert!(!h.is_animating());
    }

    #[test]
    fn restart_continues_from_visible_color() {
        let t0 = Instant::now();
        let mut h = Highlights::new(1);
        h.start(0, t0);
        let mid = h.color_at(0, t0 + ms(250));
        h.start(0, t0 + ms(250));
        assert_eq!(h.color_at(0, t0 + ms(250)), mid);
        assert_eq!(h.color_at(0, t0 + ms(750)), HIGHLIGHT_COLOR);
    }

    #[test]
    fn midpoint_is_blended() {
        let c = lerp_color(IDLE_COLOR, HIGHLIGHT_COLOR, 0.5);
        assert_eq!(c, Color32::from_rgb(0xE8, 0xE8, 0x68));
    }

    #[test]
    #[should_panic]
    fn out_of_range_start_panics() {
        let mut h = Highlights::new(2);
        h.start(9, Instant::now());
    }
}
