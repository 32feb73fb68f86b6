// ui.rs - egui front end for the board

use eframe::egui;
use egui::{Align2, Color32, FontId, Pos2, Rect, Stroke, Vec2};
use std::time::Instant;
use tracing::debug;

use crate::board::{GridBoard, RESET_TRIGGER};
use crate::config::BoardConfig;

const GRID_EXTENT: f32 = 760.0; // pixels available for the whole grid
const SPACING: f32 = 0.5;

pub struct BlinkenlightsApp {
    pub board: GridBoard,
    box_size: f32,
}

impl BlinkenlightsApp {
    pub fn new(config: BoardConfig) -> Self {
        let board = GridBoard::new(config);
        let box_size = box_size_for(board.size());
        Self { board, box_size }
    }
}

/// Side of one cell so the grid fits in `GRID_EXTENT`.
pub fn box_size_for(size: usize) -> f32 {
    (GRID_EXTENT / size.max(1) as f32 - SPACING).clamp(8.0, 48.0)
}

/// Maps a pointer position to the `(row, col)` under it, if any.
/// Positions in the gaps between cells hit nothing.
pub fn cell_at(origin: Pos2, pos: Pos2, box_size: f32, size: usize) -> Option<(usize, usize)> {
    let pitch = box_size + SPACING;
    let rel = pos - origin;
    if rel.x < 0.0 || rel.y < 0.0 {
        return None;
    }
    let (col, row) = ((rel.x / pitch) as usize, (rel.y / pitch) as usize);
    if row >= size || col >= size {
        return None;
    }
    let inside_x = rel.x - col as f32 * pitch <= box_size;
    let inside_y = rel.y - row as f32 * pitch <= box_size;
    (inside_x && inside_y).then_some((row, col))
}

impl eframe::App for BlinkenlightsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.board.tick(now);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Blinkenlights");

            ui.horizontal(|ui| {
                if ui.button("⟲ Reset board").clicked() {
                    self.board.reset();
                }
                ui.separator();
                ui.label(format!("Grid: {0} x {0}", self.board.size()));
                ui.separator();
                ui.label(format!("Clicks: {}", self.board.clicks()));
            });

            ui.separator();
            ui.label("Click a cell to light up and increment its row and column.");
            ui.separator();

            let size = self.board.size();
            let box_size = self.box_size;
            let start_pos = ui.cursor().min;
            let total_size = Vec2::splat((box_size + SPACING) * size as f32 - SPACING);

            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());

            // Fill background
            painter.rect_filled(Rect::from_min_size(start_pos, total_size), 0.0, Color32::WHITE);

            let font = FontId::proportional(box_size * 0.55);
            for cell in self.board.cells() {
                let x = start_pos.x + cell.col as f32 * (box_size + SPACING);
                let y = start_pos.y + cell.row as f32 * (box_size + SPACING);
                let rect = Rect::from_min_size(egui::pos2(x, y), Vec2::splat(box_size));

                painter.rect_filled(rect, 1.0, self.board.color_at(cell.row, cell.col, now));
                painter.rect_stroke(rect, 1.0, Stroke::new(0.3, Color32::GRAY));
                painter.text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    cell.value.to_string(),
                    font.clone(),
                    Color32::from_gray(40),
                );
            }

            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    match cell_at(start_pos, pos, box_size, size) {
                        Some((row, col)) => {
                            self.board.on_cell_click(row, col, now);
                        }
                        None => debug!(x = pos.x, y = pos.y, "Click between cells"),
                    }
                }
            }

            ui.separator();

            let fours = self.board.grid().count_value(RESET_TRIGGER);
            ui.horizontal(|ui| {
                ui.label(format!("Cells holding {}: {}", RESET_TRIGGER, fours));
                if self.board.config().enable_neighbor_reset() {
                    ui.label("(neighbour scan on)");
                }
            });
        });

        // Keep repainting while highlights are running
        if self.board.is_animating() {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_at_maps_inside_points() {
        let origin = egui::pos2(10.0, 20.0);
        let b = 15.0;
        assert_eq!(cell_at(origin, egui::pos2(10.0, 20.0), b, 5), Some((0, 0)));
        assert_eq!(cell_at(origin, egui::pos2(10.0 + 15.5 * 2.0 + 3.0, 20.0 + 4.0), b, 5), Some((0, 2)));
        assert_eq!(cell_at(origin, egui::pos2(10.0 + 1.0, 20.0 + 15.5 * 4.0 + 1.0), b, 5), Some((4, 0)));
    }

    #[test]
    fn cell_at_misses_outside() {
        let origin = egui::pos2(0.0, 0.0);
        assert_eq!(cell_at(origin, egui::pos2(-1.0, 5.0), 15.0, 3), None);
        assert_eq!(cell_at(origin, egui::pos2(5.0, 15.5 * 3.0 + 1.0), 15.0, 3), None);
        // gap between column 0 and column 1
        assert_eq!(cell_at(origin, egui::pos2(15.2, 5.0), 15.0, 3), None);
    }

    #[test]
    fn box_size_scales_with_grid() {
        assert!(box_size_for(10) > box_size_for(50));
        assert_eq!(box_size_for(1), 48.0);
        assert_eq!(box_size_for(1000), 8.0);
    }
}
