// ui.rs - Controls, grid painter and statistics for the growth display

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use std::time::Duration;
use growth::{Cell, ScanMode, SEEDS};
use crate::GrowthApp;

const BOX_SIZE: f32 = 6.0;
const SPACING: f32 = 0.5;
const EMPTY_COLOR: Color32 = Color32::from_rgb(0xe0, 0xe0, 0xe0);
const WARNING_COLOR: Color32 = Color32::from_rgb(200, 60, 60);

/// Occupied cells fade from bright to dark green as they age.
fn cell_color(cell: Cell) -> Color32 {
    if cell.occupied {
        Color32::from_rgba_unmultiplied(0, cell.intensity(), 0, 230)
    } else {
        EMPTY_COLOR
    }
}

impl eframe::App for GrowthApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply whatever ticks arrived since the last frame
        self.session.pump();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Cellular Growth");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.session.is_running() { "⏸ Pause" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    self.session.toggle_running();
                }

                if ui.button("⏹ Reset").clicked() {
                    self.session.reset();
                }

                ui.separator();

                ui.label("Seed:");
                egui::ComboBox::from_id_source("seed_selector")
                    .selected_text(SEEDS.get(self.selected_seed).map_or("", |seed| seed.name))
                    .show_ui(ui, |ui| {
                        for (i, seed) in SEEDS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_seed, i, seed.name);
                        }
                    });

                if ui.button("Apply Seed").clicked() {
                    if let Some(seed) = SEEDS.get(self.selected_seed) {
                        self.session.apply_seed(seed);
                    }
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.session.simulation().generation()));
            });

            ui.separator();

            // Interval and scatter controls
            ui.horizontal(|ui| {
                ui.label("Time Interval (ms):");
                ui.add(egui::DragValue::new(&mut self.interval_input).speed(10));
                if ui.button("Set Interval").clicked() {
                    self.apply_interval();
                }
                ui.label(format!(
                    "Active: {} ms",
                    self.session.simulation().interval().as_millis()
                ));

                ui.separator();

                // Snapshot is the default; the in-place scan reproduces the legacy spread order
                let mut in_place = self.session.simulation().scan_mode() == ScanMode::InPlace;
                if ui.checkbox(&mut in_place, "In-place scan").changed() {
                    let mode = if in_place { ScanMode::InPlace } else { ScanMode::Snapshot };
                    self.session.set_scan_mode(mode);
                }

                ui.separator();

                ui.add(egui::Slider::new(&mut self.scatter_density, 0.0..=1.0).text("density"));
                if ui.button("🎲 Scatter").clicked() {
                    self.session.scatter(self.scatter_density);
                }
            });

            if let Some(warning) = &self.interval_warning {
                ui.colored_label(WARNING_COLOR, format!("⚠ {warning}"));
            }

            ui.separator();

            ui.label("Click cells to toggle them. Occupied cells spread to empty neighbours and fade with age.");

            ui.separator();

            // Draw the grid
            let grid_size = self.session.grid().size();
            let pitch = BOX_SIZE + SPACING;
            let total_size = Vec2::splat(pitch * grid_size as f32 - SPACING);

            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());
            let origin = response.rect.min;

            // Fill background
            painter.rect_filled(Rect::from_min_size(origin, total_size), 0.0, Color32::from_gray(200));

            for (row, cells) in self.session.grid().rows().enumerate() {
                for (col, cell) in cells.iter().enumerate() {
                    let rect = Rect::from_min_size(
                        egui::pos2(origin.x + col as f32 * pitch, origin.y + row as f32 * pitch),
                        Vec2::splat(BOX_SIZE),
                    );
                    painter.rect_filled(rect, 0.0, cell_color(*cell));
                    if cell.occupied {
                        painter.rect_stroke(rect, 0.0, Stroke::new(0.2, Color32::from_gray(60)));
                    }
                }
            }

            // Toggling works while running too; the next tick sees it
            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let offset = pos - origin;
                    if offset.x >= 0.0 && offset.y >= 0.0 {
                        let row = (offset.y / pitch).floor() as usize;
                        let col = (offset.x / pitch).floor() as usize;
                        self.session.toggle_cell(row, col);
                    }
                }
            }

            ui.separator();

            // Statistics
            let total = grid_size * grid_size;
            let occupied = self.session.grid().occupied_count();
            let share = if total == 0 { 0.0 } else { occupied as f32 / total as f32 * 100.0 };

            ui.horizontal(|ui| {
                ui.label(format!("Occupied cells: {occupied}"));
                ui.label(format!("Empty cells: {}", total - occupied));
                ui.label(format!("Population: {share:.1}%"));
                ui.label(if self.session.is_running() { "Running" } else { "Paused" });
            });
        });

        // Keep frames coming while running so ticks show up
        if self.session.is_running() {
            ctx.request_repaint_after(Duration::from_millis(30));
        }
    }
}
