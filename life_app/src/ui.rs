// ui.rs - eframe front end: drawing and input wiring

use crate::app::{LifeApp, MenuAction};
use crate::popup::PopupAction;
use crate::render::{self, GridLayout};
use eframe::egui;
use egui::{PointerButton, Sense};
use std::time::Instant;

pub const STATUS_BAR_HEIGHT: f32 = 28.0;

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.advance(now - self.last_frame);
        self.last_frame = now;

        // Space forces one generation regardless of the timer.
        if ctx.input(|i| i.key_pressed(egui::Key::Space)) {
            self.game.run_generation();
        }

        self.status_bar(ctx);
        self.context_menu(ctx);
        self.popup(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(self.grid_extent(), Sense::click_and_drag());
                let layout = GridLayout::for_grid(response.rect.min, self.cell_size, self.game.grid());

                if let Some(pos) = response.hover_pos() {
                    let (col, row) = layout.cell_at(pos);
                    self.pointer_moved(col, row);
                }

                render::paint_grid(&painter, &layout, self.game.grid(), &self.palette);
                if let Some(preview) = &self.template {
                    render::paint_overlay(&painter, &layout, &preview.grid, &self.palette);
                }

                if response.secondary_clicked() {
                    if let Some(pos) = response.interact_pointer_pos() {
                        self.open_context_menu(pos);
                    }
                } else if response.clicked() {
                    if let Some(pos) = response.interact_pointer_pos() {
                        let (col, row) = layout.cell_at(pos);
                        self.left_click(col, row);
                    }
                } else if response.dragged_by(PointerButton::Primary) {
                    if let Some(pos) = response.interact_pointer_pos() {
                        let (col, row) = layout.cell_at(pos);
                        let kill = ui.input(|i| i.modifiers.ctrl);
                        self.drag(col, row, kill);
                    }
                }
            });

        let animating = self.popup.as_ref().is_some_and(|popup| popup.has_animation());
        if self.game.is_running() || animating {
            ctx.request_repaint_after(self.game.tick());
        } else if self.popup.as_ref().is_some_and(|popup| !popup.is_loaded()) {
            ctx.request_repaint();
        }
    }
}

impl LifeApp {
    fn status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status")
            .exact_height(STATUS_BAR_HEIGHT)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    let state = if self.game.is_running() { "▶" } else { "⏸" };
                    ui.label(state);
                    ui.label(format!("Gen {}", self.game.generation()));
                    ui.label(format!("Live {}", self.game.grid().alive_count()));
                    ui.separator();
                    ui.color_edit_button_srgba(&mut self.palette.live);
                    ui.color_edit_button_srgba(&mut self.palette.dead);
                });
            });
    }

    fn context_menu(&mut self, ctx: &egui::Context) {
        let Some(pos) = self.context_menu else {
            return;
        };
        let mut action = None;
        egui::Area::new(egui::Id::new("context_menu"))
            .fixed_pos(pos)
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    let label = if self.game.is_running() { "Stop" } else { "Start" };
                    if ui.button(label).clicked() {
                        action = Some(MenuAction::StartStop);
                    }
                    if ui.button("Templates").clicked() {
                        action = Some(MenuAction::Templates);
                    }
                    if ui.button("Clear").clicked() {
                        action = Some(MenuAction::Clear);
                    }
                });
            });
        if let Some(action) = action {
            self.menu_action(action);
        }
    }

    fn popup(&mut self, ctx: &egui::Context) {
        let Some(popup) = &mut self.popup else {
            return;
        };
        match popup.show(ctx, &self.palette) {
            PopupAction::None => {}
            PopupAction::Close => self.popup = None,
            PopupAction::Choose(pattern) => self.choose_template(pattern),
        }
    }
}
