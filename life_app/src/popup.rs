// popup.rs - Template selection window

use crate::render::{self, GridLayout, Palette};
use egui::{Color32, Sense, Stroke, Vec2};
use life_core::{GameOfLife, Grid, Pattern, TEMPLATE_PADDING, TemplateCollection, display_name};
use std::time::Duration;

pub const MAX_PAGE: u32 = 2;

const WIDGET_SIZE: f32 = 100.0;
const PREVIEW_CELL_SIZE: f32 = 5.0;

/// A template shown in the popup. Static templates are drawn frozen,
/// animated ones run their own simulation.
enum Preview {
    Static(Grid),
    Animated(GameOfLife),
}

impl Preview {
    fn grid(&self) -> &Grid {
        match self {
            Preview::Static(grid) => grid,
            Preview::Animated(game) => game.grid(),
        }
    }
}

struct TemplateWidget {
    name: String,
    pattern: Pattern,
    preview: Preview,
}

pub enum PopupAction {
    None,
    Close,
    Choose(Pattern),
}

pub struct TemplatePopup {
    page: u32,
    tick: Duration,
    collections: Option<Vec<TemplateCollection>>,
    rows: Vec<Vec<TemplateWidget>>,
}

impl TemplatePopup {
    pub fn new(tick: Duration) -> Self {
        Self {
            page: 1,
            tick,
            collections: None,
            rows: Vec::new(),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn is_loaded(&self) -> bool {
        self.collections.is_some()
    }

    pub fn set_collections(&mut self, collections: Vec<TemplateCollection>) {
        self.collections = Some(collections);
        self.load_page();
    }

    pub fn next_page(&mut self) {
        if self.page != MAX_PAGE {
            self.page += 1;
            self.load_page();
        }
    }

    pub fn prev_page(&mut self) {
        if self.page != 1 {
            self.page -= 1;
            self.load_page();
        }
    }

    /// Names of the templates on the current page, one entry per collection.
    pub fn page_names(&self) -> Vec<Vec<&str>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|widget| widget.name.as_str()).collect())
            .collect()
    }

    /// Steps every animated preview.
    pub fn advance(&mut self, elapsed: Duration) {
        for widget in self.rows.iter_mut().flatten() {
            if let Preview::Animated(game) = &mut widget.preview {
                game.advance(elapsed);
            }
        }
    }

    pub fn has_animation(&self) -> bool {
        self.rows
            .iter()
            .flatten()
            .any(|widget| matches!(widget.preview, Preview::Animated(_)))
    }

    fn load_page(&mut self) {
        self.rows.clear();
        let Some(collections) = &self.collections else {
            return;
        };
        for collection in collections.iter().filter(|c| c.page() == self.page) {
            let row = collection
                .templates()
                .iter()
                .map(|(name, pattern)| {
                    let pattern = pattern.padded(TEMPLATE_PADDING);
                    let grid = Grid::from_pattern((0, 0), &pattern);
                    let preview = if collection.is_static() {
                        Preview::Static(grid)
                    } else {
                        Preview::Animated(GameOfLife::new(grid).with_tick(self.tick))
                    };
                    TemplateWidget {
                        name: display_name(name),
                        pattern,
                        preview,
                    }
                })
                .collect();
            self.rows.push(row);
        }
        log::debug!("template page {} has {} collections", self.page, self.rows.len());
    }

    pub fn show(&mut self, ctx: &egui::Context, palette: &Palette) -> PopupAction {
        let mut open = true;
        let mut action = PopupAction::None;
        egui::Window::new("Templates")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui.button("◀").clicked() {
                        self.prev_page();
                    }
                    ui.label(format!("Page {} / {}", self.page, MAX_PAGE));
                    if ui.button("▶").clicked() {
                        self.next_page();
                    }
                });
                ui.separator();

                if !self.is_loaded() {
                    ui.label("Loading templates...");
                    return;
                }
                if self.rows.is_empty() {
                    ui.label("No templates on this page");
                }
                for row in &self.rows {
                    ui.horizontal(|ui| {
                        for widget in row {
                            if show_widget(ui, widget, palette) {
                                action = PopupAction::Choose(widget.pattern.clone());
                            }
                        }
                    });
                }
            });
        match action {
            PopupAction::None if !open => PopupAction::Close,
            other => other,
        }
    }
}

/// Draws one template box with its name. Returns whether it was clicked.
fn show_widget(ui: &mut egui::Ui, widget: &TemplateWidget, palette: &Palette) -> bool {
    ui.vertical(|ui| {
        let (response, painter) = ui.allocate_painter(Vec2::splat(WIDGET_SIZE), Sense::click());
        painter.rect_stroke(response.rect, 0.0, Stroke::new(2.0, Color32::from_gray(20)));

        let grid = widget.preview.grid();
        let longest = grid.col_count().max(grid.row_count()) as f32;
        let cell_size = PREVIEW_CELL_SIZE.min((WIDGET_SIZE - 4.0) / longest);
        let size = Vec2::new(
            grid.col_count() as f32 * cell_size,
            grid.row_count() as f32 * cell_size,
        );
        let top_left = response.rect.center() - size / 2.0;
        let layout = GridLayout::for_grid(top_left, cell_size, grid);
        render::paint_grid(&painter, &layout, grid, palette);

        ui.label(&widget.name);
        response.clicked()
    })
    .inner
}
