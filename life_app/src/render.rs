// render.rs - Painting grids with egui

use egui::{Color32, Painter, Pos2, Rect, Vec2};
use life_core::Grid;

#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub live: Color32,
    pub dead: Color32,
    pub line: Color32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            live: Color32::WHITE,
            dead: Color32::BLACK,
            line: Color32::from_gray(180),
        }
    }
}

/// Maps absolute cell coordinates to screen space and back.
///
/// Cell rows grow upward while screen y grows downward, so the top edge of
/// `rect` shows the highest row.
#[derive(Clone, Copy, Debug)]
pub struct GridLayout {
    pub rect: Rect,
    pub cell_size: f32,
    pub origin: (i32, i32),
    pub rows: usize,
}

impl GridLayout {
    /// Layout placing `grid` with its top-left corner at `top_left`.
    pub fn for_grid(top_left: Pos2, cell_size: f32, grid: &Grid) -> Self {
        let size = Vec2::new(
            grid.col_count() as f32 * cell_size,
            grid.row_count() as f32 * cell_size,
        );
        Self {
            rect: Rect::from_min_size(top_left, size),
            cell_size,
            origin: grid.origin(),
            rows: grid.row_count(),
        }
    }

    pub fn cell_rect(&self, x: i32, y: i32) -> Rect {
        let col = (x - self.origin.0) as f32;
        let row_from_top = (self.origin.1 + self.rows as i32 - 1 - y) as f32;
        Rect::from_min_size(
            self.rect.min + Vec2::new(col * self.cell_size, row_from_top * self.cell_size),
            Vec2::splat(self.cell_size),
        )
    }

    /// Absolute coordinates of the cell under `pos`. May lie outside the grid.
    pub fn cell_at(&self, pos: Pos2) -> (i32, i32) {
        let col = ((pos.x - self.rect.min.x) / self.cell_size).floor() as i32;
        let row_from_top = ((pos.y - self.rect.min.y) / self.cell_size).floor() as i32;
        (
            self.origin.0 + col,
            self.origin.1 + self.rows as i32 - 1 - row_from_top,
        )
    }
}

/// Draws one cell: a grey outline with a one pixel inset in the state color.
pub fn paint_cell(painter: &Painter, rect: Rect, fill: Color32, line: Color32) {
    painter.rect_filled(rect, 0.0, line);
    painter.rect_filled(rect.shrink(1.0), 0.0, fill);
}

pub fn paint_grid(painter: &Painter, layout: &GridLayout, grid: &Grid, palette: &Palette) {
    for cell in grid.cells() {
        let fill = if cell.is_alive() { palette.live } else { palette.dead };
        paint_cell(painter, layout.cell_rect(cell.x(), cell.y()), fill, palette.line);
    }
}

/// Draws a floating template preview translucently over the main grid.
pub fn paint_overlay(painter: &Painter, layout: &GridLayout, grid: &Grid, palette: &Palette) {
    let fade = |color: Color32| Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), 160);
    for cell in grid.cells() {
        let fill = if cell.is_alive() { palette.live } else { palette.dead };
        paint_cell(painter, layout.cell_rect(cell.x(), cell.y()), fade(fill), fade(palette.line));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn layout() -> GridLayout {
        GridLayout {
            rect: Rect::from_min_size(pos2(10.0, 20.0), Vec2::new(70.0, 35.0)),
            cell_size: 7.0,
            origin: (0, 0),
            rows: 5,
        }
    }

    #[test]
    fn bottom_row_is_drawn_last() {
        let layout = layout();
        assert_eq!(layout.cell_rect(0, 4).min, pos2(10.0, 20.0));
        assert_eq!(layout.cell_rect(0, 0).min, pos2(10.0, 48.0));
        assert_eq!(layout.cell_rect(9, 0).max, pos2(80.0, 55.0));
    }

    #[test]
    fn pointer_maps_back_to_cell() {
        let layout = layout();
        for (x, y) in [(0, 0), (3, 2), (9, 4)] {
            assert_eq!(layout.cell_at(layout.cell_rect(x, y).center()), (x, y));
        }
        assert_eq!(layout.cell_at(pos2(10.0, 54.9)), (0, 0));
        assert_eq!(layout.cell_at(pos2(5.0, 60.0)), (-1, -1));
    }

    #[test]
    fn shifted_origin_is_respected() {
        let layout = GridLayout {
            origin: (4, 2),
            ..layout()
        };
        assert_eq!(layout.cell_rect(4, 6).min, pos2(10.0, 20.0));
        assert_eq!(layout.cell_at(pos2(18.0, 21.0)), (5, 6));
    }
}
