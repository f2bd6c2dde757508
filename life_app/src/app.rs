// app.rs - Application state and input dispatch

use crate::args::Args;
use crate::loader::TemplateLoader;
use crate::popup::TemplatePopup;
use crate::render::Palette;
use anyhow::{Context, anyhow};
use egui::Pos2;
use life_core::{GameOfLife, Grid, GridSize, Pattern, TEMPLATE_PADDING, patterns};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::{Duration, Instant};

/// Template following the pointer until it is placed on the grid.
pub struct TemplatePreview {
    pub pattern: Pattern,
    pub grid: Grid,
}

impl TemplatePreview {
    pub fn new(pattern: Pattern) -> Self {
        let grid = Grid::from_pattern((0, 0), &pattern);
        Self { pattern, grid }
    }
}

pub enum MenuAction {
    StartStop,
    Templates,
    Clear,
}

pub struct LifeApp {
    pub game: GameOfLife,
    pub cell_size: f32,
    pub palette: Palette,
    pub context_menu: Option<Pos2>,
    pub template: Option<TemplatePreview>,
    pub popup: Option<TemplatePopup>,
    pub templates: TemplateLoader,
    pub last_frame: Instant,
}

impl LifeApp {
    pub fn new(args: &Args) -> anyhow::Result<Self> {
        let tick = Duration::from_millis(args.tick_ms);
        let seed = args.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);

        let grid = if let Some(path) = &args.start_grid {
            let pattern = Pattern::load(path)
                .with_context(|| format!("loading start grid {}", path.display()))?;
            log::info!("starting from {}", path.display());
            Grid::from_pattern((0, 0), &pattern.padded(TEMPLATE_PADDING))
        } else {
            let size = GridSize::from_pixels(args.width, args.height, args.cell_size)?;
            match &args.pattern {
                Some(name) => {
                    let pattern =
                        patterns::find(name).ok_or_else(|| anyhow!("unknown pattern {name:?}"))?;
                    centered(size, &pattern)
                }
                None => {
                    log::info!("random start grid, seed {seed}");
                    Grid::random((0, 0), size, &mut rng)
                }
            }
        };

        let mut game = GameOfLife::new(grid).with_tick(tick);
        if args.paused {
            game.pause();
        }
        let templates = TemplateLoader::spawn(args.templates.clone())
            .context("starting template loader")?;
        Ok(Self::with_game(game, args.cell_size as f32, templates))
    }

    pub fn with_game(game: GameOfLife, cell_size: f32, templates: TemplateLoader) -> Self {
        Self {
            game,
            cell_size,
            palette: Palette::default(),
            context_menu: None,
            template: None,
            popup: None,
            templates,
            last_frame: Instant::now(),
        }
    }

    /// Pixel size of the simulation area.
    pub fn grid_extent(&self) -> egui::Vec2 {
        let grid = self.game.grid();
        egui::vec2(
            grid.col_count() as f32 * self.cell_size,
            grid.row_count() as f32 * self.cell_size,
        )
    }

    /// Left click on cell `(col, row)`.
    ///
    /// A click that closes the context menu does not edit the grid. An active
    /// template is stamped with its bottom-left cell under the pointer.
    pub fn left_click(&mut self, col: i32, row: i32) {
        let menu_was_open = self.context_menu.take().is_some();
        if let Some(preview) = self.template.take() {
            let changed = self.game.stamp(col, row, &preview.pattern);
            log::info!("placed template at ({col}, {row}), {changed} cells changed");
        } else if !menu_was_open {
            if let Err(err) = self.game.switch_cell_at(col, row) {
                log::debug!("ignoring click: {err}");
            }
        }
    }

    /// Left drag over cell `(col, row)`; fills cells, or kills them with Ctrl.
    pub fn drag(&mut self, col: i32, row: i32, kill: bool) {
        if self.template.is_some() {
            return;
        }
        if let Err(err) = self.game.set_cell_state_at(col, row, !kill) {
            log::debug!("ignoring drag: {err}");
        }
    }

    pub fn open_context_menu(&mut self, pos: Pos2) {
        self.context_menu = Some(pos);
    }

    pub fn pointer_moved(&mut self, col: i32, row: i32) {
        if let Some(preview) = &mut self.template {
            preview.grid.move_to(col, row);
        }
    }

    pub fn menu_action(&mut self, action: MenuAction) {
        self.context_menu = None;
        match action {
            MenuAction::StartStop => {
                self.game.start_stop();
                log::info!("simulation {}", if self.game.is_running() { "started" } else { "stopped" });
            }
            MenuAction::Templates => self.show_popup(),
            MenuAction::Clear => {
                self.game.clear();
                log::info!("grid cleared");
            }
        }
    }

    /// Opens the template popup; the simulation stops while choosing.
    pub fn show_popup(&mut self) {
        self.game.pause();
        self.popup = Some(TemplatePopup::new(self.game.tick()));
    }

    pub fn choose_template(&mut self, pattern: Pattern) {
        log::info!("template selected ({}x{})", pattern.cols(), pattern.rows());
        self.popup = None;
        self.template = Some(TemplatePreview::new(pattern));
    }

    /// Feeds elapsed time to the main simulation and any popup previews.
    pub fn advance(&mut self, elapsed: Duration) {
        self.game.advance(elapsed);
        if let Some(popup) = &mut self.popup {
            if !popup.is_loaded() {
                if let Some(collections) = self.templates.poll() {
                    popup.set_collections(collections.to_vec());
                }
            }
            popup.advance(elapsed);
        }
    }
}

/// Empty grid of `size` with `pattern` stamped in the middle.
fn centered(size: GridSize, pattern: &Pattern) -> Grid {
    let mut game = GameOfLife::new(Grid::empty((0, 0), size));
    let col = (size.cols as i32 - pattern.cols() as i32) / 2;
    let row = (size.rows as i32 - pattern.rows() as i32) / 2;
    game.stamp(col, row, pattern);
    game.grid().clone()
}
