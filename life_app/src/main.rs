// main.rs - Interactive Game of Life window

use clap::Parser;
use eframe::egui;

mod app;
mod args;
mod loader;
mod popup;
mod render;
mod ui;

use app::LifeApp;
use args::Args;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let app = LifeApp::new(&args)?;
    let extent = app.grid_extent();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([extent.x, extent.y + ui::STATUS_BAR_HEIGHT]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Box::new(app)),
    )
    .map_err(|err| anyhow::anyhow!("window error: {err}"))
}
