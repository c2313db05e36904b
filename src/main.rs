//! Initialises the application

mod app;
mod cli;
use crate::app::PolarizationApp;

use anyhow::anyhow;
use clap::Parser;
use egui::{Pos2, Style, Vec2, Visuals, pos2, vec2};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = cli::Args::parse();
    let params = args.wave_parameters();
    params.validate()?;
    log::info!("Resolved wave parameters: {params:?}");

    // 8 by 6 inch figure at 100 dpi
    const WINDOW_POSITION: Pos2 = pos2(50.0, 50.0);
    const WINDOW_SIZE: Vec2 = vec2(800.0, 600.0);
    const MIN_WINDOW_SIZE: Vec2 = vec2(100.0, 100.0);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size(MIN_WINDOW_SIZE)
            .with_position(WINDOW_POSITION),
        ..Default::default()
    };

    eframe::run_native(
        "Polarization",
        native_options,
        Box::new(move |cc| {
            let style = Style {
                visuals: Visuals::dark(),
                ..Style::default()
            };
            cc.egui_ctx.set_style(style);
            Ok(Box::new(PolarizationApp::new(cc, params)))
        }),
    )
    .map_err(|e| anyhow!("Failed to run the viewer: {e}"))
}
