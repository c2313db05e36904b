//! Contains all application code, including application state and drawing logic

mod animation;
mod canvas;
mod scene;
pub mod simulation;

use animation::{FRAME_INTERVAL, FrameClock};
use canvas::Canvas;
use scene::Scene;
use simulation::Simulation;
use simulation::variables::WaveParameters;

use egui::{Sense, Style};
use std::time::Instant;

// camera degrees turned per point of mouse drag
const ROTATION_SPEED: f64 = 0.5;

pub struct PolarizationApp {
    simulation: Simulation,
    scene: Scene,
    clock: FrameClock,
}

impl PolarizationApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, params: WaveParameters) -> Self {
        let simulation = Simulation::new(params);
        let scene = Scene::new(simulation.limits());
        let clock = FrameClock::new(simulation.frame_count(), FRAME_INTERVAL);
        Self {
            simulation,
            scene,
            clock,
        }
    }
}

impl eframe::App for PolarizationApp {
    /// Called each time the UI needs repainting
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        if let Some(frame) = self.clock.poll(now) {
            self.simulation.update(frame, &mut self.scene);
        }

        // draws the scene in the main panel of the window
        let style = Style::default();
        egui::CentralPanel::default()
            .frame(egui::Frame::canvas(&style))
            .show(ctx, |ui| {
                let canvas_extent = ui.max_rect();

                let drag = ui.interact(canvas_extent, egui::Id::new("canvas-drag"), Sense::drag());
                if drag.dragged() {
                    let delta = drag.drag_delta();
                    self.scene.rotate(
                        delta.y as f64 * ROTATION_SPEED,
                        -delta.x as f64 * ROTATION_SPEED,
                    );
                }

                let canvas = Canvas::new(ui, canvas_extent, &self.scene);
                canvas.draw_box();
                canvas.draw_axis_labels();
                canvas.draw_quivers(&self.scene);
                canvas.draw_title(self.scene.title());
                canvas.draw_legend(&self.scene);
            });

        ctx.request_repaint_after(self.clock.until_next(Instant::now()));
    }
}
