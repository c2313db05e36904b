//! Contains all simulation logic

mod field;
mod timeline;
pub mod variables;

use field::{FrameVectors, SpatialGrid};
use timeline::FrameTimeline;
use variables::{GRID_END, GRID_START, WaveParameters};

use crate::app::scene::{Axis, AxisLimits, Handle, Quiver, QuiverStyle, Scene};

const LEGEND_LABEL: &str = "wave";

// half-width used for an axis whose amplitude is zero
const FLAT_AXIS_HALF_SPAN: f64 = 0.05;

pub struct Simulation {
    params: WaveParameters,
    grid: SpatialGrid,
    timeline: FrameTimeline,
    artists: Vec<Handle>,
}

impl Simulation {
    pub fn new(params: WaveParameters) -> Self {
        Simulation {
            params,
            grid: SpatialGrid::new(),
            timeline: FrameTimeline::new(&params),
            artists: Vec::new(),
        }
    }

    pub fn frame_count(&self) -> usize {
        self.timeline.len()
    }

    /// Axis ranges that fit every vector the animation can draw.
    pub fn limits(&self) -> AxisLimits {
        let half_span = |amplitude: f64| {
            if amplitude == 0.0 {
                FLAT_AXIS_HALF_SPAN
            } else {
                amplitude.abs()
            }
        };
        let x = half_span(self.params.amplitude_x);
        let y = half_span(self.params.amplitude_y);
        AxisLimits {
            min: [-x, -y, GRID_START],
            max: [x, y, GRID_END],
        }
    }

    /// Redraws frame `frame` into the scene, replacing the previous frame's
    /// quivers, and returns the handles of the new ones.
    pub fn update(&mut self, frame: usize, scene: &mut Scene) -> &[Handle] {
        let removed = scene.remove_all(&self.artists);
        if removed != self.artists.len() {
            log::warn!(
                "{} quivers were already removed from the scene",
                self.artists.len() - removed
            );
        }
        self.artists.clear();

        let t = self.timeline.time(frame);
        let vectors = FrameVectors::evaluate(&self.params, &self.grid, t);

        let style = QuiverStyle::default();
        self.artists = vectors
            .iter()
            .enumerate()
            .map(|(j, (origin, vector))| {
                scene.add_quiver(Quiver {
                    origin,
                    vector,
                    label: (frame == 0 && j == 0).then(|| LEGEND_LABEL.to_owned()),
                    style,
                })
            })
            .collect();

        scene.set_title(format!("3D Wave (t = {t:.1} s)"));
        scene.view_init(Axis::Y, self.params.elevation, self.params.azimuth);

        if frame == 0 {
            scene.legend();
        }

        log::debug!("frame {frame} at t = {t:.3} s: {} quivers", scene.quiver_count());
        &self.artists
    }
}
