use ndarray::Array1;

use super::variables::{TIMELINE_EPSILON, WaveParameters};

/// Time stamps of every animation frame, from zero up to the duration.
pub struct FrameTimeline {
    stamps: Array1<f64>,
}

impl FrameTimeline {
    pub fn new(params: &WaveParameters) -> Self {
        FrameTimeline {
            stamps: Array1::range(0.0, params.duration + TIMELINE_EPSILON, params.time_step),
        }
    }

    pub(super) fn len(&self) -> usize {
        self.stamps.len()
    }

    pub fn time(&self, frame: usize) -> f64 {
        self.stamps[frame]
    }
}
