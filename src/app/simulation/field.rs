//! Closed-form transverse displacement of a wave travelling along z

use ndarray::{Array1, Zip};
use static_assertions::const_assert;
use std::f64::consts::PI;

use super::variables::{GRID_END, GRID_SAMPLES, GRID_START, WaveParameters};

const_assert!(GRID_SAMPLES >= 2);
const_assert!(GRID_END > GRID_START);

/// Phase of the wave at time `t` and position `z`.
fn phase(params: &WaveParameters, t: f64, z: f64) -> f64 {
    params.angular_frequency * t - z * 2.0 * PI / params.wavelength
}

/// Displacement `(dx, dy, dz)` at a single point.
///
/// `dx` follows a cosine and `dy` a sine of the same phase, so the tip of the
/// vector traces an ellipse (a circle when `Ax == Ay`) in the transverse plane.
pub fn displacement(params: &WaveParameters, t: f64, z: f64) -> [f64; 3] {
    let phi = phase(params, t, z);
    [
        params.amplitude_x * phi.cos(),
        params.amplitude_y * phi.sin(),
        0.0,
    ]
}

/// Sampling positions along the propagation axis.
pub struct SpatialGrid {
    points: Array1<f64>,
}

impl Default for SpatialGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl SpatialGrid {
    pub fn new() -> Self {
        SpatialGrid {
            points: Array1::linspace(GRID_START, GRID_END, GRID_SAMPLES),
        }
    }

    pub fn points(&self) -> &Array1<f64> {
        &self.points
    }
}

/// Every displacement vector of one frame, one per grid sample.
pub struct FrameVectors {
    z: Array1<f64>,
    dx: Array1<f64>,
    dy: Array1<f64>,
    dz: Array1<f64>,
}

impl FrameVectors {
    /// Evaluates the field across the whole grid at time `t`.
    pub fn evaluate(params: &WaveParameters, grid: &SpatialGrid, t: f64) -> Self {
        let z = grid.points().clone();
        let mut dx = Array1::<f64>::zeros(z.len());
        let mut dy = Array1::<f64>::zeros(z.len());
        Zip::from(&mut dx)
            .and(&mut dy)
            .and(&z)
            .for_each(|dx, dy, &z| {
                [*dx, *dy, _] = displacement(params, t, z);
            });
        let dz = Array1::zeros(z.len());
        FrameVectors { z, dx, dy, dz }
    }

    pub(super) fn len(&self) -> usize {
        self.z.len()
    }

    /// `(origin, displacement)` pairs in grid order.
    pub fn iter(&self) -> impl Iterator<Item = ([f64; 3], [f64; 3])> + '_ {
        (0..self.len()).map(|i| {
            (
                [0.0, 0.0, self.z[i]],
                [self.dx[i], self.dy[i], self.dz[i]],
            )
        })
    }
}
