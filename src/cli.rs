//! Command-line argument parsing.

use clap::Parser;

use crate::app::simulation::variables::{
    AMPLITUDE_X, AMPLITUDE_Y, ANGULAR_FREQUENCY, DURATION, TIME_STEP, WAVELENGTH, WaveParameters,
};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "polarization")]
#[command(
    about = "Animate a 3D quiver wave with adjustable parameters and camera.",
    long_about = None
)]
pub struct Args {
    #[arg(long, value_name = "L", default_value_t = WAVELENGTH.default,
          help = WAVELENGTH.description, allow_negative_numbers = true)]
    pub l: f64,

    #[arg(long, value_name = "W", default_value_t = ANGULAR_FREQUENCY.default,
          help = ANGULAR_FREQUENCY.description, allow_negative_numbers = true)]
    pub w: f64,

    #[arg(long = "Ax", value_name = "AX", default_value_t = AMPLITUDE_X.default,
          help = AMPLITUDE_X.description, allow_negative_numbers = true)]
    pub ax: f64,

    #[arg(long = "Ay", value_name = "AY", default_value_t = AMPLITUDE_Y.default,
          help = AMPLITUDE_Y.description, allow_negative_numbers = true)]
    pub ay: f64,

    #[arg(long, value_name = "DURATION", default_value_t = DURATION.default,
          help = DURATION.description, allow_negative_numbers = true)]
    pub duration: f64,

    #[arg(long, value_name = "DT", default_value_t = TIME_STEP.default,
          help = TIME_STEP.description, allow_negative_numbers = true)]
    pub dt: f64,

    /// Camera elevation angle (deg)
    #[arg(long, value_name = "ELEV", allow_negative_numbers = true)]
    pub elev: Option<f64>,

    /// Camera azimuth angle (deg)
    #[arg(long, value_name = "AZIM", allow_negative_numbers = true)]
    pub azim: Option<f64>,
}

impl Args {
    pub fn wave_parameters(&self) -> WaveParameters {
        WaveParameters {
            wavelength: self.l,
            angular_frequency: self.w,
            amplitude_x: self.ax,
            amplitude_y: self.ay,
            duration: self.duration,
            time_step: self.dt,
            elevation: self.elev,
            azimuth: self.azim,
        }
    }
}
