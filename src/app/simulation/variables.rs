use anyhow::{Result, ensure};

/// A tunable quantity and the value it takes when the user does not supply one.
pub struct Variable {
    pub default: f64,
    pub description: &'static str,
}

pub const WAVELENGTH: Variable = Variable {
    default: 1.0,
    description: "Wave length ℓ",
};
pub const ANGULAR_FREQUENCY: Variable = Variable {
    default: 1.0,
    description: "Angular frequency ω",
};
pub const AMPLITUDE_X: Variable = Variable {
    default: 0.02,
    description: "Amplitude Aₓ",
};
pub const AMPLITUDE_Y: Variable = Variable {
    default: 0.02,
    description: "Amplitude Aᵧ",
};
pub const DURATION: Variable = Variable {
    default: 10.0,
    description: "Total animation time (s)",
};
pub const TIME_STEP: Variable = Variable {
    default: 0.1,
    description: "Time step between frames (s)",
};

// propagation axis sampling
pub const GRID_START: f64 = 0.0;
pub const GRID_END: f64 = 5.0;
pub const GRID_SAMPLES: usize = 150;

// upper bound on animation frames for one run
pub const MAX_FRAMES: f64 = 1_000_000.0;

// added to the timeline's upper bound so the final sample survives rounding
pub const TIMELINE_EPSILON: f64 = 1e-8;

/// Wave constants for one run, resolved from the command line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveParameters {
    pub wavelength: f64,
    pub angular_frequency: f64,
    pub amplitude_x: f64,
    pub amplitude_y: f64,
    pub duration: f64,
    pub time_step: f64,
    pub elevation: Option<f64>,
    pub azimuth: Option<f64>,
}

impl Default for WaveParameters {
    fn default() -> Self {
        Self {
            wavelength: WAVELENGTH.default,
            angular_frequency: ANGULAR_FREQUENCY.default,
            amplitude_x: AMPLITUDE_X.default,
            amplitude_y: AMPLITUDE_Y.default,
            duration: DURATION.default,
            time_step: TIME_STEP.default,
            elevation: None,
            azimuth: None,
        }
    }
}

impl WaveParameters {
    /// Rejects values the field or the timeline cannot be built from.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.wavelength.is_finite() && self.wavelength != 0.0,
            "Wave length must be finite and non-zero (l={})",
            self.wavelength
        );
        ensure!(
            self.angular_frequency.is_finite(),
            "Angular frequency must be finite (w={})",
            self.angular_frequency
        );
        ensure!(
            self.amplitude_x.is_finite() && self.amplitude_y.is_finite(),
            "Amplitudes must be finite (Ax={}, Ay={})",
            self.amplitude_x,
            self.amplitude_y
        );
        ensure!(
            self.time_step.is_finite() && self.time_step > 0.0,
            "Time step must be positive (dt={})",
            self.time_step
        );
        ensure!(
            self.duration.is_finite() && self.duration >= 0.0,
            "Duration must not be negative (duration={})",
            self.duration
        );
        let frames = (self.duration + TIMELINE_EPSILON) / self.time_step;
        ensure!(
            frames.is_finite() && frames <= MAX_FRAMES,
            "Duration over time step gives too many frames (duration={}, dt={}, limit {})",
            self.duration,
            self.time_step,
            MAX_FRAMES
        );
        for (name, angle) in [("elev", self.elevation), ("azim", self.azimuth)] {
            if let Some(angle) = angle {
                ensure!(angle.is_finite(), "Camera {} must be finite ({})", name, angle);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let params = WaveParameters::default();
        assert!(params.validate().is_ok());
        assert_eq!(params.elevation, None);
        assert_eq!(params.azimuth, None);
    }

    #[test]
    fn test_zero_wavelength_rejected() {
        let params = WaveParameters {
            wavelength: 0.0,
            ..Default::default()
        };
        let err = params.validate().unwrap_err();
        assert!(err.to_string().contains("Wave length"));
    }

    #[test]
    fn test_negative_wavelength_allowed() {
        // only changes the direction of travel
        let params = WaveParameters {
            wavelength: -2.0,
            ..Default::default()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_time_step_must_be_positive() {
        for dt in [0.0, -0.1, f64::NAN] {
            let params = WaveParameters {
                time_step: dt,
                ..Default::default()
            };
            assert!(params.validate().is_err(), "dt={dt} accepted");
        }
    }

    #[test]
    fn test_negative_duration_rejected() {
        let params = WaveParameters {
            duration: -1.0,
            ..Default::default()
        };
        assert!(params.validate().is_err());

        let params = WaveParameters {
            duration: 0.0,
            ..Default::default()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_frame_count_bounded() {
        let params = WaveParameters {
            duration: 1e20,
            time_step: 1e-10,
            ..Default::default()
        };
        let err = params.validate().unwrap_err();
        assert!(err.to_string().contains("too many frames"));

        let params = WaveParameters {
            duration: f64::MAX,
            time_step: f64::MIN_POSITIVE,
            ..Default::default()
        };
        assert!(params.validate().is_err());

        // just under the limit still builds
        let params = WaveParameters {
            duration: 99_999.0,
            time_step: 0.1,
            ..Default::default()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_infinite_camera_angle_rejected() {
        let params = WaveParameters {
            azimuth: Some(f64::INFINITY),
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }
}
