//! Sensing-side pipeline: bias calibration, angle integration, delta
//! normalization and command framing, one pass per gyro sample.

pub mod calibration;
pub mod normalize;
pub mod orientation;

pub use calibration::{BiasCalibrator, Phase};
pub use normalize::{DeltaNormalizer, PanTilt};
pub use orientation::OrientationIntegrator;

use log::info;

use crate::config::{AngleRange, OPERATOR_PITCH, OPERATOR_YAW};
use crate::ipc::Frame;
use crate::protocol::{frame, Axis};

/// One three-axis angular rate sample (deg/s), produced per bus-completion
/// event and consumed whole.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RateSample {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Owns all sensing-side state. Drives the full per-sample pass and emits
/// the two wire frames for the link transmit driver.
pub struct SensingUnit {
    calibrator: BiasCalibrator,
    integrator: OrientationIntegrator,
    normalizer: DeltaNormalizer,
}

impl SensingUnit {
    pub const fn new() -> Self {
        Self::with_ranges(OPERATOR_PITCH, OPERATOR_YAW)
    }

    pub const fn with_ranges(pitch: AngleRange, yaw: AngleRange) -> Self {
        Self {
            calibrator: BiasCalibrator::new(),
            integrator: OrientationIntegrator::new(),
            normalizer: DeltaNormalizer::new(pitch, yaw),
        }
    }

    /// One bus-completion event: calibrate, de-bias, integrate, normalize,
    /// frame. Frames are emitted every sample, yaw first then pitch (the
    /// link transmit order); during calibration they simply carry the
    /// initial command values.
    pub fn on_sample(&mut self, sample: RateSample) -> [Frame; 2] {
        let was = self.calibrator.phase();
        let now = self.calibrator.update(&sample);
        if was == Phase::Calibrating && now == Phase::Active {
            info!(
                "gyro bias locked after {} samples: {:?}",
                self.calibrator.sample_count(),
                self.calibrator.bias()
            );
        }

        let rates = self.calibrator.debias(&sample);
        let angles = self
            .integrator
            .integrate(rates, self.calibrator.integration_enabled());
        let cmd = self.normalizer.normalize(angles);

        [frame(Axis::Yaw, cmd.yaw), frame(Axis::Pitch, cmd.pitch)]
    }

    pub fn command(&self) -> PanTilt {
        self.normalizer.command()
    }

    pub fn phase(&self) -> Phase {
        self.calibrator.phase()
    }
}

impl Default for SensingUnit {
    fn default() -> Self {
        Self::new()
    }
}
