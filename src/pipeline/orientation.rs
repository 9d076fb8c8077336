//! Drift-compensated angle integration.

use crate::config::INTEGRATION_DT;

/// Per-axis cumulative angle in degrees, kept in (-360, 360].
///
/// Long-lived state: one instance per sensing unit, mutated once per
/// sample. Never recomputed from scratch.
#[derive(Debug, Default)]
pub struct OrientationIntegrator {
    integral: [f32; 3],
}

impl OrientationIntegrator {
    pub const fn new() -> Self {
        Self { integral: [0.0; 3] }
    }

    /// Accumulate one sample of bias-subtracted rates (deg/s).
    ///
    /// `enabled` is the calibrator's integration gate; before it opens this
    /// is a no-op and not an error. After each accumulation the angle gets a
    /// single-step wrap: one ±360 correction, not a modulo.
    pub fn integrate(&mut self, rates: [f32; 3], enabled: bool) -> [i32; 3] {
        if enabled {
            for (angle, rate) in self.integral.iter_mut().zip(rates) {
                *angle += rate * INTEGRATION_DT;
                if *angle > 360.0 {
                    *angle -= 360.0;
                } else if *angle < -360.0 {
                    *angle += 360.0;
                }
            }
        }
        self.angles()
    }

    /// Current angles truncated toward zero, the wire representation.
    pub fn angles(&self) -> [i32; 3] {
        [
            self.integral[0] as i32,
            self.integral[1] as i32,
            self.integral[2] as i32,
        ]
    }
}
