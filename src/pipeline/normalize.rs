//! Delta-based normalization of integrated angles into operator commands.
//!
//! Successive integrated-angle readings become deltas, accumulated into the
//! running pitch/yaw command and saturated into the operator range. Axis X
//! maps to pitch and axis Z to yaw; axis Y is unused in this deployment.
//! Scale factors live in [`crate::config`] as named constants (this build
//! ships the raw-delta variant, scale 1 on both axes).

use crate::config::{AngleRange, PITCH_DELTA_SCALE, YAW_DELTA_SCALE};

/// Current pan/tilt command values, always within their operator ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanTilt {
    pub pitch: i32,
    pub yaw: i32,
}

pub struct DeltaNormalizer {
    prev: [i32; 3],
    pitch_range: AngleRange,
    yaw_range: AngleRange,
    command: PanTilt,
}

impl DeltaNormalizer {
    pub const fn new(pitch_range: AngleRange, yaw_range: AngleRange) -> Self {
        Self {
            prev: [0; 3],
            pitch_range,
            yaw_range,
            command: PanTilt {
                pitch: pitch_range.init,
                yaw: yaw_range.init,
            },
        }
    }

    /// Fold one integrated-angle reading into the running command.
    ///
    /// Saturates, never rejects: out-of-range motion pins the command at
    /// the bound. The reading becomes "previous" for the next call.
    pub fn normalize(&mut self, axes: [i32; 3]) -> PanTilt {
        let delta_pitch = (axes[0] - self.prev[0]) * PITCH_DELTA_SCALE;
        let delta_yaw = (axes[2] - self.prev[2]) * YAW_DELTA_SCALE;

        self.command.pitch = self.pitch_range.clamp(self.command.pitch + delta_pitch);
        self.command.yaw = self.yaw_range.clamp(self.command.yaw + delta_yaw);

        self.prev = axes;
        self.command
    }

    pub fn command(&self) -> PanTilt {
        self.command
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{OPERATOR_PITCH, OPERATOR_YAW};

    fn normalizer() -> DeltaNormalizer {
        DeltaNormalizer::new(OPERATOR_PITCH, OPERATOR_YAW)
    }

    #[test]
    fn starts_at_the_initial_command() {
        let n = normalizer();
        assert_eq!(
            n.command(),
            PanTilt {
                pitch: OPERATOR_PITCH.init,
                yaw: OPERATOR_YAW.init
            }
        );
    }

    #[test]
    fn deltas_accumulate_into_the_command() {
        let mut n = normalizer();
        let cmd = n.normalize([10, 0, -5]);
        assert_eq!(cmd.pitch, OPERATOR_PITCH.init + 10);
        assert_eq!(cmd.yaw, OPERATOR_YAW.init - 5);
        // same reading again: zero delta, command holds
        let cmd = n.normalize([10, 0, -5]);
        assert_eq!(cmd.pitch, OPERATOR_PITCH.init + 10);
        assert_eq!(cmd.yaw, OPERATOR_YAW.init - 5);
    }

    #[test]
    fn monotonic_increase_pins_at_max_and_stays() {
        let mut n = normalizer();
        for step in 1..40 {
            let cmd = n.normalize([step * 10, 0, step * 10]);
            assert!(cmd.pitch <= OPERATOR_PITCH.max);
            assert!(cmd.yaw <= OPERATOR_YAW.max);
        }
        assert_eq!(n.command().pitch, OPERATOR_PITCH.max);
        assert_eq!(n.command().yaw, OPERATOR_YAW.max);
    }

    #[test]
    fn monotonic_decrease_pins_at_min_and_stays() {
        let mut n = normalizer();
        for step in 1..40 {
            let cmd = n.normalize([step * -10, 0, step * -10]);
            assert!(cmd.pitch >= OPERATOR_PITCH.min);
            assert!(cmd.yaw >= OPERATOR_YAW.min);
        }
        assert_eq!(n.command().pitch, OPERATOR_PITCH.min);
        assert_eq!(n.command().yaw, OPERATOR_YAW.min);
    }

    #[test]
    fn axis_y_is_ignored() {
        let mut n = normalizer();
        let before = n.command();
        assert_eq!(n.normalize([0, 999, 0]), before);
    }

    #[test]
    fn recovery_after_pinning_walks_back_from_the_bound() {
        let mut n = normalizer();
        n.normalize([1000, 0, 0]); // pitch pinned at max
        assert_eq!(n.command().pitch, OPERATOR_PITCH.max);
        let cmd = n.normalize([990, 0, 0]); // delta -10 from the bound
        assert_eq!(cmd.pitch, OPERATOR_PITCH.max - 10);
    }
}
