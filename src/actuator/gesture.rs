//! Button-triggered scripted gestures.
//!
//! Each gesture is a fixed sequence of servo positions on one axis with a
//! fixed delay between steps. Execution is blocking; the unit's busy flag
//! stays set for the duration so local motion always wins over remote
//! commands in progress.

use crate::protocol::Axis;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GestureState {
    Idle,
    Nodding,
    Shaking,
}

pub(crate) struct Script {
    pub axis: Axis,
    pub steps: &'static [i32],
}

pub(crate) const NOD: Script = Script {
    axis: Axis::Pitch,
    steps: &[20, 80, 20, 80, 20],
};

pub(crate) const SHAKE: Script = Script {
    axis: Axis::Yaw,
    steps: &[60, 120, 60, 120, 120],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SERVO_PITCH, SERVO_YAW};

    #[test]
    fn scripts_stay_within_the_default_safe_ranges() {
        for &step in NOD.steps {
            assert!(SERVO_PITCH.contains(step));
        }
        for &step in SHAKE.steps {
            assert!(SERVO_YAW.contains(step));
        }
    }

    #[test]
    fn nod_is_pitch_and_shake_is_yaw() {
        assert_eq!(NOD.axis, Axis::Pitch);
        assert_eq!(SHAKE.axis, Axis::Yaw);
    }
}
