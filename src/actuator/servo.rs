//! Servo output channels with saturation guards.
//!
//! One channel per axis over an `embedded-hal` PWM pin. The pin's max duty
//! is the precomputed 55 Hz period count; an in-range angle command becomes
//! a pulse-width count via `value * load / 1000`.

use embedded_hal::PwmPin;
use thiserror::Error;

use crate::config::AngleRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ServoError {
    /// Command outside the axis's safe range. No actuation happened; the
    /// previous position is held. Better to ignore than to slam the mount.
    #[error("angle {value} outside safe range [{min}, {max}]")]
    OutOfRange { value: i32, min: i32, max: i32 },
}

/// Pulse-width count for one in-range angle against the PWM period count.
#[inline]
pub fn pulse_counts(value: i32, load: u32) -> u32 {
    value as u32 * load / 1000
}

pub struct ServoChannel<P: PwmPin<Duty = u32>> {
    pin: P,
    range: AngleRange,
    position: i32,
}

impl<P: PwmPin<Duty = u32>> ServoChannel<P> {
    /// Enable the output and drive it to the range's initial position.
    pub fn new(mut pin: P, range: AngleRange) -> Self {
        pin.enable();
        let load = pin.get_max_duty();
        pin.set_duty(pulse_counts(range.init, load));
        Self {
            pin,
            range,
            position: range.init,
        }
    }

    /// Range-check and drive. Out-of-range values are rejected whole: the
    /// pulse width is untouched and the prior position stays current.
    pub fn apply(&mut self, value: i32) -> Result<(), ServoError> {
        if !self.range.contains(value) {
            return Err(ServoError::OutOfRange {
                value,
                min: self.range.min,
                max: self.range.max,
            });
        }
        let load = self.pin.get_max_duty();
        self.pin.set_duty(pulse_counts(value, load));
        self.position = value;
        Ok(())
    }

    /// Last successfully applied angle.
    pub fn position(&self) -> i32 {
        self.position
    }

    pub fn range(&self) -> AngleRange {
        self.range
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    // 80 MHz / 64 prescaler / 55 Hz, the period count of the deployed board
    const LOAD: u32 = 22_726;

    struct MockPwm {
        duty: Rc<Cell<u32>>,
        enabled: Rc<Cell<bool>>,
    }

    impl MockPwm {
        fn new() -> (Self, Rc<Cell<u32>>, Rc<Cell<bool>>) {
            let duty = Rc::new(Cell::new(0));
            let enabled = Rc::new(Cell::new(false));
            (
                Self {
                    duty: duty.clone(),
                    enabled: enabled.clone(),
                },
                duty,
                enabled,
            )
        }
    }

    impl PwmPin for MockPwm {
        type Duty = u32;

        fn disable(&mut self) {
            self.enabled.set(false);
        }

        fn enable(&mut self) {
            self.enabled.set(true);
        }

        fn get_duty(&self) -> u32 {
            self.duty.get()
        }

        fn get_max_duty(&self) -> u32 {
            LOAD
        }

        fn set_duty(&mut self, duty: u32) {
            self.duty.set(duty);
        }
    }

    const RANGE: AngleRange = AngleRange {
        min: 20,
        max: 110,
        init: 110,
    };

    #[test]
    fn new_enables_and_centers_the_output() {
        let (pin, duty, enabled) = MockPwm::new();
        let servo = ServoChannel::new(pin, RANGE);
        assert!(enabled.get());
        assert_eq!(duty.get(), pulse_counts(110, LOAD));
        assert_eq!(servo.position(), 110);
    }

    #[test]
    fn in_range_command_updates_the_pulse_width() {
        let (pin, duty, _) = MockPwm::new();
        let mut servo = ServoChannel::new(pin, RANGE);
        servo.apply(95).unwrap();
        assert_eq!(duty.get(), 95 * LOAD / 1000);
        assert_eq!(servo.position(), 95);
    }

    #[test]
    fn out_of_range_is_rejected_and_prior_position_held() {
        let (pin, duty, _) = MockPwm::new();
        let mut servo = ServoChannel::new(pin, RANGE);
        servo.apply(95).unwrap();
        let before = duty.get();

        assert_eq!(
            servo.apply(200),
            Err(ServoError::OutOfRange {
                value: 200,
                min: 20,
                max: 110
            })
        );
        assert_eq!(servo.apply(19), Err(ServoError::OutOfRange {
            value: 19,
            min: 20,
            max: 110
        }));
        assert_eq!(duty.get(), before);
        assert_eq!(servo.position(), 95);
    }

    #[test]
    fn bounds_themselves_are_accepted() {
        let (pin, _, _) = MockPwm::new();
        let mut servo = ServoChannel::new(pin, RANGE);
        servo.apply(20).unwrap();
        servo.apply(110).unwrap();
        assert_eq!(servo.position(), 110);
    }

    #[test]
    fn pulse_math_matches_the_period_derivation() {
        // identical conversion for any axis: value * load / 1000
        assert_eq!(pulse_counts(55, LOAD), 55 * LOAD / 1000);
        assert_eq!(pulse_counts(160, LOAD), 160 * LOAD / 1000);
        assert_eq!(pulse_counts(0, LOAD), 0);
    }
}
