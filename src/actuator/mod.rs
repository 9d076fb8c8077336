//! Actuator-side unit: serial command decode, saturation-guarded servo
//! drive, and button-triggered gestures.

pub mod gesture;
pub mod servo;

pub use gesture::GestureState;
pub use servo::{pulse_counts, ServoChannel, ServoError};

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::PwmPin;
use log::{debug, warn};
use portable_atomic::{AtomicBool, Ordering};

use crate::config::{AngleRange, GESTURE_STEP_MS, SERVO_PITCH, SERVO_YAW};
use crate::ipc::Button;
use crate::protocol::{Axis, Decoder, LineError, ParsedCommand};

use gesture::Script;

/// Owns the line decoder, both servo channels and the gesture executor.
///
/// The busy flag has one writer (the gesture path) and one reader (the
/// serial path). Bytes that arrive while a gesture runs are dropped without
/// buffering; when busy clears the decoder is reset, so the next frame
/// always parses from scratch. If busy were held forever the link would
/// starve — that matches the source design and is left as is.
pub struct ActuatorUnit<PP, PY, D>
where
    PP: PwmPin<Duty = u32>,
    PY: PwmPin<Duty = u32>,
    D: DelayMs<u32>,
{
    decoder: Decoder,
    pitch: ServoChannel<PP>,
    yaw: ServoChannel<PY>,
    delay: D,
    busy: AtomicBool,
    gesture: GestureState,
}

impl<PP, PY, D> ActuatorUnit<PP, PY, D>
where
    PP: PwmPin<Duty = u32>,
    PY: PwmPin<Duty = u32>,
    D: DelayMs<u32>,
{
    pub fn new(pitch_pin: PP, yaw_pin: PY, delay: D) -> Self {
        Self::with_ranges(pitch_pin, yaw_pin, delay, SERVO_PITCH, SERVO_YAW)
    }

    pub fn with_ranges(
        pitch_pin: PP,
        yaw_pin: PY,
        delay: D,
        pitch_range: AngleRange,
        yaw_range: AngleRange,
    ) -> Self {
        Self {
            decoder: Decoder::new(),
            pitch: ServoChannel::new(pitch_pin, pitch_range),
            yaw: ServoChannel::new(yaw_pin, yaw_range),
            delay,
            busy: AtomicBool::new(false),
            gesture: GestureState::Idle,
        }
    }

    /// One serial-receive event. Rejected and malformed frames are dropped
    /// silently toward the link; nothing here is fatal.
    pub fn on_byte(&mut self, byte: u8) {
        if self.busy.load(Ordering::Acquire) {
            return;
        }
        match self.decoder.feed(byte) {
            Ok(Some(cmd)) => self.dispatch(cmd),
            Ok(None) => {}
            Err(LineError::Overflow) => warn!("serial line overflowed, frame dropped"),
        }
    }

    fn dispatch(&mut self, cmd: ParsedCommand) {
        let result = match cmd.axis {
            Axis::Pitch => self.pitch.apply(cmd.value),
            Axis::Yaw => self.yaw.apply(cmd.value),
        };
        if let Err(e) = result {
            debug!("command rejected: {}", e);
        }
    }

    /// One falling-edge button event: run the mapped gesture to completion.
    pub fn on_button(&mut self, button: Button) {
        let (state, script) = match button {
            Button::A => (GestureState::Nodding, gesture::NOD),
            Button::B => (GestureState::Shaking, gesture::SHAKE),
        };
        self.busy.store(true, Ordering::Release);
        self.gesture = state;

        self.run_script(&script);

        self.gesture = GestureState::Idle;
        // drop anything that raced the gesture so the next frame starts clean
        self.decoder.reset();
        self.busy.store(false, Ordering::Release);
    }

    fn run_script(&mut self, script: &Script) {
        for (i, &position) in script.steps.iter().enumerate() {
            let result = match script.axis {
                Axis::Pitch => self.pitch.apply(position),
                Axis::Yaw => self.yaw.apply(position),
            };
            if let Err(e) = result {
                // scripts are in range for the shipped configuration; a
                // narrowed custom range just skips the offending step
                warn!("gesture step rejected: {}", e);
            }
            if i + 1 < script.steps.len() {
                self.delay.delay_ms(GESTURE_STEP_MS);
            }
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    pub fn gesture(&self) -> GestureState {
        self.gesture
    }

    pub fn pitch_position(&self) -> i32 {
        self.pitch.position()
    }

    pub fn yaw_position(&self) -> i32 {
        self.yaw.position()
    }
}
