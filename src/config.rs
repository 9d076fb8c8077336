// Centralize all configuration constants

/// Safe angular bounds for one axis plus its startup position, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AngleRange {
    pub min: i32,
    pub max: i32,
    pub init: i32,
}

impl AngleRange {
    pub const fn contains(&self, value: i32) -> bool {
        value >= self.min && value <= self.max
    }

    pub const fn clamp(&self, value: i32) -> i32 {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }
}

// Gyro sampling and calibration
pub const BIAS_SAMPLE_RATE_HZ: u32 = 200;
pub const INTEGRATION_RATE_HZ: u32 = 150;
pub const BIAS_DT: f32 = 1.0 / BIAS_SAMPLE_RATE_HZ as f32;
pub const INTEGRATION_DT: f32 = 1.0 / INTEGRATION_RATE_HZ as f32;

/// Bias accumulation stops once this many samples have been consumed.
pub const BIAS_SAMPLE_COUNT: u32 = 200;
/// Angle integration starts once the same counter passes this value.
/// Samples 151..=200 feed bias and integral concurrently.
pub const INTEGRATION_START_COUNT: u32 = 150;

// Delta normalization (raw-delta deployment variant)
pub const PITCH_DELTA_SCALE: i32 = 1;
pub const YAW_DELTA_SCALE: i32 = 1;

// Operator command ranges on the sensing unit
pub const OPERATOR_PITCH: AngleRange = AngleRange { min: 45, max: 110, init: 50 };
pub const OPERATOR_YAW: AngleRange = AngleRange { min: 20, max: 89, init: 55 };

// Safe ranges enforced at the actuator
pub const SERVO_PITCH: AngleRange = AngleRange { min: 20, max: 110, init: 110 };
pub const SERVO_YAW: AngleRange = AngleRange { min: 20, max: 160, init: 160 };

// Link parameters (fixed per deployment, not negotiated)
pub const PWM_FREQUENCY_HZ: u32 = 55;
pub const HOST_UART_BAUD: u32 = 115_200;
pub const LINK_UART_BAUD: u32 = 38_400;

// Buffer and channel sizes
pub const LINE_CAPACITY: usize = 100;
pub const FRAME_CAPACITY: usize = 16;
pub const LINK_CHANNEL_SIZE: usize = 8;

// Scripted gestures
pub const GESTURE_STEP_MS: u32 = 300;

/// Sent once at startup on the human-facing UART. Informational only.
pub const BOOT_BANNER: &str = "Waiting...\n";
