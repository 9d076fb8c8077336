#![cfg_attr(not(test), no_std)]

//! Gyro-driven pan/tilt turret command pipeline.
//!
//! The sensing unit turns raw gyro rate samples into clamped pitch/yaw
//! commands and frames them as one-line ASCII messages; the actuator unit
//! decodes those lines and drives two PWM servo channels with saturation
//! guards. Hardware (I2C sensor reads, UART bytes, button edges) enters as
//! discrete [`ipc::Event`]s, so the whole pipeline runs single-threaded and
//! host-testable.

pub mod actuator;
pub mod config;
pub mod ipc;
pub mod pipeline;
pub mod protocol;

pub use actuator::ActuatorUnit;
pub use ipc::{Button, Event, Frame};
pub use pipeline::{RateSample, SensingUnit};
