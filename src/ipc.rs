use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex as RawMutex, channel::Channel};

use crate::config::{FRAME_CAPACITY, LINK_CHANNEL_SIZE};
use crate::pipeline::RateSample;

/// One framed command line, ready for the link transmit driver.
pub type Frame = heapless::Vec<u8, FRAME_CAPACITY>;

pub type LinkChannel = Channel<RawMutex, Frame, LINK_CHANNEL_SIZE>;

/* Framed commands awaiting transmission over the serial link */
pub static LINK_CH: LinkChannel = Channel::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    A,
    B,
}

/// Interrupt sources modeled as discrete messages. The driver layer turns
/// bus-completion, serial-receive and button-edge interrupts into these and
/// hands them to the owning unit, one at a time.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    SampleReady(RateSample),
    ByteReceived(u8),
    ButtonEdge(Button),
}
