//! Surface transport
//!
//! The transport carries display frames and control values to the surface.
//! Calls arrive in protocol order and must reach the wire in that order.

use kontrol_hal::{MidiChannel, MidiOut};
use kontrol_protocol::{ControlIndex, DisplayFrame, MAX_SYSEX_SIZE};

use crate::error::TransportError;

/// Channel the surface listens on for control values (channel 16)
pub const KONTROL_MIDI_CHANNEL: MidiChannel = MidiChannel::new(15);

/// Sink for outgoing surface data
pub trait Transport {
    /// Send one display frame
    fn send_frame(&mut self, frame: &DisplayFrame) -> Result<(), TransportError>;

    /// Send the current value of a control index (LED/ring feedback)
    fn send_control_value(&mut self, index: ControlIndex, value: u8)
        -> Result<(), TransportError>;
}

/// Transport that encodes frames as SysEx and writes them to a MIDI port
pub struct SysExTransport<M> {
    port: M,
    channel: MidiChannel,
}

impl<M: MidiOut> SysExTransport<M> {
    /// Wrap a MIDI output port, using the surface's default channel
    pub fn new(port: M) -> Self {
        Self::with_channel(port, KONTROL_MIDI_CHANNEL)
    }

    /// Wrap a MIDI output port with an explicit control channel
    pub fn with_channel(port: M, channel: MidiChannel) -> Self {
        Self { port, channel }
    }

    /// Access the underlying port
    pub fn port(&self) -> &M {
        &self.port
    }

    /// Give the underlying port back
    pub fn into_inner(self) -> M {
        self.port
    }
}

impl<M: MidiOut> Transport for SysExTransport<M> {
    fn send_frame(&mut self, frame: &DisplayFrame) -> Result<(), TransportError> {
        let mut buf = [0u8; MAX_SYSEX_SIZE];
        let len = frame.to_frame()?.encode(&mut buf)?;
        self.port
            .send_sysex(&buf[..len])
            .map_err(|_| TransportError::Io)
    }

    fn send_control_value(
        &mut self,
        index: ControlIndex,
        value: u8,
    ) -> Result<(), TransportError> {
        self.port
            .send_control_change(self.channel, index, value)
            .map_err(|_| TransportError::Io)
    }
}
