//! MIDI port abstractions
//!
//! Provides traits for sending and receiving MIDI messages that can be
//! implemented by platform-specific backends.

/// Status nibble of a control change message
const STATUS_CONTROL_CHANGE: u8 = 0xB0;

/// MIDI channel (0-15)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MidiChannel(u8);

impl MidiChannel {
    /// Create a channel, wrapping values above 15
    pub const fn new(channel: u8) -> Self {
        Self(channel & 0x0F)
    }

    /// Channel number (0-15)
    pub const fn index(self) -> u8 {
        self.0
    }
}

/// MIDI output port
///
/// Messages are written in call order. Implementations must not reorder
/// or coalesce them; the surface relies on arrival order.
pub trait MidiOut {
    /// Error type for send operations
    type Error;

    /// Send a complete System Exclusive message, `F0` and `F7` included
    fn send_sysex(&mut self, message: &[u8]) -> Result<(), Self::Error>;

    /// Send a control change message
    fn send_control_change(
        &mut self,
        channel: MidiChannel,
        control: u8,
        value: u8,
    ) -> Result<(), Self::Error>;

    /// Flush any buffered data
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// MIDI input port
pub trait MidiIn {
    /// Error type for receive operations
    type Error;

    /// Read raw MIDI bytes into `buf`
    ///
    /// Returns the number of bytes read. Zero means nothing was pending.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;

    /// Read a single byte, if one is pending
    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        let mut buf = [0u8; 1];
        match self.read(&mut buf)? {
            0 => Ok(None),
            _ => Ok(Some(buf[0])),
        }
    }
}

/// MIDI output over a raw byte stream (serial DIN, USB CDC, pipes)
///
/// Messages are written as plain MIDI 1.0 bytes without running status.
pub struct SerialMidiOut<W> {
    writer: W,
}

impl<W: embedded_io::Write> SerialMidiOut<W> {
    /// Wrap a byte writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Give the underlying writer back
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: embedded_io::Write> MidiOut for SerialMidiOut<W> {
    type Error = W::Error;

    fn send_sysex(&mut self, message: &[u8]) -> Result<(), Self::Error> {
        self.writer.write_all(message)
    }

    fn send_control_change(
        &mut self,
        channel: MidiChannel,
        control: u8,
        value: u8,
    ) -> Result<(), Self::Error> {
        self.writer.write_all(&[
            STATUS_CONTROL_CHANGE | channel.index(),
            control & 0x7F,
            value & 0x7F,
        ])
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.writer.flush()
    }
}
