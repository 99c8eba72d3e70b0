//! SysEx frame encoding and decoding for the lane display protocol.
//!
//! Frame format:
//! - START (1 byte): 0xF0 System Exclusive status
//! - HEADER (9 bytes): vendor ID and device/protocol tag
//! - CMD (1 byte): frame kind tag
//! - VALUE (1 byte): scalar payload
//! - LANE (1 byte): lane index
//! - DATA (0-114 bytes): text characters or level values
//! - END (1 byte): 0xF7
//!
//! All bytes between START and END are 7-bit data bytes.

use heapless::Vec;

/// System Exclusive start byte
pub const SYSEX_START: u8 = 0xF0;

/// System Exclusive end byte
pub const SYSEX_END: u8 = 0xF7;

/// Vendor ID (00 21 09) followed by the surface protocol tag
pub const KONTROL_HEADER: [u8; 9] = [0x00, 0x21, 0x09, 0x00, 0x00, 0x44, 0x43, 0x01, 0x00];

/// Maximum complete frame size
pub const MAX_SYSEX_SIZE: usize = 128;

/// START + HEADER + CMD + VALUE + LANE + END
const FRAME_OVERHEAD: usize = 1 + KONTROL_HEADER.len() + 3 + 1;

/// Maximum data section size in bytes
pub const MAX_DATA_SIZE: usize = MAX_SYSEX_SIZE - FRAME_OVERHEAD;

/// Errors that can occur during frame parsing or encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Data section exceeds maximum allowed size
    PayloadTooLarge,
    /// Vendor/device header does not match
    InvalidHeader,
    /// Invalid frame structure
    InvalidFrame,
    /// Buffer too small for encoding
    BufferTooSmall,
}

/// A parsed or constructed SysEx frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SysExFrame {
    /// Frame kind tag
    pub command: u8,
    /// Scalar payload
    pub value: u8,
    /// Lane index
    pub lane: u8,
    /// Data section
    pub data: Vec<u8, MAX_DATA_SIZE>,
}

impl SysExFrame {
    /// Create a new frame, masking every byte to 7 bits
    pub fn new(command: u8, value: u8, lane: u8, data: &[u8]) -> Result<Self, FrameError> {
        if data.len() > MAX_DATA_SIZE {
            return Err(FrameError::PayloadTooLarge);
        }

        let mut masked = Vec::new();
        for &byte in data {
            masked
                .push(byte & 0x7F)
                .map_err(|_| FrameError::PayloadTooLarge)?;
        }

        Ok(Self {
            command: command & 0x7F,
            value: value & 0x7F,
            lane: lane & 0x7F,
            data: masked,
        })
    }

    /// Create a frame with an empty data section
    pub fn scalar(command: u8, value: u8, lane: u8) -> Self {
        Self {
            command: command & 0x7F,
            value: value & 0x7F,
            lane: lane & 0x7F,
            data: Vec::new(),
        }
    }

    /// Encoded size of this frame in bytes
    pub fn encoded_len(&self) -> usize {
        FRAME_OVERHEAD + self.data.len()
    }

    /// Encode this frame into a byte buffer
    ///
    /// Returns the number of bytes written
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, FrameError> {
        let frame_len = self.encoded_len();
        if buffer.len() < frame_len {
            return Err(FrameError::BufferTooSmall);
        }

        let header_end = 1 + KONTROL_HEADER.len();
        buffer[0] = SYSEX_START;
        buffer[1..header_end].copy_from_slice(&KONTROL_HEADER);
        buffer[header_end] = self.command & 0x7F;
        buffer[header_end + 1] = self.value & 0x7F;
        buffer[header_end + 2] = self.lane & 0x7F;

        let data_start = header_end + 3;
        for (dst, &src) in buffer[data_start..data_start + self.data.len()]
            .iter_mut()
            .zip(self.data.iter())
        {
            *dst = src & 0x7F;
        }
        buffer[frame_len - 1] = SYSEX_END;

        Ok(frame_len)
    }

    /// Encode this frame into a heapless Vec
    pub fn encode_to_vec(&self) -> Result<Vec<u8, MAX_SYSEX_SIZE>, FrameError> {
        let mut buffer = [0u8; MAX_SYSEX_SIZE];
        let len = self.encode(&mut buffer)?;
        let mut vec = Vec::new();
        vec.extend_from_slice(&buffer[..len])
            .map_err(|_| FrameError::BufferTooSmall)?;
        Ok(vec)
    }
}

/// State machine for parsing incoming SysEx frames
#[derive(Debug, Clone)]
pub struct SysExParser {
    state: ParseState,
    command: u8,
    value: u8,
    lane: u8,
    buffer: Vec<u8, MAX_DATA_SIZE>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    /// Waiting for START byte
    WaitingForStart,
    /// Matching header byte at this position
    Header(usize),
    /// Waiting for CMD
    WaitingForCommand,
    /// Waiting for VALUE
    WaitingForValue,
    /// Waiting for LANE
    WaitingForLane,
    /// Reading data bytes until END
    ReadingData,
}

impl Default for SysExParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SysExParser {
    /// Create a new frame parser
    pub fn new() -> Self {
        Self {
            state: ParseState::WaitingForStart,
            command: 0,
            value: 0,
            lane: 0,
            buffer: Vec::new(),
        }
    }

    /// Reset the parser state
    pub fn reset(&mut self) {
        self.state = ParseState::WaitingForStart;
        self.command = 0;
        self.value = 0;
        self.lane = 0;
        self.buffer.clear();
    }

    /// Feed a single byte to the parser
    ///
    /// Returns `Ok(Some(frame))` when a complete valid frame is parsed,
    /// `Ok(None)` when more bytes are needed, or `Err` on parse error.
    /// A START byte always begins a new frame, dropping any partial one.
    /// Real-time bytes (`0xF8..=0xFF`) may interleave anywhere and are skipped.
    pub fn feed(&mut self, byte: u8) -> Result<Option<SysExFrame>, FrameError> {
        if byte >= 0xF8 {
            return Ok(None);
        }
        if byte == SYSEX_START {
            self.reset();
            self.state = ParseState::Header(0);
            return Ok(None);
        }

        match self.state {
            ParseState::WaitingForStart => {
                // Silently ignore bytes between messages
                Ok(None)
            }
            ParseState::Header(pos) => {
                if byte != KONTROL_HEADER[pos] {
                    self.reset();
                    return Err(FrameError::InvalidHeader);
                }
                self.state = if pos + 1 == KONTROL_HEADER.len() {
                    ParseState::WaitingForCommand
                } else {
                    ParseState::Header(pos + 1)
                };
                Ok(None)
            }
            ParseState::WaitingForCommand => {
                self.command = self.data_byte(byte)?;
                self.state = ParseState::WaitingForValue;
                Ok(None)
            }
            ParseState::WaitingForValue => {
                self.value = self.data_byte(byte)?;
                self.state = ParseState::WaitingForLane;
                Ok(None)
            }
            ParseState::WaitingForLane => {
                self.lane = self.data_byte(byte)?;
                self.state = ParseState::ReadingData;
                Ok(None)
            }
            ParseState::ReadingData => {
                if byte == SYSEX_END {
                    let frame = SysExFrame {
                        command: self.command,
                        value: self.value,
                        lane: self.lane,
                        data: self.buffer.clone(),
                    };
                    self.reset();
                    return Ok(Some(frame));
                }
                let byte = self.data_byte(byte)?;
                if self.buffer.push(byte).is_err() {
                    self.reset();
                    return Err(FrameError::PayloadTooLarge);
                }
                Ok(None)
            }
        }
    }

    /// Feed multiple bytes to the parser
    ///
    /// Returns the first complete frame found, if any.
    /// Remaining bytes after a complete frame are not consumed.
    pub fn feed_bytes(&mut self, bytes: &[u8]) -> Result<Option<SysExFrame>, FrameError> {
        for &byte in bytes {
            if let Some(frame) = self.feed(byte)? {
                return Ok(Some(frame));
            }
        }
        Ok(None)
    }

    /// Accept a 7-bit data byte; anything else aborts the frame
    fn data_byte(&mut self, byte: u8) -> Result<u8, FrameError> {
        if byte & 0x80 != 0 {
            self.reset();
            return Err(FrameError::InvalidFrame);
        }
        Ok(byte)
    }
}
