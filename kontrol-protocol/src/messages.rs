//! Display frames for the lane display protocol
//!
//! A [`DisplayFrame`] is one attribute of one lane (or the aggregate VU
//! block). Each frame encodes to exactly one [`SysExFrame`].

use crate::frame::{FrameError, SysExFrame};
use crate::layout::LANE_COUNT;
use heapless::{String, Vec};

// Frame kind command tags
pub const CMD_TRACK_AVAILABLE: u8 = 0x40;
pub const CMD_TRACK_SELECTED: u8 = 0x42;
pub const CMD_TRACK_RECARM: u8 = 0x45;
pub const CMD_TRACK_VOLUME_TEXT: u8 = 0x46;
pub const CMD_TRACK_PAN_TEXT: u8 = 0x47;
pub const CMD_TRACK_NAME: u8 = 0x48;
pub const CMD_TRACK_VU: u8 = 0x49;

/// VALUE byte of a VU frame: levels are sent as stereo pairs
pub const VU_STEREO_PAIRS: u8 = 2;

/// Character capacity of a text payload
pub const TEXT_CAPACITY: usize = 96;

/// Number of level values in a VU frame
pub const VU_LEVEL_COUNT: usize = 2 * LANE_COUNT;

/// Text payload of a lane frame
pub type LaneText = String<TEXT_CAPACITY>;

/// VU payload: two values per lane (left, right)
pub type VuLevels = [u8; VU_LEVEL_COUNT];

/// Replacement for characters the surface font cannot show
const UNPRINTABLE: u8 = b'?';

/// Kind of a display frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameKind {
    /// Lane exists, with its content type
    LaneAvailable,
    /// Lane selection state (0/1)
    LaneSelected,
    /// Lane record-arm state (0/1)
    LaneRecordArmed,
    /// Upper value text row
    LaneValueText,
    /// Lower value text row
    LanePanText,
    /// Lane name (line-break separated parts)
    LaneName,
    /// Levels of all lanes
    VuLevels,
}

impl FrameKind {
    /// Wire command tag
    pub const fn command(self) -> u8 {
        match self {
            FrameKind::LaneAvailable => CMD_TRACK_AVAILABLE,
            FrameKind::LaneSelected => CMD_TRACK_SELECTED,
            FrameKind::LaneRecordArmed => CMD_TRACK_RECARM,
            FrameKind::LaneValueText => CMD_TRACK_VOLUME_TEXT,
            FrameKind::LanePanText => CMD_TRACK_PAN_TEXT,
            FrameKind::LaneName => CMD_TRACK_NAME,
            FrameKind::VuLevels => CMD_TRACK_VU,
        }
    }

    /// Parse a kind from its wire command tag
    pub fn from_command(command: u8) -> Option<Self> {
        match command {
            CMD_TRACK_AVAILABLE => Some(FrameKind::LaneAvailable),
            CMD_TRACK_SELECTED => Some(FrameKind::LaneSelected),
            CMD_TRACK_RECARM => Some(FrameKind::LaneRecordArmed),
            CMD_TRACK_VOLUME_TEXT => Some(FrameKind::LaneValueText),
            CMD_TRACK_PAN_TEXT => Some(FrameKind::LanePanText),
            CMD_TRACK_NAME => Some(FrameKind::LaneName),
            CMD_TRACK_VU => Some(FrameKind::VuLevels),
            _ => None,
        }
    }
}

/// Content type marker sent with [`FrameKind::LaneAvailable`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LaneType {
    Empty,
    Generic,
    Midi,
    Audio,
    Group,
    Bus,
    Master,
}

impl LaneType {
    /// Convert to wire format byte
    pub const fn to_byte(self) -> u8 {
        match self {
            LaneType::Empty => 0,
            LaneType::Generic => 1,
            LaneType::Midi => 2,
            LaneType::Audio => 3,
            LaneType::Group => 4,
            LaneType::Bus => 5,
            LaneType::Master => 6,
        }
    }
}

/// Payload of a display frame
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FramePayload {
    /// Scalar value (available, selected, record-armed)
    Value(u8),
    /// Text (value rows, name)
    Text(LaneText),
    /// Stereo-pair levels of all lanes
    Levels(VuLevels),
}

/// One unit of outgoing display data
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayFrame {
    /// Frame kind
    pub kind: FrameKind,
    /// Lane index (0 for [`FrameKind::VuLevels`])
    pub lane: u8,
    /// Payload
    pub payload: FramePayload,
}

impl DisplayFrame {
    /// Lane exists with the given content type
    pub fn available(lane: u8, lane_type: LaneType) -> Self {
        Self::scalar(FrameKind::LaneAvailable, lane, lane_type.to_byte())
    }

    /// Lane selection state
    pub fn selected(lane: u8, selected: bool) -> Self {
        Self::scalar(FrameKind::LaneSelected, lane, selected as u8)
    }

    /// Lane record-arm state
    pub fn record_armed(lane: u8, armed: bool) -> Self {
        Self::scalar(FrameKind::LaneRecordArmed, lane, armed as u8)
    }

    /// Upper value text row
    pub fn value_text(lane: u8, text: &str) -> Self {
        Self::text(FrameKind::LaneValueText, lane, text)
    }

    /// Lower value text row
    pub fn pan_text(lane: u8, text: &str) -> Self {
        Self::text(FrameKind::LanePanText, lane, text)
    }

    /// Lane name
    pub fn name(lane: u8, text: &str) -> Self {
        Self::text(FrameKind::LaneName, lane, text)
    }

    /// Levels of all lanes, two values per lane
    pub fn vu_levels(levels: VuLevels) -> Self {
        Self {
            kind: FrameKind::VuLevels,
            lane: 0,
            payload: FramePayload::Levels(levels),
        }
    }

    fn scalar(kind: FrameKind, lane: u8, value: u8) -> Self {
        Self {
            kind,
            lane,
            payload: FramePayload::Value(value),
        }
    }

    /// Text is truncated at [`TEXT_CAPACITY`] bytes, on a character boundary
    fn text(kind: FrameKind, lane: u8, text: &str) -> Self {
        let mut buf = LaneText::new();
        for c in text.chars() {
            if buf.push(c).is_err() {
                break;
            }
        }
        Self {
            kind,
            lane,
            payload: FramePayload::Text(buf),
        }
    }

    /// Text payload, if this is a text frame
    pub fn text_payload(&self) -> Option<&str> {
        match &self.payload {
            FramePayload::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Encode this frame into a SysEx frame
    pub fn to_frame(&self) -> Result<SysExFrame, FrameError> {
        let command = self.kind.command();
        match &self.payload {
            FramePayload::Value(value) => Ok(SysExFrame::scalar(command, *value, self.lane)),
            FramePayload::Text(text) => {
                // Payload: [chars...], value byte unused
                let mut data = Vec::<u8, TEXT_CAPACITY>::new();
                for c in text.chars() {
                    data.push(to_surface_char(c))
                        .map_err(|_| FrameError::PayloadTooLarge)?;
                }
                SysExFrame::new(command, 0, self.lane, &data)
            }
            FramePayload::Levels(levels) => {
                SysExFrame::new(command, VU_STEREO_PAIRS, self.lane, levels)
            }
        }
    }
}

/// Map a character onto the surface's 7-bit character set
fn to_surface_char(c: char) -> u8 {
    match c {
        '\n' => b'\n',
        ' '..='~' => c as u8,
        _ => UNPRINTABLE,
    }
}
