//! Display frame sequencing
//!
//! Turns one refresh worth of lane state into the ordered frame sequence
//! the surface expects:
//!
//! ```text
//! lane 0: available, selected, rec-arm, value text, pan text, name
//! lane 1: ...
//! lane 7: ...
//! levels (all lanes, last)
//! ```
//!
//! The sequence length never depends on the bank: lanes the caller does
//! not supply are sent as missing lanes.

use heapless::Vec;
use kontrol_protocol::messages::VU_LEVEL_COUNT;
use kontrol_protocol::{DisplayFrame, LaneType, VuLevels, LANE_COUNT};

use super::LaneState;

/// Frames emitted per lane
pub const FRAMES_PER_LANE: usize = 6;

/// Frames emitted per refresh
pub const FRAMES_PER_REFRESH: usize = FRAMES_PER_LANE * LANE_COUNT + 1;

/// A complete refresh, in wire order
pub type FrameSequence = Vec<DisplayFrame, FRAMES_PER_REFRESH>;

/// Encode lane states into display frames
///
/// Only the first [`LANE_COUNT`] entries of `lanes` are used.
pub fn encode_lanes(lanes: &[LaneState]) -> DisplayFrames<'_> {
    DisplayFrames::new(lanes)
}

/// Collect the frames of one refresh
pub fn build_frames(lanes: &[LaneState]) -> FrameSequence {
    let mut frames = FrameSequence::new();
    for frame in encode_lanes(lanes) {
        // The encoder yields exactly FRAMES_PER_REFRESH frames
        let _ = frames.push(frame);
    }
    frames
}

/// Iterator over the frames of one refresh
pub struct DisplayFrames<'a> {
    lanes: &'a [LaneState],
    placeholder: LaneState,
    state: EncoderState,
    emitted: usize,
}

#[derive(Clone, Copy)]
enum EncoderState {
    Lane { lane: u8, step: LaneStep },
    Levels,
    Done,
}

#[derive(Clone, Copy)]
enum LaneStep {
    Available,
    Selected,
    RecordArmed,
    ValueText,
    PanText,
    Name,
}

impl<'a> DisplayFrames<'a> {
    fn new(lanes: &'a [LaneState]) -> Self {
        Self {
            lanes,
            placeholder: LaneState::missing(),
            state: EncoderState::Lane {
                lane: 0,
                step: LaneStep::Available,
            },
            emitted: 0,
        }
    }

    fn lane(&self, lane: u8) -> &LaneState {
        self.lanes.get(lane as usize).unwrap_or(&self.placeholder)
    }

    fn levels(&self) -> VuLevels {
        let mut levels = [0u8; VU_LEVEL_COUNT];
        for lane in 0..LANE_COUNT {
            let level = self.lane(lane as u8).level;
            // Mono source on both channels of the stereo pair
            levels[2 * lane] = level;
            levels[2 * lane + 1] = level;
        }
        levels
    }

    fn lane_frame(&self, lane: u8, step: LaneStep) -> DisplayFrame {
        let state = self.lane(lane);
        match step {
            LaneStep::Available => DisplayFrame::available(lane, LaneType::Generic),
            LaneStep::Selected => DisplayFrame::selected(lane, state.selected),
            LaneStep::RecordArmed => DisplayFrame::record_armed(lane, false),
            LaneStep::ValueText => DisplayFrame::value_text(lane, &state.value_text),
            LaneStep::PanText => DisplayFrame::pan_text(lane, &state.value_text),
            LaneStep::Name => DisplayFrame::name(lane, &state.name),
        }
    }
}

impl LaneStep {
    fn next(self) -> Option<Self> {
        match self {
            LaneStep::Available => Some(LaneStep::Selected),
            LaneStep::Selected => Some(LaneStep::RecordArmed),
            LaneStep::RecordArmed => Some(LaneStep::ValueText),
            LaneStep::ValueText => Some(LaneStep::PanText),
            LaneStep::PanText => Some(LaneStep::Name),
            LaneStep::Name => None,
        }
    }
}

impl<'a> Iterator for DisplayFrames<'a> {
    type Item = DisplayFrame;

    fn next(&mut self) -> Option<Self::Item> {
        let frame = match self.state {
            EncoderState::Lane { lane, step } => {
                let frame = self.lane_frame(lane, step);
                self.state = match step.next() {
                    Some(step) => EncoderState::Lane { lane, step },
                    None if (lane as usize) + 1 < LANE_COUNT => EncoderState::Lane {
                        lane: lane + 1,
                        step: LaneStep::Available,
                    },
                    None => EncoderState::Levels,
                };
                frame
            }
            EncoderState::Levels => {
                self.state = EncoderState::Done;
                DisplayFrame::vu_levels(self.levels())
            }
            EncoderState::Done => return None,
        };
        self.emitted += 1;
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = FRAMES_PER_REFRESH - self.emitted;
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for DisplayFrames<'a> {}
