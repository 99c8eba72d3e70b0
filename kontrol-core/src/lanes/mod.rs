//! Lane state translation
//!
//! Everything that turns the host's parameter bank into per-lane surface
//! state:
//!
//! ```text
//! control index ──► mapping ──► (slot, attribute) | navigation control
//! parameter bank ─► reader ───► LaneState × 8 ──► display ──► frames
//! bank scroll ────► navigation ► 2-bit states (flip applied at read time)
//! ```

pub mod display;
pub mod mapping;
pub mod navigation;
pub mod reader;

use kontrol_protocol::LANE_COUNT;

pub use display::{build_frames, encode_lanes, DisplayFrames, FrameSequence, FRAMES_PER_REFRESH};
pub use mapping::{IndexMapper, KnobAttribute, NavigationControl, Target};
pub use navigation::{
    apply_flip, NavigationGroup, NavigationState, NavigationStateEncoder, NavigationStates,
};
pub use reader::{BankStateReader, LaneState, LaneStates, ValueText, MISSING_NAME};

/// Index of a physical lane, always below [`LANE_COUNT`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LaneSlot(u8);

impl LaneSlot {
    /// Create a slot, or `None` if `index` is not a lane
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < LANE_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Lane index
    pub const fn index(self) -> u8 {
        self.0
    }

    /// All lanes, in surface order
    pub fn all() -> impl Iterator<Item = LaneSlot> {
        (0..LANE_COUNT as u8).map(LaneSlot)
    }
}
