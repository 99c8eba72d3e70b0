//! Navigation state packing
//!
//! Each navigation control reports whether it can move backwards and
//! forwards as a 2-bit value:
//!
//! ```text
//! bit 0: can move backwards
//! bit 1: can move forwards
//! ```

use kontrol_protocol::ControlLayout;

use crate::traits::{CursorDevice, ScrollableBank};

/// Packed navigation availability, `0..=3`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NavigationState(u8);

impl NavigationState {
    /// Nothing to navigate to
    pub const NONE: Self = Self(0);

    /// Pack the two availability flags
    pub const fn from_flags(backwards: bool, forwards: bool) -> Self {
        Self(backwards as u8 | (forwards as u8) << 1)
    }

    /// State of a scrollable bank
    pub fn of_bank<B: ScrollableBank + ?Sized>(bank: &B) -> Self {
        Self::from_flags(bank.can_scroll_backwards(), bank.can_scroll_forwards())
    }

    /// Wire value
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Whether backwards navigation is possible
    pub const fn can_go_backwards(self) -> bool {
        self.0 & 0b01 != 0
    }

    /// Whether forwards navigation is possible
    pub const fn can_go_forwards(self) -> bool {
        self.0 & 0b10 != 0
    }
}

/// Source bank of a navigation state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NavigationGroup {
    /// Parameter pages of the cursor device
    TrackOrParam,
    /// Sibling devices of the cursor device
    DeviceOrScene,
}

/// Swap the two groups when `flip` is set
///
/// Returns `(tracks, clips)`. Applying it twice with the same flag is the
/// identity.
pub const fn apply_flip(
    track: NavigationState,
    scene: NavigationState,
    flip: bool,
) -> (NavigationState, NavigationState) {
    if flip {
        (scene, track)
    } else {
        (track, scene)
    }
}

/// Navigation states of all four navigation controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NavigationStates {
    pub tracks: NavigationState,
    pub banks: NavigationState,
    pub clips: NavigationState,
    pub scenes: NavigationState,
}

impl NavigationStates {
    /// `(control index, value)` pairs in wire order
    pub fn control_values(&self, layout: &ControlLayout) -> [(u8, u8); 4] {
        let [tracks, banks, clips, scenes] = layout.navigation_indices();
        [
            (tracks, self.tracks.value()),
            (banks, self.banks.value()),
            (clips, self.clips.value()),
            (scenes, self.scenes.value()),
        ]
    }
}

/// Computes navigation states from the cursor device
pub struct NavigationStateEncoder<'a, D> {
    device: &'a D,
}

impl<'a, D: CursorDevice> NavigationStateEncoder<'a, D> {
    pub fn new(device: &'a D) -> Self {
        Self { device }
    }

    /// Raw state of one group, before flipping
    pub fn encode(&self, group: NavigationGroup) -> NavigationState {
        match group {
            NavigationGroup::TrackOrParam => NavigationState::of_bank(self.device.parameter_bank()),
            NavigationGroup::DeviceOrScene => NavigationState::of_bank(self.device.device_bank()),
        }
    }

    /// Previous/next device availability
    pub fn banks(&self) -> NavigationState {
        NavigationState::from_flags(
            self.device.can_select_previous_fx(),
            self.device.can_select_next_fx(),
        )
    }

    /// All four states, with the flip policy applied
    ///
    /// Scenes have no source in this mode and always read as zero.
    pub fn states(&self, flip: bool) -> NavigationStates {
        let (tracks, clips) = apply_flip(
            self.encode(NavigationGroup::TrackOrParam),
            self.encode(NavigationGroup::DeviceOrScene),
            flip,
        );
        NavigationStates {
            tracks,
            banks: self.banks(),
            clips,
            scenes: NavigationState::NONE,
        }
    }
}
