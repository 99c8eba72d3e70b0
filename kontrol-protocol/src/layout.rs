//! Control index layout
//!
//! The surface reports knobs and navigation controls as control-change
//! numbers. There are more numbers than lanes, so the number encodes both
//! *which attribute* and *which lane*:
//!
//! ```text
//! 0x30 NAVIGATE_TRACKS   0x31 NAVIGATE_BANKS
//! 0x32 NAVIGATE_CLIPS    0x33 NAVIGATE_SCENES
//! 0x50..0x58  volume knob, lanes 0-7
//! 0x58..0x60  pan knob,    lanes 0-7
//! ```
//!
//! The firmware expects these boundaries verbatim.

/// Number of physical lanes on the surface
pub const LANE_COUNT: usize = 8;

/// Largest value of a 7-bit MIDI data byte
pub const MIDI_MAX: u8 = 127;

/// Width of the per-lane value text, in characters
pub const VALUE_TEXT_WIDTH: usize = 8;

/// Raw control-change number reported by the surface
pub type ControlIndex = u8;

// Control index constants
pub const KNOB_VOLUME: ControlIndex = 0x50;
pub const KNOB_PAN: ControlIndex = 0x58;
pub const NAVIGATE_TRACKS: ControlIndex = 0x30;
pub const NAVIGATE_BANKS: ControlIndex = 0x31;
pub const NAVIGATE_CLIPS: ControlIndex = 0x32;
pub const NAVIGATE_SCENES: ControlIndex = 0x33;

/// Partition of the control index space
///
/// Two windows of `lane_count` consecutive indices plus four navigation
/// singletons. A valid layout keeps all of them disjoint; see
/// [`ControlLayout::is_disjoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlLayout {
    /// First index of the volume window
    pub volume_base: ControlIndex,
    /// First index of the pan window
    pub pan_base: ControlIndex,
    /// Navigation singleton: banks (device) arrows
    pub navigate_banks: ControlIndex,
    /// Navigation singleton: track arrows
    pub navigate_tracks: ControlIndex,
    /// Navigation singleton: clip arrows
    pub navigate_clips: ControlIndex,
    /// Navigation singleton: scene arrows
    pub navigate_scenes: ControlIndex,
    /// Width of each knob window
    pub lane_count: u8,
}

/// The layout spoken by the keyboard firmware
pub const KONTROL_LAYOUT: ControlLayout = ControlLayout {
    volume_base: KNOB_VOLUME,
    pan_base: KNOB_PAN,
    navigate_banks: NAVIGATE_BANKS,
    navigate_tracks: NAVIGATE_TRACKS,
    navigate_clips: NAVIGATE_CLIPS,
    navigate_scenes: NAVIGATE_SCENES,
    lane_count: LANE_COUNT as u8,
};

const _: () = assert!(KONTROL_LAYOUT.is_disjoint());

impl ControlLayout {
    /// Slot of `index` inside the window starting at `base`, if any
    ///
    /// Computed in `u16` so windows near the top of the range cannot wrap.
    pub const fn window_slot(&self, base: ControlIndex, index: ControlIndex) -> Option<u8> {
        let end = base as u16 + self.lane_count as u16;
        if index >= base && (index as u16) < end {
            Some(index - base)
        } else {
            None
        }
    }

    /// The four navigation indices in wire order (tracks, banks, clips, scenes)
    pub const fn navigation_indices(&self) -> [ControlIndex; 4] {
        [
            self.navigate_tracks,
            self.navigate_banks,
            self.navigate_clips,
            self.navigate_scenes,
        ]
    }

    /// Check that no index belongs to more than one window or singleton
    pub const fn is_disjoint(&self) -> bool {
        let n = self.lane_count as u16;
        let volume = self.volume_base as u16;
        let pan = self.pan_base as u16;

        // Two half-open windows overlap iff each starts before the other ends
        if n > 0 && volume < pan + n && pan < volume + n {
            return false;
        }

        let singles = self.navigation_indices();
        let mut i = 0;
        while i < singles.len() {
            if self.window_slot(self.volume_base, singles[i]).is_some()
                || self.window_slot(self.pan_base, singles[i]).is_some()
            {
                return false;
            }
            let mut j = i + 1;
            while j < singles.len() {
                if singles[i] == singles[j] {
                    return false;
                }
                j += 1;
            }
            i += 1;
        }
        true
    }
}
