//! Control index resolution
//!
//! Maps a raw control index onto the lane attribute or navigation control
//! it addresses. Windows are tested in a fixed order (volume, pan, then
//! the navigation singletons); in a layout where windows overlap, the
//! first matching window wins.

use kontrol_protocol::{ControlIndex, ControlLayout, KONTROL_LAYOUT};

use super::LaneSlot;

/// Knob row a window index addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KnobAttribute {
    Volume,
    Pan,
}

/// Navigation controls of the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NavigationControl {
    Banks,
    Tracks,
    Clips,
    Scenes,
}

/// What a control index addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Target {
    /// One knob of one lane
    Knob {
        slot: LaneSlot,
        attribute: KnobAttribute,
    },
    /// A navigation control
    Navigation(NavigationControl),
    /// Not part of the layout; reads as zero
    Unmapped,
}

/// Resolves control indices against a [`ControlLayout`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexMapper {
    layout: ControlLayout,
}

impl Default for IndexMapper {
    fn default() -> Self {
        Self::new(KONTROL_LAYOUT)
    }
}

impl IndexMapper {
    /// Create a mapper for `layout`
    pub const fn new(layout: ControlLayout) -> Self {
        Self { layout }
    }

    /// Layout in use
    pub fn layout(&self) -> &ControlLayout {
        &self.layout
    }

    /// Resolve `index`; total, never fails
    pub fn resolve(&self, index: ControlIndex) -> Target {
        let layout = &self.layout;

        if let Some(slot) = Self::knob_slot(layout, layout.volume_base, index) {
            return Target::Knob {
                slot,
                attribute: KnobAttribute::Volume,
            };
        }

        if let Some(slot) = Self::knob_slot(layout, layout.pan_base, index) {
            return Target::Knob {
                slot,
                attribute: KnobAttribute::Pan,
            };
        }

        let control = if index == layout.navigate_banks {
            NavigationControl::Banks
        } else if index == layout.navigate_tracks {
            NavigationControl::Tracks
        } else if index == layout.navigate_clips {
            NavigationControl::Clips
        } else if index == layout.navigate_scenes {
            NavigationControl::Scenes
        } else {
            #[cfg(feature = "defmt")]
            defmt::debug!("unmapped control index {=u8}", index);
            return Target::Unmapped;
        };
        Target::Navigation(control)
    }

    /// Window slot, if it is also a physical lane
    fn knob_slot(layout: &ControlLayout, base: ControlIndex, index: ControlIndex) -> Option<LaneSlot> {
        layout.window_slot(base, index).and_then(LaneSlot::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kontrol_protocol::layout::{
        KNOB_PAN, KNOB_VOLUME, NAVIGATE_BANKS, NAVIGATE_CLIPS, NAVIGATE_SCENES, NAVIGATE_TRACKS,
    };
    use proptest::prelude::*;

    fn knob(slot: u8, attribute: KnobAttribute) -> Target {
        Target::Knob {
            slot: LaneSlot::new(slot).unwrap(),
            attribute,
        }
    }

    #[test]
    fn test_window_edges() {
        let mapper = IndexMapper::default();
        assert_eq!(mapper.resolve(0x50), knob(0, KnobAttribute::Volume));
        assert_eq!(mapper.resolve(0x57), knob(7, KnobAttribute::Volume));
        assert_eq!(mapper.resolve(0x58), knob(0, KnobAttribute::Pan));
        assert_eq!(mapper.resolve(0x5F), knob(7, KnobAttribute::Pan));
        assert_eq!(mapper.resolve(0x60), Target::Unmapped);
        assert_eq!(mapper.resolve(0x4F), Target::Unmapped);
    }

    #[test]
    fn test_navigation_singletons() {
        let mapper = IndexMapper::default();
        assert_eq!(
            mapper.resolve(NAVIGATE_BANKS),
            Target::Navigation(NavigationControl::Banks)
        );
        assert_eq!(
            mapper.resolve(NAVIGATE_TRACKS),
            Target::Navigation(NavigationControl::Tracks)
        );
        assert_eq!(
            mapper.resolve(NAVIGATE_CLIPS),
            Target::Navigation(NavigationControl::Clips)
        );
        assert_eq!(
            mapper.resolve(NAVIGATE_SCENES),
            Target::Navigation(NavigationControl::Scenes)
        );
    }

    #[test]
    fn test_overlapping_layout_first_window_wins() {
        // Pan window starts inside the volume window
        let layout = ControlLayout {
            pan_base: KNOB_VOLUME + 4,
            ..KONTROL_LAYOUT
        };
        let mapper = IndexMapper::new(layout);

        assert_eq!(mapper.resolve(KNOB_VOLUME + 5), knob(5, KnobAttribute::Volume));
        // Past the volume window the pan window takes over
        assert_eq!(mapper.resolve(KNOB_VOLUME + 9), knob(5, KnobAttribute::Pan));
    }

    #[test]
    fn test_singleton_inside_window_loses_to_window() {
        let layout = ControlLayout {
            navigate_scenes: KNOB_PAN + 1,
            ..KONTROL_LAYOUT
        };
        let mapper = IndexMapper::new(layout);
        assert_eq!(mapper.resolve(KNOB_PAN + 1), knob(1, KnobAttribute::Pan));
    }

    #[test]
    fn test_window_wider_than_surface_is_unmapped_past_last_lane() {
        let layout = ControlLayout {
            lane_count: 16,
            pan_base: 0x70,
            ..KONTROL_LAYOUT
        };
        let mapper = IndexMapper::new(layout);
        assert_eq!(mapper.resolve(KNOB_VOLUME + 7), knob(7, KnobAttribute::Volume));
        assert_eq!(mapper.resolve(KNOB_VOLUME + 8), Target::Unmapped);
    }

    proptest! {
        #[test]
        fn volume_window_yields_offset(offset in 0u8..8) {
            let mapper = IndexMapper::default();
            prop_assert_eq!(
                mapper.resolve(KNOB_VOLUME + offset),
                knob(offset, KnobAttribute::Volume)
            );
        }

        #[test]
        fn pan_window_yields_offset(offset in 0u8..8) {
            let mapper = IndexMapper::default();
            prop_assert_eq!(
                mapper.resolve(KNOB_PAN + offset),
                knob(offset, KnobAttribute::Pan)
            );
        }

        #[test]
        fn indices_outside_layout_are_unmapped(index in any::<u8>()) {
            prop_assume!(!(0x30..=0x33).contains(&index));
            prop_assume!(!(0x50..0x60).contains(&index));
            prop_assert_eq!(IndexMapper::default().resolve(index), Target::Unmapped);
        }
    }
}
