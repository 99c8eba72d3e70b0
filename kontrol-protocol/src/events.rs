//! Button events reported by the surface

/// Button state change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// Button went down
    Pressed,
    /// Button came back up
    Released,
}

impl ButtonEvent {
    /// Decode from a note/CC velocity (non-zero means pressed)
    pub fn from_velocity(velocity: u8) -> Self {
        if velocity == 0 {
            ButtonEvent::Released
        } else {
            ButtonEvent::Pressed
        }
    }

    /// Velocity the surface uses for this event
    pub fn to_velocity(self) -> u8 {
        match self {
            ButtonEvent::Pressed => 127,
            ButtonEvent::Released => 0,
        }
    }

    /// Returns true for [`ButtonEvent::Pressed`]
    pub fn is_pressed(&self) -> bool {
        matches!(self, ButtonEvent::Pressed)
    }
}
