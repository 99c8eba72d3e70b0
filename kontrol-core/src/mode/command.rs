//! Mode button dispatch

use kontrol_protocol::ButtonEvent;

use crate::error::KontrolError;
use crate::traits::ModeSwitcher;

/// Surface modes a button can select
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    Volume,
    Pan,
    Mute,
    Solo,
    RecArm,
    Parameters,
    Device,
}

/// A mode button bound to its mode and label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeButtonCommand {
    mode: Mode,
    label: &'static str,
}

impl ModeButtonCommand {
    pub const fn new(mode: Mode, label: &'static str) -> Self {
        Self { mode, label }
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    pub const fn label(&self) -> &'static str {
        self.label
    }

    /// Forward a button event to the mode switcher
    ///
    /// The velocity carries no meaning for mode buttons and is dropped.
    pub fn execute<S: ModeSwitcher>(
        &self,
        event: ButtonEvent,
        _velocity: u8,
        switcher: &mut S,
    ) -> Result<(), KontrolError> {
        #[cfg(feature = "defmt")]
        defmt::trace!("mode button {} -> {}", event, self.mode);

        switcher.on_mode_button(event, self.mode, self.label)?;
        Ok(())
    }
}
