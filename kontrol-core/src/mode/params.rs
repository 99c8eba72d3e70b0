//! Parameter mode
//!
//! Binds the lanes to the cursor device's current parameter page. Knob
//! readback, display refresh and page/device navigation all go through
//! here.

use kontrol_protocol::ControlIndex;

use crate::error::KontrolError;
use crate::lanes::{
    BankStateReader, IndexMapper, NavigationControl, NavigationStateEncoder, Target,
};
use crate::refresh::{RefreshDriver, RefreshReport};
use crate::traits::{Configuration, CursorDevice, ParameterBank, Transport, ValueChanger};

/// Parameter mode over a cursor device
pub struct ParamsMode<D, V, C> {
    device: D,
    value_changer: V,
    configuration: C,
    mapper: IndexMapper,
}

impl<D, V, C> ParamsMode<D, V, C>
where
    D: CursorDevice,
    V: ValueChanger,
    C: Configuration,
{
    pub fn new(device: D, value_changer: V, configuration: C) -> Self {
        Self::with_mapper(device, value_changer, configuration, IndexMapper::default())
    }

    /// Create a mode resolving control indices with `mapper`
    pub fn with_mapper(device: D, value_changer: V, configuration: C, mapper: IndexMapper) -> Self {
        Self {
            device,
            value_changer,
            configuration,
            mapper,
        }
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    pub fn configuration(&self) -> &C {
        &self.configuration
    }

    /// Replace the configuration; takes effect on the next refresh
    pub fn set_configuration(&mut self, configuration: C) {
        self.configuration = configuration;
    }

    pub fn mapper(&self) -> &IndexMapper {
        &self.mapper
    }

    /// Current value of the control at `index`, in `0..=127`
    ///
    /// Unmapped indices and empty lanes read as zero.
    pub fn knob_value(&self, index: ControlIndex) -> Result<u8, KontrolError> {
        let value = match self.mapper.resolve(index) {
            Target::Knob { slot, .. } => {
                // Both knob rows show the same parameter
                BankStateReader::new(&self.device, &self.value_changer)
                    .parameter_value(slot)?
                    .unwrap_or(0)
            }
            Target::Navigation(control) => {
                let flip = self.configuration.is_flip_track_clip_navigation();
                let states = NavigationStateEncoder::new(&self.device).states(flip);
                match control {
                    NavigationControl::Tracks => states.tracks.value(),
                    NavigationControl::Banks => states.banks.value(),
                    NavigationControl::Clips => states.clips.value(),
                    NavigationControl::Scenes => states.scenes.value(),
                }
            }
            Target::Unmapped => 0,
        };
        Ok(value)
    }

    /// Refresh the surface display through `driver`
    pub fn update_display<T: Transport>(
        &self,
        driver: &mut RefreshDriver<T>,
    ) -> Result<RefreshReport, KontrolError> {
        driver.refresh(&self.device, &self.value_changer, &self.configuration)
    }

    /// Previous parameter page
    pub fn select_previous_item(&mut self) -> Result<(), KontrolError> {
        self.device.parameter_bank_mut().scroll_backwards()?;
        Ok(())
    }

    /// Next parameter page
    pub fn select_next_item(&mut self) -> Result<(), KontrolError> {
        self.device.parameter_bank_mut().scroll_forwards()?;
        Ok(())
    }

    /// Previous device in the chain
    pub fn select_previous_item_page(&mut self) -> Result<(), KontrolError> {
        self.device.select_previous()?;
        Ok(())
    }

    /// Next device in the chain
    pub fn select_next_item_page(&mut self) -> Result<(), KontrolError> {
        self.device.select_next()?;
        Ok(())
    }
}
