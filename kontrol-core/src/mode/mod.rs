//! Surface modes
//!
//! - [`ParamsMode`]: shows the cursor device's parameter page on the lanes
//! - [`ModeButtonCommand`]: forwards a mode button to the host

mod command;
mod params;

pub use command::{Mode, ModeButtonCommand};
pub use params::ParamsMode;
