pub mod actions;
pub mod bus;
pub mod controls;
pub mod event;
pub mod state;

pub use actions::FormAction;
pub use bus::{ActionBus, ActionStream, BusError};
pub use controls::{ControlEvents, EventResult, RadioGroup, RadioInput};
pub use event::{Key, Modifiers};
pub use state::{FormControlId, FormControlState};
