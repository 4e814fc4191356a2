//! Control event handling types and traits.
//!
//! Controls implement [`ControlEvents`] to translate user interaction into
//! actions, keeping the host's event loop a thin dispatcher.

use crate::event::{Key, Modifiers};

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    /// Check if the event was consumed.
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}

/// Trait for controls that can handle events.
///
/// The host resolves raw input to a target control (hit testing, focus) and
/// calls these methods. Handling an event never mutates the control's
/// rendered state directly; it dispatches actions for the state container
/// to reduce.
///
/// # Default Implementations
///
/// All methods default to `EventResult::Ignored`, so controls only need to
/// implement the events they care about.
pub trait ControlEvents {
    /// Handle a click on the input at `index`.
    fn on_click(&self, _index: usize) -> EventResult {
        EventResult::Ignored
    }

    /// Handle a key press while this control is focused.
    fn on_key(&self, _key: Key, _modifiers: Modifiers) -> EventResult {
        EventResult::Ignored
    }
}
