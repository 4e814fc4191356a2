//! Event handling for the radio group binder.

use crate::controls::events::{ControlEvents, EventResult};
use crate::event::{Key, Modifiers};

use super::RadioGroup;

impl<V: Clone + PartialEq> ControlEvents for RadioGroup<V> {
    fn on_click(&self, index: usize) -> EventResult {
        if index >= self.len() {
            return EventResult::Ignored;
        }

        self.select(index);
        EventResult::Consumed
    }

    fn on_key(&self, key: Key, modifiers: Modifiers) -> EventResult {
        // Only handle keys without modifiers
        if !modifiers.none() {
            return EventResult::Ignored;
        }

        let len = self.len();
        if len == 0 {
            return EventResult::Ignored;
        }

        match key {
            Key::Char(' ') | Key::Enter => {
                // Space/Enter confirms the checked option (no-op)
                EventResult::Consumed
            }
            Key::Up | Key::Char('k') => {
                // Move selection up (with wrap)
                let current = self.checked_index().unwrap_or(0);
                let next = if current == 0 { len - 1 } else { current - 1 };
                self.select(next);
                EventResult::Consumed
            }
            Key::Down | Key::Char('j') => {
                // Move selection down (with wrap)
                let current = self.checked_index().unwrap_or(0);
                let next = if current + 1 >= len { 0 } else { current + 1 };
                self.select(next);
                EventResult::Consumed
            }
            Key::Home => {
                // Select first option
                self.select(0);
                EventResult::Consumed
            }
            Key::End => {
                // Select last option
                self.select(len - 1);
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }
}
