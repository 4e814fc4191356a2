//! Radio group binder state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use log::debug;

use crate::actions::FormAction;
use crate::bus::ActionBus;
use crate::state::{FormControlId, FormControlState};

/// Internal state shared by clones of a [`RadioGroup`].
#[derive(Debug)]
struct RadioInner<V> {
    /// Latest snapshot supplied by the state container
    state: FormControlState<V>,
    /// Option values, position-tracked
    options: Vec<V>,
    /// Character to display when checked
    checked_char: char,
    /// Character to display when not checked
    unchecked_char: char,
}

/// A radio group bound to an external form control.
///
/// The binder renders one input per option, every input carrying the control
/// id as its group name, with the input whose value equals the snapshot
/// value checked. It never changes its own rendered state: user interaction
/// dispatches a [`FormAction::SetValue`] onto the bus, and the checked flags
/// move once the state container feeds an updated snapshot back through
/// [`set_state`](RadioGroup::set_state).
///
/// # Example
///
/// ```ignore
/// let bus = ActionBus::new();
/// let theme = RadioGroup::new(FormControlState::new("theme", "dark".to_string()), &bus)
///     .with_options(vec!["light".to_string(), "dark".to_string()]);
///
/// theme.select(0); // dispatches SetValue { control_id: "theme", value: "light" }
/// ```
#[derive(Debug)]
pub struct RadioGroup<V> {
    /// Internal state
    inner: Arc<RwLock<RadioInner<V>>>,
    /// Bus receiving dispatched actions
    bus: ActionBus<V>,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
}

impl<V: Clone + PartialEq> RadioGroup<V> {
    /// Bind a new radio group to `state`, dispatching onto `bus`.
    pub fn new(state: FormControlState<V>, bus: &ActionBus<V>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(RadioInner {
                state,
                options: Vec::new(),
                checked_char: '◉',
                unchecked_char: '◯',
            })),
            bus: bus.clone(),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Set the option list during construction.
    pub fn with_options(self, options: Vec<V>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.options = options;
        }
        self
    }

    /// Set custom indicator characters.
    pub fn with_indicators(self, checked: char, unchecked: char) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.checked_char = checked;
            guard.unchecked_char = unchecked;
        }
        self
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Latest control snapshot.
    pub fn state(&self) -> FormControlState<V> {
        self.inner
            .read()
            .map(|guard| guard.state.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().state.clone())
    }

    /// Id of the bound control.
    pub fn control_id(&self) -> FormControlId {
        self.inner
            .read()
            .map(|guard| guard.state.id.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().state.id.clone())
    }

    /// Option values, in render order.
    pub fn options(&self) -> Vec<V> {
        self.inner
            .read()
            .map(|guard| guard.options.clone())
            .unwrap_or_default()
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.inner
            .read()
            .map(|guard| guard.options.len())
            .unwrap_or(0)
    }

    /// Check if there are no options.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Position of the checked input, if any option matches the snapshot
    /// value. With duplicate values the first match wins, keeping at most
    /// one input checked.
    pub fn checked_index(&self) -> Option<usize> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.options.iter().position(|o| *o == guard.state.value))
    }

    /// Check whether the input at `index` is checked.
    pub fn is_checked(&self, index: usize) -> bool {
        self.checked_index() == Some(index)
    }

    /// Indicator character for the checked input.
    pub fn checked_char(&self) -> char {
        self.inner
            .read()
            .map(|guard| guard.checked_char)
            .unwrap_or('◉')
    }

    /// Indicator character for unchecked inputs.
    pub fn unchecked_char(&self) -> char {
        self.inner
            .read()
            .map(|guard| guard.unchecked_char)
            .unwrap_or('◯')
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Replace the control snapshot.
    ///
    /// Programmatic replacement never dispatches; it only moves the checked
    /// flags on the next render.
    pub fn set_state(&self, state: FormControlState<V>) {
        if let Ok(mut guard) = self.inner.write() {
            if guard.state != state {
                guard.state = state;
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    /// Replace the option list.
    ///
    /// Options are tracked by position: if the position that was checked now
    /// holds a different value, that is a value edit of the selected option,
    /// and one `SetValue` carrying the edited value is dispatched. Removing
    /// the checked position dispatches nothing.
    pub fn set_options(&self, options: Vec<V>) {
        let edited = match self.inner.write() {
            Ok(mut guard) => {
                let checked = guard.options.iter().position(|o| *o == guard.state.value);
                let edited = checked
                    .and_then(|idx| options.get(idx))
                    .filter(|value| **value != guard.state.value)
                    .cloned();
                guard.options = options;
                self.dirty.store(true, Ordering::SeqCst);
                edited
            }
            Err(_) => None,
        };

        if let Some(value) = edited {
            debug!("checked option edited for {}", self.control_id());
            self.dispatch_value(value);
        }
    }

    /// Edit a single option value in place.
    pub fn set_option(&self, index: usize, value: V) {
        let mut options = self.options();
        if index < options.len() {
            options[index] = value;
            self.set_options(options);
        }
    }

    // -------------------------------------------------------------------------
    // User interaction
    // -------------------------------------------------------------------------

    /// User selection of the input at `index`.
    ///
    /// Dispatches exactly one `SetValue` carrying that option's value and
    /// returns `true`. The checked input produces no change event, so
    /// selecting it again dispatches nothing, as does an out-of-range index.
    pub fn select(&self, index: usize) -> bool {
        let value = self.inner.read().ok().and_then(|guard| {
            guard
                .options
                .get(index)
                .filter(|value| **value != guard.state.value)
                .cloned()
        });

        match value {
            Some(value) => {
                self.dispatch_value(value);
                true
            }
            None => false,
        }
    }

    fn dispatch_value(&self, value: V) {
        self.bus
            .dispatch(FormAction::set_value(self.control_id(), value));
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the group needs a re-render.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl<V> Clone for RadioGroup<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            bus: self.bus.clone(),
            dirty: Arc::clone(&self.dirty),
        }
    }
}
