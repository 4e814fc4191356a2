//! Radio group rendering.

use std::fmt::Display;

use super::RadioGroup;

/// One rendered radio input.
///
/// `name` groups the inputs belonging to one control; at most one input in
/// a group is checked.
#[derive(Debug, Clone, PartialEq)]
pub struct RadioInput<V> {
    pub name: String,
    pub value: V,
    pub checked: bool,
}

/// Render one input per option, in order.
///
/// Checked flags are recomputed from snapshot equality on every pass: the
/// first option equal to the control value is checked, every other input is
/// not.
pub fn render_inputs<V: Clone + PartialEq>(
    name: &str,
    options: &[V],
    value: &V,
) -> Vec<RadioInput<V>> {
    let checked = options.iter().position(|o| o == value);
    options
        .iter()
        .enumerate()
        .map(|(idx, option)| RadioInput {
            name: name.to_string(),
            value: option.clone(),
            checked: checked == Some(idx),
        })
        .collect()
}

impl<V: Clone + PartialEq> RadioGroup<V> {
    /// Render the group as view nodes for the host renderer.
    pub fn view(&self) -> Vec<RadioInput<V>> {
        let state = self.state();
        render_inputs(state.id.as_str(), &self.options(), &state.value)
    }
}

impl<V: Clone + PartialEq + Display> RadioGroup<V> {
    /// Render the group as indicator-prefixed lines for terminal display.
    pub fn render_lines(&self) -> Vec<String> {
        let checked_char = self.checked_char();
        let unchecked_char = self.unchecked_char();

        self.view()
            .into_iter()
            .map(|input| {
                let indicator = if input.checked {
                    checked_char
                } else {
                    unchecked_char
                };
                format!("{} {}", indicator, input.value)
            })
            .collect()
    }
}
