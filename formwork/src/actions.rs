//! Typed state-change actions dispatched by bound controls.

use serde::{Deserialize, Serialize};

use crate::state::FormControlId;

/// Action produced when a control's value should change.
///
/// Actions serialize with a `type` discriminant and a `payload` object, the
/// shape store-side reducers consume:
/// `{"type":"SetValue","payload":{"controlId":"...","value":...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum FormAction<V> {
    /// Replace the value of the control identified by `control_id`.
    #[serde(rename_all = "camelCase")]
    SetValue {
        control_id: FormControlId,
        value: V,
    },
}

impl<V> FormAction<V> {
    /// Discriminant of [`FormAction::SetValue`].
    pub const SET_VALUE: &'static str = "SetValue";

    pub fn set_value(control_id: impl Into<FormControlId>, value: V) -> Self {
        Self::SetValue {
            control_id: control_id.into(),
            value,
        }
    }

    /// The action's `type` discriminant.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SetValue { .. } => Self::SET_VALUE,
        }
    }

    /// Id of the control this action targets.
    pub fn control_id(&self) -> &FormControlId {
        match self {
            Self::SetValue { control_id, .. } => control_id,
        }
    }
}
