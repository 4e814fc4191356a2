//! Form-control identity and state snapshots.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a logical form control.
///
/// Every input rendered for the same control shares this id as its group
/// name. Ids are externally assigned; [`FormControlId::unique`] generates a
/// fresh one for hosts that do not manage their own id space.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormControlId(String);

impl FormControlId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a random (UUIDv4-backed) id.
    pub fn unique() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FormControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FormControlId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for FormControlId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Immutable snapshot of a single form control.
///
/// Snapshots are owned by the state container and replaced wholesale on
/// every change; nothing in this crate mutates one in place. `with_value`
/// and `with_id` build the replacement snapshots the container feeds back
/// into bound controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormControlState<V> {
    pub id: FormControlId,
    pub value: V,
}

impl<V> FormControlState<V> {
    pub fn new(id: impl Into<FormControlId>, value: V) -> Self {
        Self {
            id: id.into(),
            value,
        }
    }

    /// New snapshot with the same id and a different value.
    pub fn with_value(&self, value: V) -> Self {
        Self {
            id: self.id.clone(),
            value,
        }
    }

    /// New snapshot with the same value and a different id.
    pub fn with_id(&self, id: impl Into<FormControlId>) -> Self
    where
        V: Clone,
    {
        Self {
            id: id.into(),
            value: self.value.clone(),
        }
    }
}
