//! Tri-state field for partial updates: absent from the payload, sent as `null`, or sent with a value.

use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    Absent,
    Null,
    Value(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Absent
    }
}

impl<T> Patch<T> {
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Patch<U> {
        match self {
            Patch::Absent => Patch::Absent,
            Patch::Null => Patch::Null,
            Patch::Value(v) => Patch::Value(f(v)),
        }
    }

    /// Column assignment for a nullable column: `(overwrite, value)`. `Null` overwrites with NULL.
    pub fn into_nullable(self) -> (bool, Option<T>) {
        match self {
            Patch::Absent => (false, None),
            Patch::Null => (true, None),
            Patch::Value(v) => (true, Some(v)),
        }
    }

    /// Column assignment for a NOT NULL column. `Null` is rejected before this point and leaves
    /// the column untouched.
    pub fn into_required(self) -> (bool, Option<T>) {
        match self {
            Patch::Value(v) => (true, Some(v)),
            Patch::Absent | Patch::Null => (false, None),
        }
    }
}

/// Only called when the key is present; missing keys fall back to `Default` (`Absent`) via `#[serde(default)]`.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<T>::deserialize(deserializer)? {
            None => Patch::Null,
            Some(v) => Patch::Value(v),
        })
    }
}
